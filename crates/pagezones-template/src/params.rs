//! Segmentation parameters
//!
//! The template set together with the tuning knobs handed unchanged to
//! the detector.

use crate::error::{TemplateError, TemplateResult};
use crate::set::RegionTemplateSet;
use pagezones_core::PageSize;

/// Parameters for segmenting one page
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentationParameters {
    /// Region templates seeding the detector (default: stock set)
    pub templates: RegionTemplateSet,

    /// Height in pixels pages are scaled to before detection (default: 800)
    pub desired_image_height: u32,

    /// Kernel size (x, y) used to merge image regions (default: 8x8)
    pub image_removal_dilation: (u32, u32),

    /// Kernel size (x, y) used to merge text into blocks (default: 10x1)
    pub text_removal_dilation: (u32, u32),

    /// Whether text lines are merged into paragraphs (default: true)
    pub combine_lines: bool,
}

impl Default for SegmentationParameters {
    fn default() -> Self {
        Self {
            templates: RegionTemplateSet::with_defaults(),
            desired_image_height: 800,
            image_removal_dilation: (8, 8),
            text_removal_dilation: (10, 1),
            combine_lines: true,
        }
    }
}

impl SegmentationParameters {
    /// Create new parameters with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the region templates
    pub fn with_templates(mut self, templates: RegionTemplateSet) -> Self {
        self.templates = templates;
        self
    }

    /// Set the scaled page height
    pub fn with_desired_image_height(mut self, height: u32) -> Self {
        self.desired_image_height = height;
        self
    }

    /// Set the image removal dilation kernel
    pub fn with_image_removal_dilation(mut self, x: u32, y: u32) -> Self {
        self.image_removal_dilation = (x, y);
        self
    }

    /// Set the text removal dilation kernel
    pub fn with_text_removal_dilation(mut self, x: u32, y: u32) -> Self {
        self.text_removal_dilation = (x, y);
        self
    }

    /// Set whether text lines are combined
    pub fn with_combine_lines(mut self, combine: bool) -> Self {
        self.combine_lines = combine;
        self
    }

    /// Recompute all template positions for a page of `size`.
    pub fn bind_page_size(&mut self, size: PageSize) {
        self.templates.bind_page_size(size);
    }

    /// Validate parameters
    pub fn validate(&self) -> TemplateResult<()> {
        if self.desired_image_height == 0 {
            return Err(TemplateError::InvalidParameter(
                "desired_image_height must be positive".to_string(),
            ));
        }
        if self.templates.is_empty() {
            return Err(TemplateError::InvalidParameter(
                "at least one region template is required".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_and_builders() {
        let params = SegmentationParameters::new()
            .with_desired_image_height(1200)
            .with_text_removal_dilation(4, 2)
            .with_combine_lines(false);
        assert_eq!(params.desired_image_height, 1200);
        assert_eq!(params.text_removal_dilation, (4, 2));
        assert_eq!(params.image_removal_dilation, (8, 8));
        assert!(!params.combine_lines);
        assert_eq!(params.templates.len(), 5);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_validate() {
        let params = SegmentationParameters::default().with_desired_image_height(0);
        assert!(params.validate().is_err());

        let params = SegmentationParameters::default().with_templates(RegionTemplateSet::new());
        assert!(matches!(
            params.validate(),
            Err(TemplateError::InvalidParameter(_))
        ));
    }
}
