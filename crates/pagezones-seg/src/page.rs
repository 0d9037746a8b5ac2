//! Page images and segmented pages

use crate::result::SegmentationResult;
use pagezones_core::PageSize;
use pagezones_io::{ImageFormat, ImageHeader};
use pagezones_template::SegmentationParameters;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// A page image on disk together with its probed header
#[derive(Debug, Clone, PartialEq)]
pub struct PageImage {
    path: PathBuf,
    format: ImageFormat,
    size: PageSize,
}

impl PageImage {
    pub fn new(path: impl Into<PathBuf>, format: ImageFormat, size: PageSize) -> Self {
        Self {
            path: path.into(),
            format,
            size,
        }
    }

    /// Page image described by a probed header.
    ///
    /// # Errors
    ///
    /// Fails if the header reports a zero dimension.
    pub fn from_header(
        path: impl Into<PathBuf>,
        header: ImageHeader,
    ) -> pagezones_io::IoResult<Self> {
        Ok(Self::new(path, header.format, header.page_size()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> ImageFormat {
        self.format
    }

    /// Pixel dimensions of the page
    pub fn size(&self) -> PageSize {
        self.size
    }

    /// File name without directory and extension
    pub fn stem(&self) -> &str {
        self.path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
    }
}

/// A segmented page as kept in the session cache
///
/// Cloning is shallow: the clone shares the image and the parameter
/// snapshot, and owns its own result container whose regions are
/// shared until edited.
#[derive(Debug, Clone)]
pub struct DetectedPage {
    page_id: u32,
    image: Arc<PageImage>,
    parameters: Arc<SegmentationParameters>,
    result: SegmentationResult,
}

impl DetectedPage {
    pub fn new(
        page_id: u32,
        image: Arc<PageImage>,
        parameters: Arc<SegmentationParameters>,
        result: SegmentationResult,
    ) -> Self {
        Self {
            page_id,
            image,
            parameters,
            result,
        }
    }

    pub fn page_id(&self) -> u32 {
        self.page_id
    }

    pub fn image(&self) -> &PageImage {
        &self.image
    }

    /// Shared handle of the page image
    pub fn image_handle(&self) -> &Arc<PageImage> {
        &self.image
    }

    /// Parameters the page was segmented with, bound to its size
    pub fn parameters(&self) -> &SegmentationParameters {
        &self.parameters
    }

    pub fn result(&self) -> &SegmentationResult {
        &self.result
    }

    pub fn result_mut(&mut self) -> &mut SegmentationResult {
        &mut self.result
    }
}
