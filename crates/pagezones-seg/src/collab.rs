//! Detection and rendering collaborators
//!
//! Pixel-level detection and document rendering live outside this crate.
//! A session talks to them through [`Detector`] and [`Renderer`].

use crate::page::{DetectedPage, PageImage};
use crate::region::DetectedRegion;
use pagezones_template::SegmentationParameters;
use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Error reported by a [`Detector`]
#[derive(Debug, Error)]
#[error("{message}")]
pub struct DetectError {
    message: String,
    #[source]
    source: Option<BoxError>,
}

impl DetectError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(message: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self {
            message: message.into(),
            source: Some(source.into()),
        }
    }
}

/// Error reported by a [`Renderer`]
#[derive(Debug, Error)]
#[error("{message}")]
pub struct RenderError {
    message: String,
    #[source]
    source: Option<BoxError>,
}

impl RenderError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(message: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self {
            message: message.into(),
            source: Some(source.into()),
        }
    }
}

/// Turns a page image into proposed regions.
///
/// Implementations must return ids that are unique within the page and
/// are expected to honour each template's size, occurrence and priority
/// constraints. The parameters passed in are already bound to the size
/// of `image`.
pub trait Detector {
    fn detect(
        &self,
        params: &SegmentationParameters,
        image: &PageImage,
    ) -> Result<Vec<DetectedRegion>, DetectError>;
}

/// Serializes a segmented page into a layout document.
///
/// Regions must be written in the order of [`DetectedPage::result`],
/// tagged with the export identifier the page's parameters assign to
/// their type.
pub trait Renderer {
    fn render(&self, page: &DetectedPage) -> Result<Vec<u8>, RenderError>;
}

impl<T: Detector + ?Sized> Detector for &T {
    fn detect(
        &self,
        params: &SegmentationParameters,
        image: &PageImage,
    ) -> Result<Vec<DetectedRegion>, DetectError> {
        (**self).detect(params, image)
    }
}

impl<T: Detector + ?Sized> Detector for Box<T> {
    fn detect(
        &self,
        params: &SegmentationParameters,
        image: &PageImage,
    ) -> Result<Vec<DetectedRegion>, DetectError> {
        (**self).detect(params, image)
    }
}

impl<T: Renderer + ?Sized> Renderer for &T {
    fn render(&self, page: &DetectedPage) -> Result<Vec<u8>, RenderError> {
        (**self).render(page)
    }
}

impl<T: Renderer + ?Sized> Renderer for Box<T> {
    fn render(&self, page: &DetectedPage) -> Result<Vec<u8>, RenderError> {
        (**self).render(page)
    }
}
