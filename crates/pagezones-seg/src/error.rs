//! Error types for pagezones-seg

use crate::collab::{DetectError, RenderError};
use thiserror::Error;

/// Errors that can occur while segmenting or exporting pages
///
/// A missing page image and the removal of an absent region are not
/// errors: the first yields a result tagged
/// [`SegmentationStatus::MissingFile`](crate::SegmentationStatus::MissingFile),
/// the second returns `None`.
#[derive(Debug, Error)]
pub enum SegError {
    /// Region id already present in the result
    #[error("duplicate region id: {0}")]
    DuplicateId(String),

    /// Region id referenced by an edit was never detected
    #[error("unknown segment: {0}")]
    UnknownSegment(String),

    /// Export requested for a page without a cached segmentation
    #[error("page {0} has not been segmented")]
    NotSegmented(u32),

    /// Artifact requested before an export was prepared
    #[error("no export prepared")]
    NoExportPrepared,

    /// Book operation on a session without a book
    #[error("session has no book loaded")]
    NotInitialized,

    /// Page id not part of the loaded book
    #[error("unknown page: {0}")]
    UnknownPage(u32),

    /// Rendering collaborator failed
    #[error("render failure: {0}")]
    RenderFailure(#[from] RenderError),

    /// Detection collaborator failed
    #[error("detection failed: {0}")]
    DetectionFailed(#[from] DetectError),

    /// Page image could not be probed
    #[error("image error: {0}")]
    Io(#[from] pagezones_io::IoError),

    /// Template error
    #[error("template error: {0}")]
    Template(#[from] pagezones_template::TemplateError),

    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] pagezones_core::Error),

    /// Invalid parameter provided
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type for segmentation operations
pub type SegResult<T> = Result<T, SegError>;
