//! Error types for pagezones-template

use pagezones_core::RegionType;
use thiserror::Error;

/// Errors that can occur while building or editing templates
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TemplateError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] pagezones_core::Error),

    /// Fixed position whose rectangle lies outside the page
    #[error("rectangle {x},{y} {w}x{h} lies outside the {width}x{height} page")]
    OutsidePage {
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        width: u32,
        height: u32,
    },

    /// No template registered for this region type
    #[error("no template for region type {0}")]
    UnknownTemplate(RegionType),

    /// Invalid parameter provided
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type for template operations
pub type TemplateResult<T> = Result<T, TemplateError>;
