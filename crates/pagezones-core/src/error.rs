//! Error types for pagezones-core
//!
//! Provides a unified error type for the geometry and region-type layer.
//! Each variant carries the offending values so that callers higher up
//! (templates, sessions) can report them without re-deriving context.

use thiserror::Error;

/// pagezones core error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Page dimensions must both be non-zero
    #[error("invalid page dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Rectangle with negative extent
    #[error("invalid rectangle: w={w}, h={h}")]
    InvalidRect { w: i32, h: i32 },

    /// Relative position outside the unit square or with inverted edges
    #[error("invalid position: left={left}, top={top}, right={right}, bottom={bottom}")]
    InvalidPosition {
        left: f64,
        top: f64,
        right: f64,
        bottom: f64,
    },

    /// Region type name that is not part of the closed enumeration
    #[error("unknown region type: {0}")]
    UnknownRegionType(String),

    /// Color name that is not in the palette
    #[error("unknown color: {0}")]
    UnknownColor(String),

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
