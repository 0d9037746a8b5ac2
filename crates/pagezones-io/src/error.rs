//! I/O error types
//!
//! Each format-specific header reader maps its underlying library errors
//! into `IoError` variants so that callers only need to handle one error
//! type.

use thiserror::Error;

/// Error type for page image probing.
#[derive(Error, Debug)]
pub enum IoError {
    /// Standard I/O error (permission denied, truncated read, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The image format is not recognized or not enabled via features
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// The header is structurally invalid
    #[error("invalid image data: {0}")]
    InvalidData(String),

    /// A format-specific decoder returned an error
    #[error("decode error: {0}")]
    DecodeError(String),

    /// The header decoded but describes an unusable page
    #[error("core error: {0}")]
    Core(#[from] pagezones_core::Error),
}

/// Convenience alias for I/O results.
pub type IoResult<T> = Result<T, IoError>;
