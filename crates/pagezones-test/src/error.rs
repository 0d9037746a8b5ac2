//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur during regression testing
#[derive(Debug, Error)]
pub enum TestError {
    /// Failed to write a fixture page image
    #[error("failed to write page image '{path}': {message}")]
    PageWrite { path: String, message: String },

    /// Fixture page dimensions that no image format can hold
    #[error("invalid fixture page size {width}x{height}")]
    InvalidPageSize { width: u32, height: u32 },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
