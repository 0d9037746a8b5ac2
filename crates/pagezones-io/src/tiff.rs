//! TIFF header support
//!
//! Only the first image directory is consulted; multipage TIFFs are
//! treated as their first page.

use crate::{IoError, IoResult};
use tiff::decoder::Decoder;

/// Read TIFF dimensions from the first IFD
pub fn read_dimensions_tiff(data: &[u8]) -> IoResult<(u32, u32)> {
    let cursor = std::io::Cursor::new(data);
    let mut decoder = Decoder::new(cursor)
        .map_err(|e| IoError::DecodeError(format!("TIFF decode error: {}", e)))?;

    decoder
        .dimensions()
        .map_err(|e| IoError::DecodeError(format!("TIFF dimensions: {}", e)))
}
