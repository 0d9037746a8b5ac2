//! JPEG header support
//!
//! Uses the `jpeg-decoder` crate, reading only the frame header.

use crate::{IoError, IoResult};
use jpeg_decoder::Decoder;
use std::io::Cursor;

/// Read JPEG dimensions from the SOF marker
pub fn read_dimensions_jpeg(data: &[u8]) -> IoResult<(u32, u32)> {
    let mut decoder = Decoder::new(Cursor::new(data));
    decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("JPEG decode error: {}", e)))?;

    let info = decoder
        .info()
        .ok_or_else(|| IoError::InvalidData("JPEG frame header missing".to_string()))?;
    Ok((info.width as u32, info.height as u32))
}
