//! PNG header support

use crate::{IoError, IoResult};
use png::Decoder;
use std::io::Cursor;

/// Read PNG dimensions from the IHDR chunk
pub fn read_dimensions_png(data: &[u8]) -> IoResult<(u32, u32)> {
    let decoder = Decoder::new(Cursor::new(data));
    let reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let info = reader.info();
    Ok((info.width, info.height))
}
