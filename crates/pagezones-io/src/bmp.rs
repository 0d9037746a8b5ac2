//! BMP header support
//!
//! Reads the BITMAPINFOHEADER width/height fields. A negative height
//! marks a top-down bitmap and is reported by magnitude.

use crate::{IoError, IoResult};

const WIDTH_OFFSET: usize = 18;
const HEIGHT_OFFSET: usize = 22;
const MIN_HEADER_LEN: usize = 26;

fn read_i32_le(data: &[u8], offset: usize) -> i32 {
    i32::from_le_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ])
}

/// Read BMP dimensions from the info header
pub fn read_dimensions_bmp(data: &[u8]) -> IoResult<(u32, u32)> {
    if data.len() < MIN_HEADER_LEN {
        return Err(IoError::InvalidData(format!(
            "BMP header too short: {} bytes",
            data.len()
        )));
    }

    let width = read_i32_le(data, WIDTH_OFFSET);
    let height = read_i32_le(data, HEIGHT_OFFSET);
    if width <= 0 || height == 0 {
        return Err(IoError::InvalidData(format!(
            "invalid BMP dimensions: {}x{}",
            width, height
        )));
    }
    Ok((width as u32, height.unsigned_abs()))
}
