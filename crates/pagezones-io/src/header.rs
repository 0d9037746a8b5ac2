//! Image header reading
//!
//! Provides page dimensions from image files without decoding pixel data.

use crate::{ImageFormat, IoError, IoResult, detect_format_from_bytes};
use pagezones_core::PageSize;
use std::fs;
use std::path::Path;

/// Image metadata read without decoding pixel data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageHeader {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Detected image format
    pub format: ImageFormat,
}

impl ImageHeader {
    /// Page dimensions described by this header
    ///
    /// # Errors
    ///
    /// Returns [`IoError::Core`] for zero-sized images.
    pub fn page_size(&self) -> IoResult<PageSize> {
        Ok(PageSize::new(self.width, self.height)?)
    }
}

/// Read image metadata from a file path without decoding pixel data
pub fn read_image_header<P: AsRef<Path>>(path: P) -> IoResult<ImageHeader> {
    let data = fs::read(path)?;
    read_image_header_mem(&data)
}

/// Read image metadata from bytes without decoding pixel data
pub fn read_image_header_mem(data: &[u8]) -> IoResult<ImageHeader> {
    let format = detect_format_from_bytes(data)?;
    let (width, height) = read_dimensions_for_format(data, format)?;
    Ok(ImageHeader {
        width,
        height,
        format,
    })
}

/// Read dimensions for a specific format
fn read_dimensions_for_format(data: &[u8], format: ImageFormat) -> IoResult<(u32, u32)> {
    match format {
        #[cfg(feature = "bmp")]
        ImageFormat::Bmp => crate::bmp::read_dimensions_bmp(data),

        #[cfg(feature = "pnm")]
        ImageFormat::Pnm => crate::pnm::read_dimensions_pnm(data),

        #[cfg(feature = "png-format")]
        ImageFormat::Png => crate::png::read_dimensions_png(data),

        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => crate::jpeg::read_dimensions_jpeg(data),

        #[cfg(feature = "tiff-format")]
        ImageFormat::Tiff => crate::tiff::read_dimensions_tiff(data),

        #[allow(unreachable_patterns)]
        _ => Err(IoError::UnsupportedFormat(format!("{:?}", format))),
    }
}
