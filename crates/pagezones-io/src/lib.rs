//! pagezones-io - Page image probing
//!
//! Segmentation only needs to know whether a page image exists and how
//! large it is; pixel decoding is left to the detector. This crate
//! answers both questions without decoding image data:
//!
//! - [`page_image_exists`] - pure existence probe
//! - [`detect_format`] - format detection by magic bytes
//! - [`read_image_header`] - dimensions from the format header
//!
//! # Features
//!
//! Header readers are enabled per format: `png-format`, `jpeg`,
//! `tiff-format`, `bmp`, `pnm` (all on by default).

#[cfg(feature = "bmp")]
mod bmp;
mod error;
mod format;
mod header;
#[cfg(feature = "jpeg")]
mod jpeg;
#[cfg(feature = "png-format")]
mod png;
#[cfg(feature = "pnm")]
mod pnm;
#[cfg(feature = "tiff-format")]
mod tiff;

pub use error::{IoError, IoResult};
pub use format::{ImageFormat, detect_format, detect_format_from_bytes};
pub use header::{ImageHeader, read_image_header, read_image_header_mem};

use std::path::Path;

/// Check whether a page image file is present.
///
/// Only regular files count; a directory at the path is reported as
/// missing. Nothing is read.
pub fn page_image_exists<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref().is_file()
}
