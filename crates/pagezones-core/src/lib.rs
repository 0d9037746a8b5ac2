//! pagezones-core - Basic data structures for page zoning
//!
//! This crate provides the fundamental types shared by every other
//! pagezones crate:
//!
//! - [`PageSize`] / [`Rect`] - Page dimensions and pixel rectangles
//! - [`Point`] / [`Polygon`] - Region outlines in page coordinates
//! - [`RegionType`] - Closed set of semantic zone kinds
//! - [`RegionColor`] / [`Rgba`] - Template display colors

pub mod color;
pub mod error;
pub mod geometry;
pub mod region_type;

pub use color::{ALPHA_ACTIVE, ALPHA_STANDARD, RegionColor, Rgba};
pub use error::{Error, Result};
pub use geometry::{PageSize, Point, Polygon, Rect};
pub use region_type::RegionType;
