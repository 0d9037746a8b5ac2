//! pagezones-template - Detection rules for page zoning
//!
//! Region templates tell the detector what to look for on a page and
//! where:
//!
//! - [`PositionTemplate`]: candidate zone in page fractions or pinned pixels
//! - [`RegionTemplate`]: per-type rule (size threshold, occurrence limit,
//!   priority edge, display color, positions)
//! - [`RegionTemplateSet`]: the templates active for a page or book
//! - [`SegmentationParameters`]: template set plus detector tuning
//!
//! Geometry is always computed against an explicit [`PageSize`]; nothing
//! in this crate remembers a "current" page image.
//!
//! # Quick Start
//!
//! ```
//! use pagezones_core::{PageSize, Rect, RegionType};
//! use pagezones_template::SegmentationParameters;
//!
//! let mut params = SegmentationParameters::default();
//! let page = PageSize::new(1000, 1400).unwrap();
//! params.bind_page_size(page);
//!
//! let page_number = params.templates.get(RegionType::PageNumber).unwrap();
//! let candidates = [
//!     Rect::new_unchecked(480, 1350, 40, 20),
//!     Rect::new_unchecked(480, 30, 40, 20),
//! ];
//! assert_eq!(page_number.resolve_placement(&candidates, page), vec![1]);
//! ```
//!
//! [`PageSize`]: pagezones_core::PageSize

mod error;
pub mod params;
pub mod position;
pub mod priority;
pub mod region;
pub mod set;

pub use error::{TemplateError, TemplateResult};
pub use params::SegmentationParameters;
pub use position::PositionTemplate;
pub use priority::PriorityPosition;
pub use region::RegionTemplate;
pub use set::RegionTemplateSet;

// Re-export core for convenience
pub use pagezones_core;
