//! pagezones - Page layout zoning for OCR pipelines
//!
//! Scanned pages are partitioned into typed zones (paragraphs, headings,
//! marginalia, page numbers, images, ...) before text recognition. This
//! crate gathers the pieces:
//!
//! - Geometry, region types and colors (re-exported at the top level)
//! - [`io`]: page image existence and size probing
//! - [`template`]: region and position templates seeding detection
//! - [`seg`]: segmentation results, sessions and the export pipeline
//!
//! # Example
//!
//! ```
//! use pagezones::template::SegmentationParameters;
//! use pagezones::{PageSize, RegionType};
//!
//! let mut params = SegmentationParameters::default();
//! params.bind_page_size(PageSize::new(1000, 1500).unwrap());
//!
//! let zones = params
//!     .templates
//!     .get(RegionType::Marginalia)
//!     .unwrap()
//!     .absolute_rects(PageSize::new(1000, 1500).unwrap());
//! assert_eq!(zones.len(), 2);
//! assert_eq!(zones[1].x, 750);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use pagezones_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use pagezones_io as io;
pub use pagezones_seg as seg;
pub use pagezones_template as template;
