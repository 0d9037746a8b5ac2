//! pagezones-seg - Segmentation results and sessions
//!
//! This crate holds what detection produces and what users edit before
//! export:
//!
//! - [`DetectedRegion`] / [`SegmentationResult`]: regions of one page,
//!   edited copy-on-write
//! - [`Detector`] / [`Renderer`]: the pixel-level detection and document
//!   rendering collaborators
//! - [`PageSegmentationSession`]: per-user page cache and export pipeline
//!
//! # Quick Start
//!
//! ```
//! use pagezones_core::{Rect, RegionType};
//! use pagezones_seg::{DetectedRegion, SegmentationResult};
//!
//! let cached = SegmentationResult::from_regions([
//!     DetectedRegion::from_rect("r1", RegionType::Paragraph, Rect::new_unchecked(0, 0, 100, 40)),
//!     DetectedRegion::from_rect("r2", RegionType::Paragraph, Rect::new_unchecked(0, 50, 100, 40)),
//! ])
//! .unwrap();
//!
//! let mut variant = cached.clone();
//! variant.retype_region("r1", RegionType::Heading).unwrap();
//! variant.remove_region_by_id("r2");
//!
//! assert_eq!(variant.get("r1").unwrap().region_type(), RegionType::Heading);
//! assert_eq!(cached.get("r1").unwrap().region_type(), RegionType::Paragraph);
//! assert_eq!(cached.len(), 2);
//! ```

pub mod book;
pub mod collab;
pub mod constraints;
mod error;
pub mod page;
pub mod region;
pub mod request;
pub mod result;
pub mod session;

pub use error::{SegError, SegResult};

pub use book::{Book, BookSegmentation, Page, PageSegmentation, SegmentationStatus};
pub use collab::{DetectError, Detector, RenderError, Renderer};
pub use constraints::enforce_template_constraints;
pub use page::{DetectedPage, PageImage};
pub use region::DetectedRegion;
pub use request::ExportRequest;
pub use result::SegmentationResult;
pub use session::{EXPORT_CONTENT_TYPE, ExportArtifact, PageSegmentationSession, SessionOptions};

// Re-export lower layers for convenience
pub use pagezones_core;
pub use pagezones_template;
