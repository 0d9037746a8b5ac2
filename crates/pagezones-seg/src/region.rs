//! Detected regions

use pagezones_core::{Polygon, Rect, RegionType};
use serde::{Deserialize, Serialize};

/// One concrete zone on a page, produced by detection or manual edit
///
/// Cloning yields a fully independent copy with the same id and geometry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectedRegion {
    id: String,
    #[serde(rename = "type")]
    region_type: RegionType,
    polygon: Polygon,
}

impl DetectedRegion {
    /// Create a region with an outline in absolute page coordinates
    pub fn new(id: impl Into<String>, region_type: RegionType, polygon: Polygon) -> Self {
        Self {
            id: id.into(),
            region_type,
            polygon,
        }
    }

    /// Create a rectangular region
    pub fn from_rect(id: impl Into<String>, region_type: RegionType, rect: Rect) -> Self {
        Self::new(id, region_type, Polygon::from_rect(rect))
    }

    /// Identifier, unique within one segmentation result
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn region_type(&self) -> RegionType {
        self.region_type
    }

    pub fn polygon(&self) -> &Polygon {
        &self.polygon
    }

    /// Bounding rectangle of the outline; empty for an empty outline.
    pub fn bounding_rect(&self) -> Rect {
        self.polygon.bounding_rect().unwrap_or_default()
    }

    /// Copy of this region with another type
    pub fn with_type(&self, region_type: RegionType) -> Self {
        Self {
            region_type,
            ..self.clone()
        }
    }
}
