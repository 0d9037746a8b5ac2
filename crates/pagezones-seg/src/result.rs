//! Segmentation results
//!
//! A [`SegmentationResult`] holds the detected regions of one page keyed by
//! id, in detection order. Regions are shared behind [`Arc`] and never
//! mutated in place: cloning a result copies only the container, and
//! every edit swaps in a new region. A cloned result can therefore be
//! edited freely without touching the result it was cloned from.

use crate::error::{SegError, SegResult};
use crate::region::DetectedRegion;
use indexmap::IndexMap;
use pagezones_core::RegionType;
use std::sync::Arc;

/// Detected regions of one page, in export order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SegmentationResult {
    regions: IndexMap<String, Arc<DetectedRegion>>,
}

impl SegmentationResult {
    /// Create an empty result
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a result from regions in detection order.
    ///
    /// # Errors
    ///
    /// Returns [`SegError::DuplicateId`] if two regions share an id.
    pub fn from_regions<I>(regions: I) -> SegResult<Self>
    where
        I: IntoIterator<Item = DetectedRegion>,
    {
        let mut result = Self::new();
        for region in regions {
            result.add_region(region)?;
        }
        Ok(result)
    }

    /// Append a region.
    ///
    /// # Errors
    ///
    /// Returns [`SegError::DuplicateId`] if the id is already present.
    pub fn add_region(&mut self, region: DetectedRegion) -> SegResult<()> {
        self.add_shared(Arc::new(region))
    }

    fn add_shared(&mut self, region: Arc<DetectedRegion>) -> SegResult<()> {
        if self.regions.contains_key(region.id()) {
            return Err(SegError::DuplicateId(region.id().to_string()));
        }
        self.regions.insert(region.id().to_string(), region);
        Ok(())
    }

    /// Remove a region, keeping the order of the others.
    ///
    /// Returns `None` if no region has this id.
    pub fn remove_region_by_id(&mut self, id: &str) -> Option<Arc<DetectedRegion>> {
        self.regions.shift_remove(id)
    }

    /// Replace the region with the same id in place, or append it.
    ///
    /// Returns the region that was replaced.
    pub fn replace_region(&mut self, region: DetectedRegion) -> Option<Arc<DetectedRegion>> {
        self.regions
            .insert(region.id().to_string(), Arc::new(region))
    }

    /// Change the type of a region.
    ///
    /// The stored region is removed, copied and the retyped copy added
    /// again, so it moves to the end of the export order. Clones of this
    /// result still see the old region.
    ///
    /// # Errors
    ///
    /// Returns [`SegError::UnknownSegment`] if no region has this id.
    pub fn retype_region(&mut self, id: &str, region_type: RegionType) -> SegResult<()> {
        let (key, old) = self
            .regions
            .shift_remove_entry(id)
            .ok_or_else(|| SegError::UnknownSegment(id.to_string()))?;
        self.regions.insert(key, Arc::new(old.with_type(region_type)));
        Ok(())
    }

    /// Regions in export order
    pub fn regions(&self) -> impl Iterator<Item = &DetectedRegion> {
        self.regions.values().map(Arc::as_ref)
    }

    /// Region ids in export order
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.regions.keys().map(String::as_str)
    }

    pub fn get(&self, id: &str) -> Option<&DetectedRegion> {
        self.regions.get(id).map(Arc::as_ref)
    }

    /// Shared handle of a region
    pub fn get_shared(&self, id: &str) -> Option<&Arc<DetectedRegion>> {
        self.regions.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.regions.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Count regions of one type
    pub fn count_of(&self, region_type: RegionType) -> usize {
        self.regions()
            .filter(|r| r.region_type() == region_type)
            .count()
    }
}
