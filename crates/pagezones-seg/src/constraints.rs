//! Template constraints on detector output
//!
//! Detectors are expected to honour the size, occurrence and priority
//! constraints of the templates themselves. Sessions can apply them again
//! to the detector output when the detector cannot be trusted to.

use crate::region::DetectedRegion;
use pagezones_core::{PageSize, Rect};
use pagezones_template::RegionTemplateSet;

/// Drop regions that violate their type's template.
///
/// Regions are grouped by type and each group is resolved against the
/// template of that type (see
/// [`RegionTemplate::resolve_placement`](pagezones_template::RegionTemplate::resolve_placement)),
/// using the bounding rectangles of the outlines. Regions whose type has
/// no template are kept. The order of the kept regions is unchanged.
pub fn enforce_template_constraints(
    templates: &RegionTemplateSet,
    regions: Vec<DetectedRegion>,
    size: PageSize,
) -> Vec<DetectedRegion> {
    let mut keep = vec![true; regions.len()];

    for template in templates {
        let members: Vec<usize> = regions
            .iter()
            .enumerate()
            .filter(|(_, r)| r.region_type() == template.region_type())
            .map(|(i, _)| i)
            .collect();
        if members.is_empty() {
            continue;
        }

        let rects: Vec<Rect> = members.iter().map(|&i| regions[i].bounding_rect()).collect();
        let kept = template.resolve_placement(&rects, size);
        for (slot, &i) in members.iter().enumerate() {
            keep[i] = kept.binary_search(&slot).is_ok();
        }
    }

    regions
        .into_iter()
        .zip(keep)
        .filter_map(|(region, kept)| kept.then_some(region))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagezones_core::RegionType;

    #[test]
    fn test_enforce_stock_templates() {
        let size = PageSize::new(1000, 1000).unwrap();
        let templates = RegionTemplateSet::with_defaults();
        let regions = vec![
            // page numbers: one at the bottom, one at the top, one tiny
            DetectedRegion::from_rect("n1", RegionType::PageNumber, Rect::new_unchecked(480, 950, 40, 20)),
            DetectedRegion::from_rect("p1", RegionType::Paragraph, Rect::new_unchecked(100, 100, 800, 300)),
            DetectedRegion::from_rect("n2", RegionType::PageNumber, Rect::new_unchecked(480, 20, 40, 20)),
            DetectedRegion::from_rect("p2", RegionType::Paragraph, Rect::new_unchecked(100, 500, 10, 10)),
            DetectedRegion::from_rect("c1", RegionType::Caption, Rect::new_unchecked(0, 0, 1, 1)),
        ];
        let kept = enforce_template_constraints(&templates, regions, size);
        let ids: Vec<&str> = kept.iter().map(DetectedRegion::id).collect();
        // n1 lies outside the top band, p2 is below the minimum size,
        // captions have no template in the stock set
        assert_eq!(ids, vec!["p1", "n2", "c1"]);
    }
}
