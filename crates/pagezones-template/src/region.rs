//! Region templates
//!
//! A region template is the detection rule for one [`RegionType`]: how
//! large an accepted region must be, how often it may occur per page,
//! which page edge wins when only one may occur, and the position
//! templates bounding where the detector may look.

use crate::error::TemplateResult;
use crate::position::PositionTemplate;
use crate::priority::PriorityPosition;
use pagezones_core::{PageSize, Rect, RegionColor, RegionType};
use std::cmp::Reverse;

/// Detection rule for one region type
#[derive(Debug, Clone, PartialEq)]
pub struct RegionTemplate {
    region_type: RegionType,
    export_identifier: String,
    /// Minimum accepted region area in pixels
    min_size: u32,
    /// 0 = unbounded
    max_occurrences: u32,
    priority: Option<PriorityPosition>,
    color: RegionColor,
    visible: bool,
    positions: Vec<PositionTemplate>,
}

impl RegionTemplate {
    /// Create a region template.
    ///
    /// `positions: None` generates the default positions for the type
    /// (see [`default_positions`](Self::default_positions)). A priority is
    /// only kept when `max_occurrences == 1`.
    pub fn new(
        region_type: RegionType,
        min_size: u32,
        color: RegionColor,
        max_occurrences: u32,
        priority: Option<PriorityPosition>,
        positions: Option<Vec<PositionTemplate>>,
    ) -> Self {
        Self {
            region_type,
            export_identifier: region_type.as_str().to_string(),
            min_size,
            max_occurrences,
            priority: priority.filter(|_| max_occurrences == 1),
            color,
            visible: true,
            positions: positions.unwrap_or_else(|| Self::default_positions(region_type)),
        }
    }

    /// Create a region template from settings names.
    ///
    /// Unknown priority names (including `"none"`) mean no priority.
    ///
    /// # Errors
    ///
    /// Fails if the region type or the color name is unknown.
    pub fn from_names(
        type_name: &str,
        min_size: u32,
        color_name: &str,
        max_occurrences: u32,
        priority_name: &str,
        positions: Option<Vec<PositionTemplate>>,
    ) -> TemplateResult<Self> {
        let region_type: RegionType = type_name.parse()?;
        let color = RegionColor::by_name(color_name)?;
        Ok(Self::new(
            region_type,
            min_size,
            color,
            max_occurrences,
            PriorityPosition::for_occurrences(max_occurrences, priority_name),
            positions,
        ))
    }

    /// Default search zones for a region type.
    ///
    /// `image` and `ignore` get none; their geometry is always supplied by
    /// the caller.
    pub fn default_positions(region_type: RegionType) -> Vec<PositionTemplate> {
        use RegionType::*;

        let zones: &[(f64, f64, f64, f64)] = match region_type {
            Paragraph => &[(0.0, 0.0, 1.0, 1.0)],
            Marginalia => &[(0.0, 0.0, 0.25, 1.0), (0.75, 0.0, 1.0, 1.0)],
            PageNumber | Header | Heading => &[(0.0, 0.0, 1.0, 0.2)],
            Footer | Footnote | FootnoteContinued => &[(0.0, 0.8, 1.0, 1.0)],
            Image | Ignore => &[],
            Caption | Credit | DropCapital | SignatureMark | CatchWord | TocEntry | Other => {
                &[(0.2, 0.2, 0.8, 0.8)]
            }
        };
        zones
            .iter()
            .map(|&(l, t, r, b)| PositionTemplate::relative(l, t, r, b))
            .collect()
    }

    /// Reset positions to the defaults for this type.
    ///
    /// Permanent positions survive and are kept after the regenerated
    /// defaults; every other position is dropped.
    pub fn init_positions(&mut self) {
        self.remove_non_permanent_fixed();
        let survivors: Vec<PositionTemplate> = self
            .positions
            .drain(..)
            .filter(PositionTemplate::is_permanent)
            .collect();
        self.positions = Self::default_positions(self.region_type);
        self.positions.extend(survivors);
    }

    /// Drop positions that are fixed but not permanent.
    pub fn remove_non_permanent_fixed(&mut self) {
        self.positions.retain(|p| !p.is_fixed() || p.is_permanent());
    }

    /// Append a position and recompute every position against `size`.
    pub fn add_position(&mut self, position: PositionTemplate, size: PageSize) {
        self.positions.push(position);
        self.bind_page_size(size);
    }

    /// Append a fixed position drawn in pixels on a page of `size`.
    ///
    /// # Errors
    ///
    /// Fails if the rectangle lies entirely outside the page.
    pub fn add_position_rect(&mut self, rect: Rect, size: PageSize) -> TemplateResult<()> {
        let position = PositionTemplate::fixed_rect(rect, size)?;
        self.positions.push(position);
        Ok(())
    }

    /// Recompute every position's pixel rectangle for a page of `size`.
    pub fn bind_page_size(&mut self, size: PageSize) {
        for position in &mut self.positions {
            position.refresh(size);
        }
    }

    /// Pixel rectangles of all positions on a page of `size`
    pub fn absolute_rects(&self, size: PageSize) -> Vec<Rect> {
        self.positions.iter().map(|p| p.compute_rect(size)).collect()
    }

    /// Apply this template's constraints to candidate rectangles.
    ///
    /// Candidates smaller than `min_size` or outside every position are
    /// dropped (a template without positions does not restrict placement).
    /// With `max_occurrences == 1` the priority edge picks the survivor,
    /// or the largest candidate without a priority; with a larger limit
    /// the largest candidates are kept. Returns the indices of the kept
    /// candidates in input order.
    pub fn resolve_placement(&self, candidates: &[Rect], size: PageSize) -> Vec<usize> {
        let zones = self.absolute_rects(size);
        let admissible: Vec<usize> = candidates
            .iter()
            .enumerate()
            .filter(|(_, c)| c.area() >= self.min_size as i64)
            .filter(|(_, c)| zones.is_empty() || zones.iter().any(|z| z.overlaps(c)))
            .map(|(i, _)| i)
            .collect();

        match self.max_occurrences {
            0 => admissible,
            1 => {
                let rects: Vec<Rect> = admissible.iter().map(|&i| candidates[i]).collect();
                let winner = match self.priority {
                    Some(priority) => priority.pick(&rects),
                    None => rects
                        .iter()
                        .enumerate()
                        .max_by_key(|(i, r)| (r.area(), Reverse(*i)))
                        .map(|(i, _)| i),
                };
                winner.map(|w| vec![admissible[w]]).unwrap_or_default()
            }
            limit => {
                let mut by_area = admissible;
                // stable: equal areas keep input order
                by_area.sort_by_key(|&i| Reverse(candidates[i].area()));
                by_area.truncate(limit as usize);
                by_area.sort_unstable();
                by_area
            }
        }
    }

    pub fn region_type(&self) -> RegionType {
        self.region_type
    }

    /// Identifier used for this type in exported documents
    pub fn export_identifier(&self) -> &str {
        &self.export_identifier
    }

    pub fn set_export_identifier(&mut self, identifier: impl Into<String>) {
        self.export_identifier = identifier.into();
    }

    pub fn min_size(&self) -> u32 {
        self.min_size
    }

    pub fn set_min_size(&mut self, min_size: u32) {
        self.min_size = min_size;
    }

    pub fn max_occurrences(&self) -> u32 {
        self.max_occurrences
    }

    /// Set the occurrence limit; a priority only survives a limit of 1.
    pub fn set_max_occurrences(&mut self, max_occurrences: u32) {
        self.max_occurrences = max_occurrences;
        if max_occurrences != 1 {
            self.priority = None;
        }
    }

    pub fn priority(&self) -> Option<PriorityPosition> {
        self.priority
    }

    /// Set the priority edge; ignored unless `max_occurrences == 1`.
    pub fn set_priority(&mut self, priority: Option<PriorityPosition>) {
        self.priority = priority.filter(|_| self.max_occurrences == 1);
    }

    pub fn color(&self) -> RegionColor {
        self.color
    }

    pub fn set_color(&mut self, color: RegionColor) {
        self.color = color;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn positions(&self) -> &[PositionTemplate] {
        &self.positions
    }

    pub fn set_positions(&mut self, positions: Vec<PositionTemplate>) {
        self.positions = positions;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(w: u32, h: u32) -> PageSize {
        PageSize::new(w, h).unwrap()
    }

    fn fractions(t: &RegionTemplate) -> Vec<(f64, f64, f64, f64)> {
        t.positions()
            .iter()
            .map(|p| (p.left(), p.top(), p.right(), p.bottom()))
            .collect()
    }

    #[test]
    fn test_defaults_generated_when_absent() {
        let t = RegionTemplate::new(
            RegionType::Marginalia,
            100,
            RegionColor::default(),
            0,
            None,
            None,
        );
        assert_eq!(
            fractions(&t),
            vec![(0.0, 0.0, 0.25, 1.0), (0.75, 0.0, 1.0, 1.0)]
        );
        assert_eq!(t.export_identifier(), "marginalia");
        assert!(t.is_visible());

        let explicit = RegionTemplate::new(
            RegionType::Paragraph,
            100,
            RegionColor::default(),
            0,
            None,
            Some(vec![]),
        );
        assert!(explicit.positions().is_empty());
    }

    #[test]
    fn test_priority_needs_single_occurrence() {
        let t = RegionTemplate::new(
            RegionType::PageNumber,
            0,
            RegionColor::default(),
            2,
            Some(PriorityPosition::Top),
            None,
        );
        assert_eq!(t.priority(), None);

        let mut t = RegionTemplate::from_names("page_number", 300, "cyan", 1, "top", None).unwrap();
        assert_eq!(t.priority(), Some(PriorityPosition::Top));
        assert_eq!(t.color().name(), Some("cyan"));
        t.set_max_occurrences(3);
        assert_eq!(t.priority(), None);
    }

    #[test]
    fn test_from_names_errors() {
        assert!(RegionTemplate::from_names("nonsense", 0, "red", 0, "none", None).is_err());
        assert!(RegionTemplate::from_names("paragraph", 0, "mauve", 0, "none", None).is_err());
    }

    #[test]
    fn test_remove_non_permanent_fixed() {
        let page = size(1000, 1000);
        let mut t = RegionTemplate::new(
            RegionType::Paragraph,
            0,
            RegionColor::default(),
            0,
            None,
            None,
        );
        t.add_position_rect(Rect::new_unchecked(10, 10, 100, 100), page)
            .unwrap();
        t.add_position(
            PositionTemplate::fixed_rect(Rect::new_unchecked(500, 500, 50, 50), page)
                .unwrap()
                .with_permanent(true),
            page,
        );
        assert_eq!(t.positions().len(), 3);

        t.remove_non_permanent_fixed();
        assert_eq!(t.positions().len(), 2);
        assert!(t.positions()[1].is_permanent());
    }

    #[test]
    fn test_add_position_refreshes_all() {
        let mut t = RegionTemplate::new(
            RegionType::Heading,
            0,
            RegionColor::default(),
            0,
            None,
            None,
        );
        let page = size(400, 600);
        t.add_position(PositionTemplate::new(0.0, 0.5, 1.0, 1.0).unwrap(), page);
        for p in t.positions() {
            assert_eq!(p.bound_size(), Some(page));
        }
        assert_eq!(
            t.positions()[0].cached_rect(),
            Some(Rect::new_unchecked(0, 0, 400, 120))
        );
    }

    #[test]
    fn test_resolve_placement_limits() {
        let page = size(1000, 1000);
        let candidates = [
            Rect::new_unchecked(0, 0, 10, 10),     // too small
            Rect::new_unchecked(100, 100, 50, 50), // 2500
            Rect::new_unchecked(300, 300, 80, 80), // 6400
            Rect::new_unchecked(600, 600, 60, 60), // 3600
        ];
        let mut t = RegionTemplate::new(
            RegionType::Paragraph,
            1000,
            RegionColor::default(),
            0,
            None,
            None,
        );
        assert_eq!(t.resolve_placement(&candidates, page), vec![1, 2, 3]);

        t.set_max_occurrences(2);
        assert_eq!(t.resolve_placement(&candidates, page), vec![2, 3]);

        t.set_max_occurrences(1);
        assert_eq!(t.resolve_placement(&candidates, page), vec![2]);

        t.set_priority(Some(PriorityPosition::Top));
        assert_eq!(t.resolve_placement(&candidates, page), vec![1]);
    }

    #[test]
    fn test_resolve_placement_zones() {
        let page = size(1000, 1000);
        // header zone is the top fifth of the page
        let t = RegionTemplate::new(
            RegionType::Header,
            0,
            RegionColor::default(),
            0,
            None,
            None,
        );
        let candidates = [
            Rect::new_unchecked(0, 50, 100, 20),
            Rect::new_unchecked(0, 500, 100, 20),
            Rect::new_unchecked(0, 190, 100, 20),
        ];
        assert_eq!(t.resolve_placement(&candidates, page), vec![0, 2]);

        let unrestricted = RegionTemplate::new(
            RegionType::Image,
            0,
            RegionColor::default(),
            0,
            None,
            None,
        );
        assert_eq!(unrestricted.resolve_placement(&candidates, page), vec![0, 1, 2]);
    }
}
