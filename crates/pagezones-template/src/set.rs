//! Region template sets

use crate::error::{TemplateError, TemplateResult};
use crate::priority::PriorityPosition;
use crate::region::RegionTemplate;
use pagezones_core::{PageSize, RegionColor, RegionType};

/// Ordered collection of region templates, at most one per type
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RegionTemplateSet {
    templates: Vec<RegionTemplate>,
}

impl RegionTemplateSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// The stock template set used when no settings are loaded.
    pub fn with_defaults() -> Self {
        let named = |name: &'static str| RegionColor::by_name(name).unwrap_or_default();
        let mut set = Self::new();
        for template in [
            RegionTemplate::new(RegionType::Image, 1100, named("green"), 0, None, None),
            RegionTemplate::new(RegionType::Paragraph, 1100, named("red"), 0, None, None),
            RegionTemplate::new(RegionType::Marginalia, 1100, named("yellow"), 0, None, None),
            RegionTemplate::new(
                RegionType::PageNumber,
                300,
                named("cyan"),
                1,
                Some(PriorityPosition::Top),
                None,
            ),
            RegionTemplate::new(RegionType::Ignore, 0, named("light_gray"), 0, None, None),
        ] {
            set.insert(template);
        }
        set
    }

    /// Add a template, replacing and returning any template of the same type.
    pub fn insert(&mut self, template: RegionTemplate) -> Option<RegionTemplate> {
        match self
            .templates
            .iter_mut()
            .find(|t| t.region_type() == template.region_type())
        {
            Some(slot) => Some(std::mem::replace(slot, template)),
            None => {
                self.templates.push(template);
                None
            }
        }
    }

    pub fn get(&self, region_type: RegionType) -> Option<&RegionTemplate> {
        self.templates.iter().find(|t| t.region_type() == region_type)
    }

    pub fn get_mut(&mut self, region_type: RegionType) -> Option<&mut RegionTemplate> {
        self.templates
            .iter_mut()
            .find(|t| t.region_type() == region_type)
    }

    /// Remove the template for a type; order of the rest is kept.
    pub fn remove(&mut self, region_type: RegionType) -> Option<RegionTemplate> {
        let index = self
            .templates
            .iter()
            .position(|t| t.region_type() == region_type)?;
        Some(self.templates.remove(index))
    }

    pub fn contains(&self, region_type: RegionType) -> bool {
        self.get(region_type).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RegionTemplate> {
        self.templates.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut RegionTemplate> {
        self.templates.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Export identifier for a type.
    ///
    /// Falls back to the canonical type name when no template overrides it.
    pub fn export_identifier(&self, region_type: RegionType) -> &str {
        self.get(region_type)
            .map_or(region_type.as_str(), RegionTemplate::export_identifier)
    }

    /// Recompute every template's position rectangles for a page of `size`.
    pub fn bind_page_size(&mut self, size: PageSize) {
        for template in &mut self.templates {
            template.bind_page_size(size);
        }
    }

    /// Re-initialize the positions of one template.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::UnknownTemplate`] if the set has no
    /// template for `region_type`.
    pub fn reset(&mut self, region_type: RegionType) -> TemplateResult<()> {
        let template = self
            .get_mut(region_type)
            .ok_or(TemplateError::UnknownTemplate(region_type))?;
        template.init_positions();
        Ok(())
    }
}

impl<'a> IntoIterator for &'a RegionTemplateSet {
    type Item = &'a RegionTemplate;
    type IntoIter = std::slice::Iter<'a, RegionTemplate>;

    fn into_iter(self) -> Self::IntoIter {
        self.templates.iter()
    }
}

impl FromIterator<RegionTemplate> for RegionTemplateSet {
    fn from_iter<I: IntoIterator<Item = RegionTemplate>>(iter: I) -> Self {
        let mut set = Self::new();
        for template in iter {
            set.insert(template);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_set() {
        let set = RegionTemplateSet::with_defaults();
        let types: Vec<RegionType> = set.iter().map(|t| t.region_type()).collect();
        assert_eq!(
            types,
            vec![
                RegionType::Image,
                RegionType::Paragraph,
                RegionType::Marginalia,
                RegionType::PageNumber,
                RegionType::Ignore,
            ]
        );
        let page_number = set.get(RegionType::PageNumber).unwrap();
        assert_eq!(page_number.max_occurrences(), 1);
        assert_eq!(page_number.priority(), Some(PriorityPosition::Top));
        assert_eq!(page_number.min_size(), 300);
        assert!(set.get(RegionType::Image).unwrap().positions().is_empty());
    }

    #[test]
    fn test_insert_replaces_same_type() {
        let mut set = RegionTemplateSet::with_defaults();
        let replacement =
            RegionTemplate::new(RegionType::Paragraph, 5, RegionColor::default(), 0, None, None);
        let previous = set.insert(replacement).unwrap();
        assert_eq!(previous.min_size(), 1100);
        assert_eq!(set.len(), 5);
        assert_eq!(set.get(RegionType::Paragraph).unwrap().min_size(), 5);

        assert!(set.remove(RegionType::Paragraph).is_some());
        assert!(!set.contains(RegionType::Paragraph));
        assert!(set.remove(RegionType::Paragraph).is_none());
    }

    #[test]
    fn test_export_identifier_override() {
        let mut set = RegionTemplateSet::with_defaults();
        set.get_mut(RegionType::Marginalia)
            .unwrap()
            .set_export_identifier("marginalia-note");
        assert_eq!(set.export_identifier(RegionType::Marginalia), "marginalia-note");
        assert_eq!(set.export_identifier(RegionType::Paragraph), "paragraph");
        // no template at all
        assert_eq!(set.export_identifier(RegionType::TocEntry), "TOC_entry");
    }

    #[test]
    fn test_reset_unknown() {
        let mut set = RegionTemplateSet::new();
        assert_eq!(
            set.reset(RegionType::Footer),
            Err(TemplateError::UnknownTemplate(RegionType::Footer))
        );
    }
}
