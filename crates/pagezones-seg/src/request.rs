//! Export requests

use indexmap::IndexMap;
use pagezones_core::RegionType;
use serde::{Deserialize, Serialize};

/// Overrides applied to a cached page before it is exported
///
/// Serialized with the field names `page`, `segmentsToIgnore` and
/// `changedTypes`; only `page` is required.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRequest {
    /// Page to export
    pub page: u32,
    /// Regions left out of the export; unknown ids are skipped
    #[serde(default)]
    pub segments_to_ignore: Vec<String>,
    /// New types for regions, applied in order
    #[serde(default)]
    pub changed_types: IndexMap<String, RegionType>,
}

impl ExportRequest {
    /// Request exporting a page without overrides
    pub fn new(page: u32) -> Self {
        Self {
            page,
            ..Self::default()
        }
    }

    /// Leave a region out of the export
    pub fn with_ignored(mut self, id: impl Into<String>) -> Self {
        self.segments_to_ignore.push(id.into());
        self
    }

    /// Export a region under another type
    pub fn with_changed_type(mut self, id: impl Into<String>, region_type: RegionType) -> Self {
        self.changed_types.insert(id.into(), region_type);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_request() {
        let json = r#"{
            "page": 4,
            "segmentsToIgnore": ["r3", "r9"],
            "changedTypes": {"r1": "heading", "r2": "TOC_entry"}
        }"#;
        let request: ExportRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.page, 4);
        assert_eq!(request.segments_to_ignore, vec!["r3", "r9"]);
        let changes: Vec<_> = request.changed_types.iter().collect();
        assert_eq!(changes[0], (&"r1".to_string(), &RegionType::Heading));
        assert_eq!(changes[1], (&"r2".to_string(), &RegionType::TocEntry));
    }

    #[test]
    fn test_optional_fields_default() {
        let request: ExportRequest = serde_json::from_str(r#"{"page": 1}"#).unwrap();
        assert_eq!(request, ExportRequest::new(1));
        assert!(serde_json::from_str::<ExportRequest>(r#"{"segmentsToIgnore": []}"#).is_err());
    }

    #[test]
    fn test_unknown_type_rejected() {
        let json = r#"{"page": 1, "changedTypes": {"r1": "sidebar"}}"#;
        assert!(serde_json::from_str::<ExportRequest>(json).is_err());
    }

    #[test]
    fn test_builder_round_trip() {
        let request = ExportRequest::new(2)
            .with_ignored("a")
            .with_changed_type("b", RegionType::Footnote);
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"segmentsToIgnore\":[\"a\"]"));
        let back: ExportRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, request);
    }
}
