//! RegionType - semantic zone kinds
//!
//! The closed set of zone kinds a page can be partitioned into. The
//! canonical name of each kind doubles as its export identifier and as
//! its wire representation in export requests.

use crate::error::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Semantic kind of a page zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RegionType {
    /// Pictures, figures and other non-text art
    Image,
    /// Area the detector must leave alone
    Ignore,
    /// Running body text
    Paragraph,
    /// Section heading
    Heading,
    /// Running header
    Header,
    /// Running footer
    Footer,
    Footnote,
    /// Footnote carried over from the previous page
    FootnoteContinued,
    /// Marginal notes
    Marginalia,
    PageNumber,
    Caption,
    Credit,
    DropCapital,
    SignatureMark,
    CatchWord,
    /// Table of contents entry
    TocEntry,
    Other,
}

impl RegionType {
    /// Every region type, in declaration order.
    pub const ALL: [RegionType; 17] = [
        RegionType::Image,
        RegionType::Ignore,
        RegionType::Paragraph,
        RegionType::Heading,
        RegionType::Header,
        RegionType::Footer,
        RegionType::Footnote,
        RegionType::FootnoteContinued,
        RegionType::Marginalia,
        RegionType::PageNumber,
        RegionType::Caption,
        RegionType::Credit,
        RegionType::DropCapital,
        RegionType::SignatureMark,
        RegionType::CatchWord,
        RegionType::TocEntry,
        RegionType::Other,
    ];

    /// Canonical identifier string
    pub fn as_str(&self) -> &'static str {
        match self {
            RegionType::Image => "image",
            RegionType::Ignore => "ignore",
            RegionType::Paragraph => "paragraph",
            RegionType::Heading => "heading",
            RegionType::Header => "header",
            RegionType::Footer => "footer",
            RegionType::Footnote => "footnote",
            RegionType::FootnoteContinued => "footnote_continued",
            RegionType::Marginalia => "marginalia",
            RegionType::PageNumber => "page_number",
            RegionType::Caption => "caption",
            RegionType::Credit => "credit",
            RegionType::DropCapital => "drop_capital",
            RegionType::SignatureMark => "signature_mark",
            RegionType::CatchWord => "catch_word",
            RegionType::TocEntry => "TOC_entry",
            RegionType::Other => "other",
        }
    }

    /// Whether zones of this kind carry text for the OCR stage
    pub fn is_text(&self) -> bool {
        !matches!(self, RegionType::Image | RegionType::Ignore)
    }
}

impl fmt::Display for RegionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RegionType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        RegionType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownRegionType(s.to_string()))
    }
}

impl Serialize for RegionType {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for RegionType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}
