//! Priority positions
//!
//! When a region type may occur only once per page, the priority side
//! decides which of several competing candidates wins: the one closest
//! to that page edge.

use pagezones_core::Rect;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::fmt;
use std::str::FromStr;

/// Tie-break side for single-occurrence region types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriorityPosition {
    Top,
    Bottom,
    Left,
    Right,
}

impl PriorityPosition {
    pub fn as_str(&self) -> &'static str {
        match self {
            PriorityPosition::Top => "top",
            PriorityPosition::Bottom => "bottom",
            PriorityPosition::Left => "left",
            PriorityPosition::Right => "right",
        }
    }

    /// Priority as declared in a settings file.
    ///
    /// Only single-occurrence templates carry a priority; for any other
    /// occurrence limit, and for unrecognized names such as `"none"`, the
    /// result is `None`.
    pub fn for_occurrences(max_occurrences: u32, name: &str) -> Option<Self> {
        if max_occurrences != 1 {
            return None;
        }
        name.parse().ok()
    }

    /// Larger is closer to the priority edge
    fn edge_score(&self, rect: &Rect) -> i64 {
        match self {
            PriorityPosition::Top => -(rect.y as i64),
            PriorityPosition::Bottom => rect.bottom() as i64,
            PriorityPosition::Left => -(rect.x as i64),
            PriorityPosition::Right => rect.right() as i64,
        }
    }

    /// Pick the winning candidate.
    ///
    /// Closest to the priority edge wins; ties go to the larger area, then
    /// to the earlier candidate. Returns the winner's index into
    /// `candidates`.
    pub fn pick(&self, candidates: &[Rect]) -> Option<usize> {
        candidates
            .iter()
            .enumerate()
            .max_by_key(|(i, r)| (self.edge_score(r), r.area(), Reverse(*i)))
            .map(|(i, _)| i)
    }
}

impl fmt::Display for PriorityPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PriorityPosition {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "top" => Ok(PriorityPosition::Top),
            "bottom" => Ok(PriorityPosition::Bottom),
            "left" => Ok(PriorityPosition::Left),
            "right" => Ok(PriorityPosition::Right),
            _ => Err(()),
        }
    }
}
