//! Point, Polygon - region outlines
//!
//! Detected regions are outlined by polygons in absolute page
//! coordinates. Points keep their insertion order, which is also the
//! order in which an exporter writes them out.

use super::Rect;
use serde::{Deserialize, Serialize};

/// A point in page pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Closed outline of a region
///
/// The last point connects back to the first; the closing point is
/// not stored.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Polygon {
    points: Vec<Point>,
}

impl Polygon {
    /// Create a new empty polygon.
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Create a polygon with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
        }
    }

    /// Create the four-corner outline of a rectangle, clockwise from the
    /// top-left corner.
    pub fn from_rect(rect: Rect) -> Self {
        Self {
            points: vec![
                Point::new(rect.x, rect.y),
                Point::new(rect.right(), rect.y),
                Point::new(rect.right(), rect.bottom()),
                Point::new(rect.x, rect.bottom()),
            ],
        }
    }

    /// Get the number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Add a point.
    pub fn push(&mut self, x: i32, y: i32) {
        self.points.push(Point::new(x, y));
    }

    /// Get all points as a slice.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Compute the bounding rectangle.
    ///
    /// Returns `None` if the polygon has no points.
    pub fn bounding_rect(&self) -> Option<Rect> {
        let first = self.points.first()?;
        let (mut x1, mut y1, mut x2, mut y2) = (first.x, first.y, first.x, first.y);
        for p in &self.points[1..] {
            x1 = x1.min(p.x);
            y1 = y1.min(p.y);
            x2 = x2.max(p.x);
            y2 = y2.max(p.y);
        }
        Some(Rect::from_corners(x1, y1, x2, y2))
    }

    /// Enclosed area in square pixels (shoelace formula).
    ///
    /// Independent of winding direction. Degenerate outlines with fewer
    /// than three points have zero area.
    pub fn area(&self) -> i64 {
        if self.points.len() < 3 {
            return 0;
        }
        let n = self.points.len();
        let twice: i64 = (0..n)
            .map(|i| {
                let p = self.points[i];
                let q = self.points[(i + 1) % n];
                p.x as i64 * q.y as i64 - q.x as i64 * p.y as i64
            })
            .sum();
        twice.abs() / 2
    }

    /// Translate all points by (dx, dy).
    pub fn translate(&mut self, dx: i32, dy: i32) {
        for p in &mut self.points {
            p.x += dx;
            p.y += dy;
        }
    }

    /// Scale all points relative to the page origin.
    pub fn scale(&mut self, sx: f64, sy: f64) {
        for p in &mut self.points {
            p.x = (p.x as f64 * sx).round() as i32;
            p.y = (p.y as f64 * sy).round() as i32;
        }
    }

    /// Create an iterator over points.
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }
}

impl From<Rect> for Polygon {
    fn from(rect: Rect) -> Self {
        Self::from_rect(rect)
    }
}

impl FromIterator<Point> for Polygon {
    fn from_iter<T: IntoIterator<Item = Point>>(iter: T) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Polygon {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
