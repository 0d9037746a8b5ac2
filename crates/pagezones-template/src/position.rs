//! Position templates
//!
//! A position template is a candidate rectangle in which the detector may
//! propose regions of one type. It is stored as fractions of the page so
//! that one template set serves pages of any resolution.
//!
//! A *fixed* position was drawn in absolute pixels (typically pinned by a
//! user on one page). Its pixel rectangle is authoritative, clipped to
//! whatever page it is bound to, and only its fractions follow that page.
//! On a page too small to hold any of it, the zone falls back to its last
//! fractions. A *permanent* position
//! survives [`RegionTemplate::init_positions`](crate::RegionTemplate::init_positions).

use crate::error::{TemplateError, TemplateResult};
use pagezones_core::{Error, PageSize, Rect};

/// Candidate placement zone of a region template
#[derive(Debug, Clone, PartialEq)]
pub struct PositionTemplate {
    left: f64,
    top: f64,
    right: f64,
    bottom: f64,
    permanent: bool,
    /// Rectangle as drawn, for fixed positions
    pixels: Option<Rect>,
    /// Last computed pixel rectangle
    rect: Option<Rect>,
    /// Page size `rect` was computed against
    bound_size: Option<PageSize>,
}

impl PositionTemplate {
    /// Create a relative position from page fractions.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPosition`] unless `0 <= left < right <= 1`
    /// and `0 <= top < bottom <= 1`.
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> TemplateResult<Self> {
        let in_unit = |v: f64| (0.0..=1.0).contains(&v);
        if !(in_unit(left) && in_unit(top) && in_unit(right) && in_unit(bottom))
            || left >= right
            || top >= bottom
        {
            return Err(Error::InvalidPosition {
                left,
                top,
                right,
                bottom,
            }
            .into());
        }
        Ok(Self::relative(left, top, right, bottom))
    }

    /// Relative position from fractions known to be valid
    pub(crate) const fn relative(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
            permanent: false,
            pixels: None,
            rect: None,
            bound_size: None,
        }
    }

    /// Create a fixed position from an absolute pixel rectangle.
    ///
    /// The rectangle is clipped to the page; its fractions are derived
    /// from the clipped rectangle.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::OutsidePage`] if nothing of the rectangle
    /// lies on the page.
    pub fn fixed_rect(rect: Rect, size: PageSize) -> TemplateResult<Self> {
        let clipped = rect.clip(size).ok_or(TemplateError::OutsidePage {
            x: rect.x,
            y: rect.y,
            w: rect.w,
            h: rect.h,
            width: size.width,
            height: size.height,
        })?;
        let mut position = Self::relative(0.0, 0.0, 1.0, 1.0);
        position.pixels = Some(clipped);
        position.rect = Some(clipped);
        position.update_fractions(clipped, size);
        position.bound_size = Some(size);
        Ok(position)
    }

    /// Mark the position as permanent (or not).
    pub fn with_permanent(mut self, permanent: bool) -> Self {
        self.permanent = permanent;
        self
    }

    pub fn left(&self) -> f64 {
        self.left
    }

    pub fn top(&self) -> f64 {
        self.top
    }

    pub fn right(&self) -> f64 {
        self.right
    }

    pub fn bottom(&self) -> f64 {
        self.bottom
    }

    /// Whether the pixel rectangle is authoritative
    pub fn is_fixed(&self) -> bool {
        self.pixels.is_some()
    }

    /// Whether the position survives template re-initialization
    pub fn is_permanent(&self) -> bool {
        self.permanent
    }

    /// Page size the cached rectangle belongs to
    pub fn bound_size(&self) -> Option<PageSize> {
        self.bound_size
    }

    /// Last computed pixel rectangle, if any
    pub fn cached_rect(&self) -> Option<Rect> {
        self.rect
    }

    /// Compute the pixel rectangle for a page without touching the cache.
    pub fn compute_rect(&self, size: PageSize) -> Rect {
        self.clipped_pixels(size)
            .unwrap_or_else(|| self.scaled_rect(size))
    }

    /// Pixel rectangle for a page, cached against the last page size.
    pub fn absolute_rect(&mut self, size: PageSize) -> Rect {
        match (self.rect, self.bound_size) {
            (Some(rect), Some(bound)) if bound == size => rect,
            _ => self.refresh(size),
        }
    }

    /// Recompute the pixel rectangle for a page unconditionally.
    ///
    /// Used when a position is freshly attached to a page image.
    pub fn refresh(&mut self, size: PageSize) -> Rect {
        let rect = match self.clipped_pixels(size) {
            Some(clipped) => {
                self.update_fractions(clipped, size);
                clipped
            }
            None => self.scaled_rect(size),
        };
        self.rect = Some(rect);
        self.bound_size = Some(size);
        rect
    }

    /// Whether the zone fully contains a pixel rectangle on a page of `size`
    pub fn contains(&self, other: &Rect, size: PageSize) -> bool {
        self.compute_rect(size).contains_rect(other)
    }

    /// Whether the zone overlaps a pixel rectangle on a page of `size`
    pub fn overlaps(&self, other: &Rect, size: PageSize) -> bool {
        self.compute_rect(size).overlaps(other)
    }

    fn clipped_pixels(&self, size: PageSize) -> Option<Rect> {
        self.pixels.and_then(|pixels| pixels.clip(size))
    }

    fn scaled_rect(&self, size: PageSize) -> Rect {
        let w = size.width as f64;
        let h = size.height as f64;
        Rect::from_corners(
            (self.left * w).round() as i32,
            (self.top * h).round() as i32,
            (self.right * w).round() as i32,
            (self.bottom * h).round() as i32,
        )
    }

    fn update_fractions(&mut self, rect: Rect, size: PageSize) {
        let w = size.width as f64;
        let h = size.height as f64;
        self.left = (rect.x as f64 / w).clamp(0.0, 1.0);
        self.top = (rect.y as f64 / h).clamp(0.0, 1.0);
        self.right = (rect.right() as f64 / w).clamp(0.0, 1.0);
        self.bottom = (rect.bottom() as f64 / h).clamp(0.0, 1.0);
    }
}
