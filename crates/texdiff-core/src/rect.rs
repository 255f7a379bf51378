//! Page-local highlight rectangles.

use crate::error::PageMismatch;

/// An axis-aligned box on a single page (0-based page index).
///
/// Coordinates are stored normalized: `x1 <= x2` and `y1 <= y2`, always,
/// enforced on construction. Values are in the page coordinate system used
/// by the overlay (points, y growing downward from the page top).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub page: usize,
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Rect {
    /// Create a rectangle, normalizing the corner order.
    pub fn new(page: usize, x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            page,
            x1: x1.min(x2),
            y1: y1.min(y2),
            x2: x1.max(x2),
            y2: y1.max(y2),
        }
    }

    /// Non-negative by the normalization invariant.
    pub fn area(&self) -> f64 {
        (self.x2 - self.x1) * (self.y2 - self.y1)
    }

    /// Bounding box of `self` and `other`.
    ///
    /// A zero-area operand is the identity: the other rectangle is returned
    /// unchanged. Rectangles on different pages cannot be merged.
    pub fn merge(&self, other: &Rect) -> Result<Rect, PageMismatch> {
        if self.page != other.page {
            return Err(PageMismatch {
                left: self.page,
                right: other.page,
            });
        }
        if self.area() == 0.0 {
            return Ok(*other);
        }
        if other.area() == 0.0 {
            return Ok(*self);
        }
        Ok(Rect::new(
            self.page,
            self.x1.min(other.x1),
            self.y1.min(other.y1),
            self.x2.max(other.x2),
            self.y2.max(other.y2),
        ))
    }

    /// TikZ path fragment for this rectangle.
    pub fn tex(&self) -> String {
        format!(
            "({}, {}) rectangle ({}, {})",
            self.x1, self.y1, self.x2, self.y2
        )
    }
}
