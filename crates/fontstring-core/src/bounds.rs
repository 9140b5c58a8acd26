//! Empty-aware bounds accumulation.

use std::fmt;
use std::ops::AddAssign;

use crate::transform::Rect;

/// An axis-aligned bounding box, or the empty bound.
///
/// Starts empty; grows by union with points, rectangles or other bounds.
/// The empty bound is the identity of union, so accumulation loops need no
/// special first-iteration case.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    rect: Option<Rect>,
}

impl Bounds {
    /// The empty bound.
    pub const fn empty() -> Self {
        Bounds { rect: None }
    }

    /// Whether nothing has been accumulated yet.
    pub fn is_empty(&self) -> bool {
        self.rect.is_none()
    }

    /// The accumulated rectangle, or `None` when empty.
    pub fn rect(&self) -> Option<Rect> {
        self.rect
    }

    /// Grow to include a single point.
    pub fn include_point(&mut self, x: f64, y: f64) {
        self.include_rect(Rect::new(x, y, x, y));
    }

    /// Grow to include a rectangle.
    pub fn include_rect(&mut self, r: Rect) {
        self.rect = Some(match self.rect {
            None => r,
            Some(cur) => Rect::new(
                cur.x0.min(r.x0),
                cur.y0.min(r.y0),
                cur.x1.max(r.x1),
                cur.y1.max(r.y1),
            ),
        });
    }

    /// Grow to include another bounds value.
    pub fn union(&mut self, other: Bounds) {
        if let Some(r) = other.rect {
            self.include_rect(r);
        }
    }
}

impl From<Rect> for Bounds {
    fn from(r: Rect) -> Self {
        Bounds { rect: Some(r) }
    }
}

impl AddAssign<Rect> for Bounds {
    fn add_assign(&mut self, r: Rect) {
        self.include_rect(r);
    }
}

impl AddAssign<(f64, f64)> for Bounds {
    fn add_assign(&mut self, (x, y): (f64, f64)) {
        self.include_point(x, y);
    }
}

impl AddAssign<Bounds> for Bounds {
    fn add_assign(&mut self, other: Bounds) {
        self.union(other);
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rect {
            None => write!(f, "(empty)"),
            Some(r) => write!(f, "{r}"),
        }
    }
}
