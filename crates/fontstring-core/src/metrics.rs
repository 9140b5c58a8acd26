//! String and font-cell metrics.

use crate::transform::{Rect, Transform};

/// The six-value metric a font host reports for a string (or for the font
/// cell itself), in millipoints.
///
/// `(x0, y0, x1, y1)` is the ink bounding box relative to the paint origin;
/// `(dx, dy)` is the cursor advance after painting.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextMetrics {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
    pub dx: f64,
    pub dy: f64,
}

impl TextMetrics {
    /// A zero metric: no ink, no advance.
    pub const ZERO: TextMetrics = TextMetrics {
        x0: 0.0,
        y0: 0.0,
        x1: 0.0,
        y1: 0.0,
        dx: 0.0,
        dy: 0.0,
    };

    /// Build a metric from a bounding box and an advance.
    pub const fn new(x0: f64, y0: f64, x1: f64, y1: f64, dx: f64, dy: f64) -> Self {
        TextMetrics {
            x0,
            y0,
            x1,
            y1,
            dx,
            dy,
        }
    }

    /// A pure advance with no ink, as produced by move records.
    pub const fn advance(dx: f64, dy: f64) -> Self {
        TextMetrics {
            x0: 0.0,
            y0: 0.0,
            x1: 0.0,
            y1: 0.0,
            dx,
            dy,
        }
    }

    /// The ink bounding box.
    pub fn rect(&self) -> Rect {
        Rect::new(self.x0, self.y0, self.x1, self.y1)
    }

    /// Apply a render transform to the metric.
    ///
    /// The bounding box becomes the axis-aligned envelope of its transformed
    /// corners; the advance is mapped as a point. Identity transforms pass
    /// the metric through unchanged.
    pub fn transformed(&self, transform: &Transform) -> Self {
        if transform.is_identity() {
            return *self;
        }
        let r = transform.bbox(self.x0, self.y0, self.x1, self.y1);
        let (dx, dy) = transform.apply(self.dx, self.dy);
        TextMetrics {
            x0: r.x0,
            y0: r.y0,
            x1: r.x1,
            y1: r.y1,
            dx,
            dy,
        }
    }
}
