//! Static decorative frames drawn around the key border.

use serde::Serialize;

use crate::geometry::Point;

/// A frame shape: an axis-aligned rectangle or a circle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum Frame {
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    Circle {
        center: Point,
        radius: f64,
    },
}

impl Frame {
    /// Bounding box as (min_x, min_y, max_x, max_y).
    pub fn bounding_box(&self) -> (f64, f64, f64, f64) {
        match *self {
            Frame::Rect { x, y, width, height } => (x, y, x + width, y + height),
            Frame::Circle { center, radius } => (
                center.x - radius,
                center.y - radius,
                center.x + radius,
                center.y + radius,
            ),
        }
    }
}
