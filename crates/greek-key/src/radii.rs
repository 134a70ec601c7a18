//! Frame radii for the circular border.
//!
//! The motif is drawn between five concentric rings `r_a..r_e`, enclosed by an
//! outer and an inner frame circle. Everything follows in closed form from the
//! outer radius and `n = PATTERN_UNIT_SIZE * pattern_count`:
//!
//! ```text
//! r_c = r_o / (6π/n + 1)
//! r_a = (5 r_c - 2 r_o) / 3      r_d = (2 r_c + r_o) / 3
//! r_b = (4 r_c - r_o) / 3        r_e = (r_c + 2 r_o) / 3
//! r_i = (6 r_c - 3 r_o) / 3
//! ```
//!
//! Consecutive radii are all `(r_o - r_c) / 3` apart, and `r_i > 0` holds
//! exactly when `n > 6π`, hence the `n >= 19` bound.

use std::f64::consts::PI;

use serde::Serialize;

use crate::config::{self, MIN_RING_UNITS, PATTERN_UNIT_SIZE};
use crate::error::GeometryError;

/// The seven radii of a circular border, innermost ring first.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FrameRadii {
    pub r_a: f64,
    pub r_b: f64,
    /// Middle ring.
    pub r_c: f64,
    pub r_d: f64,
    pub r_e: f64,
    /// Outer frame circle.
    pub outer: f64,
    /// Inner frame circle.
    pub inner: f64,
}

/// Solve the ring radii for an outer radius and `n` key units around the circle.
///
/// Fails with `InvalidConfiguration` when `n < 19` (checked before anything
/// else) or when the outer radius is not a positive finite number.
pub fn solve_radii(outer: f64, n: u32) -> Result<FrameRadii, GeometryError> {
    if n < MIN_RING_UNITS {
        return Err(GeometryError::invalid(format!(
            "ring units n must be >= {MIN_RING_UNITS}, got {n}"
        )));
    }
    let r_o = config::positive("outer radius", outer)?;

    let r_c = r_o / (6.0 * PI / n as f64 + 1.0);
    let radii = FrameRadii {
        r_a: (5.0 * r_c - 2.0 * r_o) / 3.0,
        r_b: (4.0 * r_c - r_o) / 3.0,
        r_c,
        r_d: (2.0 * r_c + r_o) / 3.0,
        r_e: (r_c + 2.0 * r_o) / 3.0,
        outer: r_o,
        inner: (6.0 * r_c - 3.0 * r_o) / 3.0,
    };

    tracing::debug!(
        n,
        outer = radii.outer,
        inner = radii.inner,
        r_c = radii.r_c,
        "solved frame radii"
    );
    Ok(radii)
}

/// Smallest outer radius whose rings sit at least one stroke width apart.
///
/// Below this the strokes of neighbouring rings merge visually even though the
/// geometry itself is still well formed.
pub fn min_outer_radius(pattern_count: u32, stroke_width: f64) -> f64 {
    let n = (PATTERN_UNIT_SIZE * pattern_count) as f64;
    let k = 6.0 * PI / n;
    3.0 * stroke_width.max(0.0) * (1.0 + k) / k
}

impl FrameRadii {
    /// The five ring radii in family order `a, b, c, d, e`.
    pub fn rings(&self) -> [f64; 5] {
        [self.r_a, self.r_b, self.r_c, self.r_d, self.r_e]
    }

    /// Common spacing between neighbouring radii.
    pub fn ring_gap(&self) -> f64 {
        (self.outer - self.r_c) / 3.0
    }

    /// Invert the solver: recover `(outer, n)` from the five ring radii.
    pub fn recover(&self) -> (f64, f64) {
        let gap = (self.r_e - self.r_a) / 4.0;
        let outer = self.r_e + gap;
        let r_c = outer - 3.0 * gap;
        let n = 6.0 * PI / (outer / r_c - 1.0);
        (outer, n)
    }
}
