//! Circular Greek key border.
//!
//! The key is drawn between five concentric rings (see [`radii`](crate::radii)).
//! Every repeat takes six evenly spaced points on each ring, joins them with
//! the ten segments of [`CIRCLE_STENCIL`], and hands each ring's last point to
//! the next repeat as its first. All rings turn through the same angle per
//! repeat, so the five families stay in step all the way round.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::config::{
    self, DEFAULT_BORDER_MARGIN, DEFAULT_CIRCLE_PATTERN_COUNT, DEFAULT_CIRCLE_RADIUS,
    DEFAULT_STROKE_WIDTH, MIN_PATTERN_COUNT, PATTERN_UNIT_SIZE,
};
use crate::contour::Contour;
use crate::error::GeometryError;
use crate::frame::Frame;
use crate::geometry::{Canvas, Point};
use crate::pattern::KeyGeometry;
use crate::radii::{FrameRadii, solve_radii};
use crate::stencil::{CIRCLE_STENCIL, Ring};

/// User parameters for a circular border.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CircleConfig {
    pub outer_radius: f64,
    /// Number of key repeats around the circle.
    pub pattern_count: u32,
    pub border_margin: f64,
    pub stroke_width: f64,
}

impl Default for CircleConfig {
    fn default() -> Self {
        Self {
            outer_radius: DEFAULT_CIRCLE_RADIUS,
            pattern_count: DEFAULT_CIRCLE_PATTERN_COUNT,
            border_margin: DEFAULT_BORDER_MARGIN,
            stroke_width: DEFAULT_STROKE_WIDTH,
        }
    }
}

/// Validated circular border geometry with its solved radii.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleKey {
    config: CircleConfig,
    radii: FrameRadii,
}

impl CircleKey {
    pub fn new(config: CircleConfig) -> Result<Self, GeometryError> {
        let n = PATTERN_UNIT_SIZE.checked_mul(config.pattern_count).ok_or_else(|| {
            GeometryError::invalid(format!("pattern_count {} is too large", config.pattern_count))
        })?;
        let radii = solve_radii(config.outer_radius, n)?;
        // Implied by the n >= 19 check above.
        config::at_least("pattern_count", config.pattern_count, MIN_PATTERN_COUNT)?;
        config::non_negative("border_margin", config.border_margin)?;
        config::non_negative("stroke_width", config.stroke_width)?;
        Ok(Self { config, radii })
    }

    pub fn config(&self) -> &CircleConfig {
        &self.config
    }

    pub fn radii(&self) -> &FrameRadii {
        &self.radii
    }

    pub fn pattern_count(&self) -> u32 {
        self.config.pattern_count
    }

    pub fn canvas_size(&self) -> Canvas {
        let side = 2.0 * self.radii.outer + 2.0 * self.config.border_margin + 2.0 * self.config.stroke_width;
        Canvas::new(side, side)
    }

    pub fn centre(&self) -> Point {
        let offset = self.config.border_margin + self.radii.outer + self.config.stroke_width;
        Point::new(offset, offset)
    }

    /// Top of the circle of radius `r`.
    pub fn start_position(&self, r: f64) -> Point {
        let c = self.centre();
        Point::new(c.x, c.y - r)
    }

    /// Angle between neighbouring points of one repeat (a fifth of a repeat).
    pub fn angular_step(&self) -> f64 {
        2.0 * PI / (PATTERN_UNIT_SIZE as f64 * self.config.pattern_count as f64)
    }

    /// Six points on the circle of radius `radius`, starting at `current` and
    /// advancing by one key unit of arc each.
    ///
    /// The unit arc length is scaled to `radius`, so every ring turns through
    /// the same angle.
    pub fn step_arc(&self, current: Point, radius: f64) -> [Point; 6] {
        let c = self.centre();
        let unit_arc = 2.0 * PI * radius / (PATTERN_UNIT_SIZE as f64 * self.config.pattern_count as f64);
        let step = unit_arc / radius;
        let theta = (current.y - c.y).atan2(current.x - c.x);

        std::array::from_fn(|i| {
            if i == 0 {
                current
            } else {
                let angle = theta + i as f64 * step;
                Point::new(c.x + radius * angle.cos(), c.y + radius * angle.sin())
            }
        })
    }

    /// Build the closed border contour.
    pub fn contour(&self) -> Contour {
        let rings = self.radii.rings();
        let repeats = self.config.pattern_count as usize;
        let mut contour = Contour::with_capacity(repeats * CIRCLE_STENCIL.len());

        let mut rolling: [Point; 5] = rings.map(|r| self.start_position(r));
        contour.move_to(rolling[Ring::A.index()]);

        for repeat in 0..repeats {
            let sets: [[Point; 6]; 5] =
                std::array::from_fn(|family| self.step_arc(rolling[family], rings[family]));

            for (ring, idx) in CIRCLE_STENCIL {
                contour.line_to(sets[ring.index()][idx]);
            }

            rolling = sets.map(|set| set[5]);
            tracing::trace!(repeat, end = ?rolling[Ring::A.index()], "repeat done");
        }

        contour.close();
        contour
    }

    /// Outer and inner frame circles.
    pub fn frames(&self) -> Vec<Frame> {
        let center = self.centre();
        vec![
            Frame::Circle { center, radius: self.radii.outer },
            Frame::Circle { center, radius: self.radii.inner },
        ]
    }

    pub fn generate(&self) -> KeyGeometry {
        let contour = self.contour();
        tracing::debug!(
            pattern_count = self.config.pattern_count,
            segments = contour.segment_count(),
            "generated circular contour"
        );
        KeyGeometry {
            canvas: self.canvas_size(),
            contour,
            frames: self.frames(),
        }
    }
}
