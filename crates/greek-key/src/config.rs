//! Shared constants, drawing style, and parameter validation.

use serde::{Deserialize, Serialize};

use crate::error::GeometryError;

/// Number of key units in one repeat of the motif.
pub const PATTERN_UNIT_SIZE: u32 = 5;

/// Smallest `PATTERN_UNIT_SIZE * pattern_count` the circular radius solver
/// accepts. Below it the inner frame radius is no longer positive.
pub const MIN_RING_UNITS: u32 = 19;

/// Smallest number of repeats around a circle.
pub const MIN_PATTERN_COUNT: u32 = 4;

pub const DEFAULT_STROKE_WIDTH: f64 = 7.0;
pub const DEFAULT_STROKE_COLOR: &str = "#AB8E0E";
pub const DEFAULT_STROKE_OPACITY: f64 = 0.7;
pub const DEFAULT_BORDER_MARGIN: f64 = 1.0;

pub const DEFAULT_RECT_SIZE: f64 = 10.0;
pub const DEFAULT_RECT_WIDTH: u32 = 16;
pub const DEFAULT_RECT_HEIGHT: u32 = 9;

pub const DEFAULT_CIRCLE_PATTERN_COUNT: u32 = 30;
pub const DEFAULT_CIRCLE_RADIUS: f64 = 300.0;

/// Stroke styling applied to the contour and every frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Style {
    pub stroke_width: f64,
    pub stroke_color: String,
    /// 0.0 (transparent) to 1.0 (opaque)
    pub stroke_opacity: f64,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            stroke_width: DEFAULT_STROKE_WIDTH,
            stroke_color: DEFAULT_STROKE_COLOR.to_string(),
            stroke_opacity: DEFAULT_STROKE_OPACITY,
        }
    }
}

impl Style {
    pub fn validate(&self) -> Result<(), GeometryError> {
        non_negative("stroke_width", self.stroke_width)?;
        if !(0.0..=1.0).contains(&self.stroke_opacity) {
            return Err(GeometryError::invalid(format!(
                "stroke_opacity must be within 0.0..=1.0, got {}",
                self.stroke_opacity
            )));
        }
        if self.stroke_color.trim().is_empty() {
            return Err(GeometryError::invalid("stroke_color must not be empty"));
        }
        Ok(())
    }
}

/// Reject NaN, infinities, zero and negative values.
pub(crate) fn positive(name: &str, value: f64) -> Result<f64, GeometryError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(GeometryError::invalid(format!(
            "{name} must be a positive finite number, got {value}"
        )))
    }
}

/// Reject NaN, infinities and negative values.
pub(crate) fn non_negative(name: &str, value: f64) -> Result<f64, GeometryError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(GeometryError::invalid(format!(
            "{name} must be a non-negative finite number, got {value}"
        )))
    }
}

pub(crate) fn at_least(name: &str, value: u32, min: u32) -> Result<u32, GeometryError> {
    if value >= min {
        Ok(value)
    } else {
        Err(GeometryError::invalid(format!(
            "{name} must be >= {min}, got {value}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_style_matches_cli_defaults() {
        let style = Style::default();
        assert_eq!(style.stroke_width, 7.0);
        assert_eq!(style.stroke_color, "#AB8E0E");
        assert_eq!(style.stroke_opacity, 0.7);
        assert!(style.validate().is_ok());
    }

    #[test]
    fn style_rejects_bad_opacity() {
        let style = Style { stroke_opacity: 1.5, ..Style::default() };
        assert!(matches!(style.validate(), Err(GeometryError::InvalidConfiguration(_))));
    }

    #[test]
    fn style_rejects_empty_color() {
        let style = Style { stroke_color: "  ".into(), ..Style::default() };
        assert!(style.validate().is_err());
    }

    #[test]
    fn validators() {
        assert!(positive("unit", 1.0).is_ok());
        assert!(positive("unit", 0.0).is_err());
        assert!(positive("unit", f64::NAN).is_err());
        assert!(non_negative("margin", 0.0).is_ok());
        assert!(non_negative("margin", -1.0).is_err());
        assert!(non_negative("margin", f64::INFINITY).is_err());
        assert_eq!(at_least("count", 4, 4), Ok(4));
        assert!(at_least("count", 3, 4).is_err());
    }
}
