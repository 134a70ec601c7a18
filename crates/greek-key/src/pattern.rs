//! Pattern selection and the generated geometry handed to renderers.

use serde::Serialize;

use crate::circle::{CircleConfig, CircleKey};
use crate::contour::Contour;
use crate::error::GeometryError;
use crate::frame::Frame;
use crate::geometry::Canvas;
use crate::rect::{RectConfig, RectKey};

/// Everything a renderer needs: canvas size, the closed key contour, and the
/// frames around it. Recomputed in full on every `generate` call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeyGeometry {
    pub canvas: Canvas,
    pub contour: Contour,
    pub frames: Vec<Frame>,
}

/// Available border arrangements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternKind {
    Rect,
    Circle,
}

impl PatternKind {
    pub fn all() -> &'static [PatternKind] {
        &[PatternKind::Rect, PatternKind::Circle]
    }

    pub fn name(&self) -> &'static str {
        match self {
            PatternKind::Rect => "rect",
            PatternKind::Circle => "circle",
        }
    }

    /// Brief description for help output.
    pub fn description(&self) -> &'static str {
        match self {
            PatternKind::Rect => "A rectangle of Greek keys",
            PatternKind::Circle => "A circle of Greek keys",
        }
    }

    /// Parse pattern type from string.
    pub fn from_name(name: &str) -> Option<PatternKind> {
        match name.to_lowercase().as_str() {
            "rect" | "rectangle" => Some(PatternKind::Rect),
            "circle" | "ring" => Some(PatternKind::Circle),
            _ => None,
        }
    }
}

/// A validated border of either arrangement.
#[derive(Debug, Clone, PartialEq)]
pub enum KeyPattern {
    Rect(RectKey),
    Circle(CircleKey),
}

impl KeyPattern {
    pub fn rect(config: RectConfig) -> Result<Self, GeometryError> {
        RectKey::new(config).map(KeyPattern::Rect)
    }

    pub fn circle(config: CircleConfig) -> Result<Self, GeometryError> {
        CircleKey::new(config).map(KeyPattern::Circle)
    }

    pub fn kind(&self) -> PatternKind {
        match self {
            KeyPattern::Rect(_) => PatternKind::Rect,
            KeyPattern::Circle(_) => PatternKind::Circle,
        }
    }

    pub fn name(&self) -> &'static str {
        self.kind().name()
    }

    pub fn canvas_size(&self) -> Canvas {
        match self {
            KeyPattern::Rect(key) => key.canvas_size(),
            KeyPattern::Circle(key) => key.canvas_size(),
        }
    }

    /// Generate contour and frames.
    pub fn generate(&self) -> KeyGeometry {
        match self {
            KeyPattern::Rect(key) => key.generate(),
            KeyPattern::Circle(key) => key.generate(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn geometry_types_are_thread_safe() {
        assert_send_sync::<KeyPattern>();
        assert_send_sync::<KeyGeometry>();
    }

    #[test]
    fn kind_names_round_trip() {
        for kind in PatternKind::all() {
            assert_eq!(PatternKind::from_name(kind.name()), Some(*kind));
        }
        assert_eq!(PatternKind::from_name("RECT"), Some(PatternKind::Rect));
        assert_eq!(PatternKind::from_name("hexagon"), None);
    }

    #[test]
    fn dispatch_matches_variant() {
        let rect = KeyPattern::rect(RectConfig::default()).unwrap();
        assert_eq!(rect.name(), "rect");
        assert_eq!(rect.canvas_size(), rect.generate().canvas);
        assert_eq!(rect.generate().frames.len(), 2);

        let circle = KeyPattern::circle(CircleConfig::default()).unwrap();
        assert_eq!(circle.kind(), PatternKind::Circle);
        assert_eq!(circle.generate().contour.segment_count(), 300);
    }

    #[test]
    fn invalid_circle_fails_before_generation() {
        let result = KeyPattern::circle(CircleConfig { pattern_count: 3, ..CircleConfig::default() });
        assert!(matches!(result, Err(GeometryError::InvalidConfiguration(_))));
    }

    #[test]
    fn parallel_generation_agrees() {
        let pattern = KeyPattern::circle(CircleConfig::default()).unwrap();
        let expected = pattern.generate();

        thread::scope(|s| {
            let handles: Vec<_> = (0..4).map(|_| s.spawn(|| pattern.generate())).collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), expected);
            }
        });
    }

    #[test]
    fn geometry_serializes_to_json() {
        let geometry = KeyPattern::circle(CircleConfig { pattern_count: 4, outer_radius: 100.0, ..CircleConfig::default() })
            .unwrap()
            .generate();
        let json = serde_json::to_value(&geometry).unwrap();
        assert_eq!(json["canvas"]["width"], 216.0);
        assert_eq!(json["contour"]["commands"].as_array().unwrap().len(), 42);
        assert_eq!(json["contour"]["commands"][0]["cmd"], "move_to");
        assert_eq!(json["contour"]["commands"][41]["cmd"], "close");
        assert_eq!(json["frames"][0]["shape"], "circle");
    }
}
