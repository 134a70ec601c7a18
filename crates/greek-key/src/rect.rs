//! Rectangular Greek key border.
//!
//! The contour starts just below the top-left corner, walks the top edge left
//! to right, the right edge downwards, the bottom edge right to left and the
//! left edge upwards, then closes. Each edge repeats one oriented key from
//! [`stencil`](crate::stencil); fixed corner moves join the edges.
//!
//! The cursor lives on an integer lattice of key units anchored at the outer
//! frame corner, so a border of any length lands exactly back on its start.

use serde::{Deserialize, Serialize};

use crate::config::{
    self, DEFAULT_BORDER_MARGIN, DEFAULT_RECT_HEIGHT, DEFAULT_RECT_SIZE, DEFAULT_RECT_WIDTH,
    DEFAULT_STROKE_WIDTH, PATTERN_UNIT_SIZE,
};
use crate::contour::Contour;
use crate::error::GeometryError;
use crate::frame::Frame;
use crate::geometry::{Canvas, Point};
use crate::pattern::KeyGeometry;
use crate::stencil::{
    BOTTOM_LEFT_CORNER, BOTTOM_RIGHT_CORNER, CORNER_MOVES, Heading, LEAD_IN, Move,
    TOP_RIGHT_CORNER,
};

/// Smallest number of keys along either edge; fewer leaves no inner frame.
pub const MIN_EDGE_UNITS: u32 = 3;

/// Lattice position of the contour start, relative to the outer frame corner.
const START: GridPos = GridPos { col: 1, row: 6 };

/// User parameters for a rectangular border.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RectConfig {
    /// Length of one key unit (a fifth of a repeat).
    pub key_unit_length: f64,
    /// Number of repeats along the top and bottom edges.
    pub width_units: u32,
    /// Number of repeats along the left and right edges.
    pub height_units: u32,
    pub border_margin: f64,
    pub stroke_width: f64,
}

impl Default for RectConfig {
    fn default() -> Self {
        Self {
            key_unit_length: DEFAULT_RECT_SIZE,
            width_units: DEFAULT_RECT_WIDTH,
            height_units: DEFAULT_RECT_HEIGHT,
            border_margin: DEFAULT_BORDER_MARGIN,
            stroke_width: DEFAULT_STROKE_WIDTH,
        }
    }
}

/// A cursor position in whole key units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridPos {
    pub col: i64,
    pub row: i64,
}

impl GridPos {
    #[inline]
    pub fn offset(self, m: Move) -> Self {
        Self {
            col: self.col + m.dx as i64,
            row: self.row + m.dy as i64,
        }
    }
}

/// Draw one key heading in `heading` from `cursor`.
///
/// Returns the cursor after the key and the ten lattice points the key visits
/// (the last of which equals the new cursor).
pub fn step_unit(heading: Heading, cursor: GridPos) -> (GridPos, [GridPos; 10]) {
    let stencil = heading.stencil();
    let mut pos = cursor;
    let points = std::array::from_fn(|i| {
        pos = pos.offset(stencil[i]);
        pos
    });
    (pos, points)
}

/// Validated rectangular border geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct RectKey {
    config: RectConfig,
}

impl RectKey {
    pub fn new(config: RectConfig) -> Result<Self, GeometryError> {
        config::positive("key_unit_length", config.key_unit_length)?;
        config::at_least("width_units", config.width_units, MIN_EDGE_UNITS)?;
        config::at_least("height_units", config.height_units, MIN_EDGE_UNITS)?;
        config::non_negative("border_margin", config.border_margin)?;
        config::non_negative("stroke_width", config.stroke_width)?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &RectConfig {
        &self.config
    }

    pub fn key_unit_length(&self) -> f64 {
        self.config.key_unit_length
    }

    /// Length of one full repeat.
    pub fn key_pattern_length(&self) -> f64 {
        self.config.key_unit_length * PATTERN_UNIT_SIZE as f64
    }

    /// Offset of the outer frame from the canvas edge.
    fn inset(&self) -> f64 {
        self.config.border_margin + self.config.stroke_width
    }

    pub fn canvas_size(&self) -> Canvas {
        let unit = self.config.key_unit_length;
        let pad = 2.0 * self.inset() + 2.0 * unit;
        Canvas::new(
            self.config.width_units as f64 * self.key_pattern_length() + pad,
            self.config.height_units as f64 * self.key_pattern_length() + pad,
        )
    }

    /// Canvas position of a lattice point.
    pub fn to_canvas(&self, pos: GridPos) -> Point {
        let unit = self.config.key_unit_length;
        let inset = self.inset();
        Point::new(inset + pos.col as f64 * unit, inset + pos.row as f64 * unit)
    }

    pub fn start_position(&self) -> Point {
        self.to_canvas(START)
    }

    pub fn outer_frame(&self) -> Frame {
        let unit = self.config.key_unit_length;
        Frame::Rect {
            x: self.inset(),
            y: self.inset(),
            width: self.config.width_units as f64 * self.key_pattern_length() + 2.0 * unit,
            height: self.config.height_units as f64 * self.key_pattern_length() + 2.0 * unit,
        }
    }

    /// Inner frame, six units in from every side of the outer frame.
    pub fn inner_frame(&self) -> Frame {
        let offset = 6.0 * self.config.key_unit_length + self.inset();
        Frame::Rect {
            x: offset,
            y: offset,
            width: (self.config.width_units - 2) as f64 * self.key_pattern_length(),
            height: (self.config.height_units - 2) as f64 * self.key_pattern_length(),
        }
    }

    pub fn frames(&self) -> Vec<Frame> {
        vec![self.outer_frame(), self.inner_frame()]
    }

    /// Corner moves, heading and repeat count for each edge, in walk order.
    fn edges(&self) -> [(&'static [Move], Heading, u32); 4] {
        let across = self.config.width_units - 1;
        let down = self.config.height_units - 1;
        [
            (&LEAD_IN[..], Heading::East, across),
            (&TOP_RIGHT_CORNER[..], Heading::South, down),
            (&BOTTOM_RIGHT_CORNER[..], Heading::West, across),
            (&BOTTOM_LEFT_CORNER[..], Heading::North, down),
        ]
    }

    /// Number of line segments in the contour.
    pub fn segment_count(&self) -> usize {
        let keys = 2 * (self.config.width_units as usize - 1) + 2 * (self.config.height_units as usize - 1);
        keys * 10 + CORNER_MOVES
    }

    /// Build the closed border contour.
    pub fn contour(&self) -> Contour {
        let mut contour = Contour::with_capacity(self.segment_count());
        let mut cursor = START;
        contour.move_to(self.to_canvas(cursor));

        for (corner, heading, repeats) in self.edges() {
            for &m in corner {
                cursor = cursor.offset(m);
                contour.line_to(self.to_canvas(cursor));
            }
            for _ in 0..repeats {
                let (next, points) = step_unit(heading, cursor);
                for p in points {
                    contour.line_to(self.to_canvas(p));
                }
                cursor = next;
            }
            tracing::trace!(?heading, repeats, ?cursor, "edge done");
        }

        debug_assert_eq!(cursor, START);
        contour.close();
        contour
    }

    pub fn generate(&self) -> KeyGeometry {
        let contour = self.contour();
        tracing::debug!(
            width_units = self.config.width_units,
            height_units = self.config.height_units,
            segments = contour.segment_count(),
            "generated rectangular contour"
        );
        KeyGeometry {
            canvas: self.canvas_size(),
            contour,
            frames: self.frames(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contour::PathCommand;
    use proptest::prelude::*;

    fn default_key() -> RectKey {
        RectKey::new(RectConfig::default()).unwrap()
    }

    /// Integer lattice coordinates of every contour point.
    fn lattice(key: &RectKey) -> Vec<(i64, i64)> {
        let unit = key.key_unit_length();
        let inset = key.config().border_margin + key.config().stroke_width;
        key.contour()
            .points()
            .iter()
            .map(|p| {
                (
                    ((p.x - inset) / unit).round() as i64,
                    ((p.y - inset) / unit).round() as i64,
                )
            })
            .collect()
    }

    fn cells(a: (i64, i64), b: (i64, i64)) -> Vec<(i64, i64)> {
        if a.0 == b.0 {
            (a.1.min(b.1)..=a.1.max(b.1)).map(|y| (a.0, y)).collect()
        } else {
            (a.0.min(b.0)..=a.0.max(b.0)).map(|x| (x, a.1)).collect()
        }
    }

    #[test]
    fn canvas_matches_frame_arithmetic() {
        let key = default_key();
        // 16*50 + 2*margin + 2*unit + 2*stroke
        assert_eq!(key.canvas_size(), Canvas::new(16.0 * 50.0 + 2.0 + 20.0 + 14.0, 9.0 * 50.0 + 2.0 + 20.0 + 14.0));
        assert_eq!(key.canvas_size().width, 836.0);
        assert_eq!(key.canvas_size().height, 486.0);
    }

    #[test]
    fn frames_for_defaults() {
        let key = default_key();
        assert_eq!(
            key.outer_frame(),
            Frame::Rect { x: 8.0, y: 8.0, width: 820.0, height: 470.0 }
        );
        assert_eq!(
            key.inner_frame(),
            Frame::Rect { x: 68.0, y: 68.0, width: 700.0, height: 350.0 }
        );
    }

    #[test]
    fn inner_frame_is_inset_six_units_on_every_side() {
        let key = default_key();
        let (ox0, oy0, ox1, oy1) = key.outer_frame().bounding_box();
        let (ix0, iy0, ix1, iy1) = key.inner_frame().bounding_box();
        for gap in [ix0 - ox0, iy0 - oy0, ox1 - ix1, oy1 - iy1] {
            assert!((gap - 60.0).abs() < 1e-9, "gap {gap}");
        }
    }

    #[test]
    fn start_position() {
        assert_eq!(default_key().start_position(), Point::new(18.0, 68.0));
    }

    #[test]
    fn segment_count_formula() {
        let key = default_key();
        let contour = key.contour();
        let expected = 10 * ((16 - 1) + (9 - 1)) * 2 + CORNER_MOVES;
        assert_eq!(expected, 466);
        assert_eq!(contour.segment_count(), expected);
        assert_eq!(key.segment_count(), expected);
        // one move + segments + one close
        assert_eq!(contour.commands().len(), expected + 2);
        assert!(matches!(contour.commands()[0], PathCommand::MoveTo(_)));
        assert!(matches!(contour.commands().last(), Some(PathCommand::Close)));
    }

    #[test]
    fn first_moves_follow_lead_in_and_stencil() {
        let pts = default_key().contour().points();
        assert_eq!(pts[0], Point::new(18.0, 68.0));
        assert_eq!(pts[1], Point::new(18.0, 58.0)); // v(-u)
        assert_eq!(pts[2], Point::new(18.0, 18.0)); // v(-4u)
        assert_eq!(pts[3], Point::new(58.0, 18.0)); // h(4u)
        assert_eq!(pts[4], Point::new(58.0, 48.0)); // v(3u)
        assert_eq!(pts[11], Point::new(68.0, 58.0)); // one key later
    }

    #[test]
    fn contour_is_closed() {
        let contour = default_key().contour();
        assert!(contour.is_closed(1e-9));
        assert_eq!(contour.first_point(), contour.last_point());
    }

    #[test]
    fn contour_sits_one_unit_inside_outer_frame() {
        let key = default_key();
        let (x0, y0, x1, y1) = key.contour().bounding_box().unwrap();
        assert_eq!((x0, y0, x1, y1), (18.0, 18.0, 818.0, 468.0));
    }

    #[test]
    fn segments_are_axis_aligned_unit_multiples() {
        let key = default_key();
        for line in key.contour().to_lines() {
            assert!(line.x1 == line.x2 || line.y1 == line.y2, "{line:?}");
            let len = line.length();
            assert!(len > 0.0);
            assert!((len / 10.0 - (len / 10.0).round()).abs() < 1e-9);
        }
    }

    #[test]
    fn contour_never_touches_itself() {
        for (w, h) in [(3, 3), (4, 7), (16, 9)] {
            let key = RectKey::new(RectConfig { width_units: w, height_units: h, ..RectConfig::default() }).unwrap();
            let pts = lattice(&key);
            let segs: Vec<Vec<(i64, i64)>> = pts.windows(2).map(|s| cells(s[0], s[1])).collect();
            let n = segs.len();
            for i in 0..n {
                for j in (i + 1)..n {
                    let shared = segs[i].iter().filter(|c| segs[j].contains(c)).count();
                    let adjacent = j == i + 1 || (i == 0 && j == n - 1);
                    let allowed = if adjacent { 1 } else { 0 };
                    assert_eq!(shared, allowed, "{w}x{h}: segments {i} and {j} overlap");
                }
            }
        }
    }

    #[test]
    fn step_unit_returns_end_cursor() {
        let (end, points) = step_unit(Heading::East, GridPos { col: 0, row: 0 });
        assert_eq!(end, GridPos { col: 5, row: 0 });
        assert_eq!(points[9], end);
        assert_eq!(points[0], GridPos { col: 0, row: -4 });

        let (end, _) = step_unit(Heading::North, GridPos { col: 0, row: 0 });
        assert_eq!(end, GridPos { col: 0, row: -5 });
    }

    #[test]
    fn generation_is_idempotent() {
        let key = default_key();
        assert_eq!(key.generate(), key.generate());
    }

    #[test]
    fn rejects_invalid_parameters() {
        let bad = [
            RectConfig { key_unit_length: 0.0, ..RectConfig::default() },
            RectConfig { key_unit_length: -3.0, ..RectConfig::default() },
            RectConfig { width_units: 2, ..RectConfig::default() },
            RectConfig { height_units: 0, ..RectConfig::default() },
            RectConfig { border_margin: -1.0, ..RectConfig::default() },
            RectConfig { stroke_width: f64::NAN, ..RectConfig::default() },
        ];
        for config in bad {
            assert!(
                matches!(RectKey::new(config.clone()), Err(GeometryError::InvalidConfiguration(_))),
                "{config:?} should be rejected"
            );
        }
    }

    proptest! {
        #[test]
        fn any_valid_rect_closes(
            unit in 0.5f64..50.0,
            w in 3u32..40,
            h in 3u32..40,
            margin in 0.0f64..20.0,
            stroke in 0.0f64..10.0,
        ) {
            let key = RectKey::new(RectConfig {
                key_unit_length: unit,
                width_units: w,
                height_units: h,
                border_margin: margin,
                stroke_width: stroke,
            }).unwrap();
            let contour = key.contour();
            prop_assert!(contour.is_closed(1e-9));
            prop_assert_eq!(contour.segment_count(), key.segment_count());

            let (x0, y0, x1, y1) = contour.bounding_box().unwrap();
            let (fx0, fy0, fx1, fy1) = key.outer_frame().bounding_box();
            prop_assert!((x0 - (fx0 + unit)).abs() < 1e-9);
            prop_assert!((y0 - (fy0 + unit)).abs() < 1e-9);
            prop_assert!((x1 - (fx1 - unit)).abs() < 1e-9);
            prop_assert!((y1 - (fy1 - unit)).abs() < 1e-9);
        }
    }
}
