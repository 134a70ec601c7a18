//! Closed contour: the single continuous path that traces the key border.

use serde::Serialize;

use crate::geometry::{self, Line, Point};

/// One absolute path instruction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    Close,
}

/// An ordered sequence of path commands: one move, many lines, one close.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Contour {
    commands: Vec<PathCommand>,
}

impl Contour {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty contour with room for `segments` line commands.
    pub fn with_capacity(segments: usize) -> Self {
        Self { commands: Vec::with_capacity(segments + 2) }
    }

    pub fn move_to(&mut self, p: Point) {
        self.commands.push(PathCommand::MoveTo(p));
    }

    pub fn line_to(&mut self, p: Point) {
        self.commands.push(PathCommand::LineTo(p));
    }

    pub fn close(&mut self) {
        self.commands.push(PathCommand::Close);
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Every emitted point in order (the close command contributes none).
    pub fn points(&self) -> Vec<Point> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                PathCommand::MoveTo(p) | PathCommand::LineTo(p) => Some(*p),
                PathCommand::Close => None,
            })
            .collect()
    }

    /// Number of line-to commands.
    pub fn segment_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|cmd| matches!(cmd, PathCommand::LineTo(_)))
            .count()
    }

    pub fn first_point(&self) -> Option<Point> {
        self.commands.iter().find_map(|cmd| match cmd {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => Some(*p),
            PathCommand::Close => None,
        })
    }

    pub fn last_point(&self) -> Option<Point> {
        self.commands.iter().rev().find_map(|cmd| match cmd {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => Some(*p),
            PathCommand::Close => None,
        })
    }

    /// True when the path ends with a close command and its last point lands
    /// back on its first point.
    pub fn is_closed(&self, eps: f64) -> bool {
        if !matches!(self.commands.last(), Some(PathCommand::Close)) {
            return false;
        }
        match (self.first_point(), self.last_point()) {
            (Some(first), Some(last)) => first.approx_eq(last, eps),
            _ => false,
        }
    }

    pub fn bounding_box(&self) -> Option<(f64, f64, f64, f64)> {
        geometry::bounding_box(&self.points())
    }

    /// The drawn segments as individual lines.
    pub fn to_lines(&self) -> Vec<Line> {
        let mut lines = Vec::with_capacity(self.segment_count());
        let mut cursor: Option<Point> = None;
        let mut subpath_start: Option<Point> = None;

        for cmd in &self.commands {
            match *cmd {
                PathCommand::MoveTo(p) => {
                    cursor = Some(p);
                    subpath_start = Some(p);
                }
                PathCommand::LineTo(p) => {
                    if let Some(from) = cursor {
                        lines.push(Line::between(from, p));
                    }
                    cursor = Some(p);
                }
                PathCommand::Close => {
                    if let (Some(from), Some(to)) = (cursor, subpath_start) {
                        if !from.approx_eq(to, 1e-9) {
                            lines.push(Line::between(from, to));
                        }
                    }
                    cursor = subpath_start;
                }
            }
        }

        lines
    }

    /// Absolute SVG path data, e.g. `M18 68 L18 58 ... Z`.
    pub fn to_path_data(&self) -> String {
        let mut d = String::with_capacity(self.commands.len() * 16);
        for cmd in &self.commands {
            if !d.is_empty() {
                d.push(' ');
            }
            match cmd {
                PathCommand::MoveTo(p) => d.push_str(&format!("M{} {}", fmt_coord(p.x), fmt_coord(p.y))),
                PathCommand::LineTo(p) => d.push_str(&format!("L{} {}", fmt_coord(p.x), fmt_coord(p.y))),
                PathCommand::Close => d.push('Z'),
            }
        }
        d
    }
}

/// Format a coordinate with at most three decimals and no trailing zeros.
pub(crate) fn fmt_coord(v: f64) -> String {
    let s = format!("{:.3}", v);
    let s = if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    };
    if s == "-0" { "0".to_string() } else { s }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Contour {
        let mut c = Contour::new();
        c.move_to(Point::new(0.0, 0.0));
        c.line_to(Point::new(10.0, 0.0));
        c.line_to(Point::new(10.0, 10.0));
        c.line_to(Point::new(0.0, 10.0));
        c.line_to(Point::new(0.0, 0.0));
        c.close();
        c
    }

    #[test]
    fn counts_and_endpoints() {
        let c = square();
        assert_eq!(c.commands().len(), 6);
        assert_eq!(c.segment_count(), 4);
        assert_eq!(c.first_point(), Some(Point::new(0.0, 0.0)));
        assert_eq!(c.last_point(), Some(Point::new(0.0, 0.0)));
        assert!(c.is_closed(1e-9));
    }

    #[test]
    fn open_path_is_not_closed() {
        let mut c = Contour::new();
        c.move_to(Point::new(0.0, 0.0));
        c.line_to(Point::new(5.0, 0.0));
        c.close();
        assert!(!c.is_closed(1e-9));

        let mut unterminated = square();
        unterminated.commands.pop();
        assert!(!unterminated.is_closed(1e-9));
        assert!(!Contour::new().is_closed(1e-9));
    }

    #[test]
    fn lines_skip_zero_length_close() {
        let lines = square().to_lines();
        assert_eq!(lines.len(), 4);
        assert!(lines.iter().all(|l| (l.length() - 10.0).abs() < 1e-12));
    }

    #[test]
    fn path_data_format() {
        let mut c = Contour::new();
        c.move_to(Point::new(18.0, 68.0));
        c.line_to(Point::new(18.5, -0.0004));
        c.line_to(Point::new(1.23456, 2.0));
        c.close();
        assert_eq!(c.to_path_data(), "M18 68 L18.5 0 L1.235 2 Z");
    }

    #[test]
    fn bbox() {
        let c = square();
        assert_eq!(c.bounding_box(), Some((0.0, 0.0, 10.0, 10.0)));
    }
}
