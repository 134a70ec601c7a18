//! Fixed segment tables for the Greek key motif.
//!
//! One repeat of the key is always ten line segments. The rectangular border
//! walks a relative stencil around the four edges; the circular border joins
//! precomputed points on five concentric rings. Both are plain lookup tables
//! so the drawing order can be inspected and tested on its own.

/// A relative axis-aligned move, in multiples of the key unit length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub dx: i32,
    pub dy: i32,
}

impl Move {
    /// Horizontal move (positive = right).
    pub const fn h(units: i32) -> Self {
        Self { dx: units, dy: 0 }
    }

    /// Vertical move (positive = down).
    pub const fn v(units: i32) -> Self {
        Self { dx: 0, dy: units }
    }
}

/// One key drawn left to right along the top edge, starting on its baseline.
///
/// Net displacement is five units to the right.
pub const BASE_STENCIL: [Move; 10] = [
    Move::v(-4),
    Move::h(4),
    Move::v(3),
    Move::h(-2),
    Move::v(-1),
    Move::h(1),
    Move::v(-1),
    Move::h(-2),
    Move::v(3),
    Move::h(4),
];

/// Moves from the start position up onto the top edge baseline.
pub const LEAD_IN: [Move; 1] = [Move::v(-1)];

/// Turn from the top edge into the right edge.
pub const TOP_RIGHT_CORNER: [Move; 2] = [Move::v(-4), Move::h(1)];

/// Turn from the right edge into the bottom edge.
pub const BOTTOM_RIGHT_CORNER: [Move; 2] = [Move::h(4), Move::v(5)];

/// Turn from the bottom edge into the left edge.
pub const BOTTOM_LEFT_CORNER: [Move; 1] = [Move::h(-5)];

/// Number of fixed corner moves in a full rectangular contour.
pub const CORNER_MOVES: usize =
    LEAD_IN.len() + TOP_RIGHT_CORNER.len() + BOTTOM_RIGHT_CORNER.len() + BOTTOM_LEFT_CORNER.len();

/// Direction of travel along an edge of the rectangular border.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heading {
    /// Top edge, left to right.
    East,
    /// Right edge, top to bottom.
    South,
    /// Bottom edge, right to left.
    West,
    /// Left edge, bottom to top.
    North,
}

impl Heading {
    /// Clockwise walk order around the rectangle.
    pub const ALL: [Heading; 4] = [Heading::East, Heading::South, Heading::West, Heading::North];

    /// Rotate a base-stencil move into this heading (quarter turns clockwise
    /// on screen).
    pub const fn orient(self, m: Move) -> Move {
        match self {
            Heading::East => m,
            Heading::South => Move { dx: -m.dy, dy: m.dx },
            Heading::West => Move { dx: -m.dx, dy: -m.dy },
            Heading::North => Move { dx: m.dy, dy: -m.dx },
        }
    }

    /// The bottom and left edges start one move into the rotated stencil; the
    /// skipped move is drawn last instead.
    pub const fn phase(self) -> usize {
        match self {
            Heading::East | Heading::South => 0,
            Heading::West | Heading::North => 1,
        }
    }

    /// The ten moves of one key travelling in this heading.
    pub fn stencil(self) -> [Move; 10] {
        let phase = self.phase();
        std::array::from_fn(|i| self.orient(BASE_STENCIL[(i + phase) % BASE_STENCIL.len()]))
    }

    /// Net displacement of one key, in units.
    pub fn advance(self) -> Move {
        self.stencil().iter().fold(Move::h(0), |acc, m| Move {
            dx: acc.dx + m.dx,
            dy: acc.dy + m.dy,
        })
    }
}

/// One of the five concentric rings of the circular border, innermost first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ring {
    A,
    B,
    C,
    D,
    E,
}

impl Ring {
    pub const ALL: [Ring; 5] = [Ring::A, Ring::B, Ring::C, Ring::D, Ring::E];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Per-repeat line targets for the circular border as (ring, point index).
///
/// Point indices refer to the six evenly spaced points each ring contributes
/// to a repeat; index 5 of one repeat is index 0 of the next.
pub const CIRCLE_STENCIL: [(Ring, usize); 10] = [
    (Ring::E, 0),
    (Ring::E, 4),
    (Ring::B, 4),
    (Ring::B, 2),
    (Ring::C, 2),
    (Ring::C, 3),
    (Ring::D, 3),
    (Ring::D, 1),
    (Ring::A, 1),
    (Ring::A, 5),
];
