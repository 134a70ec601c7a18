//! # greek-key
//!
//! Geometry engine for Greek key (meander) borders, either around a rectangle
//! or around a circle. A border is one closed contour tracing the repeating
//! key plus the frame shapes that enclose it.
//!
//! ## Rust Lesson #7: Modules
//!
//! - `mod foo;` = load from `foo.rs` or `foo/mod.rs`
//! - `pub mod foo;` = also export it publicly
//! - `pub use foo::Bar;` = re-export Bar at this level
//!
//! ```
//! use greek_key::{KeyPattern, RectConfig};
//!
//! let pattern = KeyPattern::rect(RectConfig::default()).unwrap();
//! let geometry = pattern.generate();
//! assert!(geometry.contour.is_closed(1e-9));
//! ```

pub mod circle;
pub mod config;
pub mod contour;
pub mod error;
pub mod frame;
pub mod geometry;
pub mod pattern;
pub mod radii;
pub mod rect;
pub mod stencil;
pub mod svg;

// Re-export common types at crate root for convenience.
pub use circle::{CircleConfig, CircleKey};
pub use config::{MIN_PATTERN_COUNT, MIN_RING_UNITS, PATTERN_UNIT_SIZE, Style};
pub use contour::{Contour, PathCommand};
pub use error::{GeometryError, SvgError};
pub use frame::Frame;
pub use geometry::{Canvas, Line, Point};
pub use pattern::{KeyGeometry, KeyPattern, PatternKind};
pub use radii::{FrameRadii, min_outer_radius, solve_radii};
pub use rect::{RectConfig, RectKey};
pub use svg::to_svg_document;
