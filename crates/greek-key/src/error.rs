//! Error types for greek-key.
//!
//! ## Rust Lesson #20: Error Handling
//!
//! Rust uses `Result<T, E>` instead of exceptions. `thiserror` derives the
//! `Display` and `std::error::Error` impls from the `#[error(...)]` strings.

use thiserror::Error;

/// Failure while building pattern geometry.
///
/// Generation either fully succeeds or fails here before any contour is
/// produced; there are no partial results.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// A dimensional parameter is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl GeometryError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        GeometryError::InvalidConfiguration(msg.into())
    }
}

/// Failure while serializing geometry to an SVG document.
#[derive(Error, Debug)]
pub enum SvgError {
    #[error("SVG write error: {0}")]
    Write(String),

    #[error("SVG output is not valid UTF-8")]
    Encoding(#[from] std::string::FromUtf8Error),
}
