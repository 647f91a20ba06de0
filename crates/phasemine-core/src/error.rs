//! Error types for geometric operations.
//!
//! [`GeometryError`] covers the two ways a shape can fail to become usable
//! geometry: too few boundary points, or a command that the curve flattener
//! has no evaluation routine for. [`EntryError`] covers diagram records that
//! cannot be keyed by an element pair.

use thiserror::Error;

/// Failures raised while reducing or measuring shape geometry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// The boundary has fewer points than the operation requires.
    #[error("degenerate shape: {points} boundary point(s), at least {required} required")]
    DegenerateShape { points: usize, required: usize },

    /// The command is not a curve segment the flattener can evaluate.
    #[error("unsupported curve segment: `{command}` cannot be flattened")]
    UnsupportedCurveSegment { command: &'static str },
}

/// Failures raised while validating a diagram record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntryError {
    /// The record does not name exactly two distinct chemical elements.
    #[error("entry `{entry}` must name two distinct elements, found {elements:?}")]
    InvalidElements { entry: String, elements: Vec<String> },
}

/// A type alias for `Result<T, GeometryError>`.
pub type Result<T> = std::result::Result<T, GeometryError>;
