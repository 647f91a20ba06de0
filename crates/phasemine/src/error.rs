//! Error types for phasemine operations.
//!
//! This module provides the main error type [`PhasemineError`] which wraps
//! the error conditions that can occur while mining diagram records.

use std::io;

use thiserror::Error;

use phasemine_core::error::{EntryError, GeometryError};
use phasemine_parser::ParseError;

/// The main error type for phasemine operations.
///
/// # Diagnostic Variants
///
/// The `MalformedPath` variant keeps the path description that failed to
/// parse next to the structured diagnostics, so callers can render the
/// labeled spans against it.
#[derive(Debug, Error)]
pub enum PhasemineError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("entry `{entry}`: malformed path: {err}")]
    MalformedPath {
        entry: String,
        err: ParseError,
        src: String,
    },

    #[error("entry `{entry}`: {source}")]
    Geometry {
        entry: String,
        source: GeometryError,
    },

    #[error(transparent)]
    InvalidEntry(#[from] EntryError),

    #[error("`{first}` and `{second}` do not form a binary system")]
    InvalidPair { first: String, second: String },
}

impl PhasemineError {
    /// Create a new `MalformedPath` error with the offending path description.
    pub fn new_path_error(
        entry: impl Into<String>,
        err: ParseError,
        src: impl Into<String>,
    ) -> Self {
        Self::MalformedPath {
            entry: entry.into(),
            err,
            src: src.into(),
        }
    }

    /// Create a new `Geometry` error for an entry.
    pub fn new_geometry_error(entry: impl Into<String>, source: GeometryError) -> Self {
        Self::Geometry {
            entry: entry.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geometry_error_display() {
        let err = PhasemineError::new_geometry_error(
            "C100001",
            GeometryError::DegenerateShape {
                points: 1,
                required: 2,
            },
        );

        assert_eq!(
            err.to_string(),
            "entry `C100001`: degenerate shape: 1 boundary point(s), at least 2 required"
        );
    }

    #[test]
    fn test_path_error_keeps_source() {
        let parse_err = phasemine_parser::parse_path("M 0,0 X").unwrap_err();
        let err = PhasemineError::new_path_error("C1", parse_err, "M 0,0 X");

        match err {
            PhasemineError::MalformedPath { entry, src, .. } => {
                assert_eq!(entry, "C1");
                assert_eq!(src, "M 0,0 X");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
