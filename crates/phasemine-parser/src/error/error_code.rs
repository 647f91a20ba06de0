//! Error codes for path parsing diagnostics.
//!
//! All codes belong to the `E0xx` range: each describes one way a path
//! description can fail to become a command sequence.

use std::fmt;

/// Error codes for categorizing diagnostic errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Unknown path command.
    ///
    /// A token where a command was expected is not one of `M`, `L`, `C`,
    /// `Q` or `Z`. Lowercase (relative) commands are not supported.
    E001,

    /// Malformed coordinate pair.
    ///
    /// A coordinate is not written as two numbers joined by a comma.
    E002,

    /// Drawing command before move.
    ///
    /// A line or curve appears before any `M` command has set a start point.
    E003,

    /// Missing coordinates.
    ///
    /// The path ended before the command received all of its coordinate pairs.
    E004,
}

impl ErrorCode {
    /// Returns the numeric code as a string (e.g., "E001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "E001",
            ErrorCode::E002 => "E002",
            ErrorCode::E003 => "E003",
            ErrorCode::E004 => "E004",
        }
    }

    /// Returns a short description of what this error code means.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "unknown path command",
            ErrorCode::E002 => "malformed coordinate pair",
            ErrorCode::E003 => "drawing command before move",
            ErrorCode::E004 => "missing coordinates",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
