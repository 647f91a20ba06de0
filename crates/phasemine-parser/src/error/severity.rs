//! How serious a path diagnostic is.

use std::fmt;

/// Whether a diagnostic rejects the path description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// The path cannot be turned into a command sequence.
    Error,

    /// A redundant construct, such as a close command with nothing to close.
    /// The path is still accepted.
    Warning,
}

impl Severity {
    /// Returns `true` if the path is rejected.
    pub fn is_error(self) -> bool {
        self == Severity::Error
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_display() {
        assert_eq!(Severity::Error.to_string(), "error");
        assert_eq!(Severity::Warning.to_string(), "warning");
        assert!(!Severity::Warning.is_error());
    }
}
