//! The ParseError type for wrapping path diagnostics.
//!
//! [`ParseError`] wraps every [`Diagnostic`] collected while parsing a single
//! path description, so that callers can report all problems at once.

use std::fmt;

use crate::error::Diagnostic;

/// Error returned when a path description cannot be parsed.
///
/// Wraps one or more diagnostics, errors first in source order.
#[derive(Debug)]
pub struct ParseError {
    diagnostics: Vec<Diagnostic>,
}

impl ParseError {
    /// Create a new parse error from diagnostics.
    pub fn new(diagnostics: Vec<Diagnostic>) -> Self {
        Self { diagnostics }
    }

    /// Get all diagnostics in this error.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Consume the error and return its diagnostics.
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(first) = self.diagnostics.first() {
            write!(f, "{}", first)?;
            if self.diagnostics.len() > 1 {
                write!(f, " (+{} more)", self.diagnostics.len() - 1)?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

impl From<Diagnostic> for ParseError {
    fn from(diagnostic: Diagnostic) -> Self {
        Self {
            diagnostics: vec![diagnostic],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_parse_error_from_diagnostic() {
        let diag = Diagnostic::error(ErrorCode::E004, "missing coordinates");
        let err: ParseError = diag.into();

        assert_eq!(err.diagnostics().len(), 1);
        assert_eq!(err.diagnostics()[0].message(), "missing coordinates");
    }

    #[test]
    fn test_parse_error_display_single() {
        let err: ParseError = Diagnostic::error(ErrorCode::E001, "unknown path command `A`").into();

        assert_eq!(err.to_string(), "error[E001]: unknown path command `A`");
    }

    #[test]
    fn test_parse_error_display_multiple() {
        let err = ParseError::new(vec![
            Diagnostic::error(ErrorCode::E001, "first error"),
            Diagnostic::error(ErrorCode::E002, "second error"),
            Diagnostic::warning("third problem"),
        ]);

        assert_eq!(err.to_string(), "error[E001]: first error (+2 more)");
        assert_eq!(err.into_diagnostics().len(), 3);
    }
}
