//! Collector for accumulating diagnostics while parsing one path.
//!
//! The [`DiagnosticCollector`] lets the parser report every malformed token
//! of a path instead of failing on the first one.

use crate::error::{Diagnostic, ParseError};

/// A collector for accumulating diagnostics during parsing.
#[derive(Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
    has_errors: bool,
}

impl DiagnosticCollector {
    /// Create a new empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit a diagnostic to this collector.
    ///
    /// If the diagnostic is an error, the collector is marked as failed.
    pub fn emit(&mut self, diagnostic: Diagnostic) {
        if diagnostic.severity().is_error() {
            self.has_errors = true;
        }
        self.diagnostics.push(diagnostic);
    }

    /// Finish collection and return a result.
    ///
    /// - If there are errors, returns `Err(ParseError)` with all diagnostics.
    /// - If there are no errors, returns `Ok(())`.
    ///
    /// Warnings are dropped in the success case; the parser logs them as
    /// they are emitted.
    pub fn finish(self) -> Result<(), ParseError> {
        if self.has_errors {
            Err(ParseError::new(self.diagnostics))
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::ErrorCode, span::Span};

    #[test]
    fn test_collector_new_finish_ok() {
        let collector = DiagnosticCollector::new();
        assert!(collector.finish().is_ok());
    }

    #[test]
    fn test_collector_emit_warning_finish_ok() {
        let mut collector = DiagnosticCollector::new();

        collector.emit(Diagnostic::warning("close without subpath"));

        assert!(collector.finish().is_ok());
    }

    #[test]
    fn test_collector_finish_with_errors() {
        let mut collector = DiagnosticCollector::new();

        collector.emit(
            Diagnostic::error(ErrorCode::E001, "unknown path command `A`")
                .at(Span::new(10..11), "here"),
        );
        collector.emit(Diagnostic::warning("test warning"));

        let err = collector.finish().unwrap_err();
        assert_eq!(err.diagnostics().len(), 2);
        assert_eq!(err.diagnostics()[0].message(), "unknown path command `A`");
    }
}
