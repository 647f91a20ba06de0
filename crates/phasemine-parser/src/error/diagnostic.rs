//! A single problem found in a path description.

use std::fmt;

use crate::{
    error::{ErrorCode, Label, Severity},
    span::Span,
};

/// A problem found in a path description, with the spans it concerns.
///
/// Errors always carry an [`ErrorCode`]; warnings never do.
///
/// ```text
/// error[E002]: malformed coordinate pair `10;5`
///   |
/// 1 | M 0,0 L 10;5 Z
///   |         ^^^^ expected `x,y`
///   |
///   = help: coordinates are written as two numbers joined by a comma
/// ```
///
/// # Example
///
/// ```
/// # use phasemine_parser::error::{Diagnostic, ErrorCode};
/// # use phasemine_parser::Span;
/// let diag = Diagnostic::error(ErrorCode::E002, "malformed coordinate pair `1;2`")
///     .at(Span::new(2..5), "expected `x,y`");
///
/// assert_eq!(diag.to_string(), "error[E002]: malformed coordinate pair `1;2`");
/// assert!(diag.labels()[0].is_primary());
/// ```
#[derive(Debug, Clone)]
pub struct Diagnostic {
    severity: Severity,
    code: Option<ErrorCode>,
    message: String,
    labels: Vec<Label>,
    help: Option<String>,
}

impl Diagnostic {
    /// An error that rejects the path.
    pub fn error(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code: Some(code),
            message: message.into(),
            labels: Vec::new(),
            help: None,
        }
    }

    /// A warning about a path that is still accepted.
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code: None,
            message: message.into(),
            labels: Vec::new(),
            help: None,
        }
    }

    /// Marks the offending token.
    pub fn at(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::new(span, message.into(), true));
        self
    }

    /// Points at a token that explains the problem.
    pub fn context(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::new(span, message.into(), false));
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn code(&self) -> Option<ErrorCode> {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Labels in the order they were attached.
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "{}[{code}]: {}", self.severity, self.message),
            None => write!(f, "{}: {}", self.severity, self.message),
        }
    }
}
