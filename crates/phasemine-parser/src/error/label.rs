//! Spans of a path description annotated with a short message.

use crate::span::Span;

/// A message attached to a byte range of the path description.
///
/// The primary label marks the offending token. Context labels point at
/// related tokens, such as the command a missing coordinate pair belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    span: Span,
    message: String,
    primary: bool,
}

impl Label {
    pub(crate) fn new(span: Span, message: String, primary: bool) -> Self {
        Self {
            span,
            message,
            primary,
        }
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// `true` for the label on the offending token itself.
    pub fn is_primary(&self) -> bool {
        self.primary
    }
}
