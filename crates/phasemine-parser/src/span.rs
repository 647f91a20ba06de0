//! Byte ranges inside a path description.

use std::ops::Range;

/// A half-open byte range `start..end` within the parsed source string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Span {
    start: usize,
    end: usize,
}

impl Span {
    /// Create a new span from a byte range
    pub fn new(range: Range<usize>) -> Self {
        Self {
            start: range.start,
            end: range.end.max(range.start),
        }
    }

    /// Get the start offset of the span
    pub fn start(&self) -> usize {
        self.start
    }

    /// Get the end offset of the span
    pub fn end(&self) -> usize {
        self.end
    }

    /// Get the length of the span
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if the span is empty
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Create a union of two spans (encompassing both)
    pub fn union(&self, other: Span) -> Span {
        Self {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// Get the spanned slice of `source`, if the span lies within it
    pub fn slice<'src>(&self, source: &'src str) -> Option<&'src str> {
        source.get(self.start..self.end)
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Self::new(range)
    }
}
