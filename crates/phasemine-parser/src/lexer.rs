//! Lexer for path descriptions.
//!
//! A path description is a sequence of whitespace-separated tokens. The lexer
//! only splits the text and records where each token sits; deciding whether
//! a token is a command letter or a coordinate pair is left to the
//! [`parser`](super::parser).

use winnow::{
    Parser as _,
    ascii::{float, multispace0},
    combinator::{preceded, separated_pair},
    error::{ContextError, ErrMode},
    token::take_till,
};

use phasemine_core::geometry::Point;

use crate::span::Span;

type Input<'src> = &'src str;
type IResult<O> = std::result::Result<O, ErrMode<ContextError>>;

/// A raw token with its location in the source string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RawToken<'src> {
    text: &'src str,
    span: Span,
}

impl<'src> RawToken<'src> {
    pub(crate) fn text(&self) -> &'src str {
        self.text
    }

    pub(crate) fn span(&self) -> Span {
        self.span
    }

    /// Returns the command letter if this token is exactly one character.
    pub(crate) fn as_letter(&self) -> Option<char> {
        let mut chars = self.text.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_alphabetic() => Some(c),
            _ => None,
        }
    }

    /// Parse this token as an `x,y` coordinate pair.
    ///
    /// Returns `None` unless the whole token is consumed and both numbers
    /// are finite.
    pub(crate) fn as_point(&self) -> Option<Point> {
        let mut input = self.text;
        let point = coordinate_pair(&mut input).ok()?;
        input.is_empty().then_some(point)
    }
}

/// Parse a single finite number.
fn number(input: &mut Input<'_>) -> IResult<f64> {
    let value: f64 = float.parse_next(input)?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ErrMode::Backtrack(ContextError::new()))
    }
}

/// Parse `x,y`
fn coordinate_pair(input: &mut Input<'_>) -> IResult<Point> {
    separated_pair(number, ',', number)
        .map(|(x, y)| Point::new(x, y))
        .parse_next(input)
}

/// Parse the next non-whitespace run, skipping leading whitespace.
fn token<'src>(input: &mut Input<'src>) -> IResult<&'src str> {
    preceded(multispace0, take_till(1.., |c: char| c.is_whitespace())).parse_next(input)
}

/// Split a path description into positioned tokens.
///
/// Never fails: every non-whitespace run becomes a token.
pub(crate) fn tokenize(source: &str) -> Vec<RawToken<'_>> {
    let mut input = source;
    let mut tokens = Vec::new();

    while let Ok(text) = token(&mut input) {
        let end = source.len() - input.len();
        let span = Span::new(end - text.len()..end);
        tokens.push(RawToken { text, span });
    }

    tokens
}
