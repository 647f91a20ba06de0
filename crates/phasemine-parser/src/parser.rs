//! Parser for path descriptions.
//!
//! This module turns the raw tokens produced by the [`lexer`](super::lexer)
//! into absolute [`PathCommand`] values. The public entry point is
//! [`parse_commands`].
//!
//! Supported commands:
//!
//! | Letter | Coordinate pairs | Produces                         |
//! |--------|------------------|----------------------------------|
//! | `M`    | 1                | [`PathCommand::Move`]            |
//! | `L`    | 1                | [`PathCommand::Line`]            |
//! | `Q`    | 2                | [`PathCommand::QuadraticCurve`]  |
//! | `C`    | 3                | [`PathCommand::CubicCurve`]      |
//! | `Z`    | 0                | nothing; the pen returns to the subpath start |

use log::{trace, warn};

use phasemine_core::{geometry::Point, path::PathCommand};

use crate::{
    error::{Diagnostic, DiagnosticCollector, ErrorCode, ParseError},
    lexer::{self, RawToken},
    span::Span,
};

const COMMAND_HELP: &str = "supported commands are `M`, `L`, `C`, `Q` and `Z`";
const PAIR_HELP: &str = "coordinates are written as two numbers joined by a comma, e.g. `12.5,900`";

/// A recognized command letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Move,
    Line,
    Quadratic,
    Cubic,
    Close,
}

impl Command {
    fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'M' => Some(Command::Move),
            'L' => Some(Command::Line),
            'Q' => Some(Command::Quadratic),
            'C' => Some(Command::Cubic),
            'Z' => Some(Command::Close),
            _ => None,
        }
    }

    fn letter(self) -> char {
        match self {
            Command::Move => 'M',
            Command::Line => 'L',
            Command::Quadratic => 'Q',
            Command::Cubic => 'C',
            Command::Close => 'Z',
        }
    }

    /// Number of coordinate pairs following the letter.
    fn arity(self) -> usize {
        match self {
            Command::Move | Command::Line => 1,
            Command::Quadratic => 2,
            Command::Cubic => 3,
            Command::Close => 0,
        }
    }
}

/// Returns the command for a token, if it is a supported command letter.
fn command_of(token: &RawToken<'_>) -> Option<Command> {
    token.as_letter().and_then(Command::from_letter)
}

/// Parser state for a single path description.
struct PathParser<'src> {
    source: &'src str,
    tokens: Vec<RawToken<'src>>,
    position: usize,
    commands: Vec<PathCommand>,
    pen: Option<Point>,
    subpath_start: Option<Point>,
    diagnostics: DiagnosticCollector,
}

impl<'src> PathParser<'src> {
    fn new(source: &'src str) -> Self {
        Self {
            source,
            tokens: lexer::tokenize(source),
            position: 0,
            commands: Vec::new(),
            pen: None,
            subpath_start: None,
            diagnostics: DiagnosticCollector::new(),
        }
    }

    fn peek(&self) -> Option<RawToken<'src>> {
        self.tokens.get(self.position).copied()
    }

    fn advance(&mut self) -> Option<RawToken<'src>> {
        let token = self.peek()?;
        self.position += 1;
        Some(token)
    }

    /// Span just past the last character of the source.
    fn end_span(&self) -> Span {
        Span::new(self.source.len()..self.source.len())
    }

    fn parse(mut self) -> Result<Vec<PathCommand>, ParseError> {
        while let Some(token) = self.advance() {
            match command_of(&token) {
                Some(command) => self.parse_command(command, token.span()),
                None => {
                    self.unknown_command(token);
                    self.recover();
                }
            }
        }

        trace!(commands = self.commands.len(); "Parsed path description");
        self.diagnostics.finish().map(|()| self.commands)
    }

    /// Skip tokens until the next command letter.
    fn recover(&mut self) {
        while let Some(token) = self.peek() {
            if command_of(&token).is_some() {
                break;
            }
            self.position += 1;
        }
    }

    fn unknown_command(&mut self, token: RawToken<'src>) {
        let diagnostic = if token.as_point().is_some() {
            Diagnostic::error(
                ErrorCode::E001,
                format!(
                    "expected a path command, found coordinate pair `{}`",
                    token.text()
                ),
            )
            .at(token.span(), "coordinate pair without a command")
            .with_help("each command letter takes a fixed number of coordinate pairs")
        } else {
            Diagnostic::error(
                ErrorCode::E001,
                format!("unknown path command `{}`", token.text()),
            )
            .at(token.span(), ErrorCode::E001.description())
            .with_help(COMMAND_HELP)
        };
        self.diagnostics.emit(diagnostic);
    }

    /// Read the coordinate pairs of `command`.
    ///
    /// Returns `None` after reporting a diagnostic if any pair is missing or
    /// malformed. Malformed pairs are consumed so every one of them is
    /// reported; a missing pair stops at the next command letter.
    fn coordinate_pairs(&mut self, command: Command, letter_span: Span) -> Option<Vec<Point>> {
        let mut points = Vec::with_capacity(command.arity());
        let mut valid = true;

        for _ in 0..command.arity() {
            let Some(token) = self.peek().filter(|token| command_of(token).is_none()) else {
                let (span, label) = match self.peek() {
                    Some(next) => (next.span(), "expected a coordinate pair before this command"),
                    None => (self.end_span(), "path ends here"),
                };
                self.diagnostics.emit(
                    Diagnostic::error(
                        ErrorCode::E004,
                        format!("missing coordinates for `{}` command", command.letter()),
                    )
                    .at(span, label)
                    .context(letter_span, "command starts here")
                    .with_help(format!(
                        "`{}` takes {} coordinate pair(s)",
                        command.letter(),
                        command.arity()
                    )),
                );
                return None;
            };
            self.position += 1;

            match token.as_point() {
                Some(point) => points.push(point),
                None => {
                    self.diagnostics.emit(
                        Diagnostic::error(
                            ErrorCode::E002,
                            format!("malformed coordinate pair `{}`", token.text()),
                        )
                        .at(token.span(), "expected `x,y`")
                        .with_help(PAIR_HELP),
                    );
                    valid = false;
                }
            }
        }

        valid.then_some(points)
    }

    fn parse_command(&mut self, command: Command, letter_span: Span) {
        if command == Command::Close {
            self.close(letter_span);
            return;
        }

        let Some(points) = self.coordinate_pairs(command, letter_span) else {
            return;
        };

        if command == Command::Move {
            let point = points[0];
            self.pen = Some(point);
            self.subpath_start = Some(point);
            self.commands.push(PathCommand::Move {
                x: point.x(),
                y: point.y(),
            });
            return;
        }

        let Some(start) = self.pen else {
            self.diagnostics.emit(
                Diagnostic::error(
                    ErrorCode::E003,
                    format!("`{}` command before any move command", command.letter()),
                )
                .at(letter_span, ErrorCode::E003.description())
                .with_help("start the path with `M x,y`"),
            );
            return;
        };

        let segment = match (command, points.as_slice()) {
            (Command::Line, [end]) => PathCommand::Line {
                x0: start.x(),
                y0: start.y(),
                x1: end.x(),
                y1: end.y(),
            },
            (Command::Quadratic, [control, end]) => PathCommand::QuadraticCurve {
                start,
                control: *control,
                end: *end,
            },
            (Command::Cubic, [control1, control2, end]) => PathCommand::CubicCurve {
                start,
                control1: *control1,
                control2: *control2,
                end: *end,
            },
            _ => unreachable!("coordinate pairs always match the command arity"),
        };

        self.pen = Some(segment.end_point());
        self.commands.push(segment);
    }

    fn close(&mut self, letter_span: Span) {
        match self.subpath_start {
            Some(start) => self.pen = Some(start),
            None => {
                warn!(offset = letter_span.start(); "Close command without an open subpath");
                self.diagnostics.emit(
                    Diagnostic::warning("close command without an open subpath")
                        .at(letter_span, "nothing to close"),
                );
            }
        }
    }
}

/// Parse a path description into absolute drawing commands.
///
/// All problems in the description are collected; if any of them is an
/// error the whole description is rejected.
pub(crate) fn parse_commands(source: &str) -> Result<Vec<PathCommand>, ParseError> {
    PathParser::new(source).parse()
}
