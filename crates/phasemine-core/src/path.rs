//! Absolute drawing commands for region boundaries.
//!
//! A [`PathCommand`] is the parsed form of one token group of a region's
//! path description. Every command carries absolute coordinates, and each
//! segment knows its own start point, so downstream consumers never need to
//! track a pen position.

use crate::geometry::Point;

/// One drawing command of a region boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// Moves the pen without drawing.
    Move { x: f64, y: f64 },

    /// A straight segment from `(x0, y0)` to `(x1, y1)`.
    Line { x0: f64, y0: f64, x1: f64, y1: f64 },

    /// A quadratic Bezier segment.
    QuadraticCurve {
        start: Point,
        control: Point,
        end: Point,
    },

    /// A cubic Bezier segment.
    CubicCurve {
        start: Point,
        control1: Point,
        control2: Point,
        end: Point,
    },
}

impl PathCommand {
    /// Returns the command letter this command is written with.
    pub fn letter(&self) -> &'static str {
        match self {
            PathCommand::Move { .. } => "M",
            PathCommand::Line { .. } => "L",
            PathCommand::QuadraticCurve { .. } => "Q",
            PathCommand::CubicCurve { .. } => "C",
        }
    }

    /// Returns the point where the pen rests after this command.
    pub fn end_point(&self) -> Point {
        match *self {
            PathCommand::Move { x, y } => Point::new(x, y),
            PathCommand::Line { x1, y1, .. } => Point::new(x1, y1),
            PathCommand::QuadraticCurve { end, .. } | PathCommand::CubicCurve { end, .. } => end,
        }
    }

    /// Returns true for the curve variants.
    pub fn is_curve(&self) -> bool {
        matches!(
            self,
            PathCommand::QuadraticCurve { .. } | PathCommand::CubicCurve { .. }
        )
    }

    /// Returns true for a line whose start and end coincide.
    pub fn is_zero_length_line(&self) -> bool {
        match *self {
            PathCommand::Line { x0, y0, x1, y1 } => x0 == x1 && y0 == y1,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters() {
        let start = Point::new(0.0, 0.0);
        assert_eq!(PathCommand::Move { x: 0.0, y: 0.0 }.letter(), "M");
        assert_eq!(
            PathCommand::Line {
                x0: 0.0,
                y0: 0.0,
                x1: 1.0,
                y1: 1.0
            }
            .letter(),
            "L"
        );
        assert_eq!(
            PathCommand::QuadraticCurve {
                start,
                control: start,
                end: start
            }
            .letter(),
            "Q"
        );
        assert_eq!(
            PathCommand::CubicCurve {
                start,
                control1: start,
                control2: start,
                end: start
            }
            .letter(),
            "C"
        );
    }

    #[test]
    fn test_end_point() {
        let line = PathCommand::Line {
            x0: 1.0,
            y0: 2.0,
            x1: 3.0,
            y1: 4.0,
        };
        assert_eq!(line.end_point(), Point::new(3.0, 4.0));

        let curve = PathCommand::CubicCurve {
            start: Point::new(0.0, 0.0),
            control1: Point::new(1.0, 1.0),
            control2: Point::new(2.0, 1.0),
            end: Point::new(3.0, 0.0),
        };
        assert_eq!(curve.end_point(), Point::new(3.0, 0.0));
        assert!(curve.is_curve());
        assert!(!line.is_curve());
    }

    #[test]
    fn test_zero_length_line() {
        let degenerate = PathCommand::Line {
            x0: 10.0,
            y0: 0.0,
            x1: 10.0,
            y1: 0.0,
        };
        let regular = PathCommand::Line {
            x0: 10.0,
            y0: 0.0,
            x1: 20.0,
            y1: 5.0,
        };

        assert!(degenerate.is_zero_length_line());
        assert!(!regular.is_zero_length_line());
        assert!(!PathCommand::Move { x: 0.0, y: 0.0 }.is_zero_length_line());
    }
}
