//! Bezier curve flattening.
//!
//! Curved region boundaries are approximated by sampling points along the
//! curve at evenly spaced parameter values. Quadratic segments are first
//! degree-raised to an equivalent cubic so that both kinds share one
//! evaluation routine ([`CubicBezier::eval`], De Casteljau's algorithm).
//!
//! # Example
//!
//! ```
//! # use phasemine_core::{curve::CubicBezier, geometry::Point};
//! let curve = CubicBezier::new(
//!     Point::new(0.0, 0.0),
//!     Point::new(0.0, 10.0),
//!     Point::new(10.0, 10.0),
//!     Point::new(10.0, 0.0),
//! );
//!
//! let samples = curve.sample(4);
//! assert_eq!(samples.len(), 4);
//! assert_eq!(samples[0], Point::new(0.0, 0.0));
//! assert_eq!(samples[3], Point::new(10.0, 0.0));
//! ```

use crate::{
    error::{GeometryError, Result},
    geometry::Point,
    path::PathCommand,
};

/// Default number of samples taken along each curve segment.
pub const DEFAULT_SUBDIVISIONS: usize = 4;

/// A cubic Bezier segment defined by four control points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    start: Point,
    control1: Point,
    control2: Point,
    end: Point,
}

impl CubicBezier {
    /// Creates a cubic segment from its control points.
    pub fn new(start: Point, control1: Point, control2: Point, end: Point) -> Self {
        Self {
            start,
            control1,
            control2,
            end,
        }
    }

    /// Degree-raises a quadratic segment to the equivalent cubic.
    ///
    /// The cubic control points sit two thirds of the way from each
    /// endpoint towards the quadratic control point.
    pub fn from_quadratic(start: Point, control: Point, end: Point) -> Self {
        let two_thirds = 2.0 / 3.0;
        Self {
            start,
            control1: start.add_point(control.sub_point(start).scale(two_thirds)),
            control2: end.add_point(control.sub_point(end).scale(two_thirds)),
            end,
        }
    }

    /// Returns the control points in order.
    pub fn control_points(&self) -> [Point; 4] {
        [self.start, self.control1, self.control2, self.end]
    }

    /// Evaluates the curve at parameter `u` in `[0, 1]`.
    ///
    /// `u = 0` yields the start point and `u = 1` the end point exactly.
    pub fn eval(&self, u: f64) -> Point {
        de_casteljau(&self.control_points(), u)
    }

    /// Samples `count` points at evenly spaced parameters in `[0, 1]`.
    ///
    /// Both endpoints are included when `count >= 2`; a single sample is the
    /// start point and zero samples yield an empty list.
    pub fn sample(&self, count: usize) -> Vec<Point> {
        match count {
            0 => Vec::new(),
            1 => vec![self.start],
            _ => {
                let last = (count - 1) as f64;
                (0..count)
                    .map(|i| self.eval(i as f64 / last))
                    .collect()
            }
        }
    }
}

/// Reduces control points pairwise until one point remains.
fn de_casteljau(points: &[Point], u: f64) -> Point {
    debug_assert!(!points.is_empty(), "curve needs at least one control point");
    if let [point] = points {
        return *point;
    }
    let reduced: Vec<Point> = points
        .windows(2)
        .map(|pair| pair[0].lerp(pair[1], u))
        .collect();
    de_casteljau(&reduced, u)
}

/// Flattens a curve command into `subdivisions` sample points.
///
/// # Errors
///
/// Returns [`GeometryError::UnsupportedCurveSegment`] when the command is
/// not a quadratic or cubic curve.
pub fn flatten(command: &PathCommand, subdivisions: usize) -> Result<Vec<Point>> {
    let cubic = match *command {
        PathCommand::CubicCurve {
            start,
            control1,
            control2,
            end,
        } => CubicBezier::new(start, control1, control2, end),
        PathCommand::QuadraticCurve {
            start,
            control,
            end,
        } => CubicBezier::from_quadratic(start, control, end),
        PathCommand::Move { .. } | PathCommand::Line { .. } => {
            return Err(GeometryError::UnsupportedCurveSegment {
                command: command.letter(),
            });
        }
    };
    Ok(cubic.sample(subdivisions))
}
