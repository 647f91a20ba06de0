//! Reduction of path commands to boundary point lists.
//!
//! A region's boundary is recovered by walking its commands in order:
//!
//! - a move contributes its point
//! - a line contributes its endpoints, unless it has zero length
//! - a curve contributes its flattened samples in parameter order
//!
//! Consecutive segments share the pen position. A segment's leading point
//! (a line's start, a curve's first sample) is only emitted when it differs
//! from the last emitted point, so a chain of segments yields every vertex
//! once.

use log::trace;

use phasemine_core::{curve, error::Result, geometry::Point, path::PathCommand};

/// Turns a shape's commands into its ordered boundary points.
#[derive(Debug, Clone, Copy)]
pub struct ShapeReducer {
    subdivisions: usize,
}

impl ShapeReducer {
    /// Creates a reducer sampling every curve `subdivisions` times.
    pub fn new(subdivisions: usize) -> Self {
        Self { subdivisions }
    }

    pub fn subdivisions(&self) -> usize {
        self.subdivisions
    }

    /// Walks `commands` and returns the boundary points.
    ///
    /// # Errors
    ///
    /// Propagates [`GeometryError::UnsupportedCurveSegment`] from the
    /// flattener; never raised for commands produced by the path parser.
    ///
    /// [`GeometryError::UnsupportedCurveSegment`]: phasemine_core::error::GeometryError::UnsupportedCurveSegment
    pub fn reduce(&self, commands: &[PathCommand]) -> Result<Vec<Point>> {
        let mut points = Vec::with_capacity(commands.len() + 1);

        for command in commands {
            match *command {
                PathCommand::Move { x, y } => points.push(Point::new(x, y)),
                PathCommand::Line { x0, y0, x1, y1 } => {
                    if command.is_zero_length_line() {
                        continue;
                    }
                    push_joint(&mut points, Point::new(x0, y0));
                    points.push(Point::new(x1, y1));
                }
                PathCommand::QuadraticCurve { .. } | PathCommand::CubicCurve { .. } => {
                    let mut samples = curve::flatten(command, self.subdivisions)?.into_iter();
                    if let Some(first) = samples.next() {
                        push_joint(&mut points, first);
                    }
                    points.extend(samples);
                }
            }
        }

        trace!(points:? = points; "Reduced shape boundary");
        Ok(points)
    }
}

impl Default for ShapeReducer {
    fn default() -> Self {
        Self::new(curve::DEFAULT_SUBDIVISIONS)
    }
}

/// Push `point` unless it repeats the last emitted point.
fn push_joint(points: &mut Vec<Point>, point: Point) {
    if points.last() != Some(&point) {
        points.push(point);
    }
}
