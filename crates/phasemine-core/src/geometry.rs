//! Geometric primitives for phase diagram regions.
//!
//! This module provides the value types used to describe region boundaries
//! once a path has been parsed and flattened.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate in diagram space
//! - [`Bounds`] - The extents of a region, or the span of a line compound
//! - [`Polygon`] - A closed ring of at least three boundary points
//!
//! # Coordinate System
//!
//! Phase diagrams are plotted with composition on the horizontal axis and
//! temperature on the vertical axis:
//!
//! ```text
//!    +Y (temperature)
//!     ▲
//!     │
//!     │
//!     │
//!   (0,0) ────────► +X (composition, 0-100 %)
//! ```
//!
//! - **X-axis**: Composition in percent of the second element, `0` to `100`
//! - **Y-axis**: Temperature (or any other vertical quantity the diagram uses)

use serde::Serialize;

use crate::error::{GeometryError, Result};

/// A 2D point in diagram coordinate space.
///
/// Points use `f64` coordinates; they carry no identity beyond their value.
///
/// # Examples
///
/// ```
/// # use phasemine_core::geometry::Point;
/// let p1 = Point::new(10.0, 300.0);
/// let p2 = Point::new(30.0, 500.0);
///
/// let mid = p1.lerp(p2, 0.5);
/// assert_eq!(mid.x(), 20.0);
/// assert_eq!(mid.y(), 400.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(into = "[f64; 2]")]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate (composition) of the point
    pub fn x(self) -> f64 {
        self.x
    }

    /// Returns the y-coordinate (temperature) of the point
    pub fn y(self) -> f64 {
        self.y
    }

    /// Adds another point to this point, returning a new point
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Subtracts another point from this point, returning a new point
    pub fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Multiplies both coordinates by the given factor
    pub fn scale(self, factor: f64) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }

    /// Linearly interpolates between this point and `other`.
    ///
    /// `t = 0` returns `self` and `t = 1` returns `other`, both exactly.
    pub fn lerp(self, other: Point, t: f64) -> Self {
        if t == 0.0 {
            return self;
        }
        if t == 1.0 {
            return other;
        }
        Self {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
        }
    }
}

impl From<Point> for [f64; 2] {
    fn from(point: Point) -> Self {
        [point.x, point.y]
    }
}

/// The extents of a region boundary.
///
/// For polygons the bounds are normalized so that `x0 <= x1` and `y0 <= y1`.
/// For line compounds ([`Bounds::from_line`]) they hold the two endpoints
/// exactly as drawn, which may be in either order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Bounds {
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
}

impl Bounds {
    /// Creates bounds from raw coordinates.
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Creates bounds that are exactly the two endpoints of a line compound.
    pub fn from_line(start: Point, end: Point) -> Self {
        Self {
            x0: start.x,
            y0: start.y,
            x1: end.x,
            y1: end.y,
        }
    }

    /// Returns the first x-coordinate (`x_min` for polygons)
    pub fn x0(self) -> f64 {
        self.x0
    }

    /// Returns the first y-coordinate (`y_min` for polygons)
    pub fn y0(self) -> f64 {
        self.y0
    }

    /// Returns the second x-coordinate (`x_max` for polygons)
    pub fn x1(self) -> f64 {
        self.x1
    }

    /// Returns the second y-coordinate (`y_max` for polygons)
    pub fn y1(self) -> f64 {
        self.y1
    }

    /// Returns the bounds as a `(x0, y0, x1, y1)` tuple
    pub fn to_tuple(self) -> (f64, f64, f64, f64) {
        (self.x0, self.y0, self.x1, self.y1)
    }

    /// Returns the absolute horizontal extent, `|x1 - x0|`
    pub fn composition_span(self) -> f64 {
        (self.x1 - self.x0).abs()
    }

    /// Returns true if the point lies inside or on the bounds.
    ///
    /// Works for both normalized and line-compound bounds.
    pub fn contains(self, point: Point) -> bool {
        let (min_x, max_x) = (self.x0.min(self.x1), self.x0.max(self.x1));
        let (min_y, max_y) = (self.y0.min(self.y1), self.y0.max(self.y1));
        point.x >= min_x && point.x <= max_x && point.y >= min_y && point.y <= max_y
    }
}

/// A closed polygon ring built from a region's boundary points.
///
/// The ring is implicitly closed: the last point connects back to the first.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point>,
}

impl Polygon {
    /// Minimum number of vertices for a non-degenerate ring.
    pub const MIN_VERTICES: usize = 3;

    /// Creates a polygon from its boundary points.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DegenerateShape`] if fewer than
    /// [`Polygon::MIN_VERTICES`] points are given.
    pub fn new(vertices: Vec<Point>) -> Result<Self> {
        if vertices.len() < Self::MIN_VERTICES {
            return Err(GeometryError::DegenerateShape {
                points: vertices.len(),
                required: Self::MIN_VERTICES,
            });
        }
        Ok(Self { vertices })
    }

    /// Returns the polygon's vertices in boundary order
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Computes the axis-aligned bounding box of the ring.
    pub fn bounds(&self) -> Bounds {
        let first = self.vertices[0];
        let init = Bounds::new(first.x, first.y, first.x, first.y);
        self.vertices[1..].iter().fold(init, |acc, p| Bounds {
            x0: acc.x0.min(p.x),
            y0: acc.y0.min(p.y),
            x1: acc.x1.max(p.x),
            y1: acc.y1.max(p.y),
        })
    }
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    // ===================
    // Strategies
    // ===================

    fn point_strategy() -> impl Strategy<Value = Point> {
        (-1000.0f64..1000.0, -1000.0f64..3000.0).prop_map(|(x, y)| Point::new(x, y))
    }

    fn ring_strategy() -> impl Strategy<Value = Vec<Point>> {
        prop::collection::vec(point_strategy(), 3..40)
    }

    fn fraction_strategy() -> impl Strategy<Value = f64> {
        0.0f64..=1.0
    }

    // ===================
    // Property Test Functions
    // ===================

    /// Every vertex of a polygon lies within its bounds.
    fn check_bounds_contain_vertices(points: Vec<Point>) -> std::result::Result<(), TestCaseError> {
        let polygon = Polygon::new(points.clone()).expect("strategy yields >= 3 points");
        let bounds = polygon.bounds();

        prop_assert!(bounds.x0() <= bounds.x1());
        prop_assert!(bounds.y0() <= bounds.y1());
        for p in points {
            prop_assert!(bounds.x0() <= p.x() && p.x() <= bounds.x1());
            prop_assert!(bounds.y0() <= p.y() && p.y() <= bounds.y1());
        }
        Ok(())
    }

    /// Polygon bounds are bit-identical across repeated computation.
    fn check_bounds_deterministic(points: Vec<Point>) -> std::result::Result<(), TestCaseError> {
        let first = Polygon::new(points.clone()).expect("strategy yields >= 3 points");
        let second = Polygon::new(points).expect("strategy yields >= 3 points");

        prop_assert_eq!(first.bounds(), second.bounds());
        Ok(())
    }

    /// Interpolated points stay between their endpoints.
    fn check_lerp_is_between(a: Point, b: Point, t: f64) -> std::result::Result<(), TestCaseError> {
        let p = a.lerp(b, t);

        prop_assert!(p.x() >= a.x().min(b.x()) - 1e-9 && p.x() <= a.x().max(b.x()) + 1e-9);
        prop_assert!(p.y() >= a.y().min(b.y()) - 1e-9 && p.y() <= a.y().max(b.y()) + 1e-9);
        Ok(())
    }

    // ===================
    // Proptest Wrappers
    // ===================

    proptest! {
        #[test]
        fn bounds_contain_vertices(points in ring_strategy()) {
            check_bounds_contain_vertices(points)?;
        }

        #[test]
        fn bounds_deterministic(points in ring_strategy()) {
            check_bounds_deterministic(points)?;
        }

        #[test]
        fn lerp_is_between(a in point_strategy(), b in point_strategy(), t in fraction_strategy()) {
            check_lerp_is_between(a, b, t)?;
        }
    }
}
