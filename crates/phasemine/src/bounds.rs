//! Extents of a reduced shape boundary.

use phasemine_core::{
    error::GeometryError,
    geometry::{Bounds, Point, Polygon},
};

/// Number of points describing a line compound.
pub const LINE_COMPOUND_POINTS: usize = 2;

/// Computes the extents of a boundary point list.
///
/// A two-point boundary is a line compound: its endpoints are returned as
/// they are, in path order and without normalization. Longer boundaries are
/// closed into a polygon and measured by their axis-aligned bounding box.
///
/// # Errors
///
/// Returns [`GeometryError::DegenerateShape`] for fewer than two points.
pub fn extract_bounds(points: &[Point]) -> Result<Bounds, GeometryError> {
    match points {
        [start, end] => Ok(Bounds::from_line(*start, *end)),
        _ if points.len() > LINE_COMPOUND_POINTS => Ok(Polygon::new(points.to_vec())?.bounds()),
        _ => Err(GeometryError::DegenerateShape {
            points: points.len(),
            required: LINE_COMPOUND_POINTS,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_compound_keeps_endpoint_order() {
        let bounds = extract_bounds(&[Point::new(60.0, 900.0), Point::new(40.0, 300.0)]).unwrap();

        assert_eq!(bounds.to_tuple(), (60.0, 900.0, 40.0, 300.0));
        assert_eq!(bounds.composition_span(), 20.0);
    }

    #[test]
    fn test_polygon_bounds() {
        let points = [
            Point::new(10.0, 500.0),
            Point::new(30.0, 450.0),
            Point::new(25.0, 800.0),
            Point::new(5.0, 700.0),
        ];

        let bounds = extract_bounds(&points).unwrap();

        assert_eq!(bounds.to_tuple(), (5.0, 450.0, 30.0, 800.0));
    }

    #[test]
    fn test_degenerate() {
        assert_eq!(
            extract_bounds(&[Point::new(1.0, 1.0)]),
            Err(GeometryError::DegenerateShape {
                points: 1,
                required: 2
            })
        );
        assert!(extract_bounds(&[]).is_err());
    }

    mod proptest_tests {
        use proptest::prelude::*;

        use super::*;

        fn point_strategy() -> impl Strategy<Value = Point> {
            (0.0f64..=100.0, -273.0f64..=4000.0).prop_map(|(x, y)| Point::new(x, y))
        }

        fn check_two_points_are_the_bounds(a: Point, b: Point) -> Result<(), TestCaseError> {
            let bounds = extract_bounds(&[a, b]).map_err(|e| TestCaseError::fail(e.to_string()))?;

            prop_assert_eq!(bounds.to_tuple(), (a.x(), a.y(), b.x(), b.y()));
            Ok(())
        }

        fn check_polygon_contains_points(points: &[Point]) -> Result<(), TestCaseError> {
            let bounds = extract_bounds(points).map_err(|e| TestCaseError::fail(e.to_string()))?;

            for point in points {
                prop_assert!(bounds.contains(*point), "{point:?} outside {bounds:?}");
            }
            Ok(())
        }

        proptest! {
            #[test]
            fn two_points_are_the_bounds(a in point_strategy(), b in point_strategy()) {
                check_two_points_are_the_bounds(a, b)?;
            }

            #[test]
            fn polygon_contains_points(points in prop::collection::vec(point_strategy(), 3..40)) {
                check_polygon_contains_points(&points)?;
            }
        }
    }
}
