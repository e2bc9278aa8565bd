mod location;
mod op;

pub use location::{ComponentRef, GeometryLocation};
pub use op::DistanceOp;

use crate::error::Result;
use crate::geometry::Geometry;
use crate::math::Point2;

/// Minimum Euclidean distance between two geometries.
///
/// # Errors
///
/// Returns `DistanceError::EmptyGeometry` if either input has no components
/// to measure.
pub fn distance(a: &Geometry, b: &Geometry) -> Result<f64> {
    DistanceOp::new(a, b).distance()
}

/// The pair of closest coordinates between two geometries, one per input,
/// in input order.
///
/// # Errors
///
/// Returns `DistanceError::EmptyGeometry` if either input has no components
/// to measure.
pub fn closest_points(a: &Geometry, b: &Geometry) -> Result<(Point2, Point2)> {
    DistanceOp::new(a, b).closest_points()
}

/// The pair of closest locations between two geometries, identifying the
/// owning component and segment index of each closest point.
///
/// # Errors
///
/// Returns `DistanceError::EmptyGeometry` if either input has no components
/// to measure.
pub fn closest_locations<'a>(
    a: &'a Geometry,
    b: &'a Geometry,
) -> Result<(GeometryLocation<'a>, GeometryLocation<'a>)> {
    DistanceOp::new(a, b).closest_locations()
}

/// True when the two geometries lie within `max_distance` of each other.
///
/// The underlying search terminates as soon as the bound is certified, so
/// this is cheaper than comparing against [`distance`].
///
/// # Errors
///
/// Returns `DistanceError::EmptyGeometry` if either input has no components
/// to measure.
pub fn is_within_distance(a: &Geometry, b: &Geometry, max_distance: f64) -> Result<bool> {
    let mut op = DistanceOp::with_terminate_distance(a, b, max_distance);
    Ok(op.distance()? <= max_distance)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::LineString;
    use approx::assert_relative_eq;

    #[test]
    fn entry_points_agree() {
        let a = Geometry::point(0.0, 0.0);
        let b = Geometry::LineString(LineString::from_xy(&[(3.0, 4.0), (13.0, 4.0)]));
        let dist = distance(&a, &b).unwrap();
        let (ca, cb) = closest_points(&a, &b).unwrap();
        let (loc_a, loc_b) = closest_locations(&a, &b).unwrap();
        assert_relative_eq!(dist, 5.0);
        assert!(ca == loc_a.coordinate);
        assert!(cb == loc_b.coordinate);
    }

    #[test]
    fn within_distance_consistent() {
        let a = Geometry::point(0.0, 0.0);
        let b = Geometry::point(3.0, 4.0);
        assert!(is_within_distance(&a, &b, 5.0).unwrap());
        assert!(!is_within_distance(&a, &b, 4.9).unwrap());
    }
}
