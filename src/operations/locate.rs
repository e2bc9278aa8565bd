use crate::geometry::Polygon;
use crate::math::Point2;

/// Classification of a point relative to an areal geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    Interior,
    Boundary,
    Exterior,
}

/// Classifies a point against a polygon with holes.
///
/// A point inside a hole is `Exterior`; a point on a hole ring is `Boundary`.
/// An empty polygon classifies everything as `Exterior`.
#[must_use]
pub fn locate_point_in_polygon(point: &Point2, polygon: &Polygon) -> Location {
    if polygon.is_empty() {
        return Location::Exterior;
    }
    match locate_point_in_ring(point, polygon.shell().coords()) {
        Location::Exterior => Location::Exterior,
        Location::Boundary => Location::Boundary,
        Location::Interior => {
            for hole in polygon.holes() {
                match locate_point_in_ring(point, hole.coords()) {
                    Location::Interior => return Location::Exterior,
                    Location::Boundary => return Location::Boundary,
                    Location::Exterior => {}
                }
            }
            Location::Interior
        }
    }
}

/// Classifies a point against a single closed ring.
///
/// Boundary detection is exact: the point must be collinear with a ring
/// segment and within its extent. Interior/exterior is decided by counting
/// crossings of a horizontal ray towards +x; the half-open vertex rule keeps
/// the count consistent when the ray passes through ring vertices.
#[must_use]
pub fn locate_point_in_ring(point: &Point2, ring: &[Point2]) -> Location {
    let mut crossings = 0u32;
    for window in ring.windows(2) {
        let (a, b) = (&window[0], &window[1]);

        if point_on_segment(point, a, b) {
            return Location::Boundary;
        }

        if (a.y > point.y) != (b.y > point.y) {
            // The segment straddles the ray's y, so a.y != b.y here.
            let x_cross = a.x + (point.y - a.y) * (b.x - a.x) / (b.y - a.y);
            if x_cross > point.x {
                crossings += 1;
            }
        }
    }
    if crossings % 2 == 1 {
        Location::Interior
    } else {
        Location::Exterior
    }
}

/// Exact test for a point lying on the segment `a → b`.
fn point_on_segment(p: &Point2, a: &Point2, b: &Point2) -> bool {
    let cross = (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x);
    if cross != 0.0 {
        return false;
    }
    p.x >= a.x.min(b.x) && p.x <= a.x.max(b.x) && p.y >= a.y.min(b.y) && p.y <= a.y.max(b.y)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::LineString;

    fn square(size: f64) -> Polygon {
        let ring = LineString::from_xy(&[
            (0.0, 0.0),
            (size, 0.0),
            (size, size),
            (0.0, size),
            (0.0, 0.0),
        ]);
        Polygon::new(ring, vec![]).unwrap()
    }

    fn square_with_hole() -> Polygon {
        let shell = LineString::from_xy(&[
            (0.0, 0.0),
            (10.0, 0.0),
            (10.0, 10.0),
            (0.0, 10.0),
            (0.0, 0.0),
        ]);
        let hole = LineString::from_xy(&[
            (3.0, 3.0),
            (7.0, 3.0),
            (7.0, 7.0),
            (3.0, 7.0),
            (3.0, 3.0),
        ]);
        Polygon::new(shell, vec![hole]).unwrap()
    }

    #[test]
    fn interior_point() {
        let poly = square(10.0);
        let loc = locate_point_in_polygon(&Point2::new(5.0, 5.0), &poly);
        assert_eq!(loc, Location::Interior);
    }

    #[test]
    fn exterior_point() {
        let poly = square(10.0);
        let loc = locate_point_in_polygon(&Point2::new(15.0, 5.0), &poly);
        assert_eq!(loc, Location::Exterior);
    }

    #[test]
    fn boundary_edge_point() {
        let poly = square(10.0);
        let loc = locate_point_in_polygon(&Point2::new(5.0, 0.0), &poly);
        assert_eq!(loc, Location::Boundary);
    }

    #[test]
    fn boundary_vertex_point() {
        let poly = square(10.0);
        let loc = locate_point_in_polygon(&Point2::new(10.0, 10.0), &poly);
        assert_eq!(loc, Location::Boundary);
    }

    #[test]
    fn ray_through_vertex_counts_once() {
        // A diamond: the ray from an interior point at the apex height passes
        // exactly through the left and right vertices.
        let ring = LineString::from_xy(&[(0.0, 0.0), (2.0, 2.0), (4.0, 0.0), (2.0, -2.0), (0.0, 0.0)]);
        let poly = Polygon::new(ring, vec![]).unwrap();
        let loc = locate_point_in_polygon(&Point2::new(2.0, 0.0), &poly);
        assert_eq!(loc, Location::Interior);
    }

    #[test]
    fn concave_notch() {
        // U-shaped polygon; the notch between the prongs is exterior.
        let ring = LineString::from_xy(&[
            (0.0, 0.0),
            (6.0, 0.0),
            (6.0, 4.0),
            (4.0, 4.0),
            (4.0, 1.0),
            (2.0, 1.0),
            (2.0, 4.0),
            (0.0, 4.0),
            (0.0, 0.0),
        ]);
        let poly = Polygon::new(ring, vec![]).unwrap();
        assert_eq!(
            locate_point_in_polygon(&Point2::new(3.0, 3.0), &poly),
            Location::Exterior
        );
        assert_eq!(
            locate_point_in_polygon(&Point2::new(1.0, 3.0), &poly),
            Location::Interior
        );
    }

    #[test]
    fn hole_interior_is_exterior() {
        let poly = square_with_hole();
        let loc = locate_point_in_polygon(&Point2::new(5.0, 5.0), &poly);
        assert_eq!(loc, Location::Exterior);
    }

    #[test]
    fn hole_ring_is_boundary() {
        let poly = square_with_hole();
        let loc = locate_point_in_polygon(&Point2::new(5.0, 3.0), &poly);
        assert_eq!(loc, Location::Boundary);
    }

    #[test]
    fn between_shell_and_hole_is_interior() {
        let poly = square_with_hole();
        let loc = locate_point_in_polygon(&Point2::new(1.0, 5.0), &poly);
        assert_eq!(loc, Location::Interior);
    }

    #[test]
    fn empty_polygon_is_exterior() {
        let poly = Polygon::new(LineString::new(vec![]), vec![]).unwrap();
        let loc = locate_point_in_polygon(&Point2::new(0.0, 0.0), &poly);
        assert_eq!(loc, Location::Exterior);
    }
}
