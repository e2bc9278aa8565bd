pub mod envelope;
pub mod line_string;
pub mod polygon;

pub use envelope::Envelope;
pub use line_string::LineString;
pub use polygon::Polygon;

use crate::math::Point2;

/// A planar geometric object: point, line string, polygon, or a collection
/// of these, nested to arbitrary depth.
///
/// Geometries are immutable value-like objects; the distance operations
/// only read them.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Point(Point2),
    LineString(LineString),
    Polygon(Polygon),
    Collection(Vec<Geometry>),
}

impl Geometry {
    /// Creates a point geometry.
    #[must_use]
    pub fn point(x: f64, y: f64) -> Self {
        Self::Point(Point2::new(x, y))
    }

    /// True when the geometry carries no coordinates at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Point(_) => false,
            Self::LineString(line) => line.is_empty(),
            Self::Polygon(polygon) => polygon.is_empty(),
            Self::Collection(members) => members.iter().all(Geometry::is_empty),
        }
    }

    /// Bounding envelope, or `None` when empty.
    #[must_use]
    pub fn envelope(&self) -> Option<Envelope> {
        match self {
            Self::Point(point) => Some(Envelope::from_point(*point)),
            Self::LineString(line) => line.envelope(),
            Self::Polygon(polygon) => polygon.envelope(),
            Self::Collection(members) => {
                let mut combined: Option<Envelope> = None;
                for member in members {
                    if let Some(env) = member.envelope() {
                        match combined.as_mut() {
                            Some(total) => total.expand_to_include_envelope(&env),
                            None => combined = Some(env),
                        }
                    }
                }
                combined
            }
        }
    }
}

impl From<Point2> for Geometry {
    fn from(point: Point2) -> Self {
        Self::Point(point)
    }
}

impl From<LineString> for Geometry {
    fn from(line: LineString) -> Self {
        Self::LineString(line)
    }
}

impl From<Polygon> for Geometry {
    fn from(polygon: Polygon) -> Self {
        Self::Polygon(polygon)
    }
}

impl From<Vec<Geometry>> for Geometry {
    fn from(members: Vec<Geometry>) -> Self {
        Self::Collection(members)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;

    #[test]
    fn point_is_never_empty() {
        assert!(!Geometry::point(0.0, 0.0).is_empty());
    }

    #[test]
    fn empty_collection_is_empty() {
        assert!(Geometry::Collection(vec![]).is_empty());
    }

    #[test]
    fn collection_of_empties_is_empty() {
        let collection = Geometry::Collection(vec![
            Geometry::LineString(LineString::new(vec![])),
            Geometry::Collection(vec![]),
        ]);
        assert!(collection.is_empty());
    }

    #[test]
    fn collection_with_point_is_not_empty() {
        let collection =
            Geometry::Collection(vec![Geometry::Collection(vec![Geometry::point(1.0, 2.0)])]);
        assert!(!collection.is_empty());
    }

    #[test]
    fn collection_envelope_combines_members() {
        let collection = Geometry::Collection(vec![
            Geometry::point(-1.0, 0.0),
            Geometry::LineString(LineString::from_xy(&[(2.0, 3.0), (4.0, -2.0)])),
        ]);
        let env = collection.envelope().unwrap();
        assert!((env.min.x - (-1.0)).abs() < TOLERANCE);
        assert!((env.min.y - (-2.0)).abs() < TOLERANCE);
        assert!((env.max.x - 4.0).abs() < TOLERANCE);
        assert!((env.max.y - 3.0).abs() < TOLERANCE);
    }

    #[test]
    fn envelope_of_empty_is_none() {
        assert!(Geometry::Collection(vec![]).envelope().is_none());
    }
}
