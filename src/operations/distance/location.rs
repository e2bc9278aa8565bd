use crate::geometry::{LineString, Polygon};
use crate::math::Point2;

/// Reference to the geometry component that owns a location.
#[derive(Debug, Clone, Copy)]
pub enum ComponentRef<'a> {
    Point(&'a Point2),
    Line(&'a LineString),
    Polygon(&'a Polygon),
}

/// Identifies a specific point of interest within a geometry: the owning
/// component, the index of the originating segment, and the coordinate
/// itself.
///
/// The coordinate lies on (or arbitrarily close to) the referenced segment
/// of the referenced component.
#[derive(Debug, Clone, Copy)]
pub struct GeometryLocation<'a> {
    /// The component the location belongs to.
    pub component: ComponentRef<'a>,
    /// Index of the originating segment within the component; 0 for a point
    /// component or for a location not associated with a segment.
    pub segment_index: usize,
    /// The coordinate of the location.
    pub coordinate: Point2,
}

impl<'a> GeometryLocation<'a> {
    /// Creates a location on segment `segment_index` of `component`.
    #[must_use]
    pub fn new(component: ComponentRef<'a>, segment_index: usize, coordinate: Point2) -> Self {
        Self {
            component,
            segment_index,
            coordinate,
        }
    }

    /// Creates a location not associated with a particular segment.
    #[must_use]
    pub fn at_coordinate(component: ComponentRef<'a>, coordinate: Point2) -> Self {
        Self::new(component, 0, coordinate)
    }
}
