use crate::error::{DistanceError, Result};
use crate::geometry::{Envelope, Geometry, LineString};
use crate::math::segment_2d::{
    point_point_dist, point_segment_closest, segment_segment_closest, segment_segment_dist,
};
use crate::math::Point2;
use crate::operations::extract::{
    connected_element_locations, extract_lines, extract_points, extract_polygons,
};
use crate::operations::locate::{locate_point_in_polygon, Location};

use super::location::{ComponentRef, GeometryLocation};

/// A fully derived distance result: the scalar minimum and its witness pair,
/// in input order.
struct Computed<'a> {
    distance: f64,
    locations: [GeometryLocation<'a>; 2],
}

/// Running minimum and witness pair threaded through the pairwise search.
///
/// Sub-passes update it through [`SearchState::update`]; the caller checks
/// [`SearchState::done`] after each candidate to short-circuit.
struct SearchState<'a> {
    min_distance: f64,
    terminate_distance: f64,
    locations: Option<[GeometryLocation<'a>; 2]>,
}

impl<'a> SearchState<'a> {
    fn new(terminate_distance: f64) -> Self {
        Self {
            min_distance: f64::MAX,
            terminate_distance,
            locations: None,
        }
    }

    /// Records a candidate witness pair. Only strictly smaller distances
    /// replace the current witness; ties keep the first one found.
    fn update(&mut self, distance: f64, locations: [GeometryLocation<'a>; 2]) {
        if distance < self.min_distance {
            self.min_distance = distance;
            self.locations = Some(locations);
        }
    }

    /// True once the running minimum cannot be usefully improved.
    fn done(&self) -> bool {
        self.min_distance <= self.terminate_distance
    }
}

/// Computes the minimum Euclidean distance between two geometries and the
/// pair of closest locations realizing it.
///
/// The two inputs are fixed at construction. The result is derived lazily on
/// the first query and cached for the lifetime of the instance; repeated
/// queries return bit-identical values.
///
/// Containment is checked first: if a representative point of one geometry
/// lies inside (or on) a polygon of the other, the distance is exactly zero
/// and the exhaustive facet search is skipped entirely.
pub struct DistanceOp<'a> {
    geom: [&'a Geometry; 2],
    terminate_distance: f64,
    computed: Option<Computed<'a>>,
}

impl<'a> DistanceOp<'a> {
    /// Creates a distance operation over two geometries.
    #[must_use]
    pub fn new(a: &'a Geometry, b: &'a Geometry) -> Self {
        Self::with_terminate_distance(a, b, 0.0)
    }

    /// Creates a distance operation that stops searching as soon as the
    /// running minimum reaches `terminate_distance`.
    ///
    /// The reported distance is then only guaranteed to be the true minimum
    /// when it exceeds `terminate_distance`; use this for within-distance
    /// predicates.
    #[must_use]
    pub fn with_terminate_distance(a: &'a Geometry, b: &'a Geometry, terminate_distance: f64) -> Self {
        Self {
            geom: [a, b],
            terminate_distance,
            computed: None,
        }
    }

    /// The minimum distance between the two geometries.
    ///
    /// # Errors
    ///
    /// Returns `DistanceError::EmptyGeometry` if either input has no
    /// components to measure.
    pub fn distance(&mut self) -> Result<f64> {
        Ok(self.result()?.distance)
    }

    /// The pair of closest coordinates, one per input geometry, in input
    /// order.
    ///
    /// # Errors
    ///
    /// Returns `DistanceError::EmptyGeometry` if either input has no
    /// components to measure.
    pub fn closest_points(&mut self) -> Result<(Point2, Point2)> {
        let result = self.result()?;
        Ok((result.locations[0].coordinate, result.locations[1].coordinate))
    }

    /// The pair of closest locations, one per input geometry, in input
    /// order, identifying the owning component and segment index.
    ///
    /// # Errors
    ///
    /// Returns `DistanceError::EmptyGeometry` if either input has no
    /// components to measure.
    pub fn closest_locations(&mut self) -> Result<(GeometryLocation<'a>, GeometryLocation<'a>)> {
        let result = self.result()?;
        Ok((result.locations[0], result.locations[1]))
    }

    fn result(&mut self) -> Result<&Computed<'a>> {
        if self.computed.is_none() {
            self.computed = Some(self.compute()?);
        }
        match &self.computed {
            Some(result) => Ok(result),
            None => unreachable!("result stored above"),
        }
    }

    fn compute(&self) -> Result<Computed<'a>> {
        if self.geom[0].is_empty() || self.geom[1].is_empty() {
            return Err(DistanceError::EmptyGeometry.into());
        }

        let mut search = SearchState::new(self.terminate_distance);
        self.compute_containment_distance(&mut search);
        if !search.done() {
            self.compute_facet_distance(&mut search);
        }

        match search.locations {
            Some(locations) => Ok(Computed {
                distance: search.min_distance,
                locations,
            }),
            // Inputs whose components carry coordinates but no measurable
            // facets (e.g. a single-coordinate line string).
            None => Err(DistanceError::EmptyGeometry.into()),
        }
    }

    /// Containment short-circuit: polygons of one geometry against the
    /// representative points of the other, in both directions.
    fn compute_containment_distance(&self, search: &mut SearchState<'a>) {
        self.compute_containment_side(1, search);
        if search.done() {
            return;
        }
        self.compute_containment_side(0, search);
    }

    fn compute_containment_side(&self, poly_index: usize, search: &mut SearchState<'a>) {
        let point_index = 1 - poly_index;
        let polygons = extract_polygons(self.geom[poly_index]);
        if polygons.is_empty() {
            return;
        }
        let locations = connected_element_locations(self.geom[point_index]);
        for location in &locations {
            for &polygon in &polygons {
                if locate_point_in_polygon(&location.coordinate, polygon) != Location::Exterior {
                    let polygon_location = GeometryLocation::at_coordinate(
                        ComponentRef::Polygon(polygon),
                        location.coordinate,
                    );
                    let pair = if point_index == 0 {
                        [*location, polygon_location]
                    } else {
                        [polygon_location, *location]
                    };
                    search.update(0.0, pair);
                    return;
                }
            }
        }
    }

    /// Exhaustive pairwise search over the linear and point components of
    /// both geometries, in fixed sub-pass order, short-circuiting as soon
    /// as the running minimum reaches the terminate distance.
    fn compute_facet_distance(&self, search: &mut SearchState<'a>) {
        let lines0 = extract_lines(self.geom[0]);
        let lines1 = extract_lines(self.geom[1]);
        let points0 = extract_points(self.geom[0]);
        let points1 = extract_points(self.geom[1]);

        compute_lines_lines(&lines0, &lines1, search);
        if search.done() {
            return;
        }
        compute_lines_points(&lines0, &points1, false, search);
        if search.done() {
            return;
        }
        compute_lines_points(&lines1, &points0, true, search);
        if search.done() {
            return;
        }
        compute_points_points(&points0, &points1, search);
    }
}

fn compute_lines_lines<'a>(
    lines0: &[&'a LineString],
    lines1: &[&'a LineString],
    search: &mut SearchState<'a>,
) {
    let envelopes1: Vec<Option<Envelope>> = lines1.iter().map(|line| line.envelope()).collect();
    for &line0 in lines0 {
        let envelope0 = line0.envelope();
        for (&line1, envelope1) in lines1.iter().zip(&envelopes1) {
            // Envelope pre-check: skip a pair whose bounding boxes are
            // already farther apart than the running minimum.
            if let (Some(env0), Some(env1)) = (&envelope0, envelope1) {
                if env0.distance(env1) > search.min_distance {
                    continue;
                }
            }
            compute_line_line(line0, line1, search);
            if search.done() {
                return;
            }
        }
    }
}

fn compute_line_line<'a>(line0: &'a LineString, line1: &'a LineString, search: &mut SearchState<'a>) {
    let coords0 = line0.coords();
    let coords1 = line1.coords();
    for (i, seg0) in coords0.windows(2).enumerate() {
        for (j, seg1) in coords1.windows(2).enumerate() {
            let dist = segment_segment_dist(&seg0[0], &seg0[1], &seg1[0], &seg1[1]);
            if dist < search.min_distance {
                let (closest0, closest1) =
                    segment_segment_closest(&seg0[0], &seg0[1], &seg1[0], &seg1[1]);
                search.update(
                    dist,
                    [
                        GeometryLocation::new(ComponentRef::Line(line0), i, closest0),
                        GeometryLocation::new(ComponentRef::Line(line1), j, closest1),
                    ],
                );
            }
            if search.done() {
                return;
            }
        }
    }
}

fn compute_lines_points<'a>(
    lines: &[&'a LineString],
    points: &[&'a Point2],
    flip: bool,
    search: &mut SearchState<'a>,
) {
    for &line in lines {
        let envelope = line.envelope();
        for &point in points {
            if let Some(env) = &envelope {
                if env.distance(&Envelope::from_point(*point)) > search.min_distance {
                    continue;
                }
            }
            compute_line_point(line, point, flip, search);
            if search.done() {
                return;
            }
        }
    }
}

/// Distance from one point component to every segment of one line component.
/// With `flip`, the witness pair is reported as (point, line) instead of
/// (line, point), so the caller always delivers locations in input order.
fn compute_line_point<'a>(
    line: &'a LineString,
    point: &'a Point2,
    flip: bool,
    search: &mut SearchState<'a>,
) {
    for (i, seg) in line.coords().windows(2).enumerate() {
        let closest = point_segment_closest(point, &seg[0], &seg[1]);
        let dist = point_point_dist(point, &closest);
        if dist < search.min_distance {
            let line_location = GeometryLocation::new(ComponentRef::Line(line), i, closest);
            let point_location =
                GeometryLocation::at_coordinate(ComponentRef::Point(point), *point);
            let pair = if flip {
                [point_location, line_location]
            } else {
                [line_location, point_location]
            };
            search.update(dist, pair);
        }
        if search.done() {
            return;
        }
    }
}

fn compute_points_points<'a>(
    points0: &[&'a Point2],
    points1: &[&'a Point2],
    search: &mut SearchState<'a>,
) {
    for &point0 in points0 {
        for &point1 in points1 {
            let dist = point_point_dist(point0, point1);
            if dist < search.min_distance {
                search.update(
                    dist,
                    [
                        GeometryLocation::at_coordinate(ComponentRef::Point(point0), *point0),
                        GeometryLocation::at_coordinate(ComponentRef::Point(point1), *point1),
                    ],
                );
            }
            if search.done() {
                return;
            }
        }
    }
}
