use crate::geometry::{Geometry, LineString, Polygon};
use crate::math::Point2;
use crate::operations::distance::{ComponentRef, GeometryLocation};

/// Collects every polygon component of a geometry, recursing through nested
/// collections to arbitrary depth.
#[must_use]
pub fn extract_polygons(geometry: &Geometry) -> Vec<&Polygon> {
    let mut polygons = Vec::new();
    collect_polygons(geometry, &mut polygons);
    polygons
}

fn collect_polygons<'a>(geometry: &'a Geometry, out: &mut Vec<&'a Polygon>) {
    match geometry {
        Geometry::Polygon(polygon) => out.push(polygon),
        Geometry::Collection(members) => {
            for member in members {
                collect_polygons(member, out);
            }
        }
        Geometry::Point(_) | Geometry::LineString(_) => {}
    }
}

/// Collects every linear component of a geometry: standalone line strings
/// plus each polygon ring (shell and holes) treated as a line.
#[must_use]
pub fn extract_lines(geometry: &Geometry) -> Vec<&LineString> {
    let mut lines = Vec::new();
    collect_lines(geometry, &mut lines);
    lines
}

fn collect_lines<'a>(geometry: &'a Geometry, out: &mut Vec<&'a LineString>) {
    match geometry {
        Geometry::LineString(line) => out.push(line),
        Geometry::Polygon(polygon) => {
            out.push(polygon.shell());
            out.extend(polygon.holes());
        }
        Geometry::Collection(members) => {
            for member in members {
                collect_lines(member, out);
            }
        }
        Geometry::Point(_) => {}
    }
}

/// Collects every standalone point component of a geometry.
#[must_use]
pub fn extract_points(geometry: &Geometry) -> Vec<&Point2> {
    let mut points = Vec::new();
    collect_points(geometry, &mut points);
    points
}

fn collect_points<'a>(geometry: &'a Geometry, out: &mut Vec<&'a Point2>) {
    match geometry {
        Geometry::Point(point) => out.push(point),
        Geometry::Collection(members) => {
            for member in members {
                collect_points(member, out);
            }
        }
        Geometry::LineString(_) | Geometry::Polygon(_) => {}
    }
}

/// One representative location per maximal connected piece of a geometry:
/// the point itself, a line's first coordinate, or a polygon's first shell
/// vertex. Empty components contribute nothing.
#[must_use]
pub fn connected_element_locations(geometry: &Geometry) -> Vec<GeometryLocation<'_>> {
    let mut locations = Vec::new();
    collect_locations(geometry, &mut locations);
    locations
}

fn collect_locations<'a>(geometry: &'a Geometry, out: &mut Vec<GeometryLocation<'a>>) {
    match geometry {
        Geometry::Point(point) => {
            out.push(GeometryLocation::at_coordinate(
                ComponentRef::Point(point),
                *point,
            ));
        }
        Geometry::LineString(line) => {
            if let Some(first) = line.coords().first() {
                out.push(GeometryLocation::at_coordinate(
                    ComponentRef::Line(line),
                    *first,
                ));
            }
        }
        Geometry::Polygon(polygon) => {
            if let Some(first) = polygon.shell().coords().first() {
                out.push(GeometryLocation::at_coordinate(
                    ComponentRef::Polygon(polygon),
                    *first,
                ));
            }
        }
        Geometry::Collection(members) => {
            for member in members {
                collect_locations(member, out);
            }
        }
    }
}
