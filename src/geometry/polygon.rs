use super::{Envelope, LineString};
use crate::error::{GeometryError, Result};

/// A polygon bounded by one shell ring and zero or more hole rings.
///
/// Every non-empty ring must be closed and carry at least 4 coordinates
/// (a triangle plus the closing duplicate). Hole rings are expected to lie
/// inside the shell; this is not validated.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    shell: LineString,
    holes: Vec<LineString>,
}

impl Polygon {
    /// Creates a polygon from a shell ring and hole rings.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::RingNotClosed` or `GeometryError::RingTooShort`
    /// if any non-empty ring is open or has fewer than 4 coordinates. An empty
    /// shell with no holes constructs an empty polygon.
    pub fn new(shell: LineString, holes: Vec<LineString>) -> Result<Self> {
        if !shell.is_empty() {
            validate_ring(&shell)?;
        }
        for hole in &holes {
            validate_ring(hole)?;
        }
        Ok(Self { shell, holes })
    }

    /// The outer boundary ring.
    #[must_use]
    pub fn shell(&self) -> &LineString {
        &self.shell
    }

    /// The hole rings.
    #[must_use]
    pub fn holes(&self) -> &[LineString] {
        &self.holes
    }

    /// True when the polygon has no coordinates at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shell.is_empty() && self.holes.iter().all(LineString::is_empty)
    }

    /// Bounding envelope of the shell, or `None` when empty.
    #[must_use]
    pub fn envelope(&self) -> Option<Envelope> {
        self.shell.envelope()
    }
}

fn validate_ring(ring: &LineString) -> Result<()> {
    if ring.coords().len() < 4 {
        return Err(GeometryError::RingTooShort(ring.coords().len()).into());
    }
    if !ring.is_closed() {
        return Err(GeometryError::RingNotClosed.into());
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::ProxilisError;

    fn unit_square_ring() -> LineString {
        LineString::from_xy(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.0, 0.0)])
    }

    #[test]
    fn valid_polygon_constructs() {
        let poly = Polygon::new(unit_square_ring(), vec![]).unwrap();
        assert!(!poly.is_empty());
        assert_eq!(poly.shell().segment_count(), 4);
    }

    #[test]
    fn open_ring_rejected() {
        let open = LineString::from_xy(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
        let err = Polygon::new(open, vec![]).unwrap_err();
        assert!(matches!(
            err,
            ProxilisError::Geometry(GeometryError::RingNotClosed)
        ));
    }

    #[test]
    fn short_ring_rejected() {
        let short = LineString::from_xy(&[(0.0, 0.0), (1.0, 0.0), (0.0, 0.0)]);
        let err = Polygon::new(short, vec![]).unwrap_err();
        assert!(matches!(
            err,
            ProxilisError::Geometry(GeometryError::RingTooShort(3))
        ));
    }

    #[test]
    fn hole_rings_validated() {
        let open_hole = LineString::from_xy(&[(0.2, 0.2), (0.8, 0.2), (0.8, 0.8)]);
        assert!(Polygon::new(unit_square_ring(), vec![open_hole]).is_err());
    }

    #[test]
    fn empty_polygon() {
        let poly = Polygon::new(LineString::new(vec![]), vec![]).unwrap();
        assert!(poly.is_empty());
        assert!(poly.envelope().is_none());
    }
}
