use crate::math::Point2;

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Envelope {
    /// Minimum corner of the bounding box.
    pub min: Point2,
    /// Maximum corner of the bounding box.
    pub max: Point2,
}

impl Envelope {
    /// Creates a degenerate envelope covering a single point.
    #[must_use]
    pub fn from_point(point: Point2) -> Self {
        Self {
            min: point,
            max: point,
        }
    }

    /// Computes the envelope of a coordinate sequence, or `None` if empty.
    #[must_use]
    pub fn from_coords(coords: &[Point2]) -> Option<Self> {
        let first = coords.first()?;
        let mut envelope = Self::from_point(*first);
        for coord in &coords[1..] {
            envelope.expand_to_include(coord);
        }
        Some(envelope)
    }

    /// Grows the envelope to cover `point`.
    pub fn expand_to_include(&mut self, point: &Point2) {
        self.min.x = self.min.x.min(point.x);
        self.min.y = self.min.y.min(point.y);
        self.max.x = self.max.x.max(point.x);
        self.max.y = self.max.y.max(point.y);
    }

    /// Grows the envelope to cover `other` entirely.
    pub fn expand_to_include_envelope(&mut self, other: &Envelope) {
        self.expand_to_include(&other.min);
        self.expand_to_include(&other.max);
    }

    /// True when the two envelopes overlap or touch.
    #[must_use]
    pub fn intersects(&self, other: &Envelope) -> bool {
        self.min.x <= other.max.x
            && other.min.x <= self.max.x
            && self.min.y <= other.max.y
            && other.min.y <= self.max.y
    }

    /// Minimum distance between the two envelopes.
    ///
    /// Zero when they overlap or touch; otherwise the separation along the
    /// separated axes. Used as a cheap lower bound on the distance between
    /// the geometry the envelopes cover.
    #[must_use]
    pub fn distance(&self, other: &Envelope) -> f64 {
        if self.intersects(other) {
            return 0.0;
        }
        let dx = if self.max.x < other.min.x {
            other.min.x - self.max.x
        } else if other.max.x < self.min.x {
            self.min.x - other.max.x
        } else {
            0.0
        };
        let dy = if self.max.y < other.min.y {
            other.min.y - self.max.y
        } else if other.max.y < self.min.y {
            self.min.y - other.max.y
        } else {
            0.0
        };
        dx.hypot(dy)
    }
}
