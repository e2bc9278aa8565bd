use super::Point2;

/// Euclidean distance between two points.
///
/// Always non-negative; exactly zero iff the points compare equal.
#[must_use]
pub fn point_point_dist(a: &Point2, b: &Point2) -> f64 {
    (a - b).norm()
}

/// Returns the closest point to `p` on the segment from `a` to `b`.
///
/// A degenerate segment (equal endpoints) acts as its single point.
#[must_use]
pub fn point_segment_closest(p: &Point2, a: &Point2, b: &Point2) -> Point2 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len_sq = dx * dx + dy * dy;

    if len_sq < 1e-20 {
        // Degenerate segment (zero length).
        return *a;
    }

    // Project point onto the infinite line, clamp to [0, 1].
    let t = ((p.x - a.x) * dx + (p.y - a.y) * dy) / len_sq;
    let t = t.clamp(0.0, 1.0);

    Point2::new(a.x + t * dx, a.y + t * dy)
}

/// Returns the minimum distance from point `p` to the segment from `a` to `b`.
#[must_use]
pub fn point_segment_dist(p: &Point2, a: &Point2, b: &Point2) -> f64 {
    point_point_dist(p, &point_segment_closest(p, a, b))
}

/// Signed area of the triangle `(p, q, r)`, doubled.
///
/// Positive when `r` lies to the left of `p → q`, negative to the right,
/// exactly zero when collinear.
fn orientation(p: &Point2, q: &Point2, r: &Point2) -> f64 {
    (q.x - p.x) * (r.y - p.y) - (q.y - p.y) * (r.x - p.x)
}

/// True when `p` lies on the segment `a → b`, assuming `p` is already known
/// to be collinear with it.
fn on_collinear_segment(p: &Point2, a: &Point2, b: &Point2) -> bool {
    p.x >= a.x.min(b.x) && p.x <= a.x.max(b.x) && p.y >= a.y.min(b.y) && p.y <= a.y.max(b.y)
}

/// Bounded segment-segment intersection.
///
/// Returns a shared point of the segments `a0 → a1` and `b0 → b1`, or `None`
/// if they do not touch. For a proper crossing the point is computed
/// parametrically on the first segment; for collinear or endpoint contact an
/// endpoint lying on the other segment is returned.
#[must_use]
pub fn segment_intersection(a0: &Point2, a1: &Point2, b0: &Point2, b1: &Point2) -> Option<Point2> {
    let o1 = orientation(a0, a1, b0);
    let o2 = orientation(a0, a1, b1);
    let o3 = orientation(b0, b1, a0);
    let o4 = orientation(b0, b1, a1);

    // Collinear endpoint resting on the other segment.
    if o1 == 0.0 && on_collinear_segment(b0, a0, a1) {
        return Some(*b0);
    }
    if o2 == 0.0 && on_collinear_segment(b1, a0, a1) {
        return Some(*b1);
    }
    if o3 == 0.0 && on_collinear_segment(a0, b0, b1) {
        return Some(*a0);
    }
    if o4 == 0.0 && on_collinear_segment(a1, b0, b1) {
        return Some(*a1);
    }

    if o1 == 0.0 || o2 == 0.0 || o3 == 0.0 || o4 == 0.0 {
        // Collinear but disjoint, or touching beyond segment bounds.
        return None;
    }

    if (o1 > 0.0) != (o2 > 0.0) && (o3 > 0.0) != (o4 > 0.0) {
        // Proper crossing. The straddle condition guarantees the segments
        // are not parallel, so the denominator is nonzero.
        let da = a1 - a0;
        let db = b1 - b0;
        let denom = da.x * db.y - da.y * db.x;
        let t = ((b0.x - a0.x) * db.y - (b0.y - a0.y) * db.x) / denom;
        return Some(Point2::new(a0.x + t * da.x, a0.y + t * da.y));
    }

    None
}

/// Minimum distance between the segments `a0 → a1` and `b0 → b1`.
///
/// Exactly zero when the segments share a point; otherwise the minimum of the
/// four endpoint-to-segment distances.
#[must_use]
pub fn segment_segment_dist(a0: &Point2, a1: &Point2, b0: &Point2, b1: &Point2) -> f64 {
    if segment_intersection(a0, a1, b0, b1).is_some() {
        return 0.0;
    }
    point_segment_dist(a0, b0, b1)
        .min(point_segment_dist(a1, b0, b1))
        .min(point_segment_dist(b0, a0, a1))
        .min(point_segment_dist(b1, a0, a1))
}

/// Closest pair of points between the segments `a0 → a1` and `b0 → b1`,
/// one per segment.
///
/// When the segments share a point, both entries are that shared point.
#[must_use]
pub fn segment_segment_closest(
    a0: &Point2,
    a1: &Point2,
    b0: &Point2,
    b1: &Point2,
) -> (Point2, Point2) {
    if let Some(shared) = segment_intersection(a0, a1, b0, b1) {
        return (shared, shared);
    }

    // Candidate pairs: each endpoint against the opposite segment.
    let mut best = (*a0, point_segment_closest(a0, b0, b1));
    let mut best_dist = point_point_dist(&best.0, &best.1);

    let on_b = point_segment_closest(a1, b0, b1);
    let dist = point_point_dist(a1, &on_b);
    if dist < best_dist {
        best = (*a1, on_b);
        best_dist = dist;
    }

    let on_a = point_segment_closest(b0, a0, a1);
    let dist = point_point_dist(b0, &on_a);
    if dist < best_dist {
        best = (on_a, *b0);
        best_dist = dist;
    }

    let on_a = point_segment_closest(b1, a0, a1);
    let dist = point_point_dist(b1, &on_a);
    if dist < best_dist {
        best = (on_a, *b1);
    }

    best
}
