use super::{Point2, Vector2};

/// Closest point on a bounded segment to a query point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentProjection {
    /// Segment parameter of the foot point, clamped to `[0, 1]`.
    pub t: f64,
    /// The foot point on the segment.
    pub foot: Point2,
    /// Euclidean distance from the query point to `foot`.
    pub distance: f64,
}

/// Projects `p` onto the segment starting at `a` with direction vector `v`.
///
/// `len_sq` is `|v|²`, passed in so callers holding precomputed segments do
/// not pay for it twice. Returns `None` for a zero-length segment.
#[must_use]
pub fn project_to_segment(p: &Point2, a: &Point2, v: &Vector2, len_sq: f64) -> Option<SegmentProjection> {
    if len_sq <= 0.0 {
        return None;
    }

    // Project onto the infinite line, clamp to [0, 1].
    let t = ((p - a).dot(v) / len_sq).clamp(0.0, 1.0);
    let foot = a + v * t;
    let distance = (p - foot).norm();

    Some(SegmentProjection { t, foot, distance })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-10;

    #[test]
    fn perpendicular_projection() {
        // Point (1, 1) to segment (0,0)→(2,0). Closest at (1,0), dist = 1.
        let a = Point2::new(0.0, 0.0);
        let v = Vector2::new(2.0, 0.0);
        let proj = project_to_segment(&Point2::new(1.0, 1.0), &a, &v, 4.0).unwrap();
        assert!((proj.t - 0.5).abs() < TOL, "t={}", proj.t);
        assert!((proj.foot.x - 1.0).abs() < TOL);
        assert!((proj.distance - 1.0).abs() < TOL);
    }

    #[test]
    fn projection_clamps_before_start() {
        let a = Point2::new(0.0, 0.0);
        let v = Vector2::new(2.0, 0.0);
        let proj = project_to_segment(&Point2::new(-3.0, 4.0), &a, &v, 4.0).unwrap();
        assert!(proj.t.abs() < TOL);
        assert!((proj.distance - 5.0).abs() < TOL);
    }

    #[test]
    fn projection_clamps_after_end() {
        let a = Point2::new(0.0, 0.0);
        let v = Vector2::new(2.0, 0.0);
        let proj = project_to_segment(&Point2::new(5.0, 0.0), &a, &v, 4.0).unwrap();
        assert!((proj.t - 1.0).abs() < TOL);
        assert!((proj.distance - 3.0).abs() < TOL);
    }

    #[test]
    fn zero_length_segment_has_no_projection() {
        let a = Point2::new(1.0, 1.0);
        assert!(project_to_segment(&Point2::origin(), &a, &Vector2::zeros(), 0.0).is_none());
    }
}
