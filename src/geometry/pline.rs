use crate::math::arc_2d::arc_from_bulge;
use crate::math::Point2;

/// Bulge-encoded polyline vertex for mixed line/arc segments.
///
/// `bulge = tan(sweep_angle / 4)`:
/// - `0` = straight line to next vertex
/// - `> 0` = counter-clockwise arc to next vertex
/// - `< 0` = clockwise arc to next vertex
/// - `|bulge| = 1` = semicircle
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlineVertex {
    pub x: f64,
    pub y: f64,
    pub bulge: f64,
}

impl PlineVertex {
    /// Creates a new vertex with the given coordinates and bulge.
    #[must_use]
    pub fn new(x: f64, y: f64, bulge: f64) -> Self {
        Self { x, y, bulge }
    }

    /// Creates a line vertex (bulge = 0).
    #[must_use]
    pub fn line(x: f64, y: f64) -> Self {
        Self { x, y, bulge: 0.0 }
    }

    /// Position of the vertex.
    #[must_use]
    pub fn point(&self) -> Point2 {
        Point2::new(self.x, self.y)
    }
}

/// A lightweight polyline with mixed straight-line and circular-arc segments.
///
/// Each segment between consecutive vertices is either a line (bulge=0)
/// or a circular arc (bulge≠0). For closed polylines, the last vertex
/// connects back to the first.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pline {
    pub vertices: Vec<PlineVertex>,
    pub closed: bool,
}

impl Pline {
    /// Creates an open, line-only `Pline` from points.
    #[must_use]
    pub fn from_points(points: &[Point2]) -> Self {
        let vertices = points.iter().map(|p| PlineVertex::line(p.x, p.y)).collect();
        Self {
            vertices,
            closed: false,
        }
    }

    /// Returns `true` when every segment is straight.
    #[must_use]
    pub fn is_linear(&self) -> bool {
        let seg_count = self.segment_count();
        self.vertices
            .iter()
            .take(seg_count)
            .all(|v| v.bulge.abs() < 1e-12)
    }

    /// Returns the number of segments in this polyline.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        let n = self.vertices.len();
        if n < 2 {
            return 0;
        }
        if self.closed {
            n
        } else {
            n - 1
        }
    }

    /// Converts this polyline to points, replacing arcs by chords.
    ///
    /// `tolerance` controls the maximum deviation between an arc and its
    /// chord approximation. Straight segments contribute their endpoint only.
    #[must_use]
    pub fn to_points(&self, tolerance: f64) -> Vec<Point2> {
        let n = self.vertices.len();
        if n == 0 {
            return Vec::new();
        }

        let seg_count = self.segment_count();
        let mut points = Vec::with_capacity(n * 2);
        points.push(self.vertices[0].point());

        for i in 0..seg_count {
            let v0 = &self.vertices[i];
            let v1 = &self.vertices[(i + 1) % n];
            let end = v1.point();

            if let Some(arc) = arc_from_bulge(&v0.point(), &end, v0.bulge) {
                let n_sub = arc.chord_count(tolerance);
                for j in 1..n_sub {
                    points.push(arc.point_at(f64::from(j) / f64::from(n_sub)));
                }
            }
            points.push(end);
        }

        points
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn from_points_creates_line_only() {
        let pts = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
        ];
        let pline = Pline::from_points(&pts);
        assert_eq!(pline.vertices.len(), 3);
        assert_eq!(pline.segment_count(), 2);
        assert!(pline.is_linear());
    }

    #[test]
    fn to_points_line_only_passthrough() {
        let pts = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
        ];
        let result = Pline::from_points(&pts).to_points(0.01);
        assert_eq!(result, pts);
    }

    #[test]
    fn closed_polyline_repeats_first_vertex() {
        let mut pline = Pline::from_points(&[
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
        ]);
        pline.closed = true;
        assert_eq!(pline.segment_count(), 3);
        let pts = pline.to_points(0.01);
        assert_eq!(pts.len(), 4);
        assert_eq!(pts[3], Point2::new(0.0, 0.0));
    }

    #[test]
    fn to_points_semicircle_arc() {
        let pline = Pline {
            vertices: vec![
                PlineVertex::new(0.0, 0.0, 1.0), // semicircle
                PlineVertex::new(2.0, 0.0, 0.0),
            ],
            closed: false,
        };
        assert!(!pline.is_linear());
        let pts = pline.to_points(0.01);
        assert!(pts.len() > 2, "expected more than 2 points, got {}", pts.len());
        assert!(pts[0].x.abs() < 1e-10);
        assert!((pts.last().unwrap().x - 2.0).abs() < 1e-10);
        assert!(pts.last().unwrap().y.abs() < 1e-10);
    }

    #[test]
    fn trailing_bulge_of_open_polyline_is_ignored() {
        let pline = Pline {
            vertices: vec![PlineVertex::line(0.0, 0.0), PlineVertex::new(5.0, 0.0, 1.0)],
            closed: false,
        };
        assert!(pline.is_linear());
        assert_eq!(pline.to_points(0.1).len(), 2);
    }

    #[test]
    fn segment_count_single_vertex() {
        let pline = Pline {
            vertices: vec![PlineVertex::line(0.0, 0.0)],
            closed: false,
        };
        assert_eq!(pline.segment_count(), 0);
    }
}
