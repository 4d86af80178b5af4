use crate::error::{OperationError, Result, RouteError};
use crate::geometry::CenterlineGeometry;
use crate::math::Point2;

/// Turns a centerline entity into an ordered vertex sequence.
///
/// Straight geometry is passed through unchanged. Arcs are replaced by
/// chords whose deviation from the true curve stays within `tolerance`, so
/// tighter curves receive more vertices.
#[derive(Debug)]
pub struct SamplePath<'a> {
    geometry: &'a CenterlineGeometry,
    tolerance: f64,
}

impl<'a> SamplePath<'a> {
    /// Creates a new sampling operation.
    #[must_use]
    pub fn new(geometry: &'a CenterlineGeometry, tolerance: f64) -> Self {
        Self {
            geometry,
            tolerance,
        }
    }

    /// Executes the sampling.
    ///
    /// # Errors
    ///
    /// - `RouteError::UnsupportedEntity` for entity types that cannot be a centerline
    /// - `RouteError::TooFewVertices` if fewer than 2 points result
    /// - `OperationError::InvalidInput` if curved geometry is sampled with a
    ///   non-positive tolerance
    pub fn execute(&self) -> Result<Vec<Point2>> {
        if !self.geometry.is_piecewise_linear()
            && !(self.tolerance.is_finite() && self.tolerance > 0.0)
        {
            if let CenterlineGeometry::Unsupported(kind) = self.geometry {
                return Err(RouteError::UnsupportedEntity(kind.clone()).into());
            }
            return Err(OperationError::InvalidInput(format!(
                "chord tolerance must be positive, got {}",
                self.tolerance
            ))
            .into());
        }

        let points = match self.geometry {
            CenterlineGeometry::Line { start, end } => vec![*start, *end],
            CenterlineGeometry::Polyline(pline) => pline.to_points(self.tolerance),
            CenterlineGeometry::Arc(arc) => {
                let arc = arc.to_circular_arc();
                let n_sub = arc.chord_count(self.tolerance);
                (0..=n_sub)
                    .map(|j| arc.point_at(f64::from(j) / f64::from(n_sub)))
                    .collect()
            }
            CenterlineGeometry::Unsupported(kind) => {
                return Err(RouteError::UnsupportedEntity(kind.clone()).into());
            }
        };

        if points.len() < 2 {
            return Err(RouteError::TooFewVertices(points.len()).into());
        }

        tracing::debug!(
            kind = self.geometry.kind_name(),
            points = points.len(),
            tolerance = self.tolerance,
            "sampled centerline"
        );
        Ok(points)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::RoadplotError;
    use crate::geometry::{ArcEntity, Pline, PlineVertex};
    use crate::math::arc_2d::sagitta;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn line_passes_through() {
        let geometry = CenterlineGeometry::Line {
            start: Point2::new(1.0, 2.0),
            end: Point2::new(3.0, 4.0),
        };
        let points = SamplePath::new(&geometry, 0.0).execute().unwrap();
        assert_eq!(points, vec![Point2::new(1.0, 2.0), Point2::new(3.0, 4.0)]);
    }

    #[test]
    fn straight_polyline_ignores_tolerance() {
        let pts = [
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(10.0, 10.0),
        ];
        let geometry = CenterlineGeometry::Polyline(Pline::from_points(&pts));
        let points = SamplePath::new(&geometry, -1.0).execute().unwrap();
        assert_eq!(points, pts.to_vec());
    }

    #[test]
    fn arc_chords_stay_within_tolerance() {
        let arc = ArcEntity {
            center: Point2::new(0.0, 0.0),
            radius: 50.0,
            start_angle: 0.0,
            end_angle: FRAC_PI_2,
        };
        let geometry = CenterlineGeometry::Arc(arc);
        let tolerance = 0.1;
        let points = SamplePath::new(&geometry, tolerance).execute().unwrap();

        assert!((points[0] - Point2::new(50.0, 0.0)).norm() < 1e-9);
        assert!((points.last().unwrap() - Point2::new(0.0, 50.0)).norm() < 1e-9);
        for pair in points.windows(2) {
            let chord_angle = 2.0 * ((pair[1] - pair[0]).norm() / 100.0).asin();
            assert!(sagitta(50.0, chord_angle) <= tolerance + 1e-9);
            // Every vertex lies on the circle.
            assert!(((pair[1] - arc.center).norm() - 50.0).abs() < 1e-9);
        }
    }

    #[test]
    fn larger_radius_needs_more_chords_for_same_sweep() {
        let sample = |bulge: f64, chord: f64| {
            let geometry = CenterlineGeometry::Polyline(Pline {
                vertices: vec![PlineVertex::new(0.0, 0.0, bulge), PlineVertex::line(chord, 0.0)],
                closed: false,
            });
            SamplePath::new(&geometry, 0.01).execute().unwrap()
        };
        // Same sweep, radius 10 vs radius 1000.
        let tight = sample(0.5, 16.0);
        let wide = sample(0.5, 1600.0);
        assert!(wide.len() > tight.len());

        // Midpoint of each chord is within tolerance of the arc.
        let geometry = CenterlineGeometry::Polyline(Pline {
            vertices: vec![PlineVertex::new(0.0, 0.0, 1.0), PlineVertex::line(20.0, 0.0)],
            closed: false,
        });
        let points = SamplePath::new(&geometry, 0.01).execute().unwrap();
        let center = Point2::new(10.0, 0.0);
        for pair in points.windows(2) {
            let mid = Point2::from((pair[0].coords + pair[1].coords) * 0.5);
            assert!(10.0 - (mid - center).norm() <= 0.01 + 1e-9);
        }
    }

    #[test]
    fn tiny_tolerance_keeps_sample_count_bounded() {
        let arc = ArcEntity {
            center: Point2::new(0.0, 0.0),
            radius: 100.0,
            start_angle: 0.0,
            end_angle: FRAC_PI_2,
        };
        let geometry = CenterlineGeometry::Arc(arc);
        let points = SamplePath::new(&geometry, 1e-18).execute().unwrap();
        assert!(points.len() < 20_000, "got {} points", points.len());
        assert!((points.last().unwrap() - Point2::new(0.0, 100.0)).norm() < 1e-9);

        let geometry = CenterlineGeometry::Polyline(Pline {
            vertices: vec![PlineVertex::new(0.0, 0.0, 1.0), PlineVertex::line(200.0, 0.0)],
            closed: false,
        });
        let points = SamplePath::new(&geometry, 1e-18).execute().unwrap();
        assert!(points.len() < 40_000, "got {} points", points.len());
    }

    #[test]
    fn unsupported_entity_is_rejected() {
        let geometry = CenterlineGeometry::Unsupported("SPLINE".into());
        let err = SamplePath::new(&geometry, 0.5).execute().unwrap_err();
        assert!(matches!(err, RoadplotError::Route(RouteError::UnsupportedEntity(k)) if k == "SPLINE"));
    }

    #[test]
    fn curved_input_needs_positive_tolerance() {
        let geometry = CenterlineGeometry::Arc(ArcEntity {
            center: Point2::origin(),
            radius: 5.0,
            start_angle: 0.0,
            end_angle: 1.0,
        });
        let err = SamplePath::new(&geometry, 0.0).execute().unwrap_err();
        assert!(matches!(err, RoadplotError::Operation(OperationError::InvalidInput(_))));
    }

    #[test]
    fn single_vertex_polyline_is_too_short() {
        let geometry = CenterlineGeometry::Polyline(Pline::from_points(&[Point2::origin()]));
        let err = SamplePath::new(&geometry, 0.5).execute().unwrap_err();
        assert!(matches!(err, RoadplotError::Route(RouteError::TooFewVertices(1))));
    }
}
