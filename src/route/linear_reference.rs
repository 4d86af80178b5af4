use crate::chainage::ChainageValue;
use crate::error::{OperationError, Result, RouteError};
use crate::geometry::CenterlineGeometry;
use crate::math::distance_2d::project_to_segment;
use crate::math::vector_2d::{cross_2d, is_finite};
use crate::math::{Point2, TOLERANCE};
use crate::operations::sample::SamplePath;

use super::{Placement, ProjectionResult, Segment, Side, SpanMode};

/// Chainage engine over a sampled centerline.
///
/// Built once from a vertex sequence and read-only afterwards, so a single
/// instance can serve forward and inverse queries from several threads.
#[derive(Debug, Clone)]
pub struct LinearReference {
    vertices: Vec<Point2>,
    segments: Vec<Segment>,
    total_length: f64,
    base_chainage: f64,
    mode: SpanMode,
}

impl LinearReference {
    /// Builds a linear reference from an ordered vertex sequence.
    ///
    /// `start_chainage` is the station of the first vertex, given as a
    /// number or a `K<km>+<m>` label. Malformed labels count as `0.0`.
    ///
    /// # Errors
    ///
    /// - `RouteError::TooFewVertices` if fewer than 2 vertices are supplied
    /// - `RouteError::ZeroLength` if the path has no geometric length
    /// - `OperationError::InvalidInput` for non-finite coordinates or a
    ///   non-positive fixed span
    pub fn new(
        vertices: Vec<Point2>,
        mode: SpanMode,
        start_chainage: impl Into<ChainageValue>,
    ) -> Result<Self> {
        if vertices.len() < 2 {
            return Err(RouteError::TooFewVertices(vertices.len()).into());
        }
        if let Some(bad) = vertices.iter().find(|p| !is_finite(p)) {
            return Err(OperationError::InvalidInput(format!(
                "non-finite centerline vertex ({}, {})",
                bad.x, bad.y
            ))
            .into());
        }
        let fixed_span = match mode {
            SpanMode::ArcLength => None,
            SpanMode::FixedSpan { span } if span.is_finite() && span > 0.0 => Some(span),
            SpanMode::FixedSpan { span } => {
                return Err(OperationError::InvalidInput(format!(
                    "fixed span must be positive, got {span}"
                ))
                .into());
            }
        };

        let base_chainage = start_chainage.into().resolve();
        let mut segments = Vec::with_capacity(vertices.len() - 1);
        let mut cumulative = 0.0;
        let mut geometric_length = 0.0;
        for pair in vertices.windows(2) {
            let segment = Segment::new(pair[0], pair[1], fixed_span, base_chainage + cumulative);
            cumulative += segment.span();
            geometric_length += segment.length();
            segments.push(segment);
        }

        if geometric_length <= TOLERANCE {
            return Err(RouteError::ZeroLength.into());
        }

        tracing::debug!(
            vertices = vertices.len(),
            total_length = cumulative,
            base_chainage,
            ?mode,
            "built linear reference"
        );

        Ok(Self {
            vertices,
            segments,
            total_length: cumulative,
            base_chainage,
            mode,
        })
    }

    /// Samples `geometry` at `tolerance` and builds a linear reference from
    /// the resulting vertices.
    ///
    /// # Errors
    ///
    /// Returns an error if sampling fails or the sampled path is degenerate.
    pub fn from_geometry(
        geometry: &CenterlineGeometry,
        tolerance: f64,
        mode: SpanMode,
        start_chainage: impl Into<ChainageValue>,
    ) -> Result<Self> {
        let vertices = SamplePath::new(geometry, tolerance).execute()?;
        Self::new(vertices, mode, start_chainage)
    }

    /// The sampled vertices, in route order.
    #[must_use]
    pub fn vertices(&self) -> &[Point2] {
        &self.vertices
    }

    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Route length in station units, excluding the base chainage.
    #[must_use]
    pub fn total_length(&self) -> f64 {
        self.total_length
    }

    #[must_use]
    pub fn base_chainage(&self) -> f64 {
        self.base_chainage
    }

    #[must_use]
    pub fn mode(&self) -> SpanMode {
        self.mode
    }

    /// Station of the first vertex.
    #[must_use]
    pub fn start_station(&self) -> f64 {
        self.base_chainage
    }

    /// Station of the last vertex.
    #[must_use]
    pub fn end_station(&self) -> f64 {
        self.base_chainage + self.total_length
    }

    /// Position and tangent at `station`.
    ///
    /// Stations before the start anchor to the first vertex and stations
    /// past the end anchor to the last vertex. The tangent is the direction
    /// of the containing segment and jumps at vertices.
    #[must_use]
    pub fn at(&self, station: f64) -> Placement {
        let last_index = self.segments.len() - 1;
        if station.is_nan() || station <= self.start_station() {
            return Placement {
                point: self.vertices[0],
                tangent: self.tangent_near(0),
            };
        }
        if station >= self.end_station() {
            return Placement {
                point: self.vertices[self.vertices.len() - 1],
                tangent: self.tangent_near(last_index),
            };
        }

        let index = self.segment_index_at(station);
        let segment = &self.segments[index];
        let ratio = if segment.span() > 0.0 {
            ((station - segment.start_station()) / segment.span()).clamp(0.0, 1.0)
        } else {
            0.0
        };

        Placement {
            point: segment.start() + segment.vector() * ratio,
            tangent: self.tangent_near(index),
        }
    }

    /// Projects `point` onto the nearest segment.
    ///
    /// Zero-length segments are skipped. When several segments are equally
    /// close, the first one in route order wins. Returns `None` only when no
    /// segment yields a finite distance, e.g. for a non-finite `point`.
    #[must_use]
    pub fn project(&self, point: &Point2) -> Option<ProjectionResult> {
        let mut best: Option<ProjectionResult> = None;
        let mut min_distance = f64::INFINITY;

        for segment in &self.segments {
            let Some(proj) =
                project_to_segment(point, &segment.start(), &segment.vector(), segment.length_sq())
            else {
                continue;
            };

            if proj.distance < min_distance {
                min_distance = proj.distance;
                let cross = cross_2d(&segment.vector(), &(point - segment.start()));
                best = Some(ProjectionResult {
                    station: segment.start_station() + proj.t * segment.span(),
                    offset: proj.distance,
                    side: if cross > 0.0 { Side::Left } else { Side::Right },
                    foot: proj.foot,
                });
            }
        }

        best
    }

    /// Direction angle of the first segment whose station range contains
    /// `station`, or `0.0` when the station is off the route.
    #[must_use]
    pub fn tangent_at_station(&self, station: f64) -> f64 {
        self.segments
            .iter()
            .find(|s| s.contains_station(station))
            .map_or(0.0, Segment::angle)
    }

    /// Index of the segment holding an interior station.
    fn segment_index_at(&self, station: f64) -> usize {
        let last_index = self.segments.len() - 1;
        match self.mode {
            SpanMode::ArcLength => self
                .segments
                .partition_point(|s| s.end_station() <= station)
                .min(last_index),
            SpanMode::FixedSpan { span } => {
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                let index = ((station - self.base_chainage) / span).floor().max(0.0) as usize;
                index.min(last_index)
            }
        }
    }

    /// Tangent of segment `index`, borrowing from the nearest non-degenerate
    /// neighbour when the segment has no direction of its own.
    fn tangent_near(&self, index: usize) -> f64 {
        let backward = self.segments[..=index].iter().rev();
        let forward = self.segments[index + 1..].iter();
        backward
            .chain(forward)
            .find(|s| !s.is_degenerate())
            .map_or(0.0, Segment::angle)
    }
}
