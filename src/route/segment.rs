use crate::math::vector_2d::angle_of;
use crate::math::{Point2, Vector2};

/// A straight piece of the route between two consecutive vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub(super) start: Point2,
    pub(super) vector: Vector2,
    pub(super) length_sq: f64,
    pub(super) length: f64,
    pub(super) span: f64,
    pub(super) start_station: f64,
}

impl Segment {
    pub(super) fn new(start: Point2, end: Point2, span: Option<f64>, start_station: f64) -> Self {
        let vector = end - start;
        let length_sq = vector.norm_squared();
        let length = length_sq.sqrt();
        Self {
            start,
            vector,
            length_sq,
            length,
            span: span.unwrap_or(length),
            start_station,
        }
    }

    /// First vertex of the segment.
    #[must_use]
    pub fn start(&self) -> Point2 {
        self.start
    }

    /// Vector from start to end.
    #[must_use]
    pub fn vector(&self) -> Vector2 {
        self.vector
    }

    /// Squared Euclidean length.
    #[must_use]
    pub fn length_sq(&self) -> f64 {
        self.length_sq
    }

    /// Euclidean length.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Length the segment contributes to stations. Equals [`Self::length`]
    /// in arc-length mode.
    #[must_use]
    pub fn span(&self) -> f64 {
        self.span
    }

    #[must_use]
    pub fn start_station(&self) -> f64 {
        self.start_station
    }

    #[must_use]
    pub fn end_station(&self) -> f64 {
        self.start_station + self.span
    }

    /// Direction angle, radians. Zero for a zero-length segment.
    #[must_use]
    pub fn angle(&self) -> f64 {
        angle_of(&self.vector)
    }

    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.length_sq <= 0.0
    }

    /// Returns `true` when `station` lies within `[start, end]`.
    #[must_use]
    pub fn contains_station(&self, station: f64) -> bool {
        self.start_station <= station && station <= self.end_station()
    }
}
