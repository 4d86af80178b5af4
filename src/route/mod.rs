//! Linear referencing along a road centerline.
//!
//! A [`LinearReference`] maps between model-space points and stations
//! (chainage). Stations accepted and returned here always include the
//! route's base chainage.

mod linear_reference;
mod segment;

pub use linear_reference::LinearReference;
pub use segment::Segment;

use std::fmt;

use crate::math::Point2;

/// How segment lengths are measured along the route.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpanMode {
    /// Stations follow the true Euclidean length of the sampled path.
    #[default]
    ArcLength,
    /// Every vertex-to-vertex segment counts as `span` units, whatever its
    /// geometric length.
    ///
    /// Stations then measure vertex index rather than distance. Only use
    /// this for drawings whose centerline vertices were placed at a fixed
    /// interval.
    FixedSpan { span: f64 },
}

/// Side of the route a point lies on, relative to the direction of travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Sign of the outward normal: `+1` for left, `-1` for right.
    #[must_use]
    pub fn sign(self) -> f64 {
        match self {
            Self::Left => 1.0,
            Self::Right => -1.0,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => f.write_str("Left"),
            Self::Right => f.write_str("Right"),
        }
    }
}

/// Position and heading at a station.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub point: Point2,
    /// Direction angle of the containing segment, radians.
    pub tangent: f64,
}

/// Result of projecting a point onto the route.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionResult {
    /// Station of the foot point.
    pub station: f64,
    /// Distance from the query point to the route, always `>= 0`.
    pub offset: f64,
    pub side: Side,
    /// Closest point on the route.
    pub foot: Point2,
}
