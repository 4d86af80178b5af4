use crate::math::Point2;
use crate::operations::tiling::Frame;
use crate::route::LinearReference;

/// Where an annotation rotation came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationSource {
    /// The frame with this 1-based index contains the point.
    Frame(usize),
    /// Route tangent at the station; no frame contained the point.
    Tangent,
}

/// Annotation rotation for a device.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationLookup {
    /// Rotation in radians.
    pub angle: f64,
    pub source: RotationSource,
}

/// Picks the rotation annotations should use so they read horizontally on
/// the sheet that shows them.
///
/// Without frames the route tangent is used. With frames, the first frame
/// whose rectangle contains the device supplies its rotation, so labels on
/// one sheet share the sheet's twist even where the route curves.
#[derive(Debug, Clone, Copy)]
pub struct RotationResolver<'a> {
    route: &'a LinearReference,
    frames: &'a [Frame],
}

impl<'a> RotationResolver<'a> {
    /// Tangent-only resolver.
    #[must_use]
    pub fn new(route: &'a LinearReference) -> Self {
        Self { route, frames: &[] }
    }

    /// Resolver that prefers containing frames.
    #[must_use]
    pub fn with_frames(route: &'a LinearReference, frames: &'a [Frame]) -> Self {
        Self { route, frames }
    }

    /// Rotation for a device at `position` and `station`.
    ///
    /// Falls back to the route tangent, with a warning, when frames were
    /// supplied but none contains the point.
    #[must_use]
    pub fn resolve(&self, position: &Point2, station: f64) -> RotationLookup {
        if let Some(frame) = self.frames.iter().find(|f| f.contains_point(position)) {
            return RotationLookup {
                angle: frame.rotation,
                source: RotationSource::Frame(frame.index),
            };
        }

        if !self.frames.is_empty() {
            tracing::warn!(
                x = position.x,
                y = position.y,
                station,
                "point lies outside every plot frame; using route tangent"
            );
        }
        RotationLookup {
            angle: self.route.tangent_at_station(station),
            source: RotationSource::Tangent,
        }
    }
}
