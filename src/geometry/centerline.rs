use crate::math::arc_2d::CircularArc;
use crate::math::Point2;

use super::Pline;

/// A circular arc entity as stored in a drawing.
///
/// Drawings store arcs counter-clockwise from `start_angle` to `end_angle`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArcEntity {
    pub center: Point2,
    pub radius: f64,
    /// Start angle in radians.
    pub start_angle: f64,
    /// End angle in radians.
    pub end_angle: f64,
}

impl ArcEntity {
    /// Converts to center-radius-sweep form.
    #[must_use]
    pub fn to_circular_arc(&self) -> CircularArc {
        let sweep = (self.end_angle - self.start_angle).rem_euclid(std::f64::consts::TAU);
        // Equal angles describe a full circle.
        let sweep = if sweep < 1e-12 {
            std::f64::consts::TAU
        } else {
            sweep
        };
        CircularArc {
            center: self.center,
            radius: self.radius,
            start_angle: self.start_angle,
            sweep,
        }
    }
}

/// Geometry of an entity that can serve as a road centerline.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CenterlineGeometry {
    /// A single straight line.
    Line { start: Point2, end: Point2 },
    /// A lightweight polyline, possibly with bulge arcs.
    Polyline(Pline),
    /// A circular arc.
    Arc(ArcEntity),
    /// Any other entity type, by its drawing type name.
    Unsupported(String),
}

impl CenterlineGeometry {
    /// Drawing type name of this geometry.
    #[must_use]
    pub fn kind_name(&self) -> &str {
        match self {
            Self::Line { .. } => "LINE",
            Self::Polyline(_) => "LWPOLYLINE",
            Self::Arc(_) => "ARC",
            Self::Unsupported(name) => name,
        }
    }

    /// Returns `true` when the geometry is made of straight segments only.
    #[must_use]
    pub fn is_piecewise_linear(&self) -> bool {
        match self {
            Self::Line { .. } => true,
            Self::Polyline(pline) => pline.is_linear(),
            Self::Arc(_) | Self::Unsupported(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI, TAU};

    #[test]
    fn arc_entity_wraps_through_zero() {
        let arc = ArcEntity {
            center: Point2::origin(),
            radius: 10.0,
            start_angle: 3.0 * FRAC_PI_2,
            end_angle: FRAC_PI_2,
        };
        assert!((arc.to_circular_arc().sweep - PI).abs() < 1e-12);
    }

    #[test]
    fn equal_angles_mean_full_circle() {
        let arc = ArcEntity {
            center: Point2::origin(),
            radius: 1.0,
            start_angle: 1.0,
            end_angle: 1.0,
        };
        assert!((arc.to_circular_arc().sweep - TAU).abs() < 1e-12);
    }

    #[test]
    fn kind_names() {
        let line = CenterlineGeometry::Line {
            start: Point2::origin(),
            end: Point2::new(1.0, 0.0),
        };
        assert_eq!(line.kind_name(), "LINE");
        assert!(line.is_piecewise_linear());
        let spline = CenterlineGeometry::Unsupported("SPLINE".into());
        assert_eq!(spline.kind_name(), "SPLINE");
        assert!(!spline.is_piecewise_linear());
    }
}
