//! 2D arc/bulge math utilities.
//!
//! Bulge convention: `bulge = tan(sweep_angle / 4)`.
//! - `bulge = 0`: straight line
//! - `bulge > 0`: counter-clockwise arc
//! - `bulge < 0`: clockwise arc
//! - `|bulge| = 1`: semicircle

use std::f64::consts::{PI, TAU};

use super::{Point2, Vector2};

/// A circular arc in center-radius-angle form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircularArc {
    pub center: Point2,
    pub radius: f64,
    /// Angle of the start point, radians.
    pub start_angle: f64,
    /// Signed sweep, radians. Positive is counter-clockwise.
    pub sweep: f64,
}

impl CircularArc {
    /// Evaluates the arc at parameter `t` in `[0, 1]`.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point2 {
        let angle = self.start_angle + self.sweep * t;
        self.center + Vector2::new(angle.cos(), angle.sin()) * self.radius
    }

    /// Number of chords needed so that no chord deviates from the arc by
    /// more than `tolerance`.
    #[must_use]
    pub fn chord_count(&self, tolerance: f64) -> u32 {
        arc_subdivision_count(self.radius, self.sweep.abs(), tolerance)
    }
}

/// Converts a bulge-defined arc segment to center-radius-angle form.
///
/// Returns `None` for zero-length chords and zero bulges.
#[must_use]
pub fn arc_from_bulge(p0: &Point2, p1: &Point2, bulge: f64) -> Option<CircularArc> {
    let chord = p1 - p0;
    let chord_len = chord.norm();

    if chord_len < 1e-12 || bulge.abs() < 1e-12 {
        return None;
    }

    // Distance from chord midpoint to center.
    let sagitta_ratio = (1.0 - bulge * bulge) / (2.0 * bulge);
    let mid = p0 + chord * 0.5;

    // Normal to chord pointing toward center (for positive bulge, center is left of chord).
    let normal = Vector2::new(-chord.y, chord.x) / chord_len;
    let center = mid + normal * (sagitta_ratio * chord_len * 0.5);

    // r = d*(1+b²)/(4*|b|) derived from r = d/(2*sin(θ/2)) with θ=4*atan(b)
    let radius = (chord_len * 0.5) * (1.0 + bulge * bulge) / (2.0 * bulge.abs());
    let start_angle = (p0.y - center.y).atan2(p0.x - center.x);

    let sweep = 4.0 * bulge.atan();
    let sweep = if sweep > TAU {
        sweep - TAU
    } else if sweep < -TAU {
        sweep + TAU
    } else {
        sweep
    };

    Some(CircularArc {
        center,
        radius,
        start_angle,
        sweep,
    })
}

/// Smallest chord tolerance honoured, as a fraction of the radius. Keeps a
/// full circle under about 70 000 chords.
pub const MIN_RELATIVE_TOLERANCE: f64 = 1e-9;

/// Computes the number of line segments needed to approximate an arc
/// within the given tolerance. Tolerances below
/// `radius * MIN_RELATIVE_TOLERANCE` are raised to that bound.
#[must_use]
pub fn arc_subdivision_count(radius: f64, abs_sweep: f64, tolerance: f64) -> u32 {
    if radius < 1e-12 || abs_sweep < 1e-12 || tolerance <= 0.0 {
        return 1;
    }
    // Below this the acos argument rounds to 1 and the step collapses to 0.
    let tolerance = tolerance.max(radius * MIN_RELATIVE_TOLERANCE);
    // From the sagitta formula: sagitta = r * (1 - cos(θ/2))
    // For a given tolerance: θ = 2 * acos(1 - tolerance/r)
    let max_angle = if tolerance >= radius {
        PI
    } else {
        2.0 * (1.0 - tolerance / radius).acos()
    };
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let n = (abs_sweep / max_angle).ceil() as u32;
    n.max(1)
}

/// Maximum distance between a chord spanning `angle` radians and its arc.
#[must_use]
pub fn sagitta(radius: f64, angle: f64) -> f64 {
    radius * (1.0 - (angle * 0.5).cos())
}
