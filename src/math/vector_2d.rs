use super::{Point2, Vector2};

/// Z component of the 3D cross product of two XY vectors.
///
/// Positive when `b` lies counter-clockwise of `a`.
#[must_use]
pub fn cross_2d(a: &Vector2, b: &Vector2) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Direction angle of `v` in radians, in `(-π, π]`.
#[must_use]
pub fn angle_of(v: &Vector2) -> f64 {
    v.y.atan2(v.x)
}

/// Unit vector pointing at `angle` radians.
#[must_use]
pub fn unit_at(angle: f64) -> Vector2 {
    Vector2::new(angle.cos(), angle.sin())
}

/// Rotates `p` around `center` by `angle` radians (counter-clockwise).
#[must_use]
pub fn rotate_about(p: &Point2, center: &Point2, angle: f64) -> Point2 {
    let (sin, cos) = angle.sin_cos();
    let d = p - center;
    center + Vector2::new(d.x * cos - d.y * sin, d.x * sin + d.y * cos)
}

/// Returns `true` when both coordinates of `p` are finite.
#[must_use]
pub fn is_finite(p: &Point2) -> bool {
    p.x.is_finite() && p.y.is_finite()
}
