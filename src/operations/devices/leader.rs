use std::f64::consts::FRAC_PI_2;

use crate::math::vector_2d::unit_at;
use crate::math::Point2;
use crate::route::Side;

/// Fixed leader geometry for device annotations.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LeaderStyle {
    /// Distance from the device to the legend anchor.
    pub leader_length: f64,
    /// Extra distance from the legend anchor to the label anchor.
    pub label_gap: f64,
}

impl Default for LeaderStyle {
    fn default() -> Self {
        Self {
            leader_length: 15.0,
            label_gap: 1.0,
        }
    }
}

/// A leader line running from a device away from the route.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Leader {
    /// The device position.
    pub start: Point2,
    /// Leader end, where the legend block goes.
    pub end: Point2,
    pub label_anchor: Point2,
    /// Direction of the leader, radians.
    pub direction: f64,
}

impl LeaderStyle {
    /// Places a leader perpendicular to `tangent`, on the device's side:
    /// `+90°` for left, `-90°` for right.
    #[must_use]
    pub fn place(&self, position: Point2, tangent: f64, side: Side) -> Leader {
        let direction = tangent + side.sign() * FRAC_PI_2;
        let normal = unit_at(direction);
        let end = position + normal * self.leader_length;
        Leader {
            start: position,
            end,
            label_anchor: end + normal * self.label_gap,
            direction,
        }
    }
}
