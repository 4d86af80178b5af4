use crate::math::vector_2d::rotate_about;
use crate::math::{Point2, TOLERANCE};

/// One plot sheet covering a station range of the route.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame {
    /// 1-based position along the route.
    pub index: usize,
    pub name: String,
    /// Model-space point the sheet is centered on.
    pub center: Point2,
    /// Route tangent at the center, radians.
    pub rotation: f64,
    /// Scale denominator.
    pub scale: f64,
    pub model_width: f64,
    pub model_height: f64,
    pub start_station: f64,
    pub end_station: f64,
    pub start_label: String,
    pub end_label: String,
}

impl Frame {
    /// Viewport twist that renders the route horizontally on paper.
    #[must_use]
    pub fn twist(&self) -> f64 {
        -self.rotation
    }

    /// [`Self::twist`] in degrees, as layout writers expect it.
    #[must_use]
    pub fn twist_degrees(&self) -> f64 {
        self.twist().to_degrees()
    }

    /// Chainage range as `"<start> ~ <end>"`.
    #[must_use]
    pub fn range_label(&self) -> String {
        format!("{} ~ {}", self.start_label, self.end_label)
    }

    /// Returns `true` when `point` lies inside the frame's rotated
    /// model-space rectangle (boundary included).
    #[must_use]
    pub fn contains_point(&self, point: &Point2) -> bool {
        let local = rotate_about(point, &self.center, -self.rotation) - self.center;
        local.x.abs() <= self.model_width * 0.5 + TOLERANCE
            && local.y.abs() <= self.model_height * 0.5 + TOLERANCE
    }
}
