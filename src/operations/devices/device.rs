use crate::math::Point2;
use crate::route::Side;

/// A point feature read from the drawing, e.g. a device block insert.
#[derive(Debug, Clone, PartialEq)]
pub struct PointFeature {
    /// Feature type identifier, e.g. the block name.
    pub feature_id: String,
    pub position: Point2,
}

impl PointFeature {
    #[must_use]
    pub fn new(feature_id: impl Into<String>, position: Point2) -> Self {
        Self {
            feature_id: feature_id.into(),
            position,
        }
    }
}

/// A device located along the route.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Device {
    /// 1-based position in station order.
    pub index: usize,
    pub feature_id: String,
    pub display_name: String,
    pub station: f64,
    /// `K<km>+<m>` label of `station`.
    pub station_label: String,
    /// Perpendicular distance to the route.
    pub offset: f64,
    pub side: Side,
    /// Range-based classification, if a classifier was supplied.
    pub classification: Option<String>,
    /// Source coordinates.
    pub position: Point2,
}
