//! Parameter structs for the end-to-end operations.
//!
//! Every struct has a `Default` matching an A3 sheet at 1:1000 with metre
//! drawing units.

use crate::chainage::{ChainageFormat, ChainageValue};
use crate::operations::devices::LeaderStyle;
use crate::route::SpanMode;

/// How the centerline is located and turned into a linear reference.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RouteConfig {
    /// Layer holding the road centerline.
    pub centerline_layer: String,
    /// Maximum chord deviation when sampling curved centerlines.
    pub tolerance: f64,
    pub span_mode: SpanMode,
    /// Station of the first centerline vertex.
    pub start_chainage: ChainageValue,
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            centerline_layer: "ROAD_CENTER".to_owned(),
            tolerance: 0.5,
            span_mode: SpanMode::ArcLength,
            start_chainage: ChainageValue::Label("K0+000".to_owned()),
        }
    }
}

/// Paper sheet and plotting scale.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SheetParams {
    /// Paper width in millimetres.
    pub paper_width: f64,
    /// Paper height in millimetres.
    pub paper_height: f64,
    /// Scale denominator (`1000` for 1:1000).
    pub scale: f64,
    /// Fraction of a frame's width shared with the next frame, in `[0, 1)`.
    pub overlap: f64,
    /// Equal page margin in millimetres.
    pub margin: f64,
    /// Frame names are this prefix followed by a zero-padded index.
    pub name_prefix: String,
}

impl Default for SheetParams {
    fn default() -> Self {
        Self {
            paper_width: 420.0,
            paper_height: 297.0,
            scale: 1000.0,
            overlap: 0.1,
            margin: 5.0,
            name_prefix: "A3_Sec_".to_owned(),
        }
    }
}

impl SheetParams {
    /// Frame width in model units.
    #[must_use]
    pub fn model_width(&self) -> f64 {
        self.paper_width * self.scale / 1000.0
    }

    /// Frame height in model units.
    #[must_use]
    pub fn model_height(&self) -> f64 {
        self.paper_height * self.scale / 1000.0
    }

    /// Distance between consecutive frame centers.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.model_width() * (1.0 - self.overlap)
    }
}

/// Appearance of device legends and labels.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LegendConfig {
    pub layer: String,
    pub layer_color: i16,
    pub text_style: String,
    pub font: String,
    pub width_factor: f64,
    pub char_height: f64,
    /// Legend blocks are named `<feature id><block_suffix>`.
    pub block_suffix: String,
    /// Radius of the circle drawn when a legend block is missing.
    pub fallback_radius: f64,
    pub fallback_color: i16,
    pub leader_color: i16,
    pub leader: LeaderStyle,
    /// Classification used when a device falls in no configured range.
    pub default_classification: String,
}

impl Default for LegendConfig {
    fn default() -> Self {
        Self {
            layer: "DEVICE_LEGEND".to_owned(),
            layer_color: 7,
            text_style: "LegendTextStyle".to_owned(),
            font: "simsun.ttf".to_owned(),
            width_factor: 0.75,
            char_height: 10.0,
            block_suffix: "_TL".to_owned(),
            fallback_radius: 2.0,
            fallback_color: 1,
            leader_color: 252,
            leader: LeaderStyle::default(),
            default_classification: "Subgrade".to_owned(),
        }
    }
}

/// Everything the end-to-end operations need.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlotConfig {
    pub route: RouteConfig,
    pub sheet: SheetParams,
    pub chainage: ChainageFormat,
    pub legend: LegendConfig,
}
