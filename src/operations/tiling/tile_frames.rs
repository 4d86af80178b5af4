use crate::chainage::ChainageFormat;
use crate::config::SheetParams;
use crate::error::{OperationError, Result};
use crate::route::LinearReference;

use super::Frame;

/// Upper bound on the number of frames one tiling may produce.
pub const MAX_FRAMES: usize = 100_000;

/// Tiles a route into fixed-scale, overlapping plot frames.
///
/// The first frame's leading edge sits on the start of the route and each
/// following center advances by `model_width × (1 − overlap)`. Tiling stops
/// with the first frame whose covered range reaches the end of the route,
/// so the tail is always covered by exactly one final frame.
#[derive(Debug)]
pub struct TileFrames<'a> {
    route: &'a LinearReference,
    sheet: &'a SheetParams,
    format: ChainageFormat,
}

impl<'a> TileFrames<'a> {
    /// Creates a new tiling operation.
    #[must_use]
    pub fn new(route: &'a LinearReference, sheet: &'a SheetParams, format: ChainageFormat) -> Self {
        Self {
            route,
            sheet,
            format,
        }
    }

    /// Executes the tiling.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if the frame width or route
    /// length is not positive, the overlap lies outside `[0, 1)`, or the
    /// route would need more than [`MAX_FRAMES`] frames.
    pub fn execute(&self) -> Result<Vec<Frame>> {
        let width = self.sheet.model_width();
        let height = self.sheet.model_height();
        let length = self.route.total_length();
        let overlap = self.sheet.overlap;

        if !(width.is_finite() && width > 0.0) {
            return Err(OperationError::InvalidInput(format!(
                "frame model width must be positive, got {width}"
            ))
            .into());
        }
        if !(length.is_finite() && length > 0.0) {
            return Err(OperationError::InvalidInput(format!(
                "route length must be positive, got {length}"
            ))
            .into());
        }
        if !(0.0..1.0).contains(&overlap) {
            return Err(OperationError::InvalidInput(format!(
                "overlap must lie in [0, 1), got {overlap}"
            ))
            .into());
        }

        let half = width * 0.5;
        let step = self.sheet.step();
        let needed = if length <= width {
            1.0
        } else {
            ((length - width) / step).ceil() + 1.0
        };
        #[allow(clippy::cast_precision_loss)]
        let limit = MAX_FRAMES as f64;
        if !(needed.is_finite() && needed <= limit) {
            return Err(OperationError::InvalidInput(format!(
                "route of length {length} needs {needed} frames of width {width}, more than {MAX_FRAMES}"
            ))
            .into());
        }

        let base = self.route.base_chainage();
        let mut frames = Vec::new();
        let mut center = half;

        loop {
            let start = (center - half).max(0.0);
            let end = (center + half).min(length);
            let placement = self.route.at(base + center);
            let index = frames.len() + 1;

            frames.push(Frame {
                index,
                name: format!("{}{index:03}", self.sheet.name_prefix),
                center: placement.point,
                rotation: placement.tangent,
                scale: self.sheet.scale,
                model_width: width,
                model_height: height,
                start_station: base + start,
                end_station: base + end,
                start_label: self.format.format(base + start),
                end_label: self.format.format(base + end),
            });

            if end >= length {
                break;
            }
            center += step;
        }

        tracing::info!(
            frames = frames.len(),
            route_length = length,
            model_width = width,
            step,
            "tiled route into frames"
        );
        Ok(frames)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::RoadplotError;
    use crate::math::Point2;
    use crate::route::SpanMode;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::FRAC_PI_2;

    fn line(length: f64) -> LinearReference {
        LinearReference::new(
            vec![Point2::new(0.0, 0.0), Point2::new(length, 0.0)],
            SpanMode::ArcLength,
            0.0,
        )
        .unwrap()
    }

    fn sheet(paper_width: f64, overlap: f64) -> SheetParams {
        SheetParams {
            paper_width,
            overlap,
            ..SheetParams::default()
        }
    }

    #[test]
    fn straight_kilometre_scenario() {
        let route = line(1000.0);
        let params = sheet(400.0, 0.1);
        let frames = TileFrames::new(&route, &params, ChainageFormat::default())
            .execute()
            .unwrap();

        assert_eq!(frames.len(), 3);
        let centers: Vec<f64> = frames.iter().map(|f| f.center.x).collect();
        for (got, want) in centers.iter().zip([200.0, 560.0, 920.0]) {
            assert_abs_diff_eq!(*got, want, epsilon = 1e-9);
        }
        let ranges: Vec<(f64, f64)> = frames.iter().map(|f| (f.start_station, f.end_station)).collect();
        for (got, want) in ranges.iter().zip([(0.0, 400.0), (360.0, 760.0), (720.0, 1000.0)]) {
            assert_abs_diff_eq!(got.0, want.0, epsilon = 1e-9);
            assert_abs_diff_eq!(got.1, want.1, epsilon = 1e-9);
        }
        assert_eq!(frames[0].name, "A3_Sec_001");
        assert_eq!(frames[2].name, "A3_Sec_003");
        assert_eq!(frames[0].start_label, "K0+000");
        assert_eq!(frames[0].end_label, "K0+400");
        assert_eq!(frames[2].end_label, "K1+000");
    }

    #[test]
    fn frames_cover_route_without_gaps() {
        for length in [1.0, 250.0, 400.0, 401.0, 1234.5, 10_000.0] {
            let route = line(length);
            let params = sheet(400.0, 0.25);
            let frames = TileFrames::new(&route, &params, ChainageFormat::default())
                .execute()
                .unwrap();

            assert_abs_diff_eq!(frames[0].start_station, 0.0);
            assert_abs_diff_eq!(frames.last().unwrap().end_station, length, epsilon = 1e-9);
            for pair in frames.windows(2) {
                assert!(pair[1].start_station <= pair[0].end_station, "gap at {length}");
                assert!(pair[0].end_station < length);
                // Unclipped neighbours share exactly overlap × width.
                if pair[1].end_station < length {
                    assert_abs_diff_eq!(
                        pair[0].end_station - pair[1].start_station,
                        100.0,
                        epsilon = 1e-9
                    );
                }
            }
        }
    }

    #[test]
    fn short_route_gets_single_frame() {
        let route = line(150.0);
        let params = sheet(400.0, 0.1);
        let frames = TileFrames::new(&route, &params, ChainageFormat::default())
            .execute()
            .unwrap();
        assert_eq!(frames.len(), 1);
        assert_abs_diff_eq!(frames[0].end_station, 150.0);
        // Center past the end anchors to the last vertex.
        assert_eq!(frames[0].center, Point2::new(150.0, 0.0));
    }

    #[test]
    fn rotation_follows_route_tangent() {
        let route = LinearReference::new(
            vec![Point2::new(0.0, 0.0), Point2::new(0.0, 1000.0)],
            SpanMode::ArcLength,
            "K3+000",
        )
        .unwrap();
        let params = sheet(400.0, 0.1);
        let frames = TileFrames::new(&route, &params, ChainageFormat::default())
            .execute()
            .unwrap();
        assert_abs_diff_eq!(frames[0].rotation, FRAC_PI_2, epsilon = 1e-12);
        assert_abs_diff_eq!(frames[0].twist(), -FRAC_PI_2, epsilon = 1e-12);
        assert_abs_diff_eq!(frames[0].center.y, 200.0, epsilon = 1e-9);
        assert_abs_diff_eq!(frames[0].start_station, 3000.0);
        assert_eq!(frames[0].start_label, "K3+000");
        assert_eq!(frames[0].end_label, "K3+400");
    }

    #[test]
    fn rejects_excessive_frame_count() {
        let route = line(1000.0);
        let params = sheet(1e-9, 0.1);
        let err = TileFrames::new(&route, &params, ChainageFormat::default())
            .execute()
            .unwrap_err();
        assert!(matches!(err, RoadplotError::Operation(OperationError::InvalidInput(_))));

        // A large but bounded count still tiles.
        let params = sheet(0.031_25, 0.0);
        let frames = TileFrames::new(&route, &params, ChainageFormat::default())
            .execute()
            .unwrap();
        assert_eq!(frames.len(), 32_000);
    }

    #[test]
    fn rejects_invalid_sheet() {
        let route = line(100.0);
        for params in [sheet(0.0, 0.1), sheet(400.0, 1.0), sheet(400.0, -0.1)] {
            let err = TileFrames::new(&route, &params, ChainageFormat::default())
                .execute()
                .unwrap_err();
            assert!(matches!(err, RoadplotError::Operation(OperationError::InvalidInput(_))));
        }
    }
}
