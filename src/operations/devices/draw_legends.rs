use crate::config::LegendConfig;
use crate::document::{DrawingDocument, MText};
use crate::operations::tiling::Frame;
use crate::route::LinearReference;

use super::{Device, RotationResolver};

/// What [`DrawLegends`] put into the drawing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LegendSummary {
    /// Devices annotated.
    pub devices: usize,
    /// Legend block references inserted.
    pub blocks: usize,
    /// Devices whose legend block was missing and got a circle instead.
    pub fallbacks: usize,
}

/// Annotates devices with a leader, a legend block and a text label.
///
/// Everything is drawn on the legend layer, rotated so it reads
/// horizontally in the viewport that shows it.
#[derive(Debug)]
pub struct DrawLegends<'a, D: DrawingDocument + ?Sized> {
    document: &'a mut D,
    route: &'a LinearReference,
    devices: &'a [Device],
    config: &'a LegendConfig,
    frames: &'a [Frame],
}

impl<'a, D: DrawingDocument + ?Sized> DrawLegends<'a, D> {
    #[must_use]
    pub fn new(
        document: &'a mut D,
        route: &'a LinearReference,
        devices: &'a [Device],
        config: &'a LegendConfig,
    ) -> Self {
        Self {
            document,
            route,
            devices,
            config,
            frames: &[],
        }
    }

    /// Takes rotations from the frames containing each device instead of
    /// the local route tangent.
    #[must_use]
    pub fn with_frames(mut self, frames: &'a [Frame]) -> Self {
        self.frames = frames;
        self
    }

    /// Draws the annotations.
    pub fn execute(self) -> LegendSummary {
        let config = self.config;
        let document = self.document;
        document.ensure_layer(&config.layer, config.layer_color);
        document.ensure_text_style(&config.text_style, &config.font, config.width_factor);

        let resolver = RotationResolver::with_frames(self.route, self.frames);
        let mut summary = LegendSummary::default();

        for device in self.devices {
            let rotation = resolver.resolve(&device.position, device.station).angle;
            let degrees = rotation.to_degrees();
            let leader = config.leader.place(device.position, rotation, device.side);

            let block = format!("{}{}", device.feature_id, config.block_suffix);
            if document.has_block(&block) {
                document.add_block_ref(&config.layer, &block, leader.end, degrees);
                summary.blocks += 1;
            } else {
                tracing::warn!(block = %block, device = device.index, "legend block missing; drawing circle");
                document.add_circle(
                    &config.layer,
                    leader.end,
                    config.fallback_radius,
                    Some(config.fallback_color),
                );
                summary.fallbacks += 1;
            }

            document.add_line(&config.layer, leader.start, leader.end, Some(config.leader_color));

            document.add_mtext(
                &config.layer,
                MText {
                    text: label_text(device, &config.default_classification),
                    position: leader.label_anchor,
                    char_height: config.char_height,
                    rotation: degrees,
                    style: config.text_style.clone(),
                },
            );
            summary.devices += 1;
        }

        tracing::info!(
            devices = summary.devices,
            blocks = summary.blocks,
            fallbacks = summary.fallbacks,
            "drew device legends"
        );
        summary
    }
}

fn label_text(device: &Device, default_classification: &str) -> String {
    let classification = device
        .classification
        .as_deref()
        .unwrap_or(default_classification);
    format!(
        "Name: {}\nStation: {}\nSide: {}\nBase: {classification}",
        device.display_name, device.station_label, device.side
    )
}
