use crate::config::{PlotConfig, SheetParams};
use crate::document::{DrawingDocument, LayoutSpec, ViewportSpec};
use crate::error::Result;
use crate::math::Point2;
use crate::operations::centerline::FindCenterline;
use crate::operations::tiling::{Frame, TileFrames};
use crate::route::LinearReference;

/// Creates one paper layout per plot frame along the drawing's centerline.
///
/// Each layout holds a single locked viewport filling the printable area,
/// centered on its frame and twisted so the route runs left to right.
/// Layouts whose name already exists are left untouched.
#[derive(Debug)]
pub struct PlotSheets<'a, D: DrawingDocument + ?Sized> {
    document: &'a mut D,
    config: &'a PlotConfig,
}

impl<'a, D: DrawingDocument + ?Sized> PlotSheets<'a, D> {
    #[must_use]
    pub fn new(document: &'a mut D, config: &'a PlotConfig) -> Self {
        Self { document, config }
    }

    /// Builds the route from the document's centerline.
    ///
    /// # Errors
    ///
    /// Returns an error if no centerline is found or it cannot be turned
    /// into a linear reference.
    pub fn route(&self) -> Result<LinearReference> {
        let route_config = &self.config.route;
        let id = FindCenterline::new(&*self.document, &route_config.centerline_layer).execute()?;
        let geometry = self.document.geometry(id)?;
        LinearReference::from_geometry(
            &geometry,
            route_config.tolerance,
            route_config.span_mode,
            route_config.start_chainage.clone(),
        )
    }

    /// Executes the plotting and returns the frames, including those whose
    /// layout already existed.
    ///
    /// # Errors
    ///
    /// Returns an error if the route cannot be built, the sheet parameters
    /// are invalid, or the document rejects a layout.
    pub fn execute(&mut self) -> Result<Vec<Frame>> {
        let route = self.route()?;
        let frames = TileFrames::new(&route, &self.config.sheet, self.config.chainage).execute()?;

        let mut created = 0;
        for frame in &frames {
            if self.document.has_layout(&frame.name) {
                tracing::debug!(layout = %frame.name, "layout exists; skipping");
                continue;
            }
            self.document.add_layout(layout_for(frame, &self.config.sheet))?;
            created += 1;
        }

        tracing::info!(frames = frames.len(), created, "plotted sheets");
        Ok(frames)
    }
}

fn layout_for(frame: &Frame, sheet: &SheetParams) -> LayoutSpec {
    let (w, h, m) = (sheet.paper_width, sheet.paper_height, sheet.margin);
    LayoutSpec {
        name: frame.name.clone(),
        paper_size: (w, h),
        margin: m,
        viewport: ViewportSpec {
            paper_center: Point2::new(w * 0.5 - m, h * 0.5 - m),
            paper_size: (w - 2.0 * m, h - 2.0 * m),
            view_center: frame.center,
            view_height: sheet.model_height(),
            twist: frame.twist_degrees(),
            locked: true,
        },
    }
}
