mod frame;
mod null_renderer;
mod primitives;
mod svg_renderer;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{
    AxisLabelPrimitive, AxisOrientation, AxisPrimitive, AxisTick, Color, HitBox, MarkerPrimitive,
    TextHAlign, TooltipPrimitive,
};
pub use svg_renderer::SvgRenderer;

use crate::core::Viewport;
use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// The chart never talks to a drawing library directly. It materializes a
/// `RenderFrame` and `render` replays it through the named operations below,
/// so a backend only has to know how to draw one element of each kind.
pub trait Renderer {
    fn begin_frame(&mut self, _viewport: Viewport) -> ChartResult<()> {
        Ok(())
    }

    fn draw_axis(&mut self, axis: &AxisPrimitive) -> ChartResult<()>;

    fn draw_axis_label(&mut self, label: &AxisLabelPrimitive) -> ChartResult<()>;

    fn draw_marker(&mut self, marker: &MarkerPrimitive) -> ChartResult<()>;

    /// Binds hover text to an already drawn marker.
    fn attach_tooltip(&mut self, tooltip: &TooltipPrimitive) -> ChartResult<()>;

    fn end_frame(&mut self) -> ChartResult<()> {
        Ok(())
    }

    /// Validates `frame` and draws axes, labels, markers, then tooltips.
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.begin_frame(frame.viewport)?;
        for axis in &frame.axes {
            self.draw_axis(axis)?;
        }
        for label in &frame.labels {
            self.draw_axis_label(label)?;
        }
        for marker in &frame.markers {
            self.draw_marker(marker)?;
        }
        for tooltip in &frame.tooltips {
            self.attach_tooltip(tooltip)?;
        }
        self.end_frame()
    }
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer};
