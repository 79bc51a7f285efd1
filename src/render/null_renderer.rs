use crate::core::Viewport;
use crate::error::ChartResult;
use crate::render::{
    AxisLabelPrimitive, AxisPrimitive, MarkerPrimitive, Renderer, TooltipPrimitive,
};

/// No-op renderer used by tests and headless chart usage.
///
/// Frames are still validated by `Renderer::render`, and the counters below
/// describe the most recent frame.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_viewport: Option<Viewport>,
    pub last_axis_count: usize,
    pub last_label_count: usize,
    pub last_marker_count: usize,
    pub last_tooltip_count: usize,
}

impl Renderer for NullRenderer {
    fn begin_frame(&mut self, viewport: Viewport) -> ChartResult<()> {
        self.last_viewport = Some(viewport);
        self.last_axis_count = 0;
        self.last_label_count = 0;
        self.last_marker_count = 0;
        self.last_tooltip_count = 0;
        Ok(())
    }

    fn draw_axis(&mut self, _axis: &AxisPrimitive) -> ChartResult<()> {
        self.last_axis_count += 1;
        Ok(())
    }

    fn draw_axis_label(&mut self, _label: &AxisLabelPrimitive) -> ChartResult<()> {
        self.last_label_count += 1;
        Ok(())
    }

    fn draw_marker(&mut self, _marker: &MarkerPrimitive) -> ChartResult<()> {
        self.last_marker_count += 1;
        Ok(())
    }

    fn attach_tooltip(&mut self, _tooltip: &TooltipPrimitive) -> ChartResult<()> {
        self.last_tooltip_count += 1;
        Ok(())
    }

    fn end_frame(&mut self) -> ChartResult<()> {
        self.frames_rendered += 1;
        Ok(())
    }
}
