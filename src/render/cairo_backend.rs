use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;
use std::f64::consts::TAU;

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{
    AxisLabelPrimitive, AxisOrientation, AxisPrimitive, Color, MarkerPrimitive, RenderFrame,
    Renderer, TextHAlign, TooltipPrimitive,
};

const CLEAR_COLOR: Color = Color::rgb(1.0, 1.0, 1.0);
const TOOLTIP_BACKGROUND: Color = Color::rgba(0.1, 0.1, 0.1, 0.85);
const TOOLTIP_TEXT: Color = Color::rgb(1.0, 1.0, 1.0);
const TOOLTIP_FONT_SIZE_PX: f64 = 12.0;
const TOOLTIP_PADDING_PX: f64 = 6.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub axes_drawn: usize,
    pub labels_drawn: usize,
    pub markers_drawn: usize,
    pub tooltips_drawn: usize,
}

/// Optional extension trait for renderers that can draw into an external Cairo
/// context (for example a GTK `DrawingArea` callback).
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()>;
}

/// Cairo + Pango + PangoCairo renderer backend.
///
/// Draws offscreen into its own image surface through `Renderer::render`, or
/// into a host-provided context through `CairoContextRenderer`. The own
/// surface follows the viewport of each frame. Only the visible tooltip is
/// painted; hidden ones are skipped.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    context: Option<Context>,
    external_context: bool,
    stats: CairoRenderStats,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            context: None,
            external_context: false,
            stats: CairoRenderStats::default(),
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    fn context(&self) -> ChartResult<&Context> {
        self.context
            .as_ref()
            .ok_or_else(|| ChartError::InvalidData("cairo frame has not begun".to_owned()))
    }
}

fn surface_size(viewport: Viewport) -> ChartResult<(i32, i32)> {
    match (i32::try_from(viewport.width), i32::try_from(viewport.height)) {
        (Ok(width), Ok(height)) if width > 0 && height > 0 => Ok((width, height)),
        _ => Err(ChartError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        }),
    }
}

impl Renderer for CairoRenderer {
    fn begin_frame(&mut self, viewport: Viewport) -> ChartResult<()> {
        let (width, height) = surface_size(viewport)?;
        if !self.external_context
            && (self.surface.width() != width || self.surface.height() != height)
        {
            self.surface = ImageSurface::create(Format::ARgb32, width, height)
                .map_err(|err| map_backend_error("failed to resize cairo surface", err))?;
            self.context = None;
        }
        if self.context.is_none() {
            let context = Context::new(&self.surface)
                .map_err(|err| map_backend_error("failed to create cairo context", err))?;
            self.context = Some(context);
        }
        let context = self.context()?;
        apply_color(context, CLEAR_COLOR, 1.0);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;
        self.stats = CairoRenderStats::default();
        Ok(())
    }

    fn draw_axis(&mut self, axis: &AxisPrimitive) -> ChartResult<()> {
        let context = self.context()?;
        let (end_x, end_y) = axis.end_point();
        apply_color(context, axis.color, axis.opacity);
        context.set_line_width(1.0);
        stroke_line(context, axis.origin_x, axis.origin_y, end_x, end_y)?;
        for tick in &axis.ticks {
            match axis.orientation {
                AxisOrientation::Bottom => {
                    stroke_line(
                        context,
                        tick.position_px,
                        axis.origin_y,
                        tick.position_px,
                        axis.origin_y + axis.tick_size_px,
                    )?;
                    show_text(
                        context,
                        &tick.label,
                        tick.position_px,
                        axis.origin_y + axis.tick_size_px + 2.0,
                        axis.font_size_px,
                        TextHAlign::Center,
                    );
                }
                AxisOrientation::Left => {
                    stroke_line(
                        context,
                        axis.origin_x - axis.tick_size_px,
                        tick.position_px,
                        axis.origin_x,
                        tick.position_px,
                    )?;
                    show_text(
                        context,
                        &tick.label,
                        axis.origin_x - axis.tick_size_px - 3.0,
                        tick.position_px - axis.font_size_px / 2.0,
                        axis.font_size_px,
                        TextHAlign::Right,
                    );
                }
            }
        }
        self.stats.axes_drawn += 1;
        Ok(())
    }

    fn draw_axis_label(&mut self, label: &AxisLabelPrimitive) -> ChartResult<()> {
        let context = self.context()?;
        context
            .save()
            .map_err(|err| map_backend_error("failed to save cairo state", err))?;
        context.translate(label.x, label.y);
        context.rotate(label.rotation_deg.to_radians());
        apply_color(context, label.color, 1.0);
        show_text(
            context,
            &label.text,
            0.0,
            -label.font_size_px,
            label.font_size_px,
            TextHAlign::Center,
        );
        context
            .restore()
            .map_err(|err| map_backend_error("failed to restore cairo state", err))?;
        self.stats.labels_drawn += 1;
        Ok(())
    }

    fn draw_marker(&mut self, marker: &MarkerPrimitive) -> ChartResult<()> {
        let context = self.context()?;
        context.new_sub_path();
        context.arc(marker.center_x, marker.center_y, marker.radius, 0.0, TAU);
        apply_color(context, marker.fill, marker.opacity);
        context
            .fill()
            .map_err(|err| map_backend_error("failed to fill marker", err))?;
        if let Some(text) = &marker.text {
            apply_color(context, marker.text_color, 1.0);
            show_text(
                context,
                text,
                marker.center_x,
                marker.center_y - marker.font_size_px / 2.0,
                marker.font_size_px,
                TextHAlign::Center,
            );
        }
        self.stats.markers_drawn += 1;
        Ok(())
    }

    fn attach_tooltip(&mut self, tooltip: &TooltipPrimitive) -> ChartResult<()> {
        if !tooltip.visible {
            return Ok(());
        }
        let context = self.context()?;
        let text = tooltip.text();
        let layout = text_layout(context, &text, TOOLTIP_FONT_SIZE_PX);
        let (width, height) = layout.pixel_size();
        let box_width = f64::from(width) + TOOLTIP_PADDING_PX * 2.0;
        let box_height = f64::from(height) + TOOLTIP_PADDING_PX * 2.0;
        let left = tooltip.anchor_x - box_width / 2.0;
        let top = tooltip.anchor_y - box_height - TOOLTIP_PADDING_PX;

        context.rectangle(left, top, box_width, box_height);
        apply_color(context, TOOLTIP_BACKGROUND, 1.0);
        context
            .fill()
            .map_err(|err| map_backend_error("failed to fill tooltip", err))?;
        apply_color(context, TOOLTIP_TEXT, 1.0);
        context.move_to(left + TOOLTIP_PADDING_PX, top + TOOLTIP_PADDING_PX);
        pangocairo::functions::show_layout(context, &layout);
        self.stats.tooltips_drawn += 1;
        Ok(())
    }

    fn end_frame(&mut self) -> ChartResult<()> {
        self.last_stats = self.stats;
        Ok(())
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()> {
        let own_context = self.context.replace(context.clone());
        self.external_context = true;
        let result = self.render(frame);
        self.external_context = false;
        self.context = own_context;
        result
    }
}

fn apply_color(context: &Context, color: Color, opacity: f64) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha * opacity);
}

fn stroke_line(context: &Context, x1: f64, y1: f64, x2: f64, y2: f64) -> ChartResult<()> {
    context.move_to(x1, y1);
    context.line_to(x2, y2);
    context
        .stroke()
        .map_err(|err| map_backend_error("failed to stroke line", err))
}

fn text_layout(context: &Context, text: &str, font_size_px: f64) -> pango::Layout {
    let layout = pangocairo::functions::create_layout(context);
    let font_description = FontDescription::from_string(&format!("Sans {font_size_px}"));
    layout.set_font_description(Some(&font_description));
    layout.set_text(text);
    layout
}

fn show_text(
    context: &Context,
    text: &str,
    x: f64,
    y: f64,
    font_size_px: f64,
    h_align: TextHAlign,
) {
    let layout = text_layout(context, text, font_size_px);
    let (text_width, _text_height) = layout.pixel_size();
    let x = match h_align {
        TextHAlign::Left => x,
        TextHAlign::Center => x - f64::from(text_width) / 2.0,
        TextHAlign::Right => x - f64::from(text_width),
    };
    context.move_to(x, y);
    pangocairo::functions::show_layout(context, &layout);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::InvalidData(format!("{prefix}: {err}"))
}
