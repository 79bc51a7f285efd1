use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{
    AxisLabelPrimitive, AxisOrientation, AxisPrimitive, Color, MarkerPrimitive, Renderer,
    TooltipPrimitive,
};

/// Renders frames into a standalone SVG document.
///
/// Markers become `<g>` groups holding a `stateCircle` circle and a
/// `stateText` label; tooltips are attached as `<title>` children so any
/// browser shows them on hover. Axis labels carry `active`/`inactive`
/// classes and a `data-axis-index` attribute.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    viewport: Option<Viewport>,
    axes_svg: String,
    labels_svg: String,
    markers: Vec<MarkerGroup>,
    document: String,
}

#[derive(Debug)]
struct MarkerGroup {
    body: String,
    title: Option<String>,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Document produced by the last completed frame.
    #[must_use]
    pub fn svg(&self) -> &str {
        &self.document
    }

    #[must_use]
    pub fn into_svg(self) -> String {
        self.document
    }
}

impl Renderer for SvgRenderer {
    fn begin_frame(&mut self, viewport: Viewport) -> ChartResult<()> {
        self.viewport = Some(viewport);
        self.axes_svg.clear();
        self.labels_svg.clear();
        self.markers.clear();
        Ok(())
    }

    fn draw_axis(&mut self, axis: &AxisPrimitive) -> ChartResult<()> {
        let stroke = svg_rgb(axis.color);
        let opacity = axis.opacity * axis.color.alpha;
        let (x0, y0) = (axis.origin_x, axis.origin_y);
        let (x1, y1) = axis.end_point();
        let font_size = axis.font_size_px;
        self.axes_svg.push_str(&format!(
            "<g class=\"axis axis-{}\" opacity=\"{opacity:.3}\">\n\
             <line x1=\"{x0:.1}\" y1=\"{y0:.1}\" x2=\"{x1:.1}\" y2=\"{y1:.1}\" \
             stroke=\"{stroke}\"/>\n",
            axis.dimension
        ));

        for tick in &axis.ticks {
            let p = tick.position_px;
            let size = axis.tick_size_px;
            let (lx0, ly0, lx1, ly1, tx, ty, anchor) = match axis.orientation {
                AxisOrientation::Bottom => (
                    p,
                    y0,
                    p,
                    y0 + size,
                    p,
                    y0 + size + font_size,
                    "middle",
                ),
                AxisOrientation::Left => (
                    x0 - size,
                    p,
                    x0,
                    p,
                    x0 - size - 3.0,
                    p + font_size / 3.0,
                    "end",
                ),
            };
            self.axes_svg.push_str(&format!(
                "<line x1=\"{lx0:.1}\" y1=\"{ly0:.1}\" x2=\"{lx1:.1}\" y2=\"{ly1:.1}\" \
                 stroke=\"{stroke}\"/>\n\
                 <text x=\"{tx:.1}\" y=\"{ty:.1}\" text-anchor=\"{anchor}\" \
                 font-family=\"sans-serif\" font-size=\"{font_size:.0}\" \
                 fill=\"{stroke}\">{}</text>\n",
                html_escape(&tick.label)
            ));
        }
        self.axes_svg.push_str("</g>\n");
        Ok(())
    }

    fn draw_axis_label(&mut self, label: &AxisLabelPrimitive) -> ChartResult<()> {
        let class = if label.active { "active" } else { "inactive" };
        let (x, y) = (label.x, label.y);
        let rotation = label.rotation_deg;
        let transform = if rotation == 0.0 {
            String::new()
        } else {
            format!(" transform=\"rotate({rotation:.0},{x:.1},{y:.1})\"")
        };
        self.labels_svg.push_str(&format!(
            "<text class=\"axis-label {class}\" data-dimension=\"{}\" \
             data-axis-index=\"{}\" x=\"{x:.1}\" y=\"{y:.1}\" text-anchor=\"middle\" \
             font-family=\"sans-serif\" font-size=\"{:.0}\" fill=\"{}\"{transform}>{}</text>\n",
            label.dimension,
            label.index,
            label.font_size_px,
            svg_rgb(label.color),
            html_escape(&label.text)
        ));
        Ok(())
    }

    fn draw_marker(&mut self, marker: &MarkerPrimitive) -> ChartResult<()> {
        let (cx, cy) = (marker.center_x, marker.center_y);
        let mut body = format!(
            "<g transform=\"translate({cx:.1},{cy:.1})\">\
             <circle class=\"stateCircle\" r=\"{:.1}\" fill=\"{}\" opacity=\"{:.3}\"/>",
            marker.radius,
            svg_rgb(marker.fill),
            marker.opacity * marker.fill.alpha
        );
        if let Some(text) = &marker.text {
            let font_size = marker.font_size_px;
            body.push_str(&format!(
                "<text class=\"stateText\" text-anchor=\"middle\" dy=\"{:.1}\" \
                 font-family=\"sans-serif\" font-size=\"{font_size:.0}\" fill=\"{}\">{}</text>",
                font_size / 2.0,
                svg_rgb(marker.text_color),
                html_escape(text)
            ));
        }
        self.markers.push(MarkerGroup { body, title: None });
        Ok(())
    }

    fn attach_tooltip(&mut self, tooltip: &TooltipPrimitive) -> ChartResult<()> {
        let group = self.markers.get_mut(tooltip.marker_index).ok_or_else(|| {
            ChartError::InvalidData(format!(
                "tooltip references missing marker {}",
                tooltip.marker_index
            ))
        })?;
        group.title = Some(tooltip.text());
        Ok(())
    }

    fn end_frame(&mut self) -> ChartResult<()> {
        let viewport = self.viewport.take().ok_or_else(|| {
            ChartError::InvalidData("svg frame ended before it began".to_owned())
        })?;

        let mut buf = svg_header(viewport);
        buf.push_str(&self.axes_svg);
        buf.push_str(&self.labels_svg);
        buf.push_str("<g class=\"markers\">\n");
        for group in &self.markers {
            buf.push_str(&group.body);
            if let Some(title) = &group.title {
                buf.push_str(&format!("<title>{}</title>", html_escape(title)));
            }
            buf.push_str("</g>\n");
        }
        buf.push_str("</g>\n</svg>");
        self.document = buf;
        Ok(())
    }
}

fn svg_header(viewport: Viewport) -> String {
    let (w, h) = (viewport.width, viewport.height);
    format!(
        "<svg class=\"chart\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\" \
         preserveAspectRatio=\"xMidYMid meet\" xmlns=\"http://www.w3.org/2000/svg\">\n"
    )
}

fn svg_rgb(color: Color) -> String {
    let channel = |value: f64| (value.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!(
        "rgb({},{},{})",
        channel(color.red),
        channel(color.green),
        channel(color.blue)
    )
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(html_escape("a<b & \"c\""), "a&lt;b &amp; &quot;c&quot;");
    }

    #[test]
    fn colors_drop_alpha_channel() {
        assert_eq!(svg_rgb(Color::rgba(1.0, 0.5, 0.0, 0.2)), "rgb(255,128,0)");
    }
}
