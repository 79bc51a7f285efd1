use crate::core::Dimension;
use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Horizontal text alignment relative to the anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Side of the plot an axis is drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisOrientation {
    Bottom,
    Left,
}

/// One tick mark with its formatted label.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    pub value: f64,
    /// Surface coordinate along the axis (x for bottom, y for left).
    pub position_px: f64,
    pub label: String,
}

/// Axis line with ticks for the currently displayed domain.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisPrimitive {
    pub dimension: Dimension,
    pub orientation: AxisOrientation,
    pub origin_x: f64,
    pub origin_y: f64,
    pub length: f64,
    pub ticks: Vec<AxisTick>,
    pub tick_size_px: f64,
    pub font_size_px: f64,
    pub color: Color,
    /// 0 while faded out during an axis swap, 1 when settled.
    pub opacity: f64,
}

impl AxisPrimitive {
    /// Surface coordinates of the far end of the axis line.
    #[must_use]
    pub fn end_point(&self) -> (f64, f64) {
        match self.orientation {
            AxisOrientation::Bottom => (self.origin_x + self.length, self.origin_y),
            AxisOrientation::Left => (self.origin_x, self.origin_y + self.length),
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.origin_x.is_finite() || !self.origin_y.is_finite() {
            return Err(ChartError::InvalidData(
                "axis origin must be finite".to_owned(),
            ));
        }
        if !self.length.is_finite() || self.length <= 0.0 {
            return Err(ChartError::InvalidData(
                "axis length must be finite and > 0".to_owned(),
            ));
        }
        if !self.tick_size_px.is_finite() || self.tick_size_px < 0.0 {
            return Err(ChartError::InvalidData(
                "axis tick size must be finite and >= 0".to_owned(),
            ));
        }
        validate_font_size(self.font_size_px)?;
        validate_opacity(self.opacity)?;
        for tick in &self.ticks {
            if !tick.position_px.is_finite() || !tick.value.is_finite() {
                return Err(ChartError::InvalidData(
                    "axis tick must be finite".to_owned(),
                ));
            }
        }
        self.color.validate()
    }
}

/// Surface-space rectangle used to hit-test labels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitBox {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl HitBox {
    #[must_use]
    pub fn contains(self, x: f64, y: f64) -> bool {
        x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
    }
}

/// Clickable label naming one registered axis definition.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisLabelPrimitive {
    pub dimension: Dimension,
    pub index: usize,
    pub text: String,
    /// Baseline anchor; text is centered on it along the reading direction.
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    /// Clockwise rotation in degrees around the anchor (-90 for Y labels).
    pub rotation_deg: f64,
    pub active: bool,
    pub color: Color,
}

/// Average glyph advance relative to font size for label hit boxes.
const GLYPH_WIDTH_RATIO: f64 = 0.6;

impl AxisLabelPrimitive {
    #[must_use]
    pub fn estimated_text_width(&self) -> f64 {
        self.text.chars().count() as f64 * self.font_size_px * GLYPH_WIDTH_RATIO
    }

    #[must_use]
    pub fn hit_box(&self) -> HitBox {
        let half_width = self.estimated_text_width() / 2.0;
        if self.rotation_deg.rem_euclid(180.0) == 90.0 {
            HitBox {
                left: self.x - self.font_size_px,
                top: self.y - half_width,
                right: self.x,
                bottom: self.y + half_width,
            }
        } else {
            HitBox {
                left: self.x - half_width,
                top: self.y - self.font_size_px,
                right: self.x + half_width,
                bottom: self.y,
            }
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.text.is_empty() {
            return Err(ChartError::InvalidData(
                "axis label must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() || !self.rotation_deg.is_finite() {
            return Err(ChartError::InvalidData(
                "axis label geometry must be finite".to_owned(),
            ));
        }
        validate_font_size(self.font_size_px)?;
        self.color.validate()
    }
}

/// Bubble for one record: a circle with a centered abbreviation.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerPrimitive {
    pub index: usize,
    pub center_x: f64,
    pub center_y: f64,
    pub radius: f64,
    pub fill: Color,
    pub opacity: f64,
    pub text: Option<String>,
    pub text_color: Color,
    pub font_size_px: f64,
}

impl MarkerPrimitive {
    #[must_use]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        let dx = x - self.center_x;
        let dy = y - self.center_y;
        dx * dx + dy * dy <= self.radius * self.radius
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.center_x.is_finite() || !self.center_y.is_finite() {
            return Err(ChartError::InvalidData(
                "marker center must be finite".to_owned(),
            ));
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(ChartError::InvalidData(
                "marker radius must be finite and > 0".to_owned(),
            ));
        }
        validate_opacity(self.opacity)?;
        validate_font_size(self.font_size_px)?;
        self.fill.validate()?;
        self.text_color.validate()
    }
}

/// Hover text bound to one marker.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipPrimitive {
    pub marker_index: usize,
    pub title: String,
    pub lines: Vec<String>,
    pub anchor_x: f64,
    pub anchor_y: f64,
    pub visible: bool,
}

impl TooltipPrimitive {
    /// Title and lines joined the way a plain-text tooltip shows them.
    #[must_use]
    pub fn text(&self) -> String {
        let mut text = self.title.clone();
        for line in &self.lines {
            text.push('\n');
            text.push_str(line);
        }
        text
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.anchor_x.is_finite() || !self.anchor_y.is_finite() {
            return Err(ChartError::InvalidData(
                "tooltip anchor must be finite".to_owned(),
            ));
        }
        Ok(())
    }
}

fn validate_opacity(opacity: f64) -> ChartResult<()> {
    if !opacity.is_finite() || !(0.0..=1.0).contains(&opacity) {
        return Err(ChartError::InvalidData(
            "opacity must be finite and in [0, 1]".to_owned(),
        ));
    }
    Ok(())
}

fn validate_font_size(font_size_px: f64) -> ChartResult<()> {
    if !font_size_px.is_finite() || font_size_px <= 0.0 {
        return Err(ChartError::InvalidData(
            "font size must be finite and > 0".to_owned(),
        ));
    }
    Ok(())
}
