use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Integer pixel size of a drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Point in surface pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Linear interpolation toward `target` with `t` in `[0, 1]`.
    #[must_use]
    pub fn lerp(self, target: Self, t: f64) -> Self {
        Self {
            x: self.x + (target.x - self.x) * t,
            y: self.y + (target.y - self.y) * t,
        }
    }
}

/// Space reserved around the plot area for axes and axis labels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margins {
    #[must_use]
    pub const fn uniform(value: f64) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        for (side, value) in [
            ("top", self.top),
            ("right", self.right),
            ("bottom", self.bottom),
            ("left", self.left),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "margin `{side}` must be finite and >= 0"
                )));
            }
        }
        Ok(())
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self::uniform(60.0)
    }
}

/// Resolved chart geometry for one container width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartLayout {
    pub width: f64,
    pub height: f64,
    pub margins: Margins,
    pub plot_width: f64,
    pub plot_height: f64,
}

impl ChartLayout {
    /// Builds a layout whose height follows `width * aspect_ratio`.
    pub fn from_width(width: f64, aspect_ratio: f64, margins: Margins) -> ChartResult<Self> {
        if !width.is_finite() || width <= 0.0 {
            return Err(ChartError::InvalidData(
                "container width must be finite and > 0".to_owned(),
            ));
        }
        if !aspect_ratio.is_finite() || aspect_ratio <= 0.0 {
            return Err(ChartError::InvalidData(
                "aspect ratio must be finite and > 0".to_owned(),
            ));
        }
        margins.validate()?;

        let height = width * aspect_ratio;
        let plot_width = width - margins.left - margins.right;
        let plot_height = height - margins.top - margins.bottom;
        if plot_width <= 0.0 || plot_height <= 0.0 {
            return Err(ChartError::InvalidViewport {
                width: width.round() as u32,
                height: height.round() as u32,
            });
        }

        Ok(Self {
            width,
            height,
            margins,
            plot_width,
            plot_height,
        })
    }

    /// Surface size rounded up to whole pixels.
    #[must_use]
    pub fn viewport(self) -> Viewport {
        Viewport::new(self.width.ceil() as u32, self.height.ceil() as u32)
    }

    /// Left edge of the plot area.
    #[must_use]
    pub fn plot_left(self) -> f64 {
        self.margins.left
    }

    #[must_use]
    pub fn plot_top(self) -> f64 {
        self.margins.top
    }

    #[must_use]
    pub fn plot_bottom(self) -> f64 {
        self.margins.top + self.plot_height
    }

    /// Converts a plot-local point into surface coordinates.
    #[must_use]
    pub fn to_surface(self, local: ScreenPoint) -> ScreenPoint {
        ScreenPoint::new(local.x + self.margins.left, local.y + self.margins.top)
    }
}
