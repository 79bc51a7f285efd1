use serde::{Deserialize, Serialize};

use crate::core::Margins;
use crate::core::census;
use crate::error::{ChartError, ChartResult};

use super::Easing;

/// Public chart bootstrap configuration.
///
/// Serializable so hosts can keep chart setup next to their data files
/// instead of hard-coding it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Initial container width in pixels.
    #[serde(default = "default_container_width")]
    pub container_width: f64,
    /// Chart height as a fraction of its width.
    #[serde(default = "default_aspect_ratio")]
    pub aspect_ratio: f64,
    /// Margins before any axis label is registered.
    #[serde(default)]
    pub base_margins: Margins,
    /// Vertical spacing between stacked axis labels; each registered axis
    /// grows its side's margin by half of it.
    #[serde(default = "default_axis_label_offset_px")]
    pub axis_label_offset_px: f64,
    #[serde(default = "default_label_font_size_px")]
    pub label_font_size_px: f64,
    #[serde(default = "default_tick_font_size_px")]
    pub tick_font_size_px: f64,
    /// Approximate number of ticks per axis.
    #[serde(default = "default_tick_count")]
    pub tick_count: usize,
    /// Marker radius as a fraction of the chart height.
    #[serde(default = "default_marker_radius_ratio")]
    pub marker_radius_ratio: f64,
    #[serde(default = "default_marker_opacity")]
    pub marker_opacity: f64,
    #[serde(default = "default_transition_duration_ms")]
    pub transition_duration_ms: f64,
    #[serde(default = "default_resize_debounce_ms")]
    pub resize_debounce_ms: f64,
    #[serde(default)]
    pub easing: Easing,
    /// Column used as the tooltip title.
    #[serde(default = "default_record_label_column")]
    pub record_label_column: String,
    /// Column drawn inside each marker.
    #[serde(default = "default_marker_text_column")]
    pub marker_text_column: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            container_width: default_container_width(),
            aspect_ratio: default_aspect_ratio(),
            base_margins: Margins::default(),
            axis_label_offset_px: default_axis_label_offset_px(),
            label_font_size_px: default_label_font_size_px(),
            tick_font_size_px: default_tick_font_size_px(),
            tick_count: default_tick_count(),
            marker_radius_ratio: default_marker_radius_ratio(),
            marker_opacity: default_marker_opacity(),
            transition_duration_ms: default_transition_duration_ms(),
            resize_debounce_ms: default_resize_debounce_ms(),
            easing: Easing::default(),
            record_label_column: default_record_label_column(),
            marker_text_column: default_marker_text_column(),
        }
    }
}

impl ChartConfig {
    /// Default configuration for a container of `container_width` pixels.
    #[must_use]
    pub fn new(container_width: f64) -> Self {
        Self {
            container_width,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_aspect_ratio(mut self, aspect_ratio: f64) -> Self {
        self.aspect_ratio = aspect_ratio;
        self
    }

    #[must_use]
    pub fn with_base_margins(mut self, margins: Margins) -> Self {
        self.base_margins = margins;
        self
    }

    #[must_use]
    pub fn with_axis_label_offset_px(mut self, offset_px: f64) -> Self {
        self.axis_label_offset_px = offset_px;
        self
    }

    #[must_use]
    pub fn with_transition_duration_ms(mut self, duration_ms: f64) -> Self {
        self.transition_duration_ms = duration_ms;
        self
    }

    #[must_use]
    pub fn with_resize_debounce_ms(mut self, debounce_ms: f64) -> Self {
        self.resize_debounce_ms = debounce_ms;
        self
    }

    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    #[must_use]
    pub fn with_record_columns(
        mut self,
        record_label_column: impl Into<String>,
        marker_text_column: impl Into<String>,
    ) -> Self {
        self.record_label_column = record_label_column.into();
        self.marker_text_column = marker_text_column.into();
        self
    }

    pub fn from_json_str(raw: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(raw)
            .map_err(|err| ChartError::Configuration(format!("invalid chart config: {err}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_string(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|err| ChartError::Configuration(format!("cannot encode chart config: {err}")))
    }

    pub fn validate(&self) -> ChartResult<()> {
        for (name, value) in [
            ("container_width", self.container_width),
            ("aspect_ratio", self.aspect_ratio),
            ("label_font_size_px", self.label_font_size_px),
            ("tick_font_size_px", self.tick_font_size_px),
            ("marker_radius_ratio", self.marker_radius_ratio),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::Configuration(format!(
                    "`{name}` must be finite and > 0"
                )));
            }
        }
        for (name, value) in [
            ("axis_label_offset_px", self.axis_label_offset_px),
            ("transition_duration_ms", self.transition_duration_ms),
            ("resize_debounce_ms", self.resize_debounce_ms),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::Configuration(format!(
                    "`{name}` must be finite and >= 0"
                )));
            }
        }
        if !self.marker_opacity.is_finite() || !(0.0..=1.0).contains(&self.marker_opacity) {
            return Err(ChartError::Configuration(
                "`marker_opacity` must be in [0, 1]".to_owned(),
            ));
        }
        if self.tick_count == 0 {
            return Err(ChartError::Configuration(
                "`tick_count` must be > 0".to_owned(),
            ));
        }
        if self.record_label_column.trim().is_empty() || self.marker_text_column.trim().is_empty()
        {
            return Err(ChartError::Configuration(
                "record label and marker text columns must not be empty".to_owned(),
            ));
        }
        self.base_margins
            .validate()
            .map_err(|err| ChartError::Configuration(err.to_string()))
    }
}

fn default_container_width() -> f64 {
    960.0
}

fn default_aspect_ratio() -> f64 {
    0.6
}

fn default_axis_label_offset_px() -> f64 {
    20.0
}

fn default_label_font_size_px() -> f64 {
    16.0
}

fn default_tick_font_size_px() -> f64 {
    10.0
}

fn default_tick_count() -> usize {
    10
}

fn default_marker_radius_ratio() -> f64 {
    1.0 / 30.0
}

fn default_marker_opacity() -> f64 {
    0.5
}

fn default_transition_duration_ms() -> f64 {
    1000.0
}

fn default_resize_debounce_ms() -> f64 {
    150.0
}

fn default_record_label_column() -> String {
    census::STATE.to_owned()
}

fn default_marker_text_column() -> String {
    census::ABBR.to_owned()
}
