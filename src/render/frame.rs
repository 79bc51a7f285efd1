use crate::core::{Dimension, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::{AxisLabelPrimitive, AxisPrimitive, MarkerPrimitive, TooltipPrimitive};

/// Backend-agnostic scene for one chart draw pass.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub axes: Vec<AxisPrimitive>,
    pub labels: Vec<AxisLabelPrimitive>,
    pub markers: Vec<MarkerPrimitive>,
    pub tooltips: Vec<TooltipPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            axes: Vec::new(),
            labels: Vec::new(),
            markers: Vec::new(),
            tooltips: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_axis(mut self, axis: AxisPrimitive) -> Self {
        self.axes.push(axis);
        self
    }

    #[must_use]
    pub fn with_label(mut self, label: AxisLabelPrimitive) -> Self {
        self.labels.push(label);
        self
    }

    #[must_use]
    pub fn with_marker(mut self, marker: MarkerPrimitive) -> Self {
        self.markers.push(marker);
        self
    }

    #[must_use]
    pub fn with_tooltip(mut self, tooltip: TooltipPrimitive) -> Self {
        self.tooltips.push(tooltip);
        self
    }

    #[must_use]
    pub fn axis(&self, dimension: Dimension) -> Option<&AxisPrimitive> {
        self.axes.iter().find(|axis| axis.dimension == dimension)
    }

    pub fn labels_for(&self, dimension: Dimension) -> impl Iterator<Item = &AxisLabelPrimitive> {
        self.labels
            .iter()
            .filter(move |label| label.dimension == dimension)
    }

    #[must_use]
    pub fn active_label(&self, dimension: Dimension) -> Option<&AxisLabelPrimitive> {
        self.labels_for(dimension).find(|label| label.active)
    }

    #[must_use]
    pub fn visible_tooltip(&self) -> Option<&TooltipPrimitive> {
        self.tooltips.iter().find(|tooltip| tooltip.visible)
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for axis in &self.axes {
            axis.validate()?;
        }
        for label in &self.labels {
            label.validate()?;
        }
        for marker in &self.markers {
            marker.validate()?;
        }
        for tooltip in &self.tooltips {
            tooltip.validate()?;
            if tooltip.marker_index >= self.markers.len() {
                return Err(ChartError::InvalidData(format!(
                    "tooltip references missing marker {}",
                    tooltip.marker_index
                )));
            }
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.axes.is_empty()
            && self.labels.is_empty()
            && self.markers.is_empty()
            && self.tooltips.is_empty()
    }
}
