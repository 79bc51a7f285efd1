use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{AxisDefinition, ChartLayout, DataSet, Dimension, LinearScale, Margins};
use crate::error::{ChartError, ChartResult};

use super::ChartConfig;

/// Lifecycle of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartPhase {
    /// Axes may be registered; nothing has been drawn yet.
    Uninitialized,
    /// At least one frame was drawn; state changes redraw in place.
    Rendered,
}

/// Outcome of an axis selection request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionChange {
    /// The requested axis was already active.
    Unchanged { dimension: Dimension, index: usize },
    Changed {
        dimension: Dimension,
        previous: usize,
        current: usize,
    },
}

impl SelectionChange {
    #[must_use]
    pub fn is_changed(self) -> bool {
        matches!(self, Self::Changed { .. })
    }

    #[must_use]
    pub fn dimension(self) -> Dimension {
        match self {
            Self::Unchanged { dimension, .. } | Self::Changed { dimension, .. } => dimension,
        }
    }
}

/// Registered axes, active selection and derived layout of one chart.
///
/// Layout is always recomputed from the container width and the number of
/// registered axes, never adjusted incrementally.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartState {
    x_axes: Vec<AxisDefinition>,
    y_axes: Vec<AxisDefinition>,
    selected_x: usize,
    selected_y: usize,
    container_width: f64,
    aspect_ratio: f64,
    base_margins: Margins,
    axis_label_offset_px: f64,
    layout: ChartLayout,
    phase: ChartPhase,
}

impl ChartState {
    pub fn new(config: &ChartConfig) -> ChartResult<Self> {
        config.validate()?;
        let layout = derive_layout(
            config.container_width,
            config.aspect_ratio,
            config.base_margins,
            config.axis_label_offset_px,
            0,
            0,
        )?;
        Ok(Self {
            x_axes: Vec::new(),
            y_axes: Vec::new(),
            selected_x: 0,
            selected_y: 0,
            container_width: config.container_width,
            aspect_ratio: config.aspect_ratio,
            base_margins: config.base_margins,
            axis_label_offset_px: config.axis_label_offset_px,
            layout,
            phase: ChartPhase::Uninitialized,
        })
    }

    #[must_use]
    pub fn phase(&self) -> ChartPhase {
        self.phase
    }

    pub(crate) fn mark_rendered(&mut self) {
        self.phase = ChartPhase::Rendered;
    }

    #[must_use]
    pub fn layout(&self) -> ChartLayout {
        self.layout
    }

    #[must_use]
    pub fn margins(&self) -> Margins {
        self.layout.margins
    }

    #[must_use]
    pub fn container_width(&self) -> f64 {
        self.container_width
    }

    #[must_use]
    pub fn axis_label_offset_px(&self) -> f64 {
        self.axis_label_offset_px
    }

    #[must_use]
    pub fn axes(&self, dimension: Dimension) -> &[AxisDefinition] {
        match dimension {
            Dimension::X => &self.x_axes,
            Dimension::Y => &self.y_axes,
        }
    }

    #[must_use]
    pub fn axis_count(&self, dimension: Dimension) -> usize {
        self.axes(dimension).len()
    }

    #[must_use]
    pub fn selected_index(&self, dimension: Dimension) -> usize {
        match dimension {
            Dimension::X => self.selected_x,
            Dimension::Y => self.selected_y,
        }
    }

    pub fn add_axis_x(&mut self, axis: AxisDefinition) -> ChartResult<()> {
        self.add_axis(Dimension::X, axis)
    }

    pub fn add_axis_y(&mut self, axis: AxisDefinition) -> ChartResult<()> {
        self.add_axis(Dimension::Y, axis)
    }

    /// Appends a selectable axis and reserves label space for it.
    ///
    /// Fails without modifying the state when the extra margin would leave no
    /// plot area.
    pub fn add_axis(&mut self, dimension: Dimension, axis: AxisDefinition) -> ChartResult<()> {
        axis.validate()?;
        let (x_count, y_count) = match dimension {
            Dimension::X => (self.x_axes.len() + 1, self.y_axes.len()),
            Dimension::Y => (self.x_axes.len(), self.y_axes.len() + 1),
        };
        let layout = derive_layout(
            self.container_width,
            self.aspect_ratio,
            self.base_margins,
            self.axis_label_offset_px,
            x_count,
            y_count,
        )?;

        debug!(
            %dimension,
            column = axis.column_key(),
            label = axis.label(),
            "register axis"
        );
        match dimension {
            Dimension::X => self.x_axes.push(axis),
            Dimension::Y => self.y_axes.push(axis),
        }
        self.layout = layout;
        Ok(())
    }

    /// Makes `index` the active axis of `dimension`.
    ///
    /// Out-of-range indices fail with `ChartError::Selection` and leave the
    /// state untouched.
    pub fn select_axis(
        &mut self,
        dimension: Dimension,
        index: usize,
    ) -> ChartResult<SelectionChange> {
        let len = self.axis_count(dimension);
        if index >= len {
            return Err(ChartError::Selection {
                dimension,
                index,
                len,
            });
        }

        let previous = self.selected_index(dimension);
        if previous == index {
            return Ok(SelectionChange::Unchanged { dimension, index });
        }

        match dimension {
            Dimension::X => self.selected_x = index,
            Dimension::Y => self.selected_y = index,
        }
        debug!(%dimension, previous, current = index, "select axis");
        Ok(SelectionChange::Changed {
            dimension,
            previous,
            current: index,
        })
    }

    /// Active axis of `dimension`; fails when none is registered.
    pub fn selected_axis(&self, dimension: Dimension) -> ChartResult<&AxisDefinition> {
        self.axes(dimension)
            .get(self.selected_index(dimension))
            .ok_or_else(|| {
                ChartError::Configuration(format!("no {dimension} axis has been registered"))
            })
    }

    /// Recomputes height and margins for a new container width.
    pub fn reset_dimensions(&mut self, container_width: f64) -> ChartResult<()> {
        let layout = derive_layout(
            container_width,
            self.aspect_ratio,
            self.base_margins,
            self.axis_label_offset_px,
            self.x_axes.len(),
            self.y_axes.len(),
        )?;
        debug!(
            container_width,
            height = layout.height,
            "reset chart dimensions"
        );
        self.container_width = container_width;
        self.layout = layout;
        Ok(())
    }

    /// Fails unless both dimensions have at least one registered axis.
    pub fn ensure_renderable(&self) -> ChartResult<()> {
        for dimension in Dimension::ALL {
            if self.axis_count(dimension) == 0 {
                return Err(ChartError::Configuration(format!(
                    "at least one {dimension} axis is required before rendering"
                )));
            }
        }
        Ok(())
    }

    /// Scale of the active axis of `dimension` over the current plot area.
    ///
    /// X maps onto `[0, plot_width]`, Y onto `[plot_height, 0]` so larger
    /// values sit higher.
    pub fn scale(&self, dimension: Dimension, data: &DataSet) -> ChartResult<LinearScale> {
        let domain = self.selected_axis(dimension)?.compute_domain(data)?;
        let (lower, upper) = domain.scale_domain();
        let scale = LinearScale::new(lower, upper)?;
        match dimension {
            Dimension::X => scale.with_range(0.0, self.layout.plot_width),
            Dimension::Y => scale.with_range(self.layout.plot_height, 0.0),
        }
    }
}

fn derive_layout(
    container_width: f64,
    aspect_ratio: f64,
    base_margins: Margins,
    axis_label_offset_px: f64,
    x_axis_count: usize,
    y_axis_count: usize,
) -> ChartResult<ChartLayout> {
    let per_axis = axis_label_offset_px / 2.0;
    let margins = Margins {
        bottom: base_margins.bottom + x_axis_count as f64 * per_axis,
        left: base_margins.left + y_axis_count as f64 * per_axis,
        ..base_margins
    };
    ChartLayout::from_width(container_width, aspect_ratio, margins)
}
