use tracing::{debug, warn};

use crate::core::{AxisDefinition, Dimension};
use crate::error::ChartResult;
use crate::render::Renderer;

use super::{AxisTransition, BubbleChart, ChartPhase, MarkerTransition, SelectionChange};

impl<R: Renderer> BubbleChart<R> {
    pub fn add_axis_x(&mut self, axis: AxisDefinition) -> ChartResult<()> {
        self.add_axis(Dimension::X, axis)
    }

    pub fn add_axis_y(&mut self, axis: AxisDefinition) -> ChartResult<()> {
        self.add_axis(Dimension::Y, axis)
    }

    /// Registers a selectable axis after checking its column holds a number
    /// in every record.
    pub fn add_axis(&mut self, dimension: Dimension, axis: AxisDefinition) -> ChartResult<()> {
        self.data.require_column(axis.column_key())?;
        self.data.numeric_column(axis.column_key())?;
        self.state.add_axis(dimension, axis)
    }

    pub fn selected_axis(&self, dimension: Dimension) -> ChartResult<&AxisDefinition> {
        self.state.selected_axis(dimension)
    }

    /// Activates axis `index` of `dimension`.
    ///
    /// Once the chart is on screen a change animates the axis and every
    /// marker; selecting the active axis again does nothing. When the redraw
    /// fails the previous axis stays active.
    pub fn select_axis(
        &mut self,
        dimension: Dimension,
        index: usize,
    ) -> ChartResult<SelectionChange> {
        let change = self.state.select_axis(dimension, index)?;
        let SelectionChange::Changed { previous, .. } = change else {
            return Ok(change);
        };
        if self.phase() != ChartPhase::Rendered {
            return Ok(change);
        }
        if let Err(err) = self.update_axis(dimension, true) {
            warn!(%dimension, index, error = %err, "axis selection rolled back");
            self.state.select_axis(dimension, previous)?;
            return Err(err);
        }
        Ok(change)
    }

    /// Recomputes the scale of `dimension` from its active axis and redraws.
    ///
    /// An animated update supersedes whatever transition is in flight: the
    /// axis fades out from the opacity and ticks shown now, and markers
    /// start from their interpolated positions. The other dimension's axis
    /// keeps animating.
    pub fn update_axis(&mut self, dimension: Dimension, animated: bool) -> ChartResult<()> {
        if self.phase() == ChartPhase::Uninitialized {
            return self.render(false);
        }

        let incoming = self.state.scale(dimension, &self.data)?;
        let (x_scale, y_scale) = match dimension {
            Dimension::X => (Some(incoming), self.y_scale),
            Dimension::Y => (self.x_scale, Some(incoming)),
        };
        let (Some(x_scale), Some(y_scale)) = (x_scale, y_scale) else {
            return self.render(false);
        };
        let targets = self.project(x_scale, y_scale)?;

        if animated {
            let (outgoing, start_opacity) = match self.transitions.axis(dimension) {
                Some(current) => (
                    current.displayed_scale(self.clock_ms),
                    current.opacity(self.clock_ms),
                ),
                None => (self.scale(dimension).unwrap_or(incoming), 1.0),
            };
            let duration_ms = self.config.transition_duration_ms;
            let from = self.marker_positions();
            self.transitions.set_axis(AxisTransition::new(
                dimension,
                outgoing,
                incoming,
                start_opacity,
                self.clock_ms,
                duration_ms,
            ));
            self.transitions.set_markers(MarkerTransition::new(
                from,
                targets.clone(),
                self.config.easing,
                self.clock_ms,
                duration_ms,
            )?);
        } else {
            self.transitions.clear_axis(dimension);
            self.transitions.clear_markers();
        }

        match dimension {
            Dimension::X => self.x_scale = Some(incoming),
            Dimension::Y => self.y_scale = Some(incoming),
        }
        self.marker_targets = targets;
        debug!(
            %dimension,
            animated,
            domain_start = incoming.domain().0,
            domain_end = incoming.domain().1,
            "update axis"
        );
        self.draw()
    }
}
