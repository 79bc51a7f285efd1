use tracing::{debug, trace, warn};

use crate::error::{ChartError, ChartResult};
use crate::interaction::{HitTarget, hit_test};
use crate::render::Renderer;

use super::{BubbleChart, ChartPhase, SelectionChange};

impl<R: Renderer> BubbleChart<R> {
    /// Tracks the pointer and redraws when the hovered marker changes.
    ///
    /// Returns `true` when a frame was drawn.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> ChartResult<bool> {
        let hovered = match self.last_frame.as_ref().map(|frame| hit_test(frame, x, y)) {
            Some(HitTarget::Marker(index)) => Some(index),
            _ => None,
        };
        if !self.interaction.on_pointer_move(x, y, hovered) {
            return Ok(false);
        }
        trace!(x, y, hovered = ?hovered, "hover marker");
        self.redraw_if_rendered()
    }

    pub fn pointer_leave(&mut self) -> ChartResult<bool> {
        if !self.interaction.on_pointer_leave() {
            return Ok(false);
        }
        trace!("pointer left chart");
        self.redraw_if_rendered()
    }

    /// Selects the axis whose label is under `(x, y)`, if any.
    pub fn click(&mut self, x: f64, y: f64) -> ChartResult<Option<SelectionChange>> {
        let target = self
            .last_frame
            .as_ref()
            .map_or(HitTarget::Nothing, |frame| hit_test(frame, x, y));
        match target {
            HitTarget::AxisLabel { dimension, index } => {
                self.select_axis(dimension, index).map(Some)
            }
            HitTarget::Marker(_) | HitTarget::Nothing => Ok(None),
        }
    }

    /// Relayouts for `container_width` immediately, snapping any animation.
    ///
    /// Markers move under a resting pointer, so the hover is recomputed
    /// against the new frame. When the redraw fails the previous width is
    /// kept.
    pub fn reset_dimensions(&mut self, container_width: f64) -> ChartResult<()> {
        let previous_width = self.state.container_width();
        let previous_interaction = self.interaction;
        self.state.reset_dimensions(container_width)?;
        self.debouncer.cancel();
        self.interaction.clear_hover();
        if self.phase() != ChartPhase::Rendered {
            return Ok(());
        }
        if let Err(err) = self.render(false) {
            warn!(container_width, error = %err, "resize rolled back");
            self.state.reset_dimensions(previous_width)?;
            self.interaction = previous_interaction;
            return Err(err);
        }
        if let Some(cursor) = self.interaction.cursor() {
            self.pointer_move(cursor.x, cursor.y)?;
        }
        Ok(())
    }

    /// Queues a resize; `tick` applies the last queued width once no new
    /// request arrived for the configured quiet period.
    pub fn request_resize(&mut self, container_width: f64) -> ChartResult<()> {
        if !container_width.is_finite() || container_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "container width must be finite and > 0".to_owned(),
            ));
        }
        trace!(container_width, at_ms = self.clock_ms, "queue resize");
        self.debouncer.request(container_width, self.clock_ms);
        Ok(())
    }

    /// Advances the chart clock to `now_ms`.
    ///
    /// Applies a due resize, moves transitions forward and retires finished
    /// ones. Timestamps earlier than the current clock are ignored. Returns
    /// `true` when a frame was drawn.
    pub fn tick(&mut self, now_ms: f64) -> ChartResult<bool> {
        if !now_ms.is_finite() || now_ms < self.clock_ms {
            trace!(now_ms, clock_ms = self.clock_ms, "ignore stale tick");
            return Ok(false);
        }
        self.clock_ms = now_ms;

        if let Some(width) = self.debouncer.poll(now_ms) {
            debug!(width, "apply debounced resize");
            self.reset_dimensions(width)?;
            return Ok(self.phase() == ChartPhase::Rendered);
        }

        if !self.transitions.is_active() {
            return Ok(false);
        }
        let retired = self.transitions.retire_finished(now_ms);
        trace!(now_ms, retired, "advance transitions");
        self.redraw_if_rendered()
    }

    fn redraw_if_rendered(&mut self) -> ChartResult<bool> {
        if self.phase() != ChartPhase::Rendered {
            return Ok(false);
        }
        self.draw()?;
        Ok(true)
    }
}
