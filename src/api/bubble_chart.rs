use std::sync::Arc;

use tracing::debug;

use crate::core::{ChartLayout, DataSet, Dimension, LinearScale, ScreenPoint, project_records};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{InteractionState, ResizeDebouncer};
use crate::render::{RenderFrame, Renderer};

use super::frame_builder::{FrameInputs, build_frame};
use super::{ActiveTransitions, ChartConfig, ChartPhase, ChartState, MarkerTransition};

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

/// Interactive bubble chart bound to one renderer and one data set.
///
/// `BubbleChart` owns the selection/layout state, the in-flight transitions
/// and the chart clock. The host forwards pointer events and calls
/// [`BubbleChart::tick`] from its frame loop; every visual change is pushed
/// to the renderer as a complete [`RenderFrame`].
pub struct BubbleChart<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: ChartConfig,
    pub(super) state: ChartState,
    pub(super) data: Arc<DataSet>,
    pub(super) interaction: InteractionState,
    pub(super) transitions: ActiveTransitions,
    pub(super) debouncer: ResizeDebouncer,
    pub(super) clock_ms: f64,
    pub(super) x_scale: Option<LinearScale>,
    pub(super) y_scale: Option<LinearScale>,
    pub(super) marker_targets: Vec<ScreenPoint>,
    pub(super) last_frame: Option<RenderFrame>,
}

impl<R: Renderer> BubbleChart<R> {
    pub fn new(
        renderer: R,
        config: ChartConfig,
        data: impl Into<Arc<DataSet>>,
    ) -> ChartResult<Self> {
        let state = ChartState::new(&config)?;
        let debouncer = ResizeDebouncer::new(config.resize_debounce_ms)?;
        let data = data.into();
        debug!(
            records = data.len(),
            container_width = config.container_width,
            "create bubble chart"
        );
        Ok(Self {
            renderer,
            config,
            state,
            data,
            interaction: InteractionState::default(),
            transitions: ActiveTransitions::default(),
            debouncer,
            clock_ms: 0.0,
            x_scale: None,
            y_scale: None,
            marker_targets: Vec::new(),
            last_frame: None,
        })
    }

    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> &ChartState {
        &self.state
    }

    #[must_use]
    pub fn phase(&self) -> ChartPhase {
        self.state.phase()
    }

    #[must_use]
    pub fn layout(&self) -> ChartLayout {
        self.state.layout()
    }

    #[must_use]
    pub fn data(&self) -> &DataSet {
        &self.data
    }

    #[must_use]
    pub fn interaction(&self) -> InteractionState {
        self.interaction
    }

    #[must_use]
    pub fn clock_ms(&self) -> f64 {
        self.clock_ms
    }

    /// Settled scale of `dimension`, available once the chart was rendered.
    #[must_use]
    pub fn scale(&self, dimension: Dimension) -> Option<LinearScale> {
        match dimension {
            Dimension::X => self.x_scale,
            Dimension::Y => self.y_scale,
        }
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.transitions.is_active()
    }

    #[must_use]
    pub fn transitions(&self) -> &ActiveTransitions {
        &self.transitions
    }

    #[must_use]
    pub fn last_frame(&self) -> Option<&RenderFrame> {
        self.last_frame.as_ref()
    }

    /// On-screen marker centres at the current clock.
    #[must_use]
    pub fn marker_positions(&self) -> Vec<ScreenPoint> {
        match self.transitions.markers() {
            Some(transition) => transition.positions(self.clock_ms),
            None => self.marker_targets.clone(),
        }
    }

    /// Full draw of the chart from the active axes.
    ///
    /// With `animated`, markers glide from where they are shown now to the
    /// new positions; otherwise every transition is cancelled and markers
    /// snap into place.
    pub fn render(&mut self, animated: bool) -> ChartResult<()> {
        self.state.ensure_renderable()?;
        let x_scale = self.state.scale(Dimension::X, &self.data)?;
        let y_scale = self.state.scale(Dimension::Y, &self.data)?;
        let targets = self.project(x_scale, y_scale)?;
        let animate_markers = animated
            && self.phase() == ChartPhase::Rendered
            && self.marker_targets.len() == targets.len();

        self.transitions.clear();
        if animate_markers {
            let from = self.marker_positions();
            self.transitions.set_markers(MarkerTransition::new(
                from,
                targets.clone(),
                self.config.easing,
                self.clock_ms,
                self.config.transition_duration_ms,
            )?);
        }

        self.x_scale = Some(x_scale);
        self.y_scale = Some(y_scale);
        self.marker_targets = targets;
        debug!(
            animated = animate_markers,
            markers = self.marker_targets.len(),
            width = self.state.layout().width,
            height = self.state.layout().height,
            "render bubble chart"
        );
        self.draw()
    }

    /// Materializes the frame for the current clock without drawing it.
    pub fn build_frame(&self) -> ChartResult<RenderFrame> {
        let (Some(x_scale), Some(y_scale)) = (self.x_scale, self.y_scale) else {
            return Err(ChartError::Configuration(
                "chart must be rendered before a frame can be built".to_owned(),
            ));
        };
        let marker_positions = self.marker_positions();
        build_frame(&FrameInputs {
            state: &self.state,
            data: &self.data,
            config: &self.config,
            x_scale,
            y_scale,
            transitions: &self.transitions,
            marker_positions: &marker_positions,
            hovered_marker: self.interaction.hovered_marker(),
            now_ms: self.clock_ms,
        })
    }

    /// Draws the current frame into an external cairo context.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> ChartResult<()>
    where
        R: CairoContextRenderer,
    {
        let frame = self.build_frame()?;
        self.renderer.render_on_cairo_context(context, &frame)?;
        self.last_frame = Some(frame);
        Ok(())
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    pub(super) fn project(
        &self,
        x_scale: LinearScale,
        y_scale: LinearScale,
    ) -> ChartResult<Vec<ScreenPoint>> {
        let x_axis = self.state.selected_axis(Dimension::X)?;
        let y_axis = self.state.selected_axis(Dimension::Y)?;
        project_records(
            &self.data,
            x_axis.column_key(),
            y_axis.column_key(),
            x_scale,
            y_scale,
            self.state.layout(),
        )
    }

    pub(super) fn draw(&mut self) -> ChartResult<()> {
        let frame = self.build_frame()?;
        self.renderer.render(&frame)?;
        self.state.mark_rendered();
        self.last_frame = Some(frame);
        Ok(())
    }
}
