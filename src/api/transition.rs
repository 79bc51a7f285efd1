use serde::{Deserialize, Serialize};

use crate::core::{Dimension, LinearScale, ScreenPoint};
use crate::error::{ChartError, ChartResult};

/// Easing curve applied to marker movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Easing {
    Linear,
    /// Slow start and end, fast middle.
    #[default]
    CubicInOut,
}

impl Easing {
    /// Maps linear progress in `[0, 1]` onto the curve.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u * u / 2.0
                }
            }
        }
    }
}

/// Fade-out/fade-in swap of one axis between two scales.
///
/// During the first half the outgoing ticks fade from `start_opacity` to 0;
/// at the midpoint the incoming ticks replace them and fade back in to 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisTransition {
    dimension: Dimension,
    outgoing: LinearScale,
    incoming: LinearScale,
    start_opacity: f64,
    started_at_ms: f64,
    duration_ms: f64,
}

impl AxisTransition {
    #[must_use]
    pub fn new(
        dimension: Dimension,
        outgoing: LinearScale,
        incoming: LinearScale,
        start_opacity: f64,
        started_at_ms: f64,
        duration_ms: f64,
    ) -> Self {
        Self {
            dimension,
            outgoing,
            incoming,
            start_opacity: start_opacity.clamp(0.0, 1.0),
            started_at_ms,
            duration_ms: duration_ms.max(0.0),
        }
    }

    #[must_use]
    pub fn dimension(self) -> Dimension {
        self.dimension
    }

    #[must_use]
    pub fn incoming(self) -> LinearScale {
        self.incoming
    }

    #[must_use]
    pub fn is_finished(self, now_ms: f64) -> bool {
        self.elapsed(now_ms) >= self.duration_ms
    }

    /// Scale whose ticks are on screen at `now_ms`.
    #[must_use]
    pub fn displayed_scale(self, now_ms: f64) -> LinearScale {
        if self.elapsed(now_ms) < self.half() {
            self.outgoing
        } else {
            self.incoming
        }
    }

    #[must_use]
    pub fn opacity(self, now_ms: f64) -> f64 {
        let half = self.half();
        if half <= 0.0 {
            return 1.0;
        }
        let elapsed = self.elapsed(now_ms);
        if elapsed < half {
            self.start_opacity * (1.0 - elapsed / half)
        } else {
            ((elapsed - half) / half).min(1.0)
        }
    }

    fn half(self) -> f64 {
        self.duration_ms / 2.0
    }

    fn elapsed(self, now_ms: f64) -> f64 {
        (now_ms - self.started_at_ms).max(0.0)
    }
}

/// Concurrent move of every marker from one set of positions to another.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerTransition {
    from: Vec<ScreenPoint>,
    to: Vec<ScreenPoint>,
    easing: Easing,
    started_at_ms: f64,
    duration_ms: f64,
}

impl MarkerTransition {
    pub fn new(
        from: Vec<ScreenPoint>,
        to: Vec<ScreenPoint>,
        easing: Easing,
        started_at_ms: f64,
        duration_ms: f64,
    ) -> ChartResult<Self> {
        if from.len() != to.len() {
            return Err(ChartError::InvalidData(format!(
                "marker transition needs matching position counts, got {} and {}",
                from.len(),
                to.len()
            )));
        }
        Ok(Self {
            from,
            to,
            easing,
            started_at_ms,
            duration_ms: duration_ms.max(0.0),
        })
    }

    #[must_use]
    pub fn is_finished(&self, now_ms: f64) -> bool {
        now_ms - self.started_at_ms >= self.duration_ms
    }

    /// Eased progress in `[0, 1]`.
    #[must_use]
    pub fn progress(&self, now_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        let linear = (now_ms - self.started_at_ms) / self.duration_ms;
        self.easing.apply(linear)
    }

    #[must_use]
    pub fn positions(&self, now_ms: f64) -> Vec<ScreenPoint> {
        let t = self.progress(now_ms);
        self.from
            .iter()
            .zip(&self.to)
            .map(|(from, to)| from.lerp(*to, t))
            .collect()
    }
}

/// Transitions currently in flight.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ActiveTransitions {
    x_axis: Option<AxisTransition>,
    y_axis: Option<AxisTransition>,
    markers: Option<MarkerTransition>,
}

impl ActiveTransitions {
    #[must_use]
    pub fn axis(&self, dimension: Dimension) -> Option<AxisTransition> {
        match dimension {
            Dimension::X => self.x_axis,
            Dimension::Y => self.y_axis,
        }
    }

    #[must_use]
    pub fn markers(&self) -> Option<&MarkerTransition> {
        self.markers.as_ref()
    }

    pub fn set_axis(&mut self, transition: AxisTransition) {
        match transition.dimension() {
            Dimension::X => self.x_axis = Some(transition),
            Dimension::Y => self.y_axis = Some(transition),
        }
    }

    pub fn set_markers(&mut self, transition: MarkerTransition) {
        self.markers = Some(transition);
    }

    pub fn clear_axis(&mut self, dimension: Dimension) {
        match dimension {
            Dimension::X => self.x_axis = None,
            Dimension::Y => self.y_axis = None,
        }
    }

    pub fn clear_markers(&mut self) {
        self.markers = None;
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.x_axis.is_some() || self.y_axis.is_some() || self.markers.is_some()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Drops transitions that completed by `now_ms`. Returns `true` if any did.
    pub fn retire_finished(&mut self, now_ms: f64) -> bool {
        let mut retired = false;
        for slot in [&mut self.x_axis, &mut self.y_axis] {
            if slot.is_some_and(|transition| transition.is_finished(now_ms)) {
                *slot = None;
                retired = true;
            }
        }
        if self
            .markers
            .as_ref()
            .is_some_and(|transition| transition.is_finished(now_ms))
        {
            self.markers = None;
            retired = true;
        }
        retired
    }
}
