mod resize;

pub use resize::ResizeDebouncer;

use serde::{Deserialize, Serialize};

use crate::core::{Dimension, ScreenPoint};
use crate::render::RenderFrame;

/// Element found under a pointer position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HitTarget {
    AxisLabel { dimension: Dimension, index: usize },
    Marker(usize),
    Nothing,
}

/// Finds the element under `(x, y)`.
///
/// Axis labels win over markers. Among overlapping markers the one drawn
/// last (topmost) wins.
#[must_use]
pub fn hit_test(frame: &RenderFrame, x: f64, y: f64) -> HitTarget {
    if let Some(label) = frame
        .labels
        .iter()
        .find(|label| label.hit_box().contains(x, y))
    {
        return HitTarget::AxisLabel {
            dimension: label.dimension,
            index: label.index,
        };
    }
    match frame
        .markers
        .iter()
        .rev()
        .find(|marker| marker.contains(x, y))
    {
        Some(marker) => HitTarget::Marker(marker.index),
        None => HitTarget::Nothing,
    }
}

/// Pointer and hover state owned by the chart.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InteractionState {
    cursor: Option<ScreenPoint>,
    hovered_marker: Option<usize>,
}

impl InteractionState {
    #[must_use]
    pub fn cursor(self) -> Option<ScreenPoint> {
        self.cursor
    }

    #[must_use]
    pub fn hovered_marker(self) -> Option<usize> {
        self.hovered_marker
    }

    /// Records the pointer and the marker under it.
    ///
    /// Returns `true` when the hovered marker changed.
    pub fn on_pointer_move(&mut self, x: f64, y: f64, hovered_marker: Option<usize>) -> bool {
        self.cursor = Some(ScreenPoint::new(x, y));
        let changed = self.hovered_marker != hovered_marker;
        self.hovered_marker = hovered_marker;
        changed
    }

    /// Forgets the hovered marker but keeps the pointer position.
    pub fn clear_hover(&mut self) -> bool {
        self.hovered_marker.take().is_some()
    }

    /// Clears the pointer. Returns `true` when a marker was hovered.
    pub fn on_pointer_leave(&mut self) -> bool {
        self.cursor = None;
        self.hovered_marker.take().is_some()
    }
}
