//! Public chart API: configuration, selection state, transitions and the
//! renderer-driving `BubbleChart`.

mod axis_controller;
mod bubble_chart;
mod chart_config;
mod chart_state;
mod frame_builder;
mod interaction_controller;
mod transition;

pub use bubble_chart::BubbleChart;
pub use chart_config::ChartConfig;
pub use chart_state::{ChartPhase, ChartState, SelectionChange};
pub use transition::{ActiveTransitions, AxisTransition, Easing, MarkerTransition};
