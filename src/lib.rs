//! bubble-chart: interactive multi-axis bubble scatter chart.
//!
//! Records are projected onto an X/Y plane whose axes can each be switched
//! between several numeric columns. Drawing is delegated to a `Renderer`
//! backend through backend-agnostic frames; switching axes animates both the
//! axis ticks and the markers on a host-driven clock.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{BubbleChart, ChartConfig};
pub use error::{ChartError, ChartResult};
