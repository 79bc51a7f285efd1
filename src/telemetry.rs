//! Tracing setup for hosts embedding `bubble-chart`.
//!
//! The chart emits `tracing` events for data loads, axis selection, resizes
//! and renders. Installing a subscriber stays the host's decision: call
//! [`init_default_tracing`] or [`init_tracing_with_filter`], or wire your own.

/// Installs a compact fmt subscriber filtered by `RUST_LOG` (default `info`).
///
/// Returns `false` when the `telemetry` feature is disabled or a global
/// subscriber is already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
        return install(filter);
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}

/// Installs a compact fmt subscriber with an explicit filter directive such
/// as `"bubble_chart=debug"`.
///
/// Returns `false` when the directive is invalid, the `telemetry` feature is
/// disabled, or a global subscriber is already installed.
#[must_use]
pub fn init_tracing_with_filter(directive: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        return match tracing_subscriber::EnvFilter::try_new(directive) {
            Ok(filter) => install(filter),
            Err(_) => false,
        };
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = directive;
        false
    }
}

#[cfg(feature = "telemetry")]
fn install(filter: tracing_subscriber::EnvFilter) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .compact()
        .try_init()
        .is_ok()
}
