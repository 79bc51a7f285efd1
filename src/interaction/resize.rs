use crate::error::{ChartError, ChartResult};

#[derive(Debug, Clone, Copy, PartialEq)]
struct PendingResize {
    width: f64,
    requested_at_ms: f64,
}

/// Trailing-edge debounce for container resize events.
///
/// Every request restarts the quiet period; only the last width of a burst
/// is released, once no request arrived for `quiet_period_ms`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeDebouncer {
    quiet_period_ms: f64,
    pending: Option<PendingResize>,
}

impl ResizeDebouncer {
    pub fn new(quiet_period_ms: f64) -> ChartResult<Self> {
        if !quiet_period_ms.is_finite() || quiet_period_ms < 0.0 {
            return Err(ChartError::InvalidData(
                "resize debounce period must be finite and >= 0".to_owned(),
            ));
        }
        Ok(Self {
            quiet_period_ms,
            pending: None,
        })
    }

    #[must_use]
    pub fn quiet_period_ms(self) -> f64 {
        self.quiet_period_ms
    }

    #[must_use]
    pub fn is_pending(self) -> bool {
        self.pending.is_some()
    }

    #[must_use]
    pub fn pending_width(self) -> Option<f64> {
        self.pending.map(|pending| pending.width)
    }

    pub fn request(&mut self, width: f64, now_ms: f64) {
        self.pending = Some(PendingResize {
            width,
            requested_at_ms: now_ms,
        });
    }

    /// Releases the pending width once its quiet period has elapsed.
    pub fn poll(&mut self, now_ms: f64) -> Option<f64> {
        let pending = self.pending?;
        if now_ms - pending.requested_at_ms >= self.quiet_period_ms {
            self.pending = None;
            Some(pending.width)
        } else {
            None
        }
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }
}
