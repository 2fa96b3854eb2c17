//! Soft tick-rate limiter.
//!
//! The driver calls [`TickLimiter::tick`] as fast as it likes; ticks whose
//! elapsed time is below the frame budget are skipped. The limiter is a gate
//! in front of the loop, not a scheduler.

#[derive(Debug, Clone, Copy)]
pub struct TickLimiter {
    period_ms: u64,
    last_ms: Option<u64>,
}

impl TickLimiter {
    #[must_use]
    pub fn new(rate_hz: u32) -> Self {
        Self {
            period_ms: 1000 / u64::from(rate_hz.max(1)),
            last_ms: None,
        }
    }

    /// Returns the elapsed seconds to simulate when this tick should run,
    /// `None` when it falls inside the previous tick's budget.
    pub fn tick(&mut self, now_ms: u64) -> Option<f32> {
        match self.last_ms {
            Some(last) if now_ms.saturating_sub(last) < self.period_ms => None,
            Some(last) => {
                self.last_ms = Some(now_ms);
                #[allow(clippy::cast_precision_loss)]
                Some((now_ms - last) as f32 / 1000.0)
            }
            None => {
                self.last_ms = Some(now_ms);
                #[allow(clippy::cast_precision_loss)]
                Some(self.period_ms as f32 / 1000.0)
            }
        }
    }
}
