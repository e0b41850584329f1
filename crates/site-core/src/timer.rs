use std::time::Duration;

/// Fixed-period timer for hosts that only have a frame clock.
#[derive(Clone, Debug)]
pub struct IdleTimer {
    period: Duration,
    accum: Duration,
}

impl IdleTimer {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            accum: Duration::ZERO,
        }
    }

    pub fn from_millis(ms: u32) -> Self {
        Self::new(Duration::from_millis(ms as u64))
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Feed elapsed wall time; returns how many periods completed.
    pub fn advance(&mut self, dt: Duration) -> u32 {
        if self.period.is_zero() {
            return 0;
        }
        self.accum += dt;
        let mut fired = 0;
        while self.accum >= self.period {
            self.accum -= self.period;
            fired += 1;
        }
        fired
    }

    pub fn reset(&mut self) {
        self.accum = Duration::ZERO;
    }
}
