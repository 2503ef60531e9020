use rand::Rng;
use std::time::Duration;

/// Fixed-interval polling schedule
#[derive(Debug, Clone)]
pub struct PollSchedule {
    pub retry_period_secs: u64,
    pub jitter_factor: f64,
}

impl Default for PollSchedule {
    fn default() -> Self {
        Self {
            retry_period_secs: 600, // 10 minutes
            jitter_factor: 0.0,
        }
    }
}

impl PollSchedule {
    pub fn new(retry_period_secs: u64, jitter_factor: f64) -> Self {
        Self {
            retry_period_secs,
            jitter_factor,
        }
    }

    /// Delay before the next cycle: period × (1 ± jitter), no backoff.
    pub fn next_delay(&self) -> Duration {
        let base = Duration::from_secs(self.retry_period_secs);
        if self.jitter_factor <= 0.0 {
            return base;
        }

        let mut rng = rand::rng();
        let jitter = 1.0 + (rng.random::<f64>() * 2.0 - 1.0) * self.jitter_factor;

        base.mul_f64(jitter.max(0.0))
    }
}
