//! Timed-region stopwatch

use std::time::{Duration, Instant};

/// Accumulates wall time between `start` and `stop`
#[derive(Clone, Debug, Default)]
pub struct RunTimer {
    started: Option<Instant>,
    elapsed: Duration,
}

impl RunTimer {
    /// Stopped timer with no elapsed time
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin timing; restarting a running timer discards the open interval
    pub fn start(&mut self) {
        self.started = Some(Instant::now());
    }

    /// End timing and add the interval to the total
    pub fn stop(&mut self) {
        if let Some(t0) = self.started.take() {
            self.elapsed += t0.elapsed();
        }
    }

    /// Total time over all closed intervals
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Whether `start` was called without a matching `stop`
    pub fn is_running(&self) -> bool {
        self.started.is_some()
    }
}
