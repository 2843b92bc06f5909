//! Lightweight phase timing.
//!
//! Every pipeline phase is timed unconditionally; the numbers feed the run
//! summary and a `debug!` event per phase.

use std::time::Instant;

/// A simple timer that measures elapsed wall time for one labelled phase.
pub struct Timer {
    label: &'static str,
    start: Instant,
}

impl Timer {
    /// Create and start a new timer with the given label.
    pub fn start(label: &'static str) -> Self {
        Self {
            label,
            start: Instant::now(),
        }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Seconds elapsed so far without stopping.
    pub fn elapsed_s(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }

    /// Stop the timer, log it, and return elapsed time in seconds.
    pub fn stop(self) -> f64 {
        let elapsed = self.elapsed_s();
        tracing::debug!(phase = self.label, elapsed_s = elapsed, "phase finished");
        elapsed
    }
}
