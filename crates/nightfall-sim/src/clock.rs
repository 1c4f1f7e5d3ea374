//! Frame clock.

use std::time::Instant;

/// Tracks time between frames and time accumulated since the last spawn.
#[derive(Debug, Clone)]
pub struct Clock {
    /// Time of the previous update.
    last_frame: Instant,
    /// Milliseconds since the spawner last consumed the clock.
    elapsed_ms: f64,
    /// Milliseconds between the two most recent updates.
    delta_ms: f64,
}

impl Clock {
    /// Start a clock at the given instant.
    pub fn new(now: Instant) -> Self {
        Self {
            last_frame: now,
            elapsed_ms: 0.0,
            delta_ms: 0.0,
        }
    }

    /// Record a new frame at `now`.
    ///
    /// `Instant` is monotonic, but the delta is still saturated at zero so an
    /// out-of-order `now` cannot rewind the accumulated time.
    pub fn update(&mut self, now: Instant) {
        let delta = now.saturating_duration_since(self.last_frame);
        self.accumulate(delta.as_secs_f64() * 1000.0);
        if now > self.last_frame {
            self.last_frame = now;
        }
    }

    /// Add a frame delta in milliseconds. Negative deltas count as zero.
    pub fn accumulate(&mut self, delta_ms: f64) {
        self.delta_ms = delta_ms.max(0.0);
        self.elapsed_ms += self.delta_ms;
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_ms
    }

    pub fn delta_ms(&self) -> f64 {
        self.delta_ms
    }

    /// Reset the spawn accumulator.
    pub fn consume(&mut self) {
        self.elapsed_ms = 0.0;
    }
}
