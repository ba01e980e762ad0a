//! Time source seam.
//!
//! Break state and the harness scenarios only ever read "current time" in
//! milliseconds, so the seam is a single method. `WallClock` backs the real
//! binary, `ManualClock` backs deterministic tests.

use std::cell::Cell;
use std::time::Instant;

pub trait Clock {
    /// Current time in milliseconds. Monotone for a given clock instance.
    fn current_time(&self) -> f64;
}

#[derive(Debug)]
pub struct WallClock {
    origin: Instant,
}

impl WallClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for WallClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for WallClock {
    fn current_time(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<f64>,
}

impl ManualClock {
    pub fn new(now: f64) -> Self {
        Self { now: Cell::new(now) }
    }

    pub fn set(&self, now: f64) {
        self.now.set(now);
    }

    pub fn advance(&self, delta: f64) {
        self.now.set(self.now.get() + delta);
    }
}

impl Clock for ManualClock {
    fn current_time(&self) -> f64 {
        self.now.get()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/core/clock.rs"]
mod tests;
