//! Fixed-step scheduling: turns wall time into a count of simulation ticks.

use instant::Instant;
use std::time::Duration;

use crate::constants::{MAX_CATCH_UP_TICKS, TICK_INTERVAL_MS};

pub struct TickClock {
    step: Duration,
    max_ticks: u32,
    last: Instant,
    accum: Duration,
}

impl Default for TickClock {
    fn default() -> Self {
        Self::new(Duration::from_millis(TICK_INTERVAL_MS), MAX_CATCH_UP_TICKS)
    }
}

impl TickClock {
    pub fn new(step: Duration, max_ticks: u32) -> Self {
        Self {
            step,
            max_ticks,
            last: Instant::now(),
            accum: Duration::ZERO,
        }
    }

    pub fn step(&self) -> Duration {
        self.step
    }

    /// Ticks due at wall time `now`.
    pub fn poll(&mut self, now: Instant) -> u32 {
        let dt = now.saturating_duration_since(self.last);
        self.last = now;
        self.advance(dt)
    }

    /// Add `dt` of elapsed time and return how many whole steps are due.
    ///
    /// After a stall the backlog is dropped beyond `max_ticks` so the scene
    /// never tries to replay seconds of motion in one frame.
    pub fn advance(&mut self, dt: Duration) -> u32 {
        if self.step.is_zero() {
            return 0;
        }
        self.accum += dt;
        let mut ticks = 0u32;
        while self.accum >= self.step {
            self.accum -= self.step;
            ticks += 1;
            if ticks >= self.max_ticks {
                self.accum = Duration::ZERO;
                break;
            }
        }
        ticks
    }
}
