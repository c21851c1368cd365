//! Tick-counted cooldowns
//!
//! Used for the fire-rate limit and the meteor spawn interval. A timer stays
//! ready once it saturates; the owner must `reset` it after acting.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Counts ticks up to a target and stays there
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timer {
    elapsed_ticks: u32,
    target_ticks: u32,
}

impl Timer {
    pub fn new(target_ticks: u32) -> Self {
        Self {
            elapsed_ticks: 0,
            target_ticks,
        }
    }

    /// Convert a wall-clock duration to ticks.
    ///
    /// Only whole seconds count: 1500ms at 60 tps is 60 ticks, and anything
    /// under a second is 0 ticks (ready on every tick).
    pub fn from_duration(duration: Duration, ticks_per_second: u32) -> Self {
        let whole_seconds = u32::try_from(duration.as_millis() / 1000).unwrap_or(u32::MAX);
        Self::new(whole_seconds.saturating_mul(ticks_per_second))
    }

    /// Advance one tick, saturating at the target
    pub fn tick(&mut self) {
        if self.elapsed_ticks < self.target_ticks {
            self.elapsed_ticks += 1;
        }
    }

    #[inline]
    pub fn is_ready(&self) -> bool {
        self.elapsed_ticks >= self.target_ticks
    }

    pub fn reset(&mut self) {
        self.elapsed_ticks = 0;
    }

    pub fn elapsed_ticks(&self) -> u32 {
        self.elapsed_ticks
    }

    pub fn target_ticks(&self) -> u32 {
        self.target_ticks
    }
}
