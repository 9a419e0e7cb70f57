use std::time::Duration;

use crate::game::GameConfig;

/// Tick interval setting, kept within a fixed range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSpeed {
    millis: u64,
    min: u64,
    max: u64,
    step: u64,
}

impl TickSpeed {
    pub fn new(millis: u64, min: u64, max: u64, step: u64) -> Self {
        Self {
            millis: millis.clamp(min, max),
            min,
            max,
            step,
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(
            config.tick_interval_ms,
            config.min_tick_interval_ms,
            config.max_tick_interval_ms,
            config.tick_interval_step_ms,
        )
    }

    /// Move the interval by `steps` increments, clamping at the bounds.
    /// Returns true if the value changed.
    pub fn adjust(&mut self, steps: i32) -> bool {
        let delta = self.step.saturating_mul(u64::from(steps.unsigned_abs()));
        let next = if steps < 0 {
            self.millis.saturating_sub(delta)
        } else {
            self.millis.saturating_add(delta)
        }
        .clamp(self.min, self.max);

        let changed = next != self.millis;
        self.millis = next;
        changed
    }

    pub fn millis(&self) -> u64 {
        self.millis
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.millis)
    }
}

impl Default for TickSpeed {
    fn default() -> Self {
        Self::from_config(&GameConfig::default())
    }
}
