use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const GRID_WIDTH: usize = 24;
pub const GRID_HEIGHT: usize = 24;

/// Configuration for the game
///
/// Missing fields fall back to [`GameConfig::default`] when loaded from JSON,
/// so a config file only needs to name the values it changes. The board is
/// always [`GRID_WIDTH`]x[`GRID_HEIGHT`] when loaded from a file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width of the game grid
    #[serde(skip)]
    pub grid_width: usize,
    /// Height of the game grid
    #[serde(skip)]
    pub grid_height: usize,
    /// Initial length of the snake
    pub initial_snake_length: usize,

    // Tick interval (milliseconds)
    /// Interval a fresh session starts with
    pub tick_interval_ms: u64,
    /// Fastest allowed interval
    pub min_tick_interval_ms: u64,
    /// Slowest allowed interval
    pub max_tick_interval_ms: u64,
    /// Amount one speed adjustment moves the interval by
    pub tick_interval_step_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: GRID_WIDTH,
            grid_height: GRID_HEIGHT,
            initial_snake_length: 6,
            tick_interval_ms: 100,
            min_tick_interval_ms: 30,
            max_tick_interval_ms: 300,
            tick_interval_step_ms: 10,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self {
            initial_snake_length: 3,
            ..Self::new(10, 10)
        }
    }

    /// Load a configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;
        let config: GameConfig =
            serde_json::from_str(&json).context("Failed to deserialize config")?;
        Ok(config)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Validate configuration parameters
    ///
    /// Returns `Err(String)` describing the first invalid value.
    pub fn validate(&self) -> Result<(), String> {
        if self.grid_width == 0 || self.grid_height == 0 {
            return Err(format!(
                "grid must be at least 1x1, got {}x{}",
                self.grid_width, self.grid_height
            ));
        }

        // Cells are addressed with i32 coordinates
        let max_side = i32::MAX as usize;
        if self.grid_width > max_side || self.grid_height > max_side {
            return Err(format!(
                "grid sides must not exceed {}, got {}x{}",
                max_side, self.grid_width, self.grid_height
            ));
        }

        let Some(cells) = self.grid_width.checked_mul(self.grid_height) else {
            return Err(format!(
                "grid {}x{} has too many cells",
                self.grid_width, self.grid_height
            ));
        };

        if self.initial_snake_length == 0 {
            return Err("initial_snake_length must be at least 1".to_string());
        }

        if self.initial_snake_length > self.grid_width {
            return Err(format!(
                "initial_snake_length ({}) cannot exceed grid_width ({})",
                self.initial_snake_length, self.grid_width
            ));
        }

        // One free cell is needed for the first apple.
        if self.initial_snake_length >= cells {
            return Err("grid has no room for an apple".to_string());
        }

        if self.tick_interval_step_ms == 0 {
            return Err("tick_interval_step_ms must be at least 1".to_string());
        }

        if self.min_tick_interval_ms == 0 {
            return Err("min_tick_interval_ms must be positive".to_string());
        }

        if self.min_tick_interval_ms > self.max_tick_interval_ms {
            return Err(format!(
                "min_tick_interval_ms ({}) cannot exceed max_tick_interval_ms ({})",
                self.min_tick_interval_ms, self.max_tick_interval_ms
            ));
        }

        if !(self.min_tick_interval_ms..=self.max_tick_interval_ms).contains(&self.tick_interval_ms)
        {
            return Err(format!(
                "tick_interval_ms must be in [{}, {}], got {}",
                self.min_tick_interval_ms, self.max_tick_interval_ms, self.tick_interval_ms
            ));
        }

        Ok(())
    }
}
