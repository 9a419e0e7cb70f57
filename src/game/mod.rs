//! Core game logic module for Snake
//!
//! This module contains the per-tick simulation without any I/O or rendering
//! dependencies. The menu shell in [`crate::app`] drives it.

pub mod config;
pub mod direction;
pub mod engine;
pub mod state;

// Re-export commonly used types
pub use config::GameConfig;
pub use direction::Direction;
pub use engine::SnakeGame;
pub use state::{Position, Snake, StepOutcome};
