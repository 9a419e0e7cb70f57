//! Term Snake - a terminal Snake game with a menu shell
//!
//! This library provides:
//! - Per-tick snake simulation (game module)
//! - Menu/game state machine (app module)
//! - Terminal front end: input mapping, rendering and the play loop
//!   (input, render, modes modules)

pub mod app;
pub mod game;
pub mod input;
pub mod logging;
pub mod metrics;
pub mod modes;
pub mod render;
