//! Menu shell and game state machine
//!
//! [`App`] owns the current [`Mode`] and turns abstract [`Input`] events and
//! ticks into simulation calls, mode transitions and [`TickCommand`]s for the
//! runtime that drives it.

pub mod machine;
pub mod mode;
pub mod speed;

pub use machine::{App, Input, TickCommand};
pub use mode::{MenuItem, Mode, OptionItem};
pub use speed::TickSpeed;
