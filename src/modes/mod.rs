pub mod human;
pub mod tick;

pub use human::HumanMode;
pub use tick::TickSource;
