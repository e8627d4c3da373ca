pub mod clock;
pub mod human;

pub use clock::FrameClock;
pub use human::HumanMode;
