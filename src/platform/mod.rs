//! Platform abstraction layer
//!
//! Handles the pieces a windowing backend feeds into the engine:
//! - Time/ticks (frame pacing and `dt`)
//! - Input events (keys to paddle commands)

pub mod clock;
pub mod input;

pub use clock::FrameClock;
pub use input::InputState;
