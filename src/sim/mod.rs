//! Simulation module
//!
//! All gameplay logic lives here. It owns no window, input device or clock:
//! - Frame time arrives as a plain `dt` in seconds
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod serve;
pub mod state;
pub mod tick;

pub use collision::{bounce_angle, hit_offset, paddle_contact, reflect_off_wall};
pub use serve::{serve, serve_arc};
pub use state::{Ball, Bounds, GameEvent, GameState, Paddle, PaddleCommand, Score, Side};
pub use tick::{BallOutcome, FrameInput, advance_ball, move_paddle, tick};
