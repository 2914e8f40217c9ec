//! Rally Pong - two paddles, one ball, two walls
//!
//! Core modules:
//! - `sim`: Simulation (serve, paddle motion, ball collisions, frame driver)
//! - `renderer`: Integer rectangles and center-line layout handed to a drawing backend
//! - `platform`: Keyboard mapping and frame clock
//! - `settings`: Runtime settings loaded from JSON
//! - `tuning`: Physics tuning values

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use settings::{InitError, Settings};
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions (pixels)
    pub const WINDOW_WIDTH: f32 = 800.0;
    pub const WINDOW_HEIGHT: f32 = 600.0;

    /// Target frame rate and the matching frame interval (milliseconds)
    pub const FPS: u32 = 60;
    pub const FRAME_TARGET_TIME: u32 = 1000 / FPS;

    /// Ball defaults
    pub const BALL_SIZE: f32 = 16.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 8.0;
    pub const PADDLE_HEIGHT: f32 = 64.0;
    /// Gap between a side wall and the outer face of its paddle
    pub const PADDLE_INSET: f32 = 50.0;

    /// Decorative center line (not part of the physics)
    pub const CENTER_LINE_DOTS: u32 = 15;
    pub const CENTER_LINE_WIDTH: f32 = 4.0;
}

/// Normalize an angle to [0, 2π)
#[inline]
pub fn normalize_angle(angle: f32) -> f32 {
    use std::f32::consts::TAU;
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if wrapped >= TAU { 0.0 } else { wrapped }
}

/// Angle of the vector pointing from `from` to `to`, in (-π, π]
#[inline]
pub fn angle_between(from: Vec2, to: Vec2) -> f32 {
    let d = to - from;
    d.y.atan2(d.x)
}

/// Unit vector for an angle
#[inline]
pub fn unit_from_angle(theta: f32) -> Vec2 {
    Vec2::new(theta.cos(), theta.sin())
}
