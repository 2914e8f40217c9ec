//! Keyboard to paddle commands
//!
//! D/F drive the left paddle, J/K the right one. Releasing either key of a
//! pair stops that paddle, even if the other key is still held.

use crate::sim::{FrameInput, PaddleCommand};

/// Held commands plus one-shot requests, fed by key events
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pub left: PaddleCommand,
    pub right: PaddleCommand,
    /// Full setup requested (one-shot)
    pub reset: bool,
    /// Stop the frame loop
    pub quit: bool,
    /// Demo mode toggle
    pub demo: bool,
}

impl InputState {
    /// Apply a key press, named as in `KeyboardEvent.key`
    pub fn key_down(&mut self, key: &str) {
        match key {
            "Escape" => self.quit = true,
            " " => self.reset = true,
            "f" | "F" => self.left = PaddleCommand::Down,
            "d" | "D" => self.left = PaddleCommand::Up,
            "k" | "K" => self.right = PaddleCommand::Down,
            "j" | "J" => self.right = PaddleCommand::Up,
            "i" | "I" => {
                self.demo = !self.demo;
                log::info!("Demo mode: {}", self.demo);
            }
            _ => {}
        }
    }

    /// Apply a key release
    pub fn key_up(&mut self, key: &str) {
        match key {
            "d" | "D" | "f" | "F" => self.left = PaddleCommand::Stationary,
            "j" | "J" | "k" | "K" => self.right = PaddleCommand::Stationary,
            _ => {}
        }
    }

    /// Window closed
    pub fn close_requested(&mut self) {
        self.quit = true;
    }

    /// Input for the next frame; clears one-shot requests
    pub fn take_frame_input(&mut self) -> FrameInput {
        let input = FrameInput {
            left: self.left,
            right: self.right,
            reset: self.reset,
            demo: self.demo,
        };
        self.reset = false;
        input
    }
}
