//! Game state and core simulation types
//!
//! The ball and both paddles are created once and re-initialised in place;
//! `GameState` owns all of them.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::serve::serve;
use crate::consts::*;
use crate::tuning::Tuning;

/// Fixed playfield size (pixels)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
        }
    }
}

impl Bounds {
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// A side of the playfield
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Uniform coin flip
    pub fn random(rng: &mut impl Rng) -> Self {
        if rng.random_bool(0.5) {
            Side::Left
        } else {
            Side::Right
        }
    }
}

/// Tri-state paddle command set by the input layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PaddleCommand {
    Up,
    #[default]
    Stationary,
    Down,
}

impl PaddleCommand {
    /// Vertical direction in screen space (y grows downward)
    #[inline]
    pub fn direction(self) -> f32 {
        match self {
            PaddleCommand::Up => -1.0,
            PaddleCommand::Stationary => 0.0,
            PaddleCommand::Down => 1.0,
        }
    }
}

/// The ball. `pos` is the top-left corner, `vel` is a unit direction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub size: Vec2,
    pub vel: Vec2,
}

impl Default for Ball {
    fn default() -> Self {
        Self {
            pos: Vec2::ZERO,
            size: Vec2::splat(BALL_SIZE),
            vel: Vec2::X,
        }
    }
}

impl Ball {
    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    #[inline]
    pub fn center_y(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }

    /// Position after `dt` seconds at `speed` along the current direction
    #[inline]
    pub fn next_pos(&self, speed: f32, dt: f32) -> Vec2 {
        self.pos + self.vel * speed * dt
    }
}

/// A paddle. `pos` is the top-left corner; only `pos.y` changes after setup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub pos: Vec2,
    pub size: Vec2,
    pub command: PaddleCommand,
}

impl Paddle {
    /// A stopped paddle vertically centered on its side
    pub fn for_side(side: Side, bounds: &Bounds) -> Self {
        let mut paddle = Self {
            pos: Vec2::ZERO,
            size: Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT),
            command: PaddleCommand::Stationary,
        };
        paddle.reset(side, bounds);
        paddle
    }

    /// Put the paddle back at its starting spot and stop it
    pub fn reset(&mut self, side: Side, bounds: &Bounds) {
        let x = match side {
            Side::Left => PADDLE_INSET,
            Side::Right => bounds.width - PADDLE_INSET - self.size.x,
        };
        self.pos = Vec2::new(x, bounds.height / 2.0 - self.size.y / 2.0);
        self.command = PaddleCommand::Stationary;
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    #[inline]
    pub fn center_y(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    /// Inclusive overlap of the ball's vertical span with the paddle's
    #[inline]
    pub fn spans_overlap(&self, ball: &Ball) -> bool {
        ball.bottom() >= self.top() && ball.top() <= self.bottom()
    }
}

/// Points per side
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    /// Credit the side opposite the one that conceded
    pub fn concede(&mut self, conceded: Side) {
        match conceded.opposite() {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }
}

/// Things that happened during a frame, for logging/audio/scoring hooks
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// Ball placed at center heading toward `side` at `angle` radians
    Serve { side: Side, angle: f32 },
    /// Ball reflected off the top or bottom wall
    WallBounce,
    /// Ball reflected off a paddle with the given skew (radians)
    PaddleHit { side: Side, skew: f32 },
    /// Ball left the field past `conceded`'s goal margin
    Goal { conceded: Side },
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    pub bounds: Bounds,
    pub tuning: Tuning,
    pub ball: Ball,
    pub left: Paddle,
    pub right: Paddle,
    pub score: Score,
    /// Side chosen at the most recent serve
    pub serve_side: Side,
    /// Paddle hits since the last serve
    pub rally: u32,
    /// Frames simulated since creation
    pub frame: u64,
    /// Run seed for reproducibility
    pub seed: u64,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Create a new game with default bounds and the given tuning
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        Self::with_bounds(seed, tuning, Bounds::default())
    }

    pub fn with_bounds(seed: u64, tuning: Tuning, bounds: Bounds) -> Self {
        let mut state = Self {
            bounds,
            tuning,
            ball: Ball::default(),
            left: Paddle::for_side(Side::Left, &bounds),
            right: Paddle::for_side(Side::Right, &bounds),
            score: Score::default(),
            serve_side: Side::Left,
            rally: 0,
            frame: 0,
            seed,
            rng: Pcg32::seed_from_u64(seed),
        };
        state.setup();
        state
    }

    /// Full setup: random-side serve and both paddles re-centered
    pub fn setup(&mut self) -> GameEvent {
        let side = Side::random(&mut self.rng);
        let event = self.serve(side);
        self.left.reset(Side::Left, &self.bounds);
        self.right.reset(Side::Right, &self.bounds);
        event
    }

    /// Re-serve the ball toward `side`
    pub fn serve(&mut self, side: Side) -> GameEvent {
        let angle = serve(&mut self.ball, side, &self.bounds, &mut self.rng);
        self.serve_side = side;
        self.rally = 0;
        GameEvent::Serve { side, angle }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paddles_start_centered() {
        let state = GameState::new(1, Tuning::default());
        assert_eq!(state.left.pos, Vec2::new(50.0, 268.0));
        assert_eq!(state.right.pos, Vec2::new(742.0, 268.0));
        assert_eq!(state.left.command, PaddleCommand::Stationary);
    }

    #[test]
    fn test_new_game_serves_from_center() {
        let state = GameState::new(5, Tuning::default());
        assert_eq!(state.ball.pos, Vec2::new(392.0, 292.0));
        assert!((state.ball.vel.length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_score_credits_opponent() {
        let mut score = Score::default();
        score.concede(Side::Left);
        score.concede(Side::Left);
        score.concede(Side::Right);
        assert_eq!(score, Score { left: 1, right: 2 });
    }

    #[test]
    fn test_spans_overlap_is_inclusive() {
        let bounds = Bounds::default();
        let paddle = Paddle::for_side(Side::Left, &bounds);
        let mut ball = Ball::default();
        ball.pos.y = paddle.top() - ball.size.y;
        assert!(paddle.spans_overlap(&ball));
        ball.pos.y -= 0.5;
        assert!(!paddle.spans_overlap(&ball));
        ball.pos.y = paddle.bottom();
        assert!(paddle.spans_overlap(&ball));
    }

    #[test]
    fn test_same_seed_same_serve() {
        let a = GameState::new(99, Tuning::default());
        let b = GameState::new(99, Tuning::default());
        assert_eq!(a.serve_side, b.serve_side);
        assert_eq!(a.ball.vel, b.ball.vel);
    }
}
