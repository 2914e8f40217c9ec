//! Per-frame simulation step
//!
//! Paddles move first, then the ball resolves its collisions against the
//! already-moved paddles. `dt` is whatever wall-clock time the frame took;
//! there is no sub-stepping, so a very long frame can carry the ball through
//! a paddle or past a wall.

use super::collision::{
    bounce_angle, hit_offset, hits_wall, paddle_contact, reflect_off_paddle, reflect_off_wall,
};
use super::state::{Ball, Bounds, GameEvent, GameState, Paddle, PaddleCommand, Side};
use crate::renderer::RenderState;
use crate::tuning::Tuning;

/// Inputs for a single frame
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    /// Left paddle command
    pub left: PaddleCommand,
    /// Right paddle command
    pub right: PaddleCommand,
    /// Re-run full setup before simulating
    pub reset: bool,
    /// Demo mode - both paddles track the ball
    pub demo: bool,
}

/// What the ball step did
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BallOutcome {
    /// Ball moved; at most one wall bounce and one paddle hit happened
    Continued {
        wall_bounce: bool,
        paddle_hit: Option<(Side, f32)>,
    },
    /// Ball left the field past `conceded`'s goal margin and was not moved
    GoalScored { conceded: Side },
}

/// Move a paddle by its command, refusing any move that would touch a wall.
///
/// A rejected move leaves the paddle where it was rather than clipping it
/// to the boundary. Returns whether the paddle moved.
pub fn move_paddle(paddle: &mut Paddle, bounds: &Bounds, tuning: &Tuning, dt: f32) -> bool {
    let y = paddle.pos.y + paddle.command.direction() * tuning.paddle_speed * dt;

    if y <= 0.0 || y + paddle.size.y >= bounds.height {
        return false;
    }

    paddle.pos.y = y;
    true
}

/// Advance the ball by `dt` seconds.
///
/// Checks run in order, each recomputing the candidate position:
/// top/bottom wall, then paddles, then goal lines. The goal check is skipped
/// when a paddle was hit this frame, so a paddle edge grazed on the goal line
/// keeps the rally alive. On a goal the ball is left in place for the caller
/// to re-serve.
pub fn advance_ball(
    ball: &mut Ball,
    left: &Paddle,
    right: &Paddle,
    bounds: &Bounds,
    tuning: &Tuning,
    dt: f32,
) -> BallOutcome {
    let speed = tuning.ball_speed;
    let mut candidate = ball.next_pos(speed, dt);

    // Angle before any reflection; the paddle response mirrors this one
    let angle = ball.vel.y.atan2(ball.vel.x);

    let wall_bounce = hits_wall(candidate, ball, bounds);
    if wall_bounce {
        ball.vel = reflect_off_wall(ball.vel);
        candidate = ball.next_pos(speed, dt);
    }

    let mut paddle_hit = None;
    if let Some(side) = paddle_contact(candidate, ball, left, right, bounds) {
        let paddle = match side {
            Side::Left => left,
            Side::Right => right,
        };
        let skew = bounce_angle(hit_offset(ball, paddle), tuning);
        ball.vel = reflect_off_paddle(angle, skew);
        candidate = ball.next_pos(speed, dt);
        paddle_hit = Some((side, skew));
    }

    if paddle_hit.is_none() {
        if candidate.x < tuning.goal_margin {
            return BallOutcome::GoalScored {
                conceded: Side::Left,
            };
        }
        if candidate.x + ball.size.x > bounds.width - tuning.goal_margin {
            return BallOutcome::GoalScored {
                conceded: Side::Right,
            };
        }
    }

    ball.pos = candidate;
    BallOutcome::Continued {
        wall_bounce,
        paddle_hit,
    }
}

/// Commands that keep each paddle's center on the ball's center
pub fn demo_commands(state: &GameState) -> (PaddleCommand, PaddleCommand) {
    let track = |paddle: &Paddle| {
        // Dead zone keeps the paddle from jittering around the target
        let dead_zone = paddle.size.y / 4.0;
        let delta = state.ball.center_y() - paddle.center_y();
        if delta < -dead_zone {
            PaddleCommand::Up
        } else if delta > dead_zone {
            PaddleCommand::Down
        } else {
            PaddleCommand::Stationary
        }
    };
    (track(&state.left), track(&state.right))
}

/// Advance the game state by one frame of `dt` seconds
pub fn tick(state: &mut GameState, input: &FrameInput, dt: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if input.reset {
        log::info!("Reset");
        events.push(state.setup());
    }

    let (left_cmd, right_cmd) = if input.demo {
        demo_commands(state)
    } else {
        (input.left, input.right)
    };
    state.left.command = left_cmd;
    state.right.command = right_cmd;

    move_paddle(&mut state.left, &state.bounds, &state.tuning, dt);
    move_paddle(&mut state.right, &state.bounds, &state.tuning, dt);

    let outcome = advance_ball(
        &mut state.ball,
        &state.left,
        &state.right,
        &state.bounds,
        &state.tuning,
        dt,
    );

    match outcome {
        BallOutcome::Continued {
            wall_bounce,
            paddle_hit,
        } => {
            if wall_bounce {
                log::debug!("Wall bounce at ({:.1}, {:.1})", state.ball.pos.x, state.ball.pos.y);
                events.push(GameEvent::WallBounce);
            }
            if let Some((side, skew)) = paddle_hit {
                state.rally += 1;
                log::debug!("{side:?} paddle hit, skew {skew:.3} rad, rally {}", state.rally);
                events.push(GameEvent::PaddleHit { side, skew });
            }
        }
        BallOutcome::GoalScored { conceded } => {
            state.score.concede(conceded);
            log::info!(
                "{conceded:?} goal after {} hits, score {}-{}",
                state.rally,
                state.score.left,
                state.score.right
            );
            events.push(GameEvent::Goal { conceded });

            let side = Side::random(&mut state.rng);
            events.push(state.serve(side));
        }
    }

    state.frame += 1;
    events
}

impl GameState {
    /// Run one frame and hand back what to draw
    pub fn on_frame(&mut self, input: &FrameInput, dt: f32) -> RenderState {
        tick(self, input, dt);
        RenderState::from_state(self)
    }
}
