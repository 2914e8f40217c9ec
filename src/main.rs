//! Rally Pong entry point
//!
//! Headless runner: loads settings, then drives the frame loop with a
//! simulated millisecond clock. Paddles are steered by demo mode since there
//! is no keyboard attached.

use std::path::PathBuf;
use std::process::ExitCode;

use rally_pong::platform::{FrameClock, InputState};
use rally_pong::renderer::center_line;
use rally_pong::sim::{GameState, Score};
use rally_pong::{InitError, Settings};

const DEFAULT_SETTINGS_PATH: &str = "rally-pong.json";

fn load_settings() -> Result<Settings, InitError> {
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_PATH));
    Settings::load(&path)
}

fn run(settings: &Settings) -> Score {
    let seed = settings.seed.unwrap_or_else(rand::random);
    log::info!("Seed {seed}");

    let mut state = GameState::new(seed, settings.tuning);
    let dashes = center_line(&state.bounds);
    log::debug!("Center line: {} dashes", dashes.len());

    let mut input = InputState {
        demo: settings.demo_mode,
        ..Default::default()
    };

    let target_ms = settings.frame_target_ms();
    let mut now_ms: u32 = 0;
    let mut clock = FrameClock::new(now_ms, target_ms);
    let end_ms = (settings.demo_seconds.max(0.0) * 1000.0) as u32;

    while !input.quit && now_ms < end_ms {
        // A real backend would poll its window here and sleep for the wait
        if let Some(wait) = clock.time_to_wait(now_ms) {
            now_ms += wait;
        }
        let dt = clock.tick(now_ms);

        let frame = input.take_frame_input();
        let render = state.on_frame(&frame, dt);
        log::trace!(
            "frame {} ball ({}, {}) paddles {} / {}",
            state.frame,
            render.ball.x,
            render.ball.y,
            render.left_paddle.y,
            render.right_paddle.y
        );
    }

    state.score
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Rally Pong (headless) starting...");

    let settings = match load_settings() {
        Ok(settings) => settings,
        Err(e) => {
            log::error!("Initialization failed: {e}");
            return ExitCode::FAILURE;
        }
    };

    let score = run(&settings);
    log::info!("Final score {}-{}", score.left, score.right);
    println!("{} - {}", score.left, score.right);
    ExitCode::SUCCESS
}
