//! Headless session runner
//!
//! Drives a seeded session at the nominal frame rate with no browser, for
//! balance checks and reproducing runs from a seed.

use serde::Serialize;

use crate::audio::{AudioManager, SoundEffect, effective_volume};
use crate::consts::{DEFAULT_AREA_HEIGHT, DEFAULT_AREA_WIDTH, FRAME_MS};
use crate::settings::Settings;
use crate::sim::{GameEvent, GamePhase, GameState, TickInput, tick};
use crate::tuning::Tuning;

/// What to run
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub seed: u64,
    /// Simulated seconds, countdown included
    pub seconds: f64,
    pub autopilot: bool,
    pub width: f32,
    pub height: f32,
    pub settings: Settings,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            seconds: 60.0,
            autopilot: false,
            width: DEFAULT_AREA_WIDTH,
            height: DEFAULT_AREA_HEIGHT,
            settings: Settings::default(),
        }
    }
}

/// Outcome of a headless run
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub seed: u64,
    pub frames: u64,
    pub phase: GamePhase,
    pub score: u64,
    pub lives: u8,
    pub difficulty: f32,
    pub events: Vec<GameEvent>,
    pub sounds_played: usize,
    /// Preferences the run was played with
    pub settings: Settings,
}

/// Press start, then tick until time runs out or the game ends
pub fn run(config: &RunConfig, tuning: Tuning) -> RunReport {
    let mut state = GameState::new(config.seed, tuning);
    state.set_play_area(config.width, config.height);

    let mut audio = AudioManager::new();
    audio.set_volume(effective_volume(&config.settings));

    let total = (config.seconds.max(0.0) * 1000.0 / FRAME_MS).round() as u64;
    let mut events = Vec::new();
    let mut frames = 0;

    log::info!(
        "Headless run: seed {}, {} frames, autopilot {}",
        config.seed,
        total,
        config.autopilot
    );

    for frame in 0..total {
        let input = TickInput {
            start: frame == 0,
            autopilot: config.autopilot,
            ..Default::default()
        };
        let raised = tick(&mut state, &input, FRAME_MS);
        frames = frame + 1;

        for event in &raised {
            audio.play(SoundEffect::for_event(event));
            match event {
                GameEvent::Catch { label, points, .. } => {
                    log::info!("[{frame:>6}] catch {label} +{points}")
                }
                GameEvent::Hit { item_id } => {
                    log::info!("[{frame:>6}] hit by #{item_id}, {} lives left", state.lives())
                }
                GameEvent::GameOver { score } => log::info!("[{frame:>6}] game over, {score}"),
            }
        }
        events.extend(raised);

        if state.phase == GamePhase::GameOver {
            break;
        }
    }

    RunReport {
        seed: config.seed,
        frames,
        phase: state.phase,
        score: state.score(),
        lives: state.lives(),
        difficulty: state.difficulty(),
        events,
        sounds_played: audio.played().len(),
        settings: config.settings.clone(),
    }
}
