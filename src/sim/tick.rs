//! Per-frame simulation tick
//!
//! Driven by the host's animation-frame callback. One call advances the
//! screen flow, and while playing: ramps difficulty, moves and resolves every
//! item against a frozen catcher snapshot, applies the requested deltas, and
//! spawns new items.

use super::collision::{CatchContext, resolve};
use super::difficulty;
use super::spawn::spawn;
use super::state::{GameEvent, GamePhase, GameState, Schedule};

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Absolute catcher target, percent of play-area width (pointer/touch)
    pub catcher_target: Option<f32>,
    /// Keyboard steps since last tick (negative = left)
    pub nudge: i32,
    /// Start button pressed
    pub start: bool,
    /// Play Again pressed
    pub replay: bool,
    /// Demo mode - AI steers the catcher
    pub autopilot: bool,
}

/// Advance the game by one frame of `elapsed_ms`. Returns the feedback
/// events raised this frame, in the order they happened.
pub fn tick(state: &mut GameState, input: &TickInput, elapsed_ms: f64) -> Vec<GameEvent> {
    // Timers run on the real clock, motion on the capped one
    let dt_ms = crate::frame_gap_ms(elapsed_ms);
    let scale = crate::tick_scale(elapsed_ms);
    let mut events = Vec::new();

    match state.phase {
        GamePhase::Start => {
            if input.start {
                state.begin_countdown();
            }
        }
        GamePhase::Countdown => {
            let finished = match &mut state.schedule {
                Schedule::Countdown(countdown) => countdown.advance(dt_ms),
                _ => {
                    log::warn!("Countdown phase without a countdown timer");
                    true
                }
            };
            if finished {
                state.begin_play();
            }
        }
        GamePhase::Playing => play(state, input, dt_ms, scale, &mut events),
        GamePhase::GameOver => {
            if input.replay {
                state.return_to_start();
            }
        }
    }

    // Dismiss timers first so feedback raised this frame keeps its full time
    state.feedback.advance(dt_ms);
    for event in &events {
        state.feedback.apply(event, &state.tuning);
    }

    events
}

fn play(
    state: &mut GameState,
    input: &TickInput,
    dt_ms: f64,
    scale: f32,
    events: &mut Vec<GameEvent>,
) {
    steer(state, input, scale);

    let Some(clock) = state.schedule.play_clock() else {
        log::warn!("Playing phase without a play clock");
        return;
    };
    let ramps = clock.ramp.advance(dt_ms);
    if ramps > 0 {
        let mut multiplier = state.difficulty();
        for _ in 0..ramps {
            multiplier = difficulty::ramp(multiplier, state.tuning.speed_increase_amount);
        }
        state.set_difficulty(multiplier);
        let period = difficulty::spawn_interval(state.tuning.spawn_interval_ms, multiplier);
        if let Some(clock) = state.schedule.play_clock() {
            clock.spawn.restart(period);
        }
        log::info!("Difficulty {:.2}, spawning every {:.0}ms", multiplier, period);
    }

    // Catcher is frozen for the whole pass
    let ctx = CatchContext::snapshot(state, scale);
    let resolution = resolve(std::mem::take(&mut state.items), &ctx);
    state.items = resolution.survivors;
    if resolution.missed > 0 {
        log::debug!("{} item(s) fell past the catcher", resolution.missed);
    }
    for delta in resolution.deltas {
        state.apply(delta);
    }
    events.extend(resolution.events);

    if state.lives() == 0 {
        let score = state.score();
        state.end_game();
        events.push(GameEvent::GameOver { score });
        return;
    }

    let spawns = state
        .schedule
        .play_clock()
        .map_or(0, |clock| clock.spawn.advance(dt_ms));
    // Intervals missed during a long gap coalesce into one spawn
    if spawns > 0 {
        if spawns > 1 {
            log::debug!("{} spawn intervals elapsed in one frame", spawns);
        }
        spawn(state);
    }
}

/// Apply player (or autopilot) input to the catcher
fn steer(state: &mut GameState, input: &TickInput, scale: f32) {
    let area = state.area;
    let size = state.tuning.catcher_size;

    if input.autopilot {
        if let Some(target) = autopilot_target(state) {
            let max_step = state.tuning.keyboard_step_percent * scale;
            let delta = (target - state.catcher.x_percent).clamp(-max_step, max_step);
            let x = state.catcher.x_percent + delta;
            state.catcher.move_to(x, &area, size);
        }
        return;
    }

    if let Some(target) = input.catcher_target {
        state.catcher.move_to(target, &area, size);
    }
    if input.nudge != 0 {
        let step = state.tuning.keyboard_step_percent;
        state.catcher.nudge(input.nudge, step, &area, size);
    }
}

/// Where the demo AI wants the catcher centre (percent), if anywhere.
///
/// Chases the lowest logo that isn't shadowed by a nearby obstacle; with
/// nothing to chase, steps out from under any obstacle about to land.
fn autopilot_target(state: &GameState) -> Option<f32> {
    let t = &state.tuning;
    let area = &state.area;
    let catcher_top = area.height - t.catcher_bottom_offset - t.catcher_size;
    let band_bottom = area.height - t.catch_band_bottom;
    let reach = (t.catcher_size + t.item_size) / 2.0;
    let center = |left_percent: f32| left_percent / 100.0 * area.width + t.item_size / 2.0;

    let threats: Vec<f32> = state
        .items
        .iter()
        .filter(|item| item.kind.is_hazard())
        .filter(|item| item.top + t.item_size > catcher_top - 3.0 * t.item_size)
        .filter(|item| item.top < band_bottom)
        .map(|item| center(item.left_percent))
        .collect();
    let shadowed = |x: f32| threats.iter().any(|&tx| (tx - x).abs() < reach);

    let chase = state
        .items
        .iter()
        .filter(|item| !item.kind.is_hazard() && item.top < band_bottom)
        .map(|item| (item.top, center(item.left_percent)))
        .filter(|&(_, x)| !shadowed(x))
        .max_by(|a, b| a.0.total_cmp(&b.0));
    if let Some((_, x)) = chase {
        return Some(area.percent_of_width(x));
    }

    let here = state.catcher.center_px(area);
    let threat = threats.iter().copied().find(|&tx| (tx - here).abs() < reach)?;
    let escape = if threat > area.width / 2.0 {
        threat - reach - 1.0
    } else {
        threat + reach + 1.0
    };
    Some(area.percent_of_width(escape))
}
