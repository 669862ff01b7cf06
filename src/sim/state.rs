//! Game state and core simulation types
//!
//! `GameState` is the per-session context: it owns the score, lives,
//! difficulty, catcher and falling items, and is handed to the spawner and
//! collision resolver each tick instead of them reaching for globals.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::Serialize;

use super::feedback::Feedback;
use super::timer::{Countdown, IntervalTimer};
use crate::catalog::{self, Logo};
use crate::consts::*;
use crate::tuning::Tuning;

/// Current screen of the game flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GamePhase {
    /// Title screen, waiting for the start button
    Start,
    /// 3-2-1-Go before play
    Countdown,
    /// Active gameplay
    Playing,
    /// Run ended, waiting for replay
    GameOver,
}

/// What kind of thing is falling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ItemKind {
    /// Collectible logo (index into the catalog)
    Logo { logo: usize },
    /// Hazard: costs a life when caught
    Obstacle,
}

impl ItemKind {
    pub fn is_hazard(&self) -> bool {
        matches!(self, ItemKind::Obstacle)
    }

    /// Catalog entry for logos, `None` for obstacles
    pub fn logo(&self) -> Option<&'static Logo> {
        match *self {
            ItemKind::Logo { logo } => Some(catalog::logo(logo)),
            ItemKind::Obstacle => None,
        }
    }
}

/// A falling item entity
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FallingItem {
    pub id: u32,
    pub kind: ItemKind,
    /// Distance of the top edge from the top of the play area (px)
    pub top: f32,
    /// Left edge as a percentage of play-area width, fixed at spawn
    pub left_percent: f32,
    /// Speed units, fixed at spawn
    pub speed: f32,
}

impl FallingItem {
    /// Candidate top after falling for `scale` nominal frames
    pub fn advanced_top(&self, px_per_speed: f32, scale: f32) -> f32 {
        self.top + self.speed * px_per_speed * scale
    }

    /// Left edge in play-area pixels
    pub fn left_px(&self, area: &PlayArea) -> f32 {
        self.left_percent / 100.0 * area.width
    }
}

/// Play area size in CSS pixels, reported by the host
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlayArea {
    pub width: f32,
    pub height: f32,
}

impl Default for PlayArea {
    fn default() -> Self {
        Self {
            width: DEFAULT_AREA_WIDTH,
            height: DEFAULT_AREA_HEIGHT,
        }
    }
}

impl PlayArea {
    /// Convert a pixel width into a percentage of the play area
    pub fn percent_of_width(&self, px: f32) -> f32 {
        if self.width > 0.0 {
            px / self.width * 100.0
        } else {
            100.0
        }
    }
}

/// The player's catcher
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Catcher {
    /// Centre as a percentage of play-area width
    pub x_percent: f32,
}

impl Default for Catcher {
    fn default() -> Self {
        Self {
            x_percent: CATCHER_START_PERCENT,
        }
    }
}

impl Catcher {
    /// Allowed range for the centre so the catcher never leaves the area
    pub fn limits(area: &PlayArea, size: f32) -> (f32, f32) {
        let half = area.percent_of_width(size / 2.0);
        if half >= 50.0 {
            (50.0, 50.0)
        } else {
            (half, 100.0 - half)
        }
    }

    /// Move the centre to `percent`, clamped to the allowed range
    pub fn move_to(&mut self, percent: f32, area: &PlayArea, size: f32) {
        let (min, max) = Self::limits(area, size);
        self.x_percent = if percent.is_nan() {
            self.x_percent.clamp(min, max)
        } else {
            percent.clamp(min, max)
        };
    }

    /// Step by `steps` keyboard increments (negative = left)
    pub fn nudge(&mut self, steps: i32, step_percent: f32, area: &PlayArea, size: f32) {
        let target = self.x_percent + steps as f32 * step_percent;
        self.move_to(target, area, size);
    }

    /// Centre in play-area pixels
    pub fn center_px(&self, area: &PlayArea) -> f32 {
        self.x_percent / 100.0 * area.width
    }
}

/// Score/lives change requested by the resolver.
/// Only `GameState::apply` turns these into writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StatDelta {
    Points(u32),
    LoseLife,
}

/// Feedback events for the presentation and audio collaborators
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum GameEvent {
    /// A logo was caught
    Catch {
        item_id: u32,
        label: &'static str,
        points: u32,
        /// Item's last on-screen position (play-area px)
        x: f32,
        y: f32,
    },
    /// An obstacle was caught
    Hit { item_id: u32 },
    /// Lives ran out
    GameOver { score: u64 },
}

impl GameEvent {
    /// Name the audio collaborator keys its sound on
    pub fn name(&self) -> &'static str {
        match self {
            GameEvent::Catch { .. } => catalog::sounds::CATCH,
            GameEvent::Hit { .. } => catalog::sounds::HIT,
            GameEvent::GameOver { .. } => catalog::sounds::GAME_OVER,
        }
    }
}

/// Timers owned by the current phase. Replacing the schedule drops (and so
/// cancels) whatever the previous phase was running.
#[derive(Debug, Clone)]
pub enum Schedule {
    Idle,
    Countdown(Countdown),
    Playing(PlayClock),
}

/// Interval timers that run only while playing
#[derive(Debug, Clone)]
pub struct PlayClock {
    pub spawn: IntervalTimer,
    pub ramp: IntervalTimer,
}

impl Schedule {
    pub fn play_clock(&mut self) -> Option<&mut PlayClock> {
        match self {
            Schedule::Playing(clock) => Some(clock),
            _ => None,
        }
    }

    pub fn countdown(&self) -> Option<&Countdown> {
        match self {
            Schedule::Countdown(countdown) => Some(countdown),
            _ => None,
        }
    }
}

/// Complete per-session game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Spawn RNG (seeded, so a seed replays the same run)
    pub rng: Pcg32,
    /// Balance constants, fixed for the session
    pub tuning: Tuning,
    /// Play area size
    pub area: PlayArea,
    /// Current screen
    pub phase: GamePhase,
    /// Timers owned by the current phase
    pub schedule: Schedule,
    /// Player catcher
    pub catcher: Catcher,
    /// Live falling items (order irrelevant)
    pub items: Vec<FallingItem>,
    /// Tooltip and shake
    pub feedback: Feedback,
    score: u64,
    lives: u8,
    difficulty: f32,
    next_id: u32,
}

impl GameState {
    /// Create a new session on the start screen
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        let lives = tuning.initial_lives;
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            tuning,
            area: PlayArea::default(),
            phase: GamePhase::Start,
            schedule: Schedule::Idle,
            catcher: Catcher::default(),
            items: Vec::new(),
            feedback: Feedback::default(),
            score: 0,
            lives,
            difficulty: 1.0,
            next_id: 1,
        }
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn lives(&self) -> u8 {
        self.lives
    }

    /// Current difficulty multiplier (1.0 at session start)
    pub fn difficulty(&self) -> f32 {
        self.difficulty
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Apply a score/lives change. Score only grows, lives never go below 0.
    pub fn apply(&mut self, delta: StatDelta) {
        match delta {
            StatDelta::Points(points) => self.score = self.score.saturating_add(points as u64),
            StatDelta::LoseLife => self.lives = self.lives.saturating_sub(1),
        }
    }

    /// Raise the difficulty multiplier by one ramp step
    pub(crate) fn set_difficulty(&mut self, multiplier: f32) {
        debug_assert!(multiplier >= self.difficulty);
        self.difficulty = multiplier.max(self.difficulty);
    }

    /// Host resized the play area; keep the catcher inside it
    pub fn set_play_area(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.area = PlayArea { width, height };
            let x = self.catcher.x_percent;
            self.catcher.move_to(x, &self.area, self.tuning.catcher_size);
        }
    }

    /// Start → Countdown
    pub fn begin_countdown(&mut self) {
        let t = &self.tuning;
        self.schedule = Schedule::Countdown(Countdown::new(
            t.countdown_from,
            t.countdown_step_ms,
            t.go_flash_ms,
        ));
        self.items.clear();
        self.phase = GamePhase::Countdown;
        log::info!("Countdown started");
    }

    /// Countdown → Playing. Resets everything a run accumulates.
    pub fn begin_play(&mut self) {
        self.reset_run();
        let t = &self.tuning;
        self.schedule = Schedule::Playing(PlayClock {
            spawn: IntervalTimer::new(super::difficulty::spawn_interval(
                t.spawn_interval_ms,
                self.difficulty,
            )),
            ramp: IntervalTimer::new(t.speed_increase_interval_ms),
        });
        self.phase = GamePhase::Playing;
        log::info!("Play started (seed {})", self.seed);
    }

    /// Playing → GameOver. Stops spawning, falling and ramping.
    pub fn end_game(&mut self) {
        self.schedule = Schedule::Idle;
        self.items.clear();
        self.phase = GamePhase::GameOver;
        log::info!(
            "Game over: score {} at difficulty {:.2}",
            self.score,
            self.difficulty
        );
    }

    /// GameOver → Start (replay). Full reset.
    pub fn return_to_start(&mut self) {
        self.reset_run();
        self.schedule = Schedule::Idle;
        self.feedback.clear();
        self.phase = GamePhase::Start;
        log::info!("Back to start screen");
    }

    fn reset_run(&mut self) {
        self.score = 0;
        self.lives = self.tuning.initial_lives;
        self.difficulty = 1.0;
        self.items.clear();
        self.catcher = Catcher::default();
        let x = self.catcher.x_percent;
        self.catcher.move_to(x, &self.area, self.tuning.catcher_size);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_on_start_screen() {
        let state = GameState::new(1, Tuning::default());
        assert_eq!(state.phase, GamePhase::Start);
        assert_eq!(state.lives(), 3);
        assert_eq!(state.score(), 0);
        assert_eq!(state.difficulty(), 1.0);
        assert!(state.items.is_empty());
    }

    #[test]
    fn test_apply_deltas() {
        let mut state = GameState::new(1, Tuning::default());
        state.apply(StatDelta::Points(10));
        state.apply(StatDelta::LoseLife);
        assert_eq!(state.score(), 10);
        assert_eq!(state.lives(), 2);
    }

    #[test]
    fn test_lives_saturate_at_zero() {
        let mut state = GameState::new(1, Tuning::default());
        for _ in 0..10 {
            state.apply(StatDelta::LoseLife);
        }
        assert_eq!(state.lives(), 0);
    }

    #[test]
    fn test_catcher_limits() {
        let area = PlayArea {
            width: 400.0,
            height: 600.0,
        };
        // 80px catcher on 400px: half width is 10%
        assert_eq!(Catcher::limits(&area, 80.0), (10.0, 90.0));

        let mut catcher = Catcher::default();
        catcher.move_to(-50.0, &area, 80.0);
        assert_eq!(catcher.x_percent, 10.0);
        catcher.move_to(1e9, &area, 80.0);
        assert_eq!(catcher.x_percent, 90.0);
        catcher.nudge(-2, 5.0, &area, 80.0);
        assert_eq!(catcher.x_percent, 80.0);
    }

    #[test]
    fn test_catcher_wider_than_area_centres() {
        let area = PlayArea {
            width: 60.0,
            height: 600.0,
        };
        let mut catcher = Catcher::default();
        catcher.move_to(0.0, &area, 80.0);
        assert_eq!(catcher.x_percent, 50.0);
    }

    #[test]
    fn test_resize_reclamps_catcher() {
        let mut state = GameState::new(1, Tuning::default());
        state.catcher.x_percent = 95.0;
        state.set_play_area(400.0, 600.0);
        assert_eq!(state.catcher.x_percent, 90.0);
    }

    #[test]
    fn test_event_names() {
        assert_eq!(GameEvent::Hit { item_id: 1 }.name(), "hit");
        assert_eq!(GameEvent::GameOver { score: 0 }.name(), "gameover");
    }
}
