//! Text and visibility rules for the DOM overlay
//!
//! The browser shell only copies these into elements; keeping them here lets
//! the wording and screen flow be tested natively.

use crate::sim::{CountdownDisplay, GamePhase};

/// Intent URL used when the Web Share API is missing
pub const TWITTER_INTENT: &str = "https://twitter.com/intent/tweet?text=";

/// Workshop landing page linked from the game-over screen
pub const WORKSHOP_URL: &str = "https://www.outskill.com";

/// Message shared from the game-over screen
pub fn share_text(score: u64, url: &str) -> String {
    format!(
        "🎮 Just scored {score} in AI Logo Catcher! Can you beat me and win a free seat in our \
         2-day GenAI workshop? 🚀 Play now → {url} Tag us with your score + #AILogoChallenge"
    )
}

/// One pip per remaining life
pub fn lives_pips(lives: u8) -> String {
    "●".repeat(lives as usize)
}

pub fn countdown_label(display: CountdownDisplay) -> String {
    match display {
        CountdownDisplay::Count(n) => n.to_string(),
        CountdownDisplay::Go => "Go!".to_string(),
    }
}

/// Title of the corner sound button
pub fn sound_toggle_title(sound_enabled: bool) -> &'static str {
    if sound_enabled {
        "Mute Sound"
    } else {
        "Unmute Sound"
    }
}

/// Horizontal pointer position as a percentage of the play area. The
/// simulation clamps it, so positions outside the area are passed through.
pub fn pointer_percent(client_x: f64, area_left: f64, area_width: f64) -> Option<f32> {
    if area_width > 0.0 && client_x.is_finite() {
        Some(((client_x - area_left) / area_width * 100.0) as f32)
    } else {
        None
    }
}

/// Which overlay panels are shown for a phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Panels {
    pub start: bool,
    pub countdown: bool,
    pub hud: bool,
    pub game_over: bool,
}

impl Panels {
    pub fn for_phase(phase: GamePhase) -> Self {
        Self {
            start: phase == GamePhase::Start,
            countdown: phase == GamePhase::Countdown,
            hud: matches!(phase, GamePhase::Countdown | GamePhase::Playing),
            game_over: phase == GamePhase::GameOver,
        }
    }
}
