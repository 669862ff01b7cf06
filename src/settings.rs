//! Player preferences
//!
//! Kept in memory for the lifetime of the page. Unlike `Tuning`, these can be
//! flipped at runtime (e.g. the sound toggle button).

use serde::Serialize;

/// Game settings/preferences
#[derive(Debug, Clone, Serialize)]
pub struct Settings {
    // === Audio ===
    /// Sound effects on/off (the corner toggle button)
    pub sound_enabled: bool,
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,

    // === Visual Effects ===
    /// Shake the play area when an obstacle is caught
    pub screen_shake: bool,

    // === Accessibility ===
    /// Reduced motion (suppresses shake)
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sound_enabled: true,
            master_volume: 0.8,
            screen_shake: true,
            reduced_motion: false,
        }
    }
}

impl Settings {
    /// Flip sound on/off, returning the new state
    pub fn toggle_sound(&mut self) -> bool {
        self.sound_enabled = !self.sound_enabled;
        log::info!(
            "Sound {}",
            if self.sound_enabled { "enabled" } else { "muted" }
        );
        self.sound_enabled
    }

    /// Set master volume (clamped to 0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Effective screen shake (respects reduced_motion)
    pub fn effective_screen_shake(&self) -> bool {
        self.screen_shake && !self.reduced_motion
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_sound() {
        let mut settings = Settings::default();
        assert!(settings.sound_enabled);
        assert!(!settings.toggle_sound());
        assert!(settings.toggle_sound());
    }

    #[test]
    fn test_reduced_motion_disables_shake() {
        let settings = Settings {
            reduced_motion: true,
            ..Default::default()
        };
        assert!(!settings.effective_screen_shake());
    }

    #[test]
    fn test_volume_clamped() {
        let mut settings = Settings::default();
        settings.set_master_volume(3.0);
        assert_eq!(settings.master_volume, 1.0);
    }
}
