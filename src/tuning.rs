//! Data-driven game balance
//!
//! Every gameplay constant lives here. A `Tuning` is fixed for the lifetime
//! of the page/process: it is read once at startup and never mutated.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a tuning block was rejected
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("tuning is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("tuning field `{field}` {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Session ===
    pub initial_lives: u8,

    // === Falling items ===
    /// Base fall speed of logos (speed units)
    pub logo_fall_speed: f32,
    /// Base fall speed of obstacles (speed units)
    pub obstacle_fall_speed: f32,
    /// Pixels one speed unit covers per nominal frame
    pub fall_px_per_speed: f32,
    /// Chance that a spawn is an obstacle
    pub hazard_probability: f32,
    /// Spawn interval at multiplier 1.0
    pub spawn_interval_ms: f64,

    // === Difficulty ramp ===
    pub speed_increase_interval_ms: f64,
    pub speed_increase_amount: f32,

    // === Geometry (px) ===
    pub item_size: f32,
    pub catcher_size: f32,
    /// Gap between catcher bottom edge and play-area bottom
    pub catcher_bottom_offset: f32,
    /// Catch band top, measured up from the play-area bottom
    pub catch_band_top: f32,
    /// Catch band bottom, measured up from the play-area bottom
    pub catch_band_bottom: f32,

    // === Input ===
    /// Arrow key step, percent of play-area width
    pub keyboard_step_percent: f32,

    // === Flow & feedback timing ===
    pub countdown_from: u8,
    pub countdown_step_ms: f64,
    pub go_flash_ms: f64,
    pub tooltip_ms: f64,
    /// Tooltip sits this far above the caught item
    pub tooltip_lift: f32,
    pub shake_ms: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            initial_lives: 3,

            logo_fall_speed: 1.0,
            obstacle_fall_speed: 1.5,
            fall_px_per_speed: 2.0,
            hazard_probability: 0.2,
            spawn_interval_ms: 2000.0,

            speed_increase_interval_ms: 10_000.0,
            speed_increase_amount: 0.2,

            item_size: 60.0,
            catcher_size: 80.0,
            catcher_bottom_offset: 20.0,
            catch_band_top: 140.0,
            catch_band_bottom: 40.0,

            keyboard_step_percent: 5.0,

            countdown_from: 3,
            countdown_step_ms: 1000.0,
            go_flash_ms: 500.0,
            tooltip_ms: 2000.0,
            tooltip_lift: 40.0,
            shake_ms: 300.0,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) JSON tuning block and validate it.
    /// Missing fields take their default.
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Parse a tuning block, falling back to defaults (with a warning) if it
    /// is missing or rejected.
    pub fn from_json_or_default(json: Option<&str>) -> Self {
        match json.map(Self::from_json) {
            Some(Ok(tuning)) => {
                log::info!("Loaded custom tuning");
                tuning
            }
            Some(Err(e)) => {
                log::warn!("Ignoring tuning: {e}");
                Self::default()
            }
            None => Self::default(),
        }
    }

    pub fn validate(&self) -> Result<(), TuningError> {
        fn invalid(field: &'static str, reason: &'static str) -> TuningError {
            TuningError::Invalid { field, reason }
        }

        if self.initial_lives == 0 {
            return Err(invalid("initial_lives", "must be at least 1"));
        }
        let positive = [
            ("logo_fall_speed", self.logo_fall_speed as f64),
            ("obstacle_fall_speed", self.obstacle_fall_speed as f64),
            ("fall_px_per_speed", self.fall_px_per_speed as f64),
            ("spawn_interval_ms", self.spawn_interval_ms),
            ("speed_increase_interval_ms", self.speed_increase_interval_ms),
            ("item_size", self.item_size as f64),
            ("catcher_size", self.catcher_size as f64),
            ("countdown_step_ms", self.countdown_step_ms),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(invalid(field, "must be a positive number"));
            }
        }
        if !(0.0..=1.0).contains(&self.hazard_probability) {
            return Err(invalid("hazard_probability", "must be within [0, 1]"));
        }
        if self.speed_increase_amount.is_nan() || self.speed_increase_amount < 0.0 {
            return Err(invalid("speed_increase_amount", "must not be negative"));
        }
        if self.catch_band_top <= self.catch_band_bottom {
            return Err(invalid("catch_band_top", "must lie above catch_band_bottom"));
        }
        if self.keyboard_step_percent <= 0.0 {
            return Err(invalid("keyboard_step_percent", "must be a positive number"));
        }
        Ok(())
    }

    /// Base fall speed for an item kind
    pub fn base_speed(&self, hazard: bool) -> f32 {
        if hazard {
            self.obstacle_fall_speed
        } else {
            self.logo_fall_speed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(Tuning::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "initial_lives": 5 }"#).unwrap();
        assert_eq!(tuning.initial_lives, 5);
        assert_eq!(tuning.spawn_interval_ms, 2000.0);
    }

    #[test]
    fn test_rejects_bad_probability() {
        let err = Tuning::from_json(r#"{ "hazard_probability": 1.5 }"#).unwrap_err();
        assert!(matches!(
            err,
            TuningError::Invalid {
                field: "hazard_probability",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_inverted_catch_band() {
        let json = r#"{ "catch_band_top": 10.0, "catch_band_bottom": 40.0 }"#;
        assert!(Tuning::from_json(json).is_err());
    }

    #[test]
    fn test_garbage_falls_back_to_default() {
        let tuning = Tuning::from_json_or_default(Some("not json"));
        assert_eq!(tuning, Tuning::default());
        assert!(matches!(
            Tuning::from_json("not json"),
            Err(TuningError::Parse(_))
        ));
    }
}
