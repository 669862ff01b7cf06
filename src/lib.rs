//! Logo Catcher - catch falling AI logos, dodge the obstacles
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, falling, catching, screen flow)
//! - `catalog`: Static item data (logos, point values, sound names)
//! - `tuning`: Data-driven game balance, fixed at startup
//! - `settings`: Player preferences (sound, shake)
//! - `renderer`: WebGPU rendering of the play area
//! - `audio`: Procedural sound effects for game events
//! - `ui`: Text and labels for the DOM overlay
//! - `headless`: Seeded sessions without a browser (native only)

pub mod audio;
pub mod catalog;
#[cfg(not(target_arch = "wasm32"))]
pub mod headless;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use settings::Settings;
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Nominal frame duration the fall speeds are expressed against (60 Hz)
    pub const FRAME_MS: f64 = 1000.0 / 60.0;
    /// Longest frame gap items move through in one step (tab switches, hitches)
    pub const MAX_FRAME_MS: f64 = 100.0;

    /// Play area size used until the host reports the real one
    pub const DEFAULT_AREA_WIDTH: f32 = 512.0;
    pub const DEFAULT_AREA_HEIGHT: f32 = 800.0;

    /// Catcher rest position, as a percentage of play-area width
    pub const CATCHER_START_PERCENT: f32 = 50.0;
}

/// Wall-clock time a measured frame gap stands for.
///
/// Missing or nonsensical gaps count as one nominal frame so the fall stays
/// strictly monotonic. Long gaps pass through unchanged: timers follow the
/// real clock however slow the frames are.
#[inline]
pub fn frame_gap_ms(elapsed_ms: f64) -> f64 {
    if elapsed_ms.is_finite() && elapsed_ms > 0.0 {
        elapsed_ms
    } else {
        consts::FRAME_MS
    }
}

/// Frame gap used for motion, capped at `MAX_FRAME_MS` so a hitch cannot
/// carry items through the catcher in one step
#[inline]
pub fn clamp_frame_ms(elapsed_ms: f64) -> f64 {
    frame_gap_ms(elapsed_ms).min(consts::MAX_FRAME_MS)
}

/// Scale a measured frame gap into nominal-frame units of motion
#[inline]
pub fn tick_scale(elapsed_ms: f64) -> f32 {
    (clamp_frame_ms(elapsed_ms) / consts::FRAME_MS) as f32
}

/// Round to two decimals, the precision the difficulty multiplier is kept at
#[inline]
pub fn round_centi(value: f32) -> f32 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_scale_nominal() {
        assert!((tick_scale(consts::FRAME_MS) - 1.0).abs() < 1e-6);
        assert!((tick_scale(consts::FRAME_MS * 2.0) - 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_tick_scale_degenerate_gaps() {
        assert!((tick_scale(0.0) - 1.0).abs() < 1e-6);
        assert!((tick_scale(-5.0) - 1.0).abs() < 1e-6);
        assert!((tick_scale(f64::NAN) - 1.0).abs() < 1e-6);
        let clamped = tick_scale(10_000.0);
        assert!((clamped - (consts::MAX_FRAME_MS / consts::FRAME_MS) as f32).abs() < 1e-4);
    }

    #[test]
    fn test_frame_gap_is_never_capped() {
        assert_eq!(frame_gap_ms(250.0), 250.0);
        assert_eq!(frame_gap_ms(10_000.0), 10_000.0);
        assert_eq!(frame_gap_ms(f64::INFINITY), consts::FRAME_MS);
        assert_eq!(frame_gap_ms(0.0), consts::FRAME_MS);
        assert_eq!(clamp_frame_ms(250.0), consts::MAX_FRAME_MS);
    }

    #[test]
    fn test_round_centi() {
        assert_eq!(round_centi(1.0 + 0.2 + 0.2 + 0.2), 1.6);
        assert_eq!(round_centi(1.234), 1.23);
    }
}
