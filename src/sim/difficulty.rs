//! Difficulty ramp
//!
//! The multiplier scales fall speed of newly spawned items and shortens the
//! spawn interval. It only ever goes up during a session.

use crate::round_centi;

/// Multiplier after one ramp step, kept at two decimals so repeated float
/// additions don't drift (1.0 + 0.2 * 3 shows as 1.6, not 1.6000001)
pub fn ramp(multiplier: f32, increment: f32) -> f32 {
    round_centi(multiplier + increment.max(0.0)).max(multiplier)
}

/// Spawn interval at the given multiplier: faster play, more frequent spawns
pub fn spawn_interval(base_ms: f64, multiplier: f32) -> f64 {
    base_ms / (multiplier.max(f32::EPSILON) as f64)
}

/// Fall speed for a new item
pub fn spawn_speed(base_speed: f32, multiplier: f32) -> f32 {
    base_speed * multiplier
}
