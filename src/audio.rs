//! Audio system using Web Audio API
//!
//! Procedurally generated sound effects - no external files needed!
//! Natively the manager is a silent stand-in so the headless runner can
//! drive the same event plumbing.

use crate::catalog::sounds;
use crate::sim::GameEvent;

/// Sound effect types, one per feedback event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Logo caught
    Catch,
    /// Obstacle caught
    Hit,
    /// Lives ran out
    GameOver,
}

impl SoundEffect {
    /// Sound for a simulation event
    pub fn for_event(event: &GameEvent) -> Self {
        match event {
            GameEvent::Catch { .. } => SoundEffect::Catch,
            GameEvent::Hit { .. } => SoundEffect::Hit,
            GameEvent::GameOver { .. } => SoundEffect::GameOver,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SoundEffect::Catch => sounds::CATCH,
            SoundEffect::Hit => sounds::HIT,
            SoundEffect::GameOver => sounds::GAME_OVER,
        }
    }
}

/// Volume a sound should play at given the player's preferences
pub fn effective_volume(settings: &crate::Settings) -> f32 {
    if settings.sound_enabled {
        settings.master_volume.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::AudioManager;

#[cfg(not(target_arch = "wasm32"))]
pub use native::AudioManager;

#[cfg(target_arch = "wasm32")]
mod web {
    use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

    use super::SoundEffect;

    /// Audio manager for the game
    pub struct AudioManager {
        ctx: Option<AudioContext>,
        volume: f32,
    }

    impl Default for AudioManager {
        fn default() -> Self {
            Self::new()
        }
    }

    impl AudioManager {
        pub fn new() -> Self {
            // Try to create audio context (may fail if not in secure context)
            let ctx = AudioContext::new().ok();
            if ctx.is_none() {
                log::warn!("Failed to create AudioContext - audio disabled");
            }
            Self { ctx, volume: 0.8 }
        }

        /// Resume audio context (required after user gesture)
        pub fn unlock(&self) {
            let Some(ctx) = &self.ctx else { return };
            if ctx.state() == web_sys::AudioContextState::Running {
                return;
            }
            if let Err(err) = ctx.resume() {
                log::warn!("Audio unlock failed: {:?}", err);
            }
        }

        /// Apply the effective volume from settings (0 = muted)
        pub fn set_volume(&mut self, vol: f32) {
            self.volume = vol.clamp(0.0, 1.0);
        }

        /// Play a sound effect
        pub fn play(&self, effect: SoundEffect) {
            let vol = self.volume;
            if vol <= 0.0 {
                return;
            }

            let Some(ctx) = &self.ctx else { return };

            // Resume context if suspended (browsers require user gesture)
            if ctx.state() == web_sys::AudioContextState::Suspended {
                let _ = ctx.resume();
            }

            match effect {
                SoundEffect::Catch => self.play_catch(ctx, vol),
                SoundEffect::Hit => self.play_hit(ctx, vol),
                SoundEffect::GameOver => self.play_game_over(ctx, vol),
            }
        }

        // === Sound generators ===

        /// Create an oscillator with gain envelope
        fn create_osc(
            &self,
            ctx: &AudioContext,
            freq: f32,
            osc_type: OscillatorType,
        ) -> Option<(OscillatorNode, GainNode)> {
            let osc = ctx.create_oscillator().ok()?;
            let gain = ctx.create_gain().ok()?;

            osc.set_type(osc_type);
            osc.frequency().set_value(freq);
            osc.connect_with_audio_node(&gain).ok()?;
            gain.connect_with_audio_node(&ctx.destination()).ok()?;

            Some((osc, gain))
        }

        /// Catch - bright two-note chime
        fn play_catch(&self, ctx: &AudioContext, vol: f32) {
            for (i, freq) in [880.0, 1320.0].iter().enumerate() {
                let delay = i as f64 * 0.06;
                let Some((osc, gain)) = self.create_osc(ctx, *freq, OscillatorType::Sine) else {
                    log::warn!("Catch sound unavailable");
                    return;
                };
                let t = ctx.current_time() + delay;
                gain.gain().set_value_at_time(vol * 0.3, t).ok();
                gain.gain()
                    .exponential_ramp_to_value_at_time(0.01, t + 0.15)
                    .ok();
                osc.start_with_when(t).ok();
                osc.stop_with_when(t + 0.2).ok();
            }
        }

        /// Hit - low buzzy thud
        fn play_hit(&self, ctx: &AudioContext, vol: f32) {
            let t = ctx.current_time();

            if let Some((osc, gain)) = self.create_osc(ctx, 140.0, OscillatorType::Sawtooth) {
                gain.gain().set_value_at_time(vol * 0.4, t).ok();
                gain.gain()
                    .exponential_ramp_to_value_at_time(0.01, t + 0.25)
                    .ok();
                osc.frequency().set_value_at_time(140.0, t).ok();
                osc.frequency()
                    .exponential_ramp_to_value_at_time(50.0, t + 0.25)
                    .ok();
                osc.start().ok();
                osc.stop_with_when(t + 0.3).ok();
            } else {
                log::warn!("Hit sound unavailable");
            }

            // Sub thump
            if let Some((osc, gain)) = self.create_osc(ctx, 55.0, OscillatorType::Sine) {
                gain.gain().set_value_at_time(vol * 0.35, t).ok();
                gain.gain()
                    .exponential_ramp_to_value_at_time(0.01, t + 0.15)
                    .ok();
                osc.start().ok();
                osc.stop_with_when(t + 0.2).ok();
            }
        }

        /// Game over - sad descending
        fn play_game_over(&self, ctx: &AudioContext, vol: f32) {
            for (i, freq) in [400.0, 350.0, 300.0, 200.0].iter().enumerate() {
                let delay = i as f64 * 0.2;
                if let Some((osc, gain)) = self.create_osc(ctx, *freq, OscillatorType::Triangle) {
                    let t = ctx.current_time() + delay;
                    gain.gain().set_value_at_time(vol * 0.3, t).ok();
                    gain.gain()
                        .exponential_ramp_to_value_at_time(0.01, t + 0.3)
                        .ok();
                    osc.start_with_when(t).ok();
                    osc.stop_with_when(t + 0.4).ok();
                }
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use super::SoundEffect;

    /// Silent audio manager: records what would have played
    #[derive(Debug, Default)]
    pub struct AudioManager {
        volume: f32,
        played: Vec<SoundEffect>,
    }

    impl AudioManager {
        pub fn new() -> Self {
            Self {
                volume: 0.8,
                played: Vec::new(),
            }
        }

        pub fn unlock(&self) {}

        pub fn set_volume(&mut self, vol: f32) {
            self.volume = vol.clamp(0.0, 1.0);
        }

        pub fn play(&mut self, effect: SoundEffect) {
            if self.volume > 0.0 {
                log::debug!("Sound: {}", effect.name());
                self.played.push(effect);
            }
        }

        /// Sounds played so far
        pub fn played(&self) -> &[SoundEffect] {
            &self.played
        }
    }
}
