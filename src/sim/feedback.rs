//! Transient feedback: catch tooltip and hit shake
//!
//! Driven purely by `GameEvent`s after the resolver has run, so the
//! simulation itself never touches presentation state.

use super::state::GameEvent;
use crate::tuning::Tuning;

/// Tooltip shown where a logo was caught
#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    pub text: &'static str,
    /// Play-area px
    pub x: f32,
    pub y: f32,
    remaining_ms: f64,
}

#[derive(Debug, Clone, Default)]
pub struct Feedback {
    tooltip: Option<Tooltip>,
    shake_ms: f64,
}

impl Feedback {
    /// React to an event. A new tooltip replaces any visible one.
    pub fn apply(&mut self, event: &GameEvent, tuning: &Tuning) {
        match *event {
            GameEvent::Catch { label, x, y, .. } => {
                self.tooltip = Some(Tooltip {
                    text: label,
                    x,
                    y: y - tuning.tooltip_lift,
                    remaining_ms: tuning.tooltip_ms,
                });
            }
            GameEvent::Hit { .. } => self.shake_ms = tuning.shake_ms,
            GameEvent::GameOver { .. } => {}
        }
    }

    /// Count down auto-dismiss timers
    pub fn advance(&mut self, dt_ms: f64) {
        if let Some(tooltip) = &mut self.tooltip {
            tooltip.remaining_ms -= dt_ms;
            if tooltip.remaining_ms <= 0.0 {
                self.tooltip = None;
            }
        }
        self.shake_ms = (self.shake_ms - dt_ms).max(0.0);
    }

    pub fn tooltip(&self) -> Option<&Tooltip> {
        self.tooltip.as_ref()
    }

    pub fn shaking(&self) -> bool {
        self.shake_ms > 0.0
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catch(label: &'static str) -> GameEvent {
        GameEvent::Catch {
            item_id: 1,
            label,
            points: 10,
            x: 100.0,
            y: 500.0,
        }
    }

    #[test]
    fn test_tooltip_dismissed_after_duration() {
        let tuning = Tuning::default();
        let mut feedback = Feedback::default();
        feedback.apply(&catch("a"), &tuning);
        let tooltip = feedback.tooltip().unwrap();
        assert_eq!((tooltip.x, tooltip.y), (100.0, 460.0));

        feedback.advance(1999.0);
        assert!(feedback.tooltip().is_some());
        feedback.advance(1.0);
        assert!(feedback.tooltip().is_none());
    }

    #[test]
    fn test_new_tooltip_supersedes_and_restarts() {
        let tuning = Tuning::default();
        let mut feedback = Feedback::default();
        feedback.apply(&catch("first"), &tuning);
        feedback.advance(1500.0);
        feedback.apply(&catch("second"), &tuning);
        feedback.advance(1500.0);
        assert_eq!(feedback.tooltip().unwrap().text, "second");
    }

    #[test]
    fn test_shake_lasts_300ms() {
        let tuning = Tuning::default();
        let mut feedback = Feedback::default();
        feedback.apply(&GameEvent::Hit { item_id: 2 }, &tuning);
        assert!(feedback.shaking());
        feedback.advance(299.0);
        assert!(feedback.shaking());
        feedback.advance(1.0);
        assert!(!feedback.shaking());
    }
}
