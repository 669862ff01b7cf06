//! Per-frame snapshot handed to the presentation layer

use serde::Serialize;

use super::state::{GamePhase, GameState};
use super::timer::CountdownDisplay;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemView {
    pub id: u32,
    pub hazard: bool,
    /// Logo name, `None` for obstacles
    pub logo: Option<&'static str>,
    pub left_percent: f32,
    pub top: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TooltipView {
    pub text: &'static str,
    pub x: f32,
    pub y: f32,
}

/// Everything the view layer draws in one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameView {
    pub phase: GamePhase,
    pub score: u64,
    pub lives: u8,
    pub initial_lives: u8,
    pub difficulty: f32,
    pub catcher_percent: f32,
    pub items: Vec<ItemView>,
    pub tooltip: Option<TooltipView>,
    pub shaking: bool,
    pub countdown: Option<CountdownDisplay>,
}

impl GameState {
    /// Snapshot the state for drawing. Items are ordered top-to-bottom so
    /// lower (closer) items draw last.
    pub fn view(&self) -> FrameView {
        let mut items: Vec<ItemView> = self
            .items
            .iter()
            .map(|item| ItemView {
                id: item.id,
                hazard: item.kind.is_hazard(),
                logo: item.kind.logo().map(|l| l.name),
                left_percent: item.left_percent,
                top: item.top,
            })
            .collect();
        items.sort_by(|a, b| a.top.total_cmp(&b.top).then(a.id.cmp(&b.id)));

        FrameView {
            phase: self.phase,
            score: self.score(),
            lives: self.lives(),
            initial_lives: self.tuning.initial_lives,
            difficulty: self.difficulty(),
            catcher_percent: self.catcher.x_percent,
            items,
            tooltip: self.feedback.tooltip().map(|t| TooltipView {
                text: t.text,
                x: t.x,
                y: t.y,
            }),
            shaking: self.feedback.shaking(),
            countdown: self.schedule.countdown().map(|c| c.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::sim::state::{FallingItem, ItemKind};
    use crate::sim::GameState;
    use crate::tuning::Tuning;

    #[test]
    fn test_view_orders_items_top_down() {
        let mut state = GameState::new(1, Tuning::default());
        for (id, top) in [(1, 300.0), (2, -60.0), (3, 120.0)] {
            state.items.push(FallingItem {
                id,
                kind: ItemKind::Obstacle,
                top,
                left_percent: 10.0,
                speed: 1.0,
            });
        }
        let ids: Vec<u32> = state.view().items.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn test_view_serializes() {
        let state = GameState::new(1, Tuning::default());
        let json = serde_json::to_string(&state.view()).unwrap();
        assert!(json.contains("\"phase\":\"Start\""));
    }
}
