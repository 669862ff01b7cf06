//! Turns a frame snapshot into triangles

use glam::Vec2;

use super::shapes;
use super::vertex::{Vertex, colors};
use crate::catalog::LOGOS;
use crate::sim::{FrameView, GamePhase, PlayArea};
use crate::tuning::Tuning;

/// Peak horizontal shake displacement (px)
const SHAKE_AMPLITUDE: f32 = 6.0;

/// Build the play-area geometry for one frame
pub fn build(view: &FrameView, area: &PlayArea, tuning: &Tuning) -> Vec<Vertex> {
    let mut vertices = Vec::new();

    // Catch band hint
    vertices.extend(shapes::rect(
        Vec2::new(0.0, area.height - tuning.catch_band_top),
        Vec2::new(area.width, area.height - tuning.catch_band_bottom),
        colors::CATCH_BAND,
    ));

    let size = tuning.item_size;
    for item in &view.items {
        let min = Vec2::new(item.left_percent / 100.0 * area.width, item.top);
        let center = min + Vec2::splat(size / 2.0);
        if item.hazard {
            vertices.extend(shapes::rect(min, min + Vec2::splat(size), colors::OBSTACLE));
            vertices.extend(shapes::cross(
                center,
                size * 0.45,
                size * 0.12,
                colors::OBSTACLE_MARK,
            ));
        } else {
            let index = item
                .logo
                .and_then(|name| LOGOS.iter().position(|l| l.name == name))
                .unwrap_or(0);
            vertices.extend(shapes::rect(min, min + Vec2::splat(size), colors::TILE));
            vertices.extend(shapes::circle(center, size * 0.35, colors::logo(index), 24));
        }
    }

    if matches!(view.phase, GamePhase::Countdown | GamePhase::Playing) {
        vertices.extend(catcher(view.catcher_percent, area, tuning));
    }

    vertices
}

fn catcher(x_percent: f32, area: &PlayArea, tuning: &Tuning) -> Vec<Vertex> {
    let size = tuning.catcher_size;
    let half = size / 2.0;
    let top = area.height - tuning.catcher_bottom_offset - size;
    let center = Vec2::new(x_percent / 100.0 * area.width, top + half);

    let mut vertices = shapes::circle(center, half * 0.8, colors::CATCHER, 32);
    vertices.extend(shapes::bowl(center, half * 0.8, half, colors::CATCHER_RIM, 16));
    vertices
}

/// Horizontal shake offset at `time_ms` (px)
pub fn shake_offset(shaking: bool, time_ms: f64) -> Vec2 {
    if !shaking {
        return Vec2::ZERO;
    }
    let phase = (time_ms * 0.09).sin() as f32;
    Vec2::new(phase * SHAKE_AMPLITUDE, 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{FallingItem, GameState, ItemKind};

    fn playing() -> GameState {
        let mut state = GameState::new(1, Tuning::default());
        state.set_play_area(500.0, 800.0);
        state.begin_play();
        state
    }

    #[test]
    fn test_catcher_drawn_only_in_play() {
        let start = GameState::new(1, Tuning::default());
        let idle = build(&start.view(), &start.area, &start.tuning);
        let state = playing();
        let active = build(&state.view(), &state.area, &state.tuning);
        assert!(active.len() > idle.len());
    }

    #[test]
    fn test_catcher_sits_above_bottom_offset() {
        let state = playing();
        let verts = catcher(state.catcher.x_percent, &state.area, &state.tuning);
        let lowest = verts.iter().map(|v| v.position[1]).fold(f32::MIN, f32::max);
        assert!(lowest <= 800.0 - 20.0 + 1e-3);
    }

    #[test]
    fn test_items_use_kind_colors() {
        let mut state = playing();
        state.items.push(FallingItem {
            id: 1,
            kind: ItemKind::Obstacle,
            top: 100.0,
            left_percent: 10.0,
            speed: 1.5,
        });
        let verts = build(&state.view(), &state.area, &state.tuning);
        assert!(verts.iter().any(|v| v.color == colors::OBSTACLE));
        assert!(!verts.iter().any(|v| v.color == colors::TILE));
    }

    #[test]
    fn test_shake_offset() {
        assert_eq!(shake_offset(false, 1234.0), Vec2::ZERO);
        let offset = shake_offset(true, 20.0);
        assert!(offset.x.abs() <= SHAKE_AMPLITUDE && offset.y == 0.0);
    }
}
