//! Catch detection and per-item fate resolution
//!
//! Each tick every item gets a candidate position, then exactly one fate:
//! caught, missed (fell off the bottom) or still falling. The resolver is
//! pure: it reads a frozen `CatchContext` and returns the surviving items
//! together with the stat deltas and events it wants applied.

use glam::Vec2;

use super::state::{FallingItem, GameEvent, GameState, ItemKind, PlayArea, StatDelta};

/// Axis-aligned box in play-area pixels (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn from_xywh(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            max: Vec2::new(x + w, y + h),
        }
    }

    /// Open-interval overlap on the horizontal axis (touching edges miss)
    pub fn overlaps_x(&self, other: &Rect) -> bool {
        self.min.x < other.max.x && self.max.x > other.min.x
    }

    /// Open-interval overlap with the vertical span `[top, bottom]`
    pub fn overlaps_y(&self, top: f32, bottom: f32) -> bool {
        self.max.y > top && self.min.y < bottom
    }
}

/// Read-only tick input for the resolver, captured before any item moves
#[derive(Debug, Clone, Copy)]
pub struct CatchContext {
    pub area: PlayArea,
    /// Catcher box at the start of the tick
    pub catcher: Rect,
    /// Vertical catch band (px from top)
    pub band_top: f32,
    pub band_bottom: f32,
    pub item_size: f32,
    pub px_per_speed: f32,
    /// Elapsed time in nominal frames
    pub scale: f32,
}

impl CatchContext {
    pub fn snapshot(state: &GameState, scale: f32) -> Self {
        let t = &state.tuning;
        let area = state.area;
        let catcher_top = area.height - t.catcher_bottom_offset - t.catcher_size;
        let catcher_left = state.catcher.center_px(&area) - t.catcher_size / 2.0;
        Self {
            area,
            catcher: Rect::from_xywh(catcher_left, catcher_top, t.catcher_size, t.catcher_size),
            band_top: area.height - t.catch_band_top,
            band_bottom: area.height - t.catch_band_bottom,
            item_size: t.item_size,
            px_per_speed: t.fall_px_per_speed,
            scale,
        }
    }

    /// Item box at a candidate top position
    pub fn item_box(&self, item: &FallingItem, top: f32) -> Rect {
        Rect::from_xywh(item.left_px(&self.area), top, self.item_size, self.item_size)
    }
}

/// What happens to an item this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fate {
    Caught,
    Missed,
    Falling,
}

/// Decide an item's fate from its candidate box. Precedence: catch, then
/// off-screen, then keep falling.
///
/// The vertical checks use the span swept since `from_top`, so an item
/// moving more than the band height in one step is still caught.
pub fn item_fate(item_box: &Rect, from_top: f32, ctx: &CatchContext) -> Fate {
    let swept = Rect {
        min: Vec2::new(item_box.min.x, from_top.min(item_box.min.y)),
        max: item_box.max,
    };
    let aligned = item_box.overlaps_x(&ctx.catcher);
    let touches_catcher = swept.overlaps_y(ctx.catcher.min.y, ctx.catcher.max.y);
    let in_band = swept.overlaps_y(ctx.band_top, ctx.band_bottom);

    if aligned && touches_catcher && in_band {
        Fate::Caught
    } else if item_box.min.y >= ctx.area.height {
        Fate::Missed
    } else {
        Fate::Falling
    }
}

/// Output of one resolver pass
#[derive(Debug, Clone, Default)]
pub struct Resolution {
    pub survivors: Vec<FallingItem>,
    pub deltas: Vec<StatDelta>,
    pub events: Vec<GameEvent>,
    pub missed: u32,
}

/// Advance every item and resolve catches against the frozen context
pub fn resolve(items: Vec<FallingItem>, ctx: &CatchContext) -> Resolution {
    let mut out = Resolution {
        survivors: Vec::with_capacity(items.len()),
        ..Default::default()
    };

    for mut item in items {
        let top = item.advanced_top(ctx.px_per_speed, ctx.scale);
        let item_box = ctx.item_box(&item, top);

        match item_fate(&item_box, item.top, ctx) {
            Fate::Caught => match item.kind {
                ItemKind::Logo { .. } => {
                    // Logo kinds always resolve in the catalog
                    let Some(logo) = item.kind.logo() else { continue };
                    out.deltas.push(StatDelta::Points(logo.points));
                    out.events.push(GameEvent::Catch {
                        item_id: item.id,
                        label: logo.tooltip,
                        points: logo.points,
                        x: item_box.min.x,
                        // A swept catch can land below the catcher top
                        y: item_box.min.y.min(ctx.catcher.min.y),
                    });
                }
                ItemKind::Obstacle => {
                    out.deltas.push(StatDelta::LoseLife);
                    out.events.push(GameEvent::Hit { item_id: item.id });
                }
            },
            // No penalty for letting anything fall through
            Fate::Missed => out.missed += 1,
            Fate::Falling => {
                item.top = top;
                out.survivors.push(item);
            }
        }
    }

    out
}
