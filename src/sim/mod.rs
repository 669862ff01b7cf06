//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time only arrives through `tick`'s elapsed argument
//! - Seeded RNG only
//! - No rendering, audio or platform dependencies

pub mod collision;
pub mod difficulty;
pub mod feedback;
pub mod spawn;
pub mod state;
pub mod tick;
pub mod timer;
pub mod view;

pub use collision::{CatchContext, Fate, Rect, Resolution, item_fate, resolve};
pub use feedback::{Feedback, Tooltip};
pub use spawn::{roll_item, spawn};
pub use state::{
    Catcher, FallingItem, GameEvent, GamePhase, GameState, ItemKind, PlayArea, PlayClock,
    Schedule, StatDelta,
};
pub use tick::{TickInput, tick};
pub use timer::{Countdown, CountdownDisplay, IntervalTimer};
pub use view::{FrameView, ItemView, TooltipView};
