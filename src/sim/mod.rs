//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep, integer positions
//! - No randomness
//! - Stable iteration order (bricks in grid order)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod drawable;
pub mod rect;
pub mod replay;
pub mod state;
pub mod tick;

pub use autopilot::Autopilot;
pub use collision::{Contacts, Probes, resolve};
pub use drawable::{Drawable, Sprite};
pub use rect::Rect;
pub use replay::{Script, ScriptCursor, ScriptedEvent, Snapshot, replay};
pub use state::{Ball, Brick, GamePhase, Paddle, Session};
pub use tick::{InputEvent, TickInput, tick};
