//! Breakout - a ball, a paddle and a wall of bricks
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, collisions, session state)
//! - `config`: Playfield layout and speeds, loadable from JSON
//! - `renderer`: Read-only renderers over the simulation's drawables
//! - `error`: Failures at the edges (config files, replay scripts)

pub mod config;
pub mod error;
pub mod renderer;
pub mod sim;

pub use config::GameConfig;
pub use error::{Error, Result};
pub use sim::{GamePhase, InputEvent, Session, TickInput, tick};

/// Default layout constants (all in pixels unless noted)
pub mod consts {
    /// Playfield
    pub const FIELD_WIDTH: i32 = 400;
    pub const FIELD_HEIGHT: i32 = 300;

    /// Ball defaults
    pub const BALL_SIZE: i32 = 10;
    /// Pixels per tick along each axis
    pub const BALL_SPEED: i32 = 1;
    pub const BALL_START_X: i32 = 200;
    pub const BALL_START_Y: i32 = 150;

    /// Paddle defaults
    pub const PADDLE_WIDTH: i32 = 60;
    pub const PADDLE_HEIGHT: i32 = 10;
    pub const PADDLE_SPEED: i32 = 2;
    pub const PADDLE_START_X: i32 = 200;
    pub const PADDLE_Y: i32 = 260;

    /// Brick grid: 6 columns x 5 rows
    pub const BRICK_COLUMNS: u32 = 6;
    pub const BRICK_ROWS: u32 = 5;
    pub const BRICK_WIDTH: i32 = 50;
    pub const BRICK_HEIGHT: i32 = 10;
    pub const BRICK_SPACING_X: i32 = 60;
    pub const BRICK_SPACING_Y: i32 = 20;
    pub const BRICK_OFFSET_X: i32 = 30;
    pub const BRICK_OFFSET_Y: i32 = 50;

    /// Driver cadence (milliseconds between ticks)
    pub const TICK_INTERVAL_MS: u64 = 10;
}
