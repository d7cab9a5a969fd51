//! Session state and entity records
//!
//! The session owns every entity. Outside the simulation they are only
//! reachable through shared references.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::tick::InputEvent;
use crate::config::GameConfig;
use crate::error::Result;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ball is live
    Playing,
    /// Ball left through the bottom of the field
    GameOver,
}

/// The ball
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ball {
    /// Top-left corner of the bounding box
    pub pos: IVec2,
    pub size: i32,
    /// Direction of travel, each component in {-1, 0, 1}
    pub dir: IVec2,
}

impl Ball {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            pos: config.ball_start,
            size: config.ball_size,
            dir: config.ball_start_dir,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, IVec2::splat(self.size))
    }

    /// Move one step and bounce off the left, right and top walls.
    ///
    /// The bottom is open: falling out is detected by the collision pass.
    pub fn advance(&mut self, config: &GameConfig) {
        self.pos += self.dir * config.ball_speed;

        if self.pos.x <= 0 {
            self.dir.x = 1;
        }
        if self.pos.x >= config.field_width - self.size {
            self.dir.x = -1;
        }
        if self.pos.y <= 0 {
            self.dir.y = 1;
        }
    }
}

/// The player's paddle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paddle {
    /// Top-left corner; y never changes
    pub pos: IVec2,
    pub size: IVec2,
    /// Horizontal velocity in pixels per tick
    pub x_vel: i32,
}

impl Paddle {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            pos: IVec2::new(config.paddle_start_x, config.paddle_y),
            size: IVec2::new(config.paddle_width, config.paddle_height),
            x_vel: 0,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    /// Set velocity from a key event.
    ///
    /// Either release stops the paddle, even if the other key is still held.
    pub fn apply_input(&mut self, event: InputEvent, speed: i32) {
        self.x_vel = match event {
            InputEvent::MoveLeftStart => -speed,
            InputEvent::MoveRightStart => speed,
            InputEvent::MoveLeftStop | InputEvent::MoveRightStop => 0,
        };
    }

    /// Move one step, clamped to the field
    pub fn advance(&mut self, config: &GameConfig) {
        self.pos.x = (self.pos.x + self.x_vel).clamp(0, config.paddle_max_x());
    }
}

/// A destructible brick
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brick {
    pub pos: IVec2,
    pub size: IVec2,
    destroyed: bool,
}

impl Brick {
    pub fn new(pos: IVec2, size: IVec2) -> Self {
        Self {
            pos,
            size,
            destroyed: false,
        }
    }

    /// Lay out the brick grid in row-major order (row 0 first)
    pub fn grid(config: &GameConfig) -> Vec<Brick> {
        let size = IVec2::new(config.brick_width, config.brick_height);
        let mut bricks = Vec::with_capacity(config.brick_count());
        for row in 0..config.brick_rows as i32 {
            for col in 0..config.brick_columns as i32 {
                let pos = config.brick_offset + IVec2::new(col, row) * config.brick_spacing;
                bricks.push(Brick::new(pos, size));
            }
        }
        bricks
    }

    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    #[inline]
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Destruction is permanent for the rest of the session
    pub fn destroy(&mut self) {
        self.destroyed = true;
    }
}

/// One game from serve to game over.
///
/// Only built through [`Session::with_config`] so the config is always validated.
#[derive(Debug, Clone)]
pub struct Session {
    pub(crate) config: GameConfig,
    pub(crate) ball: Ball,
    pub(crate) paddle: Paddle,
    /// Row-major, never reordered
    pub(crate) bricks: Vec<Brick>,
    pub(crate) phase: GamePhase,
    /// Ticks simulated so far
    pub(crate) time_ticks: u64,
}

impl Default for Session {
    fn default() -> Self {
        Self::build(GameConfig::default())
    }
}

impl Session {
    /// Start a session on the classic 400×300 field
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session with a custom layout
    pub fn with_config(config: GameConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: GameConfig) -> Self {
        let session = Self {
            ball: Ball::new(&config),
            paddle: Paddle::new(&config),
            bricks: Brick::grid(&config),
            phase: GamePhase::Playing,
            time_ticks: 0,
            config,
        };
        log::info!(
            "New session: field {}x{}, {} bricks",
            session.config.field_width,
            session.config.field_height,
            session.bricks.len()
        );
        session
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn paddle(&self) -> &Paddle {
        &self.paddle
    }

    pub fn bricks(&self) -> &[Brick] {
        &self.bricks
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_in_play(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }

    pub fn bricks_remaining(&self) -> usize {
        self.bricks.iter().filter(|b| !b.is_destroyed()).count()
    }
}
