//! Game configuration
//!
//! Every playfield constant lives here so a session can be built from a JSON
//! file. Missing keys fall back to the classic 400×300 layout.

use std::fs;
use std::path::Path;

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Error, Result};

/// Largest accepted field width or height
pub const MAX_FIELD_EXTENT: i32 = 1 << 20;
/// Largest accepted brick grid
pub const MAX_BRICKS: usize = 4096;

/// Playfield geometry, entity sizes and speeds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Playfield ===
    pub field_width: i32,
    pub field_height: i32,

    // === Ball ===
    pub ball_size: i32,
    /// Pixels moved per tick along each axis
    pub ball_speed: i32,
    pub ball_start: IVec2,
    /// Initial direction, each component in {-1, 0, 1}
    pub ball_start_dir: IVec2,

    // === Paddle ===
    pub paddle_width: i32,
    pub paddle_height: i32,
    pub paddle_speed: i32,
    pub paddle_start_x: i32,
    pub paddle_y: i32,

    // === Bricks ===
    pub brick_columns: u32,
    pub brick_rows: u32,
    pub brick_width: i32,
    pub brick_height: i32,
    /// Distance between the top-left corners of neighbouring bricks
    pub brick_spacing: IVec2,
    /// Top-left corner of brick 0
    pub brick_offset: IVec2,

    // === Driver ===
    /// Wall-clock delay between ticks for realtime drivers
    pub tick_interval_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,

            ball_size: BALL_SIZE,
            ball_speed: BALL_SPEED,
            ball_start: IVec2::new(BALL_START_X, BALL_START_Y),
            ball_start_dir: IVec2::new(1, -1),

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_speed: PADDLE_SPEED,
            paddle_start_x: PADDLE_START_X,
            paddle_y: PADDLE_Y,

            brick_columns: BRICK_COLUMNS,
            brick_rows: BRICK_ROWS,
            brick_width: BRICK_WIDTH,
            brick_height: BRICK_HEIGHT,
            brick_spacing: IVec2::new(BRICK_SPACING_X, BRICK_SPACING_Y),
            brick_offset: IVec2::new(BRICK_OFFSET_X, BRICK_OFFSET_Y),

            tick_interval_ms: TICK_INTERVAL_MS,
        }
    }
}

impl GameConfig {
    /// Number of bricks in the grid
    pub fn brick_count(&self) -> usize {
        self.brick_columns as usize * self.brick_rows as usize
    }

    /// Rightmost x the paddle may occupy
    #[inline]
    pub fn paddle_max_x(&self) -> i32 {
        self.field_width - self.paddle_width
    }

    /// Check that the values describe a playable field.
    ///
    /// A config that passes keeps every position the simulation can reach
    /// well inside `i32`, so ticking never overflows.
    pub fn validate(&self) -> Result<()> {
        in_range("field_width", self.field_width, 1, MAX_FIELD_EXTENT)?;
        in_range("field_height", self.field_height, 1, MAX_FIELD_EXTENT)?;
        positive("ball_size", self.ball_size)?;
        positive("paddle_width", self.paddle_width)?;
        positive("paddle_height", self.paddle_height)?;
        positive("brick_width", self.brick_width)?;
        positive("brick_height", self.brick_height)?;

        if self.ball_size >= self.field_width || self.ball_size >= self.field_height {
            return Err(Error::invalid_config(
                "ball_size",
                format!(
                    "{} does not fit a {}x{} field",
                    self.ball_size, self.field_width, self.field_height
                ),
            ));
        }
        // A step longer than the ball would tunnel through bricks
        in_range("ball_speed", self.ball_speed, 1, self.ball_size)?;
        in_range("ball_start.x", self.ball_start.x, 0, self.field_width - self.ball_size)?;
        in_range("ball_start.y", self.ball_start.y, 0, self.field_height - self.ball_size)?;

        if self.paddle_width > self.field_width {
            return Err(Error::invalid_config(
                "paddle_width",
                format!("{} is wider than the field ({})", self.paddle_width, self.field_width),
            ));
        }
        in_range("paddle_height", self.paddle_height, 1, self.field_height)?;
        in_range("paddle_speed", self.paddle_speed, 1, self.field_width)?;
        in_range("paddle_start_x", self.paddle_start_x, 0, self.paddle_max_x())?;
        in_range("paddle_y", self.paddle_y, 0, self.field_height - self.paddle_height)?;

        let dir = self.ball_start_dir;
        if dir.x.abs() > 1 || dir.y.abs() > 1 {
            return Err(Error::invalid_config(
                "ball_start_dir",
                format!("components must be -1, 0 or 1, got ({}, {})", dir.x, dir.y),
            ));
        }

        if self.brick_count() > MAX_BRICKS {
            return Err(Error::invalid_config(
                "brick_columns",
                format!(
                    "{}x{} grid exceeds {} bricks",
                    self.brick_columns, self.brick_rows, MAX_BRICKS
                ),
            ));
        }
        grid_fits(
            "brick_spacing.x",
            self.brick_columns,
            self.brick_offset.x,
            self.brick_spacing.x,
            self.brick_width,
            self.field_width,
        )?;
        grid_fits(
            "brick_spacing.y",
            self.brick_rows,
            self.brick_offset.y,
            self.brick_spacing.y,
            self.brick_height,
            self.field_height,
        )?;

        if self.tick_interval_ms == 0 {
            return Err(Error::invalid_config("tick_interval_ms", "must be non-zero"));
        }
        Ok(())
    }

    /// Load and validate a config from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse and validate a config from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Write the config as pretty-printed JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path.as_ref(), json)?;
        log::info!("Config saved to {}", path.as_ref().display());
        Ok(())
    }
}

fn in_range(field: &'static str, value: i32, min: i32, max: i32) -> Result<()> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(Error::invalid_config(
            field,
            format!("{value} is outside {min}..={max}"),
        ))
    }
}

/// First and last brick along one axis must both lie inside `0..extent`
fn grid_fits(
    field: &'static str,
    count: u32,
    offset: i32,
    spacing: i32,
    size: i32,
    extent: i32,
) -> Result<()> {
    if count == 0 {
        return Ok(());
    }
    let last = i32::try_from(count - 1)
        .ok()
        .and_then(|steps| steps.checked_mul(spacing))
        .and_then(|span| span.checked_add(offset));
    let Some(last) = last else {
        return Err(Error::invalid_config(field, "brick grid position overflows"));
    };
    let max = extent - size;
    if (0..=max).contains(&offset) && (0..=max).contains(&last) {
        Ok(())
    } else {
        Err(Error::invalid_config(
            field,
            format!("bricks span {offset}..={last}, outside 0..={max}"),
        ))
    }
}

fn positive(field: &'static str, value: i32) -> Result<()> {
    if value > 0 {
        Ok(())
    } else {
        Err(Error::invalid_config(field, format!("must be positive, got {value}")))
    }
}
