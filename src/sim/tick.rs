//! Fixed timestep simulation tick
//!
//! Core game loop that advances a session deterministically.

use serde::{Deserialize, Serialize};

use super::collision;
use super::state::{GamePhase, Session};

/// Discrete paddle control events posted by an input collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputEvent {
    MoveLeftStart,
    MoveLeftStop,
    MoveRightStart,
    MoveRightStop,
}

impl InputEvent {
    /// Translate a host key name. Keys that don't steer the paddle map to `None`.
    pub fn from_key(key: &str, pressed: bool) -> Option<Self> {
        let left = match key.to_lowercase().as_str() {
            "left" | "arrowleft" | "a" => true,
            "right" | "arrowright" | "d" => false,
            _ => return None,
        };
        Some(match (left, pressed) {
            (true, true) => InputEvent::MoveLeftStart,
            (true, false) => InputEvent::MoveLeftStop,
            (false, true) => InputEvent::MoveRightStart,
            (false, false) => InputEvent::MoveRightStop,
        })
    }
}

/// Input queued for a single tick, applied in order before anything moves
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    pub events: Vec<InputEvent>,
}

impl TickInput {
    pub fn new(events: impl IntoIterator<Item = InputEvent>) -> Self {
        Self {
            events: events.into_iter().collect(),
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl Session {
    /// Apply one input event to the paddle. Ignored once the game is over.
    pub fn handle_input(&mut self, event: InputEvent) {
        if self.phase == GamePhase::GameOver {
            return;
        }
        log::trace!("tick {}: {:?}", self.time_ticks, event);
        self.paddle.apply_input(event, self.config.paddle_speed);
    }

    /// Advance one tick with no queued input
    pub fn tick(&mut self) {
        tick(self, &TickInput::default());
    }
}

/// Advance the session by one fixed timestep
pub fn tick(session: &mut Session, input: &TickInput) {
    // Game over freezes every entity
    if session.phase == GamePhase::GameOver {
        return;
    }

    for &event in &input.events {
        session.handle_input(event);
    }

    session.time_ticks += 1;

    session.ball.advance(&session.config);
    session.paddle.advance(&session.config);

    let contacts = collision::resolve(
        &mut session.ball,
        &session.paddle,
        &mut session.bricks,
        session.config.field_height,
    );

    if contacts.paddle {
        log::debug!("tick {}: paddle contact", session.time_ticks);
    }
    for &index in &contacts.bricks {
        log::debug!("tick {}: brick {} destroyed", session.time_ticks, index);
    }
    for &index in &contacts.unsteered {
        log::debug!(
            "tick {}: brick {} hit with no matching probe, direction unchanged",
            session.time_ticks,
            index
        );
    }
    if !contacts.bricks.is_empty() && session.bricks_remaining() == 0 {
        // No win condition: the ball keeps bouncing on an empty field
        log::info!("All bricks cleared at tick {}", session.time_ticks);
    }

    if contacts.floor {
        session.phase = GamePhase::GameOver;
        log::info!("Game over at tick {}", session.time_ticks);
    }
}
