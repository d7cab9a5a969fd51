//! Demo-mode input source
//!
//! Plays the game through the same key events a human would send: press
//! toward the ball when it drifts away from the paddle centre, release once
//! it is close again.

use super::state::Session;
use super::tick::{InputEvent, TickInput};

/// Horizontal distance (pixels) tolerated before the paddle chases the ball
pub const DEAD_ZONE: i32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Held {
    None,
    Left,
    Right,
}

#[derive(Debug, Clone)]
pub struct Autopilot {
    held: Held,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self { held: Held::None }
    }
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Key events to send before the next tick
    pub fn next_input(&mut self, session: &Session) -> TickInput {
        let ball = session.ball();
        let paddle = session.paddle();
        let ball_center = ball.pos.x + ball.size / 2;
        let paddle_center = paddle.pos.x + paddle.size.x / 2;
        let offset = ball_center - paddle_center;

        let want = if offset > DEAD_ZONE {
            Held::Right
        } else if offset < -DEAD_ZONE {
            Held::Left
        } else {
            Held::None
        };

        let mut input = TickInput::default();
        if want == self.held {
            return input;
        }
        match self.held {
            Held::Left => input.push(InputEvent::MoveLeftStop),
            Held::Right => input.push(InputEvent::MoveRightStop),
            Held::None => {}
        }
        match want {
            Held::Left => input.push(InputEvent::MoveLeftStart),
            Held::Right => input.push(InputEvent::MoveRightStart),
            Held::None => {}
        }
        self.held = want;
        input
    }
}
