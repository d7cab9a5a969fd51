//! Render-facing view of a session
//!
//! A renderer never touches entities directly. It asks for a list of
//! drawables and maps each sprite kind to whatever visual it likes.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::state::Session;

/// What an entity looks like, without saying how to draw it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sprite {
    Ball,
    Paddle,
    Brick,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Drawable {
    pub sprite: Sprite,
    /// Top-left corner
    pub pos: IVec2,
    pub size: IVec2,
}

impl Drawable {
    fn new(sprite: Sprite, rect: Rect) -> Self {
        Self {
            sprite,
            pos: rect.pos,
            size: rect.size,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }
}

impl Session {
    /// Everything visible this frame: ball, paddle, then live bricks in grid order
    pub fn drawables(&self) -> Vec<Drawable> {
        let mut out = Vec::with_capacity(2 + self.bricks.len());
        out.push(Drawable::new(Sprite::Ball, self.ball.rect()));
        out.push(Drawable::new(Sprite::Paddle, self.paddle.rect()));
        out.extend(
            self.bricks
                .iter()
                .filter(|b| !b.is_destroyed())
                .map(|b| Drawable::new(Sprite::Brick, b.rect())),
        );
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_drawables() {
        let session = Session::new();
        let drawables = session.drawables();
        assert_eq!(drawables.len(), 32);
        assert_eq!(drawables[0].sprite, Sprite::Ball);
        assert_eq!(drawables[0].rect(), Rect::new(200, 150, 10, 10));
        assert_eq!(drawables[1].sprite, Sprite::Paddle);
        assert_eq!(drawables[1].rect(), Rect::new(200, 260, 60, 10));
        assert_eq!(drawables[2].rect(), Rect::new(30, 50, 50, 10));
    }

    #[test]
    fn test_destroyed_bricks_are_hidden() {
        let mut session = Session::new();
        session.bricks[0].destroy();
        session.bricks[29].destroy();
        let bricks: Vec<_> = session
            .drawables()
            .into_iter()
            .filter(|d| d.sprite == Sprite::Brick)
            .collect();
        assert_eq!(bricks.len(), 28);
        assert_eq!(bricks[0].pos, IVec2::new(90, 50));
    }
}
