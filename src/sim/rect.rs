//! Axis-aligned bounding boxes
//!
//! Integer rectangles with AWT semantics:
//! - `intersects` needs a strictly positive overlap (shared edges don't count)
//! - `contains` is half-open: the left/top edges are inside, right/bottom are not

use glam::IVec2;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub pos: IVec2,
    pub size: IVec2,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            pos: IVec2::new(x, y),
            size: IVec2::new(width, height),
        }
    }

    pub fn from_pos_size(pos: IVec2, size: IVec2) -> Self {
        Self { pos, size }
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.pos.x
    }

    #[inline]
    pub fn top(&self) -> i32 {
        self.pos.y
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.pos.x + self.size.x
    }

    /// One past the last row covered (AWT `getMaxY`)
    #[inline]
    pub fn bottom(&self) -> i32 {
        self.pos.y + self.size.y
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size.x <= 0 || self.size.y <= 0
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        other.right() > self.left()
            && other.bottom() > self.top()
            && self.right() > other.left()
            && self.bottom() > other.top()
    }

    pub fn contains(&self, point: IVec2) -> bool {
        !self.is_empty()
            && point.x >= self.left()
            && point.y >= self.top()
            && point.x < self.right()
            && point.y < self.bottom()
    }
}
