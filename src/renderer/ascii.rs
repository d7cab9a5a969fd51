//! Terminal renderer
//!
//! Rasterises the drawables onto a character grid. Each cell covers
//! `field_width / columns` by `field_height / rows` pixels and is filled when
//! an entity overlaps any part of it.

use crate::sim::{Drawable, Session, Sprite};

pub const GAME_OVER_MESSAGE: &str = "Game Over";

const EMPTY: char = ' ';

fn glyph(sprite: Sprite) -> char {
    match sprite {
        Sprite::Ball => 'o',
        Sprite::Paddle => '=',
        Sprite::Brick => '#',
    }
}

/// Draw the session as `rows` lines of `columns` characters
pub fn render(session: &Session, columns: usize, rows: usize) -> String {
    let mut grid = vec![vec![EMPTY; columns]; rows];

    if session.is_in_play() {
        let config = session.config();
        let mut drawables = session.drawables();
        // Bricks first so the ball stays visible on top
        drawables.sort_by_key(|d| match d.sprite {
            Sprite::Brick => 0,
            Sprite::Paddle => 1,
            Sprite::Ball => 2,
        });
        for drawable in &drawables {
            fill(&mut grid, drawable, config.field_width, config.field_height);
        }
    } else if rows > 0 {
        let row = &mut grid[rows / 2];
        let start = columns.saturating_sub(GAME_OVER_MESSAGE.len()) / 2;
        for (cell, ch) in row.iter_mut().skip(start).zip(GAME_OVER_MESSAGE.chars()) {
            *cell = ch;
        }
    }

    let mut out = String::with_capacity(rows * (columns + 1));
    for row in grid {
        out.extend(row);
        out.push('\n');
    }
    out
}

fn fill(grid: &mut [Vec<char>], drawable: &Drawable, field_width: i32, field_height: i32) {
    let rows = grid.len();
    let Some(columns) = grid.first().map(Vec::len) else {
        return;
    };
    let rect = drawable.rect();
    let (col_start, col_end) = span(rect.left(), rect.right(), field_width, columns);
    let (row_start, row_end) = span(rect.top(), rect.bottom(), field_height, rows);

    let ch = glyph(drawable.sprite);
    for row in &mut grid[row_start..row_end] {
        for cell in &mut row[col_start..col_end] {
            *cell = ch;
        }
    }
}

/// Cells touched by the pixel range `[start, end)`, clamped to the grid
fn span(start: i32, end: i32, extent: i32, cells: usize) -> (usize, usize) {
    let cells_i = cells as i64;
    let extent = i64::from(extent.max(1));
    let first = (i64::from(start) * cells_i).div_euclid(extent);
    let last = (i64::from(end) * cells_i + extent - 1).div_euclid(extent);
    let clamp = |v: i64| v.clamp(0, cells_i) as usize;
    let (first, last) = (clamp(first), clamp(last));
    (first, last.max(first))
}
