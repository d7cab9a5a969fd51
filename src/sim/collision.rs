//! Collision detection and response
//!
//! Runs once per tick after motion. Bounding-box overlap alone doesn't say
//! which side of a brick the ball came through, so four probe points one pixel
//! outside the ball's box are tested against the brick instead. With the ball
//! moving at most one pixel per axis per tick this approximates the entry edge.

use glam::IVec2;

use super::rect::Rect;
use super::state::{Ball, Brick, Paddle};

/// Everything the collision pass touched this tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Contacts {
    /// Ball's bottom edge passed the bottom of the field
    pub floor: bool,
    /// Ball overlapped the paddle
    pub paddle: bool,
    /// Indices of bricks destroyed this tick, in processing order
    pub bricks: Vec<usize>,
    /// Destroyed bricks that matched no probe and left the direction alone
    pub unsteered: Vec<usize>,
}

/// Points just outside the ball's box, all anchored on its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Probes {
    pub right: IVec2,
    pub left: IVec2,
    pub top: IVec2,
    pub bottom: IVec2,
}

impl Probes {
    pub fn around(ball: &Rect) -> Self {
        let (left, top) = (ball.left(), ball.top());
        Self {
            right: IVec2::new(left + ball.size.x + 1, top),
            left: IVec2::new(left - 1, top),
            top: IVec2::new(left, top - 1),
            bottom: IVec2::new(left, top + ball.size.y + 1),
        }
    }
}

/// Resolve all contacts for this tick.
///
/// Order is fixed: floor, paddle, then every brick in row-major order. A floor
/// hit doesn't short-circuit the rest, and several bricks may be hit in one
/// tick, each one rewriting the direction in turn.
pub fn resolve(
    ball: &mut Ball,
    paddle: &Paddle,
    bricks: &mut [Brick],
    field_height: i32,
) -> Contacts {
    let mut contacts = Contacts::default();

    if ball.rect().bottom() > field_height {
        contacts.floor = true;
    }

    if ball.rect().intersects(&paddle.rect()) {
        // Always straight back up, whatever the approach
        ball.dir.y = -1;
        contacts.paddle = true;
    }

    for (index, brick) in bricks.iter_mut().enumerate() {
        if brick.is_destroyed() {
            continue;
        }
        let ball_rect = ball.rect();
        let brick_rect = brick.rect();
        if !ball_rect.intersects(&brick_rect) {
            continue;
        }

        if !steer(ball, &brick_rect, Probes::around(&ball_rect)) {
            contacts.unsteered.push(index);
        }
        brick.destroy();
        contacts.bricks.push(index);
    }

    contacts
}

/// Point the ball away from the brick edge it crossed.
///
/// Returns false when no probe lands inside the brick; the ball then keeps
/// its direction and passes through.
fn steer(ball: &mut Ball, brick: &Rect, probes: Probes) -> bool {
    let mut steered = false;

    if brick.contains(probes.right) {
        ball.dir.x = -1;
        steered = true;
    } else if brick.contains(probes.left) {
        ball.dir.x = 1;
        steered = true;
    }

    if brick.contains(probes.top) {
        ball.dir.y = 1;
        steered = true;
    } else if brick.contains(probes.bottom) {
        ball.dir.y = -1;
        steered = true;
    }

    steered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;

    fn ball_at(x: i32, y: i32, dx: i32, dy: i32) -> Ball {
        Ball {
            pos: IVec2::new(x, y),
            size: 10,
            dir: IVec2::new(dx, dy),
        }
    }

    fn setup() -> (Paddle, Vec<Brick>) {
        let config = GameConfig::default();
        (Paddle::new(&config), Brick::grid(&config))
    }

    #[test]
    fn test_probe_points() {
        let probes = Probes::around(&Rect::new(51, 59, 10, 10));
        assert_eq!(probes.right, IVec2::new(62, 59));
        assert_eq!(probes.left, IVec2::new(50, 59));
        assert_eq!(probes.top, IVec2::new(51, 58));
        assert_eq!(probes.bottom, IVec2::new(51, 70));
    }

    #[test]
    fn test_floor_contact() {
        let (paddle, mut bricks) = setup();
        let mut ball = ball_at(100, 291, 1, 1);
        let contacts = resolve(&mut ball, &paddle, &mut bricks, 300);
        assert!(contacts.floor);

        // Bottom edge exactly on the floor is still in play
        let mut ball = ball_at(100, 290, 1, 1);
        assert!(!resolve(&mut ball, &paddle, &mut bricks, 300).floor);
    }

    #[test]
    fn test_paddle_sends_ball_up() {
        let (paddle, mut bricks) = setup();
        let mut ball = ball_at(195, 252, 1, 1);
        let contacts = resolve(&mut ball, &paddle, &mut bricks, 300);
        assert!(contacts.paddle);
        assert_eq!(ball.dir, IVec2::new(1, -1));
    }

    #[test]
    fn test_paddle_edge_touch_is_not_contact() {
        let (paddle, mut bricks) = setup();
        // Ball bottom at y=260 only touches the paddle's top edge
        let mut ball = ball_at(210, 250, -1, 1);
        let contacts = resolve(&mut ball, &paddle, &mut bricks, 300);
        assert!(!contacts.paddle);
        assert_eq!(ball.dir, IVec2::new(-1, 1));
    }

    #[test]
    fn test_brick_corner_hit_flips_both_axes() {
        let (paddle, mut bricks) = setup();
        let mut ball = ball_at(51, 59, 1, -1);
        let contacts = resolve(&mut ball, &paddle, &mut bricks, 300);

        assert_eq!(contacts.bricks, vec![0]);
        assert!(contacts.unsteered.is_empty());
        assert!(bricks[0].is_destroyed());
        assert!(bricks[1..].iter().all(|b| !b.is_destroyed()));
        // Right probe (62,59) and top probe (51,58) both land in brick 0
        assert_eq!(ball.dir, IVec2::new(-1, 1));
    }

    #[test]
    fn test_brick_hit_from_above() {
        let (paddle, mut bricks) = setup();
        let mut ball = ball_at(40, 42, 1, 1);
        resolve(&mut ball, &paddle, &mut bricks, 300);
        assert!(bricks[0].is_destroyed());
        // Only the bottom probe (40,53) lands inside
        assert_eq!(ball.dir, IVec2::new(1, -1));
    }

    #[test]
    fn test_unsteered_hit_still_destroys() {
        let (paddle, mut bricks) = setup();
        // Overlaps brick 0 at its top-left corner; every probe misses
        let mut ball = ball_at(25, 41, 1, 1);
        let contacts = resolve(&mut ball, &paddle, &mut bricks, 300);
        assert_eq!(contacts.bricks, vec![0]);
        assert_eq!(contacts.unsteered, vec![0]);
        assert!(bricks[0].is_destroyed());
        assert_eq!(ball.dir, IVec2::new(1, 1));
    }

    #[test]
    fn test_destroyed_brick_is_ignored() {
        let (paddle, mut bricks) = setup();
        bricks[0].destroy();
        let mut ball = ball_at(51, 59, 1, -1);
        let contacts = resolve(&mut ball, &paddle, &mut bricks, 300);
        assert!(contacts.bricks.is_empty());
        assert_eq!(ball.dir, IVec2::new(1, -1));
    }

    #[test]
    fn test_two_bricks_last_one_wins() {
        // Bricks packed edge to edge so the ball can straddle two of them
        let config = GameConfig {
            brick_spacing: IVec2::new(50, 20),
            ..Default::default()
        };
        let paddle = Paddle::new(&config);
        let mut bricks = Brick::grid(&config);
        let mut ball = ball_at(75, 59, 1, -1);

        let contacts = resolve(&mut ball, &paddle, &mut bricks, 300);

        assert_eq!(contacts.bricks, vec![0, 1]);
        assert!(bricks[0].is_destroyed() && bricks[1].is_destroyed());
        // Brick 0 flips x to +1 via the left probe, brick 1 flips it back to -1
        // via the right probe. Only brick 0 holds the top probe.
        assert_eq!(ball.dir, IVec2::new(-1, 1));
    }
}
