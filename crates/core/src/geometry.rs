//! Board geometry - coordinate arithmetic on a toroidal board
//!
//! The board is a torus: stepping off one edge re-enters on the opposite
//! edge, on each axis independently. Walls exist only as a classification
//! ([`is_at_wall`]) for callers that want to show edge hints; they never stop
//! movement.

use crate::rng::SimpleRng;
use crate::types::{BoardInfo, Movement, Point};

/// Wrap a single 1-indexed coordinate into `1..=max`.
#[inline(always)]
fn wrap_axis(value: i32, max: u16) -> u16 {
    let limit = max as i32;
    if value < 1 {
        max
    } else if value > limit {
        1
    } else {
        value as u16
    }
}

/// Step one cell from `p` in direction `m`, wrapping around the board edges.
///
/// `p` must be in bounds; the result always is.
pub fn advance(p: Point, m: Movement, bi: BoardInfo) -> Point {
    let (dr, dc) = m.offset();
    Point {
        row: wrap_axis(p.row as i32 + dr, bi.height),
        col: wrap_axis(p.col as i32 + dc, bi.width),
    }
}

/// Check whether an unwrapped step from `p` in direction `m` would leave the board.
pub fn is_at_wall(p: Point, m: Movement, bi: BoardInfo) -> bool {
    match m {
        Movement::North => p.row <= 1,
        Movement::South => p.row >= bi.height,
        Movement::West => p.col <= 1,
        Movement::East => p.col >= bi.width,
    }
}

/// Draw a uniformly random in-bounds point.
///
/// Consumes `rng` and hands back the advanced generator.
pub fn random_point(bi: BoardInfo, mut rng: SimpleRng) -> (Point, SimpleRng) {
    let row = rng.next_range(bi.height as u32) as u16 + 1;
    let col = rng.next_range(bi.width as u32) as u16 + 1;
    (Point { row, col }, rng)
}
