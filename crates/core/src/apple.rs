//! Apple placement - pick a random cell that is not on the snake.

use crate::error::{CoreError, Result};
use crate::geometry::random_point;
use crate::rng::SimpleRng;
use crate::snake::SnakeSeq;
use crate::types::{BoardInfo, Point};

/// Draw random points until one is off the snake.
///
/// Requires `bi.area() > snake.len()`; otherwise no free cell exists and this
/// returns [`CoreError::BoardFull`] without consuming the generator.
pub fn place_apple(bi: BoardInfo, snake: &SnakeSeq, rng: SimpleRng) -> Result<(Point, SimpleRng)> {
    if bi.area() <= snake.len() {
        return Err(CoreError::BoardFull {
            board: bi,
            len: snake.len(),
        });
    }

    let mut rng = rng;
    loop {
        let (p, next) = random_point(bi, rng);
        rng = next;
        if !snake.contains(p) {
            return Ok((p, rng));
        }
    }
}
