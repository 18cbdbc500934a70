//! Error type for precondition violations.
//!
//! These are caller bugs (a board too small for the snake, a snake built from
//! no cells), not game outcomes. Self-collision is reported through
//! [`crate::Tick::Collided`] instead.

use thiserror::Error;

use crate::types::{BoardInfo, Point};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("invalid state: {0}")]
    InvalidState(&'static str),

    #[error("invalid state: board {}x{} has no free cell for a snake of length {len}", .board.height, .board.width)]
    BoardFull { board: BoardInfo, len: usize },

    #[error("invalid state: snake cell ({}, {}) repeats", .0.row, .0.col)]
    SelfOverlap(Point),

    #[error("invalid state: cell ({}, {}) is outside the {}x{} board", .point.row, .point.col, .board.height, .board.width)]
    OutOfBounds { point: Point, board: BoardInfo },
}

pub type Result<T> = std::result::Result<T, CoreError>;
