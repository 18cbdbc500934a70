//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no external dependencies, so they can be used
//! by the engine, the input layer and the terminal renderer alike.
//!
//! # Coordinates
//!
//! Board cells are addressed by 1-indexed `(row, col)` pairs:
//!
//! - **Rows**: `1..=height`, top to bottom
//! - **Columns**: `1..=width`, left to right
//!
//! Row/column `0` and `height + 1`/`width + 1` are never stored; the engine
//! wraps them onto the opposite edge before they reach any state.
//!
//! # Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_BOARD_HEIGHT` | 20 | Rows when no size is configured |
//! | `DEFAULT_BOARD_WIDTH` | 30 | Columns when no size is configured |
//! | `TICK_MS` | 120 | Interval between snake steps |
//! | `INITIAL_BODY_LEN` | 2 | Body cells behind the head at game start |
//! | `MAX_PENDING_TURNS` | 2 | Buffered turns the input layer keeps |
//!
//! # Examples
//!
//! ```
//! use tui_snake_types::{BoardInfo, Movement, Point};
//!
//! let board = BoardInfo::new(4, 4);
//! assert_eq!(board.area(), 16);
//! assert!(board.in_bounds(Point::new(4, 1)));
//! assert!(!board.in_bounds(Point::new(0, 1)));
//!
//! assert_eq!(Movement::West.opposite(), Movement::East);
//! assert_eq!(Movement::from_str("n"), Some(Movement::North));
//! ```

/// Board height used when nothing else is configured.
pub const DEFAULT_BOARD_HEIGHT: u16 = 20;

/// Board width used when nothing else is configured.
pub const DEFAULT_BOARD_WIDTH: u16 = 30;

/// Interval between two snake steps in milliseconds.
pub const TICK_MS: u32 = 120;

/// Number of body cells trailing the head when a game starts.
pub const INITIAL_BODY_LEN: usize = 2;

/// Maximum number of turns the input layer buffers between ticks.
pub const MAX_PENDING_TURNS: usize = 2;

/// A board cell, 1-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub row: u16,
    pub col: u16,
}

impl Point {
    pub const fn new(row: u16, col: u16) -> Self {
        Self { row, col }
    }
}

/// Board dimensions, fixed for the lifetime of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardInfo {
    pub height: u16,
    pub width: u16,
}

impl BoardInfo {
    pub const fn new(height: u16, width: u16) -> Self {
        Self { height, width }
    }

    /// Number of cells on the board.
    pub fn area(&self) -> usize {
        (self.height as usize) * (self.width as usize)
    }

    /// Check that `p` lies in `[1, height] x [1, width]`.
    pub fn in_bounds(&self, p: Point) -> bool {
        p.row >= 1 && p.row <= self.height && p.col >= 1 && p.col <= self.width
    }
}

impl Default for BoardInfo {
    fn default() -> Self {
        Self::new(DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH)
    }
}

/// Heading of the snake.
///
/// North is towards row 1, West towards column 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Movement {
    North,
    South,
    East,
    West,
}

impl Movement {
    /// All four headings, in declaration order.
    pub const ALL: [Movement; 4] = [
        Movement::North,
        Movement::South,
        Movement::East,
        Movement::West,
    ];

    /// The reverse heading.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake_types::Movement;
    ///
    /// for m in Movement::ALL {
    ///     assert_eq!(m.opposite().opposite(), m);
    ///     assert_ne!(m.opposite(), m);
    /// }
    /// ```
    pub fn opposite(&self) -> Self {
        match self {
            Movement::North => Movement::South,
            Movement::South => Movement::North,
            Movement::East => Movement::West,
            Movement::West => Movement::East,
        }
    }

    /// Row and column offsets of a single unwrapped step.
    pub fn offset(&self) -> (i32, i32) {
        match self {
            Movement::North => (-1, 0),
            Movement::South => (1, 0),
            Movement::East => (0, 1),
            Movement::West => (0, -1),
        }
    }

    /// Parse a heading from a string
    ///
    /// Accepts full names or single letters (case-insensitive):
    /// "north" | "n", "south" | "s", "east" | "e", "west" | "w"
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "north" | "n" => Some(Movement::North),
            "south" | "s" => Some(Movement::South),
            "east" | "e" => Some(Movement::East),
            "west" | "w" => Some(Movement::West),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Movement::North => "north",
            Movement::South => "south",
            Movement::East => "east",
            Movement::West => "west",
        }
    }
}

/// What occupies a board cell, as seen by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellKind {
    #[default]
    Empty,
    Snake,
    SnakeHead,
    Apple,
}

impl CellKind {
    pub fn is_snake(&self) -> bool {
        matches!(self, CellKind::Snake | CellKind::SnakeHead)
    }
}

/// One entry of a delta: `point` now shows `kind`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellUpdate {
    pub point: Point,
    pub kind: CellKind,
}

impl CellUpdate {
    pub const fn new(point: Point, kind: CellKind) -> Self {
        Self { point, kind }
    }
}

impl From<(Point, CellKind)> for CellUpdate {
    fn from((point, kind): (Point, CellKind)) -> Self {
        Self { point, kind }
    }
}

/// Player intents produced by the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Change heading (applied on the next tick)
    Turn(Movement),
    /// Toggle pause state
    Pause,
    /// Start a new game
    Restart,
}

impl GameAction {
    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake_types::{GameAction, Movement};
    ///
    /// assert_eq!(GameAction::from_str("west"), Some(GameAction::Turn(Movement::West)));
    /// assert_eq!(GameAction::from_str("pause"), Some(GameAction::Pause));
    /// assert_eq!(GameAction::from_str("jump"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pause" => Some(GameAction::Pause),
            "restart" => Some(GameAction::Restart),
            other => Movement::from_str(other).map(GameAction::Turn),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_is_involutive_without_fixed_point() {
        for m in Movement::ALL {
            assert_eq!(m.opposite().opposite(), m);
            assert_ne!(m.opposite(), m);
        }
    }

    #[test]
    fn opposite_offsets_cancel() {
        for m in Movement::ALL {
            let (dr, dc) = m.offset();
            let (or, oc) = m.opposite().offset();
            assert_eq!((dr + or, dc + oc), (0, 0));
        }
    }

    #[test]
    fn movement_string_roundtrip() {
        for m in Movement::ALL {
            assert_eq!(Movement::from_str(m.as_str()), Some(m));
        }
        assert_eq!(Movement::from_str("W"), Some(Movement::West));
        assert_eq!(Movement::from_str("up"), None);
    }

    #[test]
    fn board_bounds_are_one_indexed() {
        let board = BoardInfo::new(3, 5);
        assert!(board.in_bounds(Point::new(1, 1)));
        assert!(board.in_bounds(Point::new(3, 5)));
        assert!(!board.in_bounds(Point::new(0, 1)));
        assert!(!board.in_bounds(Point::new(1, 0)));
        assert!(!board.in_bounds(Point::new(4, 1)));
        assert!(!board.in_bounds(Point::new(1, 6)));
    }

    #[test]
    fn default_board_and_cell_kind() {
        assert_eq!(
            BoardInfo::default(),
            BoardInfo::new(DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH)
        );
        assert_eq!(CellKind::default(), CellKind::Empty);
        assert!(CellKind::SnakeHead.is_snake());
        assert!(!CellKind::Apple.is_snake());
    }
}
