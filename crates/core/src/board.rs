//! Board module - the renderer's view of the grid
//!
//! A flat, row-major array of [`CellKind`] sized from a [`BoardInfo`]. It is
//! painted in full once from a [`GameState`] and afterwards kept current only
//! by applying the delta of each tick.

use crate::game_state::GameState;
use crate::types::{BoardInfo, CellKind, CellUpdate, Point};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    info: BoardInfo,
    /// Flat array of cells, row-major order ((row - 1) * width + (col - 1))
    cells: Vec<CellKind>,
}

impl Board {
    /// Create an empty board
    pub fn new(info: BoardInfo) -> Self {
        Self {
            info,
            cells: vec![CellKind::Empty; info.area()],
        }
    }

    /// Paint every cell of `state`.
    pub fn from_state(state: &GameState, info: BoardInfo) -> Self {
        let mut board = Self::new(info);
        board.set(state.apple(), CellKind::Apple);
        for p in state.snake().body() {
            board.set(*p, CellKind::Snake);
        }
        board.set(state.snake().head(), CellKind::SnakeHead);
        board
    }

    /// Calculate flat index from a 1-indexed point
    #[inline(always)]
    fn index(&self, p: Point) -> Option<usize> {
        if !self.info.in_bounds(p) {
            return None;
        }
        Some((p.row as usize - 1) * (self.info.width as usize) + (p.col as usize - 1))
    }

    pub fn info(&self) -> BoardInfo {
        self.info
    }

    /// Get cell at `p`. Returns None if out of bounds
    pub fn get(&self, p: Point) -> Option<CellKind> {
        self.index(p).map(|idx| self.cells[idx])
    }

    /// Set cell at `p`. Returns false if out of bounds
    pub fn set(&mut self, p: Point, kind: CellKind) -> bool {
        match self.index(p) {
            Some(idx) => {
                self.cells[idx] = kind;
                true
            }
            None => false,
        }
    }

    /// Apply a tick's delta in order.
    pub fn apply(&mut self, updates: &[CellUpdate]) {
        for u in updates {
            self.set(u.point, u.kind);
        }
    }

    /// Every cell whose kind differs from `other`, with the kind it has in `other`.
    ///
    /// Both boards must share the same dimensions.
    pub fn changes_to(&self, other: &Board) -> Vec<CellUpdate> {
        debug_assert_eq!(self.info, other.info);
        self.points()
            .zip(self.cells.iter().zip(other.cells.iter()))
            .filter(|(_, (a, b))| a != b)
            .map(|(p, (_, &b))| CellUpdate::new(p, b))
            .collect()
    }

    /// All points in row-major order.
    pub fn points(&self) -> impl Iterator<Item = Point> {
        let BoardInfo { height, width } = self.info;
        (1..=height).flat_map(move |row| (1..=width).map(move |col| Point::new(row, col)))
    }

    pub fn count(&self, kind: CellKind) -> usize {
        self.cells.iter().filter(|&&c| c == kind).count()
    }

    /// Cells showing any part of the snake.
    pub fn snake_len(&self) -> usize {
        self.cells.iter().filter(|c| c.is_snake()).count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[CellKind] {
        &self.cells
    }
}
