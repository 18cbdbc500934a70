//! Snake model - a non-empty ordered sequence of cells
//!
//! The head is a mandatory field and the body a possibly empty deque stored
//! head-to-tail (front is the neck, back is the tail), so an empty snake
//! cannot be represented. The head never appears in the body.

use std::collections::VecDeque;

use crate::error::{CoreError, Result};
use crate::types::Point;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SnakeSeq {
    head: Point,
    body: VecDeque<Point>,
}

impl SnakeSeq {
    /// Build a snake from its head and body (neck first).
    ///
    /// Fails if any cell repeats.
    pub fn new(head: Point, body: impl IntoIterator<Item = Point>) -> Result<Self> {
        let body: VecDeque<Point> = body.into_iter().collect();
        let snake = Self { head, body };
        snake.check_no_overlap()?;
        Ok(snake)
    }

    /// Build a snake from cells ordered head first.
    pub fn from_cells(cells: &[Point]) -> Result<Self> {
        let (&head, body) = cells
            .split_first()
            .ok_or(CoreError::InvalidState("snake needs at least one cell"))?;
        Self::new(head, body.iter().copied())
    }

    fn check_no_overlap(&self) -> Result<()> {
        for (i, &p) in self.body.iter().enumerate() {
            if p == self.head || self.body.iter().skip(i + 1).any(|&q| q == p) {
                return Err(CoreError::SelfOverlap(p));
            }
        }
        Ok(())
    }

    pub fn head(&self) -> Point {
        self.head
    }

    pub fn body(&self) -> &VecDeque<Point> {
        &self.body
    }

    /// Last cell of the snake (the head for a length-1 snake).
    pub fn tail(&self) -> Point {
        self.body.back().copied().unwrap_or(self.head)
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.body.len() + 1
    }

    /// All cells, head first.
    pub fn iter(&self) -> impl Iterator<Item = Point> + '_ {
        std::iter::once(self.head).chain(self.body.iter().copied())
    }

    /// Check whether `p` is the head or any body cell.
    pub fn contains(&self, p: Point) -> bool {
        self.head == p || self.body.contains(&p)
    }

    /// Like [`contains`](Self::contains), but ignores the tail cell, which a
    /// non-growing step vacates before the new head lands. For a single-cell
    /// snake that is the head itself.
    pub fn contains_excluding_tail(&self, p: Point) -> bool {
        if self.body.is_empty() {
            return false;
        }
        let keep = self.body.len().saturating_sub(1);
        self.head == p || self.body.iter().take(keep).any(|&q| q == p)
    }

    /// Make `new_head` the head; the old head becomes the neck.
    pub fn push_head(mut self, new_head: Point) -> Self {
        let old = std::mem::replace(&mut self.head, new_head);
        self.body.push_front(old);
        self
    }

    /// Remove the tail, returning the vacated cell.
    ///
    /// With an empty body this is a no-op returning `None`: the head is never
    /// removed.
    pub fn drop_tail(mut self) -> (Self, Option<Point>) {
        let vacated = self.body.pop_back();
        (self, vacated)
    }
}
