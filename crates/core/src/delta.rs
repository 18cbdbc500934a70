//! Delta emitter - the minimal set of cell updates produced by one step
//!
//! A step touches at most four cells: the new head, the former head, the
//! vacated tail and the new apple. Each candidate is emitted once, and only if
//! its kind actually changed, so the list is both minimal and complete. This
//! matters for the degenerate cases: a length-1 snake vacates its own former
//! head, and a head may move into the cell the tail just left.

use arrayvec::ArrayVec;

use crate::types::{CellKind, CellUpdate, Point};

/// Ordered cell updates for one step. Stack-only.
pub type Delta = ArrayVec<CellUpdate, 4>;

/// What one step did, in terms the renderer cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepChange {
    pub prev_head: Point,
    pub new_head: Point,
    /// Cell freed by dropping the tail (`None` when the snake grew).
    pub vacated: Option<Point>,
    /// Where the apple went (`None` when it did not move).
    pub new_apple: Option<Point>,
}

impl StepChange {
    fn before(&self, p: Point) -> CellKind {
        if p == self.prev_head {
            CellKind::SnakeHead
        } else if Some(p) == self.vacated {
            CellKind::Snake
        } else if p == self.new_head && self.new_apple.is_some() {
            // The apple just eaten sat under the new head.
            CellKind::Apple
        } else {
            CellKind::Empty
        }
    }

    fn after(&self, p: Point) -> CellKind {
        if p == self.new_head {
            CellKind::SnakeHead
        } else if Some(p) == self.new_apple {
            CellKind::Apple
        } else if Some(p) == self.vacated {
            CellKind::Empty
        } else if p == self.prev_head {
            CellKind::Snake
        } else {
            CellKind::Empty
        }
    }

    /// Emit updates in order: new head, former head, vacated tail, new apple.
    pub fn emit(&self) -> Delta {
        let mut out = Delta::new();
        let candidates = [
            Some(self.new_head),
            Some(self.prev_head),
            self.vacated,
            self.new_apple,
        ];

        for p in candidates.into_iter().flatten() {
            if out.iter().any(|u| u.point == p) {
                continue;
            }
            let after = self.after(p);
            if self.before(p) != after {
                out.push(CellUpdate::new(p, after));
            }
        }

        out
    }
}
