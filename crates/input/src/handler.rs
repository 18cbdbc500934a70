//! Turn buffering between ticks.
//!
//! Key presses arrive faster than the snake moves. Applying only the latest
//! press per tick drops quick U-turns (up then left inside one tick would
//! turn straight into the neck), so turns are queued and consumed one per
//! tick instead.

use arrayvec::ArrayVec;

use crate::types::{Movement, MAX_PENDING_TURNS};

/// Pending heading changes, oldest first.
#[derive(Debug, Clone, Default)]
pub struct TurnBuffer {
    pending: ArrayVec<Movement, MAX_PENDING_TURNS>,
}

impl TurnBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `turn` unless it repeats or reverses the heading it would follow
    /// (the last queued turn, or `current` when nothing is queued).
    ///
    /// Returns false when the turn is rejected or the buffer is full.
    pub fn push(&mut self, turn: Movement, current: Movement) -> bool {
        let last = self.pending.last().copied().unwrap_or(current);
        if turn == last || turn == last.opposite() {
            return false;
        }
        self.pending.try_push(turn).is_ok()
    }

    /// Heading to use for the next tick, consuming one queued turn.
    pub fn next_heading(&mut self, current: Movement) -> Movement {
        if self.pending.is_empty() {
            current
        } else {
            self.pending.remove(0)
        }
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_buffer_keeps_heading() {
        let mut buf = TurnBuffer::new();
        assert_eq!(buf.next_heading(Movement::East), Movement::East);
    }

    #[test]
    fn test_rejects_reversal_and_repeat() {
        let mut buf = TurnBuffer::new();
        assert!(!buf.push(Movement::West, Movement::East));
        assert!(!buf.push(Movement::East, Movement::East));
        assert!(buf.is_empty());
    }

    #[test]
    fn test_quick_u_turn_is_kept_in_order() {
        let mut buf = TurnBuffer::new();
        assert!(buf.push(Movement::North, Movement::East));
        // West is only a reversal of the original heading, not of the queued one.
        assert!(buf.push(Movement::West, Movement::East));
        assert_eq!(buf.next_heading(Movement::East), Movement::North);
        assert_eq!(buf.next_heading(Movement::North), Movement::West);
        assert_eq!(buf.next_heading(Movement::West), Movement::West);
    }

    #[test]
    fn test_capacity_is_bounded() {
        let mut buf = TurnBuffer::new();
        assert!(buf.push(Movement::North, Movement::East));
        assert!(buf.push(Movement::West, Movement::East));
        assert!(!buf.push(Movement::South, Movement::East));
        assert_eq!(buf.len(), MAX_PENDING_TURNS);

        buf.clear();
        assert!(buf.is_empty());
    }
}
