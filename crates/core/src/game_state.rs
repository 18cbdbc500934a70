//! Game state module - the per-tick state transition
//!
//! A [`GameState`] owns the snake, the apple, the heading and the generator.
//! [`GameState::tick`] consumes one state and returns the next one together
//! with the cell delta for the renderer, or [`Tick::Collided`] when the snake
//! runs into itself.

use tracing::{debug, info};

use crate::apple::place_apple;
use crate::delta::{Delta, StepChange};
use crate::error::{CoreError, Result};
use crate::geometry::advance;
use crate::rng::SimpleRng;
use crate::snake::SnakeSeq;
use crate::types::*;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameState {
    snake: SnakeSeq,
    apple: Point,
    heading: Movement,
    rng: SimpleRng,
    /// Number of successful steps since the game started.
    steps: u32,
}

/// Result of one tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tick {
    /// The snake moved (and possibly grew).
    Alive {
        state: GameState,
        delta: Delta,
        ate_apple: bool,
    },
    /// The next head cell is occupied by the snake. `state` is the input
    /// state, untouched.
    Collided { state: GameState, at: Point },
}

impl Tick {
    pub fn state(&self) -> &GameState {
        match self {
            Tick::Alive { state, .. } | Tick::Collided { state, .. } => state,
        }
    }

    pub fn into_state(self) -> GameState {
        match self {
            Tick::Alive { state, .. } | Tick::Collided { state, .. } => state,
        }
    }

    /// Cell updates to apply; empty after a collision.
    pub fn delta(&self) -> &[CellUpdate] {
        match self {
            Tick::Alive { delta, .. } => delta,
            Tick::Collided { .. } => &[],
        }
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self, Tick::Collided { .. })
    }
}

impl GameState {
    /// Start a new game: a short snake in the middle of the board heading
    /// East, and a random apple.
    pub fn new(bi: BoardInfo, seed: u32) -> Result<Self> {
        if bi.height == 0 || bi.width == 0 {
            return Err(CoreError::InvalidState("board dimensions must be positive"));
        }

        let heading = Movement::East;
        let head = Point::new(bi.height.div_ceil(2), bi.width.div_ceil(2));
        let mut body = Vec::with_capacity(INITIAL_BODY_LEN);
        let mut cell = head;
        for _ in 0..INITIAL_BODY_LEN {
            cell = advance(cell, heading.opposite(), bi);
            body.push(cell);
        }

        let snake = SnakeSeq::new(head, body)?;
        let (apple, rng) = place_apple(bi, &snake, SimpleRng::new(seed))?;

        info!(
            height = bi.height,
            width = bi.width,
            seed,
            "game started"
        );

        Ok(Self {
            snake,
            apple,
            heading,
            rng,
            steps: 0,
        })
    }

    /// Assemble a state from explicit parts.
    ///
    /// Every cell must be on the board and the apple must not be on the snake.
    pub fn from_parts(
        bi: BoardInfo,
        snake: SnakeSeq,
        apple: Point,
        heading: Movement,
        rng: SimpleRng,
    ) -> Result<Self> {
        if let Some(point) = snake
            .iter()
            .chain(std::iter::once(apple))
            .find(|&p| !bi.in_bounds(p))
        {
            return Err(CoreError::OutOfBounds { point, board: bi });
        }
        if snake.contains(apple) {
            return Err(CoreError::InvalidState("apple is on the snake"));
        }

        Ok(Self {
            snake,
            apple,
            heading,
            rng,
            steps: 0,
        })
    }

    pub fn snake(&self) -> &SnakeSeq {
        &self.snake
    }

    pub fn apple(&self) -> Point {
        self.apple
    }

    pub fn heading(&self) -> Movement {
        self.heading
    }

    pub fn rng(&self) -> SimpleRng {
        self.rng
    }

    pub fn steps(&self) -> u32 {
        self.steps
    }

    /// Replace the heading for the next tick.
    ///
    /// Reversal is accepted; callers that forbid it compare against
    /// `heading().opposite()` first.
    pub fn with_heading(mut self, heading: Movement) -> Self {
        self.heading = heading;
        self
    }

    /// Kind shown at `p` in this state.
    pub fn cell_kind(&self, p: Point) -> CellKind {
        if p == self.snake.head() {
            CellKind::SnakeHead
        } else if self.snake.body().contains(&p) {
            CellKind::Snake
        } else if p == self.apple {
            CellKind::Apple
        } else {
            CellKind::Empty
        }
    }

    /// Advance the snake one cell along the current heading.
    ///
    /// Fails only when the snake grows to fill the whole board, leaving no
    /// cell for the next apple.
    pub fn tick(self, bi: BoardInfo) -> Result<Tick> {
        let prev_head = self.snake.head();
        let new_head = advance(prev_head, self.heading, bi);

        if self.snake.contains_excluding_tail(new_head) {
            info!(
                row = new_head.row,
                col = new_head.col,
                len = self.snake.len(),
                steps = self.steps,
                "snake collided with itself"
            );
            return Ok(Tick::Collided {
                state: self,
                at: new_head,
            });
        }

        let GameState {
            snake,
            apple,
            heading,
            rng,
            steps,
        } = self;

        if new_head == apple {
            let snake = snake.push_head(new_head);
            let (new_apple, rng) = place_apple(bi, &snake, rng)?;
            debug!(
                len = snake.len(),
                apple_row = new_apple.row,
                apple_col = new_apple.col,
                "apple eaten"
            );

            let delta = StepChange {
                prev_head,
                new_head,
                vacated: None,
                new_apple: Some(new_apple),
            }
            .emit();

            return Ok(Tick::Alive {
                state: GameState {
                    snake,
                    apple: new_apple,
                    heading,
                    rng,
                    steps: steps.wrapping_add(1),
                },
                delta,
                ate_apple: true,
            });
        }

        let (snake, vacated) = snake.push_head(new_head).drop_tail();
        let delta = StepChange {
            prev_head,
            new_head,
            vacated,
            new_apple: None,
        }
        .emit();

        Ok(Tick::Alive {
            state: GameState {
                snake,
                apple,
                heading,
                rng,
                steps: steps.wrapping_add(1),
            },
            delta,
            ate_apple: false,
        })
    }

    /// Delta for the eating step that fills the board.
    ///
    /// `tick` reports that step as [`CoreError::BoardFull`] and keeps no
    /// state for it, so a renderer uses this to still show the final move.
    pub fn filling_delta(&self, bi: BoardInfo) -> Delta {
        let prev_head = self.snake.head();
        StepChange {
            prev_head,
            new_head: advance(prev_head, self.heading, bi),
            vacated: None,
            new_apple: None,
        }
        .emit()
    }
}
