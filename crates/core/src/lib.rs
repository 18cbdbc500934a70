//! Core game logic module - pure, deterministic, and testable
//!
//! This crate owns the snake, the apple, the heading and the random source,
//! and turns one [`GameState`] into the next on every tick. It has **no
//! dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Every rule is a plain function over plain values
//! - **Portable**: Runs in the terminal binary, in tests and in benches alike
//!
//! # Module Structure
//!
//! - [`geometry`]: toroidal stepping, wall classification, random points
//! - [`snake`]: non-empty snake body and membership queries
//! - [`apple`]: apple placement off the snake
//! - [`game_state`]: the tick state machine (alive / collided)
//! - [`delta`]: minimal cell updates produced by a step
//! - [`board`]: renderer-side grid kept current by applying deltas
//! - [`rng`]: small copyable LCG threaded through every random draw
//!
//! # Rules
//!
//! - The board wraps on both axes; walls never stop the snake
//! - Eating the apple grows the snake by one and respawns the apple on a free cell
//! - Moving into any body cell except the tail being vacated ends the game
//! - Reversing the heading is accepted; rejecting it is up to the input layer
//!
//! # Example
//!
//! ```
//! use tui_snake_core::{Board, GameState, Tick};
//! use tui_snake_types::{BoardInfo, Movement};
//!
//! let bi = BoardInfo::new(10, 10);
//! let state = GameState::new(bi, 12345).unwrap();
//! let mut board = Board::from_state(&state, bi);
//!
//! let tick = state.with_heading(Movement::South).tick(bi).unwrap();
//! board.apply(tick.delta());
//!
//! assert!(!tick.is_game_over());
//! assert_eq!(board, Board::from_state(tick.state(), bi));
//! ```

pub mod apple;
pub mod board;
pub mod delta;
pub mod error;
pub mod game_state;
pub mod geometry;
pub mod rng;
pub mod snake;

pub use tui_snake_types as types;

// Re-export commonly used types for convenience
pub use apple::place_apple;
pub use board::Board;
pub use delta::{Delta, StepChange};
pub use error::CoreError;
pub use game_state::{GameState, Tick};
pub use geometry::{advance, is_at_wall, random_point};
pub use rng::SimpleRng;
pub use snake::SnakeSeq;
