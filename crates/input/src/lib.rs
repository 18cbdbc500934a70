//! Terminal input module (engine-facing).
//!
//! This module is independent of any UI framework. It maps `crossterm` key
//! events into [`crate::types::GameAction`] and buffers turns between ticks so
//! that two quick presses inside one tick (e.g. up then left to U-turn) are
//! both applied, one per tick.

pub mod handler;
pub mod map;

pub use tui_snake_types as types;

pub use handler::TurnBuffer;
pub use map::{handle_key_event, should_quit};
