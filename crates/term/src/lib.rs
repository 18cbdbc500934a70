//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal gameplay. It renders the
//! board model into a simple framebuffer that is then flushed to the terminal.
//!
//! Goals:
//! - Keep `core` deterministic and free of I/O
//! - Only send changed glyphs to the terminal after the first frame
//! - Allow precise control over aspect ratio (2 chars wide per cell)

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use fb::{CellStyle, FrameBuffer, Glyph, Rgb};
pub use game_view::{AnchorY, GameView, HudInfo, PlayStatus, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, for_each_changed_run, Run, TerminalRenderer};
