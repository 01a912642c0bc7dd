//! Console presentation module.
//!
//! This is a small, line-oriented presentation layer for the menu game.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Build every output block as plain data ([`Line`]s) before any I/O
//! - Flush whole blocks at once so state displays never appear half-drawn

pub mod game_view;
pub mod renderer;

pub use tetris_stack_core as core;
pub use tetris_stack_types as types;

pub use game_view::{GameView, Line, LineKind};
pub use renderer::{encode_lines_into, ConsoleRenderer};
