//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It renders engine snapshots into a simple framebuffer that is flushed to
//! the terminal with run-length diffs.
//!
//! Goals:
//! - Keep `core` deterministic and free of presentation state
//! - Derive click geometry from the same layout that draws the board
//! - Allow control over aspect ratio (e.g. 2 chars wide per tile)

pub mod fall;
pub mod fb;
pub mod game_view;
pub mod renderer;

pub use jewel_shuffle_core as core;
pub use jewel_shuffle_types as types;

pub use fall::{FallAnimation, FALL_FRAMES};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{symbol_glyph, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
