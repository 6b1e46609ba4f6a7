//! Terminal input module (engine-facing).
//!
//! This crate is the interaction adapter between a terminal and the board
//! engine. It owns no game state: it translates `crossterm` mouse events into
//! board cells, keyboard events into [`crate::types::GameAction`], and tracks
//! the keyboard cursor that stands in for a pointer.

pub mod cursor;
pub mod map;
pub mod pointer;

pub use jewel_shuffle_types as types;

pub use cursor::Cursor;
pub use map::{handle_key_event, should_quit};
pub use pointer::cell_for_mouse;
