//! Jewel Shuffle (workspace facade crate).
//!
//! Re-exports the member crates as `jewel_shuffle::{core,input,term,types}` and
//! hosts the pieces that only the binary needs: event handling, configuration
//! and logging.

pub mod app;
pub mod config;
pub mod logging;

pub use jewel_shuffle_core as core;
pub use jewel_shuffle_input as input;
pub use jewel_shuffle_term as term;
pub use jewel_shuffle_types as types;
