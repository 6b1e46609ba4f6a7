//! Board engine - pure, deterministic, and testable
//!
//! This crate owns the jewel grid and every rule that mutates it. It has
//! **zero dependencies** on terminals, input devices or I/O, which makes it:
//!
//! - **Deterministic**: same seed (or scripted symbol source) produces the same game
//! - **Testable**: every rule runs on small toy boards through the same code as 8x8
//! - **Portable**: presentation reads snapshots and never mutates engine state
//!
//! # Module Structure
//!
//! - [`board`]: N x N grid storage, clearing, gravity and refill
//! - [`matcher`]: run detection and deduplicated match sets
//! - [`game`]: score, move counter, selection and the swap/cascade rule
//! - [`rng`]: injectable symbol sources
//! - [`snapshot`]: copyable read-only state for renderers
//!
//! # Game Rules
//!
//! - Clicking a cell selects it; clicking it again releases it
//! - Clicking an orthogonal neighbour of the selection spends a move and swaps
//!   the two tiles; the swap sticks only if it forms a run of three or more
//! - Matched cells clear for 10 points each (a cell on two runs counts once),
//!   tiles above fall, new tiles drop in from the top, and the cascade repeats
//!   until the board is quiet
//!
//! # Example
//!
//! ```
//! use jewel_shuffle_core::{Game, GameRng};
//! use jewel_shuffle_types::Pos;
//!
//! let mut game: Game = Game::new(GameRng::new(12345));
//! assert!(game.is_settled());
//!
//! game.select_or_swap(Pos::new(0, 0));
//! game.select_or_swap(Pos::new(0, 1));
//! assert_eq!(game.moves(), 1);
//! assert!(game.is_settled());
//! ```

pub mod board;
pub mod game;
pub mod matcher;
pub mod rng;
pub mod snapshot;

pub use jewel_shuffle_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game::{Game, Resolution, SelectOutcome};
pub use matcher::{find_runs, Axis, MatchSet, Run};
pub use rng::{GameRng, ScriptedSymbols, SymbolSource};
pub use snapshot::GameSnapshot;
