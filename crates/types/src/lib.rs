//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (engine logic, terminal rendering, input translation).
//!
//! # Board Dimensions
//!
//! - **Size**: 8x8 cells, `row` 0 is the top row, `col` 0 the leftmost column
//! - **Symbols**: 6 jewel kinds, drawn uniformly at random
//!
//! # Scoring Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `POINTS_PER_TILE` | 10 | Awarded once per cleared cell |
//! | `MIN_MATCH_LEN` | 3 | Shortest run that clears |
//! | `MAX_CASCADE_ROUNDS` | 256 | Settle loop bound before the board is rerolled |
//! | `MAX_REROLLS` | 16 | Rerolls before falling back to a fixed pattern |
//!
//! # Examples
//!
//! ```
//! use jewel_shuffle_types::{Pos, Symbol, BOARD_SIZE};
//!
//! let sym = Symbol::from_str("purple").unwrap();
//! assert_eq!(sym, Symbol::Purple);
//!
//! let a = Pos::new(3, 4);
//! assert!(a.is_adjacent(Pos::new(3, 5)));
//! assert!(!a.is_adjacent(Pos::new(4, 5)));
//!
//! assert_eq!(BOARD_SIZE, 8);
//! ```

/// Board edge length in cells (8x8)
pub const BOARD_SIZE: usize = 8;

/// Number of distinct jewel symbols
pub const SYMBOL_COUNT: usize = 6;

/// Points awarded for each cleared cell
pub const POINTS_PER_TILE: u32 = 10;

/// Minimum run length that counts as a match
pub const MIN_MATCH_LEN: usize = 3;

/// Clear/refill rounds allowed before the settle loop gives up and rerolls
pub const MAX_CASCADE_ROUNDS: u32 = 256;

/// Full-board rerolls attempted before laying down the fixed fallback pattern
pub const MAX_REROLLS: u32 = 16;

/// Largest tile edge, in terminal cells, a view may use
pub const MAX_CELL_SIZE: u16 = 8;

/// The six jewel kinds.
///
/// Tiles carry no identity beyond their symbol; two reds are interchangeable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    Red,
    Blue,
    Green,
    Yellow,
    Purple,
    Orange,
}

impl Symbol {
    /// All symbols in index order.
    pub const ALL: [Symbol; SYMBOL_COUNT] = [
        Symbol::Red,
        Symbol::Blue,
        Symbol::Green,
        Symbol::Yellow,
        Symbol::Purple,
        Symbol::Orange,
    ];

    /// Map an arbitrary index onto a symbol (wraps modulo [`SYMBOL_COUNT`]).
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % SYMBOL_COUNT]
    }

    /// Position of this symbol in [`Symbol::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Parse symbol from string (case-insensitive, full name or initial)
    ///
    /// # Examples
    ///
    /// ```
    /// use jewel_shuffle_types::Symbol;
    ///
    /// assert_eq!(Symbol::from_str("R"), Some(Symbol::Red));
    /// assert_eq!(Symbol::from_str("orange"), Some(Symbol::Orange));
    /// assert_eq!(Symbol::from_str("pink"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "red" | "r" => Some(Symbol::Red),
            "blue" | "b" => Some(Symbol::Blue),
            "green" | "g" => Some(Symbol::Green),
            "yellow" | "y" => Some(Symbol::Yellow),
            "purple" | "p" => Some(Symbol::Purple),
            "orange" | "o" => Some(Symbol::Orange),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Symbol::Red => "red",
            Symbol::Blue => "blue",
            Symbol::Green => "green",
            Symbol::Yellow => "yellow",
            Symbol::Purple => "purple",
            Symbol::Orange => "orange",
        }
    }
}

/// A board slot.
///
/// - `None`: transiently empty while a clear is being resolved
/// - `Some(Symbol)`: occupied
pub type Tile = Option<Symbol>;

/// A (row, column) coordinate on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Manhattan distance between two cells.
    pub fn distance(self, other: Pos) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// True when the cells share an edge (Manhattan distance exactly 1).
    pub fn is_adjacent(self, other: Pos) -> bool {
        self.distance(other) == 1
    }

    /// True when the cell lies inside an `n` x `n` board.
    pub fn in_bounds(self, n: usize) -> bool {
        self.row < n && self.col < n
    }
}

/// Player intents produced by the keyboard mapping.
///
/// Pointer clicks bypass this and address a cell directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move the keyboard cursor one row up
    CursorUp,
    /// Move the keyboard cursor one row down
    CursorDown,
    /// Move the keyboard cursor one column left
    CursorLeft,
    /// Move the keyboard cursor one column right
    CursorRight,
    /// Select (or swap with) the cell under the cursor
    Select,
    /// Start a fresh board
    Restart,
}

impl GameAction {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "cursorup" => Some(GameAction::CursorUp),
            "cursordown" => Some(GameAction::CursorDown),
            "cursorleft" => Some(GameAction::CursorLeft),
            "cursorright" => Some(GameAction::CursorRight),
            "select" => Some(GameAction::Select),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::CursorUp => "cursorUp",
            GameAction::CursorDown => "cursorDown",
            GameAction::CursorLeft => "cursorLeft",
            GameAction::CursorRight => "cursorRight",
            GameAction::Select => "select",
            GameAction::Restart => "restart",
        }
    }
}

/// Where the board sits on screen, in terminal cells.
///
/// Produced by the view that draws the board and consumed by the pointer
/// translation, so a click always lands on the tile that was drawn there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardGeometry {
    /// Column of the top-left tile's first character
    pub origin_x: u16,
    /// Row of the top-left tile's first character
    pub origin_y: u16,
    /// Terminal columns per tile
    pub cell_w: u16,
    /// Terminal rows per tile
    pub cell_h: u16,
    /// Tiles per board edge
    pub cells: u16,
}

impl BoardGeometry {
    /// Translate a screen position into the tile under it.
    ///
    /// Tile rectangles are half-open, so the right and bottom edges of the board
    /// belong to nothing.
    pub fn cell_at(&self, x: u16, y: u16) -> Option<Pos> {
        if self.cell_w == 0 || self.cell_h == 0 {
            return None;
        }
        let dx = x.checked_sub(self.origin_x)?;
        let dy = y.checked_sub(self.origin_y)?;
        let col = dx / self.cell_w;
        let row = dy / self.cell_h;
        if col >= self.cells || row >= self.cells {
            return None;
        }
        Some(Pos::new(row as usize, col as usize))
    }

    /// Top-left screen position of a tile.
    pub fn cell_origin(&self, pos: Pos) -> (u16, u16) {
        (
            self.origin_x
                .saturating_add((pos.col as u16).saturating_mul(self.cell_w)),
            self.origin_y
                .saturating_add((pos.row as u16).saturating_mul(self.cell_h)),
        )
    }

    /// Board width in terminal columns.
    pub fn width(&self) -> u16 {
        self.cells.saturating_mul(self.cell_w)
    }

    /// Board height in terminal rows.
    pub fn height(&self) -> u16 {
        self.cells.saturating_mul(self.cell_h)
    }
}
