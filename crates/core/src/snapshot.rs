//! Read-only view of a game for presentation.
//!
//! A snapshot is a plain copy: renderers can hold it across frames and diff
//! consecutive snapshots to drive animation without touching engine state.

use crate::types::{Pos, Symbol, Tile, BOARD_SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot<const N: usize = BOARD_SIZE> {
    /// `board[row][col]`, always fully populated once taken from a game
    pub board: [[Tile; N]; N],
    pub score: u32,
    pub moves: u32,
    pub selected: Option<Pos>,
    pub revision: u32,
}

impl<const N: usize> GameSnapshot<N> {
    pub fn new() -> Self {
        Self {
            board: [[None; N]; N],
            score: 0,
            moves: 0,
            selected: None,
            revision: 0,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Symbol at `pos`, or None if out of bounds or empty
    pub fn symbol(&self, pos: Pos) -> Option<Symbol> {
        if !pos.in_bounds(N) {
            return None;
        }
        self.board[pos.row][pos.col]
    }

    pub fn is_selected(&self, pos: Pos) -> bool {
        self.selected == Some(pos)
    }

    /// Cells whose symbol differs between two snapshots, row-major.
    pub fn changed_cells<'a>(&'a self, prev: &'a Self) -> impl Iterator<Item = Pos> + 'a {
        (0..N)
            .flat_map(|row| (0..N).map(move |col| Pos::new(row, col)))
            .filter(move |p| self.board[p.row][p.col] != prev.board[p.row][p.col])
    }
}

impl<const N: usize> Default for GameSnapshot<N> {
    fn default() -> Self {
        Self::new()
    }
}
