//! Board module - manages the jewel grid
//!
//! The board is an N x N grid (8x8 in play) where each slot holds a symbol, or
//! nothing while a clear is being resolved. Storage is a fixed 2D array, so the
//! resolution loop never allocates per cell.
//! Coordinates: `Pos { row, col }`, row 0 at the top, gravity pulls toward row N-1.

use crate::matcher::{self, MatchSet, Run};
use crate::rng::SymbolSource;
use crate::types::{Pos, Symbol, Tile, BOARD_SIZE};

/// The jewel grid.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board<const N: usize = BOARD_SIZE> {
    /// Row-major slots (`cells[row][col]`)
    cells: [[Tile; N]; N],
}

impl<const N: usize> Board<N> {
    /// Create a board with every slot empty
    pub fn empty() -> Self {
        Self {
            cells: [[None; N]; N],
        }
    }

    /// Create a fully populated board from symbol rows (top row first).
    pub fn from_rows(rows: [[Symbol; N]; N]) -> Self {
        Self {
            cells: rows.map(|row| row.map(Some)),
        }
    }

    /// Fill every slot with a freshly drawn symbol, row by row.
    ///
    /// The result may contain matches.
    pub fn filled(source: &mut impl SymbolSource) -> Self {
        let mut board = Self::empty();
        for row in board.cells.iter_mut() {
            for slot in row.iter_mut() {
                *slot = Some(source.next_symbol());
            }
        }
        board
    }

    /// A fixed match-free layout: neighbours along either axis always differ.
    pub fn diagonal() -> Self {
        let mut board = Self::empty();
        for (r, row) in board.cells.iter_mut().enumerate() {
            for (c, slot) in row.iter_mut().enumerate() {
                *slot = Some(Symbol::from_index(r + c));
            }
        }
        board
    }

    /// Edge length of the board
    pub const fn size(&self) -> usize {
        N
    }

    /// Get slot at `pos`
    /// Returns None if out of bounds
    pub fn get(&self, pos: Pos) -> Option<Tile> {
        pos.in_bounds(N).then(|| self.cells[pos.row][pos.col])
    }

    /// Symbol at `pos`, or None if out of bounds or empty
    pub fn symbol(&self, pos: Pos) -> Option<Symbol> {
        self.get(pos).flatten()
    }

    /// Set slot at `pos`
    /// Returns false if out of bounds
    pub fn set(&mut self, pos: Pos, tile: Tile) -> bool {
        if !pos.in_bounds(N) {
            return false;
        }
        self.cells[pos.row][pos.col] = tile;
        true
    }

    /// Exchange the contents of two slots.
    /// Returns false (and leaves the board untouched) if either is out of bounds
    pub fn swap(&mut self, a: Pos, b: Pos) -> bool {
        if !a.in_bounds(N) || !b.in_bounds(N) {
            return false;
        }
        let tmp = self.cells[a.row][a.col];
        self.cells[a.row][a.col] = self.cells[b.row][b.col];
        self.cells[b.row][b.col] = tmp;
        true
    }

    /// True when no slot is empty
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|slot| slot.is_some())
    }

    /// Get a reference to the rows
    pub fn rows(&self) -> &[[Tile; N]; N] {
        &self.cells
    }

    /// Every maximal run of three or more, rows first.
    pub fn find_runs(&self) -> Vec<Run> {
        matcher::find_runs(&self.cells)
    }

    /// Union of all matched cells.
    pub fn find_matches(&self) -> MatchSet<N> {
        MatchSet::from_runs(&self.find_runs())
    }

    /// Cheap check for any match.
    pub fn has_matches(&self) -> bool {
        matcher::has_runs(&self.cells)
    }

    /// Empty every matched slot.
    /// Returns the number of slots that actually held a tile
    pub fn clear_matches(&mut self, matches: &MatchSet<N>) -> usize {
        let mut cleared = 0;
        for pos in matches.iter() {
            if self.cells[pos.row][pos.col].take().is_some() {
                cleared += 1;
            }
        }
        cleared
    }

    /// Let tiles fall: per column, compact surviving tiles downward keeping
    /// their relative order. Vacated slots end up at the top.
    /// Returns the number of tiles that moved
    pub fn collapse(&mut self) -> usize {
        let mut moved = 0;
        for col in 0..N {
            // Two-pointer pass from the bottom: `write` is the next slot to fill.
            let mut write = N;
            for read in (0..N).rev() {
                if let Some(sym) = self.cells[read][col] {
                    write -= 1;
                    if write != read {
                        self.cells[write][col] = Some(sym);
                        self.cells[read][col] = None;
                        moved += 1;
                    }
                }
            }
        }
        moved
    }

    /// Fill empty slots with new symbols, column by column, top to bottom.
    /// Returns the number of slots filled
    pub fn refill(&mut self, source: &mut impl SymbolSource) -> usize {
        let mut filled = 0;
        for col in 0..N {
            for row in 0..N {
                let slot = &mut self.cells[row][col];
                if slot.is_none() {
                    *slot = Some(source.next_symbol());
                    filled += 1;
                }
            }
        }
        filled
    }

    /// Gravity followed by refill.
    pub fn collapse_and_refill(&mut self, source: &mut impl SymbolSource) -> usize {
        self.collapse();
        self.refill(source)
    }
}

impl Default for Board<BOARD_SIZE> {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ScriptedSymbols;
    use Symbol::*;

    #[test]
    fn test_board_get_set_bounds() {
        let mut board = Board::<4>::empty();
        assert_eq!(board.get(Pos::new(0, 0)), Some(None));
        assert_eq!(board.get(Pos::new(4, 0)), None);
        assert!(board.set(Pos::new(3, 3), Some(Red)));
        assert!(!board.set(Pos::new(0, 4), Some(Red)));
        assert_eq!(board.symbol(Pos::new(3, 3)), Some(Red));
    }

    #[test]
    fn test_collapse_is_stable() {
        let mut board = Board::<4>::from_rows([
            [Red, Blue, Green, Yellow],
            [Blue, Green, Yellow, Red],
            [Green, Yellow, Red, Blue],
            [Yellow, Red, Blue, Green],
        ]);
        // Punch holes in column 0 at rows 1 and 3.
        board.set(Pos::new(1, 0), None);
        board.set(Pos::new(3, 0), None);

        let moved = board.collapse();
        assert_eq!(moved, 2);
        assert_eq!(board.get(Pos::new(0, 0)), Some(None));
        assert_eq!(board.get(Pos::new(1, 0)), Some(None));
        assert_eq!(board.symbol(Pos::new(2, 0)), Some(Red));
        assert_eq!(board.symbol(Pos::new(3, 0)), Some(Green));

        // Other columns untouched.
        assert_eq!(board.symbol(Pos::new(0, 1)), Some(Blue));
        assert_eq!(board.symbol(Pos::new(3, 3)), Some(Green));
    }

    #[test]
    fn test_refill_goes_column_by_column_top_down() {
        let mut board = Board::<3>::from_rows([
            [Red, Green, Blue],
            [Green, Blue, Red],
            [Blue, Red, Green],
        ]);
        board.set(Pos::new(0, 0), None);
        board.set(Pos::new(1, 0), None);
        board.set(Pos::new(0, 2), None);

        let mut src = ScriptedSymbols::new(vec![Yellow, Purple, Orange]);
        assert_eq!(board.refill(&mut src), 3);
        assert_eq!(board.symbol(Pos::new(0, 0)), Some(Yellow));
        assert_eq!(board.symbol(Pos::new(1, 0)), Some(Purple));
        assert_eq!(board.symbol(Pos::new(0, 2)), Some(Orange));
        assert!(board.is_full());
    }

    #[test]
    fn test_clear_matches_counts_occupied_slots() {
        let mut board = Board::<3>::from_rows([
            [Red, Red, Red],
            [Blue, Green, Blue],
            [Green, Blue, Green],
        ]);
        let matches = board.find_matches();
        assert_eq!(matches.len(), 3);
        assert_eq!(board.clear_matches(&matches), 3);
        assert!(!board.is_full());
        assert_eq!(board.clear_matches(&matches), 0);
    }

    #[test]
    fn test_diagonal_has_no_matches() {
        assert!(!Board::<8>::diagonal().has_matches());
        assert!(!Board::<13>::diagonal().has_matches());
    }

    #[test]
    fn test_swap_out_of_bounds_is_noop() {
        let mut board = Board::<3>::diagonal();
        let before = board.clone();
        assert!(!board.swap(Pos::new(0, 0), Pos::new(0, 3)));
        assert_eq!(board, before);
    }
}
