//! Match detection - finds runs of three or more identical symbols
//!
//! Every row and every column is scanned independently. A run is extended
//! greedily to its maximal length before the scan moves past it, so one axis
//! never reports overlapping runs. A cell may still sit on both a horizontal
//! and a vertical run; [`MatchSet`] collapses those into one entry so the cell
//! is cleared and scored once.

use crate::types::{Pos, Symbol, Tile, MIN_MATCH_LEN};

/// Scan direction of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Left to right along a row
    Row,
    /// Top to bottom along a column
    Column,
}

/// A maximal run of at least [`MIN_MATCH_LEN`] identical symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Run {
    pub axis: Axis,
    /// First cell (leftmost or topmost)
    pub start: Pos,
    pub len: usize,
    pub symbol: Symbol,
}

impl Run {
    /// Cells covered by the run, in scan order.
    pub fn cells(&self) -> impl Iterator<Item = Pos> {
        let Run {
            axis, start, len, ..
        } = *self;
        (0..len).map(move |i| match axis {
            Axis::Row => Pos::new(start.row, start.col + i),
            Axis::Column => Pos::new(start.row + i, start.col),
        })
    }
}

/// Collect every qualifying run on the grid, rows first, then columns.
pub fn find_runs<const N: usize>(cells: &[[Tile; N]; N]) -> Vec<Run> {
    let mut runs = Vec::new();

    for row in 0..N {
        scan_line(|i| cells[row][i], N, |start, len, symbol| {
            runs.push(Run {
                axis: Axis::Row,
                start: Pos::new(row, start),
                len,
                symbol,
            })
        });
    }

    for col in 0..N {
        scan_line(|i| cells[i][col], N, |start, len, symbol| {
            runs.push(Run {
                axis: Axis::Column,
                start: Pos::new(start, col),
                len,
                symbol,
            })
        });
    }

    runs
}

/// True if any row or column holds a qualifying run.
///
/// Stops at the first hit and does not allocate.
pub fn has_runs<const N: usize>(cells: &[[Tile; N]; N]) -> bool {
    (0..N).any(|line| {
        line_has_run(|i| cells[line][i], N) || line_has_run(|i| cells[i][line], N)
    })
}

/// Like [`scan_line`], but returns as soon as one run qualifies.
fn line_has_run(tile_at: impl Fn(usize) -> Tile, len: usize) -> bool {
    let mut streak = 0;
    let mut last = None;
    for i in 0..len {
        let tile = tile_at(i);
        streak = if tile.is_some() && tile == last { streak + 1 } else { 1 };
        last = tile;
        if tile.is_some() && streak >= MIN_MATCH_LEN {
            return true;
        }
    }
    false
}

/// Walk one line, emitting `(start, len, symbol)` for every maximal run that
/// qualifies. Empty slots break runs.
fn scan_line(
    tile_at: impl Fn(usize) -> Tile,
    len: usize,
    mut emit: impl FnMut(usize, usize, Symbol),
) {
    let mut i = 0;
    while i < len {
        let Some(symbol) = tile_at(i) else {
            i += 1;
            continue;
        };

        let mut j = i + 1;
        while j < len && tile_at(j) == Some(symbol) {
            j += 1;
        }

        if j - i >= MIN_MATCH_LEN {
            emit(i, j - i, symbol);
        }
        i = j;
    }
}

/// Deduplicated set of matched cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchSet<const N: usize> {
    mask: [[bool; N]; N],
    count: usize,
}

impl<const N: usize> MatchSet<N> {
    pub fn new() -> Self {
        Self {
            mask: [[false; N]; N],
            count: 0,
        }
    }

    /// Union of the cells of every run.
    pub fn from_runs(runs: &[Run]) -> Self {
        let mut set = Self::new();
        for run in runs {
            for pos in run.cells() {
                set.insert(pos);
            }
        }
        set
    }

    /// Add a cell. Returns false if it was already present or out of bounds.
    pub fn insert(&mut self, pos: Pos) -> bool {
        if !pos.in_bounds(N) || self.mask[pos.row][pos.col] {
            return false;
        }
        self.mask[pos.row][pos.col] = true;
        self.count += 1;
        true
    }

    pub fn contains(&self, pos: Pos) -> bool {
        pos.in_bounds(N) && self.mask[pos.row][pos.col]
    }

    /// Number of distinct cells.
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Matched cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..N)
            .flat_map(|row| (0..N).map(move |col| Pos::new(row, col)))
            .filter(|pos| self.mask[pos.row][pos.col])
    }
}

impl<const N: usize> Default for MatchSet<N> {
    fn default() -> Self {
        Self::new()
    }
}
