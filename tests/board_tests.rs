//! Board tests - grid storage, matching, gravity and refill

use jewel_shuffle::core::{Axis, Board, ScriptedSymbols};
use jewel_shuffle::types::{Pos, Symbol::*, BOARD_SIZE};

#[test]
fn test_board_empty() {
    let board: Board = Board::empty();
    assert_eq!(board.size(), BOARD_SIZE);
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            assert_eq!(board.get(Pos::new(row, col)), Some(None));
        }
    }
    assert!(!board.is_full());
}

#[test]
fn test_board_get_out_of_bounds() {
    let board: Board = Board::empty();
    assert_eq!(board.get(Pos::new(BOARD_SIZE, 0)), None);
    assert_eq!(board.get(Pos::new(0, BOARD_SIZE)), None);
    assert_eq!(board.symbol(Pos::new(BOARD_SIZE, BOARD_SIZE)), None);
}

#[test]
fn test_board_swap() {
    let mut board = Board::<3>::from_rows([
        [Red, Green, Blue],
        [Green, Blue, Red],
        [Blue, Red, Green],
    ]);
    assert!(board.swap(Pos::new(0, 0), Pos::new(0, 1)));
    assert_eq!(board.symbol(Pos::new(0, 0)), Some(Green));
    assert_eq!(board.symbol(Pos::new(0, 1)), Some(Red));
}

#[test]
fn test_find_runs_reports_both_axes() {
    // Row 3 holds a run of four greens; column 0 a run of three reds.
    let board = Board::<5>::from_rows([
        [Red, Blue, Yellow, Blue, Yellow],
        [Red, Yellow, Blue, Yellow, Blue],
        [Red, Blue, Yellow, Blue, Yellow],
        [Purple, Green, Green, Green, Green],
        [Blue, Yellow, Blue, Yellow, Blue],
    ]);
    let runs = board.find_runs();
    assert_eq!(runs.len(), 2);

    assert_eq!(runs[0].axis, Axis::Row);
    assert_eq!(runs[0].start, Pos::new(3, 1));
    assert_eq!(runs[0].len, 4);
    assert_eq!(runs[0].symbol, Green);

    assert_eq!(runs[1].axis, Axis::Column);
    assert_eq!(runs[1].start, Pos::new(0, 0));
    assert_eq!(runs[1].len, 3);
    assert_eq!(runs[1].symbol, Red);

    assert_eq!(board.find_matches().len(), 7);
}

#[test]
fn test_l_shape_shares_corner() {
    let board = Board::<4>::from_rows([
        [Orange, Blue, Green, Blue],
        [Orange, Green, Blue, Green],
        [Orange, Orange, Orange, Blue],
        [Blue, Green, Blue, Green],
    ]);
    let matches = board.find_matches();
    // 3 in the column + 3 in the row - 1 shared corner at (2, 0).
    assert_eq!(matches.len(), 5);
    assert!(matches.contains(Pos::new(2, 0)));
}

#[test]
fn test_clear_collapse_refill_column() {
    // Column 1 loses its middle two tiles; the top tile must fall to row 2.
    let mut board = Board::<4>::from_rows([
        [Red, Yellow, Red, Blue],
        [Blue, Green, Blue, Red],
        [Red, Green, Red, Blue],
        [Blue, Purple, Blue, Red],
    ]);
    board.set(Pos::new(1, 1), None);
    board.set(Pos::new(2, 1), None);

    let mut src = ScriptedSymbols::new(vec![Orange, Blue]);
    assert_eq!(board.collapse_and_refill(&mut src), 2);

    assert_eq!(board.symbol(Pos::new(0, 1)), Some(Orange));
    assert_eq!(board.symbol(Pos::new(1, 1)), Some(Blue));
    assert_eq!(board.symbol(Pos::new(2, 1)), Some(Yellow));
    assert_eq!(board.symbol(Pos::new(3, 1)), Some(Purple));
    assert!(board.is_full());
}

#[test]
fn test_collapse_leaves_full_columns_alone() {
    let mut board = Board::<3>::diagonal();
    let before = board.clone();
    assert_eq!(board.collapse(), 0);
    assert_eq!(board, before);
}
