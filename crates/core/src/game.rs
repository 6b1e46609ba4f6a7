//! Game state - board, score, move counter and the selection/swap rule
//!
//! [`Game::select_or_swap`] is the only mutator driven by player input. Each
//! call runs to completion, including the whole cascade loop, so callers only
//! ever observe settled, match-free boards.

use tracing::{debug, error, warn};

use crate::board::Board;
use crate::rng::{GameRng, SymbolSource};
use crate::snapshot::GameSnapshot;
use crate::types::{Pos, BOARD_SIZE, MAX_CASCADE_ROUNDS, MAX_REROLLS, POINTS_PER_TILE};

/// Summary of one clear/refill cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Resolution {
    /// Clear/refill rounds run before the board settled
    pub rounds: u32,
    /// Distinct cells cleared across all rounds
    pub cleared: u32,
    /// Points awarded
    pub points: u32,
}

/// What a call to [`Game::select_or_swap`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// Nothing was selected; `pos` now is
    Selected(Pos),
    /// The selected cell was clicked again and released
    Deselected(Pos),
    /// A non-adjacent cell took over the selection (no move spent)
    Reselected { from: Pos, to: Pos },
    /// Adjacent swap formed no match and was reverted (move spent)
    SwapRejected { a: Pos, b: Pos },
    /// Adjacent swap formed a match and the board was resolved (move spent)
    SwapAccepted {
        a: Pos,
        b: Pos,
        resolution: Resolution,
    },
    /// Position outside the board
    Ignored,
}

impl SelectOutcome {
    /// True for both swap outcomes.
    pub fn spent_move(&self) -> bool {
        matches!(
            self,
            SelectOutcome::SwapRejected { .. } | SelectOutcome::SwapAccepted { .. }
        )
    }
}

/// A single game session.
#[derive(Debug, Clone)]
pub struct Game<S: SymbolSource = GameRng, const N: usize = BOARD_SIZE> {
    board: Board<N>,
    score: u32,
    moves: u32,
    selected: Option<Pos>,
    /// Bumped whenever observable state changes
    revision: u32,
    source: S,
}

impl<S: SymbolSource, const N: usize> Game<S, N> {
    /// Start a session on a random match-free board.
    pub fn new(mut source: S) -> Self {
        let board = seed_board(&mut source);
        Self {
            board,
            score: 0,
            moves: 0,
            selected: None,
            revision: 0,
            source,
        }
    }

    /// Start a session on a caller-built board.
    ///
    /// Empty slots are refilled and existing matches resolved before play,
    /// without awarding points.
    pub fn with_board(board: Board<N>, source: S) -> Self {
        let mut game = Self {
            board,
            score: 0,
            moves: 0,
            selected: None,
            revision: 0,
            source,
        };
        if !game.board.is_full() {
            game.board.collapse_and_refill(&mut game.source);
        }
        game.settle(false);
        game
    }

    /// Throw away the current board and start over.
    pub fn restart(&mut self) {
        self.board = seed_board(&mut self.source);
        self.score = 0;
        self.moves = 0;
        self.selected = None;
        self.bump();
        debug!("game restarted");
    }

    /// Handle one click on `pos`.
    ///
    /// - nothing selected: select `pos`
    /// - `pos` is the selection: deselect
    /// - `pos` is adjacent to the selection: spend a move and try the swap;
    ///   selection is cleared either way
    /// - otherwise: move the selection to `pos`
    pub fn select_or_swap(&mut self, pos: Pos) -> SelectOutcome {
        if !pos.in_bounds(N) {
            debug!(row = pos.row, col = pos.col, "click outside board ignored");
            return SelectOutcome::Ignored;
        }

        let outcome = match self.selected {
            None => {
                self.selected = Some(pos);
                SelectOutcome::Selected(pos)
            }
            Some(current) if current == pos => {
                self.selected = None;
                SelectOutcome::Deselected(pos)
            }
            Some(current) if current.is_adjacent(pos) => {
                self.moves = self.moves.saturating_add(1);
                self.selected = None;
                self.try_swap(current, pos)
            }
            Some(current) => {
                self.selected = Some(pos);
                SelectOutcome::Reselected {
                    from: current,
                    to: pos,
                }
            }
        };

        self.bump();
        outcome
    }

    fn try_swap(&mut self, a: Pos, b: Pos) -> SelectOutcome {
        self.board.swap(a, b);

        if !self.board.has_matches() {
            self.board.swap(a, b);
            debug!(moves = self.moves, "swap rejected");
            return SelectOutcome::SwapRejected { a, b };
        }

        let resolution = self.settle(true);
        debug!(
            moves = self.moves,
            rounds = resolution.rounds,
            cleared = resolution.cleared,
            score = self.score,
            "swap accepted"
        );
        SelectOutcome::SwapAccepted { a, b, resolution }
    }

    /// Clear, drop and refill until no match remains.
    fn settle(&mut self, scoring: bool) -> Resolution {
        let mut res = Resolution::default();
        loop {
            let matches = self.board.find_matches();
            if matches.is_empty() {
                return res;
            }

            if res.rounds >= MAX_CASCADE_ROUNDS {
                warn!(rounds = res.rounds, "cascade did not settle, rerolling board");
                self.board = seed_board(&mut self.source);
                return res;
            }

            let cleared = self.board.clear_matches(&matches) as u32;
            res.rounds += 1;
            res.cleared += cleared;
            if scoring {
                let points = cleared * POINTS_PER_TILE;
                res.points += points;
                self.score = self.score.saturating_add(points);
            }

            self.board.collapse_and_refill(&mut self.source);
            debug!(round = res.rounds, cleared, "cascade round");
        }
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }

    pub fn board(&self) -> &Board<N> {
        &self.board
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn selected(&self) -> Option<Pos> {
        self.selected
    }

    pub fn revision(&self) -> u32 {
        self.revision
    }

    /// True when the board is full and holds no match.
    pub fn is_settled(&self) -> bool {
        self.board.is_full() && !self.board.has_matches()
    }

    /// Copy the observable state out.
    pub fn snapshot(&self) -> GameSnapshot<N> {
        let mut snap = GameSnapshot::new();
        self.snapshot_into(&mut snap);
        snap
    }

    /// Copy the observable state into an existing snapshot without allocating.
    pub fn snapshot_into(&self, out: &mut GameSnapshot<N>) {
        out.board = *self.board.rows();
        out.score = self.score;
        out.moves = self.moves;
        out.selected = self.selected;
        out.revision = self.revision;
    }
}

/// Produce a random match-free board without scoring.
///
/// Rerolls a bounded number of times, then falls back to a fixed layout so the
/// call always terminates, even for degenerate sources.
fn seed_board<const N: usize>(source: &mut impl SymbolSource) -> Board<N> {
    for attempt in 0..=MAX_REROLLS {
        let mut board = Board::filled(source);
        if settle_quietly(&mut board, source) {
            return board;
        }
        warn!(attempt, "board did not settle while seeding, rerolling");
    }

    error!("no settled board after {} rerolls, using fixed layout", MAX_REROLLS);
    Board::diagonal()
}

/// Unscored settle loop. Returns false if it hit the round limit.
fn settle_quietly<const N: usize>(board: &mut Board<N>, source: &mut impl SymbolSource) -> bool {
    for _ in 0..MAX_CASCADE_ROUNDS {
        let matches = board.find_matches();
        if matches.is_empty() {
            return true;
        }
        board.clear_matches(&matches);
        board.collapse_and_refill(source);
    }
    !board.has_matches()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ScriptedSymbols;
    use crate::types::Symbol::{self, *};

    fn latin3() -> Board<3> {
        Board::from_rows([[Red, Green, Blue], [Green, Blue, Red], [Blue, Red, Green]])
    }

    #[test]
    fn test_new_game_is_settled() {
        for seed in 0..20 {
            let game: Game = Game::new(GameRng::new(seed));
            assert!(game.is_settled(), "seed {} left matches", seed);
            assert_eq!(game.score(), 0);
            assert_eq!(game.moves(), 0);
            assert_eq!(game.selected(), None);
        }
    }

    #[test]
    fn test_select_then_deselect() {
        let mut game = Game::with_board(latin3(), ScriptedSymbols::new(vec![Yellow]));
        let p = Pos::new(1, 1);
        assert_eq!(game.select_or_swap(p), SelectOutcome::Selected(p));
        assert_eq!(game.selected(), Some(p));
        assert_eq!(game.select_or_swap(p), SelectOutcome::Deselected(p));
        assert_eq!(game.selected(), None);
        assert_eq!(game.moves(), 0);
    }

    #[test]
    fn test_non_adjacent_click_moves_selection() {
        let mut game = Game::with_board(latin3(), ScriptedSymbols::new(vec![Yellow]));
        game.select_or_swap(Pos::new(0, 0));
        let outcome = game.select_or_swap(Pos::new(2, 2));
        assert_eq!(
            outcome,
            SelectOutcome::Reselected {
                from: Pos::new(0, 0),
                to: Pos::new(2, 2)
            }
        );
        assert_eq!(game.selected(), Some(Pos::new(2, 2)));
        assert_eq!(game.moves(), 0);
    }

    #[test]
    fn test_diagonal_neighbour_is_not_adjacent() {
        let mut game = Game::with_board(latin3(), ScriptedSymbols::new(vec![Yellow]));
        game.select_or_swap(Pos::new(0, 0));
        let outcome = game.select_or_swap(Pos::new(1, 1));
        assert!(matches!(outcome, SelectOutcome::Reselected { .. }));
        assert_eq!(game.moves(), 0);
    }

    #[test]
    fn test_out_of_bounds_is_ignored() {
        let mut game = Game::with_board(latin3(), ScriptedSymbols::new(vec![Yellow]));
        let rev = game.revision();
        assert_eq!(game.select_or_swap(Pos::new(3, 0)), SelectOutcome::Ignored);
        assert_eq!(game.revision(), rev);
        assert_eq!(game.selected(), None);
    }

    #[test]
    fn test_with_board_resolves_without_scoring() {
        let board = Board::<3>::from_rows([
            [Red, Red, Red],
            [Green, Blue, Green],
            [Blue, Green, Blue],
        ]);
        let game = Game::with_board(board, ScriptedSymbols::new(vec![Yellow, Purple, Orange]));
        assert!(game.is_settled());
        assert_eq!(game.score(), 0);
    }

    #[test]
    fn test_degenerate_source_falls_back_to_fixed_layout() {
        // A source that only ever yields red cannot produce a settled board.
        let game: Game<ScriptedSymbols, 4> = Game::new(ScriptedSymbols::new(vec![Red]));
        assert!(game.is_settled());
        assert_eq!(*game.board(), Board::<4>::diagonal());
    }

    #[test]
    fn test_rejected_swap_restores_board() {
        let mut game = Game::with_board(
            Board::<3>::from_rows([[Red, Green, Red], [Green, Red, Green], [Blue, Blue, Red]]),
            ScriptedSymbols::new(Symbol::ALL.to_vec()),
        );
        assert!(game.is_settled());
        // Row 2 becomes [Blue, Red, Red] and column 1 [Green, Blue, Red]: no match.
        let before = game.board().clone();
        game.select_or_swap(Pos::new(2, 1));
        let outcome = game.select_or_swap(Pos::new(1, 1));
        assert_eq!(
            outcome,
            SelectOutcome::SwapRejected {
                a: Pos::new(2, 1),
                b: Pos::new(1, 1)
            }
        );
        assert_eq!(*game.board(), before);
        assert_eq!(game.moves(), 1);
    }

    #[test]
    fn test_snapshot_mirrors_state() {
        let mut game = Game::with_board(latin3(), ScriptedSymbols::new(vec![Yellow]));
        game.select_or_swap(Pos::new(2, 0));
        let snap = game.snapshot();
        assert_eq!(snap.board, *game.board().rows());
        assert_eq!(snap.selected, Some(Pos::new(2, 0)));
        assert_eq!(snap.revision, game.revision());
        assert_eq!(snap.score, 0);
    }

    #[test]
    fn test_restart_resets_counters() {
        let mut game: Game = Game::new(GameRng::new(3));
        game.select_or_swap(Pos::new(0, 0));
        game.select_or_swap(Pos::new(0, 1));
        assert_eq!(game.moves(), 1);
        game.restart();
        assert_eq!(game.moves(), 0);
        assert_eq!(game.score(), 0);
        assert_eq!(game.selected(), None);
        assert!(game.is_settled());
    }
}
