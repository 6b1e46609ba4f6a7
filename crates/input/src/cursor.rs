//! Keyboard cursor.
//!
//! Presentation-side focus cell for players without a mouse. Moving it never
//! touches the engine; only [`GameAction::Select`] does, through the caller.

use crate::types::{GameAction, Pos};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pos: Pos,
    size: usize,
}

impl Cursor {
    /// Cursor at the top-left cell of a `size` x `size` board.
    pub fn new(size: usize) -> Self {
        Self {
            pos: Pos::new(0, 0),
            size: size.max(1),
        }
    }

    pub fn pos(&self) -> Pos {
        self.pos
    }

    /// Jump to `pos` (clamped), e.g. to follow a mouse click.
    pub fn set(&mut self, pos: Pos) {
        self.pos = Pos::new(pos.row.min(self.size - 1), pos.col.min(self.size - 1));
    }

    /// Apply a cursor action. Returns true if the cursor moved.
    ///
    /// Non-cursor actions are left to the caller and return false.
    pub fn apply(&mut self, action: GameAction) -> bool {
        let before = self.pos;
        let last = self.size - 1;
        match action {
            GameAction::CursorUp => self.pos.row = self.pos.row.saturating_sub(1),
            GameAction::CursorDown => self.pos.row = (self.pos.row + 1).min(last),
            GameAction::CursorLeft => self.pos.col = self.pos.col.saturating_sub(1),
            GameAction::CursorRight => self.pos.col = (self.pos.col + 1).min(last),
            GameAction::Select | GameAction::Restart => {}
        }
        self.pos != before
    }
}
