//! Fall-in overlay between two settled boards.
//!
//! The engine only ever hands out settled snapshots. When the board changes,
//! the tiles that differ from the last board shown are drawn a few rows above
//! their slot and dropped one row per frame until they land.

use crate::core::GameSnapshot;
use crate::fb::FrameBuffer;
use crate::game_view::{GameView, Viewport};
use crate::types::Pos;

/// Frames a changed tile takes to land (and rows it starts above its slot).
pub const FALL_FRAMES: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallAnimation {
    /// Board shown before the latest change
    prev: GameSnapshot,
    /// Latest settled state
    current: GameSnapshot,
    /// Rows still to fall; 0 when idle
    lift: usize,
}

impl FallAnimation {
    /// Start idle on `snap`.
    pub fn new(snap: GameSnapshot) -> Self {
        Self {
            prev: snap,
            current: snap,
            lift: 0,
        }
    }

    /// Take a new snapshot. Restarts the drop if the board differs from the
    /// one last taken; other changes (score, selection) just show up.
    ///
    /// Returns true while an animation is running.
    pub fn update(&mut self, snap: &GameSnapshot) -> bool {
        if snap.board != self.current.board {
            self.prev = self.current;
            self.lift = FALL_FRAMES;
        }
        self.current = *snap;
        self.is_running()
    }

    /// Advance one frame. Returns true if a frame still needs drawing.
    pub fn tick(&mut self) -> bool {
        if self.lift == 0 {
            return false;
        }
        self.lift -= 1;
        if self.lift == 0 {
            self.prev = self.current;
        }
        true
    }

    pub fn is_running(&self) -> bool {
        self.lift > 0
    }

    pub fn lift(&self) -> usize {
        self.lift
    }

    pub fn current(&self) -> &GameSnapshot {
        &self.current
    }

    /// Draw the current frame.
    pub fn render_into(
        &self,
        view: &GameView,
        cursor: Option<Pos>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        view.render_falling_into(&self.current, &self.prev, self.lift, cursor, viewport, fb);
    }
}
