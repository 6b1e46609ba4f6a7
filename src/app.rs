//! App: wires terminal events to the engine.
//!
//! Owns the game, the keyboard cursor and the view layout. Pointer clicks are
//! translated to cells through the same geometry the view draws with, then
//! passed straight to [`Game::select_or_swap`]. Board changes are shown
//! through a short fall-in animation advanced by [`App::tick`].

use crossterm::event::{Event, KeyEventKind};
use tracing::info;

use crate::core::{Game, GameRng, SelectOutcome, SymbolSource};
use crate::input::{cell_for_mouse, handle_key_event, should_quit, Cursor};
use crate::term::{FallAnimation, FrameBuffer, GameView, Viewport};
use crate::types::{GameAction, Pos, BOARD_SIZE};

/// What the event loop should do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Nothing visible changed
    Idle,
    /// Draw a new frame
    Redraw,
    /// Leave the game
    Quit,
}

pub struct App<S: SymbolSource = GameRng> {
    game: Game<S>,
    cursor: Cursor,
    view: GameView,
    viewport: Viewport,
    fall: FallAnimation,
}

impl<S: SymbolSource> App<S> {
    pub fn new(game: Game<S>, view: GameView, viewport: Viewport) -> Self {
        let fall = FallAnimation::new(game.snapshot());
        Self {
            game,
            cursor: Cursor::new(BOARD_SIZE),
            view,
            viewport,
            fall,
        }
    }

    pub fn game(&self) -> &Game<S> {
        &self.game
    }

    pub fn cursor(&self) -> Pos {
        self.cursor.pos()
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// True while tiles are still dropping into place.
    pub fn is_animating(&self) -> bool {
        self.fall.is_running()
    }

    /// Advance the fall-in animation by one frame.
    pub fn tick(&mut self) -> Control {
        if self.fall.tick() {
            Control::Redraw
        } else {
            Control::Idle
        }
    }

    pub fn handle_event(&mut self, event: &Event) -> Control {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(*key) {
                    return Control::Quit;
                }
                match handle_key_event(*key) {
                    Some(action) => self.apply_action(action),
                    None => Control::Idle,
                }
            }
            Event::Mouse(mouse) => {
                let geometry = self.view.geometry(self.viewport);
                match cell_for_mouse(mouse, &geometry) {
                    Some(pos) => {
                        self.cursor.set(pos);
                        self.select(pos);
                        Control::Redraw
                    }
                    None => Control::Idle,
                }
            }
            Event::Resize(w, h) => {
                self.viewport = Viewport::new(*w, *h);
                Control::Redraw
            }
            _ => Control::Idle,
        }
    }

    pub fn apply_action(&mut self, action: GameAction) -> Control {
        match action {
            GameAction::Select => {
                self.select(self.cursor.pos());
                Control::Redraw
            }
            GameAction::Restart => {
                self.game.restart();
                self.fall.update(&self.game.snapshot());
                info!("new board");
                Control::Redraw
            }
            _ => {
                if self.cursor.apply(action) {
                    Control::Redraw
                } else {
                    Control::Idle
                }
            }
        }
    }

    /// Forward a click on `pos` to the engine.
    pub fn select(&mut self, pos: Pos) -> SelectOutcome {
        let outcome = self.game.select_or_swap(pos);
        self.fall.update(&self.game.snapshot());
        if let SelectOutcome::SwapAccepted { resolution, .. } = outcome {
            info!(
                points = resolution.points,
                rounds = resolution.rounds,
                score = self.game.score(),
                moves = self.game.moves(),
                "match cleared"
            );
        }
        outcome
    }

    pub fn render_into(&self, fb: &mut FrameBuffer) {
        self.fall
            .render_into(&self.view, Some(self.cursor.pos()), self.viewport, fb);
    }
}
