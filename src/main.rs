//! Terminal Jewel Shuffle runner (default binary).
//!
//! Uses crossterm for keyboard and mouse input and the framebuffer renderer
//! for output. Redraws only when an event changed something or tiles are
//! still falling.

use std::time::Duration;

use anyhow::Result;
use crossterm::event;
use tracing::info;

use jewel_shuffle::app::{App, Control};
use jewel_shuffle::config::Config;
use jewel_shuffle::core::{Game, GameRng};
use jewel_shuffle::logging;
use jewel_shuffle::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

const POLL_INTERVAL: Duration = Duration::from_millis(250);
const FRAME_INTERVAL: Duration = Duration::from_millis(60);

fn main() -> Result<()> {
    let config = Config::from_env();
    let _log_guard = logging::init(&config)?;

    let rng = match config.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };
    info!(seed = rng.seed(), "starting game");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config, rng);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, config: &Config, rng: GameRng) -> Result<()> {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let view = GameView::new(config.cell_w, config.cell_h);
    let mut app = App::new(Game::new(rng), view, Viewport::new(w, h));
    let mut fb = FrameBuffer::new(w, h);

    let mut dirty = true;
    loop {
        if dirty {
            app.render_into(&mut fb);
            term.draw_swap(&mut fb)?;
            dirty = false;
        }

        let timeout = if app.is_animating() {
            FRAME_INTERVAL
        } else {
            POLL_INTERVAL
        };
        if !event::poll(timeout)? {
            dirty = app.tick() == Control::Redraw;
            continue;
        }

        let ev = event::read()?;
        if matches!(ev, event::Event::Resize(..)) {
            term.invalidate();
        }
        match app.handle_event(&ev) {
            Control::Quit => {
                info!(score = app.game().score(), moves = app.game().moves(), "quit");
                return Ok(());
            }
            Control::Redraw => dirty = true,
            Control::Idle => {}
        }
    }
}
