//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{BoardGeometry, Pos, Symbol, BOARD_SIZE, MAX_CELL_SIZE};

const BACKGROUND: Rgb = Rgb::new(255, 248, 240);
const PANEL: Rgb = Rgb::new(255, 182, 193);
const TEXT: Rgb = Rgb::new(139, 69, 19);
const GRID: Rgb = Rgb::new(255, 218, 185);
const HIGHLIGHT: Rgb = Rgb::new(255, 215, 0);

const TITLE: &str = "JEWEL SHUFFLE";

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// A lightweight terminal renderer for the jewel board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    /// Cell dimensions are clamped to `1..=MAX_CELL_SIZE`.
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.clamp(1, MAX_CELL_SIZE),
            cell_h: cell_h.clamp(1, MAX_CELL_SIZE),
        }
    }

    /// Where the tiles land for a given viewport.
    ///
    /// Rendering and pointer translation both go through this, so a click is
    /// always mapped to the tile drawn under it.
    pub fn geometry(&self, viewport: Viewport) -> BoardGeometry {
        let (frame_w, frame_h) = self.frame_size();
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;
        BoardGeometry {
            origin_x: start_x + 1,
            origin_y: start_y + 1,
            cell_w: self.cell_w,
            cell_h: self.cell_h,
            cells: BOARD_SIZE as u16,
        }
    }

    fn frame_size(&self) -> (u16, u16) {
        let edge = BOARD_SIZE as u16;
        (
            edge.saturating_mul(self.cell_w).saturating_add(2),
            edge.saturating_mul(self.cell_h).saturating_add(2),
        )
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        cursor: Option<Pos>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        self.render_falling_into(snap, snap, 0, cursor, viewport, fb);
    }

    /// Render `snap` with every tile that differs from `prev` drawn `lift`
    /// rows above its slot, as if still dropping into place.
    ///
    /// Slots whose tile has not landed yet are drawn empty. Tiles lifted above
    /// the top edge are not drawn. A `lift` of 0 is a plain render.
    pub fn render_falling_into(
        &self,
        snap: &GameSnapshot,
        prev: &GameSnapshot,
        lift: usize,
        cursor: Option<Pos>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::new(' ', CellStyle::new(TEXT, BACKGROUND)));

        let geom = self.geometry(viewport);
        let (frame_w, frame_h) = self.frame_size();
        let start_x = geom.origin_x - 1;
        let start_y = geom.origin_y - 1;

        if start_y >= 2 {
            let x = start_x + frame_w.saturating_sub(TITLE.len() as u16) / 2;
            let style = CellStyle::new(TEXT, BACKGROUND).bold();
            fb.put_str(x, start_y - 2, TITLE, style);
        }

        self.draw_border(fb, start_x, start_y, frame_w, frame_h);

        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let pos = Pos::new(row, col);
                let landed = lift == 0 || snap.board[row][col] == prev.board[row][col];
                let symbol = if landed { snap.symbol(pos) } else { None };
                let selected = snap.is_selected(pos);
                self.draw_tile(fb, &geom, pos, symbol, selected, cursor == Some(pos));
            }
        }

        if lift > 0 {
            for pos in snap.changed_cells(prev) {
                let Some(row) = pos.row.checked_sub(lift) else {
                    continue;
                };
                self.draw_tile(fb, &geom, Pos::new(row, pos.col), snap.symbol(pos), false, false);
            }
        }

        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        self.draw_side_panel(fb, snap, viewport, panel_x, start_y);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        snap: &GameSnapshot,
        cursor: Option<Pos>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, cursor, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        let style = CellStyle::new(TEXT, PANEL);

        fb.put_char(x, y, '╭', style);
        fb.put_char(x + w - 1, y, '╮', style);
        fb.put_char(x, y + h - 1, '╰', style);
        fb.put_char(x + w - 1, y + h - 1, '╯', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_tile(
        &self,
        fb: &mut FrameBuffer,
        geom: &BoardGeometry,
        pos: Pos,
        symbol: Option<Symbol>,
        selected: bool,
        focused: bool,
    ) {
        let bg = if selected {
            HIGHLIGHT
        } else if focused {
            GRID
        } else {
            PANEL
        };
        let (x, y) = geom.cell_origin(pos);
        fb.fill_rect(x, y, self.cell_w, self.cell_h, ' ', CellStyle::new(TEXT, bg));

        let (ch, fg) = match symbol {
            Some(sym) => symbol_glyph(sym),
            None => ('·', TEXT),
        };
        let mut style = CellStyle::new(fg, bg);
        if selected || focused {
            style = style.bold();
        }
        // Glyph sits in the middle of the tile (left of centre on even widths).
        let gx = x + (self.cell_w - 1) / 2;
        let gy = y + (self.cell_h - 1) / 2;
        fb.put_char(gx, gy, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        panel_x: u16,
        start_y: u16,
    ) {
        if panel_x >= viewport.width || viewport.width - panel_x < 10 {
            return;
        }

        let label = CellStyle::new(TEXT, BACKGROUND).bold();
        let value = CellStyle::new(TEXT, BACKGROUND);
        let hint = value.dim();

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        y += 1;
        fb.put_u32(panel_x, y, snap.score, value);
        y += 2;

        fb.put_str(panel_x, y, "MOVES", label);
        y += 1;
        fb.put_u32(panel_x, y, snap.moves, value);
        y += 2;

        fb.put_str(panel_x, y, "SELECTED", label);
        y += 1;
        match snap.selected {
            Some(pos) => {
                let x = fb.put_str(panel_x, y, "r", value);
                let x = fb.put_u32(x, y, pos.row as u32, value);
                let x = fb.put_str(x, y, " c", value);
                fb.put_u32(x, y, pos.col as u32, value);
            }
            None => {
                fb.put_str(panel_x, y, "-", value);
            }
        }
        y += 2;

        for line in ["click/space: pick", "arrows: move", "r: new board", "q: quit"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, hint);
            y += 1;
        }
    }
}

/// Glyph and colour for a symbol. Shapes differ too, so colour is not the
/// only cue.
pub fn symbol_glyph(symbol: Symbol) -> (char, Rgb) {
    match symbol {
        Symbol::Red => ('♥', Rgb::new(255, 99, 132)),
        Symbol::Blue => ('◆', Rgb::new(54, 162, 235)),
        Symbol::Green => ('♣', Rgb::new(75, 192, 192)),
        Symbol::Yellow => ('★', Rgb::new(255, 206, 86)),
        Symbol::Purple => ('♠', Rgb::new(153, 102, 255)),
        Symbol::Orange => ('●', Rgb::new(255, 159, 64)),
    }
}
