//! Pointer translation: screen position to board cell.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::types::{BoardGeometry, Pos};

/// Cell under a left-button press, if any.
///
/// Releases, drags, scrolls, other buttons and presses outside the board all
/// map to `None`, so out-of-bounds clicks never reach the engine.
pub fn cell_for_mouse(event: &MouseEvent, geometry: &BoardGeometry) -> Option<Pos> {
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => geometry.cell_at(event.column, event.row),
        _ => None,
    }
}
