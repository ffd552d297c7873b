//! Menu rendering.
//!
//! Data-driven: the selected position's [`Window`](crate::menu::Window)
//! says which labels are visible and where the cursor goes.

use crate::display::TextDisplay;
use crate::error::Error;
use crate::menu::MenuPosition;

/// Selection marker drawn in column 0.
pub const CURSOR: &str = ">";

/// Redraw the menu around `position`.
///
/// Returns `Ok(false)` without touching the display for action positions,
/// which are drawn by their editor instead.
pub fn draw_menu<D: TextDisplay>(display: &mut D, position: MenuPosition) -> Result<bool, Error> {
    let Some(window) = position.window() else {
        return Ok(false);
    };

    display.clear()?;
    display.print_at(0, window.cursor_row, CURSOR)?;

    let labels = window.submenu.labels();
    let start = window.start as usize;
    let end = start + window.count as usize;
    for (row, label) in labels[start..end].iter().enumerate() {
        display.print_at(1, row as u8, label)?;
    }
    Ok(true)
}
