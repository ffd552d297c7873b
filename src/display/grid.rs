//! In-memory character grid.
//!
//! Mirrors what the LCD would show. Used as the display in host tests and
//! anywhere the screen contents need to be inspected.

use super::TextDisplay;
use crate::config::{LCD_COLS, LCD_ROWS};
use crate::error::Error;

const COLS: usize = LCD_COLS as usize;
const ROWS: usize = LCD_ROWS as usize;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CharGrid {
    cells: [[u8; COLS]; ROWS],
    col: u8,
    row: u8,
    clears: u32,
}

impl CharGrid {
    pub const fn new() -> Self {
        Self {
            cells: [[b' '; COLS]; ROWS],
            col: 0,
            row: 0,
            clears: 0,
        }
    }

    /// Full contents of one row (always 16 characters).
    pub fn row(&self, row: u8) -> &str {
        self.cells
            .get(row as usize)
            .and_then(|cells| core::str::from_utf8(cells).ok())
            .unwrap_or("")
    }

    /// Character at a cell, `None` when outside the grid.
    pub fn cell(&self, col: u8, row: u8) -> Option<char> {
        self.cells
            .get(row as usize)
            .and_then(|cells| cells.get(col as usize))
            .map(|&b| b as char)
    }

    /// Number of full clears since creation.
    pub fn clear_count(&self) -> u32 {
        self.clears
    }

    pub fn cursor(&self) -> (u8, u8) {
        (self.col, self.row)
    }
}

impl Default for CharGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl TextDisplay for CharGrid {
    fn clear(&mut self) -> Result<(), Error> {
        self.cells = [[b' '; COLS]; ROWS];
        self.col = 0;
        self.row = 0;
        self.clears += 1;
        Ok(())
    }

    fn set_cursor(&mut self, col: u8, row: u8) -> Result<(), Error> {
        self.col = col;
        self.row = row;
        Ok(())
    }

    fn write_str(&mut self, text: &str) -> Result<(), Error> {
        for b in text.bytes() {
            // Writes past the visible area land in hidden DDRAM on the real
            // controller; here they are simply dropped.
            if let Some(cell) = self
                .cells
                .get_mut(self.row as usize)
                .and_then(|cells| cells.get_mut(self.col as usize))
            {
                *cell = if b.is_ascii() { b } else { b'?' };
            }
            self.col = self.col.saturating_add(1);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_land_at_cursor() {
        let mut grid = CharGrid::new();
        grid.print_at(3, 1, "abc").unwrap();
        assert_eq!(grid.row(1), "   abc          ");
        assert_eq!(grid.cursor(), (6, 1));
    }

    #[test]
    fn overflow_is_dropped() {
        let mut grid = CharGrid::new();
        grid.print_at(14, 0, "xyz").unwrap();
        assert_eq!(grid.cell(14, 0), Some('x'));
        assert_eq!(grid.cell(15, 0), Some('y'));
        assert_eq!(grid.cell(16, 0), None);
    }

    #[test]
    fn clear_row_blanks_only_that_row() {
        let mut grid = CharGrid::new();
        grid.print_at(0, 0, "top").unwrap();
        grid.print_at(0, 1, "bottom").unwrap();
        grid.clear_row(1).unwrap();
        assert_eq!(grid.row(0).trim_end(), "top");
        assert_eq!(grid.row(1).trim_end(), "");
        assert_eq!(grid.clear_count(), 0);
    }
}
