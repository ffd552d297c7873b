//! Display surface - a 16x2 character grid.
//!
//! Everything that draws (menu render, editors) goes through
//! [`TextDisplay`], so the same code drives the real HD44780 and the
//! in-memory grid used by host tests.

pub mod grid;
pub mod lcd;

pub use grid::CharGrid;
pub use lcd::Lcd;

use crate::config::LCD_COLS;
use crate::error::Error;

/// Character-cell display addressed by (column, row), 0-indexed.
pub trait TextDisplay {
    /// Blank the whole display and home the cursor.
    fn clear(&mut self) -> Result<(), Error>;

    /// Move the write position.
    fn set_cursor(&mut self, col: u8, row: u8) -> Result<(), Error>;

    /// Write text at the cursor, advancing it one cell per character.
    fn write_str(&mut self, text: &str) -> Result<(), Error>;

    fn print_at(&mut self, col: u8, row: u8, text: &str) -> Result<(), Error> {
        self.set_cursor(col, row)?;
        self.write_str(text)
    }

    /// Overwrite one row with spaces.
    fn clear_row(&mut self, row: u8) -> Result<(), Error> {
        self.set_cursor(0, row)?;
        for _ in 0..LCD_COLS {
            self.write_str(" ")?;
        }
        Ok(())
    }
}

impl<T: TextDisplay + ?Sized> TextDisplay for &mut T {
    fn clear(&mut self) -> Result<(), Error> {
        (**self).clear()
    }

    fn set_cursor(&mut self, col: u8, row: u8) -> Result<(), Error> {
        (**self).set_cursor(col, row)
    }

    fn write_str(&mut self, text: &str) -> Result<(), Error> {
        (**self).write_str(text)
    }
}
