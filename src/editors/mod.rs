//! Modal editors.
//!
//! Entered when the navigator lands on an action position. While one is
//! active it receives every poll (including idle polls, so timed editors
//! advance) and owns the display; when it reports [`EditorStatus::Done`]
//! the navigator resumes at the given position.
//!
//! - **Period**: adjust the measurement period in 100 ms steps
//! - **Date/time**: edit day, month, year, hour, minute in turn
//! - **Measurement**: timed wait with a one-dot-per-second progress row

pub mod date_time;
pub mod measurement;
pub mod period;

pub use date_time::{DateTimeEditor, DateTimeState};
pub use measurement::MeasurementRun;
pub use period::PeriodEditor;

use core::fmt::Write;

use heapless::String;

use crate::config::LCD_COLS;
use crate::display::TextDisplay;
use crate::error::Error;
use crate::input::ButtonEvent;
use crate::menu::MenuPosition;
use crate::settings::Eeprom;

/// Outcome of one editor step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EditorStatus {
    /// Still running; keep forwarding polls.
    Active,
    /// Finished; return the navigator to this position.
    Done(MenuPosition),
}

/// The active modal editor.
#[derive(Clone, Debug)]
pub enum Editor {
    Period(PeriodEditor),
    DateTime(DateTimeEditor),
    Measurement(MeasurementRun),
}

impl Editor {
    /// Start the editor that belongs to `position`, drawing its first
    /// screen. `None` for positions that are plain menu items.
    pub fn open<D, S>(
        position: MenuPosition,
        now_ms: u64,
        display: &mut D,
        store: &mut S,
    ) -> Result<Option<Self>, Error>
    where
        D: TextDisplay,
        S: Eeprom,
    {
        let editor = match position {
            MenuPosition::EditingPeriod => Editor::Period(PeriodEditor::open(display, store)?),
            MenuPosition::EditingDateTime => {
                Editor::DateTime(DateTimeEditor::open(display, store)?)
            }
            MenuPosition::MeasurementRunning => {
                Editor::Measurement(MeasurementRun::open(display, store, now_ms)?)
            }
            _ => return Ok(None),
        };
        info!("Editor: opened for {}", position);
        Ok(Some(editor))
    }

    /// Feed one poll to the editor.
    pub fn handle<D, S>(
        &mut self,
        event: ButtonEvent,
        now_ms: u64,
        display: &mut D,
        store: &mut S,
    ) -> Result<EditorStatus, Error>
    where
        D: TextDisplay,
        S: Eeprom,
    {
        match self {
            Editor::Period(editor) => editor.handle(event, display, store),
            Editor::DateTime(editor) => editor.handle(event, display, store),
            Editor::Measurement(run) => run.handle(event, now_ms, display),
        }
    }
}

/// Line buffer one display row wide (with room for overlong numbers).
pub(crate) type Line = String<32>;

/// Float with two decimals, as the device has always shown values.
pub(crate) fn fixed2(value: f32) -> Line {
    let mut line = Line::new();
    // Overflow only truncates what is shown.
    let _ = write!(line, "{:.2}", value);
    line
}

/// Pad with spaces to the row width so a shorter value erases a longer one.
pub(crate) fn pad_row(line: &mut Line) {
    while line.len() < LCD_COLS as usize {
        if line.push(' ').is_err() {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::CharGrid;
    use crate::settings::EepromImage;

    #[test]
    fn fixed2_matches_device_format() {
        assert_eq!(fixed2(1000.0).as_str(), "1000.00");
        assert_eq!(fixed2(-100.0).as_str(), "-100.00");
        assert_eq!(fixed2(3000.0 / 1000.0).as_str(), "3.00");
        assert_eq!(fixed2(0.1).as_str(), "0.10");
    }

    #[test]
    fn pad_row_fills_to_width() {
        let mut line = fixed2(5.0);
        pad_row(&mut line);
        assert_eq!(line.len(), LCD_COLS as usize);
        assert_eq!(line.trim_end(), "5.00");
    }

    #[test]
    fn open_only_for_action_positions() {
        let mut grid = CharGrid::new();
        let mut store = EepromImage::erased();
        for pos in MenuPosition::ALL {
            let editor = Editor::open(pos, 0, &mut grid, &mut store).unwrap();
            assert_eq!(editor.is_some(), pos.is_action());
        }
    }
}
