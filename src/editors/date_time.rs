//! Date/time editor.
//!
//! Screen layout (year counted from 2000):
//! ```text
//! CFG fecha/hora
//! dd/mm/yy  hh:mi
//! ```
//!
//! Fields are confirmed one at a time with Enter. Nothing is written until
//! the minute is confirmed; then all five go out with update-if-changed.

use core::fmt::Write;

use heapless::String;

use super::EditorStatus;
use crate::config::{DAY_RANGE, HOUR_RANGE, MINUTE_RANGE, MONTH_RANGE, YEAR_RANGE};
use crate::display::TextDisplay;
use crate::error::Error;
use crate::input::ButtonEvent;
use crate::menu::MenuPosition;
use crate::settings::{DateTime, Eeprom};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DateTimeState {
    EditingDay,
    EditingMonth,
    EditingYear,
    EditingHour,
    EditingMinute,
    Done,
}

impl DateTimeState {
    fn next(self) -> Self {
        match self {
            DateTimeState::EditingDay => DateTimeState::EditingMonth,
            DateTimeState::EditingMonth => DateTimeState::EditingYear,
            DateTimeState::EditingYear => DateTimeState::EditingHour,
            DateTimeState::EditingHour => DateTimeState::EditingMinute,
            DateTimeState::EditingMinute | DateTimeState::Done => DateTimeState::Done,
        }
    }

    /// Screen column and inclusive clamp range of the field being edited.
    fn field(self) -> Option<(u8, (u8, u8))> {
        match self {
            DateTimeState::EditingDay => Some((0, DAY_RANGE)),
            DateTimeState::EditingMonth => Some((3, MONTH_RANGE)),
            DateTimeState::EditingYear => Some((6, YEAR_RANGE)),
            DateTimeState::EditingHour => Some((10, HOUR_RANGE)),
            DateTimeState::EditingMinute => Some((13, MINUTE_RANGE)),
            DateTimeState::Done => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DateTimeEditor {
    value: DateTime,
    state: DateTimeState,
}

impl DateTimeEditor {
    /// Load the stored fields and draw the editor screen.
    pub fn open<D: TextDisplay, S: Eeprom>(display: &mut D, store: &S) -> Result<Self, Error> {
        let editor = Self {
            value: DateTime::load(store),
            state: DateTimeState::EditingDay,
        };
        editor.draw(display)?;
        Ok(editor)
    }

    pub fn state(&self) -> DateTimeState {
        self.state
    }

    pub fn value(&self) -> DateTime {
        self.value
    }

    pub fn handle<D: TextDisplay, S: Eeprom>(
        &mut self,
        event: ButtonEvent,
        display: &mut D,
        store: &mut S,
    ) -> Result<EditorStatus, Error> {
        let Some((col, (min, max))) = self.state.field() else {
            return Ok(EditorStatus::Done(MenuPosition::CfgDate));
        };

        match event {
            ButtonEvent::None => {}
            ButtonEvent::Up => {
                let v = self.slot();
                if *v < max {
                    *v += 1;
                }
                let v = *v;
                draw_two_digits(display, col, v)?;
            }
            ButtonEvent::Down => {
                let v = self.slot();
                if *v > min {
                    *v -= 1;
                }
                let v = *v;
                draw_two_digits(display, col, v)?;
            }
            ButtonEvent::Enter => {
                self.state = self.state.next();
                if self.state == DateTimeState::Done {
                    self.value.update(store);
                    info!("DateTime: saved {}", self.value);
                    return Ok(EditorStatus::Done(MenuPosition::CfgDate));
                }
            }
        }
        Ok(EditorStatus::Active)
    }

    /// Field under edit. Only called while a field is active.
    fn slot(&mut self) -> &mut u8 {
        match self.state {
            DateTimeState::EditingDay => &mut self.value.day,
            DateTimeState::EditingMonth => &mut self.value.month,
            DateTimeState::EditingYear => &mut self.value.year,
            DateTimeState::EditingHour => &mut self.value.hour,
            DateTimeState::EditingMinute | DateTimeState::Done => &mut self.value.minute,
        }
    }

    fn draw<D: TextDisplay>(&self, display: &mut D) -> Result<(), Error> {
        display.clear()?;
        display.print_at(0, 0, "CFG fecha/hora")?;
        draw_two_digits(display, 0, self.value.day)?;
        display.print_at(2, 1, "/")?;
        draw_two_digits(display, 3, self.value.month)?;
        display.print_at(5, 1, "/")?;
        draw_two_digits(display, 6, self.value.year)?;
        draw_two_digits(display, 10, self.value.hour)?;
        display.print_at(12, 1, ":")?;
        draw_two_digits(display, 13, self.value.minute)
    }
}

/// Zero-padded value on row 1.
fn draw_two_digits<D: TextDisplay>(display: &mut D, col: u8, value: u8) -> Result<(), Error> {
    let mut text: String<4> = String::new();
    let _ = write!(text, "{:02}", value);
    display.print_at(col, 1, &text)
}
