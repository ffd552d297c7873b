//! Period editor.
//!
//! Screen layout:
//! ```text
//! Periodo
//! 1000.00mSeg
//! ```

use super::{fixed2, pad_row, EditorStatus};
use crate::config::PERIOD_STEP_MS;
use crate::display::TextDisplay;
use crate::error::Error;
use crate::input::ButtonEvent;
use crate::menu::MenuPosition;
use crate::settings::{self, Eeprom};

#[derive(Clone, Debug, PartialEq)]
pub struct PeriodEditor {
    period_ms: f32,
}

impl PeriodEditor {
    /// Load the stored period and draw the editor screen.
    pub fn open<D: TextDisplay, S: Eeprom>(display: &mut D, store: &S) -> Result<Self, Error> {
        let editor = Self {
            period_ms: settings::period_ms(store),
        };
        display.clear()?;
        display.print_at(0, 0, "Periodo")?;
        editor.draw_value(display)?;
        Ok(editor)
    }

    pub fn period_ms(&self) -> f32 {
        self.period_ms
    }

    pub fn handle<D: TextDisplay, S: Eeprom>(
        &mut self,
        event: ButtonEvent,
        display: &mut D,
        store: &mut S,
    ) -> Result<EditorStatus, Error> {
        match event {
            ButtonEvent::None => {}
            ButtonEvent::Up => {
                self.period_ms += PERIOD_STEP_MS;
                self.draw_value(display)?;
            }
            ButtonEvent::Down => {
                // Refused only when the step would land exactly on zero.
                let lowered = self.period_ms - PERIOD_STEP_MS;
                if lowered != 0.0 {
                    self.period_ms = lowered;
                }
                self.draw_value(display)?;
            }
            ButtonEvent::Enter => {
                store.write_f32(settings::PERIOD, self.period_ms);
                info!("Period: saved {} ms", self.period_ms);
                return Ok(EditorStatus::Done(MenuPosition::CfgPeriod));
            }
        }
        Ok(EditorStatus::Active)
    }

    fn draw_value<D: TextDisplay>(&self, display: &mut D) -> Result<(), Error> {
        let mut line = fixed2(self.period_ms);
        let _ = line.push_str("mSeg");
        pad_row(&mut line);
        display.print_at(0, 1, &line)
    }
}
