//! Measurement run.
//!
//! Waits for the configured period while printing one dot per elapsed
//! second on row 1:
//! ```text
//! T = 3.00sec
//! ..
//! ```

use super::{fixed2, EditorStatus};
use crate::config::{DOT_INTERVAL_MS, LCD_COLS};
use crate::display::TextDisplay;
use crate::error::Error;
use crate::input::ButtonEvent;
use crate::menu::MenuPosition;
use crate::settings::{self, Eeprom};

#[derive(Clone, Debug, PartialEq)]
pub struct MeasurementRun {
    period_ms: f32,
    started_ms: u64,
    /// Elapsed time at which the next dot is due.
    next_dot_ms: u64,
    dot_col: u8,
    dots: u32,
}

impl MeasurementRun {
    /// Read the period, draw the header and start timing at `now_ms`.
    pub fn open<D: TextDisplay, S: Eeprom>(
        display: &mut D,
        store: &S,
        now_ms: u64,
    ) -> Result<Self, Error> {
        let period_ms = settings::period_ms(store);

        display.clear()?;
        display.print_at(0, 0, "T = ")?;
        let mut seconds = fixed2(period_ms / 1000.0);
        let _ = seconds.push_str("sec");
        display.print_at(4, 0, &seconds)?;

        info!("Measurement: started, period {} ms", period_ms);
        Ok(Self {
            period_ms,
            started_ms: now_ms,
            next_dot_ms: DOT_INTERVAL_MS,
            dot_col: 0,
            dots: 0,
        })
    }

    pub fn period_ms(&self) -> f32 {
        self.period_ms
    }

    /// Dots printed so far.
    pub fn dots(&self) -> u32 {
        self.dots
    }

    pub fn handle<D: TextDisplay>(
        &mut self,
        event: ButtonEvent,
        now_ms: u64,
        display: &mut D,
    ) -> Result<EditorStatus, Error> {
        let elapsed = now_ms.saturating_sub(self.started_ms);

        if event == ButtonEvent::Enter {
            info!("Measurement: cancelled after {} ms", elapsed);
            return Ok(EditorStatus::Done(MenuPosition::Start));
        }
        if elapsed as f32 >= self.period_ms {
            info!("Measurement: finished, {} dots", self.dots);
            return Ok(EditorStatus::Done(MenuPosition::Start));
        }

        // A slow poll can owe more than one dot.
        while elapsed >= self.next_dot_ms {
            if self.dot_col >= LCD_COLS {
                display.clear_row(1)?;
                self.dot_col = 0;
            }
            display.print_at(self.dot_col, 1, ".")?;
            self.dot_col += 1;
            self.dots += 1;
            self.next_dot_ms += DOT_INTERVAL_MS;
        }
        Ok(EditorStatus::Active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::CharGrid;
    use crate::settings::{EepromImage, PERIOD};

    const T0: u64 = 10_000;

    fn start(period: f32) -> (MeasurementRun, CharGrid) {
        let mut store = EepromImage::erased();
        store.write_f32(PERIOD, period);
        let mut grid = CharGrid::new();
        let run = MeasurementRun::open(&mut grid, &store, T0).unwrap();
        (run, grid)
    }

    /// Idle polls every `step` ms until the run finishes. Returns the
    /// elapsed time at completion.
    fn run_to_end(run: &mut MeasurementRun, grid: &mut CharGrid, step: u64) -> u64 {
        let mut t = 0;
        loop {
            match run.handle(ButtonEvent::None, T0 + t, grid).unwrap() {
                EditorStatus::Active => t += step,
                EditorStatus::Done(pos) => {
                    assert_eq!(pos, MenuPosition::Start);
                    return t;
                }
            }
        }
    }

    #[test]
    fn header_shows_period_in_seconds() {
        let (_, grid) = start(3000.0);
        assert_eq!(grid.row(0).trim_end(), "T = 3.00sec");
        assert_eq!(grid.row(1).trim_end(), "");
        assert_eq!(grid.clear_count(), 1);
    }

    #[test]
    fn three_second_period_prints_two_dots() {
        let (mut run, mut grid) = start(3000.0);
        let end = run_to_end(&mut run, &mut grid, 5);
        assert_eq!(end, 3000);
        assert_eq!(run.dots(), 2);
        assert_eq!(grid.row(1).trim_end(), "..");
    }

    #[test]
    fn dots_independent_of_poll_cadence() {
        for step in [1, 7, 250, 999] {
            let (mut run, mut grid) = start(3000.0);
            run_to_end(&mut run, &mut grid, step);
            assert_eq!(run.dots(), 2, "step {}", step);
        }
    }

    #[test]
    fn late_poll_catches_up_on_dots() {
        let (mut run, mut grid) = start(10_000.0);
        let status = run.handle(ButtonEvent::None, T0 + 3500, &mut grid).unwrap();
        assert_eq!(status, EditorStatus::Active);
        assert_eq!(run.dots(), 3);
        assert_eq!(grid.row(1).trim_end(), "...");
    }

    #[test]
    fn row_wraps_after_sixteen_dots() {
        let (mut run, mut grid) = start(20_000.0);
        run_to_end(&mut run, &mut grid, 100);
        assert_eq!(run.dots(), 19);
        // 16 dots fill the row, the 17th clears it and starts over.
        assert_eq!(grid.row(1).trim_end(), "...");
        assert_eq!(grid.row(0).trim_end(), "T = 20.00sec");
    }

    #[test]
    fn enter_cancels_immediately() {
        let (mut run, mut grid) = start(60_000.0);
        run.handle(ButtonEvent::None, T0 + 1500, &mut grid).unwrap();
        let status = run.handle(ButtonEvent::Enter, T0 + 1600, &mut grid).unwrap();
        assert_eq!(status, EditorStatus::Done(MenuPosition::Start));
        assert_eq!(run.dots(), 1);
    }

    #[test]
    fn up_and_down_are_ignored() {
        let (mut run, mut grid) = start(5000.0);
        for e in [ButtonEvent::Up, ButtonEvent::Down] {
            assert_eq!(
                run.handle(e, T0 + 100, &mut grid).unwrap(),
                EditorStatus::Active
            );
        }
    }

    #[test]
    fn zero_period_finishes_on_first_poll() {
        let (mut run, mut grid) = start(0.0);
        assert_eq!(run_to_end(&mut run, &mut grid, 5), 0);
        assert_eq!(run.dots(), 0);
    }

    #[test]
    fn clock_before_start_counts_as_zero_elapsed() {
        let (mut run, mut grid) = start(1000.0);
        let status = run.handle(ButtonEvent::None, T0 - 50, &mut grid).unwrap();
        assert_eq!(status, EditorStatus::Active);
        assert_eq!(run.dots(), 0);
    }
}
