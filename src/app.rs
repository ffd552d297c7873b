//! Controller - the glue the poll loop drives.
//!
//! One call to [`Controller::poll`] per loop iteration. While an editor is
//! open it gets every poll; otherwise the event goes to the navigator and
//! the menu is redrawn or an editor is opened for the new position.

use crate::display::TextDisplay;
use crate::editors::{Editor, EditorStatus};
use crate::error::Error;
use crate::input::ButtonEvent;
use crate::menu::{Advance, MenuPosition, Navigator, Submenu};
use crate::render;
use crate::settings::{self, Eeprom};

pub struct Controller<D, S> {
    display: D,
    store: S,
    navigator: Navigator,
    editor: Option<Editor>,
}

impl<D, S> Controller<D, S>
where
    D: TextDisplay,
    S: Eeprom,
{
    pub fn new(display: D, store: S) -> Self {
        Self {
            display,
            store,
            navigator: Navigator::new(),
            editor: None,
        }
    }

    /// Draw the initial menu, then provision defaults on a blank store.
    ///
    /// Returns `true` if this was a first boot.
    pub fn boot(&mut self) -> Result<bool, Error> {
        render::draw_menu(&mut self.display, self.navigator.position())?;
        let first_boot = settings::provision_defaults(&mut self.store);
        info!(
            "Controller: boot at {} (first boot: {})",
            self.navigator.position(),
            first_boot
        );
        Ok(first_boot)
    }

    /// Process one poll. `event` is `ButtonEvent::None` on idle polls.
    pub fn poll(&mut self, event: ButtonEvent, now_ms: u64) -> Result<(), Error> {
        if let Some(editor) = self.editor.as_mut() {
            let status = editor.handle(event, now_ms, &mut self.display, &mut self.store)?;
            if let EditorStatus::Done(position) = status {
                self.editor = None;
                self.navigator.return_to(position);
                render::draw_menu(&mut self.display, position)?;
            }
            return Ok(());
        }

        if self.navigator.advance(event) == Advance::Unchanged {
            return Ok(());
        }
        let position = self.navigator.position();
        let clear = self.navigator.take_clear_request();
        if let Err(e) = self.show(position, clear, now_ms) {
            // No editor owns the action position; step back onto the item
            // that opened it so Up/Down stay inside the submenu.
            if let Some(origin) = position.origin() {
                self.navigator.return_to(origin);
            }
            return Err(e);
        }
        Ok(())
    }

    /// Draw the menu for `position`, or open its editor.
    fn show(&mut self, position: MenuPosition, clear: bool, now_ms: u64) -> Result<(), Error> {
        if clear {
            self.display.clear()?;
        }
        match Editor::open(position, now_ms, &mut self.display, &mut self.store)? {
            Some(editor) => self.editor = Some(editor),
            None => {
                render::draw_menu(&mut self.display, position)?;
            }
        }
        Ok(())
    }

    pub fn position(&self) -> MenuPosition {
        self.navigator.position()
    }

    pub fn submenu(&self) -> Submenu {
        self.navigator.submenu()
    }

    pub fn editor(&self) -> Option<&Editor> {
        self.editor.as_ref()
    }

    pub fn editor_active(&self) -> bool {
        self.editor.is_some()
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Mutable store access for the flash sync between polls.
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::CharGrid;
    use crate::settings::EepromImage;
    use ButtonEvent::{Down, Enter};

    fn booted() -> Controller<CharGrid, EepromImage> {
        let mut ctl = Controller::new(CharGrid::new(), EepromImage::erased());
        ctl.boot().unwrap();
        ctl
    }

    #[test]
    fn boot_draws_main_menu_before_provisioning() {
        let mut ctl = Controller::new(CharGrid::new(), EepromImage::erased());
        assert!(ctl.boot().unwrap());
        assert_eq!(ctl.display().row(0).trim_end(), ">Ajustes");
        assert_eq!(ctl.display().row(1).trim_end(), " Medicion");
        assert!(settings::is_initialized(ctl.store()));
        assert!(!ctl.boot().unwrap());
    }

    #[test]
    fn idle_poll_does_not_redraw() {
        let mut ctl = booted();
        let clears = ctl.display().clear_count();
        ctl.poll(ButtonEvent::None, 0).unwrap();
        assert_eq!(ctl.display().clear_count(), clears);
    }

    #[test]
    fn clamped_press_redraws() {
        let mut ctl = booted();
        let clears = ctl.display().clear_count();
        ctl.poll(ButtonEvent::Up, 0).unwrap();
        assert_eq!(ctl.position(), MenuPosition::Settings);
        assert_eq!(ctl.display().clear_count(), clears + 1);
    }

    #[test]
    fn enter_after_move_clears_before_redraw() {
        let mut ctl = booted();
        ctl.poll(Down, 0).unwrap();
        let clears = ctl.display().clear_count();
        ctl.poll(Enter, 0).unwrap();
        assert_eq!(ctl.position(), MenuPosition::Start);
        // Explicit clear plus the render clear.
        assert_eq!(ctl.display().clear_count(), clears + 2);
    }

    /// Grid whose bus can be made to fail.
    #[derive(Default)]
    struct FlakyDisplay {
        grid: CharGrid,
        failing: bool,
    }

    impl TextDisplay for FlakyDisplay {
        fn clear(&mut self) -> Result<(), Error> {
            if self.failing {
                return Err(Error::Display);
            }
            self.grid.clear()
        }

        fn set_cursor(&mut self, col: u8, row: u8) -> Result<(), Error> {
            if self.failing {
                return Err(Error::Display);
            }
            self.grid.set_cursor(col, row)
        }

        fn write_str(&mut self, text: &str) -> Result<(), Error> {
            if self.failing {
                return Err(Error::Display);
            }
            self.grid.write_str(text)
        }
    }

    #[test]
    fn failed_editor_draw_keeps_position_in_submenu() {
        let display = FlakyDisplay {
            failing: true,
            ..Default::default()
        };
        let mut ctl = Controller::new(display, EepromImage::erased());
        assert_eq!(ctl.boot(), Err(Error::Display));

        for event in [Enter, Down, Enter] {
            assert_eq!(ctl.poll(event, 0), Err(Error::Display));
        }
        assert!(!ctl.editor_active());
        assert_eq!(ctl.position(), MenuPosition::CfgPeriod);
        assert_eq!(ctl.submenu(), Submenu::Settings);

        for event in [ButtonEvent::Up, Down, Down, Down, Down, Down, Down] {
            let _ = ctl.poll(event, 0);
            let window = ctl.position().window();
            assert_eq!(window.map(|w| w.submenu), Some(Submenu::Settings));
        }
        assert_eq!(ctl.position(), MenuPosition::SettingsBack);
    }

    #[test]
    fn editor_opens_once_display_recovers() {
        let mut ctl = Controller::new(FlakyDisplay::default(), EepromImage::erased());
        ctl.boot().unwrap();
        ctl.poll(Enter, 0).unwrap();
        ctl.poll(Down, 0).unwrap();

        ctl.display.failing = true;
        assert!(ctl.poll(Enter, 0).is_err());
        assert_eq!(ctl.position(), MenuPosition::CfgPeriod);

        ctl.display.failing = false;
        ctl.poll(Enter, 0).unwrap();
        assert!(ctl.editor_active());
        assert_eq!(ctl.position(), MenuPosition::EditingPeriod);
        assert_eq!(ctl.display().grid.row(0).trim_end(), "Periodo");
    }

    #[test]
    fn editor_consumes_events_until_done() {
        let mut ctl = booted();
        ctl.poll(Enter, 0).unwrap();
        ctl.poll(Down, 0).unwrap();
        ctl.poll(Enter, 0).unwrap();
        assert!(ctl.editor_active());
        assert!(matches!(ctl.editor(), Some(Editor::Period(_))));

        // Down goes to the editor, not the navigator.
        ctl.poll(Down, 0).unwrap();
        assert_eq!(ctl.position(), MenuPosition::EditingPeriod);

        ctl.poll(Enter, 0).unwrap();
        assert!(!ctl.editor_active());
        assert_eq!(ctl.position(), MenuPosition::CfgPeriod);
        assert_eq!(ctl.display().row(1).trim_end(), ">Cfg. Periodo");
    }
}
