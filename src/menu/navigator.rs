//! Menu navigator - button events to menu-position transitions.

use super::{MenuPosition, Submenu};
use crate::input::ButtonEvent;

/// Result of feeding one input event to the navigator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Advance {
    /// An event was consumed; the menu needs redrawing.
    ///
    /// Reported for every press, including presses clamped at a bound.
    Changed,
    /// No event.
    Unchanged,
}

/// Owns the current position and submenu context.
///
/// All mutation goes through [`Navigator::advance`], plus
/// [`Navigator::return_to`] when a modal editor hands control back.
#[derive(Clone, Debug)]
pub struct Navigator {
    position: MenuPosition,
    submenu: Submenu,
    /// Previous consumed event, for the clear-on-Enter rule.
    last_event: ButtonEvent,
    clear_pending: bool,
}

impl Navigator {
    /// Boot state: Settings selected in the main menu.
    pub const fn new() -> Self {
        Self {
            position: MenuPosition::Settings,
            submenu: Submenu::Main,
            last_event: ButtonEvent::None,
            clear_pending: false,
        }
    }

    pub fn position(&self) -> MenuPosition {
        self.position
    }

    pub fn submenu(&self) -> Submenu {
        self.submenu
    }

    pub fn advance(&mut self, event: ButtonEvent) -> Advance {
        let from = self.position;

        match event {
            ButtonEvent::None => return Advance::Unchanged,
            ButtonEvent::Down => {
                if self.position != self.submenu.last() {
                    if let Some(next) = self.position.next() {
                        self.position = next;
                    }
                }
            }
            ButtonEvent::Up => {
                if self.position != self.submenu.first() {
                    if let Some(prev) = self.position.prev() {
                        self.position = prev;
                    }
                }
            }
            ButtonEvent::Enter => {
                if self.last_event.is_move() {
                    self.clear_pending = true;
                }
                self.enter();
            }
        }

        self.last_event = event;
        debug!(
            "Menu: {} -> {} ({})",
            from, self.position, self.submenu
        );
        Advance::Changed
    }

    /// Enter dispatch. Positions without a case are left alone.
    fn enter(&mut self) {
        let (submenu, position) = match self.position {
            MenuPosition::Settings => (Submenu::Settings, MenuPosition::CfgHelices),
            MenuPosition::SettingsBack => (Submenu::Main, MenuPosition::Settings),
            MenuPosition::Measurement => (Submenu::Measurement, MenuPosition::Start),
            MenuPosition::Start => (Submenu::Measurement, MenuPosition::MeasurementRunning),
            // Lands on Settings, not Measurement; deployed units behave this way.
            MenuPosition::MeasurementBack => (Submenu::Main, MenuPosition::Settings),
            MenuPosition::CfgDate => (Submenu::Settings, MenuPosition::EditingDateTime),
            MenuPosition::CfgPeriod => (Submenu::Settings, MenuPosition::EditingPeriod),
            _ => return,
        };
        self.submenu = submenu;
        self.position = position;
    }

    /// Hand control back after a modal editor finishes. The submenu context
    /// is unchanged: action positions already live in their exit context.
    pub fn return_to(&mut self, position: MenuPosition) {
        debug!("Menu: editor done, back to {}", position);
        self.position = position;
    }

    /// True once per Enter that directly followed an Up or Down.
    pub fn take_clear_request(&mut self) -> bool {
        core::mem::take(&mut self.clear_pending)
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}
