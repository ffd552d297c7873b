//! Button input - three active-low push-buttons, polled.
//!
//! ## Components
//!
//! - **Debouncer**: per-button press-edge detection with a settle window
//! - **ButtonPoller**: folds the three buttons into one event per poll
//!
//! Pin reading itself lives in the binary (`buttons.rs`); everything here
//! is plain logic fed with pin levels and a millisecond timestamp.

pub mod logic;

pub use logic::{ButtonLevels, ButtonPoller, Debouncer};

/// Discrete input event produced by one poll.
///
/// At most one button is reported per poll, with fixed priority
/// Up > Down > Enter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEvent {
    /// Nothing pressed since the last poll.
    #[default]
    None,
    Up,
    Down,
    Enter,
}

impl ButtonEvent {
    /// True for anything other than `None`.
    pub fn is_press(self) -> bool {
        self != ButtonEvent::None
    }

    /// Up or Down.
    pub fn is_move(self) -> bool {
        matches!(self, ButtonEvent::Up | ButtonEvent::Down)
    }
}
