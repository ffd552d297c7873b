//! GPIO button input.
//!
//! Three physical buttons (active-low with internal pull-up):
//!   - UP    - previous item / increment
//!   - DOWN  - next item / decrement
//!   - ENTER - select / confirm
//!
//! The pins are sampled once per main-loop poll; debouncing and the
//! one-event-per-poll priority live in `propmeter::input`.

use defmt::debug;
use embassy_nrf::gpio::{AnyPin, Input, Pull};
use propmeter::input::{ButtonEvent, ButtonLevels, ButtonPoller};

pub struct ButtonPanel<'d> {
    up: Input<'d>,
    down: Input<'d>,
    enter: Input<'d>,
    poller: ButtonPoller,
}

impl<'d> ButtonPanel<'d> {
    pub fn new(up: AnyPin, down: AnyPin, enter: AnyPin) -> Self {
        Self {
            up: Input::new(up, Pull::Up),
            down: Input::new(down, Pull::Up),
            enter: Input::new(enter, Pull::Up),
            poller: ButtonPoller::new(),
        }
    }

    /// Sample all three pins and return at most one event.
    pub fn poll(&mut self, now_ms: u64) -> ButtonEvent {
        let levels = ButtonLevels {
            up: self.up.is_low(),
            down: self.down.is_low(),
            enter: self.enter.is_low(),
        };
        let event = self.poller.poll(levels, now_ms);
        if event.is_press() {
            debug!("Button: {}", event);
        }
        event
    }
}
