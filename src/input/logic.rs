use super::ButtonEvent;
use crate::config::BUTTON_DEBOUNCE_MS;

/// Debounce state for one active-low button.
///
/// Reports `true` exactly once per press: on the accepted falling edge.
/// A level change closer than [`BUTTON_DEBOUNCE_MS`] to the previous
/// accepted change is treated as contact bounce and ignored.
#[derive(Clone, Copy, Debug, Default)]
pub struct Debouncer {
    was_pressed: bool,
    last_change: Option<u64>,
}

impl Debouncer {
    /// Create a new button state (not pressed).
    pub const fn new() -> Self {
        Self {
            was_pressed: false,
            last_change: None,
        }
    }

    /// Feed the current pin level; returns true on a debounced press.
    pub fn just_pressed(&mut self, is_low: bool, now_ms: u64) -> bool {
        if is_low == self.was_pressed {
            return false;
        }

        if let Some(last) = self.last_change {
            if now_ms.saturating_sub(last) < BUTTON_DEBOUNCE_MS {
                return false;
            }
        }

        self.was_pressed = is_low;
        self.last_change = Some(now_ms);

        // Only the press edge is an event; release just re-arms.
        is_low
    }
}

/// Raw pin levels sampled in one poll (`true` = pressed / pin low).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ButtonLevels {
    pub up: bool,
    pub down: bool,
    pub enter: bool,
}

/// Folds three debounced buttons into a single event per poll.
///
/// Buttons are checked in priority order Up, Down, Enter. Once one fires
/// the rest are not sampled this poll, so a simultaneous lower-priority
/// press stays pending and is reported on a following poll.
#[derive(Clone, Copy, Debug, Default)]
pub struct ButtonPoller {
    up: Debouncer,
    down: Debouncer,
    enter: Debouncer,
}

impl ButtonPoller {
    pub const fn new() -> Self {
        Self {
            up: Debouncer::new(),
            down: Debouncer::new(),
            enter: Debouncer::new(),
        }
    }

    pub fn poll(&mut self, levels: ButtonLevels, now_ms: u64) -> ButtonEvent {
        if self.up.just_pressed(levels.up, now_ms) {
            ButtonEvent::Up
        } else if self.down.just_pressed(levels.down, now_ms) {
            ButtonEvent::Down
        } else if self.enter.just_pressed(levels.enter, now_ms) {
            ButtonEvent::Enter
        } else {
            ButtonEvent::None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const UP: ButtonLevels = ButtonLevels {
        up: true,
        down: false,
        enter: false,
    };
    const IDLE: ButtonLevels = ButtonLevels {
        up: false,
        down: false,
        enter: false,
    };

    #[test]
    fn one_event_per_press() {
        let mut poller = ButtonPoller::new();
        assert_eq!(poller.poll(UP, 0), ButtonEvent::Up);
        // Held: no repeat.
        assert_eq!(poller.poll(UP, 100), ButtonEvent::None);
        assert_eq!(poller.poll(UP, 5_000), ButtonEvent::None);
        // Release, then press again.
        assert_eq!(poller.poll(IDLE, 5_100), ButtonEvent::None);
        assert_eq!(poller.poll(UP, 5_200), ButtonEvent::Up);
    }

    #[test]
    fn bounce_inside_window_is_ignored() {
        let mut btn = Debouncer::new();
        assert!(btn.just_pressed(true, 1_000));
        // Contact bounce: released and pressed again within 50 ms.
        assert!(!btn.just_pressed(false, 1_010));
        assert!(!btn.just_pressed(true, 1_020));
        // Still considered held.
        assert!(!btn.just_pressed(true, 1_200));
        assert!(!btn.just_pressed(false, 1_300));
        assert!(btn.just_pressed(true, 1_400));
    }

    #[test]
    fn priority_up_over_down_over_enter() {
        let mut poller = ButtonPoller::new();
        let all = ButtonLevels {
            up: true,
            down: true,
            enter: true,
        };
        assert_eq!(poller.poll(all, 0), ButtonEvent::Up);
        // Down and Enter were not sampled: their presses are still pending.
        assert_eq!(poller.poll(all, 1), ButtonEvent::Down);
        assert_eq!(poller.poll(all, 2), ButtonEvent::Enter);
        assert_eq!(poller.poll(all, 3), ButtonEvent::None);
    }

    #[test]
    fn idle_yields_none() {
        let mut poller = ButtonPoller::new();
        for t in 0..10 {
            assert_eq!(poller.poll(IDLE, t * 10), ButtonEvent::None);
        }
    }

    #[test]
    fn event_helpers() {
        assert!(!ButtonEvent::None.is_press());
        assert!(ButtonEvent::Enter.is_press());
        assert!(ButtonEvent::Up.is_move());
        assert!(ButtonEvent::Down.is_move());
        assert!(!ButtonEvent::Enter.is_move());
    }
}
