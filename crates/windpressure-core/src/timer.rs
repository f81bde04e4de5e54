//! Countdown deciding whether the panel is on screen.
//!
//! The host calls [`DisplayTimer::tick`] once a second from a flight loop that
//! runs independently of the hotkey, so a panel triggered just before a tick
//! is visible for one second less than the configured duration.

use log::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayTimer {
    duration: u32,
    remaining: u32,
    visible: bool,
}

impl DisplayTimer {
    /// A hidden timer with `duration` seconds of display time.
    pub fn new(duration: u32) -> Self {
        DisplayTimer {
            duration,
            remaining: duration,
            visible: false,
        }
    }

    /// Show the panel and restart the countdown.
    pub fn trigger(&mut self) {
        self.remaining = self.duration;
        self.visible = true;
        debug!("panel shown for {}s", self.duration);
    }

    /// Advance the countdown by one second.
    pub fn tick(&mut self) {
        if self.remaining > 0 {
            self.remaining -= 1;
            if self.remaining == 0 {
                if self.visible {
                    debug!("panel hidden");
                }
                self.visible = false;
            }
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_hidden() {
        let timer = DisplayTimer::new(5);
        assert!(!timer.is_visible());
        assert_eq!(timer.remaining(), 5);
    }

    #[test]
    fn test_trigger_shows_for_duration_ticks() {
        let mut timer = DisplayTimer::new(5);
        timer.trigger();

        for _ in 0..4 {
            timer.tick();
            assert!(timer.is_visible());
        }
        timer.tick();
        assert!(!timer.is_visible());
        assert_eq!(timer.remaining(), 0);
    }

    #[test]
    fn test_tick_at_zero_is_noop() {
        let mut timer = DisplayTimer::new(2);
        timer.tick();
        timer.tick();
        assert_eq!(timer.remaining(), 0);

        timer.tick();
        assert_eq!(timer.remaining(), 0);
        assert!(!timer.is_visible());
    }

    #[test]
    fn test_initial_countdown_does_not_show() {
        let mut timer = DisplayTimer::new(3);
        for _ in 0..10 {
            timer.tick();
            assert!(!timer.is_visible());
        }
    }

    #[test]
    fn test_retrigger_restarts_countdown() {
        let mut timer = DisplayTimer::new(5);
        timer.trigger();
        timer.tick();
        timer.tick();
        timer.tick();
        assert_eq!(timer.remaining(), 2);

        timer.trigger();
        assert_eq!(timer.remaining(), 5);
        for _ in 0..4 {
            timer.tick();
        }
        assert!(timer.is_visible());
        timer.tick();
        assert!(!timer.is_visible());
    }

    #[test]
    fn test_trigger_after_expiry() {
        let mut timer = DisplayTimer::new(1);
        timer.trigger();
        timer.tick();
        assert!(!timer.is_visible());

        timer.trigger();
        assert!(timer.is_visible());
        assert_eq!(timer.remaining(), 1);
    }
}
