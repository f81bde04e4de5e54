//! The overlay as the host sees it: a hotkey, a once-a-second tick and a
//! draw callback.

use crate::panel::{draw_panel, Canvas, PanelRect};
use crate::timer::DisplayTimer;
use crate::weather::WeatherSource;

#[derive(Debug, Clone)]
pub struct Overlay {
    timer: DisplayTimer,
}

impl Overlay {
    /// A hidden overlay that shows for `seconds` after each hotkey press.
    pub fn new(seconds: u32) -> Self {
        Overlay {
            timer: DisplayTimer::new(seconds),
        }
    }

    pub fn on_hotkey(&mut self) {
        self.timer.trigger();
    }

    pub fn on_tick(&mut self) {
        self.timer.tick();
    }

    pub fn is_visible(&self) -> bool {
        self.timer.is_visible()
    }

    /// Draw the panel into `rect` if it is currently shown.
    ///
    /// `weather` is only read when something is drawn. Returns whether
    /// anything was drawn.
    pub fn draw<C: Canvas, S: WeatherSource>(
        &self,
        canvas: &mut C,
        rect: PanelRect,
        weather: &S,
    ) -> bool {
        if !self.timer.is_visible() {
            return false;
        }

        let sample = weather.sample();
        draw_panel(canvas, rect, &sample);
        true
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::panel::RecordingCanvas;
    use crate::weather::WeatherSample;

    const RECT: PanelRect = PanelRect {
        left: 50,
        top: 600,
        right: 250,
        bottom: 550,
    };

    /// Counts how often the overlay reads the weather.
    #[derive(Default)]
    struct CountingSource {
        reads: Cell<usize>,
    }

    impl WeatherSource for CountingSource {
        fn sample(&self) -> WeatherSample {
            self.reads.set(self.reads.get() + 1);
            WeatherSample {
                wind_direction_degt: 90.0,
                wind_speed_kt: 5.0,
                qnh_inhg: 30.0,
            }
        }
    }

    #[test]
    fn test_hidden_overlay_draws_nothing_and_reads_nothing() {
        let overlay = Overlay::new(5);
        let source = CountingSource::default();
        let mut canvas = RecordingCanvas::default();

        assert!(!overlay.draw(&mut canvas, RECT, &source));
        assert!(canvas.boxes.is_empty());
        assert!(canvas.texts.is_empty());
        assert_eq!(source.reads.get(), 0);
    }

    #[test]
    fn test_hotkey_then_draw() {
        let mut overlay = Overlay::new(5);
        let source = CountingSource::default();
        let mut canvas = RecordingCanvas::default();

        overlay.on_hotkey();
        assert!(overlay.draw(&mut canvas, RECT, &source));

        assert_eq!(source.reads.get(), 1);
        assert_eq!(canvas.boxes.len(), 1);
        assert_eq!(canvas.texts[0].3, "Wind: 090° 5kts");
        assert_eq!(canvas.texts[1].3, "QNH: 30.00 InHg - 1015 mb");
    }

    #[test]
    fn test_overlay_hides_after_ticks() {
        let mut overlay = Overlay::new(5);
        let source = CountingSource::default();

        overlay.on_hotkey();
        for _ in 0..5 {
            assert!(overlay.is_visible());
            overlay.on_tick();
        }
        assert!(!overlay.is_visible());

        let mut canvas = RecordingCanvas::default();
        assert!(!overlay.draw(&mut canvas, RECT, &source));
        assert_eq!(source.reads.get(), 0);
    }

    #[test]
    fn test_every_frame_reads_fresh_values() {
        let mut overlay = Overlay::new(5);
        let source = CountingSource::default();
        let mut canvas = RecordingCanvas::default();

        overlay.on_hotkey();
        for _ in 0..3 {
            overlay.draw(&mut canvas, RECT, &source);
        }
        assert_eq!(source.reads.get(), 3);
        assert_eq!(canvas.boxes.len(), 3);
    }
}
