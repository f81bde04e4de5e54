//! The overlay's host window and the XPLM drawing calls behind [`Canvas`].

use std::cell::RefCell;
use std::ffi::CString;
use std::os::raw::c_char;
use std::ptr;
use std::rc::Rc;

use log::warn;
use windpressure_core::panel::Color;
use windpressure_core::{Canvas, Overlay, PanelRect};
use xplm::geometry::{Point, Rect};
use xplm::window::{Cursor, KeyEvent, MouseEvent, ScrollEvent, Window, WindowDelegate, WindowRef};
use xplm_sys::{xplmFont_Basic, XPLMDrawString, XPLMDrawTranslucentDarkBox, XPLMFontID};

use crate::weather_refs::WeatherRefs;

/// Create the (always present, usually empty) overlay window.
pub fn create(rect: PanelRect, overlay: Rc<RefCell<Overlay>>, weather: WeatherRefs) -> WindowRef {
    let geometry = Rect::from_left_top_right_bottom(rect.left, rect.top, rect.right, rect.bottom);
    Window::new(geometry, PanelWindow { overlay, weather })
}

struct PanelWindow {
    overlay: Rc<RefCell<Overlay>>,
    weather: WeatherRefs,
}

impl WindowDelegate for PanelWindow {
    fn draw(&mut self, window: &Window) {
        // The user may have dragged the window, so ask every frame.
        let geometry = window.geometry();
        let rect = PanelRect {
            left: geometry.left(),
            top: geometry.top(),
            right: geometry.right(),
            bottom: geometry.bottom(),
        };

        if let Ok(overlay) = self.overlay.try_borrow() {
            overlay.draw(&mut XplmCanvas, rect, &self.weather);
        }
    }

    fn keyboard_event(&mut self, _window: &Window, _event: KeyEvent) {}

    // Clicks and scrolls fall through to the sim.
    fn mouse_event(&mut self, _window: &Window, _event: MouseEvent) -> bool {
        false
    }

    fn scroll_event(&mut self, _window: &Window, _event: ScrollEvent) -> bool {
        false
    }

    fn cursor(&mut self, _window: &Window, _position: Point<i32>) -> Cursor {
        Cursor::Default
    }
}

/// Draws with XPLMGraphics. Only valid inside a draw callback.
struct XplmCanvas;

impl Canvas for XplmCanvas {
    fn dark_box(&mut self, rect: PanelRect) {
        unsafe { XPLMDrawTranslucentDarkBox(rect.left, rect.top, rect.right, rect.bottom) };
    }

    fn text(&mut self, color: Color, x: i32, y: i32, text: &str) {
        let text = match CString::new(text) {
            Ok(text) => text,
            Err(e) => {
                warn!("not drawing text with interior NUL: {}", e);
                return;
            }
        };
        let mut color = color;

        unsafe {
            XPLMDrawString(
                color.as_mut_ptr(),
                x,
                y,
                text.as_ptr() as *mut c_char,
                ptr::null_mut(),
                xplmFont_Basic as XPLMFontID,
            )
        };
    }
}
