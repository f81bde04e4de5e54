//! Layout of the weather panel against an abstract drawing surface.

use crate::weather::WeatherSample;

/// RGB, each component in `0.0..=1.0`.
pub type Color = [f32; 3];

pub const WHITE: Color = [1.0, 1.0, 1.0];

/// Text inset from the window's left edge.
const TEXT_INSET_X: i32 = 5;
/// Baselines of the two lines, measured down from the window's top edge.
const WIND_LINE_DROP: i32 = 20;
const QNH_LINE_DROP: i32 = 35;

/// Screen rectangle in host coordinates, y growing upwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelRect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

/// Drawing primitives the host offers inside a window draw callback.
pub trait Canvas {
    /// Fill `rect` with the host's translucent dark window background.
    fn dark_box(&mut self, rect: PanelRect);
    /// Draw `text` with its baseline starting at `(x, y)`.
    fn text(&mut self, color: Color, x: i32, y: i32, text: &str);
}

/// Draw the background and both weather lines inside `rect`.
pub fn draw_panel<C: Canvas>(canvas: &mut C, rect: PanelRect, weather: &WeatherSample) {
    canvas.dark_box(rect);

    let x = rect.left + TEXT_INSET_X;
    canvas.text(WHITE, x, rect.top - WIND_LINE_DROP, &weather.wind_line());
    canvas.text(WHITE, x, rect.top - QNH_LINE_DROP, &weather.qnh_line());
}

/// A canvas that remembers what it was asked to draw.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingCanvas {
    pub boxes: Vec<PanelRect>,
    pub texts: Vec<(Color, i32, i32, String)>,
}

#[cfg(test)]
impl Canvas for RecordingCanvas {
    fn dark_box(&mut self, rect: PanelRect) {
        self.boxes.push(rect);
    }

    fn text(&mut self, color: Color, x: i32, y: i32, text: &str) {
        self.texts.push((color, x, y, text.to_string()));
    }
}
