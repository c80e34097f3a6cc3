use stolpe_geom::{Rect, Vec2};

use crate::chart::Color;

/// Measurement interface so chart layout can compute text bounds consistently.
pub trait TextMeasure {
    fn measure_text(&self, text: &str, font_size: i32) -> f32;
}

/// Drawing interface that honors the same font metrics used for measurement.
///
/// `draw_text` positions are the left edge at the vertical center of the
/// glyph run; backends align accordingly.
pub trait ChartDraw: TextMeasure {
    fn draw_rect(&mut self, rect: Rect, color: Color);
    fn draw_line(&mut self, from: Vec2, to: Vec2, color: Color);
    fn draw_text(&mut self, text: &str, pos: Vec2, font_size: i32, color: Color);
}

impl<T: TextMeasure + ?Sized> TextMeasure for &T {
    fn measure_text(&self, text: &str, font_size: i32) -> f32 {
        (*self).measure_text(text, font_size)
    }
}
