use stolpe_geom::Vec2;

use super::color::{Color, scale_alpha};

/// All visual knobs for the histogram in one place. The margin and axis
/// margin defaults are fixed constants of the layout contract; the rest is
/// styling.
#[derive(Clone, Debug)]
pub struct ChartTheme {
    /// Outer margin on every side of the drawing area.
    pub margin: f32,
    /// Extra room reserved below the bars for the axis strip.
    pub axis_margin: f32,
    pub label_font: i32,
    pub sublabel_font: i32,
    pub tick_font: i32,
    /// Vertical drop of the sublabel under the label line.
    pub sublabel_offset: f32,
    /// Requested axis tick count; the scale snaps it to nice steps.
    pub tick_count: usize,
    /// Tooltip offset from the pointer position.
    pub tooltip_offset: Vec2,
    pub tooltip_padding: f32,
    pub bar_fill: Color,
    /// Blend factor toward white for the hovered bar.
    pub bar_hover_blend: f32,
    pub label_color: Color,
    pub sublabel_color: Color,
    pub grid_color: Color,
    pub axis_color: Color,
    pub tooltip_background: Color,
    pub tooltip_text: Color,
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self {
            margin: 40.0,
            axis_margin: 20.0,
            label_font: 14,
            sublabel_font: 12,
            tick_font: 11,
            sublabel_offset: 15.0,
            tick_count: 5,
            tooltip_offset: Vec2::new(10.0, -200.0),
            tooltip_padding: 6.0,
            bar_fill: Color::new(70, 130, 180, 255),
            bar_hover_blend: 0.25,
            label_color: Color::new(40, 40, 40, 255),
            sublabel_color: Color::new(110, 110, 110, 255),
            grid_color: Color::new(210, 210, 210, 255),
            axis_color: Color::new(90, 90, 90, 255),
            tooltip_background: scale_alpha(Color::BLACK, 0.8),
            tooltip_text: Color::WHITE,
        }
    }
}
