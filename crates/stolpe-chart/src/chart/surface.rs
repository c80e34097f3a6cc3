use stolpe_geom::{Rect, Vec2};

use crate::text::{ChartDraw, TextMeasure};

use super::color::{blend_color, Color};
use super::layout::{ChartLayout, Histogram};
use super::record::HistogramRecord;
use super::scale::fmt_number;
use super::theme::ChartTheme;

/// A drawing destination with a resolvable pixel size. Text measurement
/// comes with it so layout can size labels for the backend that will draw
/// them.
pub trait RenderTarget: TextMeasure {
    fn surface_size(&self) -> (f32, f32);
}

/// Pointer-driven tooltip state. No timers; it is visible exactly while
/// the pointer rests on a bar.
#[derive(Clone, Debug, Default)]
pub struct Tooltip {
    visible: bool,
    position: Vec2,
    text: String,
}

impl Tooltip {
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Label and value, newline-separated.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    fn show(&mut self, position: Vec2, text: String) {
        self.visible = true;
        self.position = position;
        self.text = text;
    }

    fn hide(&mut self) {
        self.visible = false;
    }
}

/// Disposable handle to one rendered chart: owns the computed layout, the
/// theme snapshot and the tooltip. Dropping it is the teardown; rendering
/// again yields a fresh, independent surface.
#[derive(Clone, Debug)]
pub struct ChartSurface {
    theme: ChartTheme,
    layout: ChartLayout,
    tooltip: Tooltip,
    hovered: Option<usize>,
}

impl Histogram {
    /// Lays the records out against the target's current size and wraps
    /// the result in a surface handle. The target is only measured here;
    /// drawing happens in [`ChartSurface::draw`].
    pub fn render<T>(target: &T, theme: &ChartTheme, records: &[HistogramRecord]) -> ChartSurface
    where
        T: RenderTarget,
    {
        let layout = Self::layout(target, theme, target.surface_size(), records);
        ChartSurface {
            theme: theme.clone(),
            layout,
            tooltip: Tooltip::default(),
            hovered: None,
        }
    }
}

impl ChartSurface {
    #[inline]
    pub fn layout(&self) -> &ChartLayout {
        &self.layout
    }

    #[inline]
    pub fn tooltip(&self) -> &Tooltip {
        &self.tooltip
    }

    #[inline]
    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    /// Updates hover state for a pointer position. Over a bar the tooltip
    /// shows near the pointer with the bar's label and value; elsewhere it
    /// hides. Returns the hovered bar index.
    pub fn pointer_moved(&mut self, cursor: Vec2) -> Option<usize> {
        self.hovered = self.layout.hovered(cursor);
        match self.hovered {
            Some(index) => {
                let slot = &self.layout.bars[index];
                self.tooltip.show(
                    cursor + self.theme.tooltip_offset,
                    format!("{}\n{}", slot.label, fmt_number(slot.value)),
                );
            }
            None => self.tooltip.hide(),
        }
        self.hovered
    }

    /// The pointer left the surface entirely.
    pub fn pointer_left(&mut self) {
        self.hovered = None;
        self.tooltip.hide();
    }

    /// Emits the chart in document order: axis group first, then per
    /// record label, sublabel and bar, tooltip last.
    pub fn draw<D>(&self, d: &mut D)
    where
        D: ChartDraw,
    {
        let theme = &self.theme;
        let axis = &self.layout.axis;

        for tick in &axis.ticks {
            let x = axis.origin.x + tick.x;
            d.draw_line(
                Vec2::new(x, axis.origin.y - axis.gridline_extent),
                Vec2::new(x, axis.origin.y),
                theme.grid_color,
            );
            d.draw_text(
                &tick.label,
                Vec2::new(x, axis.origin.y + theme.axis_margin / 2.0),
                theme.tick_font,
                theme.axis_color,
            );
        }
        d.draw_line(
            axis.origin,
            Vec2::new(axis.origin.x + self.layout.scale.range_max(), axis.origin.y),
            theme.axis_color,
        );

        for slot in &self.layout.bars {
            d.draw_text(&slot.label, slot.label_pos, theme.label_font, theme.label_color);
            if !slot.sublabel.is_empty() {
                d.draw_text(
                    &slot.sublabel,
                    slot.sublabel_pos,
                    theme.sublabel_font,
                    theme.sublabel_color,
                );
            }
            let fill = if self.hovered == Some(slot.index) {
                blend_color(theme.bar_fill, Color::WHITE, theme.bar_hover_blend)
            } else {
                theme.bar_fill
            };
            d.draw_rect(slot.bar, fill);
        }

        if self.tooltip.is_visible() {
            self.draw_tooltip(d);
        }
    }

    fn draw_tooltip<D>(&self, d: &mut D)
    where
        D: ChartDraw,
    {
        let theme = &self.theme;
        let pad = theme.tooltip_padding;
        let line_height = theme.label_font as f32 + 4.0;

        let mut width = 0.0f32;
        let lines: Vec<&str> = self.tooltip.text().lines().collect();
        for line in &lines {
            width = width.max(d.measure_text(line, theme.label_font));
        }
        let pos = self.tooltip.position();
        let bg = Rect::new(
            pos.x,
            pos.y,
            width + pad * 2.0,
            lines.len() as f32 * line_height + pad * 2.0,
        );
        d.draw_rect(bg, theme.tooltip_background);
        for (i, line) in lines.iter().enumerate() {
            d.draw_text(
                line,
                Vec2::new(pos.x + pad, pos.y + pad + (i as f32 + 0.5) * line_height),
                theme.label_font,
                theme.tooltip_text,
            );
        }
    }
}
