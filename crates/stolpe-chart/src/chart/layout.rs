use stolpe_geom::{Rect, Vec2};

use crate::text::TextMeasure;

use super::entities::decode_entities;
use super::record::HistogramRecord;
use super::scale::{LinearScale, fmt_number};
use super::theme::ChartTheme;

/// Geometry for one record: row bounds for hit-testing, text anchor
/// positions and the value bar rectangle.
#[derive(Clone, Debug)]
pub struct BarSlot {
    pub index: usize,
    pub label: String,
    /// Entity-decoded sublabel, ready for display.
    pub sublabel: String,
    pub value: f64,
    pub bounds: Rect,
    pub label_pos: Vec2,
    pub sublabel_pos: Vec2,
    pub bar: Rect,
}

impl BarSlot {
    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        self.bounds.contains(point)
    }
}

#[derive(Clone, Debug)]
pub struct AxisTick {
    pub value: f64,
    /// Horizontal offset from the axis origin.
    pub x: f32,
    pub label: String,
}

/// Shared bottom axis: origin at the left end of the baseline, gridlines
/// rising `gridline_extent` pixels over the bar area.
#[derive(Clone, Debug)]
pub struct AxisGroup {
    pub origin: Vec2,
    pub gridline_extent: f32,
    pub ticks: Vec<AxisTick>,
}

/// Fully computed chart geometry for one surface size and record set.
/// Everything here is derived; recomputed from scratch on every layout
/// call and owned by the surface handle that wraps it.
#[derive(Clone, Debug)]
pub struct ChartLayout {
    pub size: (f32, f32),
    pub label_width: f32,
    pub scale: LinearScale,
    pub bars: Vec<BarSlot>,
    pub axis: AxisGroup,
}

impl ChartLayout {
    /// Index of the bar row under the cursor, if any.
    #[inline]
    pub fn hovered(&self, cursor: Vec2) -> Option<usize> {
        self.bars
            .iter()
            .find(|slot| slot.contains(cursor))
            .map(|slot| slot.index)
    }
}

pub struct Histogram;

impl Histogram {
    /// Computes bar, label and axis geometry for `records` on a surface of
    /// `size` pixels. Empty input yields an axis-only layout; non-positive
    /// surface extents degrade to zero-sized geometry. Never panics and
    /// never emits NaN.
    pub fn layout<M>(
        m: &M,
        theme: &ChartTheme,
        size: (f32, f32),
        records: &[HistogramRecord],
    ) -> ChartLayout
    where
        M: TextMeasure,
    {
        let (w, h) = (size.0.max(0.0), size.1.max(0.0));
        let n = records.len();

        // 40% of the vertical budget is bar body, 60% inter-bar spacing,
        // split evenly per record.
        let avail_v = (h - theme.axis_margin - theme.margin * 2.0).max(0.0);
        let (bar_height, bar_padding) = if n > 0 {
            (avail_v * 0.4 / n as f32, avail_v * 0.6 / n as f32)
        } else {
            (0.0, 0.0)
        };

        // Decode sublabels once, then find the widest rendered label text;
        // the scale range shrinks by that much.
        let decoded: Vec<String> = records
            .iter()
            .map(|r| decode_entities(&r.sublabel))
            .collect();
        let mut label_width = 0.0f32;
        for (record, sublabel) in records.iter().zip(&decoded) {
            label_width = label_width.max(m.measure_text(&record.label, theme.label_font));
            label_width = label_width.max(m.measure_text(sublabel, theme.sublabel_font));
        }
        let label_width = label_width.ceil();

        let domain_max = records
            .iter()
            .map(HistogramRecord::geometry_value)
            .fold(0.0, f64::max);
        let range_max = (w - theme.margin * 2.0 - label_width).max(0.0);
        let scale = LinearScale::new(domain_max, range_max);

        let mut bars = Vec::with_capacity(n);
        for (index, (record, sublabel)) in records.iter().zip(decoded).enumerate() {
            let y = theme.margin + bar_padding + index as f32 * (bar_height + bar_padding);
            let bar_w = scale.scale(record.geometry_value());
            let bar = Rect::new(theme.margin + label_width, y, bar_w, bar_height);
            bars.push(BarSlot {
                index,
                label: record.label.clone(),
                sublabel,
                value: record.value,
                bounds: Rect::new(theme.margin, y, label_width + bar_w, bar_height),
                label_pos: Vec2::new(theme.margin, y + bar_height / 2.0),
                sublabel_pos: Vec2::new(
                    theme.margin,
                    y + bar_height / 2.0 + theme.sublabel_offset,
                ),
                bar,
            });
        }

        let axis = AxisGroup {
            origin: Vec2::new(
                theme.margin + label_width,
                (h - theme.axis_margin - theme.margin).max(0.0),
            ),
            gridline_extent: (h - theme.margin * 2.0 - theme.axis_margin).max(0.0),
            ticks: scale
                .ticks(theme.tick_count)
                .into_iter()
                .map(|value| AxisTick {
                    value,
                    x: scale.scale(value),
                    label: fmt_number(value),
                })
                .collect(),
        };

        log::debug!(
            "histogram layout: {} records, label_width {}, range {}",
            n,
            label_width,
            scale.range_max()
        );

        ChartLayout {
            size: (w, h),
            label_width,
            scale,
            bars,
            axis,
        }
    }
}
