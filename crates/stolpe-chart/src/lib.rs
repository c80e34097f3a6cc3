pub mod chart;
pub mod text;

pub use chart::{
    AxisGroup, AxisTick, BarSlot, ChartLayout, ChartSurface, ChartTheme, Color, Histogram,
    HistogramRecord, LinearScale, RenderTarget, Tooltip, decode_entities,
};
pub use text::{ChartDraw, TextMeasure};
