mod color;
mod entities;
mod layout;
mod record;
mod scale;
mod surface;
mod theme;

pub use color::{blend_color, scale_alpha, Color};
pub use entities::decode_entities;
pub use layout::{AxisGroup, AxisTick, BarSlot, ChartLayout, Histogram};
pub use record::HistogramRecord;
pub use scale::LinearScale;
pub use surface::{ChartSurface, RenderTarget, Tooltip};
pub use theme::ChartTheme;
