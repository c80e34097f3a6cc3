/// One labeled data point, drawn as a single horizontal bar.
///
/// Input order is bar order, top to bottom; any ranking happens before the
/// records reach the chart. `sublabel` may carry HTML-entity-encoded text
/// and is decoded during layout.
#[derive(Clone, Debug, PartialEq)]
pub struct HistogramRecord {
    pub label: String,
    pub sublabel: String,
    pub value: f64,
}

impl HistogramRecord {
    pub fn new(label: impl Into<String>, sublabel: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            sublabel: sublabel.into(),
            value,
        }
    }

    /// Value used for geometry. Non-finite and negative values clamp to 0;
    /// the raw value still appears in tooltips.
    #[inline]
    pub fn geometry_value(&self) -> f64 {
        if self.value.is_finite() && self.value > 0.0 {
            self.value
        } else {
            0.0
        }
    }
}
