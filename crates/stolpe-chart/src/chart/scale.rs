/// Linear mapping from a `[0, max]` value domain onto a `[0, range]` pixel
/// span, shared by every bar and by the axis. The domain lower bound is
/// always 0; an all-zero domain maps every value to 0.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    domain_max: f64,
    range_max: f32,
}

impl LinearScale {
    pub fn new(domain_max: f64, range_max: f32) -> Self {
        let domain_max = if domain_max.is_finite() && domain_max > 0.0 {
            domain_max
        } else {
            0.0
        };
        Self {
            domain_max,
            range_max: range_max.max(0.0),
        }
    }

    #[inline]
    pub fn domain_max(&self) -> f64 {
        self.domain_max
    }

    #[inline]
    pub fn range_max(&self) -> f32 {
        self.range_max
    }

    pub fn scale(&self, value: f64) -> f32 {
        if self.domain_max <= 0.0 || !value.is_finite() {
            return 0.0;
        }
        (value / self.domain_max * self.range_max as f64) as f32
    }

    /// Tick values for the axis: multiples of a "nice" step (1, 2 or
    /// 5 times a power of ten) covering the domain, starting at 0.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        if count == 0 || self.domain_max <= 0.0 {
            return vec![0.0];
        }
        let step = tick_step(self.domain_max, count);
        let n = (self.domain_max / step).floor() as usize;
        (0..=n).map(|i| i as f64 * step).collect()
    }
}

fn tick_step(max: f64, count: usize) -> f64 {
    let raw = max / count as f64;
    let mag = 10f64.powf(raw.log10().floor());
    let nice = match raw / mag {
        n if n >= 5.0 => 10.0,
        n if n >= 2.0 => 5.0,
        n if n >= 1.0 => 2.0,
        _ => 1.0,
    };
    nice * mag
}

/// Compact number formatting for tick and tooltip text: integers print
/// without a fractional part, everything else through `f64`'s shortest
/// display form.
pub(crate) fn fmt_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{:.0}", value)
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_map_through_origin() {
        let s = LinearScale::new(90.0, 392.0);
        assert_eq!(s.scale(0.0), 0.0);
        assert!((s.scale(90.0) - 392.0).abs() < 1e-4);
        assert!((s.scale(45.0) - 196.0).abs() < 1e-4);
    }

    #[test]
    fn degenerate_domain_maps_to_zero() {
        let s = LinearScale::new(0.0, 300.0);
        assert_eq!(s.scale(0.0), 0.0);
        assert_eq!(s.scale(10.0), 0.0);
        let s = LinearScale::new(f64::NAN, 300.0);
        assert_eq!(s.scale(1.0), 0.0);
    }

    #[test]
    fn negative_range_clamps_to_zero() {
        let s = LinearScale::new(50.0, -10.0);
        assert_eq!(s.range_max(), 0.0);
        assert_eq!(s.scale(50.0), 0.0);
    }

    #[test]
    fn ticks_use_nice_steps() {
        let s = LinearScale::new(90.0, 392.0);
        assert_eq!(s.ticks(5), vec![0.0, 20.0, 40.0, 60.0, 80.0]);
        let s = LinearScale::new(7.0, 100.0);
        assert_eq!(s.ticks(5), vec![0.0, 2.0, 4.0, 6.0]);
        let s = LinearScale::new(1000.0, 100.0);
        assert_eq!(s.ticks(5), vec![0.0, 500.0, 1000.0]);
        // Sub-unit domains land on a fractional nice step.
        let ticks = LinearScale::new(0.9, 100.0).ticks(5);
        assert_eq!(ticks.len(), 5);
        assert!((ticks[1] - 0.2).abs() < 1e-9);
    }

    #[test]
    fn ticks_degenerate_to_origin() {
        let s = LinearScale::new(0.0, 100.0);
        assert_eq!(s.ticks(5), vec![0.0]);
    }

    #[test]
    fn number_formatting() {
        assert_eq!(fmt_number(90.0), "90");
        assert_eq!(fmt_number(0.5), "0.5");
        assert_eq!(fmt_number(1234.25), "1234.25");
    }
}
