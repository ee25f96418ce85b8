// Metric domain models

/// One value per reporting period, aligned to the shared date labels.
/// `None` marks a reporting gap (lines configured to span gaps draw
/// across it).
pub type MetricSeries = Vec<Option<f64>>;

/// Returns true when a series carries data worth plotting. An absent or
/// empty series is "no data for this metric", not a zero-valued series.
pub fn has_data(series: &MetricSeries) -> bool {
    !series.is_empty()
}

/// Active/total pair backing one gauge for one period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GaugeValue {
    pub active: u64,
    pub total: u64,
}

impl GaugeValue {
    /// Rejects pairs that break the `active <= total` invariant. Malformed
    /// input is treated as absent data, so the caller simply skips the gauge.
    pub fn new(active: u64, total: u64) -> Option<Self> {
        if active > total {
            return None;
        }
        Some(Self { active, total })
    }

    pub fn active_fraction(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.active as f64 / self.total as f64
        }
    }
}

/// A gauge ready to draw: which element it belongs to plus the pair
/// selected for the current period.
#[derive(Debug, Clone)]
pub struct GaugeView {
    pub id: String,
    pub label: String,
    pub value: GaugeValue,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gauge_value_rejects_active_above_total() {
        assert!(GaugeValue::new(11, 10).is_none());
        assert!(GaugeValue::new(10, 10).is_some());
        assert!(GaugeValue::new(0, 0).is_some());
    }

    #[test]
    fn test_active_fraction_zero_total() {
        let value = GaugeValue::new(0, 0).unwrap();
        assert_eq!(value.active_fraction(), 0.0);
    }

    #[test]
    fn test_has_data() {
        assert!(!has_data(&vec![]));
        assert!(has_data(&vec![Some(1.0), None]));
    }
}
