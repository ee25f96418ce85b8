// Gauge arc geometry
//
// Angles are measured in half-turns (fractions of 360 degrees, so a full
// circle is 2.0), matching the canvas convention where an arc from -0.5 to
// 0.5 half-turns sweeps the right half of the circle starting at 12 o'clock.
use crate::domain::metrics::GaugeValue;

/// The active segment starts at 12 o'clock.
pub const ACTIVE_START: f64 = -0.5;
pub const FULL_CIRCLE: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaugeArcs {
    pub active_start: f64,
    pub active_sweep: f64,
    pub inactive_sweep: f64,
}

impl GaugeArcs {
    /// Where the inactive segment begins.
    pub fn active_end(&self) -> f64 {
        self.active_start + self.active_sweep
    }

    pub fn is_fully_inactive(&self) -> bool {
        self.active_sweep == 0.0 && self.inactive_sweep >= FULL_CIRCLE
    }
}

/// Split the circle between the active and inactive segments. `total == 0`
/// is the defined empty state: the whole circle renders inactive.
pub fn gauge_arcs(value: GaugeValue) -> GaugeArcs {
    if value.total == 0 {
        return GaugeArcs {
            active_start: ACTIVE_START,
            active_sweep: 0.0,
            inactive_sweep: FULL_CIRCLE,
        };
    }
    GaugeArcs {
        active_start: ACTIVE_START,
        active_sweep: value.active_fraction() * FULL_CIRCLE,
        inactive_sweep: (value.total - value.active) as f64 / value.total as f64 * FULL_CIRCLE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arcs(active: u64, total: u64) -> GaugeArcs {
        gauge_arcs(GaugeValue::new(active, total).unwrap())
    }

    #[test]
    fn test_sweeps_cover_full_circle() {
        for (active, total) in [(0, 0), (0, 1), (3, 10), (7, 7), (99, 100)] {
            let arcs = arcs(active, total);
            assert!(
                (arcs.active_sweep + arcs.inactive_sweep - FULL_CIRCLE).abs() < 1e-12,
                "active={} total={}",
                active,
                total
            );
        }
    }

    #[test]
    fn test_three_of_ten() {
        let arcs = arcs(3, 10);
        assert_eq!(arcs.active_start, -0.5);
        assert!((arcs.active_sweep - 0.6).abs() < 1e-12);
        assert!((arcs.inactive_sweep - 1.4).abs() < 1e-12);
        assert!((arcs.active_end() - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_zero_total_is_fully_inactive() {
        let arcs = arcs(0, 0);
        assert!(arcs.is_fully_inactive());
        assert_eq!(arcs.active_sweep, 0.0);
        assert_eq!(arcs.inactive_sweep, FULL_CIRCLE);
    }

    #[test]
    fn test_all_active() {
        let arcs = arcs(7, 7);
        assert_eq!(arcs.active_sweep, FULL_CIRCLE);
        assert_eq!(arcs.inactive_sweep, 0.0);
    }
}
