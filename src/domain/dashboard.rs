// Dashboard domain model
use crate::domain::chart::ChartModel;
use crate::domain::metrics::GaugeView;

/// One assembled render pass: every gauge and chart present on the page.
#[derive(Debug, Clone)]
pub struct InsightsDashboard {
    pub period: String,
    pub gauges: Vec<GaugeView>,
    pub charts: Vec<ChartModel>,
}

impl InsightsDashboard {
    pub fn new(period: String, gauges: Vec<GaugeView>, charts: Vec<ChartModel>) -> Self {
        Self {
            period,
            gauges,
            charts,
        }
    }
}
