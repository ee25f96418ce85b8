// Insights service - assembles the dashboard from a snapshot
use crate::application::charts;
use crate::domain::chart::ChartModel;
use crate::domain::dashboard::InsightsDashboard;
use crate::domain::metrics::{GaugeValue, GaugeView};
use crate::infrastructure::config::Theme;
use crate::infrastructure::snapshot::InsightsSnapshot;

#[derive(Clone)]
pub struct InsightsService {
    theme: Theme,
}

impl InsightsService {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// One full render pass: every gauge with data for the selected period
    /// plus every chart with at least one non-empty series.
    pub fn build_dashboard(&self, snapshot: &InsightsSnapshot, period: &str) -> InsightsDashboard {
        let gauges = self.build_gauges(snapshot, period);
        let charts = self.build_charts(snapshot);
        InsightsDashboard::new(period.to_string(), gauges, charts)
    }

    fn build_gauges(&self, snapshot: &InsightsSnapshot, period: &str) -> Vec<GaugeView> {
        let mut gauges = Vec::new();

        for gauge in &snapshot.active_users {
            let Some(counts) = gauge.counts.get(period) else {
                tracing::debug!("no {} counts for gauge {}, skipping", period, gauge.id);
                continue;
            };
            match GaugeValue::new(counts.active, counts.total) {
                Some(value) => {
                    gauges.push(GaugeView {
                        id: gauge.id.clone(),
                        label: gauge.label.clone(),
                        value,
                    });
                }
                None => {
                    tracing::warn!(
                        "gauge {} has active {} above total {}, skipping",
                        gauge.id,
                        counts.active,
                        counts.total
                    );
                }
            }
        }

        gauges
    }

    fn build_charts(&self, snapshot: &InsightsSnapshot) -> Vec<ChartModel> {
        let labels = &snapshot.dates;
        let builders = [
            charts::lifespan_chart(labels, &snapshot.unreviewed_lifespan, &self.theme),
            charts::time_to_review_suggestions_chart(
                labels,
                &snapshot.time_to_review_suggestions,
                &self.theme,
            ),
            charts::time_to_review_pretranslations_chart(
                labels,
                &snapshot.time_to_review_pretranslations,
                &self.theme,
            ),
            charts::translation_activity_chart(
                labels,
                &snapshot.translation_activity,
                &self.theme,
            ),
            charts::review_activity_chart(labels, &snapshot.review_activity, &self.theme),
            charts::pretranslation_quality_chart(
                labels,
                &snapshot.pretranslation_quality,
                &self.theme,
            ),
        ];

        builders.into_iter().flatten().collect()
    }
}
