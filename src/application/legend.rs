// Legend visibility state
use crate::domain::chart::ChartModel;

/// Tracks which datasets a user has hidden via the external legend.
/// Toggling touches exactly one dataset in place; the chart is never
/// rebuilt and other datasets keep their state.
#[derive(Debug, Clone)]
pub struct LegendState {
    hidden: Vec<bool>,
}

impl LegendState {
    /// Capture the initial visibility flags of a chart's datasets.
    pub fn from_chart(chart: &ChartModel) -> Self {
        Self {
            hidden: chart.datasets.iter().map(|d| d.hidden).collect(),
        }
    }

    pub fn is_hidden(&self, index: usize) -> bool {
        self.hidden.get(index).copied().unwrap_or(false)
    }

    /// Flip one dataset's visibility and apply it to the chart. Returns
    /// the new hidden flag, or None when the index does not name a dataset.
    pub fn toggle(&mut self, chart: &mut ChartModel, index: usize) -> Option<bool> {
        let flag = self.hidden.get_mut(index)?;
        *flag = !*flag;
        let hidden = *flag;
        chart.set_hidden(index, hidden);
        Some(hidden)
    }
}
