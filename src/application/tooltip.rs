// Tooltip text for time-series charts
use crate::application::format::{format_number, format_percent, percent_of};
use crate::domain::chart::{ChartModel, Dataset, SeriesRole, TooltipFormat};

/// Tooltip heading for one x-position, e.g. "January 2025".
pub fn tooltip_title(chart: &ChartModel, index: usize) -> Option<String> {
    chart
        .labels
        .get(index)
        .map(|date| date.format("%B %Y").to_string())
}

/// Tooltip line for one dataset at one x-position. None when the dataset
/// does not exist or has no value there (a reporting gap).
pub fn tooltip_label(chart: &ChartModel, dataset_index: usize, index: usize) -> Option<String> {
    let dataset = chart.datasets.get(dataset_index)?;
    let value = (*dataset.data.get(index)?)?;
    Some(render_label(chart, dataset, value, index))
}

/// All tooltip lines for one x-position: visible datasets only, ordered by
/// role priority rather than by stacking order.
pub fn tooltip_body(chart: &ChartModel, index: usize) -> Vec<String> {
    let mut items: Vec<(u8, usize)> = chart
        .datasets
        .iter()
        .enumerate()
        .filter(|(_, d)| !d.hidden && d.data.get(index).copied().flatten().is_some())
        .map(|(i, d)| (d.role.tooltip_priority(), i))
        .collect();
    items.sort_by_key(|&(priority, i)| (priority, i));
    items
        .into_iter()
        .filter_map(|(_, i)| tooltip_label(chart, i, index))
        .collect()
}

fn render_label(chart: &ChartModel, dataset: &Dataset, value: f64, index: usize) -> String {
    match &dataset.tooltip {
        TooltipFormat::Days => format!("{} days", format_number(value)),
        TooltipFormat::LabeledDays => {
            format!("{}: {} days", dataset.label, format_number(value))
        }
        TooltipFormat::Count => format!("{}: {}", dataset.label, format_number(value)),
        TooltipFormat::PercentOfHundred => {
            format!("{}: {}", dataset.label, format_percent(value / 100.0))
        }
        TooltipFormat::CountWithShare {
            denominator,
            caption,
            requires,
        } => {
            let base = format!("{}: {}", dataset.label, format_number(value));
            if requires
                .iter()
                .any(|role| chart.dataset_by_role(*role).is_none())
            {
                return base;
            }
            let total = denominator
                .iter()
                .map(|role| sibling_value(chart, *role, index))
                .sum::<f64>();
            format!("{} ({} {})", base, percent_of(value, total), caption)
        }
    }
}

fn sibling_value(chart: &ChartModel, role: SeriesRole, index: usize) -> f64 {
    chart
        .dataset_by_role(role)
        .and_then(|d| d.data.get(index).copied().flatten())
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::charts::{
        lifespan_chart, review_activity_chart, translation_activity_chart,
    };
    use crate::domain::metrics::MetricSeries;
    use crate::infrastructure::config::Theme;
    use crate::infrastructure::snapshot::{ReviewActivity, TranslationActivity};
    use chrono::NaiveDate;

    fn labels() -> Vec<NaiveDate> {
        vec![NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()]
    }

    fn series(values: &[f64]) -> MetricSeries {
        values.iter().map(|v| Some(*v)).collect()
    }

    fn translation_chart() -> ChartModel {
        let section = TranslationActivity {
            completion: series(&[80.0]),
            human_translations: series(&[40.0]),
            machinery_translations: series(&[60.0]),
            new_source_strings: series(&[1234.0]),
        };
        translation_activity_chart(&labels(), &section, &Theme::default()).unwrap()
    }

    #[test]
    fn test_title_is_month_and_year() {
        let chart = translation_chart();
        assert_eq!(tooltip_title(&chart, 0), Some("January 2025".to_string()));
        assert_eq!(tooltip_title(&chart, 9), None);
    }

    #[test]
    fn test_days_label() {
        let chart = lifespan_chart(&labels(), &series(&[1500.0]), &Theme::default()).unwrap();
        assert_eq!(tooltip_label(&chart, 0, 0), Some("1,500 days".to_string()));
    }

    #[test]
    fn test_share_of_all_translations() {
        let chart = translation_chart();
        let human = chart
            .datasets
            .iter()
            .position(|d| d.role == SeriesRole::HumanTranslations)
            .unwrap();
        assert_eq!(
            tooltip_label(&chart, human, 0),
            Some("Human translations: 40 (40% of all translations)".to_string())
        );
    }

    #[test]
    fn test_completion_renders_as_percent() {
        let chart = translation_chart();
        assert_eq!(
            tooltip_label(&chart, 0, 0),
            Some("Completion: 80%".to_string())
        );
    }

    #[test]
    fn test_count_label_grouping() {
        let chart = translation_chart();
        let new_source = chart
            .datasets
            .iter()
            .position(|d| d.role == SeriesRole::NewSourceStrings)
            .unwrap();
        assert_eq!(
            tooltip_label(&chart, new_source, 0),
            Some("New source strings: 1,234".to_string())
        );
    }

    #[test]
    fn test_review_shares() {
        let section = ReviewActivity {
            unreviewed: series(&[100.0]),
            peer_approved: series(&[30.0]),
            self_approved: series(&[10.0]),
            rejected: series(&[10.0]),
            new_suggestions: vec![],
        };
        let chart = review_activity_chart(&labels(), &section, &Theme::default()).unwrap();

        let by_role = |role| {
            chart
                .datasets
                .iter()
                .position(|d| d.role == role)
                .unwrap()
        };
        // Self-approved over all approvals (30 + 10).
        assert_eq!(
            tooltip_label(&chart, by_role(SeriesRole::SelfApproved), 0),
            Some("Self-approved: 10 (25% of all approvals)".to_string())
        );
        // Peer-approved and rejected over peer-reviews (30 + 10).
        assert_eq!(
            tooltip_label(&chart, by_role(SeriesRole::PeerApproved), 0),
            Some("Peer-approved: 30 (75% of peer-reviews)".to_string())
        );
        assert_eq!(
            tooltip_label(&chart, by_role(SeriesRole::Rejected), 0),
            Some("Rejected: 10 (25% of peer-reviews)".to_string())
        );
    }

    #[test]
    fn test_shares_fall_back_to_counts_when_sibling_missing() {
        let section = ReviewActivity {
            unreviewed: series(&[100.0]),
            peer_approved: series(&[30.0]),
            self_approved: series(&[10.0]),
            rejected: vec![],
            new_suggestions: vec![],
        };
        let chart = review_activity_chart(&labels(), &section, &Theme::default()).unwrap();
        let self_approved = chart
            .datasets
            .iter()
            .position(|d| d.role == SeriesRole::SelfApproved)
            .unwrap();
        assert_eq!(
            tooltip_label(&chart, self_approved, 0),
            Some("Self-approved: 10".to_string())
        );
    }

    #[test]
    fn test_share_with_zero_denominator() {
        let section = ReviewActivity {
            unreviewed: series(&[100.0]),
            peer_approved: series(&[0.0]),
            self_approved: series(&[0.0]),
            rejected: series(&[0.0]),
            new_suggestions: vec![],
        };
        let chart = review_activity_chart(&labels(), &section, &Theme::default()).unwrap();
        let rejected = chart
            .datasets
            .iter()
            .position(|d| d.role == SeriesRole::Rejected)
            .unwrap();
        assert_eq!(
            tooltip_label(&chart, rejected, 0),
            Some("Rejected: 0 (0% of peer-reviews)".to_string())
        );
    }

    #[test]
    fn test_body_order_and_hidden_exclusion() {
        let section = ReviewActivity {
            unreviewed: series(&[100.0]),
            peer_approved: series(&[30.0]),
            self_approved: series(&[10.0]),
            rejected: series(&[10.0]),
            new_suggestions: series(&[50.0]),
        };
        let mut chart = review_activity_chart(&labels(), &section, &Theme::default()).unwrap();
        let body = tooltip_body(&chart, 0);
        // New suggestions starts hidden, so four lines: the line series
        // first, then peer-approved, self-approved, rejected.
        assert_eq!(body.len(), 4);
        assert!(body[0].starts_with("Unreviewed"));
        assert!(body[1].starts_with("Peer-approved"));
        assert!(body[2].starts_with("Self-approved"));
        assert!(body[3].starts_with("Rejected"));

        // Hiding a dataset removes its line.
        let rejected = chart
            .datasets
            .iter()
            .position(|d| d.role == SeriesRole::Rejected)
            .unwrap();
        chart.set_hidden(rejected, true);
        let body = tooltip_body(&chart, 0);
        assert_eq!(body.len(), 3);
        assert!(!body.iter().any(|line| line.starts_with("Rejected")));
    }
}
