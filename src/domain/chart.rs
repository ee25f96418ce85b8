// Chart domain model - typed description of one rendered chart
use crate::domain::metrics::MetricSeries;
use chrono::NaiveDate;

/// What a series means on its chart. Tooltip wording and item ordering
/// key off the role rather than off dataset positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesRole {
    SuggestionLifespan,
    CurrentMonth,
    TwelveMonthAverage,
    Completion,
    HumanTranslations,
    MachineryTranslations,
    NewSourceStrings,
    Unreviewed,
    PeerApproved,
    SelfApproved,
    Rejected,
    NewSuggestions,
    ApprovalRate,
    ChrfScore,
    ApprovedPretranslations,
    RejectedPretranslations,
    NewPretranslations,
}

impl SeriesRole {
    /// Display order of tooltip items within a composite chart. Lines come
    /// first, then bars in reading order regardless of their stacking order.
    pub fn tooltip_priority(self) -> u8 {
        match self {
            SeriesRole::HumanTranslations => 1,
            SeriesRole::MachineryTranslations => 2,
            SeriesRole::NewSourceStrings => 3,
            SeriesRole::PeerApproved => 1,
            SeriesRole::SelfApproved => 2,
            SeriesRole::Rejected => 3,
            SeriesRole::NewSuggestions => 4,
            SeriesRole::ApprovedPretranslations => 1,
            SeriesRole::RejectedPretranslations => 2,
            SeriesRole::NewPretranslations => 3,
            _ => 0,
        }
    }
}

/// Vertical gradient fill under a line, fading to transparent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradientFill {
    pub from: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SeriesKind {
    Line {
        fill: Option<GradientFill>,
        span_gaps: bool,
        width: u32,
    },
    Bar,
}

impl SeriesKind {
    pub fn is_bar(&self) -> bool {
        matches!(self, SeriesKind::Bar)
    }
}

/// How a dataset's tooltip line is worded.
#[derive(Debug, Clone, PartialEq)]
pub enum TooltipFormat {
    /// "3 days" - no label prefix.
    Days,
    /// "Current month: 3 days"
    LabeledDays,
    /// "New suggestions: 1,234"
    Count,
    /// "Completion: 40%" - the series stores 0..100.
    PercentOfHundred,
    /// "Human translations: 40 (40% of all translations)". The share
    /// denominator is the sum of two sibling series at the same index;
    /// when any required sibling is missing from the chart the plain
    /// count is shown instead.
    CountWithShare {
        denominator: [SeriesRole; 2],
        caption: &'static str,
        requires: &'static [SeriesRole],
    },
}

#[derive(Debug, Clone)]
pub struct Dataset {
    pub label: &'static str,
    pub role: SeriesRole,
    pub kind: SeriesKind,
    pub data: MetricSeries,
    pub axis: &'static str,
    pub stack: Option<&'static str>,
    pub color: String,
    pub order: u8,
    pub hidden: bool,
    pub tooltip: TooltipFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisSide {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickFormat {
    Count,
    Days,
    Percent,
}

#[derive(Debug, Clone)]
pub struct AxisSpec {
    pub id: &'static str,
    pub side: AxisSide,
    pub stacked: bool,
    pub label: Option<&'static str>,
    pub max: Option<f64>,
    pub step: Option<f64>,
    pub max_ticks: Option<u32>,
    pub ticks: TickFormat,
}

#[derive(Debug, Clone)]
pub struct ChartModel {
    /// Container element id, e.g. "translation-activity-chart".
    pub id: &'static str,
    pub labels: Vec<NaiveDate>,
    pub datasets: Vec<Dataset>,
    pub axes: Vec<AxisSpec>,
    /// Tooltip border color.
    pub accent: String,
    pub x_stacked: bool,
    /// Charts with more than one toggleable series render a clickable
    /// legend outside the canvas.
    pub external_legend: bool,
}

impl ChartModel {
    pub fn dataset_by_role(&self, role: SeriesRole) -> Option<&Dataset> {
        self.datasets.iter().find(|d| d.role == role)
    }

    pub fn set_hidden(&mut self, index: usize, hidden: bool) {
        if let Some(dataset) = self.datasets.get_mut(index) {
            dataset.hidden = hidden;
        }
    }
}
