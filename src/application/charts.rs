// Chart builders - one per insights chart
//
// Each builder pairs the snapshot's named series with its visual encoding.
// Absent or empty series are excluded from the chart entirely, and a chart
// is only produced when at least one of its series has data.
use crate::domain::chart::{
    AxisSide, AxisSpec, ChartModel, Dataset, GradientFill, SeriesKind, SeriesRole, TickFormat,
    TooltipFormat,
};
use crate::domain::metrics::{MetricSeries, has_data};
use crate::infrastructure::config::Theme;
use crate::infrastructure::snapshot::{
    PretranslationQuality, ReviewActivity, TimeToReview, TranslationActivity,
};
use chrono::NaiveDate;

pub const STRINGS_AXIS: &str = "strings-y-axis";
pub const DAYS_AXIS: &str = "days-y-axis";
pub const COMPLETION_AXIS: &str = "completion-y-axis";
pub const APPROVAL_RATE_AXIS: &str = "approval-rate-y-axis";

const TRANSLATION_ROLES: &[SeriesRole] = &[
    SeriesRole::HumanTranslations,
    SeriesRole::MachineryTranslations,
];
const REVIEW_ROLES: &[SeriesRole] = &[
    SeriesRole::PeerApproved,
    SeriesRole::SelfApproved,
    SeriesRole::Rejected,
];

pub fn lifespan_chart(
    labels: &[NaiveDate],
    series: &MetricSeries,
    theme: &Theme,
) -> Option<ChartModel> {
    let palette = &theme.palette;
    finish(
        "unreviewed-suggestions-lifespan-chart",
        labels,
        vec![line(
            "Age of unreviewed suggestions",
            SeriesRole::SuggestionLifespan,
            series,
            &palette.lifespan,
            Some(palette.lifespan_fill.as_str()),
            DAYS_AXIS,
            2,
            0,
            false,
            TooltipFormat::Days,
        )],
        vec![days_axis()],
        &palette.lifespan,
        false,
        false,
    )
}

pub fn time_to_review_suggestions_chart(
    labels: &[NaiveDate],
    section: &TimeToReview,
    theme: &Theme,
) -> Option<ChartModel> {
    let palette = &theme.palette;
    finish(
        "time-to-review-suggestions-chart",
        labels,
        vec![
            line(
                "Current month",
                SeriesRole::CurrentMonth,
                &section.current_month,
                &palette.review_time_current,
                Some(palette.review_time_fill.as_str()),
                DAYS_AXIS,
                2,
                2,
                true,
                TooltipFormat::LabeledDays,
            ),
            line(
                "12-month average",
                SeriesRole::TwelveMonthAverage,
                &section.twelve_month_average,
                &palette.review_time_average,
                None,
                DAYS_AXIS,
                1,
                1,
                true,
                TooltipFormat::LabeledDays,
            ),
        ],
        vec![days_axis()],
        &palette.review_time_average,
        false,
        false,
    )
}

pub fn time_to_review_pretranslations_chart(
    labels: &[NaiveDate],
    section: &TimeToReview,
    theme: &Theme,
) -> Option<ChartModel> {
    let palette = &theme.palette;
    finish(
        "time-to-review-pretranslations-chart",
        labels,
        vec![
            line(
                "Current month",
                SeriesRole::CurrentMonth,
                &section.current_month,
                &palette.pretranslation_time_current,
                Some(palette.pretranslation_time_fill.as_str()),
                DAYS_AXIS,
                2,
                2,
                true,
                TooltipFormat::LabeledDays,
            ),
            line(
                "12-month average",
                SeriesRole::TwelveMonthAverage,
                &section.twelve_month_average,
                &palette.pretranslation_time_average,
                None,
                DAYS_AXIS,
                1,
                1,
                true,
                TooltipFormat::LabeledDays,
            ),
        ],
        vec![days_axis()],
        &palette.pretranslation_time_average,
        false,
        false,
    )
}

pub fn translation_activity_chart(
    labels: &[NaiveDate],
    section: &TranslationActivity,
    theme: &Theme,
) -> Option<ChartModel> {
    let palette = &theme.palette;
    let share = |caption| TooltipFormat::CountWithShare {
        denominator: [
            SeriesRole::HumanTranslations,
            SeriesRole::MachineryTranslations,
        ],
        caption,
        requires: TRANSLATION_ROLES,
    };
    finish(
        "translation-activity-chart",
        labels,
        vec![
            line(
                "Completion",
                SeriesRole::Completion,
                &section.completion,
                &palette.completion,
                Some(palette.completion_fill.as_str()),
                COMPLETION_AXIS,
                2,
                0,
                false,
                TooltipFormat::PercentOfHundred,
            ),
            bar(
                "Human translations",
                SeriesRole::HumanTranslations,
                &section.human_translations,
                &palette.human_translations,
                "translations",
                2,
                false,
                share("of all translations"),
            ),
            bar(
                "Machinery translations",
                SeriesRole::MachineryTranslations,
                &section.machinery_translations,
                &palette.machinery_translations,
                "translations",
                1,
                false,
                share("of all translations"),
            ),
            bar(
                "New source strings",
                SeriesRole::NewSourceStrings,
                &section.new_source_strings,
                &palette.new_source_strings,
                "source-strings",
                3,
                true,
                TooltipFormat::Count,
            ),
        ],
        vec![
            AxisSpec {
                id: COMPLETION_AXIS,
                side: AxisSide::Right,
                stacked: false,
                label: Some("COMPLETION"),
                max: Some(100.0),
                step: Some(20.0),
                max_ticks: None,
                ticks: TickFormat::Percent,
            },
            strings_axis(),
        ],
        &palette.completion,
        true,
        true,
    )
}

pub fn review_activity_chart(
    labels: &[NaiveDate],
    section: &ReviewActivity,
    theme: &Theme,
) -> Option<ChartModel> {
    let palette = &theme.palette;
    finish(
        "review-activity-chart",
        labels,
        vec![
            line(
                "Unreviewed",
                SeriesRole::Unreviewed,
                &section.unreviewed,
                &palette.unreviewed,
                Some(palette.unreviewed_fill.as_str()),
                STRINGS_AXIS,
                2,
                0,
                false,
                TooltipFormat::Count,
            ),
            bar(
                "Peer-approved",
                SeriesRole::PeerApproved,
                &section.peer_approved,
                &palette.peer_approved,
                "review-actions",
                3,
                false,
                TooltipFormat::CountWithShare {
                    denominator: [SeriesRole::PeerApproved, SeriesRole::Rejected],
                    caption: "of peer-reviews",
                    requires: REVIEW_ROLES,
                },
            ),
            bar(
                "Self-approved",
                SeriesRole::SelfApproved,
                &section.self_approved,
                &palette.self_approved,
                "review-actions",
                2,
                false,
                TooltipFormat::CountWithShare {
                    denominator: [SeriesRole::PeerApproved, SeriesRole::SelfApproved],
                    caption: "of all approvals",
                    requires: REVIEW_ROLES,
                },
            ),
            bar(
                "Rejected",
                SeriesRole::Rejected,
                &section.rejected,
                &palette.rejected,
                "review-actions",
                1,
                false,
                TooltipFormat::CountWithShare {
                    denominator: [SeriesRole::PeerApproved, SeriesRole::Rejected],
                    caption: "of peer-reviews",
                    requires: REVIEW_ROLES,
                },
            ),
            bar(
                "New suggestions",
                SeriesRole::NewSuggestions,
                &section.new_suggestions,
                &palette.new_suggestions,
                "new-suggestions",
                4,
                true,
                TooltipFormat::Count,
            ),
        ],
        vec![strings_axis()],
        &palette.unreviewed,
        true,
        true,
    )
}

pub fn pretranslation_quality_chart(
    labels: &[NaiveDate],
    section: &PretranslationQuality,
    theme: &Theme,
) -> Option<ChartModel> {
    let palette = &theme.palette;
    finish(
        "pretranslation-quality-chart",
        labels,
        vec![
            line(
                "Approval rate",
                SeriesRole::ApprovalRate,
                &section.approval_rate,
                &palette.approval_rate,
                Some(palette.approval_rate_fill.as_str()),
                APPROVAL_RATE_AXIS,
                2,
                0,
                true,
                TooltipFormat::PercentOfHundred,
            ),
            line(
                "chrf++ score",
                SeriesRole::ChrfScore,
                &section.chrf_score,
                &palette.chrf_score,
                Some(palette.chrf_score_fill.as_str()),
                APPROVAL_RATE_AXIS,
                2,
                0,
                true,
                TooltipFormat::Count,
            ),
            bar(
                "Approved",
                SeriesRole::ApprovedPretranslations,
                &section.approved,
                &palette.pretranslation_approved,
                "reviewed-pretranslations",
                2,
                false,
                TooltipFormat::Count,
            ),
            bar(
                "Rejected",
                SeriesRole::RejectedPretranslations,
                &section.rejected,
                &palette.pretranslation_rejected,
                "reviewed-pretranslations",
                1,
                false,
                TooltipFormat::Count,
            ),
            bar(
                "New pretranslations",
                SeriesRole::NewPretranslations,
                &section.new_pretranslations,
                &palette.new_pretranslations,
                "new-pretranslations",
                3,
                true,
                TooltipFormat::Count,
            ),
        ],
        vec![
            AxisSpec {
                id: APPROVAL_RATE_AXIS,
                side: AxisSide::Right,
                stacked: false,
                label: Some("APPROVAL RATE"),
                max: Some(100.0),
                step: Some(20.0),
                max_ticks: None,
                ticks: TickFormat::Percent,
            },
            strings_axis(),
        ],
        &palette.quality_accent,
        true,
        true,
    )
}

fn days_axis() -> AxisSpec {
    AxisSpec {
        id: DAYS_AXIS,
        side: AxisSide::Right,
        stacked: false,
        label: None,
        max: None,
        step: None,
        max_ticks: Some(3),
        ticks: TickFormat::Days,
    }
}

fn strings_axis() -> AxisSpec {
    AxisSpec {
        id: STRINGS_AXIS,
        side: AxisSide::Left,
        stacked: true,
        label: Some("STRINGS"),
        max: None,
        step: None,
        max_ticks: None,
        ticks: TickFormat::Count,
    }
}

#[allow(clippy::too_many_arguments)]
fn line(
    label: &'static str,
    role: SeriesRole,
    data: &MetricSeries,
    color: &str,
    fill: Option<&str>,
    axis: &'static str,
    width: u32,
    order: u8,
    span_gaps: bool,
    tooltip: TooltipFormat,
) -> Option<Dataset> {
    if !has_data(data) {
        return None;
    }
    Some(Dataset {
        label,
        role,
        kind: SeriesKind::Line {
            fill: fill.map(|from| GradientFill {
                from: from.to_string(),
            }),
            span_gaps,
            width,
        },
        data: data.clone(),
        axis,
        stack: None,
        color: color.to_string(),
        order,
        hidden: false,
        tooltip,
    })
}

#[allow(clippy::too_many_arguments)]
fn bar(
    label: &'static str,
    role: SeriesRole,
    data: &MetricSeries,
    color: &str,
    stack: &'static str,
    order: u8,
    hidden: bool,
    tooltip: TooltipFormat,
) -> Option<Dataset> {
    if !has_data(data) {
        return None;
    }
    Some(Dataset {
        label,
        role,
        kind: SeriesKind::Bar,
        data: data.clone(),
        axis: STRINGS_AXIS,
        stack: Some(stack),
        color: color.to_string(),
        order,
        hidden,
        tooltip,
    })
}

#[allow(clippy::too_many_arguments)]
fn finish(
    id: &'static str,
    labels: &[NaiveDate],
    datasets: Vec<Option<Dataset>>,
    axes: Vec<AxisSpec>,
    accent: &str,
    x_stacked: bool,
    external_legend: bool,
) -> Option<ChartModel> {
    let datasets: Vec<Dataset> = datasets.into_iter().flatten().collect();
    if datasets.is_empty() {
        return None;
    }
    Some(ChartModel {
        id,
        labels: labels.to_vec(),
        datasets,
        axes,
        accent: accent.to_string(),
        x_stacked,
        external_legend,
    })
}
