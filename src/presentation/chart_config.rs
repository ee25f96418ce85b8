// Chart configuration emission
//
// The charting library owns canvas drawing, animation and hit-testing; this
// module hands it a ready-made configuration document per chart. Tick and
// tooltip callbacks cannot cross a JSON boundary, so tick formats travel as
// hints the page script maps onto callbacks.
use crate::application::tooltip::{tooltip_label, tooltip_title};
use crate::domain::chart::{AxisSide, AxisSpec, ChartModel, Dataset, SeriesKind, TickFormat};
use serde::Serialize;

pub fn chart_config_json(chart: &ChartModel) -> serde_json::Result<String> {
    serde_json::to_string(&ChartConfig::from_model(chart))
}

#[derive(Serialize)]
struct ChartConfig<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    data: ChartData<'a>,
    options: ChartOptions<'a>,
}

impl<'a> ChartConfig<'a> {
    fn from_model(chart: &'a ChartModel) -> Self {
        // The lifespan chart is the only plain line chart; everything else
        // is laid out on a bar scale with offset categories.
        let kind = if chart.datasets.len() == 1 {
            "line"
        } else {
            "bar"
        };
        Self {
            kind,
            data: ChartData {
                labels: chart
                    .labels
                    .iter()
                    .map(|d| d.format("%Y-%m-%d").to_string())
                    .collect(),
                datasets: chart.datasets.iter().map(DatasetConfig::from_model).collect(),
            },
            options: ChartOptions::from_model(chart, kind == "bar"),
        }
    }
}

#[derive(Serialize)]
struct ChartData<'a> {
    labels: Vec<String>,
    datasets: Vec<DatasetConfig<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DatasetConfig<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    label: &'a str,
    data: &'a [Option<f64>],
    #[serde(rename = "yAxisID")]
    y_axis_id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    background_color: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hover_background_color: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    border_color: Option<[&'a str; 1]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    border_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    fill: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stack: Option<&'a str>,
    order: u8,
    #[serde(skip_serializing_if = "is_false")]
    hidden: bool,
    #[serde(skip_serializing_if = "is_false")]
    span_gaps: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    point_background_color: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    point_radius: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    point_hover_radius: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    point_hit_radius: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    point_hover_background_color: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    point_hover_border_color: Option<&'static str>,
}

impl<'a> DatasetConfig<'a> {
    fn from_model(dataset: &'a Dataset) -> Self {
        match &dataset.kind {
            SeriesKind::Line {
                fill,
                span_gaps,
                width,
            } => Self {
                kind: "line",
                label: dataset.label,
                data: &dataset.data,
                y_axis_id: dataset.axis,
                background_color: fill.as_ref().map(|f| f.from.as_str()),
                hover_background_color: None,
                border_color: Some([dataset.color.as_str()]),
                border_width: Some(*width),
                fill: Some(fill.is_some()),
                stack: None,
                order: dataset.order,
                hidden: dataset.hidden,
                span_gaps: *span_gaps,
                point_background_color: Some(&dataset.color),
                point_radius: Some(4),
                point_hover_radius: Some(6),
                point_hit_radius: Some(10),
                point_hover_background_color: Some(&dataset.color),
                point_hover_border_color: Some("#FFF"),
            },
            SeriesKind::Bar => Self {
                kind: "bar",
                label: dataset.label,
                data: &dataset.data,
                y_axis_id: dataset.axis,
                background_color: Some(&dataset.color),
                hover_background_color: Some(&dataset.color),
                border_color: None,
                border_width: None,
                fill: None,
                stack: dataset.stack,
                order: dataset.order,
                hidden: dataset.hidden,
                span_gaps: false,
                point_background_color: None,
                point_radius: None,
                point_hover_radius: None,
                point_hit_radius: None,
                point_hover_background_color: None,
                point_hover_border_color: None,
            },
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ChartOptions<'a> {
    legend: LegendOptions,
    tooltips: TooltipOptions<'a>,
    /// Pre-rendered tooltip strings; the page script maps them onto the
    /// charting library's tooltip callbacks.
    tooltip_text: TooltipText,
    scales: Scales<'a>,
}

impl<'a> ChartOptions<'a> {
    fn from_model(chart: &'a ChartModel, offset: bool) -> Self {
        let composite = chart.datasets.len() > 1;
        Self {
            // The external legend replaces the built-in one everywhere.
            legend: LegendOptions { display: false },
            tooltips: TooltipOptions {
                mode: composite.then_some("index"),
                intersect: composite.then_some(false),
                border_color: &chart.accent,
                border_width: 1,
                caret_padding: 5,
                x_padding: 10,
                y_padding: 10,
                display_colors: (!composite).then_some(false),
            },
            tooltip_text: TooltipText::from_model(chart),
            scales: Scales {
                x_axes: [XAxis {
                    stacked: chart.x_stacked,
                    kind: "time",
                    time: TimeOptions {
                        display_formats: DisplayFormats { month: "MMM" },
                        tooltip_format: "MMMM YYYY",
                    },
                    grid_lines: GridLines { display: false },
                    offset,
                    ticks: XTicks { source: "data" },
                }],
                y_axes: chart.axes.iter().map(YAxis::from_spec).collect(),
            },
        }
    }
}

#[derive(Serialize)]
struct LegendOptions {
    display: bool,
}

#[derive(Serialize)]
struct TooltipText {
    /// One heading per x-position, e.g. "January 2025".
    titles: Vec<Option<String>>,
    /// One line per dataset per x-position; gaps stay empty.
    labels: Vec<Vec<Option<String>>>,
    /// Item sort key per dataset.
    priority: Vec<u8>,
}

impl TooltipText {
    fn from_model(chart: &ChartModel) -> Self {
        let positions = chart.labels.len();
        Self {
            titles: (0..positions).map(|i| tooltip_title(chart, i)).collect(),
            labels: (0..chart.datasets.len())
                .map(|d| (0..positions).map(|i| tooltip_label(chart, d, i)).collect())
                .collect(),
            priority: chart
                .datasets
                .iter()
                .map(|d| d.role.tooltip_priority())
                .collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TooltipOptions<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    mode: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    intersect: Option<bool>,
    border_color: &'a str,
    border_width: u32,
    caret_padding: u32,
    x_padding: u32,
    y_padding: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    display_colors: Option<bool>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Scales<'a> {
    x_axes: [XAxis; 1],
    y_axes: Vec<YAxis<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct XAxis {
    #[serde(skip_serializing_if = "is_false")]
    stacked: bool,
    #[serde(rename = "type")]
    kind: &'static str,
    time: TimeOptions,
    grid_lines: GridLines,
    #[serde(skip_serializing_if = "is_false")]
    offset: bool,
    ticks: XTicks,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TimeOptions {
    display_formats: DisplayFormats,
    tooltip_format: &'static str,
}

#[derive(Serialize)]
struct DisplayFormats {
    month: &'static str,
}

#[derive(Serialize)]
struct GridLines {
    display: bool,
}

#[derive(Serialize)]
struct XTicks {
    source: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct YAxis<'a> {
    id: &'a str,
    position: &'static str,
    #[serde(skip_serializing_if = "is_false")]
    stacked: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    scale_label: Option<ScaleLabel<'a>>,
    grid_lines: GridLines,
    ticks: YTicks,
}

impl<'a> YAxis<'a> {
    fn from_spec(spec: &'a AxisSpec) -> Self {
        Self {
            id: spec.id,
            position: match spec.side {
                AxisSide::Left => "left",
                AxisSide::Right => "right",
            },
            stacked: spec.stacked,
            scale_label: spec.label.map(|label| ScaleLabel {
                display: true,
                label_string: label,
            }),
            grid_lines: GridLines { display: false },
            ticks: YTicks {
                begin_at_zero: true,
                max: spec.max,
                step_size: spec.step,
                max_ticks_limit: spec.max_ticks,
                precision: 0,
                format: match spec.ticks {
                    TickFormat::Count => None,
                    TickFormat::Days => Some("days"),
                    TickFormat::Percent => Some("percent"),
                },
            },
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ScaleLabel<'a> {
    display: bool,
    label_string: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct YTicks {
    begin_at_zero: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    step_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_ticks_limit: Option<u32>,
    precision: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    format: Option<&'static str>,
}

fn is_false(flag: &bool) -> bool {
    !*flag
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::charts::{
        lifespan_chart, time_to_review_suggestions_chart, translation_activity_chart,
    };
    use crate::domain::metrics::MetricSeries;
    use crate::infrastructure::config::Theme;
    use crate::infrastructure::snapshot::{TimeToReview, TranslationActivity};
    use chrono::NaiveDate;
    use serde_json::Value;

    fn labels() -> Vec<NaiveDate> {
        vec![
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(),
        ]
    }

    fn series(values: &[f64]) -> MetricSeries {
        values.iter().map(|v| Some(*v)).collect()
    }

    fn to_value(chart: &ChartModel) -> Value {
        serde_json::from_str(&chart_config_json(chart).unwrap()).unwrap()
    }

    #[test]
    fn test_lifespan_config_is_single_line_chart() {
        let chart = lifespan_chart(&labels(), &series(&[3.0, 4.0]), &Theme::default()).unwrap();
        let value = to_value(&chart);
        assert_eq!(value["type"], "line");
        assert_eq!(value["data"]["labels"][0], "2025-01-01");
        assert_eq!(value["data"]["datasets"].as_array().unwrap().len(), 1);
        assert_eq!(value["options"]["tooltips"]["displayColors"], false);
        assert!(value["options"]["scales"]["xAxes"][0].get("offset").is_none());
    }

    #[test]
    fn test_composite_config_uses_index_tooltips() {
        let section = TranslationActivity {
            completion: series(&[80.0, 90.0]),
            human_translations: series(&[40.0, 50.0]),
            machinery_translations: series(&[60.0, 30.0]),
            new_source_strings: series(&[5.0, 7.0]),
        };
        let chart = translation_activity_chart(&labels(), &section, &Theme::default()).unwrap();
        let value = to_value(&chart);
        assert_eq!(value["type"], "bar");
        assert_eq!(value["options"]["tooltips"]["mode"], "index");
        assert_eq!(value["options"]["tooltips"]["intersect"], false);
        assert_eq!(value["options"]["scales"]["xAxes"][0]["stacked"], true);
        assert_eq!(value["options"]["scales"]["xAxes"][0]["offset"], true);

        let datasets = value["data"]["datasets"].as_array().unwrap();
        assert_eq!(datasets[0]["yAxisID"], "completion-y-axis");
        assert_eq!(datasets[1]["stack"], "translations");
        // Only the initially hidden dataset carries the flag.
        assert!(datasets[1].get("hidden").is_none());
        assert_eq!(datasets[3]["hidden"], true);
    }

    #[test]
    fn test_tooltip_text_embedded() {
        let section = TranslationActivity {
            completion: series(&[80.0, 90.0]),
            human_translations: series(&[40.0, 50.0]),
            machinery_translations: series(&[60.0, 30.0]),
            new_source_strings: vec![],
        };
        let chart = translation_activity_chart(&labels(), &section, &Theme::default()).unwrap();
        let value = to_value(&chart);
        let text = &value["options"]["tooltipText"];
        assert_eq!(text["titles"][0], "January 2025");
        assert_eq!(
            text["labels"][1][0],
            "Human translations: 40 (40% of all translations)"
        );
        assert_eq!(text["priority"][0], 0);
        assert_eq!(text["priority"][2], 2);
    }

    #[test]
    fn test_span_gaps_serialized_camel_case() {
        let section = TimeToReview {
            current_month: series(&[2.0, 3.0]),
            twelve_month_average: series(&[2.5, 2.5]),
        };
        let chart =
            time_to_review_suggestions_chart(&labels(), &section, &Theme::default()).unwrap();
        let value = to_value(&chart);
        let datasets = value["data"]["datasets"].as_array().unwrap();
        assert_eq!(datasets[0]["spanGaps"], true);
        assert_eq!(datasets[0]["borderWidth"], 2);
        assert_eq!(datasets[1]["borderWidth"], 1);
        assert_eq!(datasets[1]["fill"], false);
    }

    #[test]
    fn test_axis_ticks() {
        let chart = lifespan_chart(&labels(), &series(&[3.0, 4.0]), &Theme::default()).unwrap();
        let value = to_value(&chart);
        let y_axis = &value["options"]["scales"]["yAxes"][0];
        assert_eq!(y_axis["position"], "right");
        assert_eq!(y_axis["ticks"]["beginAtZero"], true);
        assert_eq!(y_axis["ticks"]["maxTicksLimit"], 3);
        assert_eq!(y_axis["ticks"]["format"], "days");
        assert!(y_axis["ticks"].get("max").is_none());
    }
}
