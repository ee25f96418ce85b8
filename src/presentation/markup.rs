// Dashboard markup - legend lists, chart containers, page assembly
use crate::application::legend::LegendState;
use crate::domain::chart::ChartModel;
use crate::domain::dashboard::InsightsDashboard;
use crate::infrastructure::config::Theme;
use crate::presentation::chart_config::chart_config_json;
use crate::presentation::svg_gauge::gauge_svg;

pub fn escape_html(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Clickable legend for charts with more than one toggleable series: one
/// label per dataset, marked hidden when the series starts hidden. The page
/// script toggles the matching dataset in place on click.
pub fn legend_markup(chart: &ChartModel) -> Option<String> {
    if !chart.external_legend {
        return None;
    }
    let state = LegendState::from_chart(chart);
    let items: String = chart
        .datasets
        .iter()
        .enumerate()
        .map(|(index, dataset)| {
            let class = if state.is_hidden(index) {
                "label hidden"
            } else {
                "label"
            };
            format!(
                r#"<li class="{class}" data-chart="{chart_id}" data-dataset="{index}"><span class="icon" style="background-color: {color}"></span>{label}</li>"#,
                chart_id = chart.id,
                color = dataset.color,
                label = dataset.label,
            )
        })
        .collect();
    Some(format!(
        r#"<ul class="legend" id="{id}-legend">{items}</ul>"#,
        id = chart.id
    ))
}

/// Container, canvas and legend for one chart, plus the registration call
/// the page script picks up.
pub fn chart_markup(chart: &ChartModel) -> serde_json::Result<String> {
    let config = chart_config_json(chart)?;
    let legend = legend_markup(chart).unwrap_or_default();
    Ok(format!(
        r#"<div class="chart-group">
  <canvas id="{id}" class="chart"></canvas>
  {legend}
  <script>insights.register("{id}", {config});</script>
</div>"#,
        id = chart.id,
    ))
}

/// Assemble the whole insights page for one render pass.
pub fn render_page(dashboard: &InsightsDashboard, theme: &Theme) -> serde_json::Result<String> {
    let gauges: String = dashboard
        .gauges
        .iter()
        .map(|gauge| gauge_svg(gauge, &theme.gauge))
        .collect::<Vec<_>>()
        .join("\n");
    let charts: String = dashboard
        .charts
        .iter()
        .map(chart_markup)
        .collect::<Result<Vec<_>, _>>()?
        .join("\n");

    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <title>Insights</title>
</head>
<body>
<section id="insights" data-period="{period}">
  <div class="active-users">
{gauges}
  </div>
{charts}
</section>
<script>{script}</script>
</body>
</html>"#,
        period = escape_html(&dashboard.period),
        script = page_script(),
    ))
}

/// Registers each chart with the charting library and wires legend clicks
/// to single-dataset visibility toggles.
fn page_script() -> &'static str {
    r#"
const insights = {
  charts: {},
  register(id, config) {
    const el = document.getElementById(id);
    if (!el) return;
    this.applyTickFormats(config);
    this.applyTooltipText(config);
    this.charts[id] = new Chart(el, config);
  },
  applyTooltipText(config) {
    const text = config.options.tooltipText;
    if (!text) return;
    delete config.options.tooltipText;
    config.options.tooltips.callbacks = {
      title: (items) => text.titles[items[0].index] || '',
      label: (item) => text.labels[item.datasetIndex][item.index] || '',
    };
    config.options.tooltips.itemSort = (a, b) =>
      text.priority[a.datasetIndex] - text.priority[b.datasetIndex] ||
      a.datasetIndex - b.datasetIndex;
  },
  applyTickFormats(config) {
    for (const axis of config.options.scales.yAxes) {
      if (axis.ticks.format === 'days') {
        axis.ticks.callback = (value) => value + ' days';
      } else if (axis.ticks.format === 'percent') {
        axis.ticks.callback = (value) => value + '%';
      }
    }
  },
};
document.addEventListener('click', (event) => {
  const label = event.target.closest('.legend .label');
  if (!label) return;
  const chart = insights.charts[label.dataset.chart];
  if (!chart) return;
  const dataset = chart.data.datasets[Number(label.dataset.dataset)];
  dataset.hidden = !dataset.hidden;
  label.classList.toggle('hidden', dataset.hidden);
  chart.update();
});
"#
}
