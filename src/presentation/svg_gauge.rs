// SVG rendering for the active-users gauges
use crate::application::gauge::{FULL_CIRCLE, gauge_arcs};
use crate::domain::metrics::GaugeView;
use crate::infrastructure::config::GaugeTheme;
use crate::presentation::markup::escape_html;
use std::f64::consts::PI;

/// Draw one gauge as standalone SVG plus its active/total readout. Pure
/// function of its inputs, so repeated render passes are idempotent.
pub fn gauge_svg(view: &GaugeView, theme: &GaugeTheme) -> String {
    let size = theme.size as f64;
    let stroke = theme.stroke_width * theme.device_pixel_ratio;
    let center = size / 2.0;
    let radius = (size - stroke) / 2.0;
    let arcs = gauge_arcs(view.value);

    let mut segments = String::new();
    if let Some(arc) = segment(
        center,
        radius,
        arcs.active_start,
        arcs.active_sweep,
        &theme.active_color,
        stroke,
    ) {
        segments.push_str(&arc);
    }
    if let Some(arc) = segment(
        center,
        radius,
        arcs.active_end(),
        arcs.inactive_sweep,
        &theme.inactive_color,
        stroke,
    ) {
        segments.push_str(&arc);
    }

    format!(
        r#"<figure class="active-users-chart" id="{id}">
  <svg viewBox="0 0 {size} {size}" width="{size}" height="{size}">{segments}</svg>
  <figcaption><span class="active">{active}</span> / <span class="total">{total}</span> {label}</figcaption>
</figure>"#,
        id = escape_html(&view.id),
        active = view.value.active,
        total = view.value.total,
        label = escape_html(&view.label),
    )
}

/// One stroked segment. Angles are in half-turns; a sweep covering the
/// whole circle cannot be expressed as a single SVG arc, so it becomes a
/// circle element.
fn segment(
    center: f64,
    radius: f64,
    start: f64,
    sweep: f64,
    color: &str,
    stroke: f64,
) -> Option<String> {
    if sweep <= 0.0 {
        return None;
    }
    if sweep >= FULL_CIRCLE {
        return Some(format!(
            r#"<circle cx="{center:.2}" cy="{center:.2}" r="{radius:.2}" fill="none" stroke="{color}" stroke-width="{stroke}"/>"#
        ));
    }
    let (x0, y0) = point(center, radius, start);
    let (x1, y1) = point(center, radius, start + sweep);
    let large_arc = if sweep > 1.0 { 1 } else { 0 };
    Some(format!(
        r#"<path d="M {x0:.2} {y0:.2} A {radius:.2} {radius:.2} 0 {large_arc} 1 {x1:.2} {y1:.2}" fill="none" stroke="{color}" stroke-width="{stroke}"/>"#
    ))
}

fn point(center: f64, radius: f64, half_turns: f64) -> (f64, f64) {
    let angle = half_turns * PI;
    (center + radius * angle.cos(), center + radius * angle.sin())
}
