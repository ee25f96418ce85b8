// Entry point - load snapshot and theme, render the insights page
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::application::insights_service::InsightsService;
use crate::infrastructure::config::load_theme;
use crate::infrastructure::snapshot::load_snapshot;
use crate::presentation::markup::render_page;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let mut args = std::env::args().skip(1);
    let snapshot_path = args
        .next()
        .context("usage: l10n-insights <snapshot.json> [period] [output.html]")?;
    let period = args.next().unwrap_or_else(|| "12-month".to_string());
    let output = args.next().map(PathBuf::from);

    let theme = load_theme()?;
    let snapshot = load_snapshot(Path::new(&snapshot_path))?;

    let service = InsightsService::new(theme);
    let dashboard = service.build_dashboard(&snapshot, &period);
    tracing::debug!(
        "rendering {} gauges and {} charts for period {}",
        dashboard.gauges.len(),
        dashboard.charts.len(),
        period
    );

    let page = render_page(&dashboard, service.theme())?;
    match output {
        Some(path) => std::fs::write(&path, page)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => println!("{page}"),
    }

    Ok(())
}
