// Snapshot document - the pre-aggregated input produced by the server
//
// The aggregation service serializes all metrics into a single JSON
// document; this module parses it once per render pass. Every section and
// series is optional: a missing key means "no data for this metric" and is
// not an error.
use crate::domain::metrics::MetricSeries;
use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to read snapshot file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse snapshot document: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct InsightsSnapshot {
    /// Period labels shared by every time-series chart.
    #[serde(default)]
    pub dates: Vec<NaiveDate>,
    #[serde(default)]
    pub active_users: Vec<ActiveUsersGauge>,
    #[serde(default)]
    pub unreviewed_lifespan: MetricSeries,
    #[serde(default)]
    pub time_to_review_suggestions: TimeToReview,
    #[serde(default)]
    pub time_to_review_pretranslations: TimeToReview,
    #[serde(default)]
    pub translation_activity: TranslationActivity,
    #[serde(default)]
    pub review_activity: ReviewActivity,
    #[serde(default)]
    pub pretranslation_quality: PretranslationQuality,
}

/// One gauge element with its active/total pair per period name.
#[derive(Debug, Clone, Deserialize)]
pub struct ActiveUsersGauge {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub counts: HashMap<String, GaugeCounts>,
}

/// Raw counts as serialized by the server; validated into a GaugeValue at
/// render time.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct GaugeCounts {
    pub active: u64,
    pub total: u64,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct TimeToReview {
    #[serde(default)]
    pub current_month: MetricSeries,
    #[serde(default)]
    pub twelve_month_average: MetricSeries,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct TranslationActivity {
    #[serde(default)]
    pub completion: MetricSeries,
    #[serde(default)]
    pub human_translations: MetricSeries,
    #[serde(default)]
    pub machinery_translations: MetricSeries,
    #[serde(default)]
    pub new_source_strings: MetricSeries,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct ReviewActivity {
    #[serde(default)]
    pub unreviewed: MetricSeries,
    #[serde(default)]
    pub peer_approved: MetricSeries,
    #[serde(default)]
    pub self_approved: MetricSeries,
    #[serde(default)]
    pub rejected: MetricSeries,
    #[serde(default)]
    pub new_suggestions: MetricSeries,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct PretranslationQuality {
    #[serde(default)]
    pub approval_rate: MetricSeries,
    /// chrf++ scores, treated as an opaque numeric series.
    #[serde(default)]
    pub chrf_score: MetricSeries,
    #[serde(default)]
    pub approved: MetricSeries,
    #[serde(default)]
    pub rejected: MetricSeries,
    #[serde(default, rename = "new")]
    pub new_pretranslations: MetricSeries,
}

pub fn load_snapshot(path: &Path) -> Result<InsightsSnapshot, SnapshotError> {
    let raw = std::fs::read_to_string(path)?;
    Ok(parse_snapshot(&raw)?)
}

pub fn parse_snapshot(raw: &str) -> Result<InsightsSnapshot, serde_json::Error> {
    serde_json::from_str(raw)
}
