// Theme configuration - palette and gauge geometry
//
// Loaded from config/theme.toml when present; every field has a default
// matching the console's dark theme, so the file only needs to override
// what it changes.
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Theme {
    pub gauge: GaugeTheme,
    pub palette: Palette,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct GaugeTheme {
    pub active_color: String,
    pub inactive_color: String,
    /// Rendered size of the gauge square, in CSS pixels.
    pub size: u32,
    pub stroke_width: f64,
    /// Stroke width scales with this so arcs stay crisp on high-DPI
    /// displays.
    pub device_pixel_ratio: f64,
}

impl Default for GaugeTheme {
    fn default() -> Self {
        Self {
            active_color: "#7BC876".to_string(),
            inactive_color: "#5F7285".to_string(),
            size: 60,
            stroke_width: 3.0,
            device_pixel_ratio: 1.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct Palette {
    pub lifespan: String,
    pub lifespan_fill: String,
    pub review_time_current: String,
    pub review_time_average: String,
    pub review_time_fill: String,
    pub pretranslation_time_current: String,
    pub pretranslation_time_average: String,
    pub pretranslation_time_fill: String,
    pub completion: String,
    pub completion_fill: String,
    pub human_translations: String,
    pub machinery_translations: String,
    pub new_source_strings: String,
    pub unreviewed: String,
    pub unreviewed_fill: String,
    pub peer_approved: String,
    pub self_approved: String,
    pub rejected: String,
    pub new_suggestions: String,
    pub approval_rate: String,
    pub approval_rate_fill: String,
    pub chrf_score: String,
    pub chrf_score_fill: String,
    pub pretranslation_approved: String,
    pub pretranslation_rejected: String,
    pub new_pretranslations: String,
    pub quality_accent: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            lifespan: "#4fc4f6".to_string(),
            lifespan_fill: "#4fc4f666".to_string(),
            review_time_current: "#3e7089".to_string(),
            review_time_average: "#4fc4f6".to_string(),
            review_time_fill: "#4fc4f666".to_string(),
            pretranslation_time_current: "#ff5f9e".to_string(),
            pretranslation_time_average: "#b3005e".to_string(),
            pretranslation_time_fill: "#b3005e66".to_string(),
            completion: "#7BC876".to_string(),
            completion_fill: "#7BC87633".to_string(),
            human_translations: "#4f7256".to_string(),
            machinery_translations: "#41554c".to_string(),
            new_source_strings: "#272a2f".to_string(),
            unreviewed: "#4fc4f6".to_string(),
            unreviewed_fill: "#4fc4f688".to_string(),
            peer_approved: "#3e7089".to_string(),
            self_approved: "#385465".to_string(),
            rejected: "#843650".to_string(),
            new_suggestions: "#272a2f".to_string(),
            approval_rate: "#c6c1f0".to_string(),
            approval_rate_fill: "#FFACFC33".to_string(),
            chrf_score: "#8074a8".to_string(),
            chrf_score_fill: "#F148FB33".to_string(),
            pretranslation_approved: "#c46487".to_string(),
            pretranslation_rejected: "#ffbed1".to_string(),
            new_pretranslations: "#272a2f".to_string(),
            quality_accent: "#FFACFC".to_string(),
        }
    }
}

pub fn load_theme() -> anyhow::Result<Theme> {
    if !Path::new("config/theme.toml").exists() {
        return Ok(Theme::default());
    }
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/theme"))
        .build()?;

    Ok(settings.try_deserialize()?)
}
