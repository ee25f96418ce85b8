// Presentation layer - markup and chart configuration output
pub mod chart_config;
pub mod markup;
pub mod svg_gauge;
