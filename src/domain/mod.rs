// Domain layer - pure presentational data
pub mod chart;
pub mod dashboard;
pub mod metrics;
