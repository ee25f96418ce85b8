// Application layer - rendering use cases
pub mod charts;
pub mod format;
pub mod gauge;
pub mod insights_service;
pub mod legend;
pub mod tooltip;
