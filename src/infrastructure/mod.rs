// Infrastructure layer - configuration and input parsing
pub mod config;
pub mod snapshot;
