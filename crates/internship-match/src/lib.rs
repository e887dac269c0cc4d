pub mod config;
pub mod dataset;
pub mod error;
pub mod recommendation;
pub mod scoring;
pub mod telemetry;
