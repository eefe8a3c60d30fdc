pub mod config;
pub mod error;
pub mod support;
pub mod telemetry;
