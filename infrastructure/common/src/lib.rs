//! Configuration and telemetry shared by the server binaries.

pub mod config;
pub mod telemetry;
