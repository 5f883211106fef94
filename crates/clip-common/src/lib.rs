//! # clip-common
//!
//! Shared utilities: environment-driven configuration and tracing setup.

pub mod config;
pub mod telemetry;

pub use config::{AppConfig, ConfigError, Environment};
pub use telemetry::{try_init_tracing, try_init_tracing_with_config, TracingConfig};
