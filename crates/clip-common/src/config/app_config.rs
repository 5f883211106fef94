//! Application configuration structs
//!
//! Loaded from environment variables (with `.env` support via dotenvy).

use serde::Deserialize;
use std::env;
use std::time::Duration;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub database: DatabaseConfig,
    pub tracking: TrackingConfig,
    pub retention: RetentionConfig,
    pub surface: SurfaceConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

/// Accrual engine configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TrackingConfig {
    /// Minutes between accrual ticks
    #[serde(default = "default_tracking_interval")]
    pub interval_minutes: u64,
    /// Per-call timeout for the view-count provider
    #[serde(default = "default_view_fetch_timeout")]
    pub view_fetch_timeout_secs: u64,
}

impl TrackingConfig {
    #[must_use]
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_minutes * 60)
    }

    #[must_use]
    pub fn view_fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.view_fetch_timeout_secs)
    }
}

/// Retention sweeper configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RetentionConfig {
    /// Hours between sweeps
    #[serde(default = "default_cleanup_interval")]
    pub cleanup_interval_hours: u64,
    #[serde(default = "default_log_retention")]
    pub activity_log_days: i64,
    #[serde(default = "default_view_history_retention")]
    pub view_history_days: i64,
}

impl RetentionConfig {
    #[must_use]
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.cleanup_interval_hours * 3600)
    }
}

/// Chat-surface configuration: authorization role names and channels are
/// supplied externally; the core only carries them through.
#[derive(Debug, Clone, Deserialize)]
pub struct SurfaceConfig {
    #[serde(default = "default_staff_role")]
    pub staff_role: String,
    #[serde(default = "default_admin_role")]
    pub admin_role: String,
    #[serde(default)]
    pub log_channel_id: u64,
    #[serde(default)]
    pub submission_channel_id: u64,
}

// Default value functions
fn default_app_name() -> String {
    "clipcast".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_max_connections() -> u32 {
    20
}

fn default_min_connections() -> u32 {
    5
}

fn default_tracking_interval() -> u64 {
    30
}

fn default_view_fetch_timeout() -> u64 {
    15
}

fn default_cleanup_interval() -> u64 {
    24
}

fn default_log_retention() -> i64 {
    90
}

fn default_view_history_retention() -> i64 {
    60
}

fn default_staff_role() -> String {
    "Staff".to_string()
}

fn default_admin_role() -> String {
    "Admin".to_string()
}

fn env_parse<T: std::str::FromStr>(var: &str) -> Option<T> {
    env::var(var).ok().and_then(|s| s.parse().ok())
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Ok(Self {
            app: AppSettings {
                name: env::var("APP_NAME").unwrap_or_else(|_| default_app_name()),
                env: env::var("APP_ENV")
                    .ok()
                    .and_then(|s| match s.to_lowercase().as_str() {
                        "production" => Some(Environment::Production),
                        "staging" => Some(Environment::Staging),
                        "development" => Some(Environment::Development),
                        _ => None,
                    })
                    .unwrap_or_default(),
            },
            database: DatabaseConfig {
                url: env::var("DATABASE_URL")
                    .map_err(|_| ConfigError::MissingVar("DATABASE_URL"))?,
                max_connections: env_parse("DATABASE_MAX_CONNECTIONS")
                    .unwrap_or_else(default_max_connections),
                min_connections: env_parse("DATABASE_MIN_CONNECTIONS")
                    .unwrap_or_else(default_min_connections),
            },
            tracking: TrackingConfig {
                interval_minutes: env_parse("TRACKING_INTERVAL_MINUTES")
                    .unwrap_or_else(default_tracking_interval),
                view_fetch_timeout_secs: env_parse("VIEW_FETCH_TIMEOUT_SECS")
                    .unwrap_or_else(default_view_fetch_timeout),
            },
            retention: RetentionConfig {
                cleanup_interval_hours: env_parse("CLEANUP_INTERVAL_HOURS")
                    .unwrap_or_else(default_cleanup_interval),
                activity_log_days: env_parse("LOG_RETENTION_DAYS")
                    .unwrap_or_else(default_log_retention),
                view_history_days: env_parse("VIEW_HISTORY_RETENTION_DAYS")
                    .unwrap_or_else(default_view_history_retention),
            },
            surface: SurfaceConfig {
                staff_role: env::var("STAFF_ROLE").unwrap_or_else(|_| default_staff_role()),
                admin_role: env::var("ADMIN_ROLE").unwrap_or_else(|_| default_admin_role()),
                log_channel_id: env_parse("LOG_CHANNEL_ID").unwrap_or(0),
                submission_channel_id: env_parse("SUBMISSION_CHANNEL_ID").unwrap_or(0),
            },
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_is_production() {
        assert!(!Environment::Development.is_production());
        assert!(!Environment::Staging.is_production());
        assert!(Environment::Production.is_production());
    }

    #[test]
    fn test_default_values() {
        assert_eq!(default_app_name(), "clipcast");
        assert_eq!(default_tracking_interval(), 30);
        assert_eq!(default_cleanup_interval(), 24);
        assert_eq!(default_log_retention(), 90);
        assert_eq!(default_view_history_retention(), 60);
    }

    #[test]
    fn test_tracking_intervals_as_durations() {
        let config = TrackingConfig {
            interval_minutes: 30,
            view_fetch_timeout_secs: 15,
        };
        assert_eq!(config.interval(), Duration::from_secs(1800));
        assert_eq!(config.view_fetch_timeout(), Duration::from_secs(15));
    }
}
