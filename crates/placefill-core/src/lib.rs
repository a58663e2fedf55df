//! Shared configuration and record types for placefill.

mod app_config;
mod config;
mod records;

pub use app_config::{ApiShape, AppConfig, DEFAULT_LOG_FILE, DEFAULT_LOG_LEVEL};
pub use config::{load_app_config, load_app_config_from_env};
pub use records::{EnrichedFields, EnrichedRecord, InputRecord, WeekendStatus};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
