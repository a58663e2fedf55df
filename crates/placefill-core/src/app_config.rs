use std::path::PathBuf;
use std::str::FromStr;

use crate::ConfigError;

pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_LOG_FILE: &str = "placefill.log";

/// Which Google Places response shape the client speaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiShape {
    /// `maps.googleapis.com/maps/api/place/*` with snake_case fields and a
    /// `"status"` envelope.
    Legacy,
    /// `places.googleapis.com/v1` with camelCase fields and field masks.
    Current,
}

impl std::fmt::Display for ApiShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiShape::Legacy => write!(f, "legacy"),
            ApiShape::Current => write!(f, "current"),
        }
    }
}

impl FromStr for ApiShape {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "legacy" => Ok(ApiShape::Legacy),
            "current" | "new" | "v1" => Ok(ApiShape::Current),
            other => Err(ConfigError::InvalidEnvVar {
                var: "PLACEFILL_PLACES_API".to_string(),
                reason: format!("unknown places API shape '{other}' (expected 'legacy' or 'current')"),
            }),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub places_api_key: String,
    pub places_api_shape: ApiShape,
    /// Overrides the shape's default API host (used for staging proxies and tests).
    pub places_base_url: Option<String>,
    pub fetch_details: bool,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub log_level: String,
    pub log_file: PathBuf,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("places_api_key", &"[redacted]")
            .field("places_api_shape", &self.places_api_shape)
            .field("places_base_url", &self.places_base_url)
            .field("fetch_details", &self.fetch_details)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("log_level", &self.log_level)
            .field("log_file", &self.log_file)
            .finish()
    }
}
