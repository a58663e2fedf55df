use crate::app_config::{ApiShape, AppConfig, DEFAULT_LOG_FILE, DEFAULT_LOG_LEVEL};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can use a plain `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    // An empty value is as good as no value for a credential.
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.trim()
            .parse::<u64>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_bool = |var: &str, default: bool| -> Result<bool, ConfigError> {
        let Ok(raw) = lookup(var) else {
            return Ok(default);
        };
        match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            other => Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: format!("expected a boolean, got '{other}'"),
            }),
        }
    };

    let places_api_key = require("GOOGLE_MAPS_API_KEY")?;
    let places_api_shape = or_default("PLACEFILL_PLACES_API", "legacy").parse::<ApiShape>()?;
    let places_base_url = lookup("PLACEFILL_PLACES_BASE_URL")
        .ok()
        .filter(|v| !v.trim().is_empty());
    let fetch_details = parse_bool("PLACEFILL_FETCH_DETAILS", true)?;
    let request_timeout_secs = parse_u64("PLACEFILL_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("PLACEFILL_USER_AGENT", "placefill/0.1 (business-enrichment)");
    let log_level = or_default("PLACEFILL_LOG_LEVEL", DEFAULT_LOG_LEVEL);
    let log_file = PathBuf::from(or_default("PLACEFILL_LOG_FILE", DEFAULT_LOG_FILE));

    Ok(AppConfig {
        places_api_key,
        places_api_shape,
        places_base_url,
        fetch_details,
        request_timeout_secs,
        user_agent,
        log_level,
        log_file,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
