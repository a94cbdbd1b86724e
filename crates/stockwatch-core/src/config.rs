use crate::app_config::{AppConfig, DEFAULT_TARGET_URL, DEFAULT_USER_AGENT};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
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
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable is optional; the defaults reproduce the single hard-coded
/// product check the tool was written for.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let non_empty = |var: &str, default: &str| -> Result<String, ConfigError> {
        let raw = or_default(var, default);
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: "value must not be empty".to_string(),
            });
        }
        Ok(trimmed.to_string())
    };

    let target_url = non_empty("STOCKWATCH_TARGET_URL", DEFAULT_TARGET_URL)?;
    validate_url("STOCKWATCH_TARGET_URL", &target_url)?;

    let user_agent = non_empty("STOCKWATCH_USER_AGENT", DEFAULT_USER_AGENT)?;

    let raw_timeout = or_default("STOCKWATCH_REQUEST_TIMEOUT_SECS", "30");
    let request_timeout_secs = raw_timeout
        .trim()
        .parse::<u64>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            var: "STOCKWATCH_REQUEST_TIMEOUT_SECS".to_string(),
            reason: e.to_string(),
        })?;
    if request_timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "STOCKWATCH_REQUEST_TIMEOUT_SECS".to_string(),
            reason: "timeout must be at least 1 second".to_string(),
        });
    }

    let log_level = or_default("STOCKWATCH_LOG_LEVEL", "info");

    Ok(AppConfig {
        target_url,
        user_agent,
        request_timeout_secs,
        log_level,
    })
}

/// Rejects URLs that `reqwest` would refuse to fetch over HTTP.
fn validate_url(var: &str, url: &str) -> Result<(), ConfigError> {
    let lower = url.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        Ok(())
    } else {
        Err(ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: format!("\"{url}\" must start with http:// or https://"),
        })
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
