//! Runtime configuration
//!
//! Values come from the process environment on native targets and from
//! build-time variables (`option_env!`) in the browser build, where no
//! environment exists at runtime.

use std::time::Duration;

use crate::shared::errors::AppError;

/// Backend used when `JAPM_API_URL` is not set
pub const DEFAULT_API_URL: &str = "http://localhost:3001";

/// Interval between two health probes while the backend is healthy
pub const DEFAULT_HEALTH_INTERVAL: Duration = Duration::from_secs(10);

/// Identical notifications inside this window are shown once
pub const DEFAULT_DEDUP_WINDOW: Duration = Duration::from_secs(3);

pub const ENV_API_URL: &str = "JAPM_API_URL";
pub const ENV_CUSTOM_KEY: &str = "JAPM_CUSTOM_KEY";
pub const ENV_ENVIRONMENT: &str = "JAPM_ENV";
pub const ENV_HEALTH_INTERVAL: &str = "JAPM_HEALTH_INTERVAL_SECS";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Backend base URL, without trailing slash
    pub api_base_url: String,
    /// Build-time custom key, sent as `X-Custom-Key` on backend calls
    pub custom_key: Option<String>,
    /// Deployment label reported by `/api/health`
    pub environment: String,
    pub health_interval: Duration,
    pub notification_dedup_window: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            custom_key: None,
            environment: "development".to_string(),
            health_interval: DEFAULT_HEALTH_INTERVAL,
            notification_dedup_window: DEFAULT_DEDUP_WINDOW,
        }
    }
}

impl AppConfig {
    /// Load configuration, falling back to defaults for missing values.
    ///
    /// Malformed values are logged and replaced by their default so that the
    /// console always boots.
    pub fn load() -> Self {
        Self::from_lookup(lookup_var).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Invalid configuration, using defaults");
            Self::default()
        })
    }

    /// Build a configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let api_base_url = lookup(ENV_API_URL)
            .filter(|v| !v.trim().is_empty())
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .unwrap_or(defaults.api_base_url);

        if !api_base_url.starts_with("http://") && !api_base_url.starts_with("https://") {
            return Err(AppError::Config(format!(
                "{} must be an http(s) URL, got '{}'",
                ENV_API_URL, api_base_url
            )));
        }

        let health_interval = match lookup(ENV_HEALTH_INTERVAL) {
            Some(raw) => {
                let secs: u64 = raw.trim().parse().map_err(|_| {
                    AppError::Config(format!("{} must be a number of seconds, got '{}'", ENV_HEALTH_INTERVAL, raw))
                })?;
                if secs == 0 {
                    return Err(AppError::Config(format!("{} must be greater than zero", ENV_HEALTH_INTERVAL)));
                }
                Duration::from_secs(secs)
            }
            None => defaults.health_interval,
        };

        Ok(Self {
            api_base_url,
            custom_key: lookup(ENV_CUSTOM_KEY).filter(|v| !v.is_empty()),
            environment: lookup(ENV_ENVIRONMENT)
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.environment),
            health_interval,
            notification_dedup_window: defaults.notification_dedup_window,
        })
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn lookup_var(name: &str) -> Option<String> {
    std::env::var(name).ok().or_else(|| build_time_var(name))
}

#[cfg(target_arch = "wasm32")]
fn lookup_var(name: &str) -> Option<String> {
    build_time_var(name)
}

fn build_time_var(name: &str) -> Option<String> {
    let value = match name {
        ENV_API_URL => option_env!("JAPM_API_URL"),
        ENV_CUSTOM_KEY => option_env!("JAPM_CUSTOM_KEY"),
        ENV_ENVIRONMENT => option_env!("JAPM_ENV"),
        ENV_HEALTH_INTERVAL => option_env!("JAPM_HEALTH_INTERVAL_SECS"),
        _ => None,
    };
    value.map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_missing_base_url_falls_back_to_local_default() {
        let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.api_base_url, DEFAULT_API_URL);
        assert_eq!(config.health_interval, Duration::from_secs(10));
        assert_eq!(config.custom_key, None);
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let config = AppConfig::from_lookup(lookup_from(&[
            (ENV_API_URL, "https://api.japm.app/"),
            (ENV_CUSTOM_KEY, "abc"),
            (ENV_ENVIRONMENT, "production"),
        ]))
        .unwrap();
        assert_eq!(config.api_base_url, "https://api.japm.app");
        assert_eq!(config.custom_key.as_deref(), Some("abc"));
        assert_eq!(config.environment, "production");
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(AppConfig::from_lookup(lookup_from(&[(ENV_API_URL, "ftp://x")])).is_err());
        assert!(AppConfig::from_lookup(lookup_from(&[(ENV_HEALTH_INTERVAL, "soon")])).is_err());
        assert!(AppConfig::from_lookup(lookup_from(&[(ENV_HEALTH_INTERVAL, "0")])).is_err());
    }
}
