use std::{collections::HashMap, fs, path::Path};

use serde::Deserialize;
use thiserror::Error;
use url::Url;

pub const DEFAULT_ENDPOINT: &str =
    "https://madf3svxcjbwndceiow7rzi7vm0kswra.lambda-url.us-east-1.on.aws/";
pub const DEFAULT_LOG_FILTER: &str = "info";
pub const SETTINGS_FILE: &str = "waitlist.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    pub endpoint: String,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.into(),
            log_filter: DEFAULT_LOG_FILTER.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("invalid endpoint url '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },
}

pub fn load_settings() -> Result<Settings, SettingsError> {
    load_settings_from(Path::new(SETTINGS_FILE), |key| std::env::var(key).ok())
}

/// Defaults, then the settings file, then environment overrides.
pub fn load_settings_from(
    path: &Path,
    env: impl Fn(&str) -> Option<String>,
) -> Result<Settings, SettingsError> {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string(path) {
        if let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(&raw) {
            if let Some(v) = file_cfg.get("endpoint") {
                settings.endpoint = v.clone();
            }
            if let Some(v) = file_cfg.get("log_filter") {
                settings.log_filter = v.clone();
            }
        }
    }

    if let Some(v) = env("WAITLIST_ENDPOINT") {
        settings.endpoint = v;
    }
    if let Some(v) = env("APP__ENDPOINT") {
        settings.endpoint = v;
    }
    if let Some(v) = env("APP__LOG_FILTER") {
        settings.log_filter = v;
    }

    settings.endpoint = normalize_endpoint(&settings.endpoint)?;
    Ok(settings)
}

pub fn normalize_endpoint(raw_endpoint: &str) -> Result<String, SettingsError> {
    let raw_endpoint = raw_endpoint.trim();
    if raw_endpoint.is_empty() {
        return Ok(DEFAULT_ENDPOINT.to_string());
    }

    let invalid = |reason: String| SettingsError::InvalidEndpoint {
        endpoint: raw_endpoint.to_string(),
        reason,
    };

    let url = Url::parse(raw_endpoint).map_err(|err| invalid(err.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
    }
    if url.host_str().is_none() {
        return Err(invalid("missing host".into()));
    }

    Ok(url.to_string())
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
