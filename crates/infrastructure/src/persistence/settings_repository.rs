//! Client settings persistence.
//!
//! Settings live in the platform-specific config directory:
//! - Linux: ~/.config/holocron/settings.json
//! - macOS: ~/Library/Application Support/holocron/settings.json
//! - Windows: %APPDATA%/holocron/settings.json
//!
//! Environment variables override individual fields after the file is read.

use std::collections::HashMap;
use std::path::PathBuf;

use holocron_domain::{ClientSettings, DomainError};
use tokio::fs;
use tracing::{debug, info};

use crate::serialization::{SerializationError, from_json_bytes};

/// Overrides `base_url`.
pub const ENV_BASE_URL: &str = "HOLOCRON_BASE_URL";
/// Overrides `page_size`.
pub const ENV_PAGE_SIZE: &str = "HOLOCRON_PAGE_SIZE";
/// Overrides `request_timeout_ms`.
pub const ENV_TIMEOUT_MS: &str = "HOLOCRON_TIMEOUT_MS";
/// Overrides `search_debounce_ms`.
pub const ENV_DEBOUNCE_MS: &str = "HOLOCRON_DEBOUNCE_MS";

/// Error type for settings operations.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// IO error during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The settings file is not valid JSON for `ClientSettings`.
    #[error("Serialization error: {0}")]
    Serialization(#[from] SerializationError),

    /// An environment override could not be parsed.
    #[error("invalid value for {key}: {value}")]
    InvalidOverride {
        /// Environment variable name.
        key: &'static str,
        /// Offending value.
        value: String,
    },

    /// The resulting settings are invalid.
    #[error("invalid settings: {0}")]
    Invalid(#[from] DomainError),
}

/// Repository for client settings.
#[derive(Debug, Clone)]
pub struct SettingsRepository {
    path: Option<PathBuf>,
}

impl Default for SettingsRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsRepository {
    /// Creates a repository for the platform settings file.
    #[must_use]
    pub fn new() -> Self {
        Self {
            path: Self::default_path(),
        }
    }

    /// Creates a repository for an explicit settings file.
    #[must_use]
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// Returns the default settings file path, if a config directory exists.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("holocron").join("settings.json"))
    }

    /// Loads settings from disk.
    ///
    /// Returns default settings if the file doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub async fn load(&self) -> Result<ClientSettings, SettingsError> {
        let Some(path) = &self.path else {
            return Ok(ClientSettings::default());
        };

        if !fs::try_exists(path).await? {
            debug!(path = %path.display(), "no settings file, using defaults");
            return Ok(ClientSettings::default());
        }

        let content = fs::read(path).await?;
        let settings = from_json_bytes(&content)?;
        info!(path = %path.display(), "settings loaded");
        Ok(settings)
    }

    /// Loads settings, applies overrides from the process environment and
    /// validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if loading fails, an override is malformed, or the
    /// final settings are invalid.
    pub async fn load_effective(&self) -> Result<ClientSettings, SettingsError> {
        let env: HashMap<String, String> = std::env::vars().collect();
        let settings = apply_overrides(self.load().await?, &env)?;
        settings.validate()?;
        Ok(settings)
    }
}

/// Applies environment overrides to `settings`.
///
/// # Errors
///
/// Returns `SettingsError::InvalidOverride` if a numeric override does not
/// parse.
pub fn apply_overrides(
    mut settings: ClientSettings,
    env: &HashMap<String, String>,
) -> Result<ClientSettings, SettingsError> {
    if let Some(base_url) = env.get(ENV_BASE_URL) {
        settings.base_url.clone_from(base_url);
    }
    if let Some(value) = env.get(ENV_PAGE_SIZE) {
        settings.page_size = parse_override(ENV_PAGE_SIZE, value)?;
    }
    if let Some(value) = env.get(ENV_TIMEOUT_MS) {
        settings.request_timeout_ms = parse_override(ENV_TIMEOUT_MS, value)?;
    }
    if let Some(value) = env.get(ENV_DEBOUNCE_MS) {
        settings.search_debounce_ms = parse_override(ENV_DEBOUNCE_MS, value)?;
    }
    Ok(settings)
}

fn parse_override<T: std::str::FromStr>(key: &'static str, value: &str) -> Result<T, SettingsError> {
    value
        .trim()
        .parse()
        .map_err(|_| SettingsError::InvalidOverride {
            key,
            value: value.to_string(),
        })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn default_path_is_valid() {
        if let Some(p) = SettingsRepository::default_path() {
            assert!(p.ends_with("holocron/settings.json"));
        }
    }

    #[tokio::test]
    async fn load_returns_default_when_no_file() {
        let dir = tempdir().expect("Failed to create temp directory");
        let repo = SettingsRepository::at(dir.path().join("settings.json"));
        assert_eq!(repo.load().await.unwrap(), ClientSettings::default());
    }

    #[tokio::test]
    async fn load_fills_missing_fields_with_defaults() {
        let dir = tempdir().expect("Failed to create temp directory");
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{ "page_size": 10, "search_debounce_ms": 0 }"#).unwrap();

        let expected = ClientSettings {
            page_size: 10,
            search_debounce_ms: 0,
            ..ClientSettings::default()
        };
        assert_eq!(SettingsRepository::at(path).load().await.unwrap(), expected);
    }

    #[tokio::test]
    async fn load_rejects_corrupt_file() {
        let dir = tempdir().expect("Failed to create temp directory");
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{ not json").unwrap();

        let result = SettingsRepository::at(path).load().await;
        assert!(matches!(result, Err(SettingsError::Serialization(_))));
    }

    #[test]
    fn overrides_win_over_file_values() {
        let from_file = ClientSettings {
            page_size: 10,
            ..ClientSettings::default()
        };
        let settings = apply_overrides(
            from_file,
            &env(&[
                (ENV_BASE_URL, "http://localhost:8080/api"),
                (ENV_PAGE_SIZE, "25"),
                (ENV_DEBOUNCE_MS, " 0 "),
            ]),
        )
        .unwrap();

        assert_eq!(settings.base_url, "http://localhost:8080/api");
        assert_eq!(settings.page_size, 25);
        assert_eq!(settings.search_debounce_ms, 0);
        assert_eq!(settings.request_timeout_ms, 10_000);
    }

    #[test]
    fn malformed_override_rejected() {
        let result = apply_overrides(
            ClientSettings::default(),
            &env(&[(ENV_TIMEOUT_MS, "soon")]),
        );
        assert!(matches!(
            result,
            Err(SettingsError::InvalidOverride {
                key: ENV_TIMEOUT_MS,
                ..
            })
        ));
    }
}
