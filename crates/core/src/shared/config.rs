use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::constants::{DEBOUNCE_MS, DEFAULT_ENDPOINT, MAX_TEXT_LENGTH, REQUEST_TIMEOUT_SECS};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// What to do with a translation that completes after a newer request
/// has already been issued.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StaleResponsePolicy {
    /// Whatever resolves last overwrites the target text.
    #[default]
    LastWriteWins,
    /// Only the newest issued request may write the target text.
    DiscardStale,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslatorConfig {
    pub endpoint: String,
    pub debounce_ms: u64,
    pub max_length: usize,
    pub request_timeout_secs: u64,
    pub stale_responses: StaleResponsePolicy,
    pub report_failures: bool,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            debounce_ms: DEBOUNCE_MS,
            max_length: MAX_TEXT_LENGTH,
            request_timeout_secs: REQUEST_TIMEOUT_SECS,
            stale_responses: StaleResponsePolicy::default(),
            report_failures: false,
        }
    }
}

/// Layout of the shared settings file. Translator keys live under
/// `translator`; the desktop's own keys sit beside it and are ignored here.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SettingsFile {
    translator: TranslatorConfig,
}

impl TranslatorConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Read the `translator` section of a settings file. Missing keys
    /// fall back to their defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        let file: SettingsFile = serde_json::from_str(&json).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(file.translator)
    }

    /// Load from the user config directory, or defaults if there is no
    /// usable file there.
    pub fn load() -> Self {
        let Some(path) = config_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Ignoring config: {e}");
                Self::default()
            }
        }
    }
}

/// `<config dir>/Translator/settings.json`. Shared with the desktop
/// settings, which nest this struct under the `translator` key.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("Translator").join("settings.json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = TranslatorConfig::default();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.debounce(), Duration::from_millis(650));
        assert_eq!(config.max_length, 500);
        assert_eq!(config.stale_responses, StaleResponsePolicy::LastWriteWins);
        assert!(!config.report_failures);
    }

    #[test]
    fn test_load_from_partial_file_fills_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("settings.json");
        fs::write(
            &path,
            r#"{ "translator": { "debounce_ms": 300, "stale_responses": "discard_stale" } }"#,
        )
        .unwrap();

        let config = TranslatorConfig::load_from(&path).unwrap();

        assert_eq!(config.debounce_ms, 300);
        assert_eq!(config.stale_responses, StaleResponsePolicy::DiscardStale);
        assert_eq!(config.max_length, 500);
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_load_from_reads_desktop_settings_layout() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("settings.json");
        fs::write(
            &path,
            r#"{
                "appearance": "dark",
                "font_scale": 1.2,
                "translator": { "endpoint": "http://localhost:9000/get", "debounce_ms": 200 }
            }"#,
        )
        .unwrap();

        let config = TranslatorConfig::load_from(&path).unwrap();

        assert_eq!(config.endpoint, "http://localhost:9000/get");
        assert_eq!(config.debounce_ms, 200);
        assert_eq!(config.request_timeout_secs, 15);
    }

    #[test]
    fn test_load_from_ignores_top_level_translator_keys() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("settings.json");
        fs::write(&path, r#"{ "debounce_ms": 300 }"#).unwrap();

        let config = TranslatorConfig::load_from(&path).unwrap();

        assert_eq!(config, TranslatorConfig::default());
    }

    #[test]
    fn test_load_from_missing_file_is_read_error() {
        let tmp = TempDir::new().unwrap();
        let result = TranslatorConfig::load_from(&tmp.path().join("nope.json"));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn test_load_from_invalid_json_is_parse_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("settings.json");
        fs::write(&path, "{ not json").unwrap();

        let result = TranslatorConfig::load_from(&path);

        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_config_path_is_under_translator_dir() {
        if let Some(path) = config_path() {
            assert!(path.ends_with("Translator/settings.json"));
        }
    }
}
