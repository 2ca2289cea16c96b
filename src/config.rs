//! Configuration file parser for ~/.config/runway/config.toml.
//!
//! The config file is optional — a missing file yields `Config::default()`.
//! The API key can come from the `NYT_API_KEY` env var (which takes
//! precedence) or from the config file; without either the app runs in demo
//! mode against the built-in dataset.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use crate::source::DEFAULT_BASE_URL;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid TOML in config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Config file too large: {0}")]
    TooLarge(String),
}

/// Top-level application configuration.
///
/// All fields use `#[serde(default)]` so any subset of keys can be specified.
/// The Debug impl masks `api_key` so the secret never reaches logs.
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Theme variant name ("light" or "dark"). A stored theme preference
    /// overrides this default.
    pub theme: String,

    /// Category shown at startup.
    pub default_category: String,

    /// Base URL of the Top Stories endpoint. Overridable for testing.
    pub api_base_url: String,

    /// NYT API key (alternative to the NYT_API_KEY env var; env wins).
    pub api_key: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            default_category: "all".to_string(),
            api_base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
        }
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("theme", &self.theme)
            .field("default_category", &self.default_category)
            .field("api_base_url", &self.api_base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl Config {
    /// Maximum config file size (1 MB).
    const MAX_FILE_SIZE: u64 = 1_048_576;

    /// Load configuration from a TOML file.
    ///
    /// - Missing or empty file → `Ok(Config::default())`
    /// - Invalid TOML → `Err(ConfigError::Parse)`
    /// - Unknown keys → accepted, logged as a warning
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::metadata(path) {
            Ok(meta) if meta.len() > Self::MAX_FILE_SIZE => {
                return Err(ConfigError::TooLarge(format!(
                    "Config file is {} bytes (max {} bytes)",
                    meta.len(),
                    Self::MAX_FILE_SIZE
                )));
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No config file found, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(ConfigError::Io(e)),
            Ok(_) => {}
        }

        let content = std::fs::read_to_string(path)?;
        if content.trim().is_empty() {
            tracing::debug!(path = %path.display(), "Config file is empty, using defaults");
            return Ok(Self::default());
        }

        if let Ok(raw) = content.parse::<toml::Table>() {
            let known_keys = ["theme", "default_category", "api_base_url", "api_key"];
            for key in raw.keys() {
                if !known_keys.contains(&key.as_str()) {
                    tracing::warn!(key = %key, "Unknown key in config file, ignoring");
                }
            }
        }

        let config: Config = toml::from_str(&content)?;
        tracing::info!(path = %path.display(), theme = %config.theme, "Loaded configuration");
        Ok(config)
    }

    /// Resolve the API key: env var first, then config file.
    pub fn resolve_api_key(&self) -> Option<String> {
        std::env::var("NYT_API_KEY")
            .ok()
            .filter(|k| !k.is_empty())
            .or_else(|| self.api_key.clone().filter(|k| !k.is_empty()))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(config.theme, "dark");
        assert_eq!(config.default_category, "all");
        assert_eq!(config.api_base_url, DEFAULT_BASE_URL);
        assert!(config.api_key.is_none());
    }

    #[test]
    fn missing_file_returns_default() {
        let path = Path::new("/tmp/runway_test_nonexistent_config.toml");
        let config = Config::load(path).unwrap();
        assert_eq!(config.theme, "dark");
    }

    #[test]
    fn partial_config_uses_defaults_for_missing() {
        let dir = std::env::temp_dir().join("runway_config_test_partial");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        std::fs::write(&path, "theme = \"light\"\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.theme, "light");
        assert_eq!(config.default_category, "all");

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn full_config_parses() {
        let dir = std::env::temp_dir().join("runway_config_test_full");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        std::fs::write(
            &path,
            r#"
theme = "light"
default_category = "fashion"
api_base_url = "http://127.0.0.1:8080/svc"
api_key = "test-key-123"
"#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.theme, "light");
        assert_eq!(config.default_category, "fashion");
        assert_eq!(config.api_base_url, "http://127.0.0.1:8080/svc");
        assert_eq!(config.api_key.as_deref(), Some("test-key-123"));

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn invalid_toml_returns_error() {
        let dir = std::env::temp_dir().join("runway_config_test_invalid");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        std::fs::write(&path, "this is not [valid toml").unwrap();

        let result = Config::load(&path);
        assert!(matches!(result, Err(ConfigError::Parse(_))));

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn unknown_keys_accepted() {
        let dir = std::env::temp_dir().join("runway_config_test_unknown");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        std::fs::write(&path, "theme = \"dark\"\ntotally_fake_key = 1\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.theme, "dark");

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn too_large_file_rejected() {
        let dir = std::env::temp_dir().join("runway_config_test_too_large");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        std::fs::write(&path, "a".repeat(1_048_577)).unwrap();

        let result = Config::load(&path);
        assert!(matches!(result, Err(ConfigError::TooLarge(_))));

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn debug_masks_api_key() {
        let config = Config {
            api_key: Some("super-secret-key".to_string()),
            ..Config::default()
        };
        let output = format!("{:?}", config);
        assert!(!output.contains("super-secret-key"));
        assert!(output.contains("[REDACTED]"));
    }

    #[test]
    fn empty_config_api_key_treated_as_absent() {
        let config = Config {
            api_key: Some(String::new()),
            ..Config::default()
        };
        // Only meaningful when the env var is unset in the test environment.
        if std::env::var("NYT_API_KEY").is_err() {
            assert_eq!(config.resolve_api_key(), None);
        }
    }
}
