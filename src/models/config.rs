//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{AppError, Result};
use crate::models::PageSize;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Dataset location and HTTP settings
    #[serde(default)]
    pub source: SourceConfig,

    /// Display defaults
    #[serde(default)]
    pub view: ViewConfig,

    /// Log output settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::or_default(&path, Self::load(&path))
    }

    /// Fall back to defaults on a failed load, logging why.
    ///
    /// Split from `load_or_default` so callers can set up logging from
    /// the load result before the warning is emitted.
    pub fn or_default(path: impl AsRef<Path>, loaded: Result<Self>) -> Self {
        loaded.unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Load a configuration file and validate it, with no fallback.
    pub fn load_validated(path: impl AsRef<Path>) -> Result<Self> {
        let config = Self::load(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.source.user_agent.trim().is_empty() {
            return Err(AppError::validation("source.user_agent is empty"));
        }
        if self.source.timeout_secs == 0 {
            return Err(AppError::validation("source.timeout_secs must be > 0"));
        }
        let url = Url::parse(&self.source.url)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(AppError::validation(format!(
                "source.url must be http(s), got '{}'",
                url.scheme()
            )));
        }
        if self.view.item_template.trim().is_empty() {
            return Err(AppError::validation("view.item_template is empty"));
        }
        Ok(())
    }
}

/// Where the dataset lives and how to request it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// URL serving the JSON array of universities
    #[serde(default = "defaults::url")]
    pub url: String,

    /// User-Agent header for the dataset request
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: defaults::url(),
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
        }
    }
}

/// Display defaults for the result list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewConfig {
    /// Page size selected at session start
    #[serde(default)]
    pub default_page_size: PageSize,

    /// Template for one result line (see `University::format`)
    #[serde(default = "defaults::item_template")]
    pub item_template: String,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            default_page_size: PageSize::default(),
            item_template: defaults::item_template(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default level when `RUST_LOG` is unset
    #[serde(default = "defaults::log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: defaults::log_level(),
        }
    }
}

mod defaults {
    pub fn url() -> String {
        "https://raw.githubusercontent.com/Hipo/university-domains-list/master/world_universities_and_domains.json".into()
    }
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; unidomains/0.1)".into()
    }
    pub fn timeout() -> u64 {
        30
    }

    pub fn item_template() -> String {
        "Name: {name} | Country: {country} | Domains: {domains}".into()
    }

    pub fn log_level() -> String {
        "info".into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_default_config_ok() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_user_agent() {
        let mut config = Config::default();
        config.source.user_agent = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_timeout() {
        let mut config = Config::default();
        config.source.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_bad_url() {
        let mut config = Config::default();
        config.source.url = "not a url".to_string();
        assert!(matches!(config.validate(), Err(AppError::Url(_))));

        config.source.url = "ftp://example.com/data.json".to_string();
        assert!(matches!(config.validate(), Err(AppError::Validation(_))));
    }

    #[test]
    fn load_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("unidomains.toml");
        fs::write(
            &path,
            "[view]\ndefault_page_size = \"all\"\n\n[source]\ntimeout_secs = 5\n",
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.view.default_page_size, PageSize::Unbounded);
        assert_eq!(config.source.timeout_secs, 5);
        assert_eq!(config.source.url, defaults::url());
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn load_rejects_bad_page_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("unidomains.toml");
        fs::write(&path, "[view]\ndefault_page_size = \"0\"\n").unwrap();

        assert!(matches!(Config::load(&path), Err(AppError::Toml(_))));
    }

    #[test]
    fn load_validated_rejects_zero_page_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("zero.toml");
        fs::write(&path, "[view]\ndefault_page_size = \"0\"\n").unwrap();

        assert!(Config::load_validated(&path).is_err());
        // The lenient loader would have hidden the problem behind defaults.
        assert!(Config::load_or_default(&path).validate().is_ok());
    }

    #[test]
    fn load_validated_rejects_invalid_values_and_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "[source]\ntimeout_secs = 0\n").unwrap();

        assert!(matches!(
            Config::load_validated(&path),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            Config::load_validated(dir.path().join("missing.toml")),
            Err(AppError::Io(_))
        ));
    }

    #[test]
    fn load_validated_accepts_sample_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ok.toml");
        fs::write(&path, "[view]\ndefault_page_size = \"20\"\n").unwrap();

        let config = Config::load_validated(&path).unwrap();
        assert_eq!(config.view.default_page_size, PageSize::limited(20));
    }

    #[test]
    fn or_default_keeps_loaded_config() {
        let mut loaded = Config::default();
        loaded.logging.level = "debug".to_string();
        let config = Config::or_default("unused.toml", Ok(loaded));
        assert_eq!(config.logging.level, "debug");

        let config = Config::or_default("bad.toml", Err(AppError::validation("broken")));
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn load_or_default_on_missing_file() {
        let config = Config::load_or_default("/nonexistent/unidomains.toml");
        assert_eq!(config.view.default_page_size, PageSize::limited(10));
    }
}
