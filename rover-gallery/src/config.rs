use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::api::DEFAULT_API_BASE_URL;
use crate::filter::Filter;

pub const DEFAULT_CONFIG_PATH: &str = "gallery.toml";
pub const CONFIG_PATH_ENV: &str = "ROVER_GALLERY_CONFIG";
pub const API_KEY_ENV: &str = "NASA_API_KEY";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalleryConfig {
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Sent as-is; a missing or bad key only shows up as a failed fetch
    #[serde(default)]
    pub api_key: Option<String>,

    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default = "default_log_dir")]
    pub log_dir: String,

    /// Unset keeps the HTTP client's defaults
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    /// Photos printed per rendered feed
    #[serde(default = "default_page_preview")]
    pub page_preview: usize,

    /// Filter the session starts with
    #[serde(default)]
    pub filters: Filter,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_dir() -> String {
    "logs".to_string()
}

fn default_page_preview() -> usize {
    25
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            api_key: None,
            log_level: default_log_level(),
            log_dir: default_log_dir(),
            request_timeout_secs: None,
            page_preview: default_page_preview(),
            filters: Filter::default(),
        }
    }
}

impl GalleryConfig {
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read config file '{}': {}", path.display(), e))?;

        let config: GalleryConfig = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config file '{}': {}", path.display(), e))?;

        Ok(config)
    }

    /// Read `path` if it exists, defaults otherwise, then apply the environment
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let mut config = if path.exists() {
            Self::from_file(path)?
        } else {
            Self::default()
        };

        config.override_from(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Config path from `ROVER_GALLERY_CONFIG`, falling back to `gallery.toml`
    pub fn default_path() -> String {
        std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string())
    }

    pub fn override_from(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(key) = lookup(API_KEY_ENV).filter(|key| !key.trim().is_empty()) {
            self.api_key = Some(key);
        }
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rover_common::Rover;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = GalleryConfig::default();
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.log_level, "info");
        assert!(config.api_key.is_none());
        assert!(config.request_timeout().is_none());
        assert_eq!(config.filters, Filter::default());
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
api_key = "FILE_KEY"
log_level = "debug"
request_timeout_secs = 15

[filters]
rover = "opportunity"
sol = 200
"#
        )
        .unwrap();

        let config = GalleryConfig::from_file(file.path()).unwrap();
        assert_eq!(config.api_key.as_deref(), Some("FILE_KEY"));
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(15)));
        assert_eq!(config.filters.rover, Rover::Opportunity);
        assert_eq!(config.filters.sol, 200);
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn test_from_file_rejects_bad_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "log_level = ").unwrap();
        assert!(GalleryConfig::from_file(file.path()).is_err());
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = GalleryConfig::load(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.page_preview, 25);
    }

    #[test]
    fn test_env_key_overrides_file() {
        let mut config = GalleryConfig {
            api_key: Some("FILE_KEY".to_string()),
            ..Default::default()
        };
        config.override_from(|key| (key == API_KEY_ENV).then(|| "ENV_KEY".to_string()));
        assert_eq!(config.api_key.as_deref(), Some("ENV_KEY"));

        config.override_from(|_| Some("  ".to_string()));
        assert_eq!(config.api_key.as_deref(), Some("ENV_KEY"));
    }
}
