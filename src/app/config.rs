use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::constants::DEFAULT_SCHEDULER_URL;

const SETTINGS_FILE: &str = "settings.json";

/// Projects layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Grid => ViewMode::List,
            ViewMode::List => ViewMode::Grid,
        }
    }
}

/// Configuration for the application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_true")]
    pub animations_enabled: bool,
    /// Desktop notification after copying a contact detail
    #[serde(default = "default_true")]
    pub notifications_enabled: bool,
    /// Scheduling page, e.g. https://calendly.com/<user>
    #[serde(default = "default_scheduler_url")]
    pub scheduler_url: String,
    /// Root that site-absolute image paths resolve against
    #[serde(default = "default_assets_dir")]
    pub assets_dir: PathBuf,
    #[serde(default)]
    pub projects_view: ViewMode,
}

fn default_theme() -> String {
    "purple".to_string()
}

fn default_true() -> bool {
    true
}

fn default_scheduler_url() -> String {
    DEFAULT_SCHEDULER_URL.to_string()
}

fn default_assets_dir() -> PathBuf {
    PathBuf::from("public")
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            animations_enabled: true,
            notifications_enabled: true,
            scheduler_url: default_scheduler_url(),
            assets_dir: default_assets_dir(),
            projects_view: ViewMode::Grid,
        }
    }
}

/// Validate a scheduling page URL (https with a host)
pub fn is_valid_scheduler_url(url: &str) -> bool {
    if url.is_empty() || !url.starts_with("https://") {
        return false;
    }
    url::Url::parse(url)
        .map(|u| u.host_str().is_some())
        .unwrap_or(false)
}

impl AppConfig {
    pub fn load() -> Self {
        Self::load_from(SETTINGS_FILE)
    }

    /// Read settings from `path`, falling back to defaults for a missing or
    /// malformed file. An invalid scheduler URL is replaced by the default.
    pub fn load_from(path: impl AsRef<Path>) -> Self {
        let mut config = std::fs::read_to_string(path.as_ref())
            .ok()
            .and_then(|content| serde_json::from_str::<Self>(&content).ok())
            .unwrap_or_default();

        if !is_valid_scheduler_url(&config.scheduler_url) {
            tracing::warn!(
                "Ignoring invalid scheduler_url {:?}, using default",
                config.scheduler_url
            );
            config.scheduler_url = default_scheduler_url();
        }
        config
    }

    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to(SETTINGS_FILE)
    }

    pub fn save_to(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_from(dir.path().join("settings.json"));
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"theme":"ember","projects_view":"list"}"#).unwrap();

        let config = AppConfig::load_from(&path);
        assert_eq!(config.theme, "ember");
        assert_eq!(config.projects_view, ViewMode::List);
        assert!(config.animations_enabled);
        assert_eq!(config.scheduler_url, DEFAULT_SCHEDULER_URL);
    }

    #[test]
    fn test_save_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let config = AppConfig {
            notifications_enabled: false,
            ..Default::default()
        };
        config.save_to(&path).unwrap();
        assert_eq!(AppConfig::load_from(&path), config);
    }

    #[test]
    fn test_invalid_scheduler_url_replaced() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"scheduler_url":"ftp://nope"}"#).unwrap();
        assert_eq!(AppConfig::load_from(&path).scheduler_url, DEFAULT_SCHEDULER_URL);
    }

    #[test]
    fn test_scheduler_url_validation() {
        assert!(is_valid_scheduler_url("https://calendly.com/amar-zuga"));
        assert!(!is_valid_scheduler_url("http://calendly.com/amar-zuga"));
        assert!(!is_valid_scheduler_url(""));
        assert!(!is_valid_scheduler_url("https://"));
    }
}
