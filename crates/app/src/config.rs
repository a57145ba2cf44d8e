//! Application configuration
//!
//! Read from `config.toml` under the platform config directory, with
//! `LECTIO_*` environment variables taking precedence. The store section has
//! no usable defaults; a missing URL or key is reported when the store
//! client is built, as the one blocking notice of the run.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use lectio_core::{Error, Result};
use serde::Deserialize;

const DEFAULT_TABLE: &str = "lectures";
const DEFAULT_TITLE: &str = "2026 대전광역시 무형유산 전수교육 실적보고서";
const DEFAULT_FILE_PREFIX: &str = "전수교육실적보고서";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub store: StoreSection,
    #[serde(default)]
    pub report: ReportSection,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StoreSection {
    pub url: String,
    pub api_key: String,
    pub table: String,
}

impl Default for StoreSection {
    fn default() -> Self {
        Self {
            url: String::new(),
            api_key: String::new(),
            table: DEFAULT_TABLE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReportSection {
    /// Centered title line naming the reporting period/organization.
    pub title: String,
    pub file_prefix: String,
}

impl Default for ReportSection {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            file_prefix: DEFAULT_FILE_PREFIX.to_string(),
        }
    }
}

impl AppConfig {
    /// Load from the platform config directory, then apply env overrides.
    /// A missing file yields the defaults; a malformed file is an error.
    pub fn load() -> Result<Self> {
        let mut config = match Self::config_path() {
            Some(path) if path.exists() => Self::from_path(&path)?,
            _ => Self::default(),
        };
        config.apply_env();
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        toml::from_str(&raw).map_err(|e| Error::Config(e.to_string()))
    }

    fn config_path() -> Option<PathBuf> {
        let dirs = ProjectDirs::from("", "", "lectio")?;
        Some(dirs.config_dir().join("config.toml"))
    }

    fn apply_env(&mut self) {
        if let Ok(url) = std::env::var("LECTIO_STORE_URL") {
            self.store.url = url;
        }
        if let Ok(key) = std::env::var("LECTIO_STORE_KEY") {
            self.store.api_key = key;
        }
        if let Ok(table) = std::env::var("LECTIO_STORE_TABLE") {
            self.store.table = table;
        }
        if let Ok(title) = std::env::var("LECTIO_REPORT_TITLE") {
            self.report.title = title;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert!(config.store.url.is_empty());
        assert_eq!(config.store.table, "lectures");
        assert_eq!(config.report.file_prefix, "전수교육실적보고서");
    }

    #[test]
    fn test_from_path_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[store]\nurl = \"https://db.example.co\"\napi_key = \"key\"\n",
        )
        .unwrap();

        let config = AppConfig::from_path(&path).unwrap();
        assert_eq!(config.store.url, "https://db.example.co");
        // Unset sections keep their defaults.
        assert_eq!(config.store.table, "lectures");
        assert!(config.report.title.contains("실적보고서"));
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "store = not toml").unwrap();
        assert!(matches!(
            AppConfig::from_path(&path),
            Err(Error::Config(_))
        ));
    }
}
