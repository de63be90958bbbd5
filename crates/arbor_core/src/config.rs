use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Application configuration stored at `~/.arbor/config.json`.
///
/// Unknown fields are ignored and missing fields fall back to defaults, so
/// configs written by older or newer builds load cleanly.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ArborConfig {
    /// Default open/closed state for the sidebar when neither a controlled
    /// value nor a valid persisted flag is available.
    pub sidebar_default_open: bool,

    // UI
    pub theme: String,
    pub font_size: u32,

    // General
    pub auto_update: bool,
    pub log_level: String,
}

impl Default for ArborConfig {
    fn default() -> Self {
        Self {
            sidebar_default_open: true,
            theme: "dark".into(),
            font_size: 14,
            auto_update: true,
            log_level: "info".into(),
        }
    }
}

impl ArborConfig {
    /// Returns the base config directory: `~/.arbor/`
    pub fn base_dir() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Could not determine home directory")?;
        Ok(home.join(".arbor"))
    }

    /// Returns the config file path: `~/.arbor/config.json`
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::base_dir()?.join("config.json"))
    }

    /// Returns the logs directory: `~/.arbor/logs/`
    pub fn logs_dir() -> Result<PathBuf> {
        Ok(Self::base_dir()?.join("logs"))
    }

    /// Ensures all required directories exist.
    pub fn ensure_dirs() -> Result<()> {
        let dirs = [Self::base_dir()?, Self::logs_dir()?];
        for dir in &dirs {
            if !dir.exists() {
                std::fs::create_dir_all(dir)
                    .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
            }
        }
        Ok(())
    }

    /// Loads config from disk, or creates the default file if missing.
    pub fn load() -> Result<Self> {
        Self::ensure_dirs()?;
        let path = Self::config_path()?;
        Self::load_from_path(&path)
    }

    /// Load config from a specific file path. A corrupt file degrades to the
    /// defaults rather than failing startup.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config: {}", path.display()))?;
            let config = match serde_json::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    warn!("Config parse failed, using defaults: {e}");
                    Self::default()
                }
            };
            info!("Loaded config from {}", path.display());
            Ok(config)
        } else {
            let config = Self::default();
            config.save_to_path(path)?;
            info!("Created default config at {}", path.display());
            Ok(config)
        }
    }

    /// Saves config to disk.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        self.save_to_path(&path)
    }

    /// Save config to a specific file path.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = ArborConfig::default();
        assert!(config.sidebar_default_open);
        assert!(config.auto_update);
        assert_eq!(config.theme, "dark");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.json");

        let config = ArborConfig {
            sidebar_default_open: false,
            theme: "light".into(),
            font_size: 16,
            auto_update: false,
            log_level: "debug".into(),
        };
        config.save_to_path(&path).unwrap();

        let loaded = ArborConfig::load_from_path(&path).unwrap();
        assert!(!loaded.sidebar_default_open);
        assert_eq!(loaded.theme, "light");
        assert_eq!(loaded.font_size, 16);
        assert!(!loaded.auto_update);
        assert_eq!(loaded.log_level, "debug");
    }

    #[test]
    fn test_load_missing_file_creates_default() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.json");

        let loaded = ArborConfig::load_from_path(&path).unwrap();
        assert!(loaded.sidebar_default_open);
        assert!(path.exists());
    }

    #[test]
    fn test_load_corrupt_file_degrades_to_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.json");
        std::fs::write(&path, "{{{ not json").unwrap();

        let loaded = ArborConfig::load_from_path(&path).unwrap();
        assert!(loaded.sidebar_default_open);
        assert_eq!(loaded.theme, "dark");
    }

    #[test]
    fn test_load_partial_json_fills_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.json");
        std::fs::write(&path, r#"{ "sidebar_default_open": false }"#).unwrap();

        let loaded = ArborConfig::load_from_path(&path).unwrap();
        assert!(!loaded.sidebar_default_open);
        assert_eq!(loaded.log_level, "info");
    }
}
