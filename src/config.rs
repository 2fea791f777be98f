//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application
//! configuration in TOML format with platform-specific directory resolution.

use crate::constants::{APP_NAME, DEFAULT_PAGE_SIZE};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Theme display mode preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThemeMode {
    /// Automatically detect OS theme (dark/light)
    #[default]
    Auto,
    /// Always use dark theme
    Dark,
    /// Always use light theme
    Light,
}

/// Board presentation settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Theme preference for the TUI
    pub theme_mode: ThemeMode,
    /// Number of pictograms shown in the default board view
    pub page_size: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme_mode: ThemeMode::Auto,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Storage collaborator settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Override for the catalog file location (default: config dir)
    pub catalog_path: Option<PathBuf>,
    /// Override for the saved-sentences file location (default: config dir)
    pub sentences_path: Option<PathBuf>,
    /// Whether favorite toggles are written back to the catalog store.
    /// When false, favorites live only for the session, like the original
    /// demo mode.
    pub persist_favorites: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            sentences_path: None,
            persist_favorites: true,
        }
    }
}

/// Top-level application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Board presentation settings
    #[serde(default)]
    pub ui: UiConfig,
    /// Storage collaborator settings
    #[serde(default)]
    pub storage: StorageConfig,
}

impl Config {
    /// Creates a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks if the config file exists on disk.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_file_path()
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    /// Gets the platform-specific config directory path.
    ///
    /// - Linux: `~/.config/PictoComm/`
    /// - macOS: `~/Library/Application Support/PictoComm/`
    /// - Windows: `%APPDATA%\PictoComm\`
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Resolved path of the catalog store file.
    pub fn catalog_path(&self) -> Result<PathBuf> {
        match &self.storage.catalog_path {
            Some(path) => Ok(path.clone()),
            None => Ok(Self::config_dir()?.join("catalog.json")),
        }
    }

    /// Resolved path of the saved-sentences store file.
    pub fn sentences_path(&self) -> Result<PathBuf> {
        match &self.storage.sentences_path {
            Some(path) => Ok(path.clone()),
            None => Ok(Self::config_dir()?.join("sentences.json")),
        }
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(&config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        config.validate()?;
        Ok(config)
    }

    /// Saves the configuration to the config file.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(config_dir) = config_path.parent() {
            fs::create_dir_all(config_dir).context(format!(
                "Failed to create config directory: {}",
                config_dir.display()
            ))?;
        }

        let content =
            toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        // Atomic rename
        fs::rename(&temp_path, config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.ui.page_size == 0 {
            anyhow::bail!("ui.page_size must be at least 1");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::new();
        assert_eq!(config.ui.theme_mode, ThemeMode::Auto);
        assert_eq!(config.ui.page_size, DEFAULT_PAGE_SIZE);
        assert!(config.storage.persist_favorites);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_toml_roundtrip() {
        let mut config = Config::new();
        config.ui.theme_mode = ThemeMode::Dark;
        config.ui.page_size = 12;
        config.storage.persist_favorites = false;
        config.storage.catalog_path = Some(PathBuf::from("/tmp/catalog.json"));

        let toml_str = toml::to_string_pretty(&config).unwrap();
        let back: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let back: Config = toml::from_str("[ui]\ntheme_mode = \"Light\"\npage_size = 8\n").unwrap();
        assert_eq!(back.ui.theme_mode, ThemeMode::Light);
        assert_eq!(back.ui.page_size, 8);
        assert!(back.storage.persist_favorites);
    }

    #[test]
    fn test_validate_rejects_zero_page_size() {
        let mut config = Config::new();
        config.ui.page_size = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_save_writes_atomically() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("PictoComm").join("config.toml");

        let mut config = Config::new();
        config.ui.page_size = 12;
        config.save_to(&path).unwrap();

        // The temp file is gone and the result parses back identically.
        assert!(!path.with_extension("toml.tmp").exists());
        let content = fs::read_to_string(&path).unwrap();
        let back: Config = toml::from_str(&content).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_catalog_path_override() {
        let mut config = Config::new();
        config.storage.catalog_path = Some(PathBuf::from("/data/board.json"));
        assert_eq!(
            config.catalog_path().unwrap(),
            PathBuf::from("/data/board.json")
        );
    }
}
