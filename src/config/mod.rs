// ABOUTME: Configuration management for avatar-wizard
// Layered TOML config: system, user, then project-local file (later wins)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub mod completion;

pub use completion::CompletionRecord;

use crate::store::SelectionStore;

/// Screen the wizard hands off to when no other is configured
pub const DEFAULT_NEXT_SCREEN: &str = "/narrative_build";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application version
    #[serde(default = "default_version")]
    pub version: String,

    /// Where selections and the avatar catalog live
    #[serde(default)]
    pub storage: StorageConfig,

    /// Where the wizard goes when it finishes
    #[serde(default)]
    pub navigation: NavigationConfig,

    /// UI preferences
    #[serde(default)]
    pub ui: UiPreferences,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Selection store file (default: ~/.avatar-wizard/selections.json)
    #[serde(default)]
    pub selections_path: Option<PathBuf>,

    /// JSON catalog of candidate avatars (default: built-in set)
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NavigationConfig {
    /// Route of the screen that follows the wizard
    #[serde(default)]
    pub next_screen: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UiPreferences {
    /// Show the numeric percentage next to the step dots
    #[serde(default)]
    pub show_progress_percent: Option<bool>,
}

fn default_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            storage: StorageConfig::default(),
            navigation: NavigationConfig::default(),
            ui: UiPreferences::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from default locations
    pub fn load() -> Result<Self> {
        let mut config = Self::default();

        for path in Self::get_config_paths() {
            if path.exists() {
                config.merge(Self::load_from(&path)?);
            }
        }

        Ok(config)
    }

    /// Load a single config file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))
    }

    /// Get configuration file paths in order of precedence (later wins)
    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from("/etc/avatar-wizard/config.toml")];

        if let Ok(config_dir) = Self::get_user_config_dir() {
            paths.push(config_dir.join("config.toml"));
        }

        if let Ok(cwd) = std::env::current_dir() {
            paths.push(cwd.join(".avatar-wizard").join("config.toml"));
        }

        paths
    }

    /// Get user configuration directory
    pub fn get_user_config_dir() -> Result<PathBuf> {
        let home_dir = dirs::home_dir().context("Failed to get home directory")?;
        Ok(home_dir.join(".avatar-wizard").join("config"))
    }

    /// Merge another config into this one; fields set in `other` win
    pub fn merge(&mut self, other: AppConfig) {
        if other.storage.selections_path.is_some() {
            self.storage.selections_path = other.storage.selections_path;
        }
        if other.storage.catalog_path.is_some() {
            self.storage.catalog_path = other.storage.catalog_path;
        }
        if other.navigation.next_screen.is_some() {
            self.navigation.next_screen = other.navigation.next_screen;
        }
        if other.ui.show_progress_percent.is_some() {
            self.ui.show_progress_percent = other.ui.show_progress_percent;
        }
    }

    /// Resolved selection store path
    pub fn selections_path(&self) -> Result<PathBuf> {
        match &self.storage.selections_path {
            Some(path) => Ok(path.clone()),
            None => Ok(SelectionStore::default_path()?),
        }
    }

    pub fn catalog_path(&self) -> Option<&Path> {
        self.storage.catalog_path.as_deref()
    }

    pub fn next_screen(&self) -> &str {
        self.navigation
            .next_screen
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_NEXT_SCREEN)
    }

    pub fn show_progress_percent(&self) -> bool {
        self.ui.show_progress_percent.unwrap_or(true)
    }
}
