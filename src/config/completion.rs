// ABOUTME: Record of a finished avatar-selection wizard
// Written when the flow completes so later launches can skip straight past it

use anyhow::{Context, Result};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Completion record persisted to disk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionRecord {
    /// Whether the wizard has been completed
    #[serde(default)]
    pub completed: bool,

    /// When the wizard was completed (RFC 3339 timestamp)
    #[serde(default)]
    pub completed_at: Option<String>,

    /// Version that wrote the record
    /// A major version bump asks the user to go through the wizard again
    #[serde(default = "default_version")]
    pub version: String,

    /// Screen the user was sent to on completion
    #[serde(default)]
    pub next_screen: Option<String>,
}

fn default_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

impl Default for CompletionRecord {
    fn default() -> Self {
        Self {
            completed: false,
            completed_at: None,
            version: default_version(),
            next_screen: None,
        }
    }
}

impl CompletionRecord {
    /// Get the path to the completion record
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Could not determine home directory")?;
        Ok(home.join(".avatar-wizard/config/completion.toml"))
    }

    /// Load from the default location
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::default_path()?)
    }

    /// Load from `path`; a missing file means the wizard never ran
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read completion record from {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse completion record from {}", path.display()))
    }

    /// Save to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::default_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        let content = toml::to_string_pretty(self)
            .context("Failed to serialize completion record")?;

        fs::write(path, content)
            .with_context(|| format!("Failed to write completion record to {}", path.display()))?;

        Ok(())
    }

    /// Mark the wizard as completed
    pub fn mark_completed(&mut self, next_screen: &str) {
        self.completed = true;
        self.completed_at = Some(Utc::now().to_rfc3339());
        self.version = default_version();
        self.next_screen = Some(next_screen.to_string());
    }

    /// Check if the wizard needs to be run
    /// Returns true if:
    /// - Never completed
    /// - Major version changed (e.g., 1.x -> 2.x)
    pub fn needs_wizard(&self) -> bool {
        if !self.completed {
            return true;
        }

        let current_major = env!("CARGO_PKG_VERSION")
            .split('.')
            .next()
            .unwrap_or("0");

        let saved_major = self.version.split('.').next().unwrap_or("0");

        current_major != saved_major
    }

    /// Forget that the wizard was completed
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
