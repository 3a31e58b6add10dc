// ABOUTME: Persisted avatar selections shared by the picker, the CLI and the wizard
// One JSON document keyed like the web app's local-storage entries

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

use super::models::{Avatar, Companion, CompletedTasks};
use crate::flow::ReadinessProvider;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Could not determine home directory")]
    NoHomeDir,

    #[error("Failed to access selection store at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse selection store at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize selections: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// On-disk layout of the store
#[derive(Debug, Default, Serialize, Deserialize)]
struct SelectionDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    selected_church_avatar: Option<Avatar>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    selected_community_avatar: Option<Avatar>,

    /// Kept untyped so older companion shapes can be converted on load
    #[serde(default, skip_serializing_if = "Option::is_none")]
    selected_companion: Option<Value>,

    #[serde(default)]
    completed_tasks: CompletedTasks,
}

/// Avatar selections backed by a JSON file
#[derive(Debug, Clone)]
pub struct SelectionStore {
    path: PathBuf,
    church_avatar: Option<Avatar>,
    community_avatar: Option<Avatar>,
    companion: Option<Companion>,
    completed_tasks: CompletedTasks,
}

impl SelectionStore {
    /// An empty store that will save to `path`
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            church_avatar: None,
            community_avatar: None,
            companion: None,
            completed_tasks: CompletedTasks::default(),
        }
    }

    /// Default location: ~/.avatar-wizard/selections.json
    pub fn default_path() -> Result<PathBuf, StoreError> {
        let home = dirs::home_dir().ok_or(StoreError::NoHomeDir)?;
        Ok(home.join(".avatar-wizard").join("selections.json"))
    }

    /// Load from the default location
    pub fn load() -> Result<Self, StoreError> {
        Self::load_from(Self::default_path()?)
    }

    /// Load from `path`; a missing file is an empty store
    pub fn load_from(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();

        if !path.exists() {
            debug!("No selection store at {}, starting empty", path.display());
            return Ok(Self::empty(path));
        }

        let content = fs::read_to_string(&path).map_err(|source| StoreError::Io {
            path: path.clone(),
            source,
        })?;

        let document: SelectionDocument = if content.trim().is_empty() {
            SelectionDocument::default()
        } else {
            serde_json::from_str(&content).map_err(|source| StoreError::Parse {
                path: path.clone(),
                source,
            })?
        };

        let companion = document
            .selected_companion
            .as_ref()
            .and_then(Companion::from_stored);

        Ok(Self {
            path,
            church_avatar: document.selected_church_avatar,
            community_avatar: document.selected_community_avatar,
            companion,
            completed_tasks: document.completed_tasks,
        })
    }

    /// Load for writing: a corrupt file is replaced by an empty store.
    ///
    /// Read errors other than parse failures are still returned.
    pub fn load_or_empty(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        match Self::load_from(path) {
            Err(StoreError::Parse { path, source }) => {
                warn!(
                    "Selection store at {} is corrupt ({}), starting from empty selections",
                    path.display(),
                    source
                );
                Ok(Self::empty(path))
            }
            other => other,
        }
    }

    /// Write the store back to its file, creating parent directories
    pub fn save(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| StoreError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let document = SelectionDocument {
            selected_church_avatar: self.church_avatar.clone(),
            selected_community_avatar: self.community_avatar.clone(),
            selected_companion: self
                .companion
                .as_ref()
                .map(serde_json::to_value)
                .transpose()?,
            completed_tasks: self.completed_tasks,
        };

        let content = serde_json::to_string_pretty(&document)?;
        fs::write(&self.path, content).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;

        debug!("Saved selections to {}", self.path.display());
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn church_avatar(&self) -> Option<&Avatar> {
        self.church_avatar.as_ref()
    }

    pub fn community_avatar(&self) -> Option<&Avatar> {
        self.community_avatar.as_ref()
    }

    pub fn companion(&self) -> Option<&Companion> {
        self.companion.as_ref()
    }

    pub fn completed_tasks(&self) -> CompletedTasks {
        self.completed_tasks
    }

    /// Select the church avatar and mark the church task done
    pub fn select_church_avatar(&mut self, avatar: Avatar) {
        info!("Selected church avatar '{}'", avatar.display_name());
        self.church_avatar = Some(avatar);
        self.completed_tasks.church = true;
    }

    /// Select the community avatar and mark the community task done
    pub fn select_community_avatar(&mut self, avatar: Avatar) {
        info!("Selected community avatar '{}'", avatar.display_name());
        self.community_avatar = Some(avatar);
        self.completed_tasks.community = true;
    }

    /// Select a companion. Returns false if that companion was already selected.
    pub fn select_companion(&mut self, companion: Companion) -> bool {
        if let Some(current) = &self.companion {
            if current.uuid == companion.uuid && current.companion == companion.companion {
                debug!("Companion '{}' already selected", companion.companion);
                return false;
            }
        }

        info!("Selected companion '{}'", companion.companion);
        self.companion = Some(companion);
        true
    }

    /// Remove the church avatar; completed tasks are left as they are
    pub fn clear_church_avatar(&mut self) {
        self.church_avatar = None;
    }

    /// Remove the community avatar; completed tasks are left as they are
    pub fn clear_community_avatar(&mut self) {
        self.community_avatar = None;
    }

    pub fn clear_companion(&mut self) {
        self.companion = None;
    }

    /// Remove every selection and reset the completed tasks
    pub fn clear_all(&mut self) {
        info!("Clearing all avatar selections");
        self.church_avatar = None;
        self.community_avatar = None;
        self.companion = None;
        self.completed_tasks = CompletedTasks::default();
    }
}

impl ReadinessProvider for SelectionStore {
    fn is_church_avatar_selected(&self) -> bool {
        self.church_avatar.is_some()
    }

    fn is_community_avatar_selected(&self) -> bool {
        self.community_avatar.is_some()
    }

    fn is_companion_selected(&self) -> bool {
        self.companion.is_some()
    }
}

/// Readiness read straight from the store file on every call.
///
/// Selections made elsewhere (the picker, another process) show up on the
/// next call. A file that cannot be read counts as "nothing selected".
#[derive(Debug, Clone)]
pub struct StoredReadiness {
    path: PathBuf,
    /// Last logged read error; identical repeats are not logged again
    last_error: RefCell<Option<String>>,
}

impl StoredReadiness {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            last_error: RefCell::new(None),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Option<SelectionStore> {
        match SelectionStore::load_from(&self.path) {
            Ok(store) => {
                self.last_error.borrow_mut().take();
                Some(store)
            }
            Err(e) => {
                if self.note_error(e.to_string()) {
                    warn!("Ignoring unreadable selection store: {}", e);
                }
                None
            }
        }
    }

    /// Remember `message`; true if it differs from the last error seen
    fn note_error(&self, message: String) -> bool {
        let mut last = self.last_error.borrow_mut();
        if last.as_deref() == Some(message.as_str()) {
            return false;
        }
        *last = Some(message);
        true
    }
}

impl ReadinessProvider for StoredReadiness {
    fn is_church_avatar_selected(&self) -> bool {
        self.read().is_some_and(|s| s.is_church_avatar_selected())
    }

    fn is_community_avatar_selected(&self) -> bool {
        self.read().is_some_and(|s| s.is_community_avatar_selected())
    }

    fn is_companion_selected(&self) -> bool {
        self.read().is_some_and(|s| s.is_companion_selected())
    }
}
