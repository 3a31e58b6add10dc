// ABOUTME: Application state for the avatar-selection TUI
// Wraps the step flow controller with picker, notice and view state

use anyhow::Result;
use std::path::PathBuf;
use tracing::{info, warn};

use super::navigator::ScreenNavigator;
use crate::catalog::{AvatarCatalog, CatalogEntry, Category};
use crate::config::{AppConfig, CompletionRecord};
use crate::flow::{StepFlowController, WizardStep};
use crate::store::{SelectionStore, StoredReadiness};

/// Controller as wired up by the TUI
pub type WizardController = StepFlowController<StoredReadiness, ScreenNavigator>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Step-by-step wizard
    Wizard,
    /// Shown after the wizard navigated away
    HandOff,
}

/// Popup listing candidates for one category
#[derive(Debug, Clone)]
pub struct PickerState {
    pub category: Category,
    pub entries: Vec<CatalogEntry>,
    pub selected_index: usize,
}

impl PickerState {
    pub fn new(category: Category, entries: Vec<CatalogEntry>, current_id: Option<&str>) -> Self {
        let selected_index = current_id
            .and_then(|id| entries.iter().position(|e| e.id == id))
            .unwrap_or(0);
        Self {
            category,
            entries,
            selected_index,
        }
    }

    pub fn next(&mut self) {
        if !self.entries.is_empty() {
            self.selected_index = (self.selected_index + 1) % self.entries.len();
        }
    }

    pub fn previous(&mut self) {
        if !self.entries.is_empty() {
            self.selected_index = if self.selected_index == 0 {
                self.entries.len() - 1
            } else {
                self.selected_index - 1
            };
        }
    }

    pub fn selected(&self) -> Option<&CatalogEntry> {
        self.entries.get(self.selected_index)
    }
}

/// Which picker category a wizard step selects, if any
pub fn category_for_step(step: WizardStep) -> Option<Category> {
    match step {
        WizardStep::Church => Some(Category::Church),
        WizardStep::Community => Some(Category::Community),
        WizardStep::Companion => Some(Category::Companion),
        _ => None,
    }
}

pub struct AppState {
    pub wizard: WizardController,
    pub current_view: View,
    pub picker: Option<PickerState>,
    /// One-line message under the step content (blocked advance, selection made)
    pub notice: Option<String>,
    pub catalog: AvatarCatalog,
    /// Cached copy of the store for display; readiness always reads the file
    pub selections: SelectionStore,
    pub show_progress_percent: bool,
    pub should_quit: bool,
    /// Last reload failure, so the idle refresh logs each distinct error once
    refresh_error: Option<String>,
}

impl AppState {
    /// Build state from configuration, resuming any earlier selections
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let selections_path = config.selections_path()?;
        let catalog = AvatarCatalog::load(config.catalog_path())?;
        let record_path = CompletionRecord::default_path().ok();
        Ok(Self::with_parts(
            selections_path,
            catalog,
            ScreenNavigator::new(config.next_screen(), record_path),
            config.show_progress_percent(),
        ))
    }

    /// Build state from explicit parts (tests use this with temp paths)
    pub fn with_parts(
        selections_path: PathBuf,
        catalog: AvatarCatalog,
        navigator: ScreenNavigator,
        show_progress_percent: bool,
    ) -> Self {
        let wizard = StepFlowController::resume(StoredReadiness::new(&selections_path), navigator);
        if wizard.is_complete() {
            info!("All avatars already selected - resuming on the completed step");
        }

        let mut state = Self {
            wizard,
            current_view: View::Wizard,
            picker: None,
            notice: None,
            catalog,
            selections: SelectionStore::empty(&selections_path),
            show_progress_percent,
            should_quit: false,
            refresh_error: None,
        };
        state.refresh_selections();
        state
    }

    pub fn selections_path(&self) -> PathBuf {
        self.wizard.readiness().path().to_path_buf()
    }

    /// Reload the display cache from disk
    pub fn refresh_selections(&mut self) {
        match SelectionStore::load_from(self.selections_path()) {
            Ok(store) => {
                self.selections = store;
                self.refresh_error = None;
            }
            Err(e) => {
                let message = e.to_string();
                if self.refresh_error.as_deref() != Some(message.as_str()) {
                    warn!("Could not reload selections: {}", message);
                    self.refresh_error = Some(message);
                }
                self.selections = SelectionStore::empty(self.selections_path());
            }
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn next_step(&mut self) {
        if self.wizard.go_to_next_step() {
            self.notice = None;
        } else if let Some(reason) = self.wizard.blocked_reason() {
            self.notice = Some(reason.to_string());
        }

        if self.wizard.navigator().destination().is_some() {
            self.current_view = View::HandOff;
        }
    }

    pub fn previous_step(&mut self) {
        if self.wizard.go_to_previous_step() {
            self.notice = None;
        }
    }

    /// Unguarded jump, used by the step shortcuts and the review link
    pub fn jump_to(&mut self, step: WizardStep) {
        self.wizard.go_to_step(step);
        self.notice = None;
    }

    /// Open the picker for the current step's category
    pub fn open_picker(&mut self) {
        let Some(category) = category_for_step(self.wizard.current_step()) else {
            return;
        };

        let current_id = match category {
            Category::Church => self.selections.church_avatar().map(|a| a.id.clone()),
            Category::Community => self.selections.community_avatar().map(|a| a.id.clone()),
            Category::Companion => self.selections.companion().map(|c| c.uuid.to_string()),
        };

        let entries = self.catalog.entries(category);
        if entries.is_empty() {
            self.notice = Some(format!("No {} candidates available", category.label()));
            return;
        }

        self.picker = Some(PickerState::new(category, entries, current_id.as_deref()));
    }

    pub fn close_picker(&mut self) {
        self.picker = None;
    }

    /// Persist the highlighted picker entry as the selection for its category
    pub fn confirm_picker(&mut self) {
        let Some(picker) = self.picker.take() else {
            return;
        };
        let Some(entry) = picker.selected() else {
            return;
        };

        match self.persist_selection(picker.category, &entry.id) {
            Ok(()) => {
                self.notice = Some(format!("Selected {}: {}", picker.category.label(), entry.title));
            }
            Err(e) => {
                warn!("Failed to save selection: {:#}", e);
                self.notice = Some(format!("Could not save selection: {e}"));
            }
        }
        self.refresh_selections();
    }

    fn persist_selection(&self, category: Category, id: &str) -> Result<()> {
        let mut store = SelectionStore::load_or_empty(self.selections_path())?;
        match category {
            Category::Church => {
                let avatar = self
                    .catalog
                    .find_church(id)
                    .ok_or_else(|| anyhow::anyhow!("Unknown church avatar '{id}'"))?;
                store.select_church_avatar(avatar.clone());
            }
            Category::Community => {
                let avatar = self
                    .catalog
                    .find_community(id)
                    .ok_or_else(|| anyhow::anyhow!("Unknown community avatar '{id}'"))?;
                store.select_community_avatar(avatar.clone());
            }
            Category::Companion => {
                let companion = self
                    .catalog
                    .find_companion(id)
                    .ok_or_else(|| anyhow::anyhow!("Unknown companion '{id}'"))?;
                store.select_companion(companion.clone());
            }
        }
        store.save()?;
        Ok(())
    }
}
