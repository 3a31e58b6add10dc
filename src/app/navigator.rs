// ABOUTME: Navigation sink used by the TUI when the wizard finishes
// Records the destination screen and persists the completion record

use std::path::PathBuf;
use tracing::{error, info};

use crate::config::CompletionRecord;
use crate::flow::NavigationSink;

/// Moves the application to the screen after the wizard.
///
/// The TUI watches [`ScreenNavigator::destination`] and switches to the
/// hand-off view once it is set. Calling it again only refreshes the record.
#[derive(Debug)]
pub struct ScreenNavigator {
    next_screen: String,
    record_path: Option<PathBuf>,
    destination: Option<String>,
}

impl ScreenNavigator {
    pub fn new(next_screen: impl Into<String>, record_path: Option<PathBuf>) -> Self {
        Self {
            next_screen: next_screen.into(),
            record_path,
            destination: None,
        }
    }

    /// The screen navigated to, once navigation has happened
    pub fn destination(&self) -> Option<&str> {
        self.destination.as_deref()
    }

    pub fn next_screen(&self) -> &str {
        &self.next_screen
    }

    fn record_completion(&self) {
        let Some(path) = &self.record_path else {
            return;
        };

        let result = CompletionRecord::load_from(path).and_then(|mut record| {
            record.mark_completed(&self.next_screen);
            record.save_to(path)
        });

        if let Err(e) = result {
            error!("Failed to record wizard completion: {:#}", e);
        }
    }
}

impl NavigationSink for ScreenNavigator {
    fn navigate_to_next_screen(&mut self) {
        info!("Navigating to {}", self.next_screen);
        self.record_completion();
        self.destination = Some(self.next_screen.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_navigation_sets_destination_and_records() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("completion.toml");
        let mut navigator = ScreenNavigator::new("/narrative_build", Some(path.clone()));
        assert!(navigator.destination().is_none());

        navigator.navigate_to_next_screen();
        assert_eq!(navigator.destination(), Some("/narrative_build"));

        let record = CompletionRecord::load_from(&path).unwrap();
        assert!(record.completed);
        assert_eq!(record.next_screen.as_deref(), Some("/narrative_build"));
    }

    #[test]
    fn test_repeated_navigation_is_harmless() {
        let mut navigator = ScreenNavigator::new("/narrative_build", None);
        navigator.navigate_to_next_screen();
        navigator.navigate_to_next_screen();
        assert_eq!(navigator.destination(), Some("/narrative_build"));
    }
}
