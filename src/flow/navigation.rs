// ABOUTME: Navigation hook fired when the wizard finishes
// Implementations perform the application-level screen change

/// Performs the transition to the screen that follows the wizard.
///
/// The controller calls this at most once per wizard session, but
/// implementations should tolerate repeats.
#[cfg_attr(test, mockall::automock)]
pub trait NavigationSink {
    fn navigate_to_next_screen(&mut self);
}

/// Sink that only counts how often it was asked to navigate.
///
/// Used by the non-interactive commands, which have no screen to change.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    calls: usize,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// How many times navigation was requested
    pub fn calls(&self) -> usize {
        self.calls
    }
}

impl NavigationSink for RecordingNavigator {
    fn navigate_to_next_screen(&mut self) {
        self.calls += 1;
    }
}
