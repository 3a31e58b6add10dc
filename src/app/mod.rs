// ABOUTME: Main application structure and state management for the TUI

pub mod events;
pub mod navigator;
pub mod state;

pub use events::{AppEvent, EventHandler};
pub use navigator::ScreenNavigator;
pub use state::{AppState, View};

use anyhow::Result;

use crate::config::AppConfig;

pub struct App {
    pub state: AppState,
}

impl App {
    pub fn new(config: &AppConfig) -> Result<Self> {
        Ok(Self {
            state: AppState::from_config(config)?,
        })
    }
}
