// ABOUTME: Event handling system for keyboard input and wizard actions

use crate::app::state::{AppState, View};
use crate::flow::WizardStep;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Quit,
    NextStep,
    PreviousStep,
    // Unguarded jump (step shortcuts, review link)
    JumpTo(WizardStep),
    // Picker events
    OpenPicker,
    PickerUp,
    PickerDown,
    PickerConfirm,
    PickerCancel,
}

pub struct EventHandler;

impl EventHandler {
    pub fn handle_key_event(key_event: KeyEvent, state: &AppState) -> Option<AppEvent> {
        if key_event.modifiers.contains(KeyModifiers::CONTROL)
            && key_event.code == KeyCode::Char('c')
        {
            return Some(AppEvent::Quit);
        }

        // Picker popup captures input while open
        if state.picker.is_some() {
            return match key_event.code {
                KeyCode::Up | KeyCode::Char('k') => Some(AppEvent::PickerUp),
                KeyCode::Down | KeyCode::Char('j') => Some(AppEvent::PickerDown),
                KeyCode::Enter => Some(AppEvent::PickerConfirm),
                KeyCode::Esc => Some(AppEvent::PickerCancel),
                _ => None,
            };
        }

        if state.current_view == View::HandOff {
            return match key_event.code {
                KeyCode::Enter | KeyCode::Esc | KeyCode::Char('q') => Some(AppEvent::Quit),
                _ => None,
            };
        }

        match key_event.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(AppEvent::Quit),
            KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') => Some(AppEvent::NextStep),
            KeyCode::Left | KeyCode::Backspace | KeyCode::Char('h') => {
                Some(AppEvent::PreviousStep)
            }
            KeyCode::Char('s') | KeyCode::Char(' ') => Some(AppEvent::OpenPicker),
            KeyCode::Char('r') => Some(AppEvent::JumpTo(WizardStep::Confirmation)),
            KeyCode::Char(c @ '1'..='5') => {
                let idx = c as usize - '1' as usize;
                WizardStep::all().get(idx).copied().map(AppEvent::JumpTo)
            }
            _ => None,
        }
    }

    pub fn process_event(event: AppEvent, state: &mut AppState) {
        debug!("Processing {:?} on step {}", event, state.wizard.current_step());
        match event {
            AppEvent::Quit => state.quit(),
            AppEvent::NextStep => state.next_step(),
            AppEvent::PreviousStep => state.previous_step(),
            AppEvent::JumpTo(step) => state.jump_to(step),
            AppEvent::OpenPicker => state.open_picker(),
            AppEvent::PickerUp => {
                if let Some(picker) = state.picker.as_mut() {
                    picker.previous();
                }
            }
            AppEvent::PickerDown => {
                if let Some(picker) = state.picker.as_mut() {
                    picker.next();
                }
            }
            AppEvent::PickerConfirm => state.confirm_picker(),
            AppEvent::PickerCancel => state.close_picker(),
        }
    }
}
