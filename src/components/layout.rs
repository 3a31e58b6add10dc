// ABOUTME: Top-level layout choosing between the wizard, its picker overlay and the hand-off screen

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use super::theme::{CORNFLOWER_BLUE, DARK_BG, GOLD, MUTED_GRAY, SOFT_WHITE};
use super::{AvatarPickerComponent, WizardComponent};
use crate::app::state::{AppState, View};

pub struct LayoutComponent {
    wizard: WizardComponent,
    picker: AvatarPickerComponent,
}

impl LayoutComponent {
    pub fn new() -> Self {
        Self {
            wizard: WizardComponent::new(),
            picker: AvatarPickerComponent::new(),
        }
    }

    pub fn render(&self, frame: &mut Frame, state: &AppState) {
        let area = frame.size();
        match state.current_view {
            View::Wizard => {
                self.wizard.render(frame, area, state);
                if let Some(picker) = &state.picker {
                    self.picker.render(frame, area, picker);
                }
            }
            View::HandOff => Self::render_hand_off(frame, area, state),
        }
    }

    fn render_hand_off(frame: &mut Frame, area: Rect, state: &AppState) {
        frame.render_widget(Clear, area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(CORNFLOWER_BLUE))
            .style(Style::default().bg(DARK_BG))
            .title(" Avatar Selection Complete ")
            .title_style(Style::default().fg(GOLD).add_modifier(Modifier::BOLD));

        let destination = state
            .wizard
            .navigator()
            .destination()
            .unwrap_or_else(|| state.wizard.navigator().next_screen())
            .to_string();

        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "Your Church, Community and Companion avatars are saved.",
                Style::default().fg(SOFT_WHITE),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("Continuing to ", Style::default().fg(MUTED_GRAY)),
                Span::styled(destination, Style::default().fg(GOLD).add_modifier(Modifier::BOLD)),
            ]),
            Line::from(""),
            Line::from(Span::styled("Press Enter to exit", Style::default().fg(MUTED_GRAY))),
        ];

        frame.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center).block(block),
            area,
        );
    }
}

impl Default for LayoutComponent {
    fn default() -> Self {
        Self::new()
    }
}
