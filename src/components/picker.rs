// ABOUTME: Popup list for choosing a church avatar, community avatar or companion

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

use super::theme::{CORNFLOWER_BLUE, GOLD, MUTED_GRAY, PANEL_BG, SELECTION_GREEN, SOFT_WHITE};
use crate::app::state::PickerState;

pub struct AvatarPickerComponent;

impl AvatarPickerComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, picker: &PickerState) {
        let popup = centered_rect(70, 60, area);
        frame.render_widget(Clear, popup);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(CORNFLOWER_BLUE))
            .style(Style::default().bg(PANEL_BG))
            .title(format!(" Select {} ", picker.category.label()))
            .title_style(Style::default().fg(GOLD).add_modifier(Modifier::BOLD));

        let inner = block.inner(popup);
        frame.render_widget(block, popup);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(1)])
            .split(inner);

        let items: Vec<ListItem> = picker
            .entries
            .iter()
            .map(|entry| {
                let mut lines = vec![Line::from(Span::styled(
                    entry.title.clone(),
                    Style::default().fg(SOFT_WHITE).add_modifier(Modifier::BOLD),
                ))];
                if !entry.subtitle.is_empty() {
                    lines.push(Line::from(Span::styled(
                        format!("  {}", entry.subtitle),
                        Style::default().fg(MUTED_GRAY),
                    )));
                }
                ListItem::new(lines)
            })
            .collect();

        let list = List::new(items)
            .highlight_style(Style::default().fg(SELECTION_GREEN).add_modifier(Modifier::BOLD))
            .highlight_symbol("▶ ");

        let mut list_state = ListState::default();
        list_state.select(Some(picker.selected_index));
        frame.render_stateful_widget(list, chunks[0], &mut list_state);

        let hint = Paragraph::new(Span::styled(
            "↑/↓ move • Enter select • Esc cancel",
            Style::default().fg(MUTED_GRAY),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(hint, chunks[1]);
    }
}

impl Default for AvatarPickerComponent {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper function to create a centered rectangle
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
