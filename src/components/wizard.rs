// ABOUTME: Avatar-selection wizard screen
// Header with step dots and progress gauge, per-step body, notice line and key hints

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Gauge, Paragraph, Wrap},
    Frame,
};

use super::theme::{
    CORNFLOWER_BLUE, DARK_BG, ERROR_RED, GOLD, MUTED_GRAY, PANEL_BG, SELECTION_GREEN, SOFT_WHITE,
    SUBDUED_BORDER, WARNING_YELLOW,
};
use crate::app::state::{category_for_step, AppState};
use crate::catalog::Category;
use crate::flow::WizardStep;

/// The main wizard component
pub struct WizardComponent;

impl WizardComponent {
    pub fn new() -> Self {
        Self
    }

    /// Main render function
    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        frame.render_widget(Clear, area);
        frame.render_widget(Block::default().style(Style::default().bg(DARK_BG)), area);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(6), // Header with progress
                Constraint::Min(8),    // Step content
                Constraint::Length(1), // Notice
                Constraint::Length(3), // Navigation footer
            ])
            .split(area);

        self.render_header(frame, layout[0], state);
        self.render_step_content(frame, layout[1], state);
        self.render_notice(frame, layout[2], state);
        self.render_navigation(frame, layout[3], state);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(CORNFLOWER_BLUE))
            .style(Style::default().bg(PANEL_BG));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let header_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title
                Constraint::Length(1), // Step dots
                Constraint::Length(1), // Gauge
            ])
            .split(inner);

        let title = Paragraph::new(Line::from(vec![Span::styled(
            "Narrative Builder · Avatar Selection",
            Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
        )]))
        .alignment(Alignment::Center);
        frame.render_widget(title, header_layout[0]);

        self.render_step_dots(frame, header_layout[1], state.wizard.current_step());

        if state.show_progress_percent {
            let progress = state.wizard.step_progress();
            let gauge = Gauge::default()
                .gauge_style(Style::default().fg(SELECTION_GREEN).bg(DARK_BG))
                .percent(u16::from(progress))
                .label(format!("{progress}%"));
            frame.render_widget(gauge, header_layout[2]);
        }
    }

    fn render_step_dots(&self, frame: &mut Frame, area: Rect, current: WizardStep) {
        let steps = WizardStep::all();
        let current_idx = current.index();

        let mut spans = Vec::new();
        for (idx, step) in steps.iter().enumerate() {
            let (icon, style) = if idx < current_idx {
                ("●", Style::default().fg(SELECTION_GREEN))
            } else if idx == current_idx {
                ("◉", Style::default().fg(GOLD).add_modifier(Modifier::BOLD))
            } else {
                ("○", Style::default().fg(MUTED_GRAY))
            };

            spans.push(Span::styled(icon, style));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(
                step.title(),
                if idx == current_idx {
                    Style::default().fg(SOFT_WHITE)
                } else {
                    Style::default().fg(MUTED_GRAY)
                },
            ));

            if idx < steps.len() - 1 {
                spans.push(Span::styled(" → ", Style::default().fg(SUBDUED_BORDER)));
            }
        }

        frame.render_widget(
            Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
            area,
        );
    }

    fn render_step_content(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let step = state.wizard.current_step();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(CORNFLOWER_BLUE))
            .style(Style::default().bg(PANEL_BG))
            .title(format!(" {} ", step.description()))
            .title_style(Style::default().fg(GOLD).add_modifier(Modifier::BOLD));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let lines = match step {
            WizardStep::Welcome => Self::welcome_lines(),
            WizardStep::Church | WizardStep::Community | WizardStep::Companion => {
                Self::selection_lines(state, step)
            }
            WizardStep::Confirmation => {
                let mut lines = vec![
                    Line::from(Span::styled(
                        "Review your selections before continuing:",
                        Style::default().fg(SOFT_WHITE),
                    )),
                    Line::from(""),
                ];
                lines.extend(Self::summary_lines(state));
                lines
            }
            WizardStep::Complete => {
                let mut lines = vec![
                    Line::from(Span::styled(
                        "All three selections are in place.",
                        Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
                    )),
                    Line::from(""),
                ];
                lines.extend(Self::summary_lines(state));
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    "Press r to review your selections and continue",
                    Style::default().fg(MUTED_GRAY),
                )));
                lines
            }
        };

        let body = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .alignment(Alignment::Left);

        let padded = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([Constraint::Min(1)])
            .split(inner);
        frame.render_widget(body, padded[0]);
    }

    fn welcome_lines() -> Vec<Line<'static>> {
        let description = [
            "You'll choose the voices that shape your congregation's narrative:",
            "",
            "  • A Church Avatar that speaks for your congregation",
            "  • A Community Avatar that speaks for your neighborhood",
            "  • A Companion to guide the conversation",
            "",
            "Press Enter or → to begin",
        ];

        description
            .into_iter()
            .map(|line| {
                if let Some(rest) = line.strip_prefix("  • ") {
                    Line::from(vec![
                        Span::raw("  "),
                        Span::styled("• ", Style::default().fg(GOLD)),
                        Span::styled(rest, Style::default().fg(SOFT_WHITE)),
                    ])
                } else {
                    Line::from(Span::styled(line, Style::default().fg(MUTED_GRAY)))
                }
            })
            .collect()
    }

    fn selection_lines(state: &AppState, step: WizardStep) -> Vec<Line<'static>> {
        let Some(category) = category_for_step(step) else {
            return Vec::new();
        };

        let mut lines = Vec::new();
        match Self::selected_name(state, category) {
            Some((name, detail)) => {
                lines.push(Line::from(vec![
                    Span::styled("✓ ", Style::default().fg(SELECTION_GREEN)),
                    Span::styled(name, Style::default().fg(SOFT_WHITE).add_modifier(Modifier::BOLD)),
                ]));
                if !detail.is_empty() {
                    lines.push(Line::from(Span::styled(
                        format!("  {detail}"),
                        Style::default().fg(MUTED_GRAY),
                    )));
                }
                lines.push(Line::from(Span::styled(
                    "  Selection confirmed",
                    Style::default().fg(MUTED_GRAY),
                )));
            }
            None => {
                lines.push(Line::from(Span::styled(
                    format!("No {} selected yet.", category.label().to_lowercase()),
                    Style::default().fg(WARNING_YELLOW),
                )));
            }
        }

        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("Press ", Style::default().fg(MUTED_GRAY)),
            Span::styled("s", Style::default().fg(GOLD).add_modifier(Modifier::BOLD)),
            Span::styled(
                format!(" to select / change {}", category.label()),
                Style::default().fg(MUTED_GRAY),
            ),
        ]));
        lines
    }

    fn selected_name(state: &AppState, category: Category) -> Option<(String, String)> {
        let store = &state.selections;
        match category {
            Category::Church => store
                .church_avatar()
                .map(|a| (a.display_name().to_string(), a.avatar_point_of_view.clone())),
            Category::Community => store
                .community_avatar()
                .map(|a| (a.display_name().to_string(), a.avatar_point_of_view.clone())),
            Category::Companion => store
                .companion()
                .map(|c| (c.companion.clone(), c.companion_type.clone())),
        }
    }

    fn summary_lines(state: &AppState) -> Vec<Line<'static>> {
        [Category::Church, Category::Community, Category::Companion]
            .into_iter()
            .map(|category| {
                let (icon, color, value) = match Self::selected_name(state, category) {
                    Some((name, _)) => ("  ✓ ", SELECTION_GREEN, name),
                    None => ("  ✗ ", ERROR_RED, "not selected".to_string()),
                };
                Line::from(vec![
                    Span::styled(icon, Style::default().fg(color)),
                    Span::styled(format!("{}: ", category.label()), Style::default().fg(SOFT_WHITE)),
                    Span::styled(value, Style::default().fg(MUTED_GRAY)),
                ])
            })
            .collect()
    }

    fn render_notice(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let Some(notice) = &state.notice else {
            return;
        };
        let color = if state.wizard.validate_current_step() {
            SELECTION_GREEN
        } else {
            ERROR_RED
        };
        let widget = Paragraph::new(Span::styled(notice.clone(), Style::default().fg(color)))
            .alignment(Alignment::Center);
        frame.render_widget(widget, area);
    }

    /// Render navigation footer
    fn render_navigation(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let block = Block::default()
            .borders(Borders::TOP)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(SUBDUED_BORDER))
            .style(Style::default().bg(DARK_BG));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut spans = vec![Span::raw("  ")];
        let hint = |spans: &mut Vec<Span<'static>>, key: &'static str, label: String, active: bool| {
            spans.push(Span::styled("[", Style::default().fg(SUBDUED_BORDER)));
            spans.push(Span::styled(
                key,
                Style::default().fg(if active { GOLD } else { MUTED_GRAY }),
            ));
            spans.push(Span::styled("]", Style::default().fg(SUBDUED_BORDER)));
            spans.push(Span::styled(
                format!(" {label}"),
                Style::default().fg(if active { SOFT_WHITE } else { MUTED_GRAY }),
            ));
            spans.push(Span::styled("  |  ", Style::default().fg(SUBDUED_BORDER)));
        };

        if state.wizard.can_go_back() {
            hint(&mut spans, "←", "Back".to_string(), true);
        }

        if category_for_step(state.wizard.current_step()).is_some() {
            hint(&mut spans, "s", "Select".to_string(), true);
        }

        if !state.wizard.current_step().is_terminal() {
            let label = if state.wizard.is_final_step() { "Finish" } else { "Next" };
            hint(
                &mut spans,
                "Enter",
                label.to_string(),
                state.wizard.validate_current_step(),
            );
        }

        spans.push(Span::styled("[", Style::default().fg(SUBDUED_BORDER)));
        spans.push(Span::styled("q", Style::default().fg(GOLD)));
        spans.push(Span::styled("]", Style::default().fg(SUBDUED_BORDER)));
        spans.push(Span::styled(" Quit", Style::default().fg(MUTED_GRAY)));

        let nav = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
        frame.render_widget(nav, inner);
    }
}

impl Default for WizardComponent {
    fn default() -> Self {
        Self::new()
    }
}
