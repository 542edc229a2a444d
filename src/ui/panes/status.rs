//! Status bar rendering with keybindings and run state indicator

use crate::driver::RunState;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use std::time::Duration;

/// Data needed to render the status bar
pub struct StatusRenderData<'a> {
    pub message: &'a str,
    pub steps: usize,
    pub len: usize,
    pub state: RunState,
    pub tick: Duration,
}

/// Render the status bar at the bottom
pub fn render_status_bar(frame: &mut Frame, area: Rect, data: StatusRenderData) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let badge_bg = match data.state {
        RunState::Idle => DEFAULT_THEME.comment,
        RunState::Running => DEFAULT_THEME.accent,
        RunState::Complete => DEFAULT_THEME.success,
    };

    let left_spans = vec![
        Span::styled(
            format!(" Step {} ", data.steps),
            Style::default()
                .bg(badge_bg)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" n={} ", data.len),
            Style::default()
                .bg(DEFAULT_THEME.status_bg)
                .fg(DEFAULT_THEME.comment),
        ),
        Span::styled(
            " | ",
            Style::default()
                .bg(DEFAULT_THEME.status_bg)
                .fg(DEFAULT_THEME.comment),
        ),
        Span::styled(
            format!(" {} ", data.message),
            Style::default()
                .bg(DEFAULT_THEME.status_bg)
                .fg(DEFAULT_THEME.fg),
        ),
    ];

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.status_bg))
        .alignment(Alignment::Left);
    frame.render_widget(left_paragraph, layout[0]);

    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.status_bg)
        .fg(DEFAULT_THEME.fg);
    let sep_style = Style::default()
        .bg(DEFAULT_THEME.status_bg)
        .fg(DEFAULT_THEME.comment);

    let mut right_spans = vec![
        Span::styled(" [ / ] ", key_style),
        Span::styled(format!(" {}ms ", data.tick.as_millis()), desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" esc ", key_style),
        Span::styled(" quit ", desc_style),
        Span::styled("│", sep_style),
    ];

    let (label, bg) = match data.state {
        RunState::Idle => (" IDLE ", DEFAULT_THEME.comment),
        RunState::Running => (" ▶ SORTING ", DEFAULT_THEME.accent),
        RunState::Complete => (" DONE ", DEFAULT_THEME.success),
    };
    right_spans.push(Span::styled(
        label,
        Style::default()
            .bg(bg)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD),
    ));

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(DEFAULT_THEME.status_bg))
        .alignment(Alignment::Right);
    frame.render_widget(right_paragraph, layout[1]);
}
