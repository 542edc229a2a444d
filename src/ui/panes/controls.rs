//! Clickable control bar

use crate::engine::{Algorithm, Direction};
use crate::ui::input::Button;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
    Frame,
};

/// Render pre-laid-out buttons, marking the current selections
pub fn render_controls(
    frame: &mut Frame,
    buttons: &[(Button, Rect)],
    algorithm: Algorithm,
    direction: Direction,
    locked: bool,
) {
    for (button, rect) in buttons {
        let selected = match button {
            Button::Algorithm(a) => *a == algorithm,
            Button::Ascending => direction == Direction::Ascending,
            Button::Descending => direction == Direction::Descending,
            _ => false,
        };

        let bg = if selected {
            DEFAULT_THEME.button_active
        } else {
            DEFAULT_THEME.button
        };
        let mut style = Style::default().bg(bg).fg(Color::Black);
        if selected {
            style = style.add_modifier(Modifier::BOLD);
        }
        // Everything but New List is rejected during a run
        if locked && *button != Button::NewList {
            style = style.add_modifier(Modifier::DIM);
        }

        let paragraph = Paragraph::new(button.label())
            .style(style)
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, *rect);
    }
}
