//! Title and control help lines

use crate::engine::{Algorithm, Direction};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const CONTROLS_HELP: &str =
    "R - Reset | SPACE - Start Sorting | A - Ascending | D - Descending | Size - + or -";
const ALGORITHMS_HELP: &str =
    "I - Insertion | B - Bubble | S - Selection | M - Merge | Q - Quick | X - Shaker | H - Heap";

/// Lines the header occupies
pub const HEADER_HEIGHT: u16 = 3;

pub fn render_header(frame: &mut Frame, area: Rect, algorithm: Algorithm, direction: Direction) {
    let lines = vec![
        Line::from(Span::styled(
            format!("{} - {}", algorithm.name(), direction.label()),
            Style::default()
                .fg(DEFAULT_THEME.title)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            CONTROLS_HELP,
            Style::default().fg(DEFAULT_THEME.help),
        )),
        Line::from(Span::styled(
            ALGORITHMS_HELP,
            Style::default().fg(DEFAULT_THEME.legend),
        )),
    ];

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
