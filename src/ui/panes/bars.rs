//! Bar chart of the sequence

use crate::ui::paint::{self, BarPaint, Shade};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

fn shade_color(shade: Shade) -> Color {
    match shade {
        Shade::Primary => DEFAULT_THEME.primary,
        Shade::Secondary => DEFAULT_THEME.secondary,
        Shade::Band(band) => DEFAULT_THEME.gradients[band % DEFAULT_THEME.gradients.len()],
    }
}

/// Render the sequence as bars, scaled between the sequence bounds.
///
/// `span` is the distance between the sequence minimum and maximum. When
/// there are more values than columns, neighbouring values share a column.
pub fn render_bars_pane(frame: &mut Frame, area: Rect, paints: &[BarPaint], span: u64) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border));

    if paints.is_empty() {
        let paragraph = Paragraph::new("(empty list)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let inner_width = usize::from(area.width.saturating_sub(2));
    let columns = paint::fit_to_width(paints, inner_width);
    let bar_width = u16::try_from(inner_width / columns.len())
        .unwrap_or(u16::MAX)
        .max(1);

    // The minimum keeps a one-cell stub so every position stays visible
    let bars: Vec<Bar> = columns
        .iter()
        .map(|column| {
            Bar::default()
                .value(column.height + 1)
                .text_value(String::new())
                .style(Style::default().fg(shade_color(column.shade)))
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(0)
        .max(span + 1);

    frame.render_widget(chart, area);
}
