//! Viewer pane for pages the terminal cannot render.

use super::ThemeColors;
use crate::app::App;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the viewer pane.
pub(super) fn draw_page(f: &mut Frame<'_>, app: &App, area: Rect, colors: &ThemeColors) {
    let viewer = app.toolbar.viewer();
    let location = viewer.location().unwrap_or("about:blank");
    let history = app.toolbar.history();

    let state = if viewer.is_loading() { "Loading" } else { "Loaded" };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            location.to_string(),
            Style::default().fg(colors.accent).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "{} · page {} of {} · {} loads",
                state,
                history.cursor() + 1,
                history.len(),
                viewer.load_count()
            ),
            Style::default().fg(colors.muted),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.border))
                .style(Style::default().bg(colors.bg).fg(colors.text)),
        );

    f.render_widget(paragraph, area);
}
