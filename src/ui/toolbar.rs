//! Toolbar row: navigation buttons and the address field.

use super::ThemeColors;
use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthChar;

/// Draw the toolbar.
pub(super) fn draw_toolbar(f: &mut Frame<'_>, app: &App, area: Rect, colors: &ThemeColors) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(16), Constraint::Min(10), Constraint::Length(5)])
        .split(area);

    let controls = app.toolbar.controls();
    let button = |label: &'static str, enabled: bool| {
        let style = if enabled {
            Style::default().fg(colors.text).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(colors.muted)
        };
        Span::styled(format!(" {} ", label), style)
    };

    let buttons = Line::from(vec![
        button("←", controls.back_enabled),
        button("→", controls.forward_enabled),
        button("⟳", true),
        button("⌂", true),
    ]);
    f.render_widget(
        Paragraph::new(buttons).style(Style::default().bg(colors.toolbar_bg)),
        chunks[0],
    );

    draw_address(f, app, chunks[1], colors);

    let theme_icon = if app.theme().is_dark() { "☀" } else { "☾" };
    f.render_widget(
        Paragraph::new(Line::from(button(theme_icon, true))).style(Style::default().bg(colors.toolbar_bg)),
        chunks[2],
    );
}

fn draw_address(f: &mut Frame<'_>, app: &App, area: Rect, colors: &ThemeColors) {
    let address = app.toolbar.address();
    let inner_width = area.width.saturating_sub(2) as usize;

    let (text, style) = if address.is_editing() {
        let style = if address.is_selected() {
            Style::default().fg(colors.cursor_fg).bg(colors.accent)
        } else {
            Style::default().fg(colors.text)
        };
        (format!("{}▏", tail_to_width(address.text(), inner_width.saturating_sub(1))), style)
    } else if address.text().is_empty() {
        (
            "Search or enter website name".to_string(),
            Style::default().fg(colors.muted),
        )
    } else {
        (tail_to_width(address.text(), inner_width), Style::default().fg(colors.text))
    };

    let border = if address.is_editing() {
        colors.accent
    } else {
        colors.border
    };

    let field = Paragraph::new(Line::from(Span::styled(text, style))).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .style(Style::default().bg(colors.field_bg)),
    );
    f.render_widget(field, area);
}

/// Keep the end of `text` that fits in `width` terminal columns.
fn tail_to_width(text: &str, width: usize) -> String {
    let mut used = 0;
    let mut start = text.len();
    for (idx, c) in text.char_indices().rev() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        start = idx;
    }
    text[start..].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tail_fits_width() {
        assert_eq!(tail_to_width("https://example.com", 11), "example.com");
        assert_eq!(tail_to_width("short", 20), "short");
        assert_eq!(tail_to_width("abc", 0), "");
    }

    #[test]
    fn tail_counts_wide_chars() {
        assert_eq!(tail_to_width("a📺b", 2), "b");
        assert_eq!(tail_to_width("a📺b", 3), "📺b");
    }
}
