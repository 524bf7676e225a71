//! Home surface rendering: clock, search box and bookmark grid.

use super::ThemeColors;
use crate::app::App;
use crate::home::HomeSurface;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Terminal columns taken by one bookmark tile.
const TILE_WIDTH: u16 = 16;
/// Terminal rows taken by one bookmark tile.
const TILE_HEIGHT: u16 = 4;

/// Draw the home surface.
pub(super) fn draw_home(f: &mut Frame<'_>, app: &mut App, area: Rect, colors: &ThemeColors) {
    let block = Block::default().style(Style::default().bg(colors.bg));
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    draw_clock(f, &app.home, chunks[1], colors);
    draw_search(f, &app.home, centered(chunks[3], 60), colors);
    draw_grid(f, &mut app.home, chunks[5], colors);
}

fn draw_clock(f: &mut Frame<'_>, home: &HomeSurface, area: Rect, colors: &ThemeColors) {
    // No display, nothing to draw.
    let Some(clock) = home.clock() else {
        return;
    };

    let lines = vec![
        Line::from(Span::styled(
            clock.time.clone(),
            Style::default().fg(colors.text).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(clock.date.clone(), Style::default().fg(colors.muted))),
    ];
    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn draw_search(f: &mut Frame<'_>, home: &HomeSurface, area: Rect, colors: &ThemeColors) {
    let (text, style, border) = if home.is_searching() {
        (
            format!("{}▏", home.search_text()),
            Style::default().fg(colors.text),
            colors.accent,
        )
    } else {
        (
            "Search or enter website URL  (/)".to_string(),
            Style::default().fg(colors.muted),
            colors.border,
        )
    };

    let search = Paragraph::new(Line::from(Span::styled(text, style))).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .style(Style::default().bg(colors.field_bg)),
    );
    f.render_widget(search, area);
}

fn draw_grid(f: &mut Frame<'_>, home: &mut HomeSurface, area: Rect, colors: &ThemeColors) {
    if area.width < TILE_WIDTH || area.height < TILE_HEIGHT {
        return;
    }

    let columns = (area.width / TILE_WIDTH).max(1);
    home.grid_mut()
        .set_columns((columns as usize).min(crate::home::bookmarks::DEFAULT_COLUMNS));

    let grid = home.grid();
    let columns = grid.columns() as u16;
    let grid_width = columns * TILE_WIDTH;
    let left = area.x + area.width.saturating_sub(grid_width) / 2;

    for (idx, tile) in grid.tiles().iter().enumerate() {
        let row = idx as u16 / columns;
        let col = idx as u16 % columns;
        let y = area.y + row * TILE_HEIGHT;
        if y + TILE_HEIGHT > area.y + area.height {
            break;
        }
        let cell = Rect::new(left + col * TILE_WIDTH, y, TILE_WIDTH, TILE_HEIGHT);

        let (style, border) = if idx == grid.cursor() {
            (
                Style::default()
                    .fg(colors.cursor_fg)
                    .bg(colors.cursor_bg)
                    .add_modifier(Modifier::BOLD),
                colors.accent,
            )
        } else {
            (Style::default().fg(colors.text).bg(colors.bg), colors.border)
        };

        let lines = vec![Line::from(tile.glyph), Line::from(tile.label)];
        let widget = Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border))
                .style(style),
        );
        f.render_widget(widget, cell);
    }
}

/// A horizontally centered slice of `area` at most `width` wide.
fn centered(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect::new(area.x + (area.width - width) / 2, area.y, width, area.height)
}
