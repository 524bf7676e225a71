//! User interface rendering.

mod home;
mod keymap_bar;
mod page;
mod status_bar;
mod theme;
mod toolbar;

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

pub use keymap_bar::KeymapMode;
pub use theme::ThemeColors;

/// Draw the UI.
pub fn draw(f: &mut Frame<'_>, app: &mut App) {
    let colors = ThemeColors::from_theme(app.theme());

    // Toolbar, content, status bar and key map bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    toolbar::draw_toolbar(f, app, chunks[0], &colors);

    if app.showing_home() {
        home::draw_home(f, app, chunks[1], &colors);
    } else {
        page::draw_page(f, app, chunks[1], &colors);
    }

    status_bar::draw_status(f, chunks[2], &app.status, &app.command, &colors);
    keymap_bar::draw_keymap(f, chunks[3], keymap_mode(app), &colors);
}

/// Pick the help text for whatever has focus.
pub fn keymap_mode(app: &App) -> KeymapMode {
    if app.toolbar.address().is_editing() || app.home.is_searching() || app.command.is_active() {
        KeymapMode::Editing
    } else if app.showing_home() {
        KeymapMode::Home
    } else {
        KeymapMode::Page
    }
}
