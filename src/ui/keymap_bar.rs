//! Keymap help bar UI component.

use crate::ui::ThemeColors;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

/// Which input currently has focus, for picking the help text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeymapMode {
    /// Viewer pane.
    Page,
    /// Home surface grid.
    Home,
    /// Address field, home search box or command line.
    Editing,
}

/// Draw the keymap help bar.
pub(super) fn draw_keymap(f: &mut Frame<'_>, area: Rect, mode: KeymapMode, colors: &ThemeColors) {
    let keymap_text = match mode {
        KeymapMode::Editing => "Enter:go | Esc:cancel | Type to edit",
        KeymapMode::Home => {
            "q:quit | hjkl/arrows:select | Enter:open | /:search | o:address | T:theme | ::command"
        },
        KeymapMode::Page => {
            "q:quit | o:address | H/L:back/fwd | r:reload | g:home | y:copy | T:theme | ::command"
        },
    };

    let paragraph =
        Paragraph::new(keymap_text).style(Style::default().fg(colors.muted).bg(colors.bg));

    f.render_widget(paragraph, area);
}
