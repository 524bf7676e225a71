//! Color themes for the UI.

use crate::home::Theme;
use ratatui::style::Color;

/// Theme color palette.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    /// Page background color.
    pub bg: Color,
    /// Primary text color.
    pub text: Color,
    /// Dimmed text, e.g. disabled buttons and the date line.
    pub muted: Color,
    /// Accent color for focus and selection.
    pub accent: Color,
    /// Toolbar background color.
    pub toolbar_bg: Color,
    /// Address field background color.
    pub field_bg: Color,
    /// Border color.
    pub border: Color,
    /// Selected tile foreground color.
    pub cursor_fg: Color,
    /// Selected tile background color.
    pub cursor_bg: Color,
    /// Status bar foreground color.
    pub status_fg: Color,
    /// Status bar background color.
    pub status_bg: Color,
}

impl ThemeColors {
    /// Create color palette from theme.
    pub fn from_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                bg: Color::Rgb(30, 30, 30),
                text: Color::Rgb(224, 224, 224),
                muted: Color::Rgb(128, 128, 128),
                accent: Color::Rgb(0, 120, 212),
                toolbar_bg: Color::Rgb(45, 45, 45),
                field_bg: Color::Rgb(64, 64, 64),
                border: Color::Rgb(85, 85, 85),
                cursor_fg: Color::Rgb(255, 255, 255),
                cursor_bg: Color::Rgb(0, 120, 212),
                status_fg: Color::Rgb(224, 224, 224),
                status_bg: Color::Rgb(64, 64, 64),
            },
            Theme::Light => Self {
                bg: Color::Rgb(245, 245, 247),
                text: Color::Rgb(51, 51, 51),
                muted: Color::Rgb(150, 150, 150),
                accent: Color::Rgb(0, 122, 255),
                toolbar_bg: Color::Rgb(249, 249, 249),
                field_bg: Color::Rgb(253, 253, 253),
                border: Color::Rgb(204, 204, 204),
                cursor_fg: Color::Rgb(255, 255, 255),
                cursor_bg: Color::Rgb(0, 122, 255),
                status_fg: Color::Rgb(51, 51, 51),
                status_bg: Color::Rgb(232, 232, 232),
            },
        }
    }
}
