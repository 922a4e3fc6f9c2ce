//! Picker colors.
//!
//! [`Theme::Auto`] uses adaptive colors that follow the terminal background;
//! the explicit themes pin one side of each pair.

use crate::config::Theme;
use lipgloss_extras::lipgloss;
use lipgloss_extras::prelude::*;

/// Styles for every part of the picker.
#[derive(Debug, Clone)]
pub struct Styles {
    /// Frame around the whole picker.
    pub frame: Style,
    /// Inactive category tab.
    pub tab: Style,
    /// Active category tab.
    pub active_tab: Style,
    /// Category title above the grid.
    pub title: Style,
    /// A grid cell.
    pub cell: Style,
    /// The highlighted cell.
    pub selected_cell: Style,
    /// Name of the highlighted emoji.
    pub preview: Style,
    /// Loading and empty-category notices.
    pub muted: Style,
}

fn fg(style: Style, theme: Theme, light: &'static str, dark: &'static str) -> Style {
    match theme {
        Theme::Auto => style.foreground(AdaptiveColor {
            Light: light,
            Dark: dark,
        }),
        Theme::Light => style.foreground(Color::from(light)),
        Theme::Dark => style.foreground(Color::from(dark)),
    }
}

fn bg(style: Style, theme: Theme, light: &'static str, dark: &'static str) -> Style {
    match theme {
        Theme::Auto => style.background(AdaptiveColor {
            Light: light,
            Dark: dark,
        }),
        Theme::Light => style.background(Color::from(light)),
        Theme::Dark => style.background(Color::from(dark)),
    }
}

impl Styles {
    /// Styles for `theme`.
    pub fn for_theme(theme: Theme) -> Self {
        Self {
            frame: Style::new()
                .border_style(lipgloss::normal_border())
                .border_left(true)
                .border_left_foreground(Color::from("#874BFD"))
                .padding(0, 0, 0, 1),
            tab: fg(Style::new().padding(0, 1, 0, 0), theme, "#9B9B9B", "#5C5C5C"),
            active_tab: fg(
                Style::new().underline(true).padding(0, 1, 0, 0),
                theme,
                "#AD58B4",
                "#EE6FF8",
            ),
            title: fg(Style::new().bold(true), theme, "#1A1A1A", "#DDDDDD"),
            cell: Style::new(),
            selected_cell: bg(Style::new(), theme, "#E8D9EA", "#5A3E5D"),
            preview: fg(Style::new(), theme, "#847A85", "#979797"),
            muted: fg(Style::new(), theme, "#909090", "#626262"),
        }
    }
}

impl Default for Styles {
    fn default() -> Self {
        Self::for_theme(Theme::Auto)
    }
}
