//! Picker rendering.

use super::model::Model;
use super::types::LoadState;
use crate::emoji::{self, Category};
use unicode_width::UnicodeWidthStr;

// Emoji render two columns wide; narrower glyphs get padded.
fn cell(glyph: &str) -> String {
    let width = UnicodeWidthStr::width(glyph);
    if width < 2 {
        format!("{}{}", glyph, " ".repeat(2 - width))
    } else {
        glyph.to_string()
    }
}

impl Model {
    /// Renders the picker, or an empty string while hidden.
    pub fn view(&self) -> String {
        if !self.visible {
            return String::new();
        }
        let body = match self.state {
            LoadState::Unloaded | LoadState::Loading => {
                format!("{} {}", self.spinner.view(), self.styles.muted.render("Loading..."))
            }
            LoadState::Ready => self.grid_view(),
        };
        self.styles.frame.render(&body)
    }

    fn tabs_view(&self) -> String {
        self.categories
            .iter()
            .enumerate()
            .map(|(i, c)| {
                if i == self.active {
                    self.styles.active_tab.render(c.icon())
                } else {
                    self.styles.tab.render(c.icon())
                }
            })
            .collect::<Vec<_>>()
            .join("")
    }

    fn grid_view(&self) -> String {
        let mut lines = vec![self.tabs_view()];
        let Some(category) = self.active_category() else {
            return lines.join("\n");
        };
        lines.push(self.styles.title.render(category.title()));

        let items = self.items();
        if items.is_empty() {
            let notice = if category == Category::Frequent {
                "Nothing used yet"
            } else {
                "No emojis"
            };
            lines.push(self.styles.muted.render(notice));
            return lines.join("\n");
        }

        let per_line = self.per_line.max(1);
        let rows = self.rows.max(1);
        let cursor_row = self.cursor / per_line;
        let first_row = cursor_row.saturating_sub(rows - 1);

        for (row, chunk) in items.chunks(per_line).enumerate().skip(first_row).take(rows) {
            let line = chunk
                .iter()
                .enumerate()
                .map(|(col, glyph)| {
                    if row * per_line + col == self.cursor && self.focus {
                        self.styles.selected_cell.render(&cell(glyph))
                    } else {
                        self.styles.cell.render(&cell(glyph))
                    }
                })
                .collect::<Vec<_>>()
                .join(" ");
            lines.push(line);
        }

        if let Some(selected) = self.selected() {
            let preview = match emoji::dataset().by_native(&selected) {
                Some(e) => format!("{} {}  :{}:", selected, e.name, e.id),
                None => selected,
            };
            lines.push(self.styles.preview.render(&preview));
        }
        lines.join("\n")
    }
}
