//! Editor rendering.

use super::model::Model;
use super::types::Focus;
use crate::key::short_help_line;
use lipgloss_extras::lipgloss;
use lipgloss_extras::prelude::*;
use unicode_segmentation::UnicodeSegmentation;

/// Title shown above the text area.
pub const TITLE: &str = "Emoji Textbox";

/// Alert shown after a successful copy.
pub const COPIED_ALERT: &str = "Copied to clipboard";

/// Editor styles.
#[derive(Debug, Clone)]
pub struct Styles {
    /// Title bar.
    pub title: Style,
    /// Frame around the text area.
    pub text_area: Style,
    /// Frame around the text area while it has focus.
    pub text_area_focused: Style,
    /// Placeholder in the empty text area.
    pub placeholder: Style,
    /// The cursor cell.
    pub cursor: Style,
    /// Character counter.
    pub counter: Style,
    /// Character counter past the limit.
    pub counter_over: Style,
    /// Picker toggle.
    pub toggle: Style,
    /// Search prompt and input.
    pub search: Style,
    /// Search input hint while empty.
    pub search_hint: Style,
    /// A result glyph.
    pub result: Style,
    /// The highlighted result glyph.
    pub selected_result: Style,
    /// "no results" and "error".
    pub sentinel: Style,
    /// The copy alert.
    pub alert: Style,
    /// Help line.
    pub help: Style,
}

impl Default for Styles {
    fn default() -> Self {
        let subdued = AdaptiveColor {
            Light: "#9B9B9B",
            Dark: "#5C5C5C",
        };
        Self {
            title: Style::new()
                .background(Color::from("62"))
                .foreground(Color::from("230"))
                .padding(0, 1, 0, 1),
            text_area: Style::new()
                .border_style(lipgloss::normal_border())
                .border_left(true)
                .border_left_foreground(Color::from("#5C5C5C"))
                .padding(0, 0, 0, 1),
            text_area_focused: Style::new()
                .border_style(lipgloss::normal_border())
                .border_left(true)
                .border_left_foreground(Color::from("#AD58B4"))
                .padding(0, 0, 0, 1),
            placeholder: Style::new().foreground(subdued.clone()),
            cursor: Style::new()
                .background(Color::from("#EE6FF8"))
                .foreground(Color::from("#1A1A1A")),
            counter: Style::new().foreground(subdued.clone()),
            counter_over: Style::new().foreground(AdaptiveColor {
                Light: "#D9534F",
                Dark: "#FF6B6B",
            }),
            toggle: Style::new().padding(0, 1, 0, 1),
            search: Style::new(),
            search_hint: Style::new().foreground(subdued.clone()),
            result: Style::new(),
            selected_result: Style::new().background(AdaptiveColor {
                Light: "#E8D9EA",
                Dark: "#5A3E5D",
            }),
            sentinel: Style::new().foreground(subdued),
            alert: Style::new().foreground(AdaptiveColor {
                Light: "#04B575",
                Dark: "#ECFD65",
            }),
            help: Style::new().foreground(AdaptiveColor {
                Light: "#909090",
                Dark: "#626262",
            }),
        }
    }
}

impl Model {
    /// Renders the editor.
    pub fn view(&self) -> String {
        let mut sections = vec![self.styles.title.render(TITLE), self.text_area_view()];
        sections.push(self.status_view());
        sections.push(self.search_view());
        if !self.results.is_empty() {
            sections.push(self.results_view());
        }
        if self.picker.visible() {
            sections.push(self.picker.view());
        }
        if self.copied {
            sections.push(self.styles.alert.render(COPIED_ALERT));
        }
        sections.push(self.styles.help.render(&short_help_line(&self.key_map)));
        sections.join("\n")
    }

    fn text_area_view(&self) -> String {
        let editing = self.focused && self.focus == Focus::Text;
        let frame = if editing {
            &self.styles.text_area_focused
        } else {
            &self.styles.text_area
        };

        if self.text.is_empty() {
            let placeholder = self.styles.placeholder.render(&self.config.placeholder);
            let body = if editing {
                format!("{}{}", self.styles.cursor.render(" "), placeholder)
            } else {
                placeholder
            };
            return frame.render(&body);
        }

        if !editing {
            return frame.render(&self.text);
        }

        let (before, rest) = self.text.split_at(self.cursor);
        let mut body = before.to_string();
        match rest.graphemes(true).next() {
            None => body.push_str(&self.styles.cursor.render(" ")),
            Some("\n") => {
                body.push_str(&self.styles.cursor.render(" "));
                body.push_str(rest);
            }
            Some(under) => {
                body.push_str(&self.styles.cursor.render(under));
                body.push_str(&rest[under.len()..]);
            }
        }
        frame.render(&body)
    }

    fn status_view(&self) -> String {
        let count = self.char_count();
        let counter = format!("{}/{}", count, self.config.max_chars);
        let counter = if count > self.config.max_chars {
            self.styles.counter_over.render(&counter)
        } else {
            self.styles.counter.render(&counter)
        };
        let glyph = if self.picker.visible() { "✕" } else { "😊" };
        format!("{} {}", counter, self.styles.toggle.render(&format!("[{}]", glyph)))
    }

    fn search_view(&self) -> String {
        let editing = self.focused && self.focus == Focus::Search;
        let mut line = String::from("🔍 ");
        if self.search_query.is_empty() && !editing {
            line.push_str(&self.styles.search_hint.render("Search emoji"));
        } else {
            line.push_str(&self.styles.search.render(&self.search_query));
            if editing {
                line.push_str(&self.styles.cursor.render(" "));
            }
        }
        if self.search_pending {
            line.push(' ');
            line.push_str(&self.spinner.view());
        }
        line
    }

    fn results_view(&self) -> String {
        if !self.results_selectable() {
            return self
                .results
                .iter()
                .map(|s| self.styles.sentinel.render(s))
                .collect::<Vec<_>>()
                .join(" ");
        }
        let browsing = self.focused && self.focus == Focus::Results;
        self.results
            .iter()
            .enumerate()
            .map(|(i, glyph)| {
                if browsing && i == self.result_cursor {
                    self.styles.selected_result.render(glyph)
                } else {
                    self.styles.result.render(glyph)
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}
