//! Picker state and update loop.

use super::frequent::FrequentTracker;
use super::keymap::{default_key_map, KeyMap};
use super::style::Styles;
use super::types::{EmojiSelectMsg, LoadState, PickerLoadedMsg};
use crate::config::{Config, Theme};
use crate::emoji::{self, Category};
use crate::key::matches_binding;
use crate::spinner;
use crate::Component;
use bubbletea_rs::{batch, Cmd, KeyMsg, Msg};
use std::sync::atomic::{AtomicI64, Ordering};

static LAST_ID: AtomicI64 = AtomicI64::new(0);

fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// Glyphs per grid row.
pub const DEFAULT_PER_LINE: usize = 8;

/// Grid rows shown at once.
pub const DEFAULT_ROWS: usize = 4;

/// A keyboard-driven emoji grid that loads its data on first show.
#[derive(Debug, Clone)]
pub struct Model {
    pub(super) id: i64,
    pub(super) theme: Theme,
    pub(super) categories: Vec<Category>,
    pub(super) state: LoadState,
    pub(super) visible: bool,
    pub(super) focus: bool,
    pub(super) active: usize,
    pub(super) cursor: usize,
    pub(super) frequent: FrequentTracker,
    pub(super) spinner: spinner::Model,
    /// Glyphs per row.
    pub per_line: usize,
    /// Rows visible at once.
    pub rows: usize,
    /// Navigation bindings.
    pub key_map: KeyMap,
    /// Colors.
    pub styles: Styles,
}

impl Default for Model {
    fn default() -> Self {
        Self::new(Theme::Auto, Category::DEFAULT_ORDER.to_vec())
    }
}

impl Model {
    /// Creates a hidden picker. Nothing is loaded until [`Model::show`].
    pub fn new(theme: Theme, categories: Vec<Category>) -> Self {
        let categories = if categories.is_empty() {
            Category::DEFAULT_ORDER.to_vec()
        } else {
            categories
        };
        Self {
            id: next_id(),
            theme,
            categories,
            state: LoadState::Unloaded,
            visible: false,
            focus: false,
            active: 0,
            cursor: 0,
            frequent: FrequentTracker::new(),
            spinner: spinner::Model::new().with_spinner(spinner::DOT.clone()),
            per_line: DEFAULT_PER_LINE,
            rows: DEFAULT_ROWS,
            key_map: default_key_map(),
            styles: Styles::for_theme(theme),
        }
    }

    /// Creates a picker from the editor configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.theme, config.categories.clone())
    }

    /// Identifier stamped on this picker's messages.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Current theme.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Switches theme and rebuilds the styles.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.styles = Styles::for_theme(theme);
    }

    /// Categories in tab order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Lazy-load progress.
    pub fn load_state(&self) -> LoadState {
        self.state
    }

    /// Whether the grid is on screen.
    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Shows the picker. The first call returns the load command.
    pub fn show(&mut self) -> Option<Cmd> {
        self.visible = true;
        if self.state != LoadState::Unloaded {
            return None;
        }
        self.state = LoadState::Loading;
        tracing::debug!(picker = self.id, "loading emoji data");
        Some(batch(vec![self.load_cmd(), self.spinner.start()]))
    }

    pub(super) fn load_cmd(&self) -> Cmd {
        let picker_id = self.id;
        Box::pin(async move {
            let _ = emoji::dataset();
            Some(Box::new(PickerLoadedMsg { picker_id }) as Msg)
        })
    }

    /// Hides the picker and drops focus. Load progress is kept.
    pub fn hide(&mut self) {
        self.visible = false;
        self.focus = false;
    }

    /// The active category.
    pub fn active_category(&self) -> Option<Category> {
        self.categories.get(self.active).copied()
    }

    /// Glyphs in the active category.
    pub fn items(&self) -> Vec<String> {
        match self.active_category() {
            Some(category) => self.items_in(category),
            None => Vec::new(),
        }
    }

    fn items_in(&self, category: Category) -> Vec<String> {
        match category {
            Category::Frequent => self.frequent.glyphs(),
            other => emoji::dataset()
                .in_category(other)
                .into_iter()
                .map(|e| e.native.to_string())
                .collect(),
        }
    }

    /// Index of the highlighted glyph in [`Model::items`].
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The highlighted glyph.
    pub fn selected(&self) -> Option<String> {
        self.items().get(self.cursor).cloned()
    }

    /// Counts one use of `native` towards the frequent category.
    pub fn record_use(&mut self, native: &str) {
        self.frequent.record(native);
        if self.active_category() == Some(Category::Frequent) {
            self.clamp_cursor();
        }
    }

    /// Session usage, most used first.
    pub fn frequent(&self) -> Vec<String> {
        self.frequent.glyphs()
    }

    /// Activates `category` if it is listed.
    pub fn select_category(&mut self, category: Category) {
        if let Some(i) = self.categories.iter().position(|c| *c == category) {
            self.active = i;
            self.cursor = 0;
        }
    }

    fn next_category(&mut self) {
        if !self.categories.is_empty() {
            self.active = (self.active + 1) % self.categories.len();
            self.cursor = 0;
        }
    }

    fn prev_category(&mut self) {
        if !self.categories.is_empty() {
            self.active = (self.active + self.categories.len() - 1) % self.categories.len();
            self.cursor = 0;
        }
    }

    fn clamp_cursor(&mut self) {
        let len = self.items().len();
        if self.cursor >= len {
            self.cursor = len.saturating_sub(1);
        }
    }

    // Start on the first category with something in it.
    fn settle_initial_category(&mut self) {
        if let Some(i) = self
            .categories
            .iter()
            .position(|c| !self.items_in(*c).is_empty())
        {
            self.active = i;
        }
        self.cursor = 0;
    }

    /// Handles load completion, spinner ticks and, while focused, keys.
    pub fn update(&mut self, msg: &Msg) -> Option<Cmd> {
        if let Some(loaded) = msg.downcast_ref::<PickerLoadedMsg>() {
            if loaded.picker_id != self.id || self.state == LoadState::Ready {
                return None;
            }
            self.state = LoadState::Ready;
            self.spinner.stop();
            self.settle_initial_category();
            tracing::debug!(picker = self.id, "emoji data ready");
            return None;
        }

        if msg.is::<spinner::TickMsg>() {
            return self.spinner.update(msg);
        }

        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            if self.visible && self.focus && self.state == LoadState::Ready {
                return self.handle_key(key_msg);
            }
        }
        None
    }

    fn handle_key(&mut self, key_msg: &KeyMsg) -> Option<Cmd> {
        let len = self.items().len();
        let per_line = self.per_line.max(1);

        if matches_binding(key_msg, &self.key_map.next_category) {
            self.next_category();
        } else if matches_binding(key_msg, &self.key_map.prev_category) {
            self.prev_category();
        } else if matches_binding(key_msg, &self.key_map.left) {
            self.cursor = self.cursor.saturating_sub(1);
        } else if matches_binding(key_msg, &self.key_map.right) {
            if self.cursor + 1 < len {
                self.cursor += 1;
            }
        } else if matches_binding(key_msg, &self.key_map.up) {
            self.cursor = self.cursor.saturating_sub(per_line);
        } else if matches_binding(key_msg, &self.key_map.down) {
            if self.cursor + per_line < len {
                self.cursor += per_line;
            } else if len > 0 {
                self.cursor = len - 1;
            }
        } else if matches_binding(key_msg, &self.key_map.select) {
            let native = self.selected()?;
            let picker_id = self.id;
            return Some(Box::pin(async move {
                Some(Box::new(EmojiSelectMsg { picker_id, native }) as Msg)
            }));
        }
        None
    }
}

impl Component for Model {
    fn focus(&mut self) -> Option<Cmd> {
        self.focus = true;
        None
    }

    fn blur(&mut self) {
        self.focus = false;
    }

    fn focused(&self) -> bool {
        self.focus
    }
}
