//! Editor and picker configuration.
//!
//! ```rust
//! use emoji_textbox::config::{Config, Theme};
//! use std::time::Duration;
//!
//! let config = Config::default()
//!     .with_storage_key("notes")
//!     .with_theme(Theme::Dark)
//!     .with_persist_debounce(Duration::from_millis(250));
//! assert_eq!(config.max_chars, 100);
//! ```

use crate::emoji::search::DEFAULT_LIMIT;
use crate::emoji::Category;
use std::time::Duration;

/// Storage key used when none is configured.
pub const DEFAULT_STORAGE_KEY: &str = "emojiText";

/// Color scheme for the picker grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    /// Follow the terminal background.
    #[default]
    Auto,
    /// Colors for light backgrounds.
    Light,
    /// Colors for dark backgrounds.
    Dark,
}

impl Theme {
    /// Parses `"auto"`, `"light"` or `"dark"`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "auto" => Some(Theme::Auto),
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }
}

/// Settings shared by the editor and its picker.
#[derive(Debug, Clone)]
pub struct Config {
    /// Key the editor text is stored under.
    pub storage_key: String,
    /// Longest text, in characters, accepted from typing.
    pub max_chars: usize,
    /// Quiet period before a change is written to the store.
    pub persist_debounce: Duration,
    /// How long the "copied" alert stays up.
    pub copy_alert: Duration,
    /// Picker color scheme.
    pub theme: Theme,
    /// Picker categories, in tab order.
    pub categories: Vec<Category>,
    /// Maximum search hits shown.
    pub search_limit: usize,
    /// Shown in the empty text area.
    pub placeholder: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            max_chars: 100,
            persist_debounce: Duration::from_millis(500),
            copy_alert: Duration::from_millis(2000),
            theme: Theme::Auto,
            categories: Category::DEFAULT_ORDER.to_vec(),
            search_limit: DEFAULT_LIMIT,
            placeholder: "📝".to_string(),
        }
    }
}

impl Config {
    /// Sets the storage key.
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Sets the typed-text length limit.
    pub fn with_max_chars(mut self, max: usize) -> Self {
        self.max_chars = max;
        self
    }

    /// Sets the persistence debounce window.
    pub fn with_persist_debounce(mut self, d: Duration) -> Self {
        self.persist_debounce = d;
        self
    }

    /// Sets how long the copy alert is shown.
    pub fn with_copy_alert(mut self, d: Duration) -> Self {
        self.copy_alert = d;
        self
    }

    /// Sets the picker theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Sets the picker categories. An empty list falls back to the defaults.
    pub fn with_categories(mut self, categories: Vec<Category>) -> Self {
        self.categories = if categories.is_empty() {
            Category::DEFAULT_ORDER.to_vec()
        } else {
            categories
        };
        self
    }

    /// Sets the search hit limit.
    pub fn with_search_limit(mut self, limit: usize) -> Self {
        self.search_limit = limit;
        self
    }

    /// Sets the text area placeholder.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }
}
