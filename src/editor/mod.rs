//! Emoji text editor component.
//!
//! A bounded text area with an emoji picker, an emoji search row,
//! debounced persistence to a key-value store and copy-to-clipboard.
//!
//! # Data flow
//!
//! - Keystrokes build a candidate text that is sanitized and accepted only
//!   when it fits the length limit. Every accepted change restarts the
//!   persistence debounce.
//! - Glyphs from the picker or the search row are appended unconditionally.
//! - The search input is echoed at once; a separately scheduled copy of it
//!   settles afterwards and drives the lookup. The newest lookup wins.
//!
//! # Basic usage
//!
//! ```rust
//! use emoji_textbox::editor::Model;
//! use emoji_textbox::config::Config;
//! use emoji_textbox::storage::MemoryStore;
//! use emoji_textbox::clipboard::NoClipboard;
//! use emoji_textbox::emoji::DatasetIndex;
//! use std::sync::Arc;
//!
//! let mut editor = Model::new(
//!     Config::default(),
//!     MemoryStore::new(),
//!     NoClipboard,
//!     Arc::new(DatasetIndex::new()),
//! );
//! assert!(editor.on_text_change("hello").is_some());
//! assert!(editor.on_text_change(&"x".repeat(101)).is_none());
//! assert_eq!(editor.text(), "hello");
//! ```

pub mod keymap;
pub mod methods;
pub mod model;
mod movement;
pub mod types;
pub mod view;

#[cfg(test)]
mod tests;

pub use keymap::{default_key_map, KeyMap};
pub use model::Model;
pub use types::{
    CopyAlertMsg, DeferredQueryMsg, Focus, PersistMsg, SearchResultMsg, NO_RESULTS, SEARCH_ERROR,
};
pub use view::{Styles, COPIED_ALERT, TITLE};
