#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/emoji-textbox/")]

//! # emoji-textbox
//!
//! A text box component for [bubbletea-rs](https://github.com/joshka/bubbletea-rs)
//! applications with an emoji picker, emoji search, debounced persistence
//! and copy-to-clipboard.
//!
//! ## Overview
//!
//! The [`editor::Model`] owns a bounded text area (100 characters by default),
//! a toggleable [`picker::Model`] grid of emojis grouped by category, a search
//! row backed by a pluggable [`emoji::SearchIndex`], and a "copied" alert.
//! Accepted text is written to a [`storage::KeyValueStore`] once typing
//! pauses.
//!
//! Each component follows the Elm Architecture: state changes happen in
//! `update()`, deferred work is returned as a `Cmd`, and `view()` renders
//! the current state.
//!
//! ## Components
//!
//! | Component | Description |
//! |-----------|-------------|
//! | [`editor::Model`] | Text area, search row, toggle, counter and copy alert |
//! | [`picker::Model`] | Category tabs and emoji grid with a frequently-used list |
//! | [`spinner::Model`] | Loading indicator for the picker and for lookups |
//!
//! ## Focus Management
//!
//! Components implement [`Component`]:
//!
//! ```rust
//! use emoji_textbox::prelude::*;
//! use emoji_textbox::storage::MemoryStore;
//! use emoji_textbox::clipboard::NoClipboard;
//! use emoji_textbox::emoji::DatasetIndex;
//! use std::sync::Arc;
//!
//! fn handle_focus<T: Component>(component: &mut T) {
//!     let _ = component.focus();
//!     assert!(component.focused());
//!     component.blur();
//!     assert!(!component.focused());
//! }
//!
//! let mut editor = Editor::new(
//!     Config::default(),
//!     MemoryStore::new(),
//!     NoClipboard,
//!     Arc::new(DatasetIndex::new()),
//! );
//! handle_focus(&mut editor);
//! ```
//!
//! ## Integration with bubbletea-rs
//!
//! ```rust
//! use emoji_textbox::prelude::*;
//! use bubbletea_rs::{Cmd, Model, Msg};
//!
//! struct App {
//!     editor: Editor,
//! }
//!
//! impl Model for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let mut editor = Editor::with_system_defaults(Config::default());
//!         let cmd = editor.focus();
//!         (Self { editor }, cmd)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         self.editor.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         self.editor.view()
//!     }
//! }
//! ```

pub mod clipboard;
pub mod config;
pub mod editor;
pub mod emoji;
pub mod error;
pub mod key;
pub mod picker;
pub mod sanitize;
pub mod spinner;
pub mod storage;

use bubbletea_rs::Cmd;

/// Core trait for components that support focus management.
///
/// A focused component receives key messages and renders its active state;
/// a blurred one ignores keys.
///
/// ```rust
/// use emoji_textbox::prelude::*;
///
/// let mut picker = Picker::new(Theme::Auto, Vec::new());
/// assert!(!picker.focused());
/// picker.focus();
/// assert!(picker.focused());
/// picker.blur();
/// assert!(!picker.focused());
/// ```
pub trait Component {
    /// Sets the component to focused state. May return a command to run
    /// on focus.
    fn focus(&mut self) -> Option<Cmd>;

    /// Sets the component to blurred state.
    fn blur(&mut self);

    /// Returns the current focus state of the component.
    fn focused(&self) -> bool;
}

pub use clipboard::{ClipboardWriter, NoClipboard, SystemClipboard};
pub use config::{Config, Theme, DEFAULT_STORAGE_KEY};
pub use editor::{Focus, Model as Editor};
pub use emoji::{Category, DatasetIndex, Emoji, SearchHit, SearchIndex};
pub use error::{ClipboardError, SearchError, StorageError};
pub use key::{matches_binding, new_binding, with_help, with_keys_str, Binding, KeyMap, KeyPress};
pub use picker::{EmojiSelectMsg, Model as Picker};
pub use spinner::{Model as Spinner, TickMsg as SpinnerTickMsg};
pub use storage::{FileStore, KeyValueStore, MemoryStore};

/// Prelude module for convenient imports.
///
/// ```rust
/// use emoji_textbox::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::{Config, Theme};
    pub use crate::editor::{Focus, Model as Editor};
    pub use crate::emoji::{Category, SearchIndex};
    pub use crate::key::{Binding, KeyMap};
    pub use crate::picker::{EmojiSelectMsg, Model as Picker};
    pub use crate::storage::KeyValueStore;
    pub use crate::Component;
}
