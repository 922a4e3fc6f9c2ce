//! Editor state and constructors.

use super::keymap::{default_key_map, KeyMap};
use super::types::Focus;
use super::view::Styles;
use crate::clipboard::{ClipboardWriter, SystemClipboard};
use crate::config::Config;
use crate::emoji::{DatasetIndex, SearchIndex};
use crate::picker;
use crate::spinner;
use crate::storage::{FileStore, KeyValueStore, MemoryStore};
use bubbletea_rs::{Cmd, Model as BubbleTeaModel, Msg};
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

static LAST_ID: AtomicI64 = AtomicI64::new(0);

fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// A text box with an emoji picker, emoji search, debounced persistence and
/// copy-to-clipboard.
///
/// All state lives here. Deferred work (the persistence debounce, the copy
/// alert, the deferred search query and the lookup itself) is returned from
/// the operations as commands; the messages they produce carry this editor's
/// id plus a tag or sequence number, and anything not matching the latest
/// value is dropped on arrival.
///
/// # Examples
///
/// ```rust
/// use emoji_textbox::editor::Model;
/// use emoji_textbox::config::Config;
/// use emoji_textbox::storage::MemoryStore;
/// use emoji_textbox::clipboard::NoClipboard;
/// use emoji_textbox::emoji::DatasetIndex;
/// use std::sync::Arc;
///
/// let store = MemoryStore::with_entry("emojiText", "hello");
/// let mut editor = Model::new(Config::default(), store, NoClipboard, Arc::new(DatasetIndex::new()));
/// assert_eq!(editor.text(), "hello");
///
/// let _persist = editor.on_emoji_insert("👋");
/// assert_eq!(editor.text(), "hello👋");
/// ```
pub struct Model {
    pub(super) id: i64,
    pub(super) config: Config,
    pub(super) store: Box<dyn KeyValueStore>,
    pub(super) clipboard: Box<dyn ClipboardWriter>,
    pub(super) index: Arc<dyn SearchIndex>,

    pub(super) text: String,
    // byte offset, always on a grapheme boundary
    pub(super) cursor: usize,

    pub(super) search_query: String,
    pub(super) deferred_query: String,
    pub(super) results: Vec<String>,
    pub(super) result_cursor: usize,
    pub(super) search_pending: bool,

    pub(super) copied: bool,

    pub(super) focused: bool,
    pub(super) focus: Focus,

    pub(super) persist_tag: u64,
    pub(super) alert_tag: u64,
    pub(super) defer_tag: u64,
    pub(super) search_seq: u64,

    pub(super) picker: picker::Model,
    pub(super) spinner: spinner::Model,

    /// Key bindings.
    pub key_map: KeyMap,
    /// Colors and decorations.
    pub styles: Styles,
}

impl Model {
    /// Creates an editor and loads the persisted text from `store`.
    ///
    /// A missing entry or a read error starts with empty text.
    pub fn new<S, C>(config: Config, store: S, clipboard: C, index: Arc<dyn SearchIndex>) -> Self
    where
        S: KeyValueStore + 'static,
        C: ClipboardWriter + 'static,
    {
        let text = match store.get(&config.storage_key) {
            Ok(Some(text)) => text,
            Ok(None) => String::new(),
            Err(err) => {
                tracing::warn!(error = %err, key = %config.storage_key, "failed to read stored text");
                String::new()
            }
        };
        let picker = picker::Model::from_config(&config);

        Self {
            id: next_id(),
            cursor: text.len(),
            text,
            store: Box::new(store),
            clipboard: Box::new(clipboard),
            index,
            search_query: String::new(),
            deferred_query: String::new(),
            results: Vec::new(),
            result_cursor: 0,
            search_pending: false,
            copied: false,
            focused: false,
            focus: Focus::Text,
            persist_tag: 0,
            alert_tag: 0,
            defer_tag: 0,
            search_seq: 0,
            picker,
            spinner: spinner::Model::new(),
            key_map: default_key_map(),
            styles: Styles::default(),
            config,
        }
    }

    /// Creates an editor backed by the default file store, the system
    /// clipboard and the built-in emoji index.
    ///
    /// Falls back to an in-memory store when the platform has no data
    /// directory.
    pub fn with_system_defaults(config: Config) -> Self {
        let index: Arc<dyn SearchIndex> =
            Arc::new(DatasetIndex::new().with_limit(config.search_limit));
        match FileStore::open_default() {
            Ok(store) => Self::new(config, store, SystemClipboard::new(), index),
            Err(err) => {
                tracing::warn!(error = %err, "no default store, text will not persist");
                Self::new(config, MemoryStore::new(), SystemClipboard::new(), index)
            }
        }
    }

    /// Identifier stamped on this editor's messages.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// The configuration in use.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Current text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Text length in characters.
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Cursor position as a byte offset into [`Model::text`].
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The search input as typed.
    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// The settled copy of the search query that drives lookups.
    pub fn deferred_query(&self) -> &str {
        &self.deferred_query
    }

    /// Result glyphs, or a single sentinel string.
    pub fn search_results(&self) -> &[String] {
        &self.results
    }

    /// Whether a lookup is in flight.
    pub fn search_pending(&self) -> bool {
        self.search_pending
    }

    /// Whether the "copied" alert is up.
    pub fn copied(&self) -> bool {
        self.copied
    }

    /// Whether the picker is shown.
    pub fn picker_visible(&self) -> bool {
        self.picker.visible()
    }

    /// The embedded picker.
    pub fn picker(&self) -> &picker::Model {
        &self.picker
    }

    /// Mutable access to the embedded picker, e.g. to rebind its keys.
    pub fn picker_mut(&mut self) -> &mut picker::Model {
        &mut self.picker
    }

    /// Which input receives typed keys.
    pub fn focus_target(&self) -> Focus {
        self.focus
    }
}

impl BubbleTeaModel for Model {
    fn init() -> (Self, Option<Cmd>) {
        let mut model = Self::with_system_defaults(Config::default());
        model.focused = true;
        (model, None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.update(msg)
    }

    fn view(&self) -> String {
        self.view()
    }
}
