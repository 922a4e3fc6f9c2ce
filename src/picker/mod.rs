//! Emoji picker component.
//!
//! A thin grid over the shared emoji dataset. The picker owns nothing but
//! navigation and load state: choosing a glyph produces an
//! [`EmojiSelectMsg`] that the owning component turns into an insert.
//!
//! The data is loaded lazily. The first [`Model::show`] returns a command
//! that forces the dataset and reports back with a [`PickerLoadedMsg`];
//! until then the view is a spinner and a "Loading..." notice.
//!
//! ```rust
//! use emoji_textbox::picker::{LoadState, Model};
//! use emoji_textbox::config::Theme;
//! use emoji_textbox::emoji::Category;
//!
//! let mut picker = Model::new(Theme::Dark, Category::DEFAULT_ORDER.to_vec());
//! assert_eq!(picker.load_state(), LoadState::Unloaded);
//! let _load = picker.show();
//! assert_eq!(picker.load_state(), LoadState::Loading);
//! ```

pub mod frequent;
pub mod keymap;
pub mod model;
pub mod style;
pub mod types;
pub mod view;

pub use frequent::FrequentTracker;
pub use keymap::{default_key_map, KeyMap};
pub use model::Model;
pub use style::Styles;
pub use types::{EmojiSelectMsg, LoadState, PickerLoadedMsg};

pub use crate::config::Theme;
