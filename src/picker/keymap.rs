//! Key bindings for the picker grid.

use crate::key::{self, new_binding, with_help, with_keys_str, Binding};

/// Grid navigation bindings.
#[derive(Debug, Clone)]
pub struct KeyMap {
    /// Move up one row.
    pub up: Binding,
    /// Move down one row.
    pub down: Binding,
    /// Move to the previous glyph.
    pub left: Binding,
    /// Move to the next glyph.
    pub right: Binding,
    /// Switch to the next category.
    pub next_category: Binding,
    /// Switch to the previous category.
    pub prev_category: Binding,
    /// Pick the highlighted glyph.
    pub select: Binding,
}

impl Default for KeyMap {
    fn default() -> Self {
        default_key_map()
    }
}

/// Default picker bindings.
pub fn default_key_map() -> KeyMap {
    KeyMap {
        up: new_binding(vec![with_keys_str(&["up", "k"]), with_help("↑/k", "up")]),
        down: new_binding(vec![with_keys_str(&["down", "j"]), with_help("↓/j", "down")]),
        left: new_binding(vec![with_keys_str(&["left", "h"]), with_help("←/h", "left")]),
        right: new_binding(vec![with_keys_str(&["right", "l"]), with_help("→/l", "right")]),
        next_category: new_binding(vec![
            with_keys_str(&["tab"]),
            with_help("tab", "next category"),
        ]),
        prev_category: new_binding(vec![
            with_keys_str(&["shift+tab"]),
            with_help("shift+tab", "prev category"),
        ]),
        select: new_binding(vec![with_keys_str(&["enter", "space"]), with_help("enter", "insert")]),
    }
}

impl key::KeyMap for KeyMap {
    fn short_help(&self) -> Vec<&Binding> {
        vec![&self.next_category, &self.select]
    }

    fn full_help(&self) -> Vec<Vec<&Binding>> {
        vec![
            vec![&self.up, &self.down, &self.left, &self.right],
            vec![&self.next_category, &self.prev_category, &self.select],
        ]
    }
}
