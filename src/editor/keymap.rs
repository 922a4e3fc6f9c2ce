//! Key bindings for the editor.

use crate::key::{self, new_binding, with_help, with_keys_str, Binding};

/// Editor bindings. Grid navigation lives in the picker's own key map.
#[derive(Debug, Clone)]
pub struct KeyMap {
    /// Show or hide the picker.
    pub toggle_picker: Binding,
    /// Copy the text to the clipboard.
    pub copy: Binding,
    /// Empty the text.
    pub clear: Binding,
    /// Move focus forward.
    pub next_focus: Binding,
    /// Move focus backward.
    pub prev_focus: Binding,
    /// Return focus to the text area.
    pub back: Binding,
    /// Insert the highlighted search result.
    pub insert_result: Binding,
    /// Insert a line break in the text area.
    pub newline: Binding,
    /// Move one grapheme left.
    pub character_backward: Binding,
    /// Move one grapheme right.
    pub character_forward: Binding,
    /// Move to the line above.
    pub line_up: Binding,
    /// Move to the line below.
    pub line_down: Binding,
    /// Move to the start of the line.
    pub line_start: Binding,
    /// Move to the end of the line.
    pub line_end: Binding,
    /// Delete the grapheme before the cursor.
    pub delete_character_backward: Binding,
    /// Delete the grapheme after the cursor.
    pub delete_character_forward: Binding,
}

impl Default for KeyMap {
    fn default() -> Self {
        default_key_map()
    }
}

/// Default editor bindings.
pub fn default_key_map() -> KeyMap {
    KeyMap {
        toggle_picker: new_binding(vec![with_keys_str(&["ctrl+e"]), with_help("ctrl+e", "emoji")]),
        copy: new_binding(vec![with_keys_str(&["ctrl+y"]), with_help("ctrl+y", "copy")]),
        clear: new_binding(vec![with_keys_str(&["ctrl+l"]), with_help("ctrl+l", "clear")]),
        next_focus: new_binding(vec![with_keys_str(&["tab"]), with_help("tab", "next")]),
        prev_focus: new_binding(vec![with_keys_str(&["shift+tab"]), with_help("shift+tab", "prev")]),
        back: new_binding(vec![with_keys_str(&["esc"]), with_help("esc", "back")]),
        insert_result: new_binding(vec![with_keys_str(&["enter"]), with_help("enter", "insert")]),
        newline: new_binding(vec![with_keys_str(&["enter"])]),
        character_backward: new_binding(vec![with_keys_str(&["left", "ctrl+b"])]),
        character_forward: new_binding(vec![with_keys_str(&["right", "ctrl+f"])]),
        line_up: new_binding(vec![with_keys_str(&["up", "ctrl+p"])]),
        line_down: new_binding(vec![with_keys_str(&["down", "ctrl+n"])]),
        line_start: new_binding(vec![with_keys_str(&["home", "ctrl+a"])]),
        line_end: new_binding(vec![with_keys_str(&["end"])]),
        delete_character_backward: new_binding(vec![with_keys_str(&["backspace", "ctrl+h"])]),
        delete_character_forward: new_binding(vec![with_keys_str(&["delete", "ctrl+d"])]),
    }
}

impl key::KeyMap for KeyMap {
    fn short_help(&self) -> Vec<&Binding> {
        vec![&self.toggle_picker, &self.copy, &self.clear, &self.next_focus, &self.back]
    }

    fn full_help(&self) -> Vec<Vec<&Binding>> {
        vec![
            vec![&self.toggle_picker, &self.copy, &self.clear],
            vec![&self.next_focus, &self.prev_focus, &self.back, &self.insert_result],
            vec![
                &self.character_backward,
                &self.character_forward,
                &self.line_up,
                &self.line_down,
                &self.line_start,
                &self.line_end,
            ],
            vec![&self.delete_character_backward, &self.delete_character_forward],
        ]
    }
}
