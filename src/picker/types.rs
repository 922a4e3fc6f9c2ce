//! Messages emitted by the picker.

use bubbletea_rs::Msg;

/// A glyph was chosen in the grid.
///
/// The owning component forwards `native` to its insert operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmojiSelectMsg {
    /// Picker that produced the selection.
    pub picker_id: i64,
    /// The selected glyph.
    pub native: String,
}

/// The emoji dataset finished loading for a picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickerLoadedMsg {
    /// Picker that requested the load.
    pub picker_id: i64,
}

/// Lazy-load progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    /// Never shown.
    Unloaded,
    /// Shown once, waiting for [`PickerLoadedMsg`].
    Loading,
    /// Grid available.
    Ready,
}

impl From<EmojiSelectMsg> for Msg {
    fn from(msg: EmojiSelectMsg) -> Self {
        Box::new(msg) as Msg
    }
}

impl From<PickerLoadedMsg> for Msg {
    fn from(msg: PickerLoadedMsg) -> Self {
        Box::new(msg) as Msg
    }
}
