//! Write-only clipboard access.
//!
//! The system implementation uses the `clipboard` crate and is only
//! available with the `clipboard-support` feature (on by default). Without
//! it, every write reports [`ClipboardError::Unavailable`] and the editor
//! simply never shows its copy alert.

use crate::error::ClipboardError;

/// Something the editor can copy text into.
pub trait ClipboardWriter: Send {
    /// Replaces the clipboard contents with `text`.
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// The operating system clipboard.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl SystemClipboard {
    /// Creates a handle. The underlying context is opened per write.
    pub fn new() -> Self {
        Self
    }
}

impl ClipboardWriter for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        #[cfg(feature = "clipboard-support")]
        {
            use clipboard::{ClipboardContext, ClipboardProvider};
            let mut ctx: ClipboardContext = ClipboardProvider::new()
                .map_err(|e| ClipboardError::Unavailable(format!("{}", e)))?;
            ctx.set_contents(text.to_string())
                .map_err(|e| ClipboardError::Write(format!("{}", e)))
        }
        #[cfg(not(feature = "clipboard-support"))]
        {
            let _ = text;
            Err(ClipboardError::Unavailable(
                "Clipboard support not enabled".to_string(),
            ))
        }
    }
}

/// A clipboard that never accepts writes, for headless environments.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoClipboard;

impl ClipboardWriter for NoClipboard {
    fn write_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Unavailable("no clipboard".to_string()))
    }
}
