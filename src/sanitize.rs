//! Input sanitization for the text box.
//!
//! Terminal text can carry active content: CSI sequences that move the
//! cursor or recolor the screen, and OSC sequences that retitle the window
//! or write to the clipboard (OSC 52). Anything typed or pasted into the
//! editor goes through a [`Sanitizer`] first, which removes those sequences
//! and any remaining control characters. Newlines and tabs survive, mapped
//! through configurable replacements.
//!
//! ```rust
//! use emoji_textbox::sanitize::{new_sanitizer, replace_tabs};
//!
//! let s = new_sanitizer(vec![replace_tabs(" ")]);
//! assert_eq!(s.sanitize_str("\x1b[31mred\x1b[0m\tok"), "red ok");
//! ```

/// Removes terminal escape sequences and control characters from text.
///
/// Defaults: newlines (`\n`, `\r`, `\r\n`) become `"\n"`, tabs become four
/// spaces, all other control characters are dropped.
#[derive(Debug, Clone)]
pub struct Sanitizer {
    replace_newline: String,
    replace_tab: String,
}

impl Default for Sanitizer {
    fn default() -> Self {
        Self {
            replace_newline: "\n".to_string(),
            replace_tab: "    ".to_string(),
        }
    }
}

/// Configuration option applied by [`new_sanitizer`].
pub type SanitizerOpt = Box<dyn FnOnce(&mut Sanitizer)>;

/// Creates a sanitizer, applying `opts` in order over the defaults.
pub fn new_sanitizer(opts: Vec<SanitizerOpt>) -> Sanitizer {
    let mut s = Sanitizer::default();
    for opt in opts {
        opt(&mut s);
    }
    s
}

/// Replaces each tab with `tab_repl`.
pub fn replace_tabs(tab_repl: &str) -> SanitizerOpt {
    let repl = tab_repl.to_string();
    Box::new(move |s: &mut Sanitizer| s.replace_tab = repl)
}

/// Replaces each line break with `nl_repl`.
pub fn replace_newlines(nl_repl: &str) -> SanitizerOpt {
    let repl = nl_repl.to_string();
    Box::new(move |s: &mut Sanitizer| s.replace_newline = repl)
}

impl Sanitizer {
    /// Returns a cleaned copy of `input`. Never fails; malformed escape
    /// sequences are dropped along with the rest of the control bytes.
    pub fn sanitize_str(&self, input: &str) -> String {
        let stripped = if input.contains('\x1b') {
            strip_escapes(input)
        } else {
            input.to_string()
        };

        let mut out = String::with_capacity(stripped.len());
        let mut chars = stripped.chars().peekable();
        while let Some(ch) = chars.next() {
            match ch {
                '\r' => {
                    if chars.peek() == Some(&'\n') {
                        chars.next();
                    }
                    out.push_str(&self.replace_newline);
                }
                '\n' => out.push_str(&self.replace_newline),
                '\t' => out.push_str(&self.replace_tab),
                c if c.is_control() => {}
                c => out.push(c),
            }
        }
        out
    }
}

// The escape stripper only passes line feeds through, so tabs and carriage
// returns are split out and reinserted around each stripped segment.
fn strip_escapes(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(i) = rest.find(|c: char| c == '\t' || c == '\r') {
        out.push_str(&strip_ansi_escapes::strip_str(&rest[..i]));
        out.push_str(&rest[i..i + 1]);
        rest = &rest[i + 1..];
    }
    out.push_str(&strip_ansi_escapes::strip_str(rest));
    out
}

/// Sanitizes with the default configuration.
pub fn sanitize(input: &str) -> String {
    Sanitizer::default().sanitize_str(input)
}
