//! Activity spinner.
//!
//! Shown next to the search input while a lookup is in flight and inside the
//! picker while it loads. Unlike a free-running animation it can be started
//! and stopped: [`Model::start`] returns the first tick command and
//! [`Model::stop`] invalidates every tick already scheduled.
//!
//! ```rust
//! use emoji_textbox::spinner::{Model, DOT};
//!
//! let mut spinner = Model::new().with_spinner(DOT.clone());
//! assert_eq!(spinner.view(), "");
//! let _cmd = spinner.start();
//! assert!(spinner.is_active());
//! ```

use bubbletea_rs::{tick as bubbletea_tick, Cmd, Msg};
use lipgloss_extras::prelude::*;
use once_cell::sync::Lazy;
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

static LAST_ID: AtomicI64 = AtomicI64::new(0);

fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// Animation frames and frame delay.
#[derive(Debug, Clone)]
pub struct Spinner {
    /// Frames to cycle through.
    pub frames: Vec<String>,
    /// Delay between frames.
    pub fps: Duration,
}

impl Spinner {
    /// Creates a spinner from frames and a frame delay.
    pub fn new(frames: Vec<String>, fps: Duration) -> Self {
        Self { frames, fps }
    }
}

fn frames(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

/// Classic `| / - \` spinner.
pub static LINE: Lazy<Spinner> = Lazy::new(|| Spinner {
    frames: frames(&["|", "/", "-", "\\"]),
    fps: Duration::from_millis(100),
});

/// Braille dot spinner.
pub static DOT: Lazy<Spinner> = Lazy::new(|| Spinner {
    frames: frames(&["⣾ ", "⣽ ", "⣻ ", "⢿ ", "⡿ ", "⣟ ", "⣯ ", "⣷ "]),
    fps: Duration::from_millis(100),
});

/// Smaller braille spinner.
pub static MINI_DOT: Lazy<Spinner> = Lazy::new(|| Spinner {
    frames: frames(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
    fps: Duration::from_millis(83),
});

/// Growing ellipsis.
pub static ELLIPSIS: Lazy<Spinner> = Lazy::new(|| Spinner {
    frames: frames(&["", ".", "..", "..."]),
    fps: Duration::from_millis(333),
});

/// Advances one spinner by a frame.
#[derive(Debug, Clone)]
pub struct TickMsg {
    /// Spinner this tick belongs to.
    pub id: i64,
    tag: i64,
}

/// A start/stop spinner.
#[derive(Debug, Clone)]
pub struct Model {
    /// Frames and timing.
    pub spinner: Spinner,
    /// Style applied to the current frame.
    pub style: Style,
    frame: usize,
    id: i64,
    tag: i64,
    active: bool,
}

impl Default for Model {
    fn default() -> Self {
        Self::new()
    }
}

impl Model {
    /// Creates a stopped [`MINI_DOT`] spinner.
    pub fn new() -> Self {
        Self {
            spinner: MINI_DOT.clone(),
            style: Style::new(),
            frame: 0,
            id: next_id(),
            tag: 0,
            active: false,
        }
    }

    /// Sets the frames.
    pub fn with_spinner(mut self, spinner: Spinner) -> Self {
        self.spinner = spinner;
        self
    }

    /// Sets the style.
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Unique id used to route ticks.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Whether the spinner is currently animating.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// A tick addressed to this spinner's current chain.
    pub fn tick_msg(&self) -> TickMsg {
        TickMsg {
            id: self.id,
            tag: self.tag,
        }
    }

    /// Starts animating from the first frame and returns the first tick.
    pub fn start(&mut self) -> Cmd {
        self.active = true;
        self.frame = 0;
        self.tag += 1;
        self.tick()
    }

    /// Stops animating. Ticks already in flight are dropped on arrival.
    pub fn stop(&mut self) {
        self.active = false;
        self.tag += 1;
    }

    fn tick(&self) -> Cmd {
        let id = self.id;
        let tag = self.tag;
        bubbletea_tick(self.spinner.fps, move |_| Box::new(TickMsg { id, tag }) as Msg)
    }

    /// Advances on a matching [`TickMsg`] and schedules the next one.
    pub fn update(&mut self, msg: &Msg) -> Option<Cmd> {
        let tick = msg.downcast_ref::<TickMsg>()?;
        if !self.active || tick.id != self.id || tick.tag != self.tag {
            return None;
        }
        self.frame = (self.frame + 1) % self.spinner.frames.len().max(1);
        self.tag += 1;
        Some(self.tick())
    }

    /// Current frame, or an empty string while stopped.
    pub fn view(&self) -> String {
        if !self.active {
            return String::new();
        }
        match self.spinner.frames.get(self.frame) {
            Some(frame) => self.style.render(frame),
            None => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lipgloss_extras::lipgloss;

    #[test]
    fn test_ids_are_unique() {
        assert_ne!(Model::new().id(), Model::new().id());
    }

    #[test]
    fn test_stopped_spinner_renders_nothing() {
        let s = Model::new();
        assert!(!s.is_active());
        assert_eq!(s.view(), "");
    }

    #[test]
    fn test_tick_advances_frame() {
        let mut s = Model::new().with_spinner(LINE.clone());
        let _ = s.start();
        assert_eq!(lipgloss::strip_ansi(&s.view()), "|");
        let msg: Msg = Box::new(s.tick_msg());
        assert!(s.update(&msg).is_some());
        assert_eq!(lipgloss::strip_ansi(&s.view()), "/");
    }

    #[test]
    fn test_stale_tick_is_ignored() {
        let mut s = Model::new().with_spinner(LINE.clone());
        let _ = s.start();
        let stale: Msg = Box::new(s.tick_msg());
        let msg: Msg = Box::new(s.tick_msg());
        assert!(s.update(&msg).is_some());
        assert!(s.update(&stale).is_none());
    }

    #[test]
    fn test_stop_drops_in_flight_ticks() {
        let mut s = Model::new();
        let _ = s.start();
        let pending: Msg = Box::new(s.tick_msg());
        s.stop();
        assert!(s.update(&pending).is_none());
        assert_eq!(s.view(), "");
    }

    #[test]
    fn test_other_spinner_ticks_are_ignored() {
        let mut a = Model::new();
        let mut b = Model::new();
        let _ = a.start();
        let _ = b.start();
        let for_b: Msg = Box::new(b.tick_msg());
        assert!(a.update(&for_b).is_none());
    }
}
