//! Session-local usage counts for the "frequent" category.

/// Most glyphs the frequent row keeps.
pub const MAX_FREQUENT: usize = 24;

#[derive(Debug, Clone)]
struct Entry {
    native: String,
    count: u32,
    last_used: u64,
}

/// Counts glyph insertions for the lifetime of a picker.
#[derive(Debug, Clone, Default)]
pub struct FrequentTracker {
    entries: Vec<Entry>,
    clock: u64,
}

impl FrequentTracker {
    /// Creates an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one use of `native`.
    pub fn record(&mut self, native: &str) {
        if native.is_empty() {
            return;
        }
        self.clock += 1;
        match self.entries.iter_mut().find(|e| e.native == native) {
            Some(entry) => {
                entry.count += 1;
                entry.last_used = self.clock;
            }
            None => self.entries.push(Entry {
                native: native.to_string(),
                count: 1,
                last_used: self.clock,
            }),
        }
        self.entries
            .sort_by(|a, b| b.count.cmp(&a.count).then(b.last_used.cmp(&a.last_used)));
        self.entries.truncate(MAX_FREQUENT);
    }

    /// Glyphs, most used first; ties go to the most recent.
    pub fn glyphs(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.native.clone()).collect()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Use count for `native`.
    pub fn count(&self, native: &str) -> u32 {
        self.entries
            .iter()
            .find(|e| e.native == native)
            .map_or(0, |e| e.count)
    }
}
