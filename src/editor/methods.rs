//! Editor operations and the update loop.

use super::model::Model;
use super::movement;
use super::types::{
    CopyAlertMsg, DeferredQueryMsg, Focus, PersistMsg, SearchResultMsg, NO_RESULTS, SEARCH_ERROR,
};
use crate::key::matches_binding;
use crate::picker::EmojiSelectMsg;
use crate::sanitize::sanitize;
use crate::spinner;
use crate::Component;
use bubbletea_rs::{batch, tick as bubbletea_tick, Cmd, KeyMsg, Msg};
use crossterm::event::{KeyCode, KeyModifiers};
use std::time::Duration;
use unicode_segmentation::UnicodeSegmentation;

impl Model {
    /// Replaces the text with `raw` after sanitizing it.
    ///
    /// Input longer than the configured limit after sanitizing is dropped and
    /// `None` is returned. Otherwise the text is committed, the cursor moves
    /// to the end and the persistence debounce is restarted.
    pub fn on_text_change(&mut self, raw: &str) -> Option<Cmd> {
        let sanitized = sanitize(raw);
        let len = sanitized.chars().count();
        if len > self.config.max_chars {
            tracing::debug!(len, max = self.config.max_chars, "text change rejected");
            return None;
        }
        self.text = sanitized;
        self.cursor = self.text.len();
        Some(self.schedule_persist())
    }

    /// Appends `glyph` to the text, ignoring the length limit, and resets
    /// the search.
    pub fn on_emoji_insert(&mut self, glyph: &str) -> Cmd {
        self.text.push_str(glyph);
        self.cursor = self.text.len();
        self.reset_search();
        self.picker.record_use(glyph);
        if self.focus == Focus::Results {
            self.set_focus(Focus::Text);
        }
        self.schedule_persist()
    }

    /// Shows or hides the picker. The first show returns the picker's load
    /// command.
    pub fn toggle_picker(&mut self) -> Option<Cmd> {
        if self.picker.visible() {
            self.picker.hide();
            if self.focus == Focus::Picker {
                self.set_focus(Focus::Text);
            }
            None
        } else {
            self.picker.show()
        }
    }

    /// Echoes `raw` into the search input and schedules the deferred copy.
    ///
    /// Only the newest scheduled copy settles, so a burst of keystrokes
    /// leads to a single lookup.
    pub fn on_search_query_change(&mut self, raw: &str) -> Cmd {
        self.search_query = raw.to_string();
        self.defer_tag += 1;
        let id = self.id;
        let tag = self.defer_tag;
        let query = raw.to_string();
        bubbletea_tick(Duration::from_nanos(1), move |_| {
            Box::new(DeferredQueryMsg {
                id,
                tag,
                query: query.clone(),
            }) as Msg
        })
    }

    /// Copies the text to the clipboard and raises the alert.
    ///
    /// Blank text is not copied. A clipboard failure leaves the alert down.
    pub fn on_copy_request(&mut self) -> Option<Cmd> {
        if self.text.trim().is_empty() {
            return None;
        }
        if let Err(err) = self.clipboard.write_text(&self.text) {
            tracing::debug!(error = %err, "copy failed");
            return None;
        }
        self.copied = true;
        self.alert_tag += 1;
        let id = self.id;
        let tag = self.alert_tag;
        Some(bubbletea_tick(self.config.copy_alert, move |_| {
            Box::new(CopyAlertMsg { id, tag }) as Msg
        }))
    }

    /// Empties the text.
    pub fn clear_text(&mut self) -> Option<Cmd> {
        self.on_text_change("")
    }

    /// Moves keyboard focus. Focusing the picker focuses its grid.
    pub fn set_focus(&mut self, focus: Focus) {
        let focus = if focus == Focus::Picker && !self.picker.visible() {
            Focus::Text
        } else if focus == Focus::Results && !self.results_selectable() {
            Focus::Search
        } else {
            focus
        };
        self.focus = focus;
        if focus == Focus::Picker {
            self.picker.focus();
        } else {
            self.picker.blur();
        }
    }

    /// Whether the results row holds glyphs rather than a sentinel.
    pub fn results_selectable(&self) -> bool {
        !self.results.is_empty()
            && !(self.results.len() == 1
                && (self.results[0] == NO_RESULTS || self.results[0] == SEARCH_ERROR))
    }

    /// Index of the highlighted result.
    pub fn result_cursor(&self) -> usize {
        self.result_cursor
    }

    pub(super) fn schedule_persist(&mut self) -> Cmd {
        self.persist_tag += 1;
        let id = self.id;
        let tag = self.persist_tag;
        bubbletea_tick(self.config.persist_debounce, move |_| {
            Box::new(PersistMsg { id, tag }) as Msg
        })
    }

    fn persist_now(&mut self) {
        match self.store.set(&self.config.storage_key, &self.text) {
            Ok(()) => tracing::debug!(key = %self.config.storage_key, "text persisted"),
            Err(err) => tracing::warn!(error = %err, "failed to persist text"),
        }
    }

    fn reset_search(&mut self) {
        self.search_query.clear();
        self.deferred_query.clear();
        self.defer_tag += 1;
        self.search_seq += 1;
        self.results.clear();
        self.result_cursor = 0;
        self.search_pending = false;
        self.spinner.stop();
    }

    fn settle_query(&mut self, query: &str) -> Option<Cmd> {
        if query == self.deferred_query {
            return None;
        }
        self.deferred_query = query.to_string();
        let search = self.issue_search()?;
        if self.spinner.is_active() {
            Some(search)
        } else {
            Some(batch(vec![search, self.spinner.start()]))
        }
    }

    // Starts a lookup for the settled query, or clears the results when it
    // is blank. Any lookup already in flight becomes stale either way.
    pub(super) fn issue_search(&mut self) -> Option<Cmd> {
        self.search_seq += 1;
        let query = self.deferred_query.trim().to_string();
        if query.is_empty() {
            self.results.clear();
            self.result_cursor = 0;
            self.search_pending = false;
            self.spinner.stop();
            if self.focus == Focus::Results {
                self.set_focus(Focus::Search);
            }
            return None;
        }

        self.search_pending = true;
        let id = self.id;
        let seq = self.search_seq;
        tracing::debug!(seq, query = %query, "search issued");
        let lookup = self.index.search(&query);
        Some(Box::pin(async move {
            let outcome = lookup.await;
            Some(Box::new(SearchResultMsg { id, seq, outcome }) as Msg)
        }))
    }

    fn receive_results(&mut self, msg: &SearchResultMsg) {
        if msg.seq != self.search_seq {
            tracing::debug!(seq = msg.seq, latest = self.search_seq, "stale search response dropped");
            return;
        }
        self.search_pending = false;
        self.spinner.stop();
        self.result_cursor = 0;
        self.results = match &msg.outcome {
            Ok(hits) => {
                let glyphs: Vec<String> = hits
                    .iter()
                    .filter_map(|hit| hit.primary().map(str::to_string))
                    .take(self.config.search_limit)
                    .collect();
                if glyphs.is_empty() {
                    vec![NO_RESULTS.to_string()]
                } else {
                    glyphs
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "emoji search failed");
                vec![SEARCH_ERROR.to_string()]
            }
        };
        if self.focus == Focus::Results && !self.results_selectable() {
            self.set_focus(Focus::Search);
        }
    }

    /// Processes one message.
    ///
    /// Handles this editor's timers and lookup results, selections from its
    /// picker, spinner ticks and, while focused, key presses.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(m) = msg.downcast_ref::<PersistMsg>() {
            if m.id == self.id && m.tag == self.persist_tag {
                self.persist_now();
            }
            return None;
        }

        if let Some(m) = msg.downcast_ref::<CopyAlertMsg>() {
            if m.id == self.id && m.tag == self.alert_tag {
                self.copied = false;
            }
            return None;
        }

        if let Some(m) = msg.downcast_ref::<DeferredQueryMsg>() {
            if m.id != self.id {
                return None;
            }
            if m.tag != self.defer_tag {
                tracing::debug!(tag = m.tag, latest = self.defer_tag, "stale deferred query dropped");
                return None;
            }
            return self.settle_query(&m.query);
        }

        if let Some(m) = msg.downcast_ref::<SearchResultMsg>() {
            if m.id == self.id {
                self.receive_results(m);
            }
            return None;
        }

        if let Some(m) = msg.downcast_ref::<EmojiSelectMsg>() {
            if m.picker_id == self.picker.id() {
                return Some(self.on_emoji_insert(&m.native));
            }
            return None;
        }

        if msg.is::<spinner::TickMsg>() {
            if let Some(cmd) = self.spinner.update(&msg) {
                return Some(cmd);
            }
            return self.picker.update(&msg);
        }

        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            if !self.focused {
                return None;
            }
            if self.focus == Focus::Picker && !self.is_editor_key(key_msg) {
                return self.picker.update(&msg);
            }
            return self.handle_key(key_msg);
        }

        self.picker.update(&msg)
    }

    fn is_editor_key(&self, key_msg: &KeyMsg) -> bool {
        let km = &self.key_map;
        matches_binding(key_msg, &km.toggle_picker)
            || matches_binding(key_msg, &km.copy)
            || matches_binding(key_msg, &km.clear)
            || matches_binding(key_msg, &km.back)
    }

    fn handle_key(&mut self, key_msg: &KeyMsg) -> Option<Cmd> {
        if matches_binding(key_msg, &self.key_map.toggle_picker) {
            return self.toggle_picker();
        }
        if matches_binding(key_msg, &self.key_map.copy) {
            return self.on_copy_request();
        }
        if matches_binding(key_msg, &self.key_map.clear) {
            return self.clear_text();
        }
        if matches_binding(key_msg, &self.key_map.back) {
            self.set_focus(Focus::Text);
            return None;
        }
        if matches_binding(key_msg, &self.key_map.next_focus) {
            self.cycle_focus(true);
            return None;
        }
        if matches_binding(key_msg, &self.key_map.prev_focus) {
            self.cycle_focus(false);
            return None;
        }

        match self.focus {
            Focus::Text => self.handle_text_key(key_msg),
            Focus::Search => self.handle_search_key(key_msg),
            Focus::Results => self.handle_results_key(key_msg),
            Focus::Picker => None,
        }
    }

    fn cycle_focus(&mut self, forward: bool) {
        let mut order = vec![Focus::Text, Focus::Search];
        if self.results_selectable() {
            order.push(Focus::Results);
        }
        if self.picker.visible() {
            order.push(Focus::Picker);
        }
        let current = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        let next = if forward {
            (current + 1) % order.len()
        } else {
            (current + order.len() - 1) % order.len()
        };
        self.set_focus(order[next]);
    }

    fn handle_text_key(&mut self, key_msg: &KeyMsg) -> Option<Cmd> {
        let km = &self.key_map;
        if matches_binding(key_msg, &km.newline) {
            return self.insert_at_cursor("\n");
        }
        if matches_binding(key_msg, &km.delete_character_backward) {
            if self.cursor == 0 {
                return None;
            }
            let start = movement::prev_boundary(&self.text, self.cursor);
            return self.delete_range(start, self.cursor);
        }
        if matches_binding(key_msg, &km.delete_character_forward) {
            let end = movement::next_boundary(&self.text, self.cursor);
            if end == self.cursor {
                return None;
            }
            return self.delete_range(self.cursor, end);
        }

        let moved = if matches_binding(key_msg, &km.character_backward) {
            Some(movement::prev_boundary(&self.text, self.cursor))
        } else if matches_binding(key_msg, &km.character_forward) {
            Some(movement::next_boundary(&self.text, self.cursor))
        } else if matches_binding(key_msg, &km.line_up) {
            Some(movement::line_up(&self.text, self.cursor))
        } else if matches_binding(key_msg, &km.line_down) {
            Some(movement::line_down(&self.text, self.cursor))
        } else if matches_binding(key_msg, &km.line_start) {
            Some(movement::line_start(&self.text, self.cursor))
        } else if matches_binding(key_msg, &km.line_end) {
            Some(movement::line_end(&self.text, self.cursor))
        } else {
            None
        };
        if let Some(pos) = moved {
            self.cursor = pos;
            return None;
        }

        let ch = typed_char(key_msg)?;
        let mut buf = [0u8; 4];
        self.insert_at_cursor(ch.encode_utf8(&mut buf))
    }

    fn insert_at_cursor(&mut self, s: &str) -> Option<Cmd> {
        let mut candidate = String::with_capacity(self.text.len() + s.len());
        candidate.push_str(&self.text[..self.cursor]);
        candidate.push_str(s);
        candidate.push_str(&self.text[self.cursor..]);
        let pos = self.cursor + s.len();
        self.apply_edit(candidate, pos)
    }

    fn delete_range(&mut self, start: usize, end: usize) -> Option<Cmd> {
        let mut candidate = String::with_capacity(self.text.len());
        candidate.push_str(&self.text[..start]);
        candidate.push_str(&self.text[end..]);
        self.apply_edit(candidate, start)
    }

    // Keystrokes go through the same path as any other text change. When
    // sanitizing altered the candidate the cursor stays at the end.
    fn apply_edit(&mut self, candidate: String, pos: usize) -> Option<Cmd> {
        let cmd = self.on_text_change(&candidate)?;
        if self.text == candidate {
            self.cursor = pos;
        }
        Some(cmd)
    }

    fn handle_search_key(&mut self, key_msg: &KeyMsg) -> Option<Cmd> {
        if matches_binding(key_msg, &self.key_map.insert_result) {
            if self.results_selectable() {
                self.set_focus(Focus::Results);
            }
            return None;
        }
        if matches_binding(key_msg, &self.key_map.delete_character_backward) {
            let mut graphemes: Vec<&str> = self.search_query.graphemes(true).collect();
            graphemes.pop()?;
            let query = graphemes.concat();
            return Some(self.on_search_query_change(&query));
        }
        let ch = typed_char(key_msg)?;
        let query = format!("{}{}", self.search_query, ch);
        Some(self.on_search_query_change(&query))
    }

    fn handle_results_key(&mut self, key_msg: &KeyMsg) -> Option<Cmd> {
        if matches_binding(key_msg, &self.key_map.character_backward) {
            self.result_cursor = self.result_cursor.saturating_sub(1);
            return None;
        }
        if matches_binding(key_msg, &self.key_map.character_forward) {
            if self.result_cursor + 1 < self.results.len() {
                self.result_cursor += 1;
            }
            return None;
        }
        if matches_binding(key_msg, &self.key_map.insert_result) {
            let glyph = self.results.get(self.result_cursor)?.clone();
            return Some(self.on_emoji_insert(&glyph));
        }
        None
    }
}

// Printable input: a character with no ctrl or alt held.
fn typed_char(key_msg: &KeyMsg) -> Option<char> {
    match key_msg.key {
        KeyCode::Char(ch)
            if !key_msg.modifiers.contains(KeyModifiers::CONTROL)
                && !key_msg.modifiers.contains(KeyModifiers::ALT) =>
        {
            Some(ch)
        }
        _ => None,
    }
}

impl Component for Model {
    fn focus(&mut self) -> Option<Cmd> {
        self.focused = true;
        if self.focus == Focus::Picker {
            self.picker.focus();
        }
        None
    }

    fn blur(&mut self) {
        self.focused = false;
        self.picker.blur();
    }

    fn focused(&self) -> bool {
        self.focused
    }
}
