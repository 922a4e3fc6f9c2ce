//! Tests for the editor component.

use super::*;
use crate::clipboard::ClipboardWriter;
use crate::config::Config;
use crate::emoji::{SearchFuture, SearchHit, SearchIndex};
use crate::error::{ClipboardError, SearchError, StorageError};
use crate::picker::EmojiSelectMsg;
use crate::storage::{KeyValueStore, MemoryStore};
use crate::Component;
use bubbletea_rs::{KeyMsg, Msg};
use crossterm::event::{KeyCode, KeyModifiers};
use lipgloss_extras::lipgloss;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::Instant;

#[derive(Clone, Default)]
struct RecordingClipboard {
    writes: Arc<Mutex<Vec<String>>>,
    fail: bool,
}

impl ClipboardWriter for RecordingClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.fail {
            return Err(ClipboardError::Unavailable("test".to_string()));
        }
        self.writes.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

struct BrokenStore;

impl KeyValueStore for BrokenStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::NoDataDir)
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::NoDataDir)
    }
}

/// Answers every query with a hit per word, or with a fixed outcome.
#[derive(Clone, Default)]
struct MockIndex {
    calls: Arc<AtomicUsize>,
    fixed: Option<Result<Vec<SearchHit>, SearchError>>,
}

impl MockIndex {
    fn returning(outcome: Result<Vec<SearchHit>, SearchError>) -> Self {
        Self {
            calls: Arc::default(),
            fixed: Some(outcome),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl SearchIndex for MockIndex {
    fn search(&self, query: &str) -> SearchFuture {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let outcome = match &self.fixed {
            Some(outcome) => outcome.clone(),
            None => Ok(vec![hit(query, &[query])]),
        };
        Box::pin(async move { outcome })
    }
}

fn hit(id: &str, skins: &[&str]) -> SearchHit {
    SearchHit {
        id: id.to_string(),
        name: id.to_string(),
        skins: skins.iter().map(|s| s.to_string()).collect(),
    }
}

fn editor_with(store: MemoryStore, clipboard: RecordingClipboard, index: MockIndex) -> Model {
    Model::new(Config::default(), store, clipboard, Arc::new(index))
}

fn editor() -> Model {
    editor_with(MemoryStore::new(), RecordingClipboard::default(), MockIndex::default())
}

fn key(code: KeyCode) -> Msg {
    Box::new(KeyMsg {
        key: code,
        modifiers: KeyModifiers::NONE,
    })
}

fn ctrl(c: char) -> Msg {
    Box::new(KeyMsg {
        key: KeyCode::Char(c),
        modifiers: KeyModifiers::CONTROL,
    })
}

fn type_str(editor: &mut Model, s: &str) {
    for c in s.chars() {
        editor.update(key(KeyCode::Char(c)));
    }
}

fn persist_due(editor: &Model) -> Msg {
    Box::new(PersistMsg {
        id: editor.id(),
        tag: editor.persist_tag,
    })
}

fn alert_due(editor: &Model) -> Msg {
    Box::new(CopyAlertMsg {
        id: editor.id(),
        tag: editor.alert_tag,
    })
}

fn settle(editor: &mut Model) {
    let msg: Msg = Box::new(DeferredQueryMsg {
        id: editor.id(),
        tag: editor.defer_tag,
        query: editor.search_query().to_string(),
    });
    editor.update(msg);
}

async fn search_now(editor: &mut Model, query: &str) -> Msg {
    editor.deferred_query = query.to_string();
    let cmd = editor.issue_search().expect("lookup issued");
    cmd.await.expect("search message")
}

fn plain_view(editor: &Model) -> String {
    lipgloss::strip_ansi(&editor.view())
}

// --- initialization ---

#[test]
fn test_new_loads_stored_text() {
    let store = MemoryStore::with_entry("emojiText", "saved 😍");
    let e = editor_with(store, RecordingClipboard::default(), MockIndex::default());
    assert_eq!(e.text(), "saved 😍");
    assert_eq!(e.cursor(), e.text().len());
    assert!(!e.picker_visible());
    assert!(e.search_results().is_empty());
    assert!(!e.copied());
    assert!(!e.focused());
}

#[test]
fn test_new_without_entry_is_empty() {
    assert_eq!(editor().text(), "");
}

#[test]
fn test_new_with_unreadable_store_is_empty() {
    let e = Model::new(
        Config::default(),
        BrokenStore,
        RecordingClipboard::default(),
        Arc::new(MockIndex::default()),
    );
    assert_eq!(e.text(), "");
}

#[test]
fn test_custom_storage_key() {
    let store = MemoryStore::with_entry("notes", "from notes");
    let e = Model::new(
        Config::default().with_storage_key("notes"),
        store,
        RecordingClipboard::default(),
        Arc::new(MockIndex::default()),
    );
    assert_eq!(e.text(), "from notes");
}

// --- text changes ---

#[test]
fn test_text_over_limit_is_rejected() {
    let mut e = editor();
    e.on_text_change("keep");
    assert!(e.on_text_change(&"a".repeat(101)).is_none());
    assert_eq!(e.text(), "keep");
}

#[test]
fn test_text_at_limit_is_accepted() {
    let mut e = editor();
    let hundred = "a".repeat(100);
    assert!(e.on_text_change(&hundred).is_some());
    assert_eq!(e.text(), hundred);
}

#[test]
fn test_limit_counts_characters_not_bytes() {
    let mut e = editor();
    let hearts = "😍".repeat(100);
    assert!(e.on_text_change(&hearts).is_some());
    assert_eq!(e.char_count(), 100);
}

#[test]
fn test_text_is_sanitized() {
    let mut e = editor();
    e.on_text_change("hi \x1b[31mred\x1b[0m\x07 there\r\nnext");
    assert_eq!(e.text(), "hi red there\nnext");
}

#[test]
fn test_limit_applies_after_sanitizing() {
    let mut e = editor();
    let padded = format!("\x1b[1m{}\x1b[0m", "a".repeat(100));
    assert!(padded.chars().count() > 100);
    assert!(e.on_text_change(&padded).is_some());
    assert_eq!(e.text(), "a".repeat(100));
}

#[test]
fn test_custom_max_chars() {
    let mut e = Model::new(
        Config::default().with_max_chars(3),
        MemoryStore::new(),
        RecordingClipboard::default(),
        Arc::new(MockIndex::default()),
    );
    assert!(e.on_text_change("abcd").is_none());
    assert!(e.on_text_change("abc").is_some());
}

// --- persistence ---

#[test]
fn test_persist_writes_once_per_burst_with_final_value() {
    let store = MemoryStore::new();
    let mut e = editor_with(store.clone(), RecordingClipboard::default(), MockIndex::default());

    e.on_text_change("h");
    let first = persist_due(&e);
    e.on_text_change("he");
    let second = persist_due(&e);
    e.on_text_change("hey");
    let last = persist_due(&e);

    e.update(first);
    e.update(second);
    assert!(store.writes().is_empty());

    e.update(last);
    assert_eq!(store.writes(), vec![("emojiText".to_string(), "hey".to_string())]);
}

#[test]
fn test_rejected_change_does_not_restart_debounce() {
    let store = MemoryStore::new();
    let mut e = editor_with(store.clone(), RecordingClipboard::default(), MockIndex::default());
    e.on_text_change("ok");
    let due = persist_due(&e);
    e.on_text_change(&"a".repeat(200));
    e.update(due);
    assert_eq!(store.writes().len(), 1);
}

#[test]
fn test_persist_for_other_editor_is_ignored() {
    let store = MemoryStore::new();
    let mut e = editor_with(store.clone(), RecordingClipboard::default(), MockIndex::default());
    e.on_text_change("mine");
    let foreign: Msg = Box::new(PersistMsg {
        id: e.id() + 1000,
        tag: e.persist_tag,
    });
    e.update(foreign);
    assert!(store.writes().is_empty());
}

#[test]
fn test_persist_failure_is_swallowed() {
    let mut e = Model::new(
        Config::default(),
        BrokenStore,
        RecordingClipboard::default(),
        Arc::new(MockIndex::default()),
    );
    e.on_text_change("still here");
    let due = persist_due(&e);
    assert!(e.update(due).is_none());
    assert_eq!(e.text(), "still here");
}

// --- emoji insert ---

#[test]
fn test_insert_bypasses_limit() {
    let mut e = editor();
    e.on_text_change(&"a".repeat(100));
    let _ = e.on_emoji_insert("😍");
    assert_eq!(e.char_count(), 101);
    assert!(e.text().ends_with("😍"));
}

#[test]
fn test_insert_appends_after_99_chars() {
    let mut e = editor();
    e.on_text_change(&"a".repeat(99));
    let _ = e.on_emoji_insert("😍");
    assert_eq!(e.text(), format!("{}😍", "a".repeat(99)));
}

#[test]
fn test_typing_after_insert_overflow_is_rejected() {
    let mut e = editor();
    e.on_text_change(&"a".repeat(100));
    let _ = e.on_emoji_insert("😍");
    e.focus();
    type_str(&mut e, "b");
    assert_eq!(e.char_count(), 101);

    e.update(key(KeyCode::Backspace));
    assert_eq!(e.char_count(), 100);
}

#[test]
fn test_insert_resets_search_and_persists() {
    let store = MemoryStore::new();
    let mut e = editor_with(store.clone(), RecordingClipboard::default(), MockIndex::default());
    let _ = e.on_search_query_change("pizza");
    settle(&mut e);
    e.results = vec!["🍕".to_string()];

    let _ = e.on_emoji_insert("🍕");
    assert_eq!(e.search_query(), "");
    assert_eq!(e.deferred_query(), "");
    assert!(e.search_results().is_empty());
    assert!(!e.search_pending());

    let due = persist_due(&e);
    e.update(due);
    assert_eq!(store.writes().last().map(|w| w.1.as_str()), Some("🍕"));
}

#[test]
fn test_insert_keeps_picker_visibility() {
    let mut e = editor();
    let _ = e.toggle_picker();
    let _ = e.on_emoji_insert("🚀");
    assert!(e.picker_visible());
}

#[test]
fn test_insert_records_frequent_use() {
    let mut e = editor();
    let _ = e.on_emoji_insert("🚀");
    let _ = e.on_emoji_insert("🍕");
    let _ = e.on_emoji_insert("🍕");
    assert_eq!(e.picker().frequent(), vec!["🍕".to_string(), "🚀".to_string()]);
}

#[test]
fn test_picker_selection_is_inserted() {
    let mut e = editor();
    let own: Msg = Box::new(EmojiSelectMsg {
        picker_id: e.picker().id(),
        native: "🎉".to_string(),
    });
    assert!(e.update(own).is_some());
    assert_eq!(e.text(), "🎉");

    let foreign: Msg = Box::new(EmojiSelectMsg {
        picker_id: e.picker().id() + 1000,
        native: "🐙".to_string(),
    });
    assert!(e.update(foreign).is_none());
    assert_eq!(e.text(), "🎉");
}

// --- picker toggle ---

#[test]
fn test_toggle_picker_flips_visibility_only() {
    let mut e = editor();
    e.results = vec!["🍕".to_string()];
    assert!(e.toggle_picker().is_some());
    assert!(e.picker_visible());
    assert!(e.toggle_picker().is_none());
    assert!(!e.picker_visible());
    assert!(e.toggle_picker().is_none());
    assert!(e.picker_visible());
    assert_eq!(e.search_results(), &["🍕".to_string()]);
}

#[test]
fn test_hiding_picker_returns_focus_to_text() {
    let mut e = editor();
    e.focus();
    let _ = e.toggle_picker();
    e.set_focus(Focus::Picker);
    assert!(e.picker().focused());
    let _ = e.toggle_picker();
    assert_eq!(e.focus_target(), Focus::Text);
    assert!(!e.picker().focused());
}

// --- deferred query and search ---

#[test]
fn test_query_echoes_immediately_and_settles_later() {
    let mut e = editor();
    let _ = e.on_search_query_change("p");
    assert_eq!(e.search_query(), "p");
    assert_eq!(e.deferred_query(), "");
    settle(&mut e);
    assert_eq!(e.deferred_query(), "p");
    assert!(e.search_pending());
}

#[test]
fn test_query_burst_settles_once() {
    let index = MockIndex::default();
    let mut e = editor_with(MemoryStore::new(), RecordingClipboard::default(), index.clone());

    let _ = e.on_search_query_change("p");
    let stale: Msg = Box::new(DeferredQueryMsg {
        id: e.id(),
        tag: e.defer_tag,
        query: "p".to_string(),
    });
    let _ = e.on_search_query_change("pi");
    let _ = e.on_search_query_change("piz");

    assert!(e.update(stale).is_none());
    assert_eq!(e.deferred_query(), "");
    assert_eq!(index.calls(), 0);

    settle(&mut e);
    assert_eq!(e.deferred_query(), "piz");
    assert_eq!(index.calls(), 1);
}

#[test]
fn test_resettling_same_query_does_not_search_again() {
    let index = MockIndex::default();
    let mut e = editor_with(MemoryStore::new(), RecordingClipboard::default(), index.clone());
    let _ = e.on_search_query_change("cat");
    settle(&mut e);
    let _ = e.on_search_query_change("cat");
    settle(&mut e);
    assert_eq!(index.calls(), 1);
}

#[test]
fn test_blank_query_clears_results_without_lookup() {
    let index = MockIndex::default();
    let mut e = editor_with(MemoryStore::new(), RecordingClipboard::default(), index.clone());
    e.results = vec!["🍕".to_string()];
    e.deferred_query = "pizza".to_string();

    let _ = e.on_search_query_change("   ");
    settle(&mut e);

    assert!(e.search_results().is_empty());
    assert!(!e.search_pending());
    assert_eq!(index.calls(), 0);
}

#[tokio::test]
async fn test_hits_map_to_primary_glyphs() {
    let index = MockIndex::returning(Ok(vec![
        hit("+1", &["👍", "👍🏻", "👍🏿"]),
        hit("pizza", &["🍕"]),
    ]));
    let mut e = editor_with(MemoryStore::new(), RecordingClipboard::default(), index);
    let msg = search_now(&mut e, "thing").await;
    e.update(msg);
    assert_eq!(e.search_results(), &["👍".to_string(), "🍕".to_string()]);
    assert!(!e.search_pending());
    assert!(e.results_selectable());
}

#[tokio::test]
async fn test_zero_hits_show_no_results() {
    let mut e = editor_with(
        MemoryStore::new(),
        RecordingClipboard::default(),
        MockIndex::returning(Ok(vec![])),
    );
    let msg = search_now(&mut e, "zzz").await;
    e.update(msg);
    assert_eq!(e.search_results(), &[NO_RESULTS.to_string()]);
    assert!(!e.results_selectable());
}

#[tokio::test]
async fn test_lookup_failure_shows_error() {
    let mut e = editor_with(
        MemoryStore::new(),
        RecordingClipboard::default(),
        MockIndex::returning(Err(SearchError::Failed("boom".to_string()))),
    );
    let msg = search_now(&mut e, "pizza").await;
    e.update(msg);
    assert_eq!(e.search_results(), &[SEARCH_ERROR.to_string()]);
    assert!(!e.search_pending());
}

#[tokio::test]
async fn test_late_response_never_overwrites_newer_one() {
    let mut e = editor();
    let q1 = search_now(&mut e, "🐱").await;
    let q2 = search_now(&mut e, "🐶").await;

    e.update(q2);
    assert_eq!(e.search_results(), &["🐶".to_string()]);
    e.update(q1);
    assert_eq!(e.search_results(), &["🐶".to_string()]);
}

#[tokio::test]
async fn test_response_after_clearing_query_is_dropped() {
    let mut e = editor();
    let pending = search_now(&mut e, "🐱").await;
    let _ = e.on_search_query_change("");
    settle(&mut e);
    e.update(pending);
    assert!(e.search_results().is_empty());
}

#[tokio::test]
async fn test_response_after_insert_is_dropped() {
    let mut e = editor();
    let pending = search_now(&mut e, "🐱").await;
    let _ = e.on_emoji_insert("🐶");
    e.update(pending);
    assert!(e.search_results().is_empty());
}

#[tokio::test]
async fn test_search_limit_caps_results() {
    let hits = (0..10).map(|i| hit(&format!("e{}", i), &["⭐"])).collect();
    let mut e = Model::new(
        Config::default().with_search_limit(3),
        MemoryStore::new(),
        RecordingClipboard::default(),
        Arc::new(MockIndex::returning(Ok(hits))),
    );
    let msg = search_now(&mut e, "star").await;
    e.update(msg);
    assert_eq!(e.search_results().len(), 3);
}

// --- copy ---

#[test]
fn test_copy_blank_text_does_nothing() {
    let clipboard = RecordingClipboard::default();
    let mut e = editor_with(MemoryStore::new(), clipboard.clone(), MockIndex::default());
    assert!(e.on_copy_request().is_none());
    e.on_text_change("  \n ");
    assert!(e.on_copy_request().is_none());
    assert!(!e.copied());
    assert!(clipboard.writes.lock().unwrap().is_empty());
}

#[test]
fn test_copy_sets_flag_until_alert_expires() {
    let clipboard = RecordingClipboard::default();
    let mut e = editor_with(MemoryStore::new(), clipboard.clone(), MockIndex::default());
    e.on_text_change("hi");
    assert!(e.on_copy_request().is_some());
    assert!(e.copied());
    assert_eq!(*clipboard.writes.lock().unwrap(), vec!["hi".to_string()]);

    let expired = alert_due(&e);
    e.update(expired);
    assert!(!e.copied());
}

#[test]
fn test_second_copy_restarts_alert() {
    let mut e = editor();
    e.on_text_change("hi");
    let _ = e.on_copy_request();
    let first_expiry = alert_due(&e);
    let _ = e.on_copy_request();
    let second_expiry = alert_due(&e);

    e.update(first_expiry);
    assert!(e.copied());
    e.update(second_expiry);
    assert!(!e.copied());
}

#[test]
fn test_clipboard_failure_leaves_flag_down() {
    let clipboard = RecordingClipboard {
        fail: true,
        ..Default::default()
    };
    let mut e = editor_with(MemoryStore::new(), clipboard, MockIndex::default());
    e.on_text_change("hi");
    assert!(e.on_copy_request().is_none());
    assert!(!e.copied());
}

// --- keys ---

#[test]
fn test_keys_ignored_while_blurred() {
    let mut e = editor();
    type_str(&mut e, "hi");
    assert_eq!(e.text(), "");
}

#[test]
fn test_typing_edits_at_cursor() {
    let mut e = editor();
    e.focus();
    type_str(&mut e, "hllo");
    e.update(key(KeyCode::Home));
    e.update(key(KeyCode::Right));
    type_str(&mut e, "e");
    assert_eq!(e.text(), "hello");
    assert_eq!(e.cursor(), 2);

    e.update(key(KeyCode::End));
    e.update(key(KeyCode::Backspace));
    assert_eq!(e.text(), "hell");

    e.update(key(KeyCode::Home));
    e.update(key(KeyCode::Delete));
    assert_eq!(e.text(), "ell");
}

#[test]
fn test_enter_inserts_newline_in_text() {
    let mut e = editor();
    e.focus();
    type_str(&mut e, "a");
    e.update(key(KeyCode::Enter));
    type_str(&mut e, "b");
    assert_eq!(e.text(), "a\nb");
    e.update(key(KeyCode::Up));
    assert_eq!(e.cursor(), 1);
}

#[test]
fn test_backspace_removes_whole_emoji() {
    let mut e = editor();
    e.focus();
    let _ = e.on_emoji_insert("👍🏽");
    e.update(key(KeyCode::Backspace));
    assert_eq!(e.text(), "");
}

#[test]
fn test_typing_at_limit_is_rejected() {
    let mut e = editor();
    e.focus();
    e.on_text_change(&"a".repeat(100));
    type_str(&mut e, "b");
    assert_eq!(e.text(), "a".repeat(100));
}

#[test]
fn test_shortcut_keys() {
    let clipboard = RecordingClipboard::default();
    let mut e = editor_with(MemoryStore::new(), clipboard.clone(), MockIndex::default());
    e.focus();
    type_str(&mut e, "yo");

    e.update(ctrl('y'));
    assert!(e.copied());
    assert_eq!(*clipboard.writes.lock().unwrap(), vec!["yo".to_string()]);

    e.update(ctrl('e'));
    assert!(e.picker_visible());

    e.update(ctrl('l'));
    assert_eq!(e.text(), "");
}

#[test]
fn test_tab_cycles_focus() {
    let mut e = editor();
    e.focus();
    assert_eq!(e.focus_target(), Focus::Text);
    e.update(key(KeyCode::Tab));
    assert_eq!(e.focus_target(), Focus::Search);
    // no results and no picker: wraps back to text
    e.update(key(KeyCode::Tab));
    assert_eq!(e.focus_target(), Focus::Text);

    e.update(ctrl('e'));
    e.update(key(KeyCode::BackTab));
    assert_eq!(e.focus_target(), Focus::Picker);
    e.update(key(KeyCode::Esc));
    assert_eq!(e.focus_target(), Focus::Text);
}

#[test]
fn test_typing_in_search_updates_query() {
    let mut e = editor();
    e.focus();
    e.set_focus(Focus::Search);
    type_str(&mut e, "piz");
    assert_eq!(e.search_query(), "piz");
    e.update(key(KeyCode::Backspace));
    assert_eq!(e.search_query(), "pi");
    assert_eq!(e.text(), "");
}

#[test]
fn test_result_row_insert() {
    let mut e = editor();
    e.focus();
    e.results = vec!["🐶".to_string(), "🐱".to_string()];
    e.set_focus(Focus::Search);
    e.update(key(KeyCode::Enter));
    assert_eq!(e.focus_target(), Focus::Results);

    e.update(key(KeyCode::Right));
    e.update(key(KeyCode::Right));
    assert_eq!(e.result_cursor(), 1);
    assert!(e.update(key(KeyCode::Enter)).is_some());

    assert_eq!(e.text(), "🐱");
    assert!(e.search_results().is_empty());
    assert_eq!(e.focus_target(), Focus::Text);
}

#[test]
fn test_sentinel_results_are_not_focusable() {
    let mut e = editor();
    e.focus();
    e.results = vec![NO_RESULTS.to_string()];
    e.set_focus(Focus::Results);
    assert_eq!(e.focus_target(), Focus::Search);
}

#[test]
fn test_picker_keys_are_forwarded_when_focused() {
    let mut e = editor();
    e.focus();
    let _ = e.toggle_picker();
    let loaded: Msg = Box::new(crate::picker::PickerLoadedMsg {
        picker_id: e.picker().id(),
    });
    e.update(loaded);
    e.set_focus(Focus::Picker);

    e.update(key(KeyCode::Right));
    assert_eq!(e.picker().cursor(), 1);
    assert_eq!(e.text(), "");
}

// --- view ---

#[test]
fn test_view_empty_state() {
    let e = editor();
    let view = plain_view(&e);
    assert!(view.contains(TITLE));
    assert!(view.contains("📝"));
    assert!(view.contains("0/100"));
    assert!(view.contains("[😊]"));
    assert!(!view.contains(COPIED_ALERT));
}

#[test]
fn test_view_reflects_state() {
    let mut e = editor();
    e.on_text_change("hi");
    let _ = e.toggle_picker();
    let _ = e.on_copy_request();
    e.results = vec![NO_RESULTS.to_string()];

    let view = plain_view(&e);
    assert!(view.contains("hi"));
    assert!(view.contains("2/100"));
    assert!(view.contains("[✕]"));
    assert!(view.contains("Loading..."));
    assert!(view.contains(NO_RESULTS));
}

#[test]
fn test_view_shows_copy_alert() {
    let mut e = editor();
    e.on_text_change("hi");
    let _ = e.on_copy_request();
    assert!(plain_view(&e).contains(COPIED_ALERT));
}

#[test]
fn test_view_counter_over_limit() {
    let mut e = editor();
    e.on_text_change(&"a".repeat(100));
    let _ = e.on_emoji_insert("😍");
    assert!(plain_view(&e).contains("101/100"));
}

// --- timing, on tokio's paused clock ---

async fn run(cmd: bubbletea_rs::Cmd) -> Msg {
    cmd.await.expect("command yields a message")
}

#[tokio::test(start_paused = true)]
async fn test_persist_waits_for_quiet_period() {
    let store = MemoryStore::new();
    let mut e = editor_with(store.clone(), RecordingClipboard::default(), MockIndex::default());
    let start = Instant::now();

    let stale = tokio::spawn(e.on_text_change("a").expect("accepted"));
    let latest = tokio::spawn(e.on_text_change("ab").expect("accepted"));

    let stale = stale.await.unwrap().expect("persist message");
    let latest = latest.await.unwrap().expect("persist message");
    let elapsed = start.elapsed();
    assert!(elapsed >= Duration::from_millis(500), "fired after {:?}", elapsed);
    assert!(elapsed < Duration::from_millis(510), "fired after {:?}", elapsed);

    e.update(stale);
    assert!(store.writes().is_empty());
    e.update(latest);
    assert_eq!(store.writes(), vec![("emojiText".to_string(), "ab".to_string())]);
}

#[tokio::test(start_paused = true)]
async fn test_insert_persists_after_quiet_period() {
    let store = MemoryStore::new();
    let mut e = editor_with(store.clone(), RecordingClipboard::default(), MockIndex::default());
    let start = Instant::now();

    let msg = run(e.on_emoji_insert("🌋")).await;
    assert!(start.elapsed() >= Duration::from_millis(500));
    e.update(msg);
    assert_eq!(store.writes(), vec![("emojiText".to_string(), "🌋".to_string())]);
}

#[tokio::test(start_paused = true)]
async fn test_copy_alert_lasts_two_seconds() {
    let mut e = editor();
    let _ = e.on_text_change("hi");
    let start = Instant::now();

    let msg = run(e.on_copy_request().expect("copied")).await;
    let elapsed = start.elapsed();
    assert!(elapsed >= Duration::from_millis(2000), "cleared after {:?}", elapsed);
    assert!(elapsed < Duration::from_millis(2010), "cleared after {:?}", elapsed);

    assert!(e.copied());
    e.update(msg);
    assert!(!e.copied());
}

#[tokio::test(start_paused = true)]
async fn test_second_copy_extends_alert_to_three_seconds() {
    let mut e = editor();
    let _ = e.on_text_change("hi");
    let start = Instant::now();

    let first = tokio::spawn(e.on_copy_request().expect("copied"));
    tokio::time::sleep(Duration::from_millis(1000)).await;
    let second = tokio::spawn(e.on_copy_request().expect("copied"));

    let first = first.await.unwrap().expect("alert message");
    assert!(start.elapsed() >= Duration::from_millis(2000));
    e.update(first);
    assert!(e.copied());

    let second = second.await.unwrap().expect("alert message");
    let elapsed = start.elapsed();
    assert!(elapsed >= Duration::from_millis(3000), "cleared after {:?}", elapsed);
    assert!(elapsed < Duration::from_millis(3010), "cleared after {:?}", elapsed);
    e.update(second);
    assert!(!e.copied());
}

#[tokio::test(start_paused = true)]
async fn test_deferred_query_settles_without_delay() {
    let index = MockIndex::default();
    let mut e = editor_with(MemoryStore::new(), RecordingClipboard::default(), index.clone());
    let start = Instant::now();

    let stale = run(e.on_search_query_change("p")).await;
    let latest = run(e.on_search_query_change("pi")).await;
    assert!(start.elapsed() < Duration::from_millis(5));

    assert!(e.update(stale).is_none());
    assert!(e.update(latest).is_some());
    assert_eq!(e.deferred_query(), "pi");
    assert_eq!(index.calls(), 1);
}
