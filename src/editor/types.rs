//! Messages and small types for the editor.

use crate::emoji::SearchHit;
use crate::error::SearchError;
use bubbletea_rs::Msg;

/// Shown in the results row when a lookup matched nothing.
pub const NO_RESULTS: &str = "no results";

/// Shown in the results row when a lookup failed.
pub const SEARCH_ERROR: &str = "error";

/// Which part of the editor receives typed keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The main text area.
    #[default]
    Text,
    /// The search input.
    Search,
    /// The row of search results.
    Results,
    /// The picker grid.
    Picker,
}

/// Debounce timer for persistence. Only the latest tag writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PersistMsg {
    /// Editor the timer belongs to.
    pub id: i64,
    pub(super) tag: u64,
}

/// Ends the copy alert. Only the latest tag clears it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyAlertMsg {
    /// Editor the timer belongs to.
    pub id: i64,
    pub(super) tag: u64,
}

/// Settles the deferred copy of the search query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeferredQueryMsg {
    /// Editor the query belongs to.
    pub id: i64,
    pub(super) tag: u64,
    /// The query as it was when scheduled.
    pub query: String,
}

/// Outcome of one search lookup.
#[derive(Debug, Clone)]
pub struct SearchResultMsg {
    /// Editor that issued the lookup.
    pub id: i64,
    /// Sequence number of the request.
    pub seq: u64,
    /// Hits or the lookup error.
    pub outcome: Result<Vec<SearchHit>, SearchError>,
}

impl From<PersistMsg> for Msg {
    fn from(msg: PersistMsg) -> Self {
        Box::new(msg) as Msg
    }
}

impl From<CopyAlertMsg> for Msg {
    fn from(msg: CopyAlertMsg) -> Self {
        Box::new(msg) as Msg
    }
}

impl From<DeferredQueryMsg> for Msg {
    fn from(msg: DeferredQueryMsg) -> Self {
        Box::new(msg) as Msg
    }
}

impl From<SearchResultMsg> for Msg {
    fn from(msg: SearchResultMsg) -> Self {
        Box::new(msg) as Msg
    }
}
