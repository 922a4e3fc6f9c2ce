//! Error types for the component's external seams.
//!
//! None of these ever reach the user as a crash: the editor downgrades each
//! one to a silent no-op or a sentinel string in the results row.

use thiserror::Error;

/// Failure reading or writing the key-value store.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the backing file failed.
    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),

    /// The backing file holds something other than a string map.
    #[error("storage file is not a valid JSON object: {0}")]
    Json(#[from] serde_json::Error),

    /// The platform reports no data directory.
    #[error("no data directory available for the default store")]
    NoDataDir,
}

/// Failure writing to the system clipboard.
#[derive(Debug, Error)]
pub enum ClipboardError {
    /// No clipboard could be opened, or support is compiled out.
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),

    /// The clipboard rejected the write.
    #[error("clipboard write failed: {0}")]
    Write(String),
}

/// Failure of an emoji search lookup.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SearchError {
    /// The index has not finished loading.
    #[error("search index not ready")]
    NotReady,

    /// The index reported an error.
    #[error("search failed: {0}")]
    Failed(String),
}
