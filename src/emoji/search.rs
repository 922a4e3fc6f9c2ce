//! Emoji search index.
//!
//! The editor only sees the [`SearchIndex`] trait: a query goes in, a future
//! comes back that resolves to a ranked list of [`SearchHit`]s. The default
//! [`DatasetIndex`] fuzzy-matches every whitespace-separated term of the
//! query against the id, name and keywords of each emoji in the shared
//! dataset.

use super::{dataset, Emoji};
use crate::error::SearchError;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use std::future::Future;
use std::pin::Pin;

/// Default cap on returned hits.
pub const DEFAULT_LIMIT: usize = 90;

/// A single search result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    /// Emoji identifier.
    pub id: String,
    /// Human readable name.
    pub name: String,
    /// Glyph variants, primary first. Never empty.
    pub skins: Vec<String>,
}

impl SearchHit {
    /// The glyph shown for this hit.
    pub fn primary(&self) -> Option<&str> {
        self.skins.first().map(String::as_str)
    }
}

impl From<&Emoji> for SearchHit {
    fn from(e: &Emoji) -> Self {
        Self {
            id: e.id.clone(),
            name: e.name.to_string(),
            skins: e.skins(),
        }
    }
}

/// Future returned by [`SearchIndex::search`].
pub type SearchFuture = Pin<Box<dyn Future<Output = Result<Vec<SearchHit>, SearchError>> + Send>>;

/// An asynchronous emoji lookup.
pub trait SearchIndex: Send + Sync {
    /// Looks up `query`. The returned future owns everything it needs.
    fn search(&self, query: &str) -> SearchFuture;
}

/// Fuzzy index over the built-in dataset.
#[derive(Debug, Clone)]
pub struct DatasetIndex {
    limit: usize,
}

impl Default for DatasetIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl DatasetIndex {
    /// Creates an index returning at most [`DEFAULT_LIMIT`] hits.
    pub fn new() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
        }
    }

    /// Sets the maximum number of hits per query.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// The configured hit limit.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Runs a lookup synchronously.
    pub fn search_now(&self, query: &str) -> Vec<SearchHit> {
        let query = query.to_lowercase();
        let terms: Vec<&str> = query.split_whitespace().collect();
        if terms.is_empty() || self.limit == 0 {
            return Vec::new();
        }

        let matcher = SkimMatcherV2::default();
        let mut scored: Vec<(i64, &Emoji)> = dataset()
            .all()
            .iter()
            .filter_map(|e| score(&matcher, e, &terms).map(|s| (s, e)))
            .collect();

        // stable: equal scores keep table order
        scored.sort_by(|a, b| b.0.cmp(&a.0));
        scored
            .into_iter()
            .take(self.limit)
            .map(|(_, e)| SearchHit::from(e))
            .collect()
    }
}

// Every term has to hit at least one field; the best field counts.
fn score(matcher: &SkimMatcherV2, emoji: &Emoji, terms: &[&str]) -> Option<i64> {
    let mut total = 0;
    for term in terms {
        let best = std::iter::once(emoji.id.as_str())
            .chain(std::iter::once(emoji.name))
            .chain(emoji.keywords.iter().copied())
            .filter_map(|field| matcher.fuzzy_match(field, term))
            .max()?;
        total += best;
    }
    Some(total)
}

impl SearchIndex for DatasetIndex {
    fn search(&self, query: &str) -> SearchFuture {
        let index = self.clone();
        let query = query.to_string();
        Box::pin(async move { Ok(index.search_now(&query)) })
    }
}
