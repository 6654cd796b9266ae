use crate::domain::api::SearchBackend;
use crate::domain::models::{Page, SearchHit};
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// State behind the search bar: query text, the current result list, a
/// loading flag and the last error. One submit issues one simple search;
/// submits are independent and unordered relative to each other.
pub struct SearchBar<B: SearchBackend> {
    backend: Arc<B>,
    query: String,
    results: Vec<SearchHit>,
    loading: bool,
    error: Option<String>,
}

impl<B: SearchBackend> SearchBar<B> {
    pub fn new(backend: Arc<B>) -> Self {
        Self {
            backend,
            query: String::new(),
            results: Vec::new(),
            loading: false,
            error: None,
        }
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[SearchHit] {
        &self.results
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Runs the current query. On success the result list is replaced; on
    /// failure the error message is shown over an empty list. The loading
    /// flag is cleared either way.
    #[instrument(skip(self), fields(query = %self.query))]
    pub async fn submit(&mut self) {
        self.loading = true;
        self.error = None;

        match self.backend.search_simple(&self.query, Page::default()).await {
            Ok(response) => {
                debug!(
                    hits = response.results.len(),
                    total_hits = response.total_hits,
                    "Search completed"
                );
                self.results = response.results;
            }
            Err(e) => {
                warn!(error = %e, "Search failed");
                self.error = Some(e.to_string());
                self.results.clear();
            }
        }

        self.loading = false;
    }
}
