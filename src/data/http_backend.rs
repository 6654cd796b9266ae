use crate::domain::api::{ReceptionBackend, SearchBackend};
use crate::domain::error::FrontendError;
use crate::domain::models::{AdvancedSearchRequest, Page, SearchResponse};
use anyhow::Result;
use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, instrument, warn};
use url::Url;

// User-facing messages, one per endpoint variant. Every HTTP or transport
// failure on a given endpoint collapses to its message.
pub const MSG_SEARCH_SIMPLE: &str = "Erreur lors de la recherche simple";
pub const MSG_SEARCH_FIELDS: &str = "Erreur lors de la recherche dans les champs";
pub const MSG_SEARCH_ADVANCED: &str = "Erreur lors de la recherche avancée";
pub const MSG_SEARCH_SIMILAR: &str = "Erreur lors de la recherche de contenu similaire";
pub const MSG_SEARCH_FULL_TEXT: &str = "Erreur lors de la recherche full-text";
pub const MSG_SEARCH_TERM: &str = "Erreur lors de la recherche par terme";
pub const MSG_RECEPTION: &str = "Erreur lors de la communication avec le backend";

/// HTTP implementation of the search and reception backends. One request
/// per call: no retry, no timeout, no caching.
pub struct HttpSearchBackend {
    http: reqwest::Client,
    base_url: String,
}

impl HttpSearchBackend {
    pub fn new(base_url: &str) -> Result<Self, FrontendError> {
        let base_url = base_url.trim_end_matches('/').to_string();
        // Validate once here so per-request URL building cannot surprise.
        Url::parse(&base_url).map_err(|e| FrontendError::InvalidUrl(format!("{base_url}: {e}")))?;
        Ok(Self {
            http: reqwest::Client::new(),
            base_url,
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url, FrontendError> {
        let raw = format!("{}{}", self.base_url, path);
        Url::parse(&raw).map_err(|e| FrontendError::InvalidUrl(format!("{raw}: {e}")))
    }

    /// Builds `base + path` with the given pairs followed by `page` and
    /// `size`, percent-encoding every value.
    fn paged_url(
        &self,
        path: &str,
        params: &[(&str, &str)],
        page: Page,
    ) -> Result<Url, FrontendError> {
        let mut url = self.endpoint(path)?;
        {
            let mut pairs = url.query_pairs_mut();
            for (name, value) in params {
                pairs.append_pair(name, value);
            }
            pairs.append_pair("page", &page.page.to_string());
            pairs.append_pair("size", &page.size.to_string());
        }
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url, failure: &str) -> Result<T> {
        debug!(url = %url, "Sending GET request");
        let response = match self.http.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, "Request failed before reaching the backend");
                return Err(FrontendError::Network(failure.to_string()).into());
            }
        };
        read_json(response, failure).await
    }

    async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        url: Url,
        body: &B,
        failure: &str,
    ) -> Result<T> {
        debug!(url = %url, "Sending POST request");
        let response = match self.http.post(url).json(body).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, "Request failed before reaching the backend");
                return Err(FrontendError::Network(failure.to_string()).into());
            }
        };
        read_json(response, failure).await
    }
}

async fn read_json<T: DeserializeOwned>(response: reqwest::Response, failure: &str) -> Result<T> {
    let status = response.status();
    if !status.is_success() {
        warn!(status = %status, "Backend responded with an error status");
        return Err(FrontendError::Backend(failure.to_string()).into());
    }
    match response.json::<T>().await {
        Ok(value) => Ok(value),
        Err(e) => {
            warn!(error = %e, "Failed to decode backend response body");
            Err(FrontendError::Network(failure.to_string()).into())
        }
    }
}

#[async_trait]
impl SearchBackend for HttpSearchBackend {
    #[instrument(skip(self), fields(query = query))]
    async fn search_simple(&self, query: &str, page: Page) -> Result<SearchResponse> {
        let url = self.paged_url("/api/search", &[("query", query)], page)?;
        self.get_json(url, MSG_SEARCH_SIMPLE).await
    }

    #[instrument(skip(self), fields(query = query))]
    async fn search_in_fields(
        &self,
        query: &str,
        fields: &[String],
        page: Page,
    ) -> Result<SearchResponse> {
        let fields = fields.join(",");
        let url = self.paged_url(
            "/api/search/fields",
            &[("query", query), ("fields", &fields)],
            page,
        )?;
        self.get_json(url, MSG_SEARCH_FIELDS).await
    }

    #[instrument(skip(self, request), fields(query = %request.query))]
    async fn search_advanced(&self, request: &AdvancedSearchRequest) -> Result<SearchResponse> {
        let url = self.endpoint("/api/search/advanced")?;
        self.post_json(url, request, MSG_SEARCH_ADVANCED).await
    }

    #[instrument(skip(self, text))]
    async fn search_similar_content(&self, text: &str, page: Page) -> Result<SearchResponse> {
        let url = self.paged_url("/api/search/similar-content", &[], page)?;
        // Body is the raw text JSON-encoded as a string, not an object.
        self.post_json(url, text, MSG_SEARCH_SIMILAR).await
    }

    #[instrument(skip(self), fields(query = query, match_type = match_type))]
    async fn search_full_text(
        &self,
        query: &str,
        fields: &[String],
        match_type: &str,
        page: Page,
    ) -> Result<SearchResponse> {
        let fields = fields.join(",");
        let url = self.paged_url(
            "/api/search/full-text",
            &[
                ("query", query),
                ("fields", &fields),
                ("matchType", match_type),
            ],
            page,
        )?;
        self.get_json(url, MSG_SEARCH_FULL_TEXT).await
    }

    #[instrument(skip(self), fields(field = field, value = value))]
    async fn search_term(
        &self,
        field: &str,
        value: &str,
        query_type: &str,
        page: Page,
    ) -> Result<SearchResponse> {
        let url = self.paged_url(
            "/api/search/term",
            &[("field", field), ("value", value), ("type", query_type)],
            page,
        )?;
        self.get_json(url, MSG_SEARCH_TERM).await
    }
}

#[async_trait]
impl ReceptionBackend for HttpSearchBackend {
    #[instrument(skip(self, payload), fields(target_url = target_url))]
    async fn send_to_reception(&self, target_url: &str, payload: &Value) -> Result<Value> {
        let mut url = self.endpoint("/api/reception")?;
        url.query_pairs_mut().append_pair("url", target_url);
        self.post_json(url, payload, MSG_RECEPTION).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backend() -> HttpSearchBackend {
        HttpSearchBackend::new("http://api.test").unwrap()
    }

    #[test]
    fn test_new_rejects_invalid_base_url() {
        assert!(HttpSearchBackend::new("not a url").is_err());
    }

    #[test]
    fn test_new_trims_trailing_slash() {
        let backend = HttpSearchBackend::new("http://api.test/").unwrap();
        let url = backend.endpoint("/api/search").unwrap();
        assert_eq!(url.as_str(), "http://api.test/api/search");
    }

    #[test]
    fn test_simple_search_url_matches_contract() {
        let url = backend()
            .paged_url("/api/search", &[("query", "cat")], Page::default())
            .unwrap();
        assert_eq!(url.as_str(), "http://api.test/api/search?query=cat&page=0&size=10");
    }

    #[test]
    fn test_query_values_are_url_encoded() {
        let url = backend()
            .paged_url("/api/search", &[("query", "chat noir & café")], Page::default())
            .unwrap();
        let query = url.query().unwrap();
        assert!(!query.contains(' '));
        assert_eq!(query.matches('&').count(), 2, "separators only: {query}");
        let decoded: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(decoded[0], ("query".to_string(), "chat noir & café".to_string()));
    }

    #[test]
    fn test_fields_are_comma_joined_in_one_parameter() {
        let fields = vec!["title".to_string(), "content".to_string()];
        let joined = fields.join(",");
        let url = backend()
            .paged_url(
                "/api/search/fields",
                &[("query", "chat"), ("fields", &joined)],
                Page::new(2, 25),
            )
            .unwrap();
        let decoded: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(
            decoded,
            vec![
                ("query".to_string(), "chat".to_string()),
                ("fields".to_string(), "title,content".to_string()),
                ("page".to_string(), "2".to_string()),
                ("size".to_string(), "25".to_string()),
            ]
        );
    }
}
