use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Default match type for the full-text endpoint.
pub const DEFAULT_MATCH_TYPE: &str = "multi_match";
/// Default query type for the term endpoint.
pub const DEFAULT_TERM_TYPE: &str = "term";

/// Pagination window sent with every search request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Page {
    pub page: u32,
    pub size: u32,
}

impl Page {
    pub fn new(page: u32, size: u32) -> Self {
        Self { page, size }
    }
}

impl Default for Page {
    fn default() -> Self {
        Self { page: 0, size: 10 }
    }
}

/// A document as returned by the backend. The client enforces no schema:
/// any field the backend omits falls back to its default.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchDocument {
    pub id: Option<String>,
    pub category: String,
    pub url: String,
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchHit {
    pub document: SearchDocument,
    pub score: f32,
    pub highlight: Option<Vec<String>>,
}

/// Envelope the backend wraps every search result list in.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchResponse {
    pub results: Vec<SearchHit>,
    pub total_hits: u64,
    pub page: u32,
    pub size: u32,
    pub search_time: u64,
    pub aggregations: Option<Map<String, Value>>,
    pub timestamp: Option<DateTime<Utc>>,
}

/// Body of `POST /api/search/advanced`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdvancedSearchRequest {
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<Map<String, Value>>,
    pub page: u32,
    pub size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    pub sort_order: String,
}

impl AdvancedSearchRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }
}

impl Default for AdvancedSearchRequest {
    fn default() -> Self {
        Self {
            query: String::new(),
            fields: None,
            filters: None,
            page: 0,
            size: 10,
            sort_by: None,
            sort_order: "desc".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_defaults_to_first_page_of_ten() {
        let page = Page::default();
        assert_eq!(page.page, 0);
        assert_eq!(page.size, 10);
    }

    #[test]
    fn test_response_parses_camel_case_payload() {
        let payload = serde_json::json!({
            "results": [
                {
                    "document": {
                        "category": "presse",
                        "url": "https://exemple.fr/articles/1",
                        "title": "Un titre",
                        "content": "Le contenu"
                    },
                    "score": 1.5
                }
            ],
            "totalHits": 42,
            "page": 1,
            "size": 10,
            "searchTime": 7
        });

        let response: SearchResponse = serde_json::from_value(payload).unwrap();
        assert_eq!(response.total_hits, 42);
        assert_eq!(response.search_time, 7);
        assert_eq!(response.results.len(), 1);
        assert_eq!(response.results[0].document.title, "Un titre");
        assert!(response.results[0].highlight.is_none());
    }

    #[test]
    fn test_response_tolerates_missing_fields() {
        let response: SearchResponse = serde_json::from_str(r#"{"results": []}"#).unwrap();
        assert!(response.results.is_empty());
        assert_eq!(response.total_hits, 0);
    }

    #[test]
    fn test_advanced_request_serializes_without_empty_options() {
        let request = AdvancedSearchRequest::new("chat");
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["query"], "chat");
        assert_eq!(value["sortOrder"], "desc");
        assert!(value.get("fields").is_none());
        assert!(value.get("filters").is_none());
        assert!(value.get("sortBy").is_none());
    }
}
