use crate::domain::models::{AdvancedSearchRequest, Page, SearchResponse};
use crate::domain::user::{AuthOutcome, LoginRequest, RegisterRequest};
use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;

/// One method per search endpoint variant. The variants differ only in
/// path and parameter encoding, not in behavior.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    async fn search_simple(&self, query: &str, page: Page) -> Result<SearchResponse>;
    async fn search_in_fields(
        &self,
        query: &str,
        fields: &[String],
        page: Page,
    ) -> Result<SearchResponse>;
    async fn search_advanced(&self, request: &AdvancedSearchRequest) -> Result<SearchResponse>;
    async fn search_similar_content(&self, text: &str, page: Page) -> Result<SearchResponse>;
    async fn search_full_text(
        &self,
        query: &str,
        fields: &[String],
        match_type: &str,
        page: Page,
    ) -> Result<SearchResponse>;
    async fn search_term(
        &self,
        field: &str,
        value: &str,
        query_type: &str,
        page: Page,
    ) -> Result<SearchResponse>;
}

/// Relay endpoint forwarding an arbitrary JSON payload to the backend.
#[async_trait]
pub trait ReceptionBackend: Send + Sync {
    async fn send_to_reception(&self, target_url: &str, payload: &Value) -> Result<Value>;
}

#[async_trait]
pub trait AuthBackend: Send + Sync {
    async fn login(&self, request: LoginRequest) -> Result<AuthOutcome>;
    async fn register(&self, request: RegisterRequest) -> Result<AuthOutcome>;
}
