//! HQ Now catalog adapter
//!
//! One GraphQL client bound to the HQ Now endpoint. Every operation is a
//! single stateless request/response exchange; nothing is cached, retried or
//! rate limited here.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use tracing::{debug, info};

use super::mapper::HqNowMapper;
use super::models::{
    GraphQlRequest, GraphQlResponse, HqChaptersResponse, HqDetailsResponse, HqSearchResponse,
};
use super::queries::HqNowQueries;
use crate::plugin::records::{Chapter, Comic, ComicDetails};
use crate::plugin::traits::RepoPlugin;
use crate::shared::errors::{AppError, AppResult};

pub const REPO_NAME: &str = "HQ Now";
pub const REPO_TAG: &str = "hqnow";
pub const REPO_URL: &str = "https://admin.hq-now.com/graphql";

/// The catalog has no list-all query; a fixed single-letter search stands in
/// for the default listing and does not guarantee completeness.
pub const DEFAULT_LIST_TERM: &str = "A";

pub struct HqNowAdapter {
    client: Client,
    base_url: String,
    mapper: HqNowMapper,
}

impl HqNowAdapter {
    pub fn new() -> AppResult<Self> {
        Self::with_base_url(REPO_URL)
    }

    /// Bind the adapter to a different endpoint (used by tests).
    pub fn with_base_url(base_url: impl Into<String>) -> AppResult<Self> {
        // No timeout configured here; transport defaults apply.
        let client = Client::builder()
            .user_agent("hqnow-plugin/0.1")
            .build()
            .map_err(|e| {
                AppError::ExternalServiceError(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            mapper: HqNowMapper::new(),
        })
    }

    /// Default listing of the catalog, delegating to [`search`](Self::search)
    /// with the fixed term.
    pub async fn list(&self) -> Vec<Comic> {
        self.search(DEFAULT_LIST_TERM).await
    }

    /// Soft name search: any failure collapses to an empty result,
    /// indistinguishable from a search with no matches.
    pub async fn search(&self, term: &str) -> Vec<Comic> {
        self.search_comics(term).await.unwrap_or_default()
    }

    /// Fallible name search. Host-facing callers go through
    /// [`search`](Self::search), which flattens errors.
    pub async fn search_comics(&self, term: &str) -> AppResult<Vec<Comic>> {
        info!("HQ Now: searching for '{}'", term);

        let data = self
            .execute_query(
                HqNowQueries::search_by_name(),
                HqNowQueries::search_variables(term),
            )
            .await?;

        let response: HqSearchResponse = serde_json::from_value(data)?;

        let comics = self.mapper.to_comic_list(response.get_hqs_by_name);
        info!("HQ Now: found {} results for '{}'", comics.len(), term);
        Ok(comics)
    }

    /// Detail lookup for a single comic. Errors propagate; an empty remote
    /// result is a `NotFound` error, never a partial record.
    pub async fn get_details(&self, site_id: &str) -> AppResult<ComicDetails> {
        let id = Self::parse_site_id(site_id)?;

        info!("HQ Now: getting details for comic '{}'", site_id);

        let data = self
            .execute_query(
                HqNowQueries::details_by_id(),
                HqNowQueries::details_variables(id),
            )
            .await?;

        let response: HqDetailsResponse = serde_json::from_value(data)?;

        let detail = response
            .get_hqs_by_id
            .into_iter()
            .next()
            .ok_or_else(|| AppError::NotFound(format!("No comic found for id '{}'", site_id)))?;

        Ok(self.mapper.to_details(detail, site_id))
    }

    /// Chapter listing for a comic. Errors propagate.
    pub async fn get_chapters(&self, site_id: &str) -> AppResult<Vec<Chapter>> {
        let id = Self::parse_site_id(site_id)?;

        info!("HQ Now: getting chapters for comic '{}'", site_id);

        let data = self
            .execute_query(
                HqNowQueries::chapters_by_hq_id(),
                HqNowQueries::chapters_variables(id),
            )
            .await?;

        let response: HqChaptersResponse = serde_json::from_value(data)?;

        let chapters = response
            .get_chapters_by_hq_id
            .into_iter()
            .map(|chapter| self.mapper.to_chapter(chapter, site_id))
            .collect::<AppResult<Vec<Chapter>>>()?;

        info!(
            "HQ Now: found {} chapters for comic '{}'",
            chapters.len(),
            site_id
        );
        Ok(chapters)
    }

    /// Execute a GraphQL query against the endpoint
    async fn execute_query(&self, query: &str, variables: Value) -> AppResult<Value> {
        let request = GraphQlRequest {
            query: query.to_string(),
            variables: Some(variables),
        };

        debug!("HQ Now: sending GraphQL request to {}", self.base_url);

        let response = self
            .client
            .post(&self.base_url)
            .json(&request)
            .send()
            .await?;

        self.handle_response_status(response.status())?;

        let envelope: GraphQlResponse<Value> = response.json().await?;

        // Handle GraphQL errors
        if let Some(errors) = envelope.errors {
            let messages: Vec<String> = errors.into_iter().map(|e| e.message).collect();
            return Err(AppError::ApiError(format!(
                "HQ Now GraphQL errors: {}",
                messages.join(", ")
            )));
        }

        envelope
            .data
            .ok_or_else(|| AppError::ApiError("HQ Now response contained no data".to_string()))
    }

    fn handle_response_status(&self, status: StatusCode) -> AppResult<()> {
        match status {
            StatusCode::OK => Ok(()),
            StatusCode::TOO_MANY_REQUESTS => Err(AppError::RateLimitError(
                "HQ Now rate limit exceeded".to_string(),
            )),
            StatusCode::BAD_REQUEST => {
                Err(AppError::ApiError("Bad request to HQ Now API".to_string()))
            }
            StatusCode::INTERNAL_SERVER_ERROR | StatusCode::SERVICE_UNAVAILABLE => Err(
                AppError::ExternalServiceError("HQ Now service unavailable".to_string()),
            ),
            _ => Err(AppError::ApiError(format!(
                "Unexpected status code from HQ Now: {}",
                status
            ))),
        }
    }

    fn parse_site_id(site_id: &str) -> AppResult<i32> {
        site_id
            .parse()
            .map_err(|_| AppError::ValidationError(format!("Invalid HQ Now id: {}", site_id)))
    }
}

#[async_trait]
impl RepoPlugin for HqNowAdapter {
    fn repo_name(&self) -> &'static str {
        REPO_NAME
    }

    fn repo_tag(&self) -> &'static str {
        REPO_TAG
    }

    fn repo_url(&self) -> &str {
        &self.base_url
    }

    async fn list(&self) -> Vec<Comic> {
        self.list().await
    }

    async fn search(&self, term: &str) -> Vec<Comic> {
        self.search(term).await
    }

    async fn get_details(&self, site_id: &str) -> AppResult<ComicDetails> {
        self.get_details(site_id).await
    }

    async fn get_chapters(&self, site_id: &str) -> AppResult<Vec<Chapter>> {
        self.get_chapters(site_id).await
    }
}
