use crate::plugin::records::{Chapter, Comic, ComicDetails};
use crate::shared::errors::AppResult;
use async_trait::async_trait;

/// Interface the host loads repository plugins through.
///
/// The two error policies of the adapter are encoded in the signatures: the
/// listing operations are fail-soft and return a plain collection (an empty
/// result is ambiguous between "no matches" and "request failed"), while
/// detail and chapter lookups are fail-hard and propagate errors.
#[async_trait]
pub trait RepoPlugin: Send + Sync {
    /// Human-readable repository name
    fn repo_name(&self) -> &'static str;

    /// Short tag the host keys this repository by
    fn repo_tag(&self) -> &'static str;

    /// Remote endpoint this repository is bound to
    fn repo_url(&self) -> &str;

    /// Default listing of the catalog
    async fn list(&self) -> Vec<Comic>;

    /// Search comics by name. Soft failure: any error yields an empty result.
    async fn search(&self, term: &str) -> Vec<Comic>;

    /// Look up details for a single comic by its site id
    async fn get_details(&self, site_id: &str) -> AppResult<ComicDetails>;

    /// List the chapters of a comic by its site id
    async fn get_chapters(&self, site_id: &str) -> AppResult<Vec<Chapter>>;
}
