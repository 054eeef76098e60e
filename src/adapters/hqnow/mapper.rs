//! Field mapping from HQ Now wire models to the host's record shapes.

use super::models::{HqChapter, HqDetail, HqSummary};
use crate::plugin::records::{Chapter, Comic, ComicDetails, PageRef};
use crate::shared::errors::AppResult;

/// Record type tag the host uses to route comics from this repository
pub const COMIC_KIND: &str = "hq";

/// HQ Now specific mapper implementation
#[derive(Debug, Clone, Default)]
pub struct HqNowMapper;

impl HqNowMapper {
    pub fn new() -> Self {
        Self
    }

    pub fn to_comic(&self, source: HqSummary) -> Comic {
        Comic {
            site_id: source.id.map(|id| id.to_string()).unwrap_or_default(),
            name: source.name.unwrap_or_default(),
            synopsis: source.synopsis.unwrap_or_default(),
            status: source.status.unwrap_or_default(),
        }
    }

    pub fn to_comic_list(&self, sources: Vec<HqSummary>) -> Vec<Comic> {
        sources.into_iter().map(|s| self.to_comic(s)).collect()
    }

    /// `site_id` is the id the caller looked up, kept in its string form.
    pub fn to_details(&self, source: HqDetail, site_id: &str) -> ComicDetails {
        ComicDetails {
            site_id: site_id.to_string(),
            cover: source.hq_cover,
            publisher: source.publisher_name,
            kind: COMIC_KIND.to_string(),
        }
    }

    /// Chapters carry the parent comic's id string; the chapter's own remote
    /// id is not used for `site_id`.
    pub fn to_chapter(&self, source: HqChapter, parent_site_id: &str) -> AppResult<Chapter> {
        let pages: Vec<PageRef> = source
            .pictures
            .into_iter()
            .map(|picture| PageRef {
                filename: picture.image.unwrap_or_default(),
                path: picture.picture_url.unwrap_or_default(),
            })
            .collect();

        let pages = serde_json::to_string(&pages)?;

        Ok(Chapter {
            name: source.name.unwrap_or_default(),
            number: source.number.unwrap_or_default(),
            site_id: parent_site_id.to_string(),
            offline: false,
            pages,
        })
    }
}
