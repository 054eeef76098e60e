//! Record shapes handed to the host.
//!
//! Field names serialize in camelCase to match the host's plugin contract.
//! Every record is built fresh per call by field-by-field construction; only
//! the fields declared here ever appear in outputs.

use serde::{Deserialize, Serialize};

/// A comic as produced by search and default listing.
///
/// `site_id` is the remote catalog's id coerced to a string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Comic {
    pub site_id: String,
    pub name: String,
    pub synopsis: String,
    pub status: String,
}

/// Detail record for a single comic.
///
/// Partial by contract: only `site_id` and `kind` are guaranteed, the rest is
/// whatever the remote returned for this id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ComicDetails {
    pub site_id: String,
    pub cover: Option<String>,
    pub publisher: Option<String>,
    #[serde(rename = "type")]
    pub kind: String,
}

/// A chapter of a comic.
///
/// `site_id` is the parent comic's id string, not the chapter's own remote id.
/// `pages` is the JSON serialization of an ordered list of [`PageRef`]s, not
/// the list itself; callers deserialize it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Chapter {
    pub name: String,
    pub number: f64,
    pub site_id: String,
    pub offline: bool,
    pub pages: String,
}

/// One page descriptor inside a chapter's serialized `pages` string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PageRef {
    pub filename: String,
    pub path: String,
}
