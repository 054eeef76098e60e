//! HQ Now GraphQL wire models

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request body posted to the GraphQL endpoint
#[derive(Debug, Clone, Serialize)]
pub struct GraphQlRequest {
    pub query: String,
    pub variables: Option<Value>,
}

/// Standard GraphQL response envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    pub errors: Option<Vec<GraphQlError>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

/// One search match from `getHqsByName`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct HqSummary {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub synopsis: Option<String>,
    pub status: Option<String>,
}

/// One detail record from `getHqsById`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct HqDetail {
    pub hq_cover: Option<String>,
    pub publisher_name: Option<String>,
}

/// One chapter from `getChaptersByHqId`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct HqChapter {
    pub name: Option<String>,
    pub number: Option<f64>,
    pub id: Option<i64>,
    #[serde(default)]
    pub pictures: Vec<HqPicture>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct HqPicture {
    pub image: Option<String>,
    pub picture_url: Option<String>,
}

// Response wrapper types for the three root query fields
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HqSearchResponse {
    #[serde(rename = "getHqsByName", default)]
    pub get_hqs_by_name: Vec<HqSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HqDetailsResponse {
    #[serde(rename = "getHqsById", default)]
    pub get_hqs_by_id: Vec<HqDetail>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HqChaptersResponse {
    #[serde(rename = "getChaptersByHqId", default)]
    pub get_chapters_by_hq_id: Vec<HqChapter>,
}
