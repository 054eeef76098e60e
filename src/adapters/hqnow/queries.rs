//! HQ Now GraphQL query definitions
//!
//! The three catalog queries, with their variable builders.

use serde_json::{json, Value};

pub struct HqNowQueries;

impl HqNowQueries {
    /// Name search query
    pub fn search_by_name() -> &'static str {
        r#"
            query getHqsByName($search: String!) {
                getHqsByName(name: $search) {
                    id
                    name
                    synopsis
                    status
                }
            }
        "#
    }

    /// Variables for the name search query
    pub fn search_variables(term: &str) -> Value {
        json!({
            "search": term
        })
    }

    /// Detail lookup by catalog id
    pub fn details_by_id() -> &'static str {
        r#"
            query getHqsById($id: Int!) {
                getHqsById(id: $id) {
                    hqCover
                    publisherName
                }
            }
        "#
    }

    /// Variables for the detail lookup query
    pub fn details_variables(id: i32) -> Value {
        json!({
            "id": id
        })
    }

    /// Chapter listing keyed by catalog id
    pub fn chapters_by_hq_id() -> &'static str {
        r#"
            query getChaptersByHqId($id: Int!) {
                getChaptersByHqId(hqId: $id) {
                    name
                    number
                    id
                    pictures {
                        image
                        pictureUrl
                    }
                }
            }
        "#
    }

    /// Variables for the chapter listing query
    pub fn chapters_variables(id: i32) -> Value {
        json!({
            "id": id
        })
    }
}
