use hqnow_plugin::adapters::hqnow::models::*;

#[test]
fn test_summary_deserialization() {
    let json = r#"{
        "id": 7,
        "name": "Batman",
        "synopsis": "The Dark Knight",
        "status": "ongoing"
    }"#;

    let summary: HqSummary = serde_json::from_str(json).unwrap();
    assert_eq!(summary.id, Some(7));
    assert_eq!(summary.name.as_deref(), Some("Batman"));
    assert_eq!(summary.synopsis.as_deref(), Some("The Dark Knight"));
    assert_eq!(summary.status.as_deref(), Some("ongoing"));
}

#[test]
fn test_summary_optional_fields() {
    let json = r#"{
        "id": 2,
        "name": null,
        "synopsis": null,
        "status": null
    }"#;

    let summary: HqSummary = serde_json::from_str(json).unwrap();
    assert_eq!(summary.id, Some(2));
    assert!(summary.name.is_none());
    assert!(summary.synopsis.is_none());
    assert!(summary.status.is_none());
}

#[test]
fn test_search_response() {
    let json = r#"{
        "getHqsByName": [
            {"id": 7, "name": "Batman", "synopsis": "...", "status": "ongoing"},
            {"id": 8, "name": "Batgirl", "synopsis": "...", "status": "finished"}
        ]
    }"#;

    let response: HqSearchResponse = serde_json::from_str(json).unwrap();
    assert_eq!(response.get_hqs_by_name.len(), 2);
    assert_eq!(response.get_hqs_by_name[0].id, Some(7));
    assert_eq!(response.get_hqs_by_name[1].name.as_deref(), Some("Batgirl"));
}

#[test]
fn test_details_response_camel_case_fields() {
    let json = r#"{
        "getHqsById": [
            {"hqCover": "https://example.com/cover.jpg", "publisherName": "DC Comics"}
        ]
    }"#;

    let response: HqDetailsResponse = serde_json::from_str(json).unwrap();
    assert_eq!(response.get_hqs_by_id.len(), 1);
    assert_eq!(
        response.get_hqs_by_id[0].hq_cover.as_deref(),
        Some("https://example.com/cover.jpg")
    );
    assert_eq!(
        response.get_hqs_by_id[0].publisher_name.as_deref(),
        Some("DC Comics")
    );
}

#[test]
fn test_details_response_empty_list() {
    let json = r#"{"getHqsById": []}"#;

    let response: HqDetailsResponse = serde_json::from_str(json).unwrap();
    assert!(response.get_hqs_by_id.is_empty());
}

#[test]
fn test_chapters_response() {
    let json = r#"{
        "getChaptersByHqId": [{
            "name": "Chapter 1",
            "number": 1.0,
            "id": 900,
            "pictures": [
                {"image": "01.jpg", "pictureUrl": "https://example.com/01.jpg"},
                {"image": "02.jpg", "pictureUrl": "https://example.com/02.jpg"}
            ]
        }]
    }"#;

    let response: HqChaptersResponse = serde_json::from_str(json).unwrap();
    assert_eq!(response.get_chapters_by_hq_id.len(), 1);

    let chapter = &response.get_chapters_by_hq_id[0];
    assert_eq!(chapter.name.as_deref(), Some("Chapter 1"));
    assert_eq!(chapter.number, Some(1.0));
    assert_eq!(chapter.id, Some(900));
    assert_eq!(chapter.pictures.len(), 2);
    assert_eq!(chapter.pictures[0].image.as_deref(), Some("01.jpg"));
    assert_eq!(
        chapter.pictures[1].picture_url.as_deref(),
        Some("https://example.com/02.jpg")
    );
}

#[test]
fn test_chapter_fractional_number() {
    let json = r#"{"name": "Interlude", "number": 10.5, "id": 901, "pictures": []}"#;

    let chapter: HqChapter = serde_json::from_str(json).unwrap();
    assert_eq!(chapter.number, Some(10.5));
}

#[test]
fn test_chapter_missing_pictures_defaults_empty() {
    let json = r#"{"name": "Chapter 2", "number": 2.0, "id": 902}"#;

    let chapter: HqChapter = serde_json::from_str(json).unwrap();
    assert!(chapter.pictures.is_empty());
}

#[test]
fn test_graphql_envelope_with_data() {
    let json = r#"{"data": {"getHqsByName": []}, "errors": null}"#;

    let envelope: GraphQlResponse<HqSearchResponse> = serde_json::from_str(json).unwrap();
    assert!(envelope.data.is_some());
    assert!(envelope.errors.is_none());
}

#[test]
fn test_graphql_envelope_with_errors() {
    let json = r#"{"data": null, "errors": [{"message": "Cannot query field"}]}"#;

    let envelope: GraphQlResponse<serde_json::Value> = serde_json::from_str(json).unwrap();
    assert!(envelope.data.as_ref().map_or(true, |d| d.is_null()));
    let errors = envelope.errors.unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message, "Cannot query field");
}
