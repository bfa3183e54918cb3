// tests/e2e_http.rs
use airwave_archive::domain::archive::ArchiveSettings;
use axum::body::Body;
use axum::http::{Request, StatusCode, header::CONTENT_TYPE};
use serde_json::{Value, json};
use std::sync::Arc;

mod support;

fn small_pages() -> ArchiveSettings {
    ArchiveSettings {
        page_size: 2,
        ..ArchiveSettings::default()
    }
}

fn archive_uri(query: &Value) -> String {
    let query = query.as_str().expect("query string");
    format!("/api/v1/archives/radio-stations?{query}")
}

#[tokio::test]
async fn health_returns_ok() {
    let app = support::make_test_router();
    let (status, json) = support::get_json(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");

    let direct = airwave_archive::presentation::http::routes::health().await;
    assert_eq!(direct.0.status, "ok");
}

#[tokio::test]
async fn radio_stations_default_to_newest_first_page() {
    let app = support::make_test_router();
    let (status, page) = support::get_json(&app, "/api/v1/archives/radio-stations").await;
    assert_eq!(status, StatusCode::OK, "{page}");

    assert_eq!(page["archive"]["slug"], "radio-stations");
    assert_eq!(page["archive"]["keyword_label"], "Search Channel");
    assert_eq!(page["archive"]["show_play_button"], true);
    assert_eq!(
        support::titles(&page),
        vec![
            "Synthwave Skyline",
            "Morning Folk Hour",
            "Night Owl Jazz",
            "Basement Punk Radio",
            "Lo-Fi Harbour",
            "Indie Drift FM"
        ]
    );
    assert_eq!(page["query"], "categoryIn=206&field=DATE&order=DESC&first=24");
    assert_eq!(page["state"]["first"], 24);
    assert_eq!(page["state"]["last"], Value::Null);
    assert_eq!(page["selected_sort"]["value"], "DATE/DESC");
    assert!(page.get("next_query").is_none());
    assert!(page.get("prev_query").is_none());
}

#[tokio::test]
async fn upcoming_shows_hide_the_play_button() {
    let app = support::make_test_router();
    let (status, page) = support::get_json(&app, "/api/v1/archives/upcoming-shows").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["archive"]["keyword_label"], "Search Show");
    assert_eq!(page["archive"]["show_play_button"], false);
    assert_eq!(page["state"]["category_in"], json!([222]));
    assert_eq!(support::titles(&page).len(), 3);
}

#[tokio::test]
async fn next_and_previous_links_walk_the_archive() {
    let app = support::make_test_router_with(support::sample_repo(), small_pages());

    let (_, first) = support::get_json(&app, "/api/v1/archives/radio-stations").await;
    assert_eq!(
        support::titles(&first),
        vec!["Synthwave Skyline", "Morning Folk Hour"]
    );
    assert!(first.get("prev_query").is_none());

    let (status, second) = support::get_json(&app, &archive_uri(&first["next_query"])).await;
    assert_eq!(status, StatusCode::OK, "{second}");
    assert_eq!(
        support::titles(&second),
        vec!["Night Owl Jazz", "Basement Punk Radio"]
    );
    assert_eq!(second["state"]["first"], 2);
    assert!(second["state"]["after"].is_string());

    let (status, back) = support::get_json(&app, &archive_uri(&second["prev_query"])).await;
    assert_eq!(status, StatusCode::OK, "{back}");
    assert_eq!(
        support::titles(&back),
        vec!["Synthwave Skyline", "Morning Folk Hour"]
    );
    assert_eq!(back["state"]["last"], 2);
    assert_eq!(back["state"]["first"], Value::Null);
    assert!(back.get("prev_query").is_none());
    assert!(back["next_query"].is_string());
}

#[tokio::test]
async fn url_page_size_is_ignored_without_a_cursor() {
    let app = support::make_test_router_with(support::sample_repo(), small_pages());
    let (_, page) =
        support::get_json(&app, "/api/v1/archives/radio-stations?first=5&last=3").await;
    assert_eq!(page["state"]["first"], 2);
    assert_eq!(page["state"]["last"], Value::Null);
    assert_eq!(support::titles(&page).len(), 2);
}

#[tokio::test]
async fn filters_and_sort_come_from_the_query_string() {
    let app = support::make_test_router();
    let (status, page) = support::get_json(
        &app,
        "/api/v1/archives/radio-stations?tagIn=11&field=VIEWS_COUNT&order=DESC&utm_source=mail",
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{page}");
    assert_eq!(
        support::titles(&page),
        vec!["Indie Drift FM", "Morning Folk Hour"]
    );
    assert_eq!(page["selected_sort"]["label"], "Most views");
    assert_eq!(
        page["query"],
        "tagIn=11&categoryIn=206&field=VIEWS_COUNT&order=DESC&first=24&utm_source=mail"
    );
}

#[tokio::test]
async fn unknown_archive_returns_404() {
    let app = support::make_test_router();
    support::assert_error_response(
        &app,
        "/api/v1/archives/podcasts",
        StatusCode::NOT_FOUND,
        "Not Found",
    )
    .await;
}

#[tokio::test]
async fn unsupported_sort_field_returns_400() {
    let app = support::make_test_router();
    support::assert_error_response(
        &app,
        "/api/v1/archives/radio-stations?field=POPULARITY",
        StatusCode::BAD_REQUEST,
        "Bad Request",
    )
    .await;
}

#[tokio::test]
async fn malformed_cursor_returns_400() {
    let app = support::make_test_router();
    support::assert_error_response(
        &app,
        "/api/v1/archives/radio-stations?after=not-a-cursor",
        StatusCode::BAD_REQUEST,
        "Bad Request",
    )
    .await;
}

#[tokio::test]
async fn backend_failure_returns_502() {
    let app = support::make_test_router_with(
        Arc::new(support::UnavailablePostRepo),
        ArchiveSettings::default(),
    );
    support::assert_error_response(
        &app,
        "/api/v1/archives/upcoming-shows",
        StatusCode::BAD_GATEWAY,
        "Bad Gateway",
    )
    .await;
}

#[tokio::test]
async fn filter_change_navigates_to_a_fresh_first_page() {
    let app = support::make_test_router();
    let req = Request::builder()
        .method("POST")
        .uri("/api/v1/archives/radio-stations/filters?first=2&after=cG9zdHw1&tagIn=11")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(
            json!({ "search": "jazz", "sort": "TITLE/ASC" }).to_string(),
        ))
        .unwrap();
    let (status, nav) = support::send_json(&app, req).await;
    assert_eq!(status, StatusCode::OK, "{nav}");
    assert_eq!(
        nav["query"],
        "search=jazz&tagIn=11&categoryIn=206&field=TITLE&order=ASC"
    );

    // Following the link yields a full first page.
    let uri = format!("/api/v1/archives/radio-stations?{}", nav["query"].as_str().unwrap());
    let (_, page) = support::get_json(&app, &uri).await;
    assert_eq!(page["state"]["first"], 24);
}

#[tokio::test]
async fn sort_options_are_listed_in_order() {
    let app = support::make_test_router();
    let (status, options) = support::get_json(&app, "/api/v1/archives/sort-options").await;
    assert_eq!(status, StatusCode::OK);
    let values: Vec<&str> = options
        .as_array()
        .unwrap()
        .iter()
        .map(|option| option["value"].as_str().unwrap())
        .collect();
    assert_eq!(
        values,
        vec![
            "DATE/DESC",
            "DATE/ASC",
            "TITLE/ASC",
            "TITLE/DESC",
            "VIEWS_COUNT/DESC",
            "LIKES_COUNT/DESC"
        ]
    );
}

#[tokio::test]
async fn openapi_document_is_served() {
    let app = support::make_test_router();
    let (status, doc) = support::get_json(&app, "/api-docs/openapi.json").await;
    assert_eq!(status, StatusCode::OK);
    assert!(doc["paths"].get("/api/v1/archives/{page}").is_some());
    assert!(doc["components"]["schemas"].get("ArchivePageDto").is_some());
}
