// tests/support/helpers.rs
use airwave_archive::application::services::ApplicationServices;
use airwave_archive::domain::archive::ArchiveSettings;
use airwave_archive::domain::music::MusicLibraryRepository;
use airwave_archive::domain::post::PostConnectionRepository;
use airwave_archive::infrastructure::repositories::InMemoryPostRepository;
use airwave_archive::presentation::http::{routes::build_router, state::HttpState};
use axum::body::{self, Body};
use axum::http::{Request, StatusCode};
use serde_json::Value;
use std::sync::Arc;
use tower::util::ServiceExt as _;

pub fn sample_repo() -> Arc<InMemoryPostRepository> {
    Arc::new(InMemoryPostRepository::with_sample_catalogue(206, 222))
}

pub fn sample_music() -> Arc<super::StaticMusicLibrary> {
    Arc::new(super::StaticMusicLibrary::sample())
}

pub fn build_test_state(
    post_repo: Arc<dyn PostConnectionRepository>,
    music_library: Arc<dyn MusicLibraryRepository>,
    settings: ArchiveSettings,
) -> HttpState {
    let services = Arc::new(ApplicationServices::new(post_repo, music_library, settings));
    HttpState { services }
}

/// Router over the sample catalogue with the default settings.
pub fn make_test_router() -> axum::Router {
    make_test_router_with(sample_repo(), ArchiveSettings::default())
}

pub fn make_test_router_with(
    post_repo: Arc<dyn PostConnectionRepository>,
    settings: ArchiveSettings,
) -> axum::Router {
    build_router(build_test_state(post_repo, sample_music(), settings))
}

/// Router over the sample catalogue with the given music library.
pub fn make_music_router(music_library: Arc<dyn MusicLibraryRepository>) -> axum::Router {
    build_router(build_test_state(
        sample_repo(),
        music_library,
        ArchiveSettings::default(),
    ))
}

/// Send a request and decode the JSON body.
pub async fn send_json(app: &axum::Router, req: Request<Body>) -> (StatusCode, Value) {
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let (parts, body_stream) = resp.into_parts();
    let body_bytes = body::to_bytes(body_stream, 1024 * 1024).await.expect("read body");
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {}", ct);
    let json: Value = serde_json::from_slice(&body_bytes).expect("expected valid json body");
    (status, json)
}

pub async fn get_json(app: &axum::Router, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send_json(app, req).await
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(
    app: &axum::Router,
    uri: &str,
    expected_status: StatusCode,
    expected_error: &str,
) {
    let (status, json) = get_json(app, uri).await;
    assert_eq!(status, expected_status, "unexpected status for {uri}: {json}");
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {}", err_field);
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
}

pub fn titles(page: &Value) -> Vec<String> {
    page["items"]
        .as_array()
        .expect("items array")
        .iter()
        .map(|item| item["title"].as_str().unwrap_or_default().to_string())
        .collect()
}
