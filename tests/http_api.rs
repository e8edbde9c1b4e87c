//! Integration tests for the HTTP API surface.
//!
//! The contract under test: every endpoint answers 200 with well-formed
//! JSON (or HTML), even when the data files are missing entirely.

use axum::body::{to_bytes, Body};
use axum::http::Request;
use tower::util::ServiceExt;

use zmanim_tracker::config::AppConfig;
use zmanim_tracker::http::{create_router, AppState};

fn test_config(dir: &tempfile::TempDir, hebcal_url: &str) -> AppConfig {
    AppConfig {
        zmanim_file: dir.path().join("hebcal_zmanim.json"),
        mincha_file: dir.path().join("mincha_today.json"),
        parasha_file: dir.path().join("parasha.json"),
        hebcal_base_url: hebcal_url.to_string(),
        ..AppConfig::default()
    }
}

async fn get_json(config: &AppConfig, uri: &str) -> serde_json::Value {
    let app = create_router(AppState::new(config).unwrap());
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), 200, "{} must answer 200", uri);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).expect("body must be well-formed JSON")
}

#[tokio::test]
async fn health_reports_healthy() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&dir, "http://127.0.0.1:1");

    let body = get_json(&config, "/health").await;
    assert_eq!(body["status"], "healthy");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn missing_zmanim_file_yields_error_envelope_not_crash() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&dir, "http://127.0.0.1:1");

    let body = get_json(&config, "/api/zmanim").await;
    assert_eq!(body["error"], "No zmanim data available");

    let body = get_json(&config, "/api/next").await;
    assert_eq!(body["error"], "No zmanim data available");
}

#[tokio::test]
async fn missing_critical_times_yields_error_envelope() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("hebcal_zmanim.json"),
        r#"{"times": {"sunrise": "2026-08-29T06:21:00-05:00"}}"#,
    )
    .unwrap();

    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/hebcal")
        .with_status(500)
        .create_async()
        .await;
    let config = test_config(&dir, &server.url());

    let body = get_json(&config, "/api/zmanim").await;
    assert_eq!(body["error"], "Missing critical times");
}

#[tokio::test]
async fn well_formed_file_yields_snapshot_fields() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("hebcal_zmanim.json"),
        r#"{
            "location": {"title": "Milwaukee, WI"},
            "times": {
                "chatzot": "2026-08-29T12:57:00-05:00",
                "sunset": "2026-08-29T19:45:00-05:00",
                "tzeit72min": "2026-08-29T20:57:00-05:00",
                "chatzotNight": "2026-08-30T00:57:00-05:00"
            }
        }"#,
    )
    .unwrap();

    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/hebcal")
        .with_status(500)
        .create_async()
        .await;
    let config = test_config(&dir, &server.url());

    let body = get_json(&config, "/api/zmanim").await;
    assert!(body.get("error").is_none());
    assert_eq!(body["location"], "Milwaukee, WI");
    assert!(body["period"].is_string());
    assert!(body["times"].is_array());
    // Failed enrichment degrades the fields, never the request.
    assert_eq!(body["hebrew_date"], "Unknown");
    assert_eq!(body["parasha"], "Unknown");

    let body = get_json(&config, "/api/next").await;
    assert!(body.get("error").is_none());
    assert!(body["period"].is_string());
}

#[tokio::test]
async fn html_route_renders_error_inline() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&dir, "http://127.0.0.1:1");

    let app = create_router(AppState::new(&config).unwrap());
    let response = app
        .oneshot(Request::builder().uri("/html").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("No zmanim data available"));
}
