mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use tower::ServiceExt;

#[tokio::test]
async fn test_health() {
    let app = common::create_test_app();

    let (status, json) = common::get_json(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["service"], "koine-api");
    assert_eq!(json["storage"], "memory");
}

#[tokio::test]
async fn test_list_views() {
    let app = common::create_test_app();

    let (status, json) = common::get_json(&app, "/api/v1/views").await;

    assert_eq!(status, StatusCode::OK);
    let views = json["views"].as_array().unwrap();
    assert_eq!(views.len(), 5);
    assert_eq!(views[0]["path"], "/");
    assert!(views[0]["meta"].is_null());

    let games: Vec<&str> = views
        .iter()
        .filter(|v| v["meta"]["is_game"] == true)
        .map(|v| v["path"].as_str().unwrap())
        .collect();
    assert_eq!(
        games,
        vec!["/definite-articles-1", "/second-declension-flash-cards"]
    );
}

#[tokio::test]
async fn test_get_view_by_slug() {
    let app = common::create_test_app();

    let (status, json) = common::get_json(&app, "/api/v1/views/definite-articles-1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["name"], "Definite Articles 1");
    assert_eq!(json["meta"]["is_game"], true);

    let (status, json) = common::get_json(&app, "/api/v1/views/home").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["path"], "/");

    let (status, _) = common::get_json(&app, "/api/v1/views/third-declension").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_vocabulary() {
    let app = common::create_test_app();

    let (status, json) = common::get_json(&app, "/api/v1/vocabulary").await;

    assert_eq!(status, StatusCode::OK);
    let words = json["words"].as_array().unwrap();
    assert_eq!(words.len(), 13);
    assert_eq!(words[0]["nominative_singular"], "ἄνθρωπος");
    assert_eq!(words[0]["meaning"], "human being, man");
    assert_eq!(words[0]["questions"].as_array().unwrap().len(), 9);
    assert_eq!(words[12]["nominative_singular"], "ὄχλος");
}

#[tokio::test]
async fn test_metrics_requires_basic_auth() {
    let app = common::create_test_app();

    let response = app
        .clone()
        .oneshot(Request::builder().uri("/metrics").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/metrics")
                .header(header::AUTHORIZATION, common::basic_auth("admin:changeme"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_trace_id_is_echoed() {
    let app = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .header("x-trace-id", "trace-123")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.headers()["x-trace-id"], "trace-123");
}
