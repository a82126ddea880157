use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
};
use omps::config::Config;
use omps::constants::{
    DEFAULT_MAX_CONTENT_LENGTH, DEFAULT_RELEASE_VERSION, DEFAULT_ZIPFILE_MAX_UNCOMPRESSED_SIZE,
    KOJI_OPERATOR_MANIFESTS_ARCHIVE_KEY, PROD_SECTION, TEST_SECTION,
};
use omps::models::HealthResponse;
use std::sync::Arc;
use tower::ServiceExt;

async fn get_health(config: Config) -> (StatusCode, HealthResponse) {
    let response = omps::app(Arc::new(config))
        .oneshot(Request::builder().uri("/api/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn health_reports_default_limits() {
    let config = Config::section_defaults(PROD_SECTION).unwrap();
    let (status, health) = get_health(config).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(health.status, "ok");
    assert_eq!(health.config_section, PROD_SECTION);
    assert!(!health.developer_mode);
    assert_eq!(health.max_content_length, DEFAULT_MAX_CONTENT_LENGTH);
    assert_eq!(health.zipfile_max_uncompressed_size, DEFAULT_ZIPFILE_MAX_UNCOMPRESSED_SIZE);
    assert_eq!(health.default_release_version, DEFAULT_RELEASE_VERSION);
    assert_eq!(health.allowed_extensions, vec![".zip".to_string()]);
    assert_eq!(health.archive_key, KOJI_OPERATOR_MANIFESTS_ARCHIVE_KEY);
}

#[tokio::test]
async fn health_reports_configured_limits() {
    let mut config = Config::section_defaults(TEST_SECTION).unwrap();
    config.max_content_length = 512;
    config.default_release_version = "2.3.0".to_string();

    let (_, health) = get_health(config).await;
    assert_eq!(health.config_section, TEST_SECTION);
    assert_eq!(health.max_content_length, 512);
    assert_eq!(health.default_release_version, "2.3.0");
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let config = Config::section_defaults(PROD_SECTION).unwrap();
    let response = omps::app(Arc::new(config))
        .oneshot(Request::builder().uri("/api/upload").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

fn health_request_with_body(len: usize) -> Request<Body> {
    Request::builder()
        .uri("/api/health")
        .header(header::CONTENT_LENGTH, len)
        .body(Body::from(vec![b'x'; len]))
        .unwrap()
}

#[tokio::test]
async fn body_over_content_limit_is_rejected() {
    let mut config = Config::section_defaults(PROD_SECTION).unwrap();
    config.max_content_length = 16;
    let app = omps::app(Arc::new(config));

    let response = app.clone().oneshot(health_request_with_body(4096)).await.unwrap();
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);

    let response = app.oneshot(health_request_with_body(8)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
