//! Integration tests for the API module.

#![cfg(feature = "api")]

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use serde_json::{Value, json};
use tower::ServiceExt;

use colophon::{
    OcrPage, OcrResponse, OcrService, ServiceConfig,
    api::{HealthResponse, create_router},
};

const SECRET: &str = "test-secret";

/// Deterministic annotation backend; the hosted provider never gets called
/// from these tests.
struct StubOcr {
    response: OcrResponse,
}

#[async_trait]
impl OcrService for StubOcr {
    async fn annotate(&self, _document_url: &str) -> colophon::Result<OcrResponse> {
        Ok(self.response.clone())
    }
}

fn test_config() -> ServiceConfig {
    ServiceConfig {
        api_key: SECRET.to_string(),
        mistral_api_key: "sk-unused".to_string(),
        host: "127.0.0.1".to_string(),
        port: 0,
        request_timeout: Duration::from_secs(5),
    }
}

fn annotation_json() -> String {
    json!({
        "bibliographical_title": "T",
        "author": "A",
        "publisher": "P",
        "publication_year": "2020",
        "description": "D",
        "summary": "S",
    })
    .to_string()
}

/// Router over a stub that annotates a two-page document.
fn app() -> Router {
    app_with(OcrResponse {
        pages: vec![OcrPage::default(), OcrPage::default()],
        document_annotation: Some(annotation_json()),
    })
}

fn app_with(response: OcrResponse) -> Router {
    create_router(test_config(), Arc::new(StubOcr { response }))
}

fn post_extract(path: &str, auth: Option<&str>, body: &str) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(auth) = auth {
        builder = builder.header(header::AUTHORIZATION, auth.to_string());
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

fn bearer() -> String {
    format!("Bearer {}", SECRET)
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Test the health check endpoint.
#[tokio::test]
async fn test_health_endpoint() {
    let response = app()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let health: HealthResponse = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(health.status, "healthy");
    assert!(!health.version.is_empty());
}

/// Requests without an Authorization header are rejected with 401.
#[tokio::test]
async fn test_missing_authorization_header() {
    let response = app()
        .oneshot(post_extract("/extract", None, r#"{"url": "https://example.com/doc.pdf"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let error = body_json(response).await;
    assert!(error["error"].as_str().unwrap().contains("Authorization"));
}

/// A non-Bearer Authorization scheme is rejected with 401.
#[tokio::test]
async fn test_non_bearer_authorization_header() {
    let response = app()
        .oneshot(post_extract(
            "/extract",
            Some("Basic dXNlcjpwYXNz"),
            r#"{"url": "https://example.com/doc.pdf"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// A bearer token that does not match the configured secret is 403.
#[tokio::test]
async fn test_wrong_token_is_forbidden() {
    let response = app()
        .oneshot(post_extract(
            "/extract",
            Some("Bearer wrong-secret"),
            r#"{"url": "https://example.com/doc.pdf"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let error = body_json(response).await;
    assert!(error["error"].is_string());
}

/// Authorization is checked before the body: bad token plus bad body is 403.
#[tokio::test]
async fn test_auth_checked_before_body() {
    let response = app()
        .oneshot(post_extract("/extract", Some("Bearer wrong-secret"), "not json"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

/// Non-POST methods on the extract routes return 405 with an error body,
/// without consulting authorization.
#[tokio::test]
async fn test_non_post_method_not_allowed() {
    for path in ["/extract", "/api/extract"] {
        let response = app()
            .oneshot(Request::builder().method("GET").uri(path).body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

        let error = body_json(response).await;
        assert!(error["error"].is_string());
    }
}

/// A body without `url` is rejected with 400.
#[tokio::test]
async fn test_missing_url_field() {
    let response = app()
        .oneshot(post_extract("/extract", Some(&bearer()), r#"{"document": "x"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let error = body_json(response).await;
    assert!(error["error"].as_str().unwrap().contains("url"));
}

/// A null `url` is rejected with 400.
#[tokio::test]
async fn test_null_url_field() {
    let response = app()
        .oneshot(post_extract("/extract", Some(&bearer()), r#"{"url": null}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// A non-string `url` is rejected with 400.
#[tokio::test]
async fn test_non_string_url_field() {
    let response = app()
        .oneshot(post_extract("/extract", Some(&bearer()), r#"{"url": 42}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// A body that is not valid JSON is rejected with 400.
#[tokio::test]
async fn test_malformed_json_body() {
    let response = app()
        .oneshot(post_extract("/extract", Some(&bearer()), "{not json"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let error = body_json(response).await;
    assert!(error["error"].as_str().unwrap().contains("JSON"));
}

/// Successful extraction returns the annotation fields verbatim plus the
/// provider's page count, and nothing else.
#[tokio::test]
async fn test_successful_extraction() {
    let response = app()
        .oneshot(post_extract(
            "/extract",
            Some(&bearer()),
            r#"{"url": "https://example.com/doc.pdf"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(
        body,
        json!({
            "bibliographical_title": "T",
            "author": "A",
            "publisher": "P",
            "publication_year": "2020",
            "description": "D",
            "summary": "S",
            "pages": 2,
        })
    );
}

/// `/api/extract` is the same handler as `/extract`.
#[tokio::test]
async fn test_api_prefixed_route_is_equivalent() {
    let direct = app()
        .oneshot(post_extract(
            "/extract",
            Some(&bearer()),
            r#"{"url": "https://example.com/doc.pdf"}"#,
        ))
        .await
        .unwrap();
    let prefixed = app()
        .oneshot(post_extract(
            "/api/extract",
            Some(&bearer()),
            r#"{"url": "https://example.com/doc.pdf"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(direct.status(), StatusCode::OK);
    assert_eq!(prefixed.status(), StatusCode::OK);
    assert_eq!(body_json(direct).await, body_json(prefixed).await);
}

/// A provider response with no annotation surfaces as 500 with the
/// no-metadata message.
#[tokio::test]
async fn test_missing_annotation_is_internal_error() {
    let app = app_with(OcrResponse {
        pages: vec![OcrPage::default()],
        document_annotation: None,
    });

    let response = app
        .oneshot(post_extract(
            "/extract",
            Some(&bearer()),
            r#"{"url": "https://example.com/doc.pdf"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let error = body_json(response).await;
    assert!(error["error"].as_str().unwrap().contains("no metadata"));
}

/// Page count follows the provider exactly, including zero.
#[tokio::test]
async fn test_zero_page_response() {
    let app = app_with(OcrResponse {
        pages: vec![],
        document_annotation: Some(annotation_json()),
    });

    let response = app
        .oneshot(post_extract(
            "/extract",
            Some(&bearer()),
            r#"{"url": "https://example.com/doc.pdf"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["pages"], 0);
}

/// The same request twice against the deterministic stub yields identical
/// results; no state accumulates between calls.
#[tokio::test]
async fn test_idempotent_extraction() {
    let app = app();

    let first = app
        .clone()
        .oneshot(post_extract(
            "/extract",
            Some(&bearer()),
            r#"{"url": "https://example.com/doc.pdf"}"#,
        ))
        .await
        .unwrap();
    let second = app
        .oneshot(post_extract(
            "/extract",
            Some(&bearer()),
            r#"{"url": "https://example.com/doc.pdf"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(first.status(), StatusCode::OK);
    assert_eq!(second.status(), StatusCode::OK);
    assert_eq!(body_json(first).await, body_json(second).await);
}

/// Unknown paths are 404.
#[tokio::test]
async fn test_not_found_endpoint() {
    let response = app()
        .oneshot(Request::builder().uri("/nonexistent").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// Concurrent requests are independent.
#[tokio::test]
async fn test_concurrent_requests() {
    let app = app();

    let mut handles = vec![];
    for _ in 0..5 {
        let app = app.clone();
        handles.push(tokio::spawn(async move {
            app.oneshot(post_extract(
                "/extract",
                Some(&bearer()),
                r#"{"url": "https://example.com/doc.pdf"}"#,
            ))
            .await
        }));
    }

    for handle in handles {
        let response = handle.await.unwrap().unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
