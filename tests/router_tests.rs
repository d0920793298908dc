//! In-process router tests: endpoint contracts and routing fall-through.

use axum::body::Body;
use axum::http::{header::CONTENT_TYPE, Request, StatusCode};
use chrono::Utc;
use tower::ServiceExt;

use beacon::create_router;
use beacon::routes::health::HealthResponse;
use beacon::routes::hello::{HelloResponse, FALLBACK_HOSTNAME};

async fn get(path: &str) -> axum::response::Response {
    create_router()
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

#[tokio::test]
async fn test_health_endpoint() {
    let start = Utc::now();
    let response = get("/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(CONTENT_TYPE).unwrap(),
        "application/json"
    );

    let body: HealthResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(body.status, "healthy");
    assert_eq!(body.version, "1.0.0");
    assert!(
        body.timestamp >= start,
        "timestamp {} predates request start {}",
        body.timestamp,
        start
    );
}

#[tokio::test]
async fn test_hello_endpoint() {
    let start = Utc::now();
    let response = get("/").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(CONTENT_TYPE).unwrap(),
        "application/json"
    );

    let body: HelloResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(body.message, "Hello, World!");
    assert!(body.timestamp >= start);

    let machine_name = hostname::get()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|_| FALLBACK_HOSTNAME.to_string());
    assert!(
        body.hostname == machine_name || body.hostname == FALLBACK_HOSTNAME,
        "unexpected hostname {:?}",
        body.hostname
    );
}

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let response = get("/missing").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_wrong_method_is_rejected() {
    let response = create_router()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
