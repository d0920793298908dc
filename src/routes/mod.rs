//! HTTP route handlers and router construction.
//!
//! The service exposes exactly two routes: `GET /health` (liveness probe) and
//! `GET /` (greeting). Anything else falls through to axum's defaults: 404
//! for unknown paths, 405 for known paths with the wrong method. Request
//! logging and the per-request timeout apply to the whole router.

pub mod health;
pub mod hello;

use axum::{
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use http::{header::CONTENT_TYPE, HeaderValue, StatusCode};
use serde::Serialize;
use tower_http::timeout::TimeoutLayer;

use crate::config::REQUEST_TIMEOUT;
use crate::middleware::request_log_layer;

/// Serialize `value` into a 200 JSON response.
///
/// Encoding failure is returned to the caller so handlers can route it
/// through [`crate::error::AppError`] rather than panicking.
pub(crate) fn json_response<T: Serialize>(value: &T) -> Result<Response, serde_json::Error> {
    let body = serde_json::to_vec(value)?;
    Ok((
        StatusCode::OK,
        [(CONTENT_TYPE, HeaderValue::from_static("application/json"))],
        body,
    )
        .into_response())
}

/// Creates the axum router with both routes, the request timeout, and the
/// logging middleware (outermost, so it observes timeout responses too).
pub fn create_router() -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/", get(hello::hello))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            REQUEST_TIMEOUT,
        ))
        .layer(axum::middleware::from_fn(request_log_layer))
}
