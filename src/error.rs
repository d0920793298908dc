use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Request-path failures.
///
/// The only failure a handler can hit is response-body encoding, which is
/// practically unreachable for the fixed shapes this service returns. It is
/// still handled explicitly: logged here, surfaced to the client as a generic
/// 500, and never propagated beyond the request that hit it.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Failed to encode response body: {0}")]
    Encode(#[from] serde_json::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
    }
}
