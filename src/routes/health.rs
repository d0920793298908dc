//! Health check endpoint for container orchestration and load balancers.

use axum::response::Response;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Version string reported by the health endpoint.
pub const VERSION: &str = "1.0.0";

/// Body of a `GET /health` response.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthResponse {
    /// Build a response reflecting the current time. Status and version are
    /// constants for this build.
    fn current() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
            version: VERSION.to_string(),
        }
    }
}

/// Health check handler. Ignores all request content and always reports
/// healthy; if the process can respond at all, it is alive.
pub async fn health() -> Result<Response, AppError> {
    Ok(super::json_response(&HealthResponse::current())?)
}
