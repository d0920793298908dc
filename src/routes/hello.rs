//! Greeting endpoint.

use axum::response::Response;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Substituted when the machine's host name cannot be resolved.
pub const FALLBACK_HOSTNAME: &str = "unknown";

/// Body of a `GET /` response.
#[derive(Debug, Serialize, Deserialize)]
pub struct HelloResponse {
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub hostname: String,
}

/// Resolve the local host name, degrading to [`FALLBACK_HOSTNAME`] on
/// failure. Resolution failure is logged but never fails the request.
fn resolve_hostname() -> String {
    match hostname::get() {
        Ok(name) => name.to_string_lossy().into_owned(),
        Err(error) => {
            tracing::warn!(%error, "Failed to resolve hostname, using fallback");
            FALLBACK_HOSTNAME.to_string()
        }
    }
}

/// Greeting handler. Ignores all request content.
pub async fn hello() -> Result<Response, AppError> {
    let response = HelloResponse {
        message: "Hello, World!".to_string(),
        timestamp: Utc::now(),
        hostname: resolve_hostname(),
    };
    Ok(super::json_response(&response)?)
}
