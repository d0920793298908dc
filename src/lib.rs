//! Beacon: a minimal HTTP greeting and health-check service.
//!
//! Exposes two fixed JSON endpoints (`GET /health`, `GET /`), logs every
//! request through middleware, and shuts down gracefully on SIGINT/SIGTERM
//! with a bounded connection-drain deadline.

pub mod config;
pub mod error;
pub mod http;
pub mod middleware;
pub mod routes;

pub use error::AppError;
pub use http::{HttpServer, ServerError};
pub use routes::create_router;
