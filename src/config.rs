//! Configuration constants and environment lookup.
//!
//! The service is configured entirely through the `PORT` environment variable;
//! everything else (timeouts, shutdown deadline, log filter) is a fixed
//! constant defined here.

use std::time::Duration;

/// Port used when `PORT` is unset or empty.
pub const DEFAULT_PORT: &str = "8080";

/// Default tracing filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "beacon=info";

/// Bound on handling a single request: reading the body, running the handler,
/// and writing the response. Applied as a `TimeoutLayer` on the router.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Bound on how long a keep-alive connection may sit idle waiting for its
/// next request. Applied as hyper's header read timeout.
pub const IDLE_TIMEOUT: Duration = Duration::from_secs(60);

/// How long graceful shutdown waits for in-flight connections to drain
/// before the process gives up and exits anyway.
pub const SHUTDOWN_DEADLINE: Duration = Duration::from_secs(30);

/// Resolve the listening port from the `PORT` environment variable,
/// falling back to [`DEFAULT_PORT`] when unset or empty.
pub fn port_from_env() -> String {
    std::env::var("PORT")
        .ok()
        .filter(|port| !port.is_empty())
        .unwrap_or_else(|| DEFAULT_PORT.to_string())
}
