//! HTTP server wrapper.
//!
//! Owns the listening address, the router, and the [`Handle`] used to request
//! graceful shutdown. `start` blocks until the socket closes; `shutdown`
//! drains in-flight connections within a deadline.

use std::net::SocketAddr;
use std::time::Duration;

use axum::Router;
use axum_server::Handle;
use hyper_util::rt::TokioTimer;

use crate::config::IDLE_TIMEOUT;

/// How often `shutdown` re-checks the in-flight connection count.
const DRAIN_POLL_INTERVAL: Duration = Duration::from_millis(25);

/// Server startup and shutdown errors.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid port {0:?}: {1}")]
    InvalidPort(String, std::num::ParseIntError),

    #[error("Failed to bind or serve: {0}")]
    Io(#[from] std::io::Error),

    #[error("Shutdown deadline of {0:?} exceeded")]
    ShutdownTimeout(Duration),
}

/// The listening server: fixed routes, fixed timeouts, graceful shutdown.
#[derive(Debug)]
pub struct HttpServer {
    addr: SocketAddr,
    router: Router,
    handle: Handle,
}

impl HttpServer {
    /// Build a server listening on all interfaces at `port`.
    pub fn new(port: &str, router: Router) -> Result<Self, ServerError> {
        let port: u16 = port
            .parse()
            .map_err(|e| ServerError::InvalidPort(port.to_string(), e))?;
        Ok(Self {
            addr: SocketAddr::from(([0, 0, 0, 0], port)),
            router,
            handle: Handle::new(),
        })
    }

    /// The configured listening address.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// The address actually bound, once the server is listening. Differs from
    /// [`Self::addr`] when constructed with port `0`. Returns `None` if the
    /// server stopped before binding.
    pub async fn local_addr(&self) -> Option<SocketAddr> {
        self.handle.listening().await
    }

    /// Serve until the listening socket closes.
    ///
    /// Returns `Ok(())` when the socket closed because `shutdown` was called,
    /// `Err` on bind or transport failure. Connections are handled
    /// concurrently by the server; handlers hold no shared mutable state.
    pub async fn start(&self) -> Result<(), ServerError> {
        tracing::info!(addr = %self.addr, "Starting HTTP server");

        let mut server = axum_server::bind(self.addr);
        // hyper requires a timer whenever a header read timeout is set
        server
            .http_builder()
            .http1()
            .timer(TokioTimer::new())
            .header_read_timeout(IDLE_TIMEOUT);

        server
            .handle(self.handle.clone())
            .serve(
                self.router
                    .clone()
                    .into_make_service_with_connect_info::<SocketAddr>(),
            )
            .await?;

        Ok(())
    }

    /// Stop accepting connections and drain in-flight ones.
    ///
    /// Returns [`ServerError::ShutdownTimeout`] if connections are still open
    /// when the deadline elapses; the server force-closes them at that point
    /// regardless, so callers can log the error and proceed to exit.
    pub async fn shutdown(&self, deadline: Duration) -> Result<(), ServerError> {
        tracing::info!(?deadline, "Shutting down server");
        self.handle.graceful_shutdown(Some(deadline));

        let drained = async {
            while self.handle.connection_count() > 0 {
                tokio::time::sleep(DRAIN_POLL_INTERVAL).await;
            }
        };
        tokio::time::timeout(deadline, drained)
            .await
            .map_err(|_| ServerError::ShutdownTimeout(deadline))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::create_router;

    #[test]
    fn test_new_server_addr() {
        let server = HttpServer::new("8080", create_router()).unwrap();
        assert_eq!(server.addr().port(), 8080);
        assert!(server.addr().to_string().ends_with(":8080"));
    }

    #[test]
    fn test_new_server_rejects_invalid_port() {
        let err = HttpServer::new("not-a-port", create_router()).unwrap_err();
        assert!(matches!(err, ServerError::InvalidPort(..)));
    }
}
