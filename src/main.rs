//! Application entry point and lifecycle controller.
//!
//! Initializes tracing, builds the router and server from the `PORT`
//! environment variable, runs the accept loop on its own task, waits for a
//! termination signal, then performs a bounded graceful shutdown.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use beacon::config::{self, DEFAULT_LOG_FILTER, SHUTDOWN_DEADLINE};
use beacon::http::shutdown;
use beacon::{create_router, HttpServer};

#[tokio::main]
async fn main() {
    let log_filter =
        std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string());

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&log_filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let port = config::port_from_env();
    let server = match HttpServer::new(&port, create_router()) {
        Ok(server) => Arc::new(server),
        Err(error) => {
            tracing::error!(%error, %port, "Invalid server configuration");
            std::process::exit(1);
        }
    };

    // The accept loop blocks, so it runs on its own task while the main task
    // waits for a termination signal.
    let mut serve_task = tokio::spawn({
        let server = Arc::clone(&server);
        async move { server.start().await }
    });

    tokio::select! {
        result = &mut serve_task => {
            // The server stopped without a shutdown request; anything other
            // than a clean return is fatal.
            match result {
                Ok(Ok(())) => tracing::warn!("Server stopped unexpectedly"),
                Ok(Err(error)) => {
                    tracing::error!(%error, "Server error");
                    std::process::exit(1);
                }
                Err(error) => {
                    tracing::error!(%error, "Server task panicked");
                    std::process::exit(1);
                }
            }
        }
        _ = shutdown::wait_for_signal() => {
            if let Err(error) = server.shutdown(SHUTDOWN_DEADLINE).await {
                tracing::warn!(%error, "Server forced to shut down");
            }
            let _ = serve_task.await;
        }
    }

    tracing::info!("Server exited");
}
