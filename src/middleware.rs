//! Request logging middleware.
//!
//! Wraps every handler and emits exactly one log event after the handler
//! returns, carrying the HTTP method, the full request URI, the remote peer
//! address, and the elapsed wall-clock duration. The response itself passes
//! through unmodified.

use std::net::SocketAddr;
use std::time::Instant;

use axum::{extract::ConnectInfo, extract::Request, middleware::Next, response::Response};

/// Log one line per request after the downstream handler completes.
///
/// The remote address comes from the `ConnectInfo` extension, which is only
/// populated when the router is served with connect info (as `HttpServer`
/// does); in-process test requests log `-` instead.
pub async fn request_log_layer(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let remote = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|info| info.0.to_string())
        .unwrap_or_else(|| "-".to_string());

    let start = Instant::now();
    let response = next.run(request).await;
    let elapsed = start.elapsed();

    tracing::info!(
        method = %method,
        uri = %uri,
        remote = %remote,
        elapsed_ms = elapsed.as_millis() as u64,
        "Request completed"
    );

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use axum::{body::Body, http::StatusCode, middleware, routing::get, Router};
    use tower::ServiceExt;
    use tracing::span;

    /// Subscriber that counts emitted events, nothing more.
    #[derive(Clone)]
    struct CountingSubscriber(Arc<AtomicUsize>);

    impl tracing::Subscriber for CountingSubscriber {
        fn enabled(&self, _: &tracing::Metadata<'_>) -> bool {
            true
        }
        fn new_span(&self, _: &span::Attributes<'_>) -> span::Id {
            span::Id::from_u64(1)
        }
        fn record(&self, _: &span::Id, _: &span::Record<'_>) {}
        fn record_follows_from(&self, _: &span::Id, _: &span::Id) {}
        fn event(&self, _: &tracing::Event<'_>) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
        fn enter(&self, _: &span::Id) {}
        fn exit(&self, _: &span::Id) {}
    }

    #[tokio::test]
    async fn test_response_passes_through_with_one_log_line() {
        let events = Arc::new(AtomicUsize::new(0));
        let _guard = tracing::subscriber::set_default(CountingSubscriber(events.clone()));

        let app = Router::new()
            .route("/", get(|| async { "test" }))
            .layer(middleware::from_fn(request_log_layer));

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"test");
        assert_eq!(events.load(Ordering::SeqCst), 1);
    }
}
