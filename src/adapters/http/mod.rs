//! HTTP adapters - the service's HTTP surface.
//!
//! Each concern has its own HTTP adapter; [`app_router`] merges them and
//! applies the shared tower layers.

pub mod dispatch;
pub mod navigation;

use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, Method};
use axum::routing::get;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

// Re-export key types for convenience
pub use dispatch::dispatch_routes;
pub use dispatch::DispatchAppState;
pub use navigation::navigation_routes;

/// Builds the complete application router.
pub fn app_router(state: DispatchAppState, server: &ServerConfig) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(dispatch_routes(state))
        .merge(navigation_routes())
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(TimeoutLayer::new(server.request_timeout()))
                .layer(cors_layer(server)),
        )
}

/// GET /health
async fn health() -> &'static str {
    "ok"
}

/// Allows the configured origins, or any origin when none are configured.
fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE]);

    if origins.is_empty() {
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(AllowOrigin::list(origins))
    }
}
