//! The assembled HTTP application.
//!
//! [`build_app_router`] is the single place where routes and middleware are
//! put together. `main.rs` serves its result and `tests/common/mod.rs` drives
//! it with `oneshot`, so both see the same behaviour.

use std::time::Duration;

use axum::http::header::{ACCEPT, CONTENT_TYPE};
use axum::http::{HeaderName, Method, StatusCode};
use axum::Router;
use tower::Layer;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::ServerConfig;
use crate::projections::API_PREFIX;
use crate::routes;
use crate::state::AppState;

/// The served application: the router behind trailing-slash normalisation.
///
/// `/api/v1/locations/` and `/api/v1/locations` reach the same handler.
pub type App = NormalizePath<Router>;

/// Build the application with its full middleware stack.
///
/// From the outside in, a request passes through:
///
/// - trailing-slash trimming (before routing, so it wraps the router)
/// - CORS
/// - request id assignment (`x-request-id`, UUID v4)
/// - the `tower_http` trace span
/// - request id echo on the response
/// - the configured request timeout (408)
/// - panic recovery (500)
pub fn build_app_router(state: AppState, config: &ServerConfig) -> App {
    let router = with_middleware(routes_for_app(), config).with_state(state);
    NormalizePathLayer::trim_trailing_slash().layer(router)
}

/// `/health` at the root, every resource under [`API_PREFIX`].
fn routes_for_app() -> Router<AppState> {
    Router::new()
        .merge(routes::health::router())
        .nest(API_PREFIX, routes::api_routes())
}

// Router::layer wraps outward, so the last call below is the outermost.
fn with_middleware(router: Router<AppState>, config: &ServerConfig) -> Router<AppState> {
    let timeout = Duration::from_secs(config.request_timeout_secs);
    let request_id_header = HeaderName::from_static("x-request-id");
    let trace = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    router
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            timeout,
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(trace)
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(build_cors_layer(config))
}

/// CORS for the configured origins and the four verbs the API uses.
///
/// Panics at startup if any configured origin is not a valid header value.
pub fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<_> = config
        .cors_origins
        .iter()
        .map(|origin| {
            origin
                .parse()
                .unwrap_or_else(|e| panic!("Invalid CORS origin '{origin}': {e}"))
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE, ACCEPT])
        .max_age(Duration::from_secs(3600))
}
