use axum::{middleware, routing::get, Router};
use pageview_shared::{RunMode, HEALTH_PATH};
use tower::ServiceBuilder;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};
use tracing::{debug, warn};

use crate::handlers::health::health_check;
use crate::middleware::request_logging;

pub fn create_app(mode: RunMode) -> Router {
    if mode.is_debug() {
        warn!("Running in \"debug\" mode. Switch to \"release\" mode in production: export GIN_MODE=release");
    }

    let router = Router::new().route(HEALTH_PATH, get(health_check));

    if mode.is_debug() {
        debug!("GET    {} --> health_check", HEALTH_PATH);
    }

    with_middleware(router)
}

/// Tracing spans, per-request logging and panic recovery, outermost first.
/// Logging sits outside recovery so recovered panics are logged as 500s.
fn with_middleware(router: Router) -> Router {
    let middleware_layer = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(request_logging))
        .layer(CatchPanicLayer::new())
        .into_inner();

    router.layer(middleware_layer)
}
