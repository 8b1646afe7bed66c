pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};

use crate::middleware::{rate_limit::rate_limit_middleware, security::with_security_headers};
use crate::recommendation::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_body_bytes;

    let router = Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/analyze",
            post(handlers::handle_analyze)
                .route_layer(from_fn_with_state(state.clone(), rate_limit_middleware)),
        )
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state);

    with_security_headers(router)
}
