use std::sync::Arc;

use crate::config::Config;
use crate::middleware::rate_limit::RateLimiter;
use crate::recommendation::fallback::FallbackController;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Chooses Demo or Real per the configured credential; falls back on remote failure.
    pub recommender: Arc<FallbackController>,
    /// Per-client request counters. Owned here rather than as a global.
    pub rate_limiter: Arc<RateLimiter>,
}
