use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::strategy::trends::TrendSource;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// Retained for handlers that grow config-driven behavior; only startup
    /// reads it today.
    #[allow(dead_code)]
    pub config: Config,
    /// Pluggable trend research backend. Default: StaticTrendSource.
    pub trends: Arc<dyn TrendSource>,
}
