use std::sync::Arc;

use relay_compute::ComputeClient;

use crate::config::Config;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// Cheaply cloneable; the pool is internally reference-counted and the
/// rest is behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, shared across all request handlers.
    pub pool: relay_db::DbPool,
    /// Relay configuration assembled at startup.
    pub config: Arc<Config>,
    /// Client for the compute collaborator.
    pub compute: Arc<ComputeClient>,
}
