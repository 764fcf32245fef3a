pub mod calculate;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the relay's route tree.
///
/// ```text
/// /health      liveness (no dependency checks)
/// /calculate   trigger one upstream computation + log write
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(calculate::router())
}
