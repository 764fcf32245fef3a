use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Fixed liveness message.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
}

/// GET /health -- reports that the relay process is running.
///
/// Deliberately checks nothing else: upstream or database outages must
/// not make the relay itself look dead.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "Relay service is running",
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
