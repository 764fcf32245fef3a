//! The relay operation: one upstream compute call, one log write, one
//! composed response.

use std::time::Instant;

use axum::extract::State;
use axum::{routing::get, Json, Router};
use chrono::Utc;
use relay_db::models::process_log::CreateProcessLog;
use relay_db::repositories::ProcessLogRepo;
use relay_db::types::{DbId, Timestamp};
use serde::Serialize;

use crate::error::RelayResult;
use crate::state::AppState;

/// Response payload for a successful `/calculate` invocation.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculateResponse {
    /// Database-assigned number of the process log record.
    pub process_number: DbId,
    /// Raw JSON body returned by the compute collaborator. Contains at
    /// least the collaborator's self-reported `time` field, which is
    /// distinct from `processing_time` below.
    pub result: serde_json::Value,
    /// Relay-measured upstream round-trip duration, in milliseconds.
    pub processing_time: i64,
    /// Time of response assembly.
    pub timestamp: Timestamp,
}

/// GET /calculate -- trigger one computation and record its timing.
///
/// Strict per-request ordering: compute call, then log insert, then
/// response assembly. Either failure maps to the opaque 500 via
/// [`RelayError`](crate::error::RelayError); a row is only written when
/// the compute call succeeded.
async fn calculate(State(state): State<AppState>) -> RelayResult<Json<CalculateResponse>> {
    tracing::info!("Starting calculation process");
    let started = Instant::now();

    let result = state.compute.compute().await?;

    let processing_time = started.elapsed().as_millis() as i64;

    let entry = CreateProcessLog {
        time: Utc::now(),
        processing_time: processing_time.to_string(),
    };
    let process_number = ProcessLogRepo::insert(&state.pool, &entry).await?;

    tracing::info!(
        process_number,
        processing_time_ms = processing_time,
        "Calculation process completed"
    );

    Ok(Json(CalculateResponse {
        process_number,
        result,
        processing_time,
        timestamp: Utc::now(),
    }))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/calculate", get(calculate))
}
