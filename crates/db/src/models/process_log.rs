//! Process log entity model and DTO.
//!
//! One row per completed relay invocation. Records are immutable once
//! created; retention and deletion are external concerns.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::types::{DbId, Timestamp};

/// A single process log entry. Immutable once created.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProcessLog {
    /// Assigned by the database on insert; monotonically increasing.
    pub process_number: DbId,
    /// When the relay issued the upstream call.
    pub time: Timestamp,
    /// Relay-measured upstream round-trip duration, in milliseconds,
    /// stored as text.
    pub processing_time: String,
}

/// DTO for inserting a new process log entry.
///
/// `process_number` is assigned by the database and intentionally absent.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProcessLog {
    pub time: Timestamp,
    pub processing_time: String,
}
