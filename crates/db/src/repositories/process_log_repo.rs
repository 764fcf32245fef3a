//! Repository for the `process_logs` table.

use sqlx::PgPool;

use crate::types::DbId;

use crate::models::process_log::{CreateProcessLog, ProcessLog};

/// Column list for `process_logs` SELECT queries.
const COLUMNS: &str = "process_number, time, processing_time";

/// Provides insert and lookup operations for process logs.
pub struct ProcessLogRepo;

impl ProcessLogRepo {
    /// Insert a new process log entry and return the database-assigned
    /// process number.
    pub async fn insert(pool: &PgPool, entry: &CreateProcessLog) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "INSERT INTO process_logs (time, processing_time) \
             VALUES ($1, $2) RETURNING process_number",
        )
        .bind(entry.time)
        .bind(&entry.processing_time)
        .fetch_one(pool)
        .await
    }

    /// Find a process log entry by its process number.
    pub async fn find_by_number(
        pool: &PgPool,
        process_number: DbId,
    ) -> Result<Option<ProcessLog>, sqlx::Error> {
        sqlx::query_as::<_, ProcessLog>(&format!(
            "SELECT {COLUMNS} FROM process_logs WHERE process_number = $1"
        ))
        .bind(process_number)
        .fetch_optional(pool)
        .await
    }

    /// Count all process log entries.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*)::BIGINT FROM process_logs")
            .fetch_one(pool)
            .await
    }
}
