/// Database primary keys are PostgreSQL BIGSERIAL values.
pub type DbId = i64;

/// All timestamps handled by the relay are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
