//! PostgreSQL access layer: pool construction, migrations, and the
//! `process_logs` model and repository.

pub mod models;
pub mod repositories;
pub mod types;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};

pub type DbPool = sqlx::PgPool;

/// Connection parameters for the log store.
///
/// The relay is configured with discrete parameters (user, host, database,
/// password, port) rather than a single URL; see the server's
/// configuration module for the environment variables and defaults.
#[derive(Debug, Clone)]
pub struct DbConfig {
    pub user: String,
    pub host: String,
    pub database: String,
    pub password: String,
    pub port: u16,
}

impl DbConfig {
    fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .username(&self.user)
            .host(&self.host)
            .database(&self.database)
            .password(&self.password)
            .port(self.port)
    }
}

/// Create a connection pool from the given connection parameters.
///
/// The pool is shared by all request handlers; sizing and connection
/// lifecycle are delegated to sqlx.
pub async fn create_pool(config: &DbConfig) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect_with(config.connect_options())
        .await
}

/// Verify the database is reachable with a trivial round trip.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(pool)
        .await
        .map(|_| ())
}

/// Apply any pending embedded migrations.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
