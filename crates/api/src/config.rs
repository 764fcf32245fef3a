use relay_db::DbConfig;

/// Full relay configuration, assembled once at startup and passed by
/// reference (via `AppState`) to anything that needs it.
#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub compute: ComputeConfig,
    pub database: DbConfig,
}

/// HTTP server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development. In
/// production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Inbound HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
}

/// Compute collaborator endpoint configuration.
#[derive(Debug, Clone)]
pub struct ComputeConfig {
    /// Collaborator hostname (default: `go-server`).
    pub host: String,
    /// Collaborator port (default: `8086`).
    pub port: u16,
    /// Upstream call timeout in seconds (default: `30`). The original
    /// deployment had no bound here; an unbounded wait is an
    /// availability risk, so the bound is explicit and configurable.
    pub timeout_secs: u64,
}

impl ComputeConfig {
    /// Base HTTP URL of the collaborator, e.g. `http://go-server:8086`.
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

impl Config {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default       |
    /// |------------------------|---------------|
    /// | `HOST`                 | `0.0.0.0`     |
    /// | `PORT`                 | `3000`        |
    /// | `REQUEST_TIMEOUT_SECS` | `30`          |
    /// | `COMPUTE_HOST`         | `go-server`   |
    /// | `COMPUTE_PORT`         | `8086`        |
    /// | `COMPUTE_TIMEOUT_SECS` | `30`          |
    /// | `POSTGRES_USER`        | `postgres`    |
    /// | `POSTGRES_HOST`        | `postgres-db` |
    /// | `POSTGRES_DB`          | `logs`        |
    /// | `POSTGRES_PASSWORD`    | `password`    |
    /// | `POSTGRES_PORT`        | `5432`        |
    pub fn from_env() -> Self {
        let server = ServerConfig {
            host: env_or("HOST", "0.0.0.0"),
            port: parse_env_or("PORT", 3000),
            request_timeout_secs: parse_env_or("REQUEST_TIMEOUT_SECS", 30),
        };

        let compute = ComputeConfig {
            host: env_or("COMPUTE_HOST", "go-server"),
            port: parse_env_or("COMPUTE_PORT", 8086),
            timeout_secs: parse_env_or("COMPUTE_TIMEOUT_SECS", 30),
        };

        let database = DbConfig {
            user: env_or("POSTGRES_USER", "postgres"),
            host: env_or("POSTGRES_HOST", "postgres-db"),
            database: env_or("POSTGRES_DB", "logs"),
            password: env_or("POSTGRES_PASSWORD", "password"),
            port: parse_env_or("POSTGRES_PORT", 5432),
        };

        Self {
            server,
            compute,
            database,
        }
    }
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

/// Read an env var and parse it, panicking on a malformed value.
///
/// Misconfiguration should fail fast at startup rather than surface as
/// confusing runtime behaviour.
fn parse_env_or<T: std::str::FromStr>(name: &str, default: T) -> T
where
    T::Err: std::fmt::Display,
{
    match std::env::var(name) {
        Ok(raw) => raw
            .parse()
            .unwrap_or_else(|e| panic!("{name} must be a valid value: {e}")),
        Err(_) => default,
    }
}
