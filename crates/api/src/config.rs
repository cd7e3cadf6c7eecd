use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;

/// Server configuration loaded from environment variables.
///
/// All fields except `database_url` have sensible defaults suitable for
/// local development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// PostgreSQL connection string (required).
    pub database_url: String,
    /// Upper bound on pooled database connections (default: `10`).
    pub db_max_connections: u32,
    /// How long a request waits for a free connection, in seconds (default: `30`).
    pub db_acquire_timeout_secs: u64,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Display label for the review counter on the stats endpoint.
    pub total_reviews_label: String,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                   | Default                 |
    /// |---------------------------|-------------------------|
    /// | `DATABASE_URL`            | (required)              |
    /// | `HOST`                    | `0.0.0.0`               |
    /// | `PORT`                    | `3000`                  |
    /// | `DB_MAX_CONNECTIONS`      | `10`                    |
    /// | `DB_ACQUIRE_TIMEOUT_SECS` | `30`                    |
    /// | `CORS_ORIGINS`            | `http://localhost:3000` |
    /// | `REQUEST_TIMEOUT_SECS`    | `30`                    |
    /// | `TOTAL_REVIEWS_LABEL`     | `10K+`                  |
    ///
    /// `LOG_FORMAT=json` is read separately by [`json_logs_requested`].
    ///
    /// Panics on a missing `DATABASE_URL` or an unparsable value so that
    /// misconfiguration fails at startup.
    pub fn from_env() -> Self {
        let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

        let cors_origins = parse_origins(
            &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "http://localhost:3000".into()),
        );

        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: env_or("PORT", 3000),
            database_url,
            db_max_connections: env_or("DB_MAX_CONNECTIONS", 10),
            db_acquire_timeout_secs: env_or("DB_ACQUIRE_TIMEOUT_SECS", 30),
            cors_origins,
            request_timeout_secs: env_or("REQUEST_TIMEOUT_SECS", 30),
            total_reviews_label: std::env::var("TOTAL_REVIEWS_LABEL")
                .unwrap_or_else(|_| "10K+".into()),
        }
    }

    pub fn db_acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.db_acquire_timeout_secs)
    }
}

/// Whether `LOG_FORMAT` asks for JSON log lines instead of the human format.
///
/// Read before [`ServerConfig::from_env`] so the subscriber is installed
/// before anything logs.
pub fn json_logs_requested() -> bool {
    std::env::var("LOG_FORMAT").is_ok_and(|v| is_json_format(&v))
}

fn is_json_format(raw: &str) -> bool {
    raw.trim().eq_ignore_ascii_case("json")
}

/// Read and parse `key`, falling back to `default` when unset.
fn env_or<T>(key: &str, default: T) -> T
where
    T: FromStr,
    T::Err: Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .parse()
            .unwrap_or_else(|e| panic!("{key} has an invalid value '{raw}': {e}")),
        Err(_) => default,
    }
}

/// Split a comma-separated origin list, dropping blanks.
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
