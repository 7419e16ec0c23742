use std::path::Path;

/// Server configuration, passed explicitly to [`ServerState`](crate::core::ServerState)
///
/// # Environment variables
///
/// Every field can be overridden from the environment (a `.env` file is
/// loaded first by [`setup_environment`](crate::setup_environment)):
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | WORK_DIR | . | Base directory for the default database file |
/// | DATABASE_PATH | {WORK_DIR}/orders.db | SQLite database file |
/// | STAFF_KEY | canteen123 | Shared secret for `/api/orders` |
/// | HTTP_PORT / PORT | 5000 | HTTP listen port |
/// | LOG_LEVEL | info | Max tracing level |
/// | LOG_DIR | unset | Directory for daily rolling log files |
/// | ENVIRONMENT | development | development / production |
///
/// # Example
///
/// ```ignore
/// STAFF_KEY=s3cret HTTP_PORT=8080 cargo run -p canteen-server
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite database file (`:memory:` for a throwaway database)
    pub database_path: String,
    /// Staff access secret for the order listing
    pub staff_key: String,
    /// HTTP listen port
    pub http_port: u16,
    pub log_level: String,
    pub log_dir: Option<String>,
    /// development | production
    pub environment: String,
}

pub const DEFAULT_STAFF_KEY: &str = "canteen123";
pub const DEFAULT_HTTP_PORT: u16 = 5000;

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset or unparsable variables fall back to their defaults.
    pub fn from_env() -> Self {
        let work_dir = std::env::var("WORK_DIR").unwrap_or_else(|_| ".".into());
        let database_path = std::env::var("DATABASE_PATH").unwrap_or_else(|_| {
            Path::new(&work_dir)
                .join("orders.db")
                .to_string_lossy()
                .into_owned()
        });

        Self {
            database_path,
            staff_key: std::env::var("STAFF_KEY").unwrap_or_else(|_| DEFAULT_STAFF_KEY.into()),
            http_port: std::env::var("HTTP_PORT")
                .or_else(|_| std::env::var("PORT"))
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_HTTP_PORT),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    /// Override the storage location and staff key
    ///
    /// Used by tests
    pub fn with_overrides(database_path: impl Into<String>, staff_key: impl Into<String>) -> Self {
        let mut config = Self::from_env();
        config.database_path = database_path.into();
        config.staff_key = staff_key.into();
        config
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_overrides() {
        let config = Config::with_overrides(":memory:", "letmein");
        assert_eq!(config.database_path, ":memory:");
        assert_eq!(config.staff_key, "letmein");
    }

    #[test]
    fn test_is_production() {
        let mut config = Config::with_overrides(":memory:", "letmein");
        config.environment = "production".into();
        assert!(config.is_production());
        config.environment = "development".into();
        assert!(!config.is_production());
    }
}
