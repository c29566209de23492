/// Server configuration
///
/// # Environment variables
///
/// Every field can be overridden through the environment:
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | WORK_DIR | /var/lib/allmart | Working directory (database files) |
/// | PORT | 8000 | HTTP API port |
/// | ENVIRONMENT | development | development \| staging \| production |
/// | CORS_ORIGINS | localhost + production site | Comma-separated allowed origins |
///
/// # Example
///
/// ```ignore
/// WORK_DIR=/data/allmart PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Working directory, holds the embedded database
    pub work_dir: String,
    /// HTTP API port
    pub http_port: u16,
    /// Runtime environment: development | staging | production
    pub environment: String,
    /// Allowed CORS origins (credentials are enabled, so these are explicit)
    pub cors_origins: Vec<String>,
}

const DEFAULT_CORS_ORIGINS: &str = "http://localhost:3000,https://allmartavenue.vercel.app";

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "/var/lib/allmart".into()),
            http_port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            cors_origins: std::env::var("CORS_ORIGINS")
                .unwrap_or_else(|_| DEFAULT_CORS_ORIGINS.into())
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
        }
    }

    /// Override work dir and port, keeping everything else from the
    /// environment. Used by tests.
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.http_port = http_port;
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
