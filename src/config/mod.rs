use once_cell::sync::Lazy;
use std::env;
use std::path::PathBuf;

/// Process-wide configuration, loaded once from the environment at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Port the HTTP server binds to.
    pub port: u16,
    /// Public base URL used when building upload links.
    pub base_url: String,
    /// Directory where uploaded images are stored and served from.
    pub uploads_dir: PathBuf,
    /// Maximum connections for the database pool.
    pub max_connections: u32,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let port = parse_port(env::var("PORT").ok().as_deref());
        let base_url = env::var("BASE_URL").unwrap_or_else(|_| format!("http://localhost:{}", port));
        let uploads_dir = env::var("UPLOADS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("uploads"));
        let max_connections = env::var("DATABASE_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);

        Self { port, base_url, uploads_dir, max_connections }
    }
}

fn parse_port(value: Option<&str>) -> u16 {
    value.and_then(|v| v.parse().ok()).unwrap_or(4000)
}

// Global singleton config - initialized once at startup
pub static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);

// Convenience function for accessing config
pub fn config() -> &'static AppConfig {
    &CONFIG
}
