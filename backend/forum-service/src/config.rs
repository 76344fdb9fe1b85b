/// Configuration management for Forum Service
///
/// Everything is read from environment variables once at startup. A `.env`
/// file in the working directory is loaded first when present.
use crate::services::feed::DEFAULT_PAGE_SIZE;
use crate::SERVICE_NAME;
use db_pool::{parse_env_strict, DbConfig};
use std::path::PathBuf;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Application settings
    pub app: AppConfig,
    /// Database pool configuration
    pub database: DbConfig,
    /// Feed configuration
    pub feed: FeedConfig,
    /// Template and static file locations
    pub assets: AssetsConfig,
}

/// Application settings
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Application environment (development, production)
    pub env: String,
    /// Server host to bind to
    pub host: String,
    /// Server port to bind to
    pub port: u16,
    /// HTTP worker threads
    pub workers: usize,
}

#[derive(Debug, Clone)]
pub struct FeedConfig {
    /// Posts per feed page
    pub page_size: i64,
}

#[derive(Debug, Clone)]
pub struct AssetsConfig {
    /// Directory holding `index.html`
    pub template_dir: PathBuf,
    /// Directory served under `/static`, also holding `login.html` and `signup.html`
    pub static_dir: PathBuf,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, String> {
        let app = AppConfig {
            env: std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
            host: std::env::var("FORUM_SERVICE_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: parse_env_strict("FORUM_SERVICE_PORT", 8080)?,
            workers: parse_env_strict("FORUM_SERVICE_WORKERS", 4)?,
        };

        if app.workers == 0 {
            return Err("FORUM_SERVICE_WORKERS must be at least 1".to_string());
        }

        let page_size = parse_env_strict("FEED_PAGE_SIZE", DEFAULT_PAGE_SIZE)?;
        if page_size < 1 {
            return Err(format!("FEED_PAGE_SIZE must be at least 1, got {}", page_size));
        }

        Ok(Config {
            app,
            database: DbConfig::for_service(SERVICE_NAME),
            feed: FeedConfig { page_size },
            assets: AssetsConfig {
                template_dir: std::env::var("FORUM_TEMPLATE_DIR")
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| PathBuf::from("templates")),
                static_dir: std::env::var("FORUM_STATIC_DIR")
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| PathBuf::from("static")),
            },
        })
    }
}
