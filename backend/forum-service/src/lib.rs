/// Forum Service Library
///
/// A small message board: visitors post short text messages that are shown
/// newest first, ten per page, with optional username/password sign-up.
///
/// # Modules
///
/// - `handlers`: HTTP request handlers and route table
/// - `services`: page counter, feed, post ingestion, auth
/// - `db`: repositories over the `posts` and `users` tables
/// - `security`: Argon2id password derivation
/// - `templates`: feed page rendering
/// - `models`: row types
/// - `error`: error types and HTTP mapping
/// - `config`: configuration management
/// - `metrics`: Prometheus collectors
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod models;
pub mod security;
pub mod services;
pub mod templates;

pub use config::Config;
pub use error::{AppError, Result};

use services::{AuthService, FeedService, PageCounter, PostService};
use sqlx::SqlitePool;
use std::path::PathBuf;
use std::sync::Arc;
use templates::TemplateRenderer;

/// Label used for pool metrics and health output
pub const SERVICE_NAME: &str = "forum-service";

/// Shared state handed to every request handler
pub struct AppState {
    pub pool: SqlitePool,
    pub counter: Arc<PageCounter>,
    pub feed: FeedService,
    pub posts: PostService,
    pub auth: AuthService,
    pub templates: TemplateRenderer,
    pub static_dir: PathBuf,
}

impl AppState {
    /// Wire services around an already-migrated pool
    ///
    /// Seeds the page counter from the stored posts.
    pub async fn new(
        pool: SqlitePool,
        templates: TemplateRenderer,
        config: &Config,
    ) -> Result<Self> {
        let counter = Arc::new(PageCounter::initialize(&pool).await?);

        Ok(Self {
            feed: FeedService::new(pool.clone(), Arc::clone(&counter), config.feed.page_size),
            posts: PostService::new(pool.clone(), Arc::clone(&counter)),
            auth: AuthService::new(pool.clone()),
            pool,
            counter,
            templates,
            static_dir: config.assets.static_dir.clone(),
        })
    }
}

/// Open the database, bootstrap the schema, load templates, seed the counter
pub async fn build_state(config: &Config) -> anyhow::Result<AppState> {
    config.database.log_config();
    let pool = db_pool::create_pool(config.database.clone()).await?;
    db::run_migrations(&pool).await?;

    let templates = TemplateRenderer::load(&config.assets.template_dir)?;

    Ok(AppState::new(pool, templates, config).await?)
}
