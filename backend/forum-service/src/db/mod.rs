/// Database access layer
///
/// Repository functions take a borrowed connection so that callers decide
/// how long a pooled connection is held.
pub mod post_repo;
pub mod user_repo;

use sqlx::SqlitePool;
use tracing::info;

/// Create the `posts` and `users` tables when they do not exist yet
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    info!("Database schema is up to date");
    Ok(())
}
