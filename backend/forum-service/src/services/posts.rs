/// Post ingestion - assigns the next page number and appends the post
use crate::db::post_repo;
use crate::error::{AppError, Result};
use crate::metrics::forum::{PAGE_GAPS_TOTAL, POSTS_SUBMITTED_TOTAL};
use crate::models::SubmittedPost;
use crate::services::{random_id, PageCounter};
use crate::SERVICE_NAME;
use db_pool::acquire_with_metrics;
use sqlx::SqlitePool;
use std::sync::Arc;
use tracing::{info, warn};

pub struct PostService {
    pool: SqlitePool,
    counter: Arc<PageCounter>,
}

impl PostService {
    pub fn new(pool: SqlitePool, counter: Arc<PageCounter>) -> Self {
        Self { pool, counter }
    }

    /// Submit a post
    ///
    /// The page number is claimed only once a connection is in hand, so a
    /// pool failure costs nothing. A failed insert after that point leaves
    /// the claimed page number unused; it is not handed back.
    pub async fn submit(&self, content: &str) -> Result<SubmittedPost> {
        if content.is_empty() {
            return Err(AppError::BadRequest(
                "Missing message form parameter".to_string(),
            ));
        }

        let result = self.insert(content).await;
        let label = if result.is_ok() { "success" } else { "error" };
        POSTS_SUBMITTED_TOTAL.with_label_values(&[label]).inc();

        result
    }

    async fn insert(&self, content: &str) -> Result<SubmittedPost> {
        let mut conn = acquire_with_metrics(&self.pool, SERVICE_NAME).await?;

        let id = random_id();
        let page = self.counter.next();

        if let Err(e) = post_repo::insert_post(&mut conn, id, page, content).await {
            PAGE_GAPS_TOTAL.inc();
            warn!(page, error = %e, "Insert failed; page number left unused");
            return Err(e.into());
        }

        info!(post_id = id, page, "Post stored");
        Ok(SubmittedPost { id, page })
    }
}
