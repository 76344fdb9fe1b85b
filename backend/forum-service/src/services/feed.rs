/// Feed service - reverse-chronological, paginated post listing
///
/// Pages are windows over the page-number space, not row offsets. A request
/// snapshots the counter once and lists posts with
/// `page <= counter - requested_page * page_size`, so posts submitted while
/// the request runs never shift its window.
use crate::db::post_repo;
use crate::error::Result;
use crate::metrics::forum::{FEED_REQUEST_DURATION_SECONDS, FEED_REQUEST_TOTAL};
use crate::models::Post;
use crate::services::PageCounter;
use crate::SERVICE_NAME;
use db_pool::acquire_with_metrics;
use sqlx::SqlitePool;
use std::sync::Arc;
use tracing::debug;

/// Posts rendered per feed request
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Highest page number eligible for `requested_page`
///
/// Saturates instead of overflowing, so a huge page request only drives the
/// bound further below zero.
pub fn upper_bound(counter: i64, requested_page: u64, page_size: i64) -> i64 {
    let requested = i64::try_from(requested_page).unwrap_or(i64::MAX);
    counter.saturating_sub(requested.saturating_mul(page_size))
}

pub struct FeedService {
    pool: SqlitePool,
    counter: Arc<PageCounter>,
    page_size: i64,
}

impl FeedService {
    pub fn new(pool: SqlitePool, counter: Arc<PageCounter>, page_size: i64) -> Self {
        Self {
            pool,
            counter,
            page_size,
        }
    }

    pub fn page_size(&self) -> i64 {
        self.page_size
    }

    /// List up to `page_size` posts for `requested_page`, newest first
    pub async fn list(&self, requested_page: u64) -> Result<Vec<Post>> {
        let bound = upper_bound(self.counter.current(), requested_page, self.page_size);
        debug!(requested_page, bound, "Listing feed");

        if bound < 0 {
            FEED_REQUEST_TOTAL.with_label_values(&["empty"]).inc();
            return Ok(Vec::new());
        }

        let timer = FEED_REQUEST_DURATION_SECONDS.start_timer();
        let result = self.query(bound).await;
        timer.observe_duration();

        let label = if result.is_ok() { "success" } else { "error" };
        FEED_REQUEST_TOTAL.with_label_values(&[label]).inc();

        result
    }

    async fn query(&self, bound: i64) -> Result<Vec<Post>> {
        let mut conn = acquire_with_metrics(&self.pool, SERVICE_NAME).await?;
        let posts = post_repo::list_posts_at_or_below(&mut conn, bound, self.page_size).await?;
        Ok(posts)
    }
}
