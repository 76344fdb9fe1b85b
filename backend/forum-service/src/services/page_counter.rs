/// Page counter - the one piece of state shared by every request
///
/// Holds the highest page number assigned so far. It is a cache of
/// `MAX(page)` over the posts table and is never persisted on its own.
///
/// ## Gaps
///
/// A submission takes its page number with [`PageCounter::next`] before the
/// insert runs. If the insert then fails, the number is not returned: the
/// counter only moves forward, so that page number is skipped for good.
use crate::db::post_repo;
use crate::error::Result;
use crate::metrics::forum::PAGE_COUNTER;
use crate::SERVICE_NAME;
use db_pool::acquire_with_metrics;
use sqlx::SqlitePool;
use std::sync::atomic::{AtomicI64, Ordering};
use tracing::info;

#[derive(Debug, Default)]
pub struct PageCounter {
    value: AtomicI64,
}

impl PageCounter {
    pub fn new(initial: i64) -> Self {
        PAGE_COUNTER.set(initial);
        Self {
            value: AtomicI64::new(initial),
        }
    }

    /// Seed the counter from the highest stored page, or 0 with no posts
    pub async fn initialize(pool: &SqlitePool) -> Result<Self> {
        let mut conn = acquire_with_metrics(pool, SERVICE_NAME).await?;
        let initial = match post_repo::max_page(&mut conn).await? {
            Some(page) => {
                info!(page, "Found max page");
                page
            }
            None => {
                info!("Did not find max page");
                0
            }
        };

        Ok(Self::new(initial))
    }

    /// Claim the next page number
    ///
    /// Every call returns a value strictly greater than all earlier calls.
    pub fn next(&self) -> i64 {
        let page = self.value.fetch_add(1, Ordering::SeqCst) + 1;
        PAGE_COUNTER.set(page);
        page
    }

    pub fn current(&self) -> i64 {
        self.value.load(Ordering::SeqCst)
    }
}
