/// Business logic layer
///
/// - `page_counter`: process-wide page number source, seeded from storage
/// - `feed`: paginated, newest-first post listing
/// - `posts`: post ingestion
/// - `auth`: sign-up and login
pub mod auth;
pub mod feed;
pub mod page_counter;
pub mod posts;

pub use auth::AuthService;
pub use feed::FeedService;
pub use page_counter::PageCounter;
pub use posts::PostService;

use rand::Rng;

/// Random non-negative 63-bit identifier; collisions are not checked
pub(crate) fn random_id() -> i64 {
    rand::thread_rng().gen_range(0..=i64::MAX)
}
