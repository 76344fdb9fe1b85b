use lazy_static::lazy_static;
use prometheus::{
    register_histogram, register_int_counter, register_int_counter_vec, register_int_gauge,
    Histogram, IntCounter, IntCounterVec, IntGauge,
};

lazy_static! {
    /// Post submissions by outcome (success, error).
    pub static ref POSTS_SUBMITTED_TOTAL: IntCounterVec = register_int_counter_vec!(
        "forum_posts_submitted_total",
        "Post submissions segmented by outcome",
        &["result"]
    )
    .expect("failed to register forum_posts_submitted_total");

    /// Page numbers consumed by a submission whose insert then failed.
    pub static ref PAGE_GAPS_TOTAL: IntCounter = register_int_counter!(
        "forum_page_gaps_total",
        "Page numbers permanently skipped after a failed insert"
    )
    .expect("failed to register forum_page_gaps_total");

    /// Latest value handed out by the page counter.
    pub static ref PAGE_COUNTER: IntGauge = register_int_gauge!(
        "forum_page_counter",
        "Highest page number assigned so far"
    )
    .expect("failed to register forum_page_counter");

    /// Feed requests by outcome.
    pub static ref FEED_REQUEST_TOTAL: IntCounterVec = register_int_counter_vec!(
        "forum_feed_requests_total",
        "Feed requests segmented by outcome",
        &["result"]
    )
    .expect("failed to register forum_feed_requests_total");

    pub static ref FEED_REQUEST_DURATION_SECONDS: Histogram = register_histogram!(
        "forum_feed_request_duration_seconds",
        "Feed query duration"
    )
    .expect("failed to register forum_feed_request_duration_seconds");

    /// Sign-up and login attempts by action and outcome.
    pub static ref AUTH_ATTEMPTS_TOTAL: IntCounterVec = register_int_counter_vec!(
        "forum_auth_attempts_total",
        "Authentication attempts segmented by action and outcome",
        &["action", "result"]
    )
    .expect("failed to register forum_auth_attempts_total");
}
