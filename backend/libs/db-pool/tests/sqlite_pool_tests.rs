//! SQLite pool tests
//!
//! Test Coverage:
//! - Pool creation creates the database file
//! - Scoped acquisition returns the connection on drop
//! - Busy timeout lets a second writer wait out a held write lock

use db_pool::{acquire_with_metrics, create_pool, DbConfig};
use sqlx::SqlitePool;
use std::time::Duration;
use tempfile::TempDir;

async fn create_test_pool(dir: &TempDir, max_connections: u32, busy_timeout_secs: u64) -> SqlitePool {
    let path = dir.path().join("pool-test.db");
    let config = DbConfig {
        service_name: "pool-test".to_string(),
        database_url: format!("sqlite://{}", path.display()),
        max_connections,
        min_connections: 1,
        acquire_timeout_secs: 2,
        busy_timeout_secs,
        metrics_interval_secs: 0,
        ..DbConfig::default()
    };

    create_pool(config)
        .await
        .expect("Failed to create test pool")
}

#[tokio::test]
async fn test_create_pool_creates_database_file() {
    let dir = TempDir::new().unwrap();
    let _pool = create_test_pool(&dir, 2, 5).await;

    assert!(dir.path().join("pool-test.db").exists());
}

#[tokio::test]
async fn test_connection_returns_to_pool_on_drop() {
    let dir = TempDir::new().unwrap();
    let pool = create_test_pool(&dir, 1, 5).await;

    {
        let mut conn = acquire_with_metrics(&pool, "pool-test").await.unwrap();
        sqlx::query("SELECT 1").execute(&mut *conn).await.unwrap();
    }

    // With a single-connection pool this only succeeds if the first one came back.
    let conn = tokio::time::timeout(
        Duration::from_secs(1),
        acquire_with_metrics(&pool, "pool-test"),
    )
    .await
    .expect("acquire should not time out")
    .expect("acquire should succeed");
    drop(conn);
}

#[tokio::test]
async fn test_acquire_times_out_when_exhausted() {
    let dir = TempDir::new().unwrap();
    let pool = create_test_pool(&dir, 1, 5).await;

    let _held = acquire_with_metrics(&pool, "pool-test").await.unwrap();
    let result = acquire_with_metrics(&pool, "pool-test").await;

    assert!(matches!(result, Err(sqlx::Error::PoolTimedOut)));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_busy_timeout_waits_for_writer_lock() {
    let dir = TempDir::new().unwrap();
    let pool = create_test_pool(&dir, 2, 5).await;

    sqlx::query("CREATE TABLE t (v INTEGER)")
        .execute(&pool)
        .await
        .unwrap();

    let mut holder = acquire_with_metrics(&pool, "pool-test").await.unwrap();
    sqlx::query("BEGIN IMMEDIATE").execute(&mut *holder).await.unwrap();
    sqlx::query("INSERT INTO t (v) VALUES (1)")
        .execute(&mut *holder)
        .await
        .unwrap();

    let writer_pool = pool.clone();
    let writer = tokio::spawn(async move {
        sqlx::query("INSERT INTO t (v) VALUES (2)")
            .execute(&writer_pool)
            .await
    });

    tokio::time::sleep(Duration::from_millis(200)).await;
    sqlx::query("COMMIT").execute(&mut *holder).await.unwrap();
    drop(holder);

    writer
        .await
        .unwrap()
        .expect("second writer should wait for the lock instead of failing");

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM t")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 2);
}
