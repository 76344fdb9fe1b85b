//! Shared fixtures: a forum backed by a throwaway SQLite file
#![allow(dead_code)]

use actix_web::web;
use db_pool::DbConfig;
use forum_service::config::{AppConfig, AssetsConfig, FeedConfig};
use forum_service::{AppState, Config};
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestForum {
    // Keeps the database file alive for the duration of the test
    _dir: TempDir,
    pub config: Config,
    pub state: web::Data<AppState>,
}

pub fn test_config(dir: &TempDir) -> Config {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));

    Config {
        app: AppConfig {
            env: "test".to_string(),
            host: "127.0.0.1".to_string(),
            port: 0,
            workers: 1,
        },
        database: DbConfig {
            service_name: "forum-service-test".to_string(),
            database_url: format!("sqlite://{}", dir.path().join("forum.db").display()),
            max_connections: 8,
            min_connections: 1,
            metrics_interval_secs: 0,
            ..DbConfig::default()
        },
        feed: FeedConfig::default(),
        assets: AssetsConfig {
            template_dir: manifest_dir.join("templates"),
            static_dir: manifest_dir.join("static"),
        },
    }
}

pub async fn spawn_forum() -> TestForum {
    let dir = TempDir::new().expect("create temp dir");
    let config = test_config(&dir);
    let state = forum_service::build_state(&config)
        .await
        .expect("build forum state");

    TestForum {
        _dir: dir,
        config,
        state: web::Data::new(state),
    }
}

impl TestForum {
    /// Build a fresh state over the same database, as a process restart would
    pub async fn restart(&self) -> web::Data<AppState> {
        let state = forum_service::build_state(&self.config)
            .await
            .expect("rebuild forum state");
        web::Data::new(state)
    }

    /// Same forum with its state rebuilt from storage
    pub async fn restarted(self) -> Self {
        let state = self.restart().await;
        Self { state, ..self }
    }

    /// Page numbers of all stored posts, ascending
    pub async fn stored_pages(&self) -> Vec<i64> {
        sqlx::query_scalar("SELECT page FROM posts ORDER BY page")
            .fetch_all(&self.state.pool)
            .await
            .expect("read stored pages")
    }

    pub async fn post_count(&self) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM posts")
            .fetch_one(&self.state.pool)
            .await
            .expect("count posts")
    }

    /// Make every insert of `content` fail inside storage
    pub async fn reject_inserts_of(&self, content: &str) {
        let sql = format!(
            "CREATE TRIGGER reject_content BEFORE INSERT ON posts \
             WHEN NEW.content = '{}' \
             BEGIN SELECT RAISE(ABORT, 'rejected by test trigger'); END;",
            content.replace('\'', "''")
        );
        sqlx::query(&sql)
            .execute(&self.state.pool)
            .await
            .expect("create rejecting trigger");
    }

    pub async fn submit_all(&self, contents: &[&str]) {
        for content in contents {
            self.state
                .posts
                .submit(content)
                .await
                .expect("submit post");
        }
    }
}
