/// Auth service - sign-up and login against the `users` table
use crate::db::user_repo;
use crate::error::{AppError, Result};
use crate::metrics::forum::AUTH_ATTEMPTS_TOTAL;
use crate::security::{derive_password_hash, verify_password};
use crate::services::random_id;
use crate::SERVICE_NAME;
use db_pool::acquire_with_metrics;
use sqlx::SqlitePool;
use tracing::{info, warn};

pub struct AuthService {
    pool: SqlitePool,
}

impl AuthService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Register a user, returning the new user id
    pub async fn register(&self, username: &str, password: &str) -> Result<i64> {
        let result = self.register_inner(username, password).await;
        record("register", &result);
        result
    }

    /// Check credentials, returning the user id on success
    pub async fn login(&self, username: &str, password: &str) -> Result<i64> {
        let result = self.login_inner(username, password).await;
        record("login", &result);
        result
    }

    async fn register_inner(&self, username: &str, password: &str) -> Result<i64> {
        require_credentials(username, password)?;

        let id = random_id();
        let hashed_password = derive_blocking(password, id).await?;

        let mut conn = acquire_with_metrics(&self.pool, SERVICE_NAME).await?;
        match user_repo::insert_user(&mut conn, id, username, &hashed_password).await {
            Ok(()) => {
                info!(user_id = id, "User registered");
                Ok(id)
            }
            Err(sqlx::Error::Database(db)) if db.is_unique_violation() => {
                warn!(username, "Sign-up with a taken username");
                Err(AppError::Conflict("Username already taken".to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn login_inner(&self, username: &str, password: &str) -> Result<i64> {
        require_credentials(username, password)?;

        let user = {
            let mut conn = acquire_with_metrics(&self.pool, SERVICE_NAME).await?;
            user_repo::find_user_by_username(&mut conn, username).await?
        };

        let Some(user) = user else {
            return Err(AppError::Unauthorized("Invalid username".to_string()));
        };

        let password = password.to_owned();
        let stored = user.hashed_password;
        let user_id = user.id;
        let matches =
            tokio::task::spawn_blocking(move || verify_password(&password, user_id, &stored))
                .await??;

        if !matches {
            return Err(AppError::Unauthorized("Invalid password".to_string()));
        }

        info!(user_id, "User logged in");
        Ok(user_id)
    }
}

fn require_credentials(username: &str, password: &str) -> Result<()> {
    if username.is_empty() || password.is_empty() {
        return Err(AppError::BadRequest(
            "Missing username or password form parameter".to_string(),
        ));
    }
    Ok(())
}

async fn derive_blocking(password: &str, user_id: i64) -> Result<Vec<u8>> {
    let password = password.to_owned();
    tokio::task::spawn_blocking(move || derive_password_hash(&password, user_id)).await?
}

fn record(action: &str, result: &Result<i64>) {
    let label = match result {
        Ok(_) => "success",
        Err(e) if e.is_server_error() => "error",
        Err(_) => "rejected",
    };
    AUTH_ATTEMPTS_TOTAL.with_label_values(&[action, label]).inc();
}
