use crate::models::User;
use sqlx::SqliteConnection;

pub async fn insert_user(
    conn: &mut SqliteConnection,
    id: i64,
    username: &str,
    hashed_password: &[u8],
) -> Result<(), sqlx::Error> {
    sqlx::query("INSERT INTO users (id, username, hashed_password) VALUES (?, ?, ?)")
        .bind(id)
        .bind(username)
        .bind(hashed_password)
        .execute(conn)
        .await?;

    Ok(())
}

pub async fn find_user_by_username(
    conn: &mut SqliteConnection,
    username: &str,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        "SELECT id, username, hashed_password FROM users WHERE username = ?",
    )
    .bind(username)
    .fetch_optional(conn)
    .await
}
