use crate::models::Post;
use sqlx::SqliteConnection;

/// Highest page number stored so far, `None` when there are no posts
pub async fn max_page(conn: &mut SqliteConnection) -> Result<Option<i64>, sqlx::Error> {
    sqlx::query_scalar::<_, Option<i64>>("SELECT MAX(page) FROM posts")
        .fetch_one(conn)
        .await
}

/// Append a post; `created` is filled in by the table default
pub async fn insert_post(
    conn: &mut SqliteConnection,
    id: i64,
    page: i64,
    content: &str,
) -> Result<(), sqlx::Error> {
    sqlx::query("INSERT INTO posts (id, page, content) VALUES (?, ?, ?)")
        .bind(id)
        .bind(page)
        .bind(content)
        .execute(conn)
        .await?;

    Ok(())
}

/// Newest posts whose page is at or below `upper_bound`
///
/// Rows created within the same second fall back to page order, which keeps
/// the result newest-first.
pub async fn list_posts_at_or_below(
    conn: &mut SqliteConnection,
    upper_bound: i64,
    limit: i64,
) -> Result<Vec<Post>, sqlx::Error> {
    sqlx::query_as::<_, Post>(
        r#"
        SELECT id, page, content, created
        FROM posts
        WHERE page <= ?
        ORDER BY created DESC, page DESC
        LIMIT ?
        "#,
    )
    .bind(upper_bound)
    .bind(limit)
    .fetch_all(conn)
    .await
}
