/// Data models for forum-service
///
/// - Post: a short text message tagged with its logical page number
/// - User: a registered account with its derived password hash
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Post {
    /// Random 63-bit identifier, chosen at insert time
    pub id: i64,
    /// Logical page number from the page counter, immutable after insert
    pub page: i64,
    pub content: String,
    /// Unix seconds, assigned by storage
    pub created: i64,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    /// Random 63-bit identifier; its little-endian bytes are the password salt
    pub id: i64,
    pub username: String,
    pub hashed_password: Vec<u8>,
}

/// Outcome of an accepted post submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmittedPost {
    pub id: i64,
    pub page: i64,
}
