/// Security primitives for forum-service
///
/// - **password**: Argon2id key derivation salted with the user id
pub mod password;

pub use password::{derive_password_hash, verify_password};
