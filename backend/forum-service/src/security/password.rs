/// Password derivation and verification using Argon2id
///
/// ## Parameters
///
/// - Algorithm: Argon2id, version 0x13
/// - Iterations: 1
/// - Memory: 64 MiB
/// - Parallelism: 4 lanes
/// - Output: 32 bytes
/// - Salt: 8-byte little-endian encoding of the user id
///
/// Registration and login both go through [`derive_password_hash`], so a
/// hash stored at sign-up is reproduced exactly at login.
use crate::error::{AppError, Result};
use argon2::password_hash::Output;
use argon2::{Algorithm, Argon2, Params, Version};

pub const ITERATIONS: u32 = 1;
pub const MEMORY_KIB: u32 = 64 * 1024;
pub const PARALLELISM: u32 = 4;
pub const OUTPUT_LEN: usize = 32;

/// Salt bytes for a user id
pub fn salt_for(user_id: i64) -> [u8; 8] {
    (user_id as u64).to_le_bytes()
}

fn hasher() -> Result<Argon2<'static>> {
    let params = Params::new(MEMORY_KIB, ITERATIONS, PARALLELISM, Some(OUTPUT_LEN))?;
    Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
}

/// Derive the stored hash for `password` under `user_id`
///
/// Memory-hard and slow on purpose; call from a blocking context.
pub fn derive_password_hash(password: &str, user_id: i64) -> Result<Vec<u8>> {
    let mut output = vec![0u8; OUTPUT_LEN];
    hasher()?.hash_password_into(password.as_bytes(), &salt_for(user_id), &mut output)?;
    Ok(output)
}

/// Check `password` against a stored hash in constant time
pub fn verify_password(password: &str, user_id: i64, stored: &[u8]) -> Result<bool> {
    let derived = derive_password_hash(password, user_id)?;

    let stored = Output::new(stored)
        .map_err(|e| AppError::Internal(format!("Stored password hash is malformed: {}", e)))?;
    let derived = Output::new(&derived)
        .map_err(|e| AppError::Internal(format!("Derived password hash is malformed: {}", e)))?;

    Ok(stored == derived)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_salt_is_little_endian_id() {
        assert_eq!(salt_for(1), [1, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(salt_for(0x0102), [2, 1, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_derivation_is_deterministic() {
        let first = derive_password_hash("secret", 42).expect("should derive");
        let second = derive_password_hash("secret", 42).expect("should derive");
        assert_eq!(first.len(), OUTPUT_LEN);
        assert_eq!(first, second);
    }

    #[test]
    fn test_different_ids_give_different_hashes() {
        let first = derive_password_hash("secret", 1).expect("should derive");
        let second = derive_password_hash("secret", 2).expect("should derive");
        assert_ne!(first, second);
    }

    #[test]
    fn test_verify_accepts_matching_password() {
        let stored = derive_password_hash("secret", 7).expect("should derive");
        assert!(verify_password("secret", 7, &stored).expect("should verify"));
    }

    #[test]
    fn test_verify_rejects_wrong_password() {
        let stored = derive_password_hash("secret", 7).expect("should derive");
        assert!(!verify_password("Secret", 7, &stored).expect("should verify"));
    }

    #[test]
    fn test_verify_rejects_truncated_hash() {
        let result = verify_password("secret", 7, &[1, 2, 3]);
        assert!(matches!(result, Err(AppError::Internal(_))));
    }
}
