//! Password hashing and verification.
//!
//! Argon2id with a per-password random salt, serialized in PHC string
//! format. Verification re-derives the hash from the stored parameters;
//! plaintext passwords never leave this module.

use argon2::password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

use crate::AppError;

/// The hashing primitive itself failed (entropy/resource exhaustion).
/// A mismatching password is NOT an error; see [`verify_password`].
#[derive(Debug, thiserror::Error)]
pub enum PasswordError {
    #[error("failed to hash password")]
    Hashing,
}

impl From<PasswordError> for AppError {
    fn from(e: PasswordError) -> Self {
        AppError::internal(e.to_string())
    }
}

/// Hash a plaintext password with a freshly generated salt.
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(|_| PasswordError::Hashing)
}

/// Returns true iff `password` reproduces `hash`.
///
/// Mismatch and unparsable stored hashes are both a plain `false`; the
/// underlying verifier compares digests in constant time.
pub fn verify_password(password: &str, hash: &str) -> bool {
    PasswordHash::new(hash)
        .ok()
        .as_ref()
        .map(|parsed| {
            Argon2::default()
                .verify_password(password.as_bytes(), parsed)
                .is_ok()
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::{hash_password, verify_password};

    #[test]
    fn hash_then_verify_roundtrip() {
        let hash = hash_password("secret1").unwrap();
        assert!(verify_password("secret1", &hash));
    }

    #[test]
    fn wrong_password_fails_verification() {
        let hash = hash_password("secret1").unwrap();
        assert!(!verify_password("secret2", &hash));
    }

    #[test]
    fn salts_are_unique_per_hash() {
        let a = hash_password("secret1").unwrap();
        let b = hash_password("secret1").unwrap();
        assert_ne!(a, b);
        assert!(verify_password("secret1", &a));
        assert!(verify_password("secret1", &b));
    }

    #[test]
    fn garbage_hash_verifies_false_without_panicking() {
        assert!(!verify_password("secret1", "not-a-phc-string"));
        assert!(!verify_password("secret1", ""));
    }
}
