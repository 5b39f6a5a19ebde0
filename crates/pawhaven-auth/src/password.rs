// SPDX-FileCopyrightText: 2026 Pawhaven Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Argon2id password hashing.
//!
//! Hashes are stored as PHC strings, so parameters travel with the hash and
//! can be raised later without invalidating existing credentials.

use argon2::Argon2;
use argon2::password_hash::{
    PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng,
};
use pawhaven_core::PawhavenError;

/// Hash a password with Argon2id and a fresh random salt.
pub fn hash_password(password: &str) -> Result<String, PawhavenError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| PawhavenError::Internal(format!("password hashing failed: {e}")))
}

/// Verify a password against a stored PHC hash string.
///
/// Returns `Ok(false)` for a wrong password; errors only when the stored
/// hash itself is unparseable (which indicates data corruption, not a bad
/// login attempt).
pub fn verify_password(password: &str, stored_hash: &str) -> Result<bool, PawhavenError> {
    let parsed = PasswordHash::new(stored_hash)
        .map_err(|e| PawhavenError::Internal(format!("stored password hash is invalid: {e}")))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}
