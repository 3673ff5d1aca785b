//! Password hashing and access token issuance.

use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use rand::rngs::OsRng;
use uuid::Uuid;

use crate::error::AuthError;

/// Hash a password using Argon2id with a freshly generated salt.
///
/// The salt is embedded in the returned PHC string, so nothing else needs
/// to be stored alongside the hash.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::HashFailure)
}

/// Verify a password against a stored PHC-format hash.
///
/// Goes through the argon2 verifier, never a byte comparison of hash
/// strings.
pub fn verify_password(password: &str, password_hash: &str) -> Result<(), AuthError> {
    let parsed_hash =
        PasswordHash::new(password_hash).map_err(|_| AuthError::InvalidCredentials)?;

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| AuthError::InvalidCredentials)
}

/// Issue an opaque bearer token: the 16 random bytes of a v4 UUID,
/// base64-encoded for transport.
pub fn issue_access_token() -> String {
    STANDARD.encode(Uuid::new_v4().as_bytes())
}
