//! Credential hashing and validation
//!
//! The engine never stores or logs a plaintext credential; only the
//! SHA-256 digest produced here is kept on the account.

use sha2::{Digest, Sha256};

/// Length bounds for a valid numeric credential
const MIN_LEN: usize = 4;
const MAX_LEN: usize = 6;

/// Computes the lowercase hex SHA-256 digest of a credential
pub fn hash_credential(credential: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(credential.as_bytes());
    hex::encode(hasher.finalize())
}

/// Returns true if the credential is exactly 4 to 6 ASCII digits
pub fn is_valid_credential(credential: &str) -> bool {
    (MIN_LEN..=MAX_LEN).contains(&credential.len())
        && credential.bytes().all(|b| b.is_ascii_digit())
}
