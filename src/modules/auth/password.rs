use sha2::{Digest, Sha256};

/// Hash a password with SHA-256, returned as lowercase hex
///
/// Unsalted, so existing credential files keep working.
pub fn hash_password(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}
