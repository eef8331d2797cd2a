use sha2::{Digest, Sha256};

/// SHA-256 hex digest of a bearer token; raw tokens are never stored.
pub fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}
