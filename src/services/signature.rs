//! Request signing for the Bitunix futures API.
//!
//! The broker verifies a double SHA-256:
//!
//! ```text
//! digest = sha256_hex(nonce + timestamp + api_key + query + body)
//! sign   = sha256_hex(digest + secret_key)
//! ```
//!
//! It is not an HMAC and must not be replaced by one.

use chrono::Utc;
use rand::RngCore;
use sha2::{Digest, Sha256};

/// 16 random bytes from the thread-local CSPRNG as 32 lowercase hex chars.
pub fn generate_nonce() -> String {
    let mut bytes = [0u8; 16];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Milliseconds since the Unix epoch, as decimal text.
pub fn timestamp_millis() -> String {
    Utc::now().timestamp_millis().to_string()
}

fn sha256_hex(parts: &[&str]) -> String {
    let mut hasher = Sha256::new();
    for part in parts {
        hasher.update(part.as_bytes());
    }
    hex::encode(hasher.finalize())
}

pub fn generate_signature(
    nonce: &str,
    timestamp: &str,
    api_key: &str,
    query_params: &str,
    body: &str,
    secret_key: &str,
) -> String {
    let digest = sha256_hex(&[nonce, timestamp, api_key, query_params, body]);
    sha256_hex(&[&digest, secret_key])
}
