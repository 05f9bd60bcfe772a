use sha2::{Digest, Sha256};

use crate::error::{ChexError, Result};
use crate::policy::HashAlgo;

/// Digest length in hex chars; SHA-256 and BLAKE3 both emit 32 bytes.
pub const DIGEST_HEX_LEN: usize = 64;

/// Fingerprint `bytes` as lowercase hex. Deterministic, no side effects.
pub fn digest(algo: HashAlgo, bytes: &[u8]) -> String {
    match algo {
        HashAlgo::Sha256 => hex::encode(Sha256::digest(bytes)),
        HashAlgo::Blake3 => blake3::hash(bytes).to_hex().to_string(),
    }
}

/// Validate a checksum field read from a persisted baseline and return it in
/// canonical lowercase form. Accepts surrounding whitespace and uppercase hex.
pub fn parse_digest(field: &str) -> Result<String> {
    let s = field.trim();
    let bytes = hex::decode(s)
        .map_err(|e| ChexError::MalformedBaseline(format!("invalid checksum {s:?}: {e}")))?;
    if bytes.len() * 2 != DIGEST_HEX_LEN {
        return Err(ChexError::MalformedBaseline(format!(
            "checksum {s:?} has {} hex chars, expected {DIGEST_HEX_LEN}",
            s.len()
        )));
    }
    Ok(hex::encode(bytes))
}
