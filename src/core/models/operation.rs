use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::core::models::cipher_spec::{CipherKind, Direction};

/// One entry in the operation history (JSON lines format).
///
/// Only sizes and a digest of the output are kept, never the text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationRecord {
    pub timestamp: DateTime<Utc>,
    pub cipher: CipherKind,
    pub direction: Direction,
    pub input_len: usize,
    pub output_len: usize,
    pub output_sha256: String,
}

impl OperationRecord {
    pub fn new(cipher: CipherKind, direction: Direction, input: &str, output: &str) -> Self {
        Self {
            timestamp: Utc::now(),
            cipher,
            direction,
            input_len: input.chars().count(),
            output_len: output.chars().count(),
            output_sha256: sha256_hex(output.as_bytes()),
        }
    }
}

/// Compute the SHA256 hex digest of the given bytes.
pub fn sha256_hex(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    format!("{:x}", hasher.finalize())
}
