use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Content hash of an assembled context string.
///
/// Identical context text always yields an identical fingerprint, which makes
/// assembly determinism checkable without byte-comparing whole contexts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContextFingerprint(String);

impl ContextFingerprint {
    pub fn from_text(text: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(text.as_bytes());

        let hash = hasher.finalize();
        let hex = hex::encode(hash);

        ContextFingerprint(format!("sha256:{hex}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
