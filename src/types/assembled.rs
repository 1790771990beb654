use serde::{Deserialize, Serialize};

use crate::types::fingerprint::ContextFingerprint;

/// The final result of one context assembly.
///
/// `text` is the string handed to generation; `assembly` explains how it was
/// put together. The record is never persisted by the engine — it lives for
/// one generation call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssembledContext {
    pub text: String,
    pub assembly: AssemblyMetadata,
}

/// Metadata describing the outcome of the assembly process.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssemblyMetadata {
    pub query: String,
    pub budget: usize,

    pub passages_retrieved: usize,
    pub turns_included: usize,

    pub chars_before_truncation: usize,
    pub truncated: bool,

    pub fingerprint: ContextFingerprint,
}
