pub mod config;
pub mod truncation;
pub mod windowing;

use tracing::debug;

use crate::history::History;
use crate::ports::Retriever;
use crate::types::assembled::{AssembledContext, AssemblyMetadata};
use crate::types::error::{ConfigError, EngineError};
use crate::types::fingerprint::ContextFingerprint;
pub use config::AssemblerConfig;
pub use truncation::{truncate_to_budget, TruncationResult};
pub use windowing::render_window;

/// Builds the bounded context string consumed by generation.
///
/// A pure function of its inputs: assembling twice with the same query,
/// history, and a deterministic retriever yields the same context
/// byte-for-byte. No caching, no retries, no partial context on failure.
pub struct ContextAssembler {
    config: AssemblerConfig,
}

impl ContextAssembler {
    pub fn new(config: AssemblerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &AssemblerConfig {
        &self.config
    }

    pub fn assemble<R>(
        &self,
        retriever: &R,
        query: &str,
        history: &History,
    ) -> Result<AssembledContext, EngineError>
    where
        R: Retriever,
    {
        // 1. Retrieval Phase
        // The backend's relevance order is trusted verbatim; join as-is.
        let passages = retriever
            .search(query, self.config.k)
            .map_err(|e| EngineError::Retrieval(e.to_string()))?;
        let passages_retrieved = passages.len();
        debug!(passages = passages_retrieved, "retrieved passages");

        let mut context = passages.join("\n\n");

        // 2. History Phase
        let window = history.recent_window(self.config.max_turns);
        let rendered = render_window(window);

        // 3. Merge Phase
        // The separator is emitted even when the passages segment is empty,
        // so a passage-less context begins "\n\nRecent conversation:".
        if !rendered.is_empty() {
            context = format!("{context}\n\nRecent conversation:\n{rendered}");
        }

        // 4. Truncation Phase
        let TruncationResult {
            text,
            chars_before,
            truncated,
        } = truncate_to_budget(&context, self.config.budget);
        if truncated {
            debug!(chars_before, budget = self.config.budget, "context truncated");
        }

        let fingerprint = ContextFingerprint::from_text(&text);

        let metadata = AssemblyMetadata {
            query: query.to_string(),
            budget: self.config.budget,
            passages_retrieved,
            turns_included: window.len(),
            chars_before_truncation: chars_before,
            truncated,
            fingerprint,
        };

        Ok(AssembledContext {
            text,
            assembly: metadata,
        })
    }
}
