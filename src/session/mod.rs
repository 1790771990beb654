use tracing::{debug, info};

use crate::assembly::{AssemblerConfig, ContextAssembler};
use crate::history::{History, Role, Turn};
use crate::ports::{Generator, Retriever};
use crate::types::error::{ConfigError, EngineError};

/// One conversational session: owns its history, its assembler, and the two
/// external ports, all injected at construction.
///
/// Sequencing is the caller's job — `ask` takes `&mut self` and the session
/// does no internal locking. Processing is one blocking cycle at a time:
/// assemble, generate, record.
pub struct ChatSession<R, G> {
    retriever: R,
    generator: G,
    assembler: ContextAssembler,
    history: History,
}

impl<R, G> ChatSession<R, G>
where
    R: Retriever,
    G: Generator,
{
    pub fn new(retriever: R, generator: G, config: AssemblerConfig) -> Result<Self, ConfigError> {
        let assembler = ContextAssembler::new(config)?;
        Ok(Self {
            retriever,
            generator,
            assembler,
            history: History::new(),
        })
    }

    /// Run one question/answer cycle.
    ///
    /// History mutates only after generation succeeds, and then by the full
    /// Human/Assistant pair — an external reader never observes half a
    /// cycle. Retrieval or generation failure aborts with history untouched.
    pub fn ask(&mut self, question: &str) -> Result<String, EngineError> {
        let context = self
            .assembler
            .assemble(&self.retriever, question, &self.history)?;
        debug!(
            chars = context.text.chars().count(),
            truncated = context.assembly.truncated,
            "context assembled"
        );

        let answer = self
            .generator
            .generate(&context.text, question)
            .map_err(|e| EngineError::Generation(e.to_string()))?;

        self.history.append(Turn::new(Role::Human, question));
        self.history.append(Turn::new(Role::Assistant, answer.clone()));
        info!(history_len = self.history.len(), "cycle completed");

        Ok(answer)
    }

    /// Pass documents through to the retrieval backend's ingestion path.
    pub fn add_documents(&mut self, documents: Vec<String>) -> Result<(), EngineError> {
        self.retriever
            .add_documents(documents)
            .map_err(|e| EngineError::Retrieval(e.to_string()))
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    pub fn history(&self) -> &History {
        &self.history
    }
}
