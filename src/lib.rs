//! Bounded context assembly engine for retrieval-augmented chat.
//!
//! `rag-core` decides what goes into a language model's limited context
//! window: it merges passages from an external vector store with a window of
//! recent dialogue turns, truncates the result against a character budget at
//! sentence boundaries, and records completed question/answer cycles in
//! session history. Assembly is deterministic — identical inputs against a
//! deterministic retriever always produce identical context strings,
//! byte-for-byte.
//!
//! Retrieval and generation are consumed through narrow synchronous port
//! traits; no embedding, indexing, or model-serving logic lives here.

pub mod assembly;
pub mod history;
pub mod ports;
pub mod session;
pub mod types;

pub use assembly::{AssemblerConfig, ContextAssembler};
pub use history::{History, Role, Turn};
pub use ports::{Generator, Retriever};
pub use session::ChatSession;
pub use types::{
    AssembledContext, AssemblyMetadata, ConfigError, ContextFingerprint, EngineError, PortError,
};
