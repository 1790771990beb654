use crate::types::error::PortError;

/// Capability interface over an external vector store.
///
/// The engine trusts the backend's relevance ranking verbatim; passages come
/// back most-relevant-first and are never re-ranked here. Calls are blocking
/// synchronous round-trips — timeouts, if any, belong to the adapter.
pub trait Retriever {
    /// Return up to `k` passages relevant to `query`, best first. May return
    /// fewer if the store holds fewer matches, including none.
    fn search(&self, query: &str, k: usize) -> Result<Vec<String>, PortError>;

    /// Forward documents to the backend's ingestion path.
    fn add_documents(&mut self, documents: Vec<String>) -> Result<(), PortError>;
}
