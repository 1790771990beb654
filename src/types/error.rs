use thiserror::Error;

/// Error type spoken by the port adapters.
///
/// Backends wrap whatever their client library raises; the engine maps it
/// into an [`EngineError`] kind at the call site and propagates it verbatim —
/// no retries, no partial-context fallback.
pub type PortError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("context budget must be greater than zero")]
    ZeroBudget,
}

/// Every failure the engine can surface, one variant per external seam.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("retrieval backend failed: {0}")]
    Retrieval(String),

    #[error("generation backend failed: {0}")]
    Generation(String),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
