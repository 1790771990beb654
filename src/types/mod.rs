pub mod assembled;
pub mod error;
pub mod fingerprint;

pub use assembled::{AssembledContext, AssemblyMetadata};
pub use error::{ConfigError, EngineError, PortError};
pub use fingerprint::ContextFingerprint;
