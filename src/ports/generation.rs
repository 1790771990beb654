use crate::types::error::PortError;

/// Capability interface over an external language model.
///
/// May be slow; the engine assumes no streaming contract and blocks for the
/// full round-trip.
pub trait Generator {
    fn generate(&self, context: &str, question: &str) -> Result<String, PortError>;
}
