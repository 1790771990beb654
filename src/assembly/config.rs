use crate::types::error::ConfigError;

// Key point:
// Serializable
// Comparable
// Explicit defaults
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AssemblerConfig {
    /// Passages requested from the retrieval port per question.
    pub k: usize,
    /// Conversational turns (Human/Assistant pairs) kept in the window.
    pub max_turns: usize,
    /// Character ceiling applied to the assembled context.
    pub budget: usize,
}

impl AssemblerConfig {
    /// Validate at the point of use. Zero `k` or `max_turns` are meaningful
    /// degenerate configurations (no passages, no window); a zero budget
    /// collapses every context to "." and is rejected rather than clamped.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.budget == 0 {
            return Err(ConfigError::ZeroBudget);
        }
        Ok(())
    }
}

impl Default for AssemblerConfig {
    fn default() -> Self {
        Self {
            k: 3,
            max_turns: 3,
            budget: 2000,
        }
    }
}
