use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who spoke a turn. A closed variant: there is no third role, and callers
/// cannot smuggle one in through a stringly-typed record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Human,
    Assistant,
}

impl Role {
    /// Label used when rendering a turn into context text.
    pub fn display_name(self) -> &'static str {
        match self {
            Role::Human => "User",
            Role::Assistant => "Assistant",
        }
    }
}

/// One utterance in a conversation. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    pub content: String,
    // Note: created_at is strictly informational; ordering comes from
    // position in History, never from timestamps.
    pub created_at: DateTime<Utc>,
}

impl Turn {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Turn {
            role,
            content: content.into(),
            created_at: Utc::now(),
        }
    }
}
