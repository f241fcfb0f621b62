use serde::{Deserialize, Serialize};

use super::enums::MessageRole;

/// One turn of the intake conversation. Insertion order is meaningful:
/// the first user message is the canonical fallback description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
        }
    }
}

/// Concatenate messages into the role-tagged transcript form used for
/// heuristic extraction and fingerprinting: `U: …` / `A: …`, one per line.
pub fn build_transcript(messages: &[ChatMessage]) -> String {
    messages
        .iter()
        .map(|m| {
            let tag = match m.role {
                MessageRole::User => "U",
                MessageRole::Assistant => "A",
            };
            format!("{tag}: {}", m.content)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// First user message, if any. Used by the description fallback chain.
pub fn first_user_message(messages: &[ChatMessage]) -> Option<&str> {
    messages
        .iter()
        .find(|m| m.role == MessageRole::User)
        .map(|m| m.content.as_str())
}
