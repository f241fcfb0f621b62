//! Endpoint handlers, one module per resource.

pub mod analyze;
pub mod cases;
pub mod chat;
pub mod health;

use serde::Deserialize;

use crate::models::enums::MessageRole;
use crate::models::ChatMessage;

/// Message item as received on the wire, before role validation.
#[derive(Debug, Deserialize)]
pub struct RawMessage {
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub content: String,
}

/// Validate incoming messages: keep user/assistant turns with non-blank
/// content, drop the rest, refuse the request when nothing valid remains.
pub fn parse_messages(input: &[RawMessage]) -> Option<Vec<ChatMessage>> {
    let parsed: Vec<ChatMessage> = input
        .iter()
        .filter_map(|item| {
            let role: MessageRole = item.role.parse().ok()?;
            let content = item.content.trim();
            (!content.is_empty()).then(|| ChatMessage {
                role,
                content: content.to_string(),
            })
        })
        .collect();

    (!parsed.is_empty()).then_some(parsed)
}
