//! Typed replies of the intake assistant and draft generator.

use serde::{Deserialize, Serialize};

/// Reply of the intake assistant: confirmation plus the gaps still open.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatReply {
    pub assistant_message: String,
    #[serde(default)]
    pub missing_fields: Vec<MissingField>,
    #[serde(default)]
    pub follow_up_questions: Vec<String>,
}

/// One element the claimant has not yet provided.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissingField {
    pub field: String,
    pub reason: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
}

/// Draft of the formal application, assembled from the conversation only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationDraft {
    pub application: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_reply_tolerates_missing_optional_arrays() {
        let reply: ChatReply =
            serde_json::from_str(r#"{"assistant_message":"Dziękuję"}"#).unwrap();
        assert_eq!(reply.assistant_message, "Dziękuję");
        assert!(reply.missing_fields.is_empty());
        assert!(reply.follow_up_questions.is_empty());
    }

    #[test]
    fn missing_field_example_is_optional() {
        let field: MissingField = serde_json::from_str(
            r#"{"field":"data zdarzenia","reason":"brak daty wypadku"}"#,
        )
        .unwrap();
        assert_eq!(field.example, None);

        let json = serde_json::to_value(&field).unwrap();
        assert!(json.get("example").is_none());
    }
}
