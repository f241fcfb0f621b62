//! Response parsing at the reasoning boundary.
//!
//! The service is asked for raw JSON, but models occasionally wrap it in a
//! Markdown fence anyway. Parsing strips the fence, deserializes into the
//! typed schema and enforces the few boundary checks the core relies on;
//! anything outside the schema is a malformed response, never a panic.

use serde::de::DeserializeOwned;

use crate::models::verdict::AccidentDecision;
use crate::models::AccidentCard;

use super::assistant::{ApplicationDraft, ChatReply};
use super::AdjudicatorError;

/// Strip an optional ```json fence around the payload.
fn strip_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    let rest = rest.strip_suffix("```").unwrap_or(rest);
    rest.trim()
}

fn parse_json<T: DeserializeOwned>(raw: &str) -> Result<T, AdjudicatorError> {
    serde_json::from_str(strip_fence(raw))
        .map_err(|e| AdjudicatorError::JsonParsing(e.to_string()))
}

/// Parse and boundary-check a verdict.
pub fn parse_decision(raw: &str) -> Result<AccidentDecision, AdjudicatorError> {
    let decision: AccidentDecision = parse_json(raw)?;

    let confidence = decision.decision.confidence_level;
    if !(0.0..=1.0).contains(&confidence) || confidence.is_nan() {
        return Err(AdjudicatorError::MalformedResponse(format!(
            "confidence_level {confidence} outside [0, 1]"
        )));
    }

    Ok(decision)
}

pub fn parse_accident_card(raw: &str) -> Result<AccidentCard, AdjudicatorError> {
    parse_json(raw)
}

pub fn parse_chat_reply(raw: &str) -> Result<ChatReply, AdjudicatorError> {
    parse_json(raw)
}

pub fn parse_application_draft(raw: &str) -> Result<ApplicationDraft, AdjudicatorError> {
    parse_json(raw)
}
