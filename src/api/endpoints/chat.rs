//! Conversation endpoints: intake assistant, application draft, and the
//! conversation-only verdict.

use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use crate::adjudicator::assistant::{ApplicationDraft, ChatReply};
use crate::adjudicator::{parser, prompt};
use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::models::verdict::AccidentDecision;
use crate::models::ChatMessage;

use super::{parse_messages, RawMessage};

pub const INVALID_MESSAGES: &str = "Brak lub nieprawidłowe wiadomości.";

#[derive(Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub messages: Vec<RawMessage>,
}

fn require_messages(request: &ChatRequest) -> Result<Vec<ChatMessage>, ApiError> {
    parse_messages(&request.messages)
        .ok_or_else(|| ApiError::BadRequest(INVALID_MESSAGES.to_string()))
}

/// `POST /api/chat` — assistant reply naming the gaps still open.
pub async fn assist(
    State(ctx): State<ApiContext>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatReply>, ApiError> {
    let messages = require_messages(&request)?;

    let llm = ctx.llm.clone();
    let raw = tokio::task::spawn_blocking(move || {
        llm.generate(
            prompt::ASSISTANT_SYSTEM,
            &prompt::prompt_transcript(&messages),
            &[],
        )
    })
    .await
    .map_err(|e| ApiError::Internal(e.to_string()))??;

    Ok(Json(parser::parse_chat_reply(&raw)?))
}

/// `POST /api/chat/generate` — draft of the formal application.
pub async fn generate(
    State(ctx): State<ApiContext>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ApplicationDraft>, ApiError> {
    let messages = require_messages(&request)?;

    let llm = ctx.llm.clone();
    let raw = tokio::task::spawn_blocking(move || {
        llm.generate(
            prompt::DRAFT_SYSTEM,
            &prompt::prompt_transcript(&messages),
            &[],
        )
    })
    .await
    .map_err(|e| ApiError::Internal(e.to_string()))??;

    Ok(Json(parser::parse_application_draft(&raw)?))
}

/// `POST /api/chat/analyze` — verdict from the conversation alone.
pub async fn analyze(
    State(ctx): State<ApiContext>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<AccidentDecision>, ApiError> {
    let messages = require_messages(&request)?;

    let llm = ctx.llm.clone();
    let rules = ctx.rules.clone();
    let raw = tokio::task::spawn_blocking(move || {
        llm.generate(
            prompt::CONVERSATION_VERDICT_SYSTEM,
            &prompt::conversation_verdict_prompt(&rules, &messages),
            &[],
        )
    })
    .await
    .map_err(|e| ApiError::Internal(e.to_string()))??;

    Ok(Json(parser::parse_decision(&raw)?))
}
