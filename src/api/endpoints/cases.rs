//! Case register endpoints: submit, list, detail, export.

use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::db::repository;
use crate::export::export_accident_card;
use crate::export::ExportResult;
use crate::models::verdict::AccidentDecision;
use crate::models::{AccidentCard, CaseRecord};
use crate::pipeline::submit::{submit_case, AttachmentUpload, SubmitPayload, SubmitReceipt};

use super::chat::INVALID_MESSAGES;
use super::{parse_messages, RawMessage};

#[derive(Deserialize)]
pub struct SubmitRequest {
    #[serde(default)]
    pub messages: Vec<RawMessage>,
    #[serde(default)]
    pub decision: Option<AccidentDecision>,
    #[serde(default)]
    pub attachments: Vec<AttachmentUpload>,
    #[serde(default, alias = "accidentCard")]
    pub accident_card: Option<AccidentCard>,
}

/// `POST /api/cases` — persist one finished submission.
pub async fn submit(
    State(ctx): State<ApiContext>,
    Json(request): Json<SubmitRequest>,
) -> Result<Json<SubmitReceipt>, ApiError> {
    let messages = parse_messages(&request.messages)
        .ok_or_else(|| ApiError::BadRequest(INVALID_MESSAGES.to_string()))?;

    let payload = SubmitPayload {
        messages,
        decision: request.decision,
        attachments: request.attachments,
        accident_card: request.accident_card,
    };

    let db = ctx.db.clone();
    let receipt = tokio::task::spawn_blocking(move || {
        let conn = db
            .lock()
            .map_err(|e| ApiError::Internal(e.to_string()))?;
        submit_case(&conn, payload).map_err(ApiError::from)
    })
    .await
    .map_err(|e| ApiError::Internal(e.to_string()))??;

    Ok(Json(receipt))
}

/// `GET /api/cases` — all records, newest first.
pub async fn list(State(ctx): State<ApiContext>) -> Result<Json<Vec<CaseRecord>>, ApiError> {
    let db = ctx.db.clone();
    let records = tokio::task::spawn_blocking(move || {
        let conn = db
            .lock()
            .map_err(|e| ApiError::Internal(e.to_string()))?;
        repository::list_cases(&conn).map_err(ApiError::from)
    })
    .await
    .map_err(|e| ApiError::Internal(e.to_string()))??;

    Ok(Json(records))
}

/// `GET /api/cases/:id` — one record.
pub async fn detail(
    State(ctx): State<ApiContext>,
    Path(id): Path<String>,
) -> Result<Json<CaseRecord>, ApiError> {
    let db = ctx.db.clone();
    let record = tokio::task::spawn_blocking(move || {
        let conn = db
            .lock()
            .map_err(|e| ApiError::Internal(e.to_string()))?;
        repository::get_case(&conn, &id).map_err(ApiError::from)
    })
    .await
    .map_err(|e| ApiError::Internal(e.to_string()))??;

    record
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Nie znaleziono zgłoszenia o podanym ID".to_string()))
}

/// `GET /api/cases/:id/export` — accident card rendered as a data URI.
pub async fn export(
    State(ctx): State<ApiContext>,
    Path(id): Path<String>,
) -> Result<Json<ExportResult>, ApiError> {
    let db = ctx.db.clone();
    let engine = ctx.engine.clone();
    let template = ctx.template.clone();
    let result = tokio::task::spawn_blocking(move || {
        let conn = db
            .lock()
            .map_err(|e| ApiError::Internal(e.to_string()))?;
        export_accident_card(&conn, &id, engine.as_ref(), &template).map_err(ApiError::from)
    })
    .await
    .map_err(|e| ApiError::Internal(e.to_string()))??;

    Ok(Json(result))
}
