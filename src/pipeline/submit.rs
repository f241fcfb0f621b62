//! Case assembly and persistence: the one write path of the register.
//!
//! Validation happens before any side effect; the insert is attempted only
//! once every required input is present, so a failed submission never
//! leaves a partial record behind.

use chrono::Local;
use rusqlite::Connection;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::db::repository;
use crate::models::verdict::AccidentDecision;
use crate::models::{build_transcript, AccidentCard, AttachedDocument, CaseRecord, ChatMessage};

use super::fingerprint::{attachment_fingerprint, root_fingerprint};
use super::reconcile::reconcile;
use super::SubmitError;

/// One submission: the conversation, the settled verdict, and any
/// uploaded documents. The accident card is present only after a
/// document-based extraction pass.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitPayload {
    pub messages: Vec<ChatMessage>,
    pub decision: Option<AccidentDecision>,
    #[serde(default)]
    pub attachments: Vec<AttachmentUpload>,
    #[serde(default)]
    pub accident_card: Option<AccidentCard>,
}

/// Attachment metadata as uploaded. A client-supplied hash is trusted;
/// otherwise one is derived from the root fingerprint.
#[derive(Debug, Clone, Deserialize)]
pub struct AttachmentUpload {
    pub name: String,
    #[serde(default)]
    pub hash: Option<String>,
}

/// Receipt returned to the caller: record id plus the root fingerprint.
#[derive(Debug, Clone, Serialize)]
pub struct SubmitReceipt {
    pub id: String,
    pub hash: String,
}

/// Validate, reconcile, fingerprint and persist one submission.
pub fn submit_case(
    conn: &Connection,
    payload: SubmitPayload,
) -> Result<SubmitReceipt, SubmitError> {
    let decision = payload.decision.ok_or(SubmitError::MissingDecision)?;

    if payload.messages.is_empty()
        || payload
            .messages
            .iter()
            .any(|m| m.content.trim().is_empty())
    {
        return Err(SubmitError::InvalidInput);
    }

    let transcript = build_transcript(&payload.messages);
    let root = root_fingerprint(&decision, &transcript);
    let fields = reconcile(&decision, &payload.messages);

    let attached_documents: Vec<AttachedDocument> = payload
        .attachments
        .iter()
        .enumerate()
        .map(|(index, upload)| AttachedDocument {
            name: upload.name.clone(),
            hash: upload
                .hash
                .clone()
                .filter(|h| !h.trim().is_empty())
                .unwrap_or_else(|| attachment_fingerprint(&upload.name, &root, index)),
        })
        .collect();

    let record = CaseRecord {
        id: Uuid::new_v4(),
        decision: decision.decision.kind,
        confidence_level: decision.decision.confidence_level,
        criteria_analysis: decision.criteria_analysis.clone(),
        identified_flaws: decision.identified_flaws.clone(),
        suggested_follow_up_questions: decision.suggested_follow_up_questions.clone(),
        injured_first_name: fields.injured_first_name,
        injured_last_name: fields.injured_last_name,
        employer_name: fields.employer_name,
        position: fields.position,
        accident_date: fields.accident_date,
        accident_place: fields.accident_place,
        accident_description: fields.accident_description,
        accident_cause: fields.accident_cause,
        attached_documents,
        accident_card: payload.accident_card,
        created_at: Local::now().naive_local(),
    };

    repository::insert_case(conn, &record)?;

    tracing::info!(case_id = %record.id, "Case persisted");

    Ok(SubmitReceipt {
        id: record.id.to_string(),
        hash: root,
    })
}
