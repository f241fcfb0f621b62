//! Document-based adjudication: multipart upload in, verdict plus rich
//! accident card out.

use axum::extract::{Multipart, State};
use axum::Json;
use serde::Serialize;

use crate::adjudicator::{parser, prompt, DocumentPart};
use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::models::verdict::AccidentDecision;
use crate::models::AccidentCard;

pub const FILES_REQUIRED: &str = "Do analizy wymagane są pliki (PDF lub obrazy).";

/// Verdict with the accident card attached, matching the shape the case
/// submission expects back.
#[derive(Serialize)]
pub struct AnalyzeResponse {
    #[serde(flatten)]
    pub decision: AccidentDecision,
    #[serde(rename = "accidentCard")]
    pub accident_card: AccidentCard,
}

/// `POST /api/analyze` — adjudicate uploaded claim documents.
///
/// Two reasoning calls over the same document set: the verdict first,
/// then the accident-card extraction.
pub async fn documents(
    State(ctx): State<ApiContext>,
    mut multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let mut files: Vec<DocumentPart> = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(e.to_string()))?
    {
        if field.name() != Some("files") {
            continue;
        }
        let name = field.file_name().unwrap_or("dokument").to_string();
        let mime_type = field
            .content_type()
            .map(str::to_string)
            .unwrap_or_else(|| {
                mime_guess::from_path(&name)
                    .first_or_octet_stream()
                    .essence_str()
                    .to_string()
            });
        let data = field
            .bytes()
            .await
            .map_err(|e| ApiError::BadRequest(e.to_string()))?
            .to_vec();
        files.push(DocumentPart {
            name,
            mime_type,
            data,
        });
    }

    if files.is_empty() {
        return Err(ApiError::BadRequest(FILES_REQUIRED.to_string()));
    }

    let llm = ctx.llm.clone();
    let rules = ctx.rules.clone();
    let (decision, accident_card) = tokio::task::spawn_blocking(move || {
        let verdict_raw = llm.generate("", &prompt::document_verdict_prompt(&rules), &files)?;
        let decision = parser::parse_decision(&verdict_raw)?;

        let card_raw = llm.generate("", &prompt::accident_card_prompt(&rules), &files)?;
        let card = parser::parse_accident_card(&card_raw)?;

        Ok::<_, crate::adjudicator::AdjudicatorError>((decision, card))
    })
    .await
    .map_err(|e| ApiError::Internal(e.to_string()))??;

    tracing::info!(
        decision = %decision.decision.kind,
        confidence = decision.decision.confidence_level,
        "Document adjudication finished"
    );

    Ok(Json(AnalyzeResponse {
        decision,
        accident_card,
    }))
}
