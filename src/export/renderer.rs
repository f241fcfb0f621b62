//! Template rendering and the export entry point.

use std::collections::BTreeMap;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use rusqlite::Connection;

use crate::db::repository;

use super::placeholders::placeholder_map;
use super::ExportError;

/// MIME type of the rendered accident card.
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Rendered document handed back to the client.
#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportResult {
    pub url: String,
    pub file_name: String,
    pub mime_type: String,
}

/// Substitutes the tag map into a template. The production engine works on
/// DOCX archives; tests and plain-text templates go through
/// [`TagTemplateEngine`].
pub trait TemplateEngine {
    fn render(
        &self,
        template: &[u8],
        values: &BTreeMap<String, String>,
    ) -> Result<Vec<u8>, ExportError>;
}

/// Replaces `{key}` tags in a UTF-8 template. Tags without a value stay
/// untouched; the placeholder map always carries the full key set, so on
/// the export path nothing is left over.
pub struct TagTemplateEngine;

impl TemplateEngine for TagTemplateEngine {
    fn render(
        &self,
        template: &[u8],
        values: &BTreeMap<String, String>,
    ) -> Result<Vec<u8>, ExportError> {
        let text = std::str::from_utf8(template)
            .map_err(|e| ExportError::Template(format!("template is not UTF-8: {e}")))?;

        let mut rendered = text.to_string();
        for (key, value) in values {
            rendered = rendered.replace(&format!("{{{key}}}"), value);
        }

        Ok(rendered.into_bytes())
    }
}

/// Render the accident card for one case as a base64 data URI.
pub fn export_accident_card(
    conn: &Connection,
    case_id: &str,
    engine: &dyn TemplateEngine,
    template: &[u8],
) -> Result<ExportResult, ExportError> {
    if case_id.trim().is_empty() {
        return Err(ExportError::MissingCaseId);
    }

    let record = repository::get_case(conn, case_id)?.ok_or(ExportError::NotFound)?;

    let values = placeholder_map(&record);
    let rendered = engine.render(template, &values)?;

    tracing::debug!(case_id, bytes = rendered.len(), "Accident card rendered");

    Ok(ExportResult {
        url: format!("data:{DOCX_MIME};base64,{}", BASE64.encode(&rendered)),
        file_name: format!("karta-wypadku-{}.docx", record.id),
        mime_type: DOCX_MIME.to_string(),
    })
}
