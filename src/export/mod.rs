//! Accident-card document export: placeholder resolution plus a pluggable
//! template engine. The renderer never writes to disk; the result is a
//! data URI handed straight back to the caller.

pub mod placeholders;
pub mod renderer;

pub use placeholders::placeholder_map;
pub use renderer::{
    export_accident_card, ExportResult, TagTemplateEngine, TemplateEngine, DOCX_MIME,
};

use crate::db::DatabaseError;

/// Errors of the export path. The first two carry the Polish messages
/// shown to the client.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Brak identyfikatora zgłoszenia")]
    MissingCaseId,

    #[error("Nie znaleziono zgłoszenia o podanym ID")]
    NotFound,

    #[error("Template error: {0}")]
    Template(String),

    #[error("Render error: {0}")]
    Render(String),

    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),
}
