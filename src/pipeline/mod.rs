//! Intake pipeline: transcript heuristics, date normalization, field
//! reconciliation, content fingerprints, and the submission path that
//! turns a finished conversation into a persisted case record.

pub mod fingerprint;
pub mod heuristics;
pub mod normalize;
pub mod reconcile;
pub mod submit;

pub use fingerprint::{attachment_fingerprint, root_fingerprint};
pub use heuristics::{extract_fields, ClaimField, HeuristicExtraction};
pub use normalize::normalize_date;
pub use reconcile::{reconcile, ReconciledFields, EMPTY_DESCRIPTION};
pub use submit::{submit_case, AttachmentUpload, SubmitPayload, SubmitReceipt};

use crate::db::DatabaseError;

/// Errors surfaced by the submission path. The Polish messages go to the
/// client verbatim.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("Brak lub nieprawidłowe wiadomości.")]
    InvalidInput,

    #[error("Brak decyzji do zapisania")]
    MissingDecision,

    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),
}
