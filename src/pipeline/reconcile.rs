//! Deterministic merge of candidate field values into the canonical set.
//!
//! Precedence per field, first non-empty wins:
//! 1. the reasoning service's `extracted_data`
//! 2. heuristic extraction over the transcript
//! 3. a field-specific default (description falls back to the claimant's
//!    own words, cause to the external-cause justification, the rest to
//!    nothing)
//!
//! Dates are normalized once, after selection. The reconciler never fails.

use crate::models::verdict::{AccidentDecision, ExtractedData};
use crate::models::{build_transcript, first_user_message, ChatMessage};

use super::heuristics::{extract_fields, ClaimField};
use super::normalize::normalize_date;

/// Placeholder stored when neither the conversation nor the extraction
/// produced any description at all.
pub const EMPTY_DESCRIPTION: &str = "Brak opisu";

/// Canonical value per field after reconciliation. Structured fields stay
/// `None` when every source came up empty; the two free-text fields always
/// carry a defined default.
#[derive(Debug, Clone, PartialEq)]
pub struct ReconciledFields {
    pub injured_first_name: Option<String>,
    pub injured_last_name: Option<String>,
    pub employer_name: Option<String>,
    pub position: Option<String>,
    pub accident_date: Option<String>,
    pub accident_place: Option<String>,
    pub accident_description: String,
    pub accident_cause: String,
}

/// Merge the verdict's extraction with transcript heuristics and defaults.
pub fn reconcile(decision: &AccidentDecision, messages: &[ChatMessage]) -> ReconciledFields {
    let transcript = build_transcript(messages);
    let heuristic = extract_fields(&transcript);
    let external = decision.extracted_data.clone().unwrap_or_default();

    let pick = |field: ClaimField| -> Option<String> {
        non_empty(external_value(&external, field))
            .or_else(|| non_empty(heuristic.get(field)))
            .map(str::to_string)
    };

    let accident_description = pick(ClaimField::AccidentDescription).unwrap_or_else(|| {
        first_user_message(messages)
            .map(str::to_string)
            .filter(|text| !text.trim().is_empty())
            .unwrap_or_else(|| {
                if transcript.trim().is_empty() {
                    EMPTY_DESCRIPTION.to_string()
                } else {
                    transcript.clone()
                }
            })
    });

    let accident_cause = pick(ClaimField::AccidentCause)
        .unwrap_or_else(|| decision.criteria_analysis.external_cause.justification.clone());

    ReconciledFields {
        injured_first_name: pick(ClaimField::InjuredFirstName),
        injured_last_name: pick(ClaimField::InjuredLastName),
        employer_name: pick(ClaimField::EmployerName),
        position: pick(ClaimField::Position),
        accident_date: normalize_date(pick(ClaimField::AccidentDate).as_deref()),
        accident_place: pick(ClaimField::AccidentPlace),
        accident_description,
        accident_cause,
    }
}

/// The external side of the shared field mapping (one origin per field).
fn external_value(data: &ExtractedData, field: ClaimField) -> Option<&str> {
    let slot = match field {
        ClaimField::InjuredFirstName => &data.injured_first_name,
        ClaimField::InjuredLastName => &data.injured_last_name,
        ClaimField::EmployerName => &data.employer_name,
        ClaimField::Position => &data.position,
        ClaimField::AccidentDate => &data.accident_date,
        ClaimField::AccidentPlace => &data.accident_place,
        ClaimField::AccidentDescription => &data.accident_description,
        ClaimField::AccidentCause => &data.accident_cause,
    };
    slot.as_deref()
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
