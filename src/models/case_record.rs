use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::accident_card::AccidentCard;
use super::enums::DecisionType;
use super::verdict::{CriteriaAnalysis, IdentifiedFlaw};

/// Canonical persisted record of one submitted claim. Created exactly once
/// per submission; read many times for listing, detail view and export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseRecord {
    pub id: Uuid,
    pub decision: DecisionType,
    pub confidence_level: f64,
    pub criteria_analysis: CriteriaAnalysis,
    pub identified_flaws: Vec<IdentifiedFlaw>,
    pub suggested_follow_up_questions: Vec<String>,
    pub injured_first_name: Option<String>,
    pub injured_last_name: Option<String>,
    pub employer_name: Option<String>,
    pub position: Option<String>,
    pub accident_date: Option<String>,
    pub accident_place: Option<String>,
    pub accident_description: String,
    pub accident_cause: String,
    pub attached_documents: Vec<AttachedDocument>,
    pub accident_card: Option<AccidentCard>,
    pub created_at: NaiveDateTime,
}

/// Attachment metadata with its content fingerprint (client-supplied or
/// derived from the submission's root fingerprint).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttachedDocument {
    pub name: String,
    pub hash: String,
}
