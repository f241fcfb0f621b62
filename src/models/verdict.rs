//! Typed schema of the structured verdict returned by the reasoning
//! service. Parsed at the boundary (`adjudicator::parser`); the pipeline
//! treats it as an opaque, already-validated value.

use serde::{Deserialize, Serialize};

use super::enums::{DecisionType, FlawCategory, FlawSeverity};

/// Complete structured verdict for one claim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccidentDecision {
    pub decision: Decision,
    pub criteria_analysis: CriteriaAnalysis,
    #[serde(default)]
    pub identified_flaws: Vec<IdentifiedFlaw>,
    pub references: References,
    #[serde(default)]
    pub suggested_follow_up_questions: Vec<String>,
    /// Flat field extraction produced alongside the verdict. May be
    /// partially or entirely absent; the reconciler falls back to
    /// transcript heuristics.
    #[serde(default)]
    pub extracted_data: Option<ExtractedData>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Decision {
    #[serde(rename = "type")]
    pub kind: DecisionType,
    /// Confidence score in [0.0, 1.0].
    pub confidence_level: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CriteriaAnalysis {
    pub suddenness: Criterion,
    pub external_cause: Criterion,
    pub work_connection: Criterion,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Criterion {
    pub met: bool,
    pub justification: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentifiedFlaw {
    pub category: FlawCategory,
    pub detailed_description: String,
    pub severity: FlawSeverity,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct References {
    /// ID of the most similar case from the rules database.
    pub nearest_precedent_id: i64,
    pub similarity_to_precedent: String,
}

/// Flat extraction field set. Shares its field names with the heuristic
/// extractor so reconciliation maps one-to-one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractedData {
    #[serde(default)]
    pub injured_first_name: Option<String>,
    #[serde(default)]
    pub injured_last_name: Option<String>,
    #[serde(default)]
    pub employer_name: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub accident_date: Option<String>,
    #[serde(default)]
    pub accident_place: Option<String>,
    #[serde(default)]
    pub accident_description: Option<String>,
    #[serde(default)]
    pub accident_cause: Option<String>,
}

/// Canonical fixture used across the crate's test suites.
#[cfg(test)]
pub(crate) fn sample_decision() -> AccidentDecision {
    serde_json::from_str(SAMPLE_VERDICT_JSON).expect("fixture parses")
}

#[cfg(test)]
pub(crate) const SAMPLE_VERDICT_JSON: &str = r#"{
    "decision": {"type": "APPROVED", "confidence_level": 0.9},
    "criteria_analysis": {
        "suddenness": {"met": true, "justification": "Zdarzenie jednorazowe"},
        "external_cause": {"met": true, "justification": "Śliska podłoga"},
        "work_connection": {"met": true, "justification": "Podczas pracy"}
    },
    "identified_flaws": [
        {"category": "LACK_OF_EVIDENCE", "detailed_description": "Brak świadków", "severity": "WARNING"}
    ],
    "references": {"nearest_precedent_id": 17, "similarity_to_precedent": "Identyczny mechanizm"},
    "suggested_follow_up_questions": ["Czy byli świadkowie?"],
    "extracted_data": {"employer_name": "Budex", "accident_date": "2024-01-03"}
}"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_verdict_deserializes() {
        let verdict: AccidentDecision = serde_json::from_str(SAMPLE_VERDICT_JSON).unwrap();
        assert_eq!(verdict.decision.kind, crate::models::enums::DecisionType::Approved);
        assert_eq!(verdict.identified_flaws.len(), 1);
        assert_eq!(verdict.references.nearest_precedent_id, 17);
        let data = verdict.extracted_data.unwrap();
        assert_eq!(data.employer_name.as_deref(), Some("Budex"));
        assert_eq!(data.injured_first_name, None);
    }

    #[test]
    fn optional_sequences_default_to_empty() {
        let json = r#"{
            "decision": {"type": "REJECTED", "confidence_level": 0.4},
            "criteria_analysis": {
                "suddenness": {"met": false, "justification": "Przewlekłe"},
                "external_cause": {"met": false, "justification": "Przyczyna wewnętrzna"},
                "work_connection": {"met": true, "justification": "W pracy"}
            },
            "references": {"nearest_precedent_id": 3, "similarity_to_precedent": "Zbliżony"}
        }"#;
        let verdict: AccidentDecision = serde_json::from_str(json).unwrap();
        assert!(verdict.identified_flaws.is_empty());
        assert!(verdict.suggested_follow_up_questions.is_empty());
        assert!(verdict.extracted_data.is_none());
    }

    #[test]
    fn serialization_is_deterministic() {
        let verdict: AccidentDecision = serde_json::from_str(SAMPLE_VERDICT_JSON).unwrap();
        let a = serde_json::to_string(&verdict).unwrap();
        let b = serde_json::to_string(&verdict).unwrap();
        assert_eq!(a, b);
    }
}
