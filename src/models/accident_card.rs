//! Rich structured representation of a claim produced by the
//! document-focused extraction pass. A strict superset of the flat
//! reconciled fields; the renderer prefers it when present.
//!
//! Every leaf is deserialized defensively: the extraction prompt promises
//! strings, but absent keys default to empty rather than failing the parse.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccidentCard {
    #[serde(default)]
    pub employer: CardEmployer,
    #[serde(default)]
    pub injured: CardInjured,
    #[serde(default)]
    pub accident: CardAccident,
    #[serde(default)]
    pub witnesses: Vec<CardWitness>,
    #[serde(default)]
    pub sobriety: CardSobriety,
    #[serde(default)]
    pub accident_causes: String,
    #[serde(default)]
    pub meta_process: Option<CardMetaProcess>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CardEmployer {
    #[serde(default)]
    pub employer_name: String,
    #[serde(default)]
    pub hq_address: String,
    #[serde(default)]
    pub nip: String,
    #[serde(default)]
    pub regon: String,
    #[serde(default)]
    pub pesel: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CardInjured {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub pesel: String,
    #[serde(default)]
    pub birth: CardBirth,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub id: Option<CardIdDocument>,
    #[serde(default)]
    pub insurance_title: Option<CardInsuranceTitle>,
    #[serde(default)]
    pub is_student: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CardBirth {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub place: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CardIdDocument {
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub series: String,
    #[serde(default)]
    pub number: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CardInsuranceTitle {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CardAccident {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub legal_qualification: String,
    #[serde(default)]
    pub reporters_first_name: String,
    #[serde(default)]
    pub reporters_last_name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CardWitness {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub address: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CardSobriety {
    #[serde(default)]
    pub was_intoxicated: bool,
    #[serde(default)]
    pub evidence_description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CardMetaProcess {
    #[serde(default)]
    pub acknowledgment: CardAcknowledgment,
    #[serde(default)]
    pub preparation: CardPreparation,
    #[serde(default)]
    pub delay_reason: String,
    #[serde(default)]
    pub receipt_date: String,
    #[serde(default)]
    pub attachments: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CardAcknowledgment {
    #[serde(default)]
    pub person_name: String,
    #[serde(default)]
    pub date: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CardPreparation {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub entity_name: String,
    #[serde(default)]
    pub preparer_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_card_fills_defaults() {
        let json = r#"{
            "employer": {"employer_name": "Budex Sp. z o.o.", "nip": "5260305006"},
            "injured": {"first_name": "Jan", "last_name": "Kowalski"},
            "witnesses": [{"first_name": "Anna", "last_name": "Nowak", "address": "Warszawa"}]
        }"#;
        let card: AccidentCard = serde_json::from_str(json).unwrap();
        assert_eq!(card.employer.employer_name, "Budex Sp. z o.o.");
        assert_eq!(card.employer.regon, "");
        assert_eq!(card.injured.first_name, "Jan");
        assert!(card.injured.id.is_none());
        assert_eq!(card.witnesses.len(), 1);
        assert!(!card.sobriety.was_intoxicated);
        assert!(card.meta_process.is_none());
    }

    #[test]
    fn empty_object_is_a_valid_card() {
        let card: AccidentCard = serde_json::from_str("{}").unwrap();
        assert_eq!(card.accident.date, "");
        assert!(card.witnesses.is_empty());
    }

    #[test]
    fn nested_optionals_deserialize() {
        let json = r#"{
            "injured": {
                "id": {"kind": "dowód osobisty", "series": "ABC", "number": "123456"},
                "insurance_title": {"code": "01 10", "description": "pracownik"}
            },
            "meta_process": {
                "acknowledgment": {"person_name": "Jan Kowalski", "date": "2024-01-05"},
                "preparation": {"date": "2024-01-06", "entity_name": "Budex", "preparer_name": "Anna Nowak"},
                "attachments": ["protokół", "zdjęcia"]
            }
        }"#;
        let card: AccidentCard = serde_json::from_str(json).unwrap();
        let id = card.injured.id.unwrap();
        assert_eq!(id.series, "ABC");
        let meta = card.meta_process.unwrap();
        assert_eq!(meta.attachments.len(), 2);
        assert_eq!(meta.delay_reason, "");
    }
}
