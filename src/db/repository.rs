//! Repository functions for the case register. Plain functions over a
//! borrowed `Connection`; id generation and timestamps belong to the
//! caller (the pipeline assembles the record, the repository persists it).

use chrono::NaiveDateTime;
use rusqlite::{params, Connection};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::str::FromStr;
use uuid::Uuid;

use crate::db::DatabaseError;
use crate::models::enums::DecisionType;
use crate::models::{AccidentCard, AttachedDocument, CaseRecord};

pub fn insert_case(conn: &Connection, record: &CaseRecord) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO cases (
            id, decision, confidence_level, criteria_analysis, identified_flaws,
            suggested_follow_up_questions, injured_first_name, injured_last_name,
            employer_name, position, accident_date, accident_place,
            accident_description, accident_cause, attached_documents,
            accident_card, created_at
         ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17)",
        params![
            record.id.to_string(),
            record.decision.as_str(),
            record.confidence_level,
            to_json_column("criteria_analysis", &record.criteria_analysis)?,
            to_json_column("identified_flaws", &record.identified_flaws)?,
            to_json_column(
                "suggested_follow_up_questions",
                &record.suggested_follow_up_questions
            )?,
            record.injured_first_name,
            record.injured_last_name,
            record.employer_name,
            record.position,
            record.accident_date,
            record.accident_place,
            record.accident_description,
            record.accident_cause,
            to_json_column("attached_documents", &record.attached_documents)?,
            record
                .accident_card
                .as_ref()
                .map(|card| to_json_column("accident_card", card))
                .transpose()?,
            record.created_at.to_string(),
        ],
    )?;
    Ok(())
}

pub fn get_case(conn: &Connection, id: &str) -> Result<Option<CaseRecord>, DatabaseError> {
    let result = conn.query_row(
        &format!("{SELECT_COLUMNS} FROM cases WHERE id = ?1"),
        params![id],
        row_to_case_row,
    );

    match result {
        Ok(row) => Ok(Some(case_from_row(row)?)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// All cases, newest first.
pub fn list_cases(conn: &Connection) -> Result<Vec<CaseRecord>, DatabaseError> {
    let mut stmt =
        conn.prepare(&format!("{SELECT_COLUMNS} FROM cases ORDER BY created_at DESC"))?;
    let rows = stmt.query_map([], row_to_case_row)?;

    let mut cases = Vec::new();
    for row in rows {
        cases.push(case_from_row(row?)?);
    }
    Ok(cases)
}

const SELECT_COLUMNS: &str = "SELECT id, decision, confidence_level, criteria_analysis, \
    identified_flaws, suggested_follow_up_questions, injured_first_name, \
    injured_last_name, employer_name, position, accident_date, accident_place, \
    accident_description, accident_cause, attached_documents, accident_card, created_at";

struct CaseRow {
    id: String,
    decision: String,
    confidence_level: f64,
    criteria_analysis: String,
    identified_flaws: String,
    suggested_follow_up_questions: String,
    injured_first_name: Option<String>,
    injured_last_name: Option<String>,
    employer_name: Option<String>,
    position: Option<String>,
    accident_date: Option<String>,
    accident_place: Option<String>,
    accident_description: String,
    accident_cause: String,
    attached_documents: String,
    accident_card: Option<String>,
    created_at: String,
}

fn row_to_case_row(row: &rusqlite::Row<'_>) -> Result<CaseRow, rusqlite::Error> {
    Ok(CaseRow {
        id: row.get(0)?,
        decision: row.get(1)?,
        confidence_level: row.get(2)?,
        criteria_analysis: row.get(3)?,
        identified_flaws: row.get(4)?,
        suggested_follow_up_questions: row.get(5)?,
        injured_first_name: row.get(6)?,
        injured_last_name: row.get(7)?,
        employer_name: row.get(8)?,
        position: row.get(9)?,
        accident_date: row.get(10)?,
        accident_place: row.get(11)?,
        accident_description: row.get(12)?,
        accident_cause: row.get(13)?,
        attached_documents: row.get(14)?,
        accident_card: row.get(15)?,
        created_at: row.get(16)?,
    })
}

fn case_from_row(row: CaseRow) -> Result<CaseRecord, DatabaseError> {
    let accident_card: Option<AccidentCard> = row
        .accident_card
        .as_deref()
        .map(|json| from_json_column("accident_card", json))
        .transpose()?;

    let attached_documents: Vec<AttachedDocument> =
        from_json_column("attached_documents", &row.attached_documents)?;

    Ok(CaseRecord {
        id: Uuid::parse_str(&row.id).map_err(|e| DatabaseError::CorruptColumn {
            column: "id".into(),
            reason: e.to_string(),
        })?,
        decision: DecisionType::from_str(&row.decision)?,
        confidence_level: row.confidence_level,
        criteria_analysis: from_json_column("criteria_analysis", &row.criteria_analysis)?,
        identified_flaws: from_json_column("identified_flaws", &row.identified_flaws)?,
        suggested_follow_up_questions: from_json_column(
            "suggested_follow_up_questions",
            &row.suggested_follow_up_questions,
        )?,
        injured_first_name: row.injured_first_name,
        injured_last_name: row.injured_last_name,
        employer_name: row.employer_name,
        position: row.position,
        accident_date: row.accident_date,
        accident_place: row.accident_place,
        accident_description: row.accident_description,
        accident_cause: row.accident_cause,
        attached_documents,
        accident_card,
        created_at: NaiveDateTime::parse_from_str(&row.created_at, "%Y-%m-%d %H:%M:%S%.f")
            .unwrap_or_default(),
    })
}

fn to_json_column<T: Serialize>(column: &str, value: &T) -> Result<String, DatabaseError> {
    serde_json::to_string(value).map_err(|e| DatabaseError::CorruptColumn {
        column: column.into(),
        reason: e.to_string(),
    })
}

fn from_json_column<T: DeserializeOwned>(column: &str, json: &str) -> Result<T, DatabaseError> {
    serde_json::from_str(json).map_err(|e| DatabaseError::CorruptColumn {
        column: column.into(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::sqlite::open_memory_database;
    use crate::models::verdict::sample_decision;
    use chrono::Local;

    fn sample_record(card: Option<AccidentCard>) -> CaseRecord {
        let verdict = sample_decision();
        CaseRecord {
            id: Uuid::new_v4(),
            decision: verdict.decision.kind,
            confidence_level: verdict.decision.confidence_level,
            criteria_analysis: verdict.criteria_analysis,
            identified_flaws: verdict.identified_flaws,
            suggested_follow_up_questions: verdict.suggested_follow_up_questions,
            injured_first_name: Some("Jan".into()),
            injured_last_name: Some("Kowalski".into()),
            employer_name: Some("Budex".into()),
            position: None,
            accident_date: Some("2024-01-03".into()),
            accident_place: None,
            accident_description: "Upadek z rusztowania".into(),
            accident_cause: "Śliska podłoga".into(),
            attached_documents: vec![AttachedDocument {
                name: "zdjecie.jpg".into(),
                hash: "abc123".into(),
            }],
            accident_card: card,
            created_at: Local::now().naive_local(),
        }
    }

    #[test]
    fn insert_and_get_roundtrip() {
        let conn = open_memory_database().unwrap();
        let record = sample_record(None);
        insert_case(&conn, &record).unwrap();

        let loaded = get_case(&conn, &record.id.to_string()).unwrap().unwrap();
        assert_eq!(loaded.id, record.id);
        assert_eq!(loaded.decision, record.decision);
        assert_eq!(loaded.employer_name.as_deref(), Some("Budex"));
        assert_eq!(loaded.accident_date.as_deref(), Some("2024-01-03"));
        assert_eq!(loaded.attached_documents.len(), 1);
        assert_eq!(loaded.attached_documents[0].name, "zdjecie.jpg");
        assert_eq!(loaded.identified_flaws.len(), 1);
        assert!(loaded.accident_card.is_none());
    }

    #[test]
    fn accident_card_column_roundtrips() {
        let conn = open_memory_database().unwrap();
        let mut card = AccidentCard::default();
        card.employer.employer_name = "Budex Sp. z o.o.".into();
        card.witnesses.push(crate::models::CardWitness {
            first_name: "Anna".into(),
            last_name: "Nowak".into(),
            address: "Warszawa".into(),
        });
        let record = sample_record(Some(card));
        insert_case(&conn, &record).unwrap();

        let loaded = get_case(&conn, &record.id.to_string()).unwrap().unwrap();
        let loaded_card = loaded.accident_card.unwrap();
        assert_eq!(loaded_card.employer.employer_name, "Budex Sp. z o.o.");
        assert_eq!(loaded_card.witnesses.len(), 1);
    }

    #[test]
    fn get_unknown_id_returns_none() {
        let conn = open_memory_database().unwrap();
        let result = get_case(&conn, &Uuid::new_v4().to_string()).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn list_orders_newest_first() {
        let conn = open_memory_database().unwrap();

        let mut older = sample_record(None);
        older.created_at = NaiveDateTime::parse_from_str(
            "2024-01-01 08:00:00",
            "%Y-%m-%d %H:%M:%S",
        )
        .unwrap();
        let mut newer = sample_record(None);
        newer.created_at = NaiveDateTime::parse_from_str(
            "2024-02-01 08:00:00",
            "%Y-%m-%d %H:%M:%S",
        )
        .unwrap();

        insert_case(&conn, &older).unwrap();
        insert_case(&conn, &newer).unwrap();

        let cases = list_cases(&conn).unwrap();
        assert_eq!(cases.len(), 2);
        assert_eq!(cases[0].id, newer.id);
        assert_eq!(cases[1].id, older.id);
    }
}
