//! Label-anchored field extraction over the intake transcript.
//!
//! A safety net for when the reasoning service returns no `extracted_data`:
//! an ordered table of `(field, pattern, capture group)` rules is evaluated
//! independently per field, first match wins, captured text is used
//! verbatim (trimmed, never paraphrased). Misses are an expected outcome,
//! not an error.

use std::sync::LazyLock;

use regex::Regex;

/// The shared field set of the heuristic extractor and the reasoning
/// service's `extracted_data`. Keeping one enum for both sides makes the
/// reconciliation mapping total by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClaimField {
    InjuredFirstName,
    InjuredLastName,
    EmployerName,
    Position,
    AccidentDate,
    AccidentPlace,
    AccidentDescription,
    AccidentCause,
}

impl ClaimField {
    pub const ALL: [ClaimField; 8] = [
        ClaimField::InjuredFirstName,
        ClaimField::InjuredLastName,
        ClaimField::EmployerName,
        ClaimField::Position,
        ClaimField::AccidentDate,
        ClaimField::AccidentPlace,
        ClaimField::AccidentDescription,
        ClaimField::AccidentCause,
    ];
}

/// One extraction rule: the first rule per field whose pattern matches
/// wins; `group` selects the capture to keep.
struct ExtractionRule {
    field: ClaimField,
    pattern: Regex,
    group: usize,
}

/// A date-shaped token: D[./-]M[./-]YY(YY) or canonical YYYY-MM-DD.
const DATE_TOKEN: &str = r"(\d{1,2}[./-]\d{1,2}[./-](?:\d{4}|\d{2})|\d{4}-\d{2}-\d{2})";

static RULES: LazyLock<Vec<ExtractionRule>> = LazyLock::new(|| {
    let rule = |field, pattern: &str, group| ExtractionRule {
        field,
        pattern: Regex::new(pattern).unwrap(),
        group,
    };
    vec![
        rule(
            ClaimField::InjuredFirstName,
            r"(?i)nazywam się\s+(\p{L}+)\s+\p{L}+",
            1,
        ),
        rule(ClaimField::InjuredFirstName, r"(?i)imię\s*[:\-]\s*(\p{L}+)", 1),
        rule(
            ClaimField::InjuredLastName,
            r"(?i)nazywam się\s+\p{L}+\s+(\p{L}+)",
            1,
        ),
        rule(
            ClaimField::InjuredLastName,
            r"(?i)nazwisko\s*[:\-]\s*(\p{L}+)",
            1,
        ),
        rule(
            ClaimField::EmployerName,
            r"(?i)(?:pracodawca|zakład pracy|firma)\s*[:\-]?\s*(?:to\s+)?([^\n,;.]+)",
            1,
        ),
        rule(
            ClaimField::Position,
            r"(?i)stanowisko\s*[:\-]?\s*(?:to\s+)?([^\n,;.]+)",
            1,
        ),
        rule(
            ClaimField::AccidentDate,
            &format!(r"(?i)data wypadku\s*[:\-]?\s*{DATE_TOKEN}"),
            1,
        ),
        rule(
            ClaimField::AccidentDate,
            &format!(r"(?i)\bdata\s*[:\-]?\s*{DATE_TOKEN}"),
            1,
        ),
        rule(
            ClaimField::AccidentPlace,
            r"(?i)miejsce wypadku\s*[:\-]?\s*([^\n,;.]+)",
            1,
        ),
        rule(
            ClaimField::AccidentPlace,
            r"(?i)\bmiejsce\s*[:\-]?\s*([^\n,;.]+)",
            1,
        ),
        rule(
            ClaimField::AccidentDescription,
            r"(?i)(?:opis wypadku|opis|przebieg)\s*[:\-]\s*([^\n]+)",
            1,
        ),
        rule(
            ClaimField::AccidentCause,
            r"(?i)przyczyna\s*[:\-]?\s*([^\n,;.]+)",
            1,
        ),
    ]
});

/// Candidate values located in the transcript. `None` means no rule
/// matched — the reconciler then falls through to defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeuristicExtraction {
    pub injured_first_name: Option<String>,
    pub injured_last_name: Option<String>,
    pub employer_name: Option<String>,
    pub position: Option<String>,
    pub accident_date: Option<String>,
    pub accident_place: Option<String>,
    pub accident_description: Option<String>,
    pub accident_cause: Option<String>,
}

impl HeuristicExtraction {
    pub fn get(&self, field: ClaimField) -> Option<&str> {
        let slot = match field {
            ClaimField::InjuredFirstName => &self.injured_first_name,
            ClaimField::InjuredLastName => &self.injured_last_name,
            ClaimField::EmployerName => &self.employer_name,
            ClaimField::Position => &self.position,
            ClaimField::AccidentDate => &self.accident_date,
            ClaimField::AccidentPlace => &self.accident_place,
            ClaimField::AccidentDescription => &self.accident_description,
            ClaimField::AccidentCause => &self.accident_cause,
        };
        slot.as_deref()
    }

    fn slot_mut(&mut self, field: ClaimField) -> &mut Option<String> {
        match field {
            ClaimField::InjuredFirstName => &mut self.injured_first_name,
            ClaimField::InjuredLastName => &mut self.injured_last_name,
            ClaimField::EmployerName => &mut self.employer_name,
            ClaimField::Position => &mut self.position,
            ClaimField::AccidentDate => &mut self.accident_date,
            ClaimField::AccidentPlace => &mut self.accident_place,
            ClaimField::AccidentDescription => &mut self.accident_description,
            ClaimField::AccidentCause => &mut self.accident_cause,
        }
    }
}

/// Run the rule table over the transcript.
pub fn extract_fields(transcript: &str) -> HeuristicExtraction {
    let mut extraction = HeuristicExtraction::default();

    for rule in RULES.iter() {
        let slot = extraction.slot_mut(rule.field);
        if slot.is_some() {
            continue;
        }
        if let Some(caps) = rule.pattern.captures(transcript) {
            if let Some(m) = caps.get(rule.group) {
                let value = m.as_str().trim();
                if !value.is_empty() {
                    *slot = Some(value.to_string());
                }
            }
        }
    }

    extraction
}
