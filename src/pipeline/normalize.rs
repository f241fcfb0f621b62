//! Date canonicalization for reconciled fields.
//!
//! Claimants write dates any way they like ("3.01.24", "05/03/2024");
//! the register stores `YYYY-MM-DD`. Anything that does not look like a
//! date at all passes through verbatim — the normalizer never fails.

use std::sync::LazyLock;

use regex::Regex;

static CANONICAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap());

static DAY_FIRST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{1,2})[./-](\d{1,2})[./-](\d{2}|\d{4})$").unwrap());

/// Normalize a textual date to `YYYY-MM-DD`.
///
/// - `None` / empty / whitespace-only → `None`
/// - already canonical → unchanged
/// - `D[./-]M[./-]Y` (2- or 4-digit year) → rewritten, 2-digit years
///   assumed to be in the 2000s
/// - anything else → returned verbatim (best-effort passthrough)
pub fn normalize_date(input: Option<&str>) -> Option<String> {
    let raw = input?.trim();
    if raw.is_empty() {
        return None;
    }

    if CANONICAL.is_match(raw) {
        return Some(raw.to_string());
    }

    if let Some(caps) = DAY_FIRST.captures(raw) {
        let day = &caps[1];
        let month = &caps[2];
        let year = &caps[3];
        let year = if year.len() == 2 {
            format!("20{year}")
        } else {
            year.to_string()
        };
        return Some(format!("{year}-{month:0>2}-{day:0>2}"));
    }

    Some(raw.to_string())
}
