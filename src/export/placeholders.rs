//! Placeholder resolution for the accident-card template.
//!
//! The template carries a fixed set of Polish tags. Every tag is resolved
//! the same way: the rich accident-card sub-field when present and
//! non-empty, else the flat record field, else the empty string. Missing
//! data renders as a blank, never as a broken tag.

use std::collections::BTreeMap;

use crate::models::accident_card::CardWitness;
use crate::models::CaseRecord;

/// How many witnesses the printed card has room for. Extras are dropped.
pub const WITNESS_SLOTS: usize = 2;

fn resolve(rich: Option<&str>, flat: Option<&str>) -> String {
    fn non_empty(v: Option<&str>) -> Option<&str> {
        v.map(str::trim).filter(|v| !v.is_empty())
    }
    non_empty(rich)
        .or_else(|| non_empty(flat))
        .unwrap_or_default()
        .to_string()
}

/// Build the complete tag map for one case. Every key in the template's
/// tag set is always present and string-typed.
pub fn placeholder_map(record: &CaseRecord) -> BTreeMap<String, String> {
    let card = record.accident_card.clone().unwrap_or_default();
    let id_doc = card.injured.id.clone().unwrap_or_default();
    let insurance = card.injured.insurance_title.clone().unwrap_or_default();

    let mut map = BTreeMap::new();
    let mut put = |key: &str, rich: &str, flat: Option<&str>| {
        map.insert(key.to_string(), resolve(Some(rich), flat));
    };

    // Payer (employer).
    put(
        "imie_i_nazwisko_platnika",
        &card.employer.employer_name,
        record.employer_name.as_deref(),
    );
    put("adres_siedziby", &card.employer.hq_address, None);
    put("nip", &card.employer.nip, None);
    put("regon", &card.employer.regon, None);
    put("pesel_platnika", &card.employer.pesel, None);

    // Injured person.
    put(
        "imie_poszkodowanego",
        &card.injured.first_name,
        record.injured_first_name.as_deref(),
    );
    put(
        "nazwisko_poszkodowanego",
        &card.injured.last_name,
        record.injured_last_name.as_deref(),
    );
    put("pesel", &card.injured.pesel, None);
    put("data_urodzenia", &card.injured.birth.date, None);
    put("miejsce_urodzenia", &card.injured.birth.place, None);
    put("adres_zamieszkania", &card.injured.address, None);
    put("dokument_tozsamosci_rodzaj", &id_doc.kind, None);
    put("dokument_tozsamosci_seria", &id_doc.series, None);
    put("dokument_tozsamosci_numer", &id_doc.number, None);
    put("kod_tytulu_ubezpieczenia", &insurance.code, None);
    put("opis_tytulu_ubezpieczenia", &insurance.description, None);

    // Accident.
    put(
        "data_wypadku",
        &card.accident.date,
        record.accident_date.as_deref(),
    );
    put(
        "imie_zglaszajacego",
        &card.accident.reporters_first_name,
        None,
    );
    put(
        "nazwisko_zglaszajacego",
        &card.accident.reporters_last_name,
        None,
    );
    put(
        "opis_wypadku",
        &card.accident.description,
        Some(record.accident_description.as_str()),
    );
    put(
        "dowody_trzezwosci",
        &card.sobriety.evidence_description,
        None,
    );

    // Witnesses 1..=WITNESS_SLOTS; slots past the list render blank.
    let empty = CardWitness::default();
    for slot in 0..WITNESS_SLOTS {
        let witness = card.witnesses.get(slot).unwrap_or(&empty);
        let n = slot + 1;
        put(&format!("swiadek_{n}_imie"), &witness.first_name, None);
        put(&format!("swiadek_{n}_nazwisko"), &witness.last_name, None);
        put(&format!("swiadek_{n}_adres"), &witness.address, None);
    }

    map
}
