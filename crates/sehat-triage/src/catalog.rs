//! The static symptom catalog shown on the selection grid.
//!
//! Loaded once at first use, never mutated. Definition order is the
//! display order and the tie-break order used by diagnosis policies.

use std::sync::LazyLock;

use sehat_core::{Severity, Symptom, SymptomId};

use crate::error::TriageError;

static CATALOG: LazyLock<Vec<Symptom>> = LazyLock::new(|| {
    let entries = [
        ("fever", "fever", Severity::Moderate, "general", "thermometer"),
        ("headache", "headache", Severity::Mild, "neurological", "person"),
        ("cough", "cough", Severity::Mild, "respiratory", "medical"),
        ("sore_throat", "sore_throat", Severity::Mild, "respiratory", "medical"),
        ("chest_pain", "chest_pain", Severity::Severe, "cardiovascular", "heart"),
        ("nausea", "nausea", Severity::Moderate, "digestive", "restaurant"),
        ("fatigue", "fatigue", Severity::Mild, "general", "battery-dead"),
        ("dizziness", "dizziness", Severity::Moderate, "neurological", "refresh-circle"),
        ("shortness_breath", "shortness_breath", Severity::Severe, "respiratory", "fitness"),
        ("stomach_pain", "stomach_pain", Severity::Moderate, "digestive", "restaurant"),
    ];

    entries
        .iter()
        .map(|(id, name_key, severity, category, icon)| Symptom {
            id: SymptomId::new(*id),
            name_key: name_key.to_string(),
            severity: *severity,
            category: category.to_string(),
            icon: icon.to_string(),
        })
        .collect()
});

/// All catalog symptoms in definition order.
pub fn catalog() -> &'static [Symptom] {
    &CATALOG
}

/// Look up a symptom by id.
pub fn find(id: &SymptomId) -> Option<&'static Symptom> {
    CATALOG.iter().find(|s| &s.id == id)
}

/// Look up a symptom by id, failing on ids that are not in the catalog.
pub fn require(id: &SymptomId) -> Result<&'static Symptom, TriageError> {
    find(id).ok_or_else(|| TriageError::UnknownSymptom(id.to_string()))
}

/// Filter the catalog on *resolved* display text, preserving catalog
/// order. The resolver maps a name key to localized text; matching is
/// case-insensitive, as in the selection screen's search box.
pub fn search(query: &str, resolve: impl Fn(&str) -> String) -> Vec<&'static Symptom> {
    let needle = query.to_lowercase();
    CATALOG
        .iter()
        .filter(|s| resolve(&s.name_key).to_lowercase().contains(&needle))
        .collect()
}
