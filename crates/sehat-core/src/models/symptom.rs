use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Stable identifier of a catalog symptom.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SymptomId(pub String);

impl SymptomId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SymptomId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Severity of a presenting symptom, as shown on the selection grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Severity {
    Mild,
    Moderate,
    Severe,
}

impl Severity {
    /// Scoring weight used by diagnosis policies. Severe complaints pull
    /// harder on the ranking than mild ones.
    pub fn weight(self) -> u8 {
        match self {
            Severity::Mild => 1,
            Severity::Moderate => 2,
            Severity::Severe => 3,
        }
    }
}

/// A selectable clinical complaint from the static catalog.
///
/// `name_key` is a translation key, never display text. `icon` names a
/// glyph in the front-end icon set and is opaque to the engine.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Symptom {
    pub id: SymptomId,
    pub name_key: String,
    pub severity: Severity,
    pub category: String,
    pub icon: String,
}
