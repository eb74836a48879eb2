use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Urgency tier of a candidate condition, driving the badge colour in the
/// results view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SeverityTier {
    Low,
    Medium,
    High,
}

/// A scored candidate condition produced by a diagnosis policy.
///
/// `probability` is an integer percentage in 0–100. All text fields are
/// translation keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Diagnosis {
    pub condition_key: String,
    pub probability: u8,
    pub severity: SeverityTier,
    pub description_key: String,
    pub recommendation_keys: Vec<String>,
}
