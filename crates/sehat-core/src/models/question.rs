use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The response format a question expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case", tag = "type")]
#[ts(export)]
pub enum QuestionKind {
    /// Yes / no.
    Boolean,
    /// Integer rating within an inclusive range (pain scale is 1–10).
    Scale { min: u8, max: u8 },
    /// Pick one of the listed option keys, in the order given.
    MultipleChoice { option_keys: Vec<String> },
}

impl QuestionKind {
    /// Short label used in contract-violation error messages.
    pub fn label(&self) -> &'static str {
        match self {
            QuestionKind::Boolean => "boolean",
            QuestionKind::Scale { .. } => "scale",
            QuestionKind::MultipleChoice { .. } => "multiple_choice",
        }
    }
}

/// A single assessment prompt generated for one run of the wizard.
/// Immutable once generated; the prompt and options are translation keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    pub id: String,
    pub prompt_key: String,
    pub kind: QuestionKind,
}
