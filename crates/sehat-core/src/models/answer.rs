use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::models::question::{Question, QuestionKind};

/// A user response to one generated question. The variant must match the
/// question's [`QuestionKind`]; [`Answer::validate_for`] enforces this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
#[ts(export)]
pub enum Answer {
    Boolean(bool),
    Scale(u8),
    Choice(String),
}

impl Answer {
    /// Check this answer against the question it responds to.
    ///
    /// A mismatch is a contract violation by the input surface, not a
    /// user-recoverable condition: the rendered controls only permit
    /// well-formed answers.
    pub fn validate_for(&self, question: &Question) -> Result<(), CoreError> {
        match (&question.kind, self) {
            (QuestionKind::Boolean, Answer::Boolean(_)) => Ok(()),
            (QuestionKind::Scale { min, max }, Answer::Scale(value)) => {
                if value < min || value > max {
                    return Err(CoreError::ScaleOutOfRange {
                        question_id: question.id.clone(),
                        value: *value,
                        min: *min,
                        max: *max,
                    });
                }
                Ok(())
            }
            (QuestionKind::MultipleChoice { option_keys }, Answer::Choice(key)) => {
                if !option_keys.iter().any(|k| k == key) {
                    return Err(CoreError::UnknownOption {
                        question_id: question.id.clone(),
                        key: key.clone(),
                    });
                }
                Ok(())
            }
            (kind, _) => Err(CoreError::AnswerKindMismatch {
                question_id: question.id.clone(),
                expected: kind.label(),
            }),
        }
    }
}
