use thiserror::Error;

/// Contract violations at the vocabulary level. These indicate a defect in
/// the input surface (a control submitted a value its question cannot
/// accept), not a condition the user can recover from.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("answer does not match question '{question_id}': expected {expected}")]
    AnswerKindMismatch {
        question_id: String,
        expected: &'static str,
    },

    #[error("scale answer {value} for question '{question_id}' is outside {min}..={max}")]
    ScaleOutOfRange {
        question_id: String,
        value: u8,
        min: u8,
        max: u8,
    },

    #[error("option '{key}' is not offered by question '{question_id}'")]
    UnknownOption { question_id: String, key: String },
}
