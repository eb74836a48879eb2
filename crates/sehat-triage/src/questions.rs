//! Follow-up question generation.
//!
//! The baseline policy asks the same five core questions for every
//! symptom mix: duration, pain level, prior medication, pre-existing
//! conditions, current medications. Symptom-specific branching can be
//! layered on by a custom [`QuestionPolicy`] without touching the wizard.

use sehat_core::{Question, QuestionKind, Symptom};

use crate::QuestionPolicy;

/// Option keys for the duration question, in display order.
pub const DURATION_OPTIONS: [&str; 4] = ["less_24_hours", "1_3_days", "4_7_days", "more_week"];

/// Pain scale bounds (inclusive).
pub const PAIN_SCALE_MIN: u8 = 1;
pub const PAIN_SCALE_MAX: u8 = 10;

/// The fixed core question set used by the assessment flow.
pub struct CoreQuestions;

impl QuestionPolicy for CoreQuestions {
    fn id(&self) -> &str {
        "core_questions"
    }

    fn generate(&self, _selected: &[&Symptom]) -> Vec<Question> {
        vec![
            Question {
                id: "duration".to_string(),
                prompt_key: "symptom_duration".to_string(),
                kind: QuestionKind::MultipleChoice {
                    option_keys: DURATION_OPTIONS.iter().map(|k| k.to_string()).collect(),
                },
            },
            Question {
                id: "pain_level".to_string(),
                prompt_key: "pain_level".to_string(),
                kind: QuestionKind::Scale {
                    min: PAIN_SCALE_MIN,
                    max: PAIN_SCALE_MAX,
                },
            },
            Question {
                id: "taken_medication".to_string(),
                prompt_key: "taken_medication".to_string(),
                kind: QuestionKind::Boolean,
            },
            Question {
                id: "existing_conditions".to_string(),
                prompt_key: "existing_conditions".to_string(),
                kind: QuestionKind::Boolean,
            },
            Question {
                id: "current_medications".to_string(),
                prompt_key: "current_medications".to_string(),
                kind: QuestionKind::Boolean,
            },
        ]
    }
}
