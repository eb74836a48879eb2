//! sehat-triage
//!
//! Assessment policy definitions: the static symptom catalog, follow-up
//! question generation, and diagnosis scoring. Pure data and pure
//! functions — no I/O, no session state. The wizard in sehat-wizard
//! drives these through the two policy traits below.

pub mod catalog;
pub mod error;
pub mod questions;
pub mod scoring;

use sehat_core::{Answer, Diagnosis, Question, Symptom};

/// Strategy producing the follow-up question sequence for one run.
///
/// Implementations must be deterministic: the same selected-symptom slice
/// yields the same questions (ids, kinds, option keys, order) every time.
/// The wizard relies on the sequence being stable for the whole
/// question-answering phase. Callers guarantee `selected` is non-empty.
pub trait QuestionPolicy: Send + Sync {
    /// Unique identifier for this policy (e.g., "core_questions").
    fn id(&self) -> &str;

    fn generate(&self, selected: &[&Symptom]) -> Vec<Question>;
}

/// Strategy mapping a completed run to ranked candidate conditions.
///
/// Implementations must return at least one [`Diagnosis`], sorted by
/// descending probability with ties kept in definition order. `answers`
/// is index-aligned with the question sequence the run generated.
pub trait DiagnosisPolicy: Send + Sync {
    /// Unique identifier for this policy (e.g., "baseline_scorer").
    fn id(&self) -> &str;

    fn score(&self, selected: &[&Symptom], answers: &[Answer]) -> Vec<Diagnosis>;
}
