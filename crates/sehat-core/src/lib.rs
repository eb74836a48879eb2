//! sehat-core
//!
//! Pure domain types for the Sehat symptom assessment flow.
//! No I/O and no policy — this is the shared vocabulary of the system.
//! Every display field is a translation key resolved by sehat-i18n; the
//! engine never carries language-specific text.

pub mod error;
pub mod models;

pub use models::answer::Answer;
pub use models::diagnosis::{Diagnosis, SeverityTier};
pub use models::question::{Question, QuestionKind};
pub use models::symptom::{Severity, Symptom, SymptomId};
