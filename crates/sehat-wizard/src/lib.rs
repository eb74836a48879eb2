//! sehat-wizard
//!
//! The symptom assessment state machine: one [`WizardSession`] per active
//! wizard screen, driven by discrete user actions. The session owns the
//! selected symptoms, the generated question sequence, the index-aligned
//! answers, and the diagnosis results; question generation and scoring
//! are delegated to the policy traits in sehat-triage.

pub mod error;
pub mod progress;
pub mod session;

pub use error::WizardError;
pub use progress::Progress;
pub use session::{
    complete_analysis, AnswerOutcome, BackOutcome, ConsultationLauncher, ConsultationRequest,
    EntryReason, Phase, WizardSession,
};
