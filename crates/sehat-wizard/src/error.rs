use thiserror::Error;

use sehat_core::error::CoreError;
use sehat_triage::error::TriageError;

#[derive(Debug, Error)]
pub enum WizardError {
    /// User pressed "continue" without selecting anything. Recoverable:
    /// the screen surfaces the message and the session is unchanged.
    #[error("no symptoms selected")]
    NoSymptomsSelected,

    /// An action was dispatched in a phase that does not accept it.
    #[error("cannot {action} while in the {phase} phase")]
    InvalidPhase {
        action: &'static str,
        phase: &'static str,
    },

    /// The submitted answer does not fit the current question. Contract
    /// violation by the input surface.
    #[error(transparent)]
    Answer(#[from] CoreError),

    #[error(transparent)]
    Triage(#[from] TriageError),
}
