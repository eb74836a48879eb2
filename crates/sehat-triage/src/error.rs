use thiserror::Error;

#[derive(Debug, Error)]
pub enum TriageError {
    #[error("unknown symptom id: {0}")]
    UnknownSymptom(String),
}
