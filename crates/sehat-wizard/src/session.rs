use std::time::Duration;

use serde::Serialize;
use tokio::sync::Mutex;
use ts_rs::TS;
use uuid::Uuid;

use sehat_core::{Answer, Diagnosis, Question, SymptomId};
use sehat_triage::{catalog, DiagnosisPolicy, QuestionPolicy};

use crate::error::WizardError;
use crate::progress::Progress;

/// Where the assessment flow currently is. The payload carries exactly
/// the data that phase needs, so states like "results with no questions"
/// cannot be represented.
#[derive(Debug)]
pub enum Phase {
    /// Picking symptoms on the selection grid.
    Symptoms,
    /// Answering the generated questions one at a time. `answers` is
    /// index-aligned with `questions` and never longer than `index + 1`.
    Questions {
        questions: Vec<Question>,
        answers: Vec<Answer>,
        index: usize,
    },
    /// All questions answered; waiting out the simulated scoring latency.
    Analyzing {
        questions: Vec<Question>,
        answers: Vec<Answer>,
    },
    /// Scored. `diagnoses` is non-empty and sorted by descending
    /// probability.
    Results {
        questions: Vec<Question>,
        answers: Vec<Answer>,
        diagnoses: Vec<Diagnosis>,
    },
}

impl Phase {
    pub fn name(&self) -> &'static str {
        match self {
            Phase::Symptoms => "symptoms",
            Phase::Questions { .. } => "questions",
            Phase::Analyzing { .. } => "analyzing",
            Phase::Results { .. } => "results",
        }
    }
}

/// What `answer` did with the submitted value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// Moved on to the next question.
    Advanced,
    /// That was the last question; the session is now analyzing and the
    /// host should drive [`complete_analysis`].
    AnalysisPending,
}

/// Where the back button landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackOutcome {
    /// Stepped to the previous question; its old answer is kept until
    /// re-answered.
    PreviousQuestion,
    /// Returned to the symptom selection grid.
    SymptomSelection,
    /// Back was pressed at the outermost state; the host should pop the
    /// wizard screen.
    ExitFlow,
}

/// Why a consultation is being opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum EntryReason {
    SymptomAssessment,
}

/// Hand-off context for the live-consultation screen.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct ConsultationRequest {
    pub symptom_ids: Vec<SymptomId>,
    pub reason: EntryReason,
}

/// Navigation collaborator that opens the live-consultation screen.
/// Fire-and-forget: no return value is expected.
pub trait ConsultationLauncher: Send + Sync {
    fn launch(&self, request: ConsultationRequest);
}

/// One run of the assessment flow, from symptom selection to results.
///
/// Exclusively owned by the single active wizard screen; all transitions
/// happen on its event loop. `run` is a generation counter bumped every
/// time the session returns to symptom selection, so a scoring completion
/// scheduled for an abandoned run can recognise itself as stale.
#[derive(Debug)]
pub struct WizardSession {
    id: Uuid,
    run: u64,
    phase: Phase,
    selected: Vec<SymptomId>,
    started_at: jiff::Timestamp,
}

impl WizardSession {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            run: 0,
            phase: Phase::Symptoms,
            selected: Vec::new(),
            started_at: jiff::Timestamp::now(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn run(&self) -> u64 {
        self.run
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn started_at(&self) -> jiff::Timestamp {
        self.started_at
    }

    /// Selected symptom ids in insertion order.
    pub fn selected_symptoms(&self) -> &[SymptomId] {
        &self.selected
    }

    /// Add or remove a symptom on the selection grid. Returns whether the
    /// symptom is selected afterwards. Only valid in the symptoms phase:
    /// the question sequence is generated from the selection exactly once
    /// and is never regenerated mid-run.
    pub fn toggle_symptom(&mut self, id: SymptomId) -> Result<bool, WizardError> {
        if !matches!(self.phase, Phase::Symptoms) {
            return Err(WizardError::InvalidPhase {
                action: "toggle a symptom",
                phase: self.phase.name(),
            });
        }
        catalog::require(&id)?;

        if let Some(pos) = self.selected.iter().position(|s| s == &id) {
            self.selected.remove(pos);
            tracing::debug!(session = %self.id, symptom = %id, "symptom deselected");
            Ok(false)
        } else {
            self.selected.push(id);
            Ok(true)
        }
    }

    /// Leave the selection grid and start answering questions.
    ///
    /// Fails with [`WizardError::NoSymptomsSelected`] on an empty
    /// selection, leaving the session untouched; the screen surfaces the
    /// message and stays put.
    pub fn start_assessment(&mut self, policy: &dyn QuestionPolicy) -> Result<(), WizardError> {
        if !matches!(self.phase, Phase::Symptoms) {
            return Err(WizardError::InvalidPhase {
                action: "start the assessment",
                phase: self.phase.name(),
            });
        }
        if self.selected.is_empty() {
            return Err(WizardError::NoSymptomsSelected);
        }

        let symptoms: Vec<_> = self
            .selected
            .iter()
            .filter_map(catalog::find)
            .collect();
        let questions = policy.generate(&symptoms);

        self.run += 1;
        tracing::info!(
            session = %self.id,
            run = self.run,
            policy = policy.id(),
            symptoms = symptoms.len(),
            questions = questions.len(),
            "assessment started"
        );
        self.phase = Phase::Questions {
            questions,
            answers: Vec::new(),
            index: 0,
        };
        Ok(())
    }

    /// The question currently being shown, if any.
    pub fn current_question(&self) -> Option<&Question> {
        match &self.phase {
            Phase::Questions { questions, index, .. } => questions.get(*index),
            _ => None,
        }
    }

    /// Record the answer to the current question and advance. Re-answering
    /// a revisited question overwrites in place. After the final question
    /// the session enters the analyzing phase and the host is expected to
    /// drive [`complete_analysis`].
    pub fn answer(&mut self, answer: Answer) -> Result<AnswerOutcome, WizardError> {
        let phase_name = self.phase.name();
        let Phase::Questions { questions, answers, index } = &mut self.phase else {
            return Err(WizardError::InvalidPhase {
                action: "answer a question",
                phase: phase_name,
            });
        };

        let question = &questions[*index];
        answer.validate_for(question)?;

        if *index < answers.len() {
            answers[*index] = answer;
        } else {
            answers.push(answer);
        }

        if *index + 1 < questions.len() {
            *index += 1;
            return Ok(AnswerOutcome::Advanced);
        }

        let questions = std::mem::take(questions);
        let answers = std::mem::take(answers);
        tracing::info!(session = %self.id, run = self.run, "all questions answered, analyzing");
        self.phase = Phase::Analyzing { questions, answers };
        Ok(AnswerOutcome::AnalysisPending)
    }

    /// Handle the back button for the current phase.
    ///
    /// In the question phase this steps backwards, falling out to the
    /// selection grid from the first question (the generated questions and
    /// answers are discarded, the selection is kept). Backing out of the
    /// analyzing phase abandons the pending scoring. From results it
    /// behaves as [`restart`](Self::restart).
    pub fn back(&mut self) -> BackOutcome {
        if matches!(self.phase, Phase::Symptoms) {
            return BackOutcome::ExitFlow;
        }
        if let Phase::Questions { index, .. } = &mut self.phase {
            if *index > 0 {
                *index -= 1;
                return BackOutcome::PreviousQuestion;
            }
        }
        if matches!(self.phase, Phase::Results { .. }) {
            self.restart();
        } else {
            // First question, or an in-flight analysis: drop the generated
            // run, keep the selection.
            self.run += 1;
            self.phase = Phase::Symptoms;
            tracing::debug!(session = %self.id, run = self.run, "returned to symptom selection");
        }
        BackOutcome::SymptomSelection
    }

    /// Reset to an empty selection grid, invalidating any in-flight
    /// analysis for this session.
    pub fn restart(&mut self) {
        self.run += 1;
        self.selected.clear();
        self.phase = Phase::Symptoms;
        tracing::info!(session = %self.id, run = self.run, "session restarted");
    }

    /// Diagnosis results, present only in the results phase.
    pub fn diagnoses(&self) -> Option<&[Diagnosis]> {
        match &self.phase {
            Phase::Results { diagnoses, .. } => Some(diagnoses),
            _ => None,
        }
    }

    /// Progress through the question phase, `None` elsewhere.
    pub fn progress(&self) -> Option<Progress> {
        match &self.phase {
            Phase::Questions { questions, index, .. } => {
                Some(Progress::at(*index, questions.len()))
            }
            _ => None,
        }
    }

    /// Build the hand-off context for a live consultation. Only offered
    /// on the results screen.
    pub fn consultation_request(&self) -> Result<ConsultationRequest, WizardError> {
        if !matches!(self.phase, Phase::Results { .. }) {
            return Err(WizardError::InvalidPhase {
                action: "request a consultation",
                phase: self.phase.name(),
            });
        }
        Ok(ConsultationRequest {
            symptom_ids: self.selected.clone(),
            reason: EntryReason::SymptomAssessment,
        })
    }

    /// Hand the assessment context to the consultation screen.
    pub fn hand_off(&self, launcher: &dyn ConsultationLauncher) -> Result<(), WizardError> {
        let request = self.consultation_request()?;
        tracing::info!(session = %self.id, symptoms = request.symptom_ids.len(), "opening consultation");
        launcher.launch(request);
        Ok(())
    }

    fn finish_analysis(&mut self, policy: &dyn DiagnosisPolicy) {
        let Phase::Analyzing { questions, answers } = &mut self.phase else {
            return;
        };
        let questions = std::mem::take(questions);
        let answers = std::mem::take(answers);

        let symptoms: Vec<_> = self
            .selected
            .iter()
            .filter_map(catalog::find)
            .collect();
        let diagnoses = policy.score(&symptoms, &answers);

        tracing::info!(
            session = %self.id,
            run = self.run,
            policy = policy.id(),
            diagnoses = diagnoses.len(),
            "analysis complete"
        );
        self.phase = Phase::Results {
            questions,
            answers,
            diagnoses,
        };
    }
}

impl Default for WizardSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Wait out the simulated scoring latency, then score and move the
/// session to results.
///
/// The session's run counter is captured before sleeping and re-checked
/// after re-locking: if the user backed out or restarted in the meantime,
/// the completion is stale and is dropped without touching the session.
pub async fn complete_analysis(
    session: &Mutex<WizardSession>,
    policy: &dyn DiagnosisPolicy,
    latency: Duration,
) {
    let run = {
        let s = session.lock().await;
        if !matches!(s.phase, Phase::Analyzing { .. }) {
            tracing::debug!(session = %s.id, "nothing to analyze");
            return;
        }
        s.run
    };

    tokio::time::sleep(latency).await;

    let mut s = session.lock().await;
    if s.run != run || !matches!(s.phase, Phase::Analyzing { .. }) {
        tracing::debug!(session = %s.id, expected = run, actual = s.run, "dropping stale analysis");
        return;
    }
    s.finish_analysis(policy);
}
