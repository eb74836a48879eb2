use std::sync::{Arc, Mutex as StdMutex};
use std::time::Duration;

use tokio::sync::Mutex;

use sehat_core::{Answer, SymptomId};
use sehat_triage::questions::CoreQuestions;
use sehat_triage::scoring::BaselineScorer;
use sehat_wizard::{
    complete_analysis, AnswerOutcome, BackOutcome, ConsultationLauncher, ConsultationRequest,
    Phase, WizardError, WizardSession,
};

const LATENCY: Duration = Duration::from_secs(2);

fn id(s: &str) -> SymptomId {
    SymptomId::new(s)
}

/// Drive a session from the selection grid into the analyzing phase.
fn reach_analyzing(symptoms: &[&str]) -> WizardSession {
    let mut session = WizardSession::new();
    for s in symptoms {
        session.toggle_symptom(id(s)).unwrap();
    }
    session.start_assessment(&CoreQuestions).unwrap();

    loop {
        let answer = match &session.current_question().unwrap().kind {
            sehat_core::QuestionKind::Boolean => Answer::Boolean(false),
            sehat_core::QuestionKind::Scale { min, .. } => Answer::Scale(*min),
            sehat_core::QuestionKind::MultipleChoice { option_keys } => {
                Answer::Choice(option_keys[0].clone())
            }
        };
        if session.answer(answer).unwrap() == AnswerOutcome::AnalysisPending {
            break;
        }
    }
    session
}

#[test]
fn toggle_adds_and_removes_preserving_order() {
    let mut session = WizardSession::new();
    assert!(session.toggle_symptom(id("fever")).unwrap());
    assert!(session.toggle_symptom(id("cough")).unwrap());
    assert!(session.toggle_symptom(id("headache")).unwrap());
    assert!(!session.toggle_symptom(id("cough")).unwrap());

    let selected: Vec<_> = session
        .selected_symptoms()
        .iter()
        .map(|s| s.as_str())
        .collect();
    assert_eq!(selected, ["fever", "headache"]);
}

#[test]
fn toggle_rejects_unknown_symptoms() {
    let mut session = WizardSession::new();
    assert!(matches!(
        session.toggle_symptom(id("hiccups")),
        Err(WizardError::Triage(_))
    ));
}

#[test]
fn start_with_empty_selection_is_a_validation_failure() {
    let mut session = WizardSession::new();
    assert!(matches!(
        session.start_assessment(&CoreQuestions),
        Err(WizardError::NoSymptomsSelected)
    ));
    // State unchanged: still on the selection grid, still empty.
    assert!(matches!(session.phase(), Phase::Symptoms));
    assert!(session.selected_symptoms().is_empty());
}

#[test]
fn answers_never_outrun_questions() {
    let mut session = WizardSession::new();
    session.toggle_symptom(id("fever")).unwrap();
    session.start_assessment(&CoreQuestions).unwrap();

    session
        .answer(Answer::Choice("less_24_hours".into()))
        .unwrap();
    session.answer(Answer::Scale(3)).unwrap();

    let Phase::Questions { questions, answers, index } = session.phase() else {
        panic!("expected questions phase");
    };
    assert_eq!(answers.len(), 2);
    assert_eq!(*index, 2);
    assert!(answers.len() <= index + 1);
    assert!(index + 1 <= questions.len());
}

#[test]
fn malformed_answer_is_rejected_without_advancing() {
    let mut session = WizardSession::new();
    session.toggle_symptom(id("fever")).unwrap();
    session.start_assessment(&CoreQuestions).unwrap();

    // First question is multiple-choice; a scale value is a contract
    // violation.
    assert!(matches!(
        session.answer(Answer::Scale(4)),
        Err(WizardError::Answer(_))
    ));
    assert_eq!(session.progress().unwrap().position, 1);
}

#[test]
fn back_steps_through_questions_and_keeps_old_answers() {
    let mut session = WizardSession::new();
    session.toggle_symptom(id("nausea")).unwrap();
    session.start_assessment(&CoreQuestions).unwrap();

    session.answer(Answer::Choice("4_7_days".into())).unwrap();
    session.answer(Answer::Scale(6)).unwrap();
    assert_eq!(session.back(), BackOutcome::PreviousQuestion);
    assert_eq!(session.back(), BackOutcome::PreviousQuestion);

    let Phase::Questions { answers, index, .. } = session.phase() else {
        panic!("expected questions phase");
    };
    assert_eq!(*index, 0);
    assert_eq!(answers.len(), 2);

    // Re-answering overwrites in place.
    session.answer(Answer::Choice("more_week".into())).unwrap();
    let Phase::Questions { answers, .. } = session.phase() else {
        panic!("expected questions phase");
    };
    assert_eq!(answers[0], Answer::Choice("more_week".into()));
    assert_eq!(answers.len(), 2);
}

#[test]
fn back_at_first_question_returns_to_selection_keeping_symptoms() {
    let mut session = WizardSession::new();
    session.toggle_symptom(id("fever")).unwrap();
    session.toggle_symptom(id("cough")).unwrap();
    session.start_assessment(&CoreQuestions).unwrap();

    assert_eq!(session.back(), BackOutcome::SymptomSelection);
    assert!(matches!(session.phase(), Phase::Symptoms));
    assert_eq!(session.selected_symptoms().len(), 2);
}

#[test]
fn back_on_the_selection_grid_exits_the_flow() {
    let mut session = WizardSession::new();
    assert_eq!(session.back(), BackOutcome::ExitFlow);
}

#[test]
fn final_answer_carries_the_full_answer_set_into_analyzing() {
    let session = reach_analyzing(&["fever"]);
    let Phase::Analyzing { questions, answers } = session.phase() else {
        panic!("expected analyzing, got {}", session.phase().name());
    };
    assert_eq!(questions.len(), 5);
    assert_eq!(answers.len(), questions.len());
}

#[tokio::test(start_paused = true)]
async fn full_run_reaches_results_with_aligned_answers() {
    let session = Mutex::new(reach_analyzing(&["fever", "cough"]));
    complete_analysis(&session, &BaselineScorer, LATENCY).await;

    let session = session.into_inner();
    let Phase::Results { questions, answers, diagnoses } = session.phase() else {
        panic!("expected results, got {}", session.phase().name());
    };
    assert_eq!(answers.len(), questions.len());
    assert!(!diagnoses.is_empty());
}

#[tokio::test(start_paused = true)]
async fn fever_and_cough_scenario_ranks_descending() {
    let mut session = WizardSession::new();
    session.toggle_symptom(id("fever")).unwrap();
    session.toggle_symptom(id("cough")).unwrap();
    session.start_assessment(&CoreQuestions).unwrap();

    session.answer(Answer::Choice("1_3_days".into())).unwrap();
    session.answer(Answer::Scale(5)).unwrap();
    session.answer(Answer::Boolean(false)).unwrap();
    session.answer(Answer::Boolean(false)).unwrap();
    let outcome = session.answer(Answer::Boolean(false)).unwrap();
    assert_eq!(outcome, AnswerOutcome::AnalysisPending);
    assert!(matches!(session.phase(), Phase::Analyzing { .. }));

    let session = Mutex::new(session);
    complete_analysis(&session, &BaselineScorer, LATENCY).await;

    let session = session.into_inner();
    let diagnoses = session.diagnoses().expect("results phase");
    assert!(!diagnoses.is_empty());
    for pair in diagnoses.windows(2) {
        assert!(pair[0].probability >= pair[1].probability);
    }
}

#[tokio::test(start_paused = true)]
async fn restart_clears_everything() {
    let session = Mutex::new(reach_analyzing(&["dizziness"]));
    complete_analysis(&session, &BaselineScorer, LATENCY).await;

    let mut session = session.into_inner();
    assert!(session.diagnoses().is_some());

    session.restart();
    assert!(matches!(session.phase(), Phase::Symptoms));
    assert!(session.selected_symptoms().is_empty());
    assert!(session.diagnoses().is_none());
    assert!(session.progress().is_none());
}

#[tokio::test(start_paused = true)]
async fn stale_analysis_does_not_touch_a_reset_session() {
    let session = Arc::new(Mutex::new(reach_analyzing(&["fatigue"])));

    let worker = {
        let session = Arc::clone(&session);
        tokio::spawn(async move {
            complete_analysis(&session, &BaselineScorer, LATENCY).await;
        })
    };
    // Let the worker capture the run counter and start sleeping.
    tokio::task::yield_now().await;

    // User backs out during the analyzing phase, then starts a fresh run.
    {
        let mut s = session.lock().await;
        assert_eq!(s.back(), BackOutcome::SymptomSelection);
        s.start_assessment(&CoreQuestions).unwrap();
    }

    worker.await.unwrap();

    // The stale completion must not have produced results for the new run.
    let s = session.lock().await;
    assert!(matches!(s.phase(), Phase::Questions { .. }));
}

#[tokio::test(start_paused = true)]
async fn completion_after_abandonment_is_a_no_op() {
    let session = Mutex::new(reach_analyzing(&["cough"]));
    session.lock().await.back();

    complete_analysis(&session, &BaselineScorer, LATENCY).await;
    assert!(matches!(session.into_inner().phase(), Phase::Symptoms));
}

#[test]
fn progress_tracks_the_question_phase_only() {
    let mut session = WizardSession::new();
    assert!(session.progress().is_none());

    session.toggle_symptom(id("fever")).unwrap();
    session.start_assessment(&CoreQuestions).unwrap();

    let p = session.progress().unwrap();
    assert_eq!((p.position, p.total), (1, 5));
    assert!((p.fraction - 0.2).abs() < f32::EPSILON);

    session.answer(Answer::Choice("1_3_days".into())).unwrap();
    assert_eq!(session.progress().unwrap().position, 2);
}

struct RecordingLauncher(Arc<StdMutex<Vec<ConsultationRequest>>>);

impl ConsultationLauncher for RecordingLauncher {
    fn launch(&self, request: ConsultationRequest) {
        self.0.lock().unwrap().push(request);
    }
}

#[tokio::test(start_paused = true)]
async fn results_hand_off_carries_the_selected_symptoms() {
    let session = Mutex::new(reach_analyzing(&["fever", "cough"]));
    complete_analysis(&session, &BaselineScorer, LATENCY).await;
    let session = session.into_inner();

    let launched = Arc::new(StdMutex::new(Vec::new()));
    let launcher = RecordingLauncher(Arc::clone(&launched));
    session.hand_off(&launcher).unwrap();

    let launched = launched.lock().unwrap();
    assert_eq!(launched.len(), 1);
    let ids: Vec<_> = launched[0].symptom_ids.iter().map(|s| s.as_str()).collect();
    assert_eq!(ids, ["fever", "cough"]);
}

#[test]
fn consultation_is_only_offered_on_results() {
    let session = WizardSession::new();
    assert!(matches!(
        session.consultation_request(),
        Err(WizardError::InvalidPhase { .. })
    ));
}
