//! Diagnosis scoring.
//!
//! The baseline policy ranks a fixed condition table, deterministically
//! shifting each entry's probability by how much the run deviates from a
//! mild presentation: symptom severity above mild, pain above the scale
//! midpoint, and affirmative history answers. The mapping is a
//! placeholder for a real clinical model; only its shape is contractual
//! (non-empty, 0–100, sorted descending, ties in definition order).

use std::sync::LazyLock;

use sehat_core::{Answer, Diagnosis, Severity, SeverityTier, Symptom};

use crate::DiagnosisPolicy;

/// One row of the baseline condition table.
struct ConditionDef {
    condition_key: &'static str,
    base_probability: i16,
    /// Per-distress-point shift, positive for conditions that become more
    /// likely as the presentation worsens.
    distress_slope: i16,
    severity: SeverityTier,
    description_key: &'static str,
    recommendation_keys: &'static [&'static str],
}

static CONDITIONS: LazyLock<Vec<ConditionDef>> = LazyLock::new(|| {
    vec![
        ConditionDef {
            condition_key: "common_cold",
            base_probability: 75,
            distress_slope: -4,
            severity: SeverityTier::Low,
            description_key: "common_cold_desc",
            recommendation_keys: &["get_rest", "stay_hydrated", "otc_medicine", "monitor_symptoms"],
        },
        ConditionDef {
            condition_key: "viral_infection",
            base_probability: 60,
            distress_slope: 5,
            severity: SeverityTier::Medium,
            description_key: "viral_infection_desc",
            recommendation_keys: &["rest_fluids", "monitor_temperature", "consult_if_worse", "avoid_contact"],
        },
    ]
});

const PAIN_MIDPOINT: i16 = 5;

/// How far the run deviates from an all-mild, midpoint-pain presentation.
fn distress(selected: &[&Symptom], answers: &[Answer]) -> i16 {
    let severity_excess: i16 = selected
        .iter()
        .map(|s| i16::from(s.severity.weight()) - i16::from(Severity::Mild.weight()))
        .sum();

    let pain_excess = answers
        .iter()
        .find_map(|a| match a {
            Answer::Scale(v) => Some(i16::from(*v) - PAIN_MIDPOINT),
            _ => None,
        })
        .unwrap_or(0);

    let affirmative: i16 = answers
        .iter()
        .filter(|a| matches!(a, Answer::Boolean(true)))
        .count() as i16;

    severity_excess + pain_excess + affirmative
}

/// The baseline diagnosis policy used by the assessment flow.
pub struct BaselineScorer;

impl DiagnosisPolicy for BaselineScorer {
    fn id(&self) -> &str {
        "baseline_scorer"
    }

    fn score(&self, selected: &[&Symptom], answers: &[Answer]) -> Vec<Diagnosis> {
        let d = distress(selected, answers);

        let mut results: Vec<Diagnosis> = CONDITIONS
            .iter()
            .map(|def| Diagnosis {
                condition_key: def.condition_key.to_string(),
                probability: (def.base_probability + def.distress_slope * d).clamp(5, 95) as u8,
                severity: def.severity,
                description_key: def.description_key.to_string(),
                recommendation_keys: def
                    .recommendation_keys
                    .iter()
                    .map(|k| k.to_string())
                    .collect(),
            })
            .collect();

        // Stable sort keeps definition order on equal probabilities.
        results.sort_by(|a, b| b.probability.cmp(&a.probability));
        results
    }
}
