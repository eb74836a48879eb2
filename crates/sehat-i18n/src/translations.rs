//! Static translation tables.
//!
//! The English table is complete for every key the engine emits. The
//! Punjabi table is an overlay: keys missing there resolve through the
//! English table, matching the app's i18next fallback configuration.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::locale::Locale;

static EN: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        // Symptom names
        ("fever", "Fever"),
        ("headache", "Headache"),
        ("cough", "Cough"),
        ("sore_throat", "Sore Throat"),
        ("chest_pain", "Chest Pain"),
        ("nausea", "Nausea"),
        ("fatigue", "Fatigue"),
        ("dizziness", "Dizziness"),
        ("shortness_breath", "Shortness of Breath"),
        ("stomach_pain", "Stomach Pain"),
        // Severity badges
        ("severity_mild", "Mild"),
        ("severity_moderate", "Moderate"),
        ("severity_severe", "Severe"),
        // Question prompts
        ("symptom_duration", "How long have you had these symptoms?"),
        ("pain_level", "How would you rate your pain or discomfort?"),
        ("taken_medication", "Have you taken any medication for this?"),
        ("existing_conditions", "Do you have any pre-existing medical conditions?"),
        ("current_medications", "Are you currently taking any medications?"),
        // Duration options
        ("less_24_hours", "Less than 24 hours"),
        ("1_3_days", "1-3 days"),
        ("4_7_days", "4-7 days"),
        ("more_week", "More than a week"),
        // Answer controls
        ("yes", "Yes"),
        ("no", "No"),
        ("mild", "Mild"),
        ("severe", "Severe"),
        // Conditions
        ("common_cold", "Common Cold"),
        ("common_cold_desc", "A viral infection of the upper respiratory tract. Usually resolves on its own within a week."),
        ("viral_infection", "Viral Infection"),
        ("viral_infection_desc", "A general viral illness that may cause fever, aches, and fatigue."),
        // Recommendations
        ("get_rest", "Get plenty of rest"),
        ("stay_hydrated", "Stay hydrated"),
        ("otc_medicine", "Consider over-the-counter medicine"),
        ("monitor_symptoms", "Monitor your symptoms"),
        ("rest_fluids", "Rest and drink fluids"),
        ("monitor_temperature", "Monitor your temperature"),
        ("consult_if_worse", "Consult a doctor if symptoms worsen"),
        ("avoid_contact", "Avoid close contact with others"),
        // Flow chrome
        ("symptom_checker", "Symptom Checker"),
        ("health_assessment", "Health Assessment"),
        ("your_results", "Your Results"),
        ("search_symptoms", "Search symptoms..."),
        ("symptoms_selected", "symptoms selected"),
        ("continue_assessment", "Continue Assessment"),
        ("no_symptoms", "No Symptoms Selected"),
        ("select_symptoms_msg", "Please select at least one symptom to continue."),
        ("analyzing_symptoms", "Analyzing Symptoms"),
        ("ai_processing", "Our AI is processing your answers..."),
        ("analysis_complete", "Analysis Complete"),
        ("possible_conditions", "Here are the possible conditions based on your symptoms"),
        ("recommendations", "Recommendations"),
        ("disclaimer", "This assessment is for informational purposes only and is not a medical diagnosis. Always consult a healthcare professional."),
        ("consult_doctor", "Consult a Doctor"),
    ])
});

static PA: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("fever", "ਬੁਖਾਰ"),
        ("headache", "ਸਿਰ ਦਰਦ"),
        ("cough", "ਖੰਘ"),
        ("sore_throat", "ਗਲੇ ਵਿੱਚ ਖਰਾਸ਼"),
        ("chest_pain", "ਛਾਤੀ ਵਿੱਚ ਦਰਦ"),
        ("nausea", "ਮਤਲੀ"),
        ("fatigue", "ਥਕਾਵਟ"),
        ("dizziness", "ਚੱਕਰ ਆਉਣਾ"),
        ("shortness_breath", "ਸਾਹ ਚੜ੍ਹਨਾ"),
        ("stomach_pain", "ਪੇਟ ਦਰਦ"),
        ("severity_mild", "ਹਲਕਾ"),
        ("severity_moderate", "ਦਰਮਿਆਨਾ"),
        ("severity_severe", "ਗੰਭੀਰ"),
        ("symptom_duration", "ਤੁਹਾਨੂੰ ਇਹ ਲੱਛਣ ਕਿੰਨੇ ਸਮੇਂ ਤੋਂ ਹਨ?"),
        ("pain_level", "ਤੁਸੀਂ ਆਪਣੇ ਦਰਦ ਨੂੰ ਕਿਵੇਂ ਦਰਜਾ ਦਿਓਗੇ?"),
        ("taken_medication", "ਕੀ ਤੁਸੀਂ ਇਸ ਲਈ ਕੋਈ ਦਵਾਈ ਲਈ ਹੈ?"),
        ("less_24_hours", "24 ਘੰਟਿਆਂ ਤੋਂ ਘੱਟ"),
        ("1_3_days", "1-3 ਦਿਨ"),
        ("4_7_days", "4-7 ਦਿਨ"),
        ("more_week", "ਇੱਕ ਹਫ਼ਤੇ ਤੋਂ ਵੱਧ"),
        ("yes", "ਹਾਂ"),
        ("no", "ਨਹੀਂ"),
        ("common_cold", "ਆਮ ਜ਼ੁਕਾਮ"),
        ("viral_infection", "ਵਾਇਰਲ ਇਨਫੈਕਸ਼ਨ"),
        ("get_rest", "ਭਰਪੂਰ ਆਰਾਮ ਕਰੋ"),
        ("stay_hydrated", "ਪਾਣੀ ਪੀਂਦੇ ਰਹੋ"),
        ("consult_doctor", "ਡਾਕਟਰ ਨਾਲ ਸਲਾਹ ਕਰੋ"),
        ("symptom_checker", "ਲੱਛਣ ਜਾਂਚਕਰਤਾ"),
    ])
});

/// Resolves translation keys for one locale.
#[derive(Debug, Clone, Copy, Default)]
pub struct Translator {
    locale: Locale,
}

impl Translator {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Resolve a key to display text. Punjabi falls back to English for
    /// keys not yet translated; a key absent from both tables is returned
    /// as-is.
    pub fn resolve<'a>(&self, key: &'a str) -> &'a str {
        let primary = match self.locale {
            Locale::En => EN.get(key),
            Locale::Pa => PA.get(key).or_else(|| EN.get(key)),
        };
        primary.copied().unwrap_or(key)
    }
}
