use serde::{Deserialize, Serialize};

/// Supported display languages: English and Punjabi.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    #[default]
    En,
    Pa,
}

impl Locale {
    /// BCP 47-ish language tag, as stored in the preference store.
    pub fn tag(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Pa => "pa",
        }
    }

    /// Parse a language tag. Anything unrecognised falls back to English.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "pa" => Locale::Pa,
            _ => Locale::En,
        }
    }
}
