//! sehat-i18n
//!
//! Text resolution for the assessment flow. The engine only ever emits
//! stable string keys; this crate maps them to localized text and keeps
//! the user's language preference. A missing translation falls back to
//! English, and an unknown key resolves to itself, so rendering never
//! fails on a missing entry.

pub mod locale;
pub mod store;
pub mod translations;

pub use locale::Locale;
pub use store::{preferred_locale, remember_locale, LanguageStore, MemoryStore, StoreError};
pub use translations::Translator;
