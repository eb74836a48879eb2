//! The persisted language preference.
//!
//! A single string value under a well-known key, backed by whatever
//! key-value storage the host app provides. Store failures are logged and
//! swallowed: the assessment flow must never block on a preference read
//! or write, it just continues with the fallback language.

use std::sync::Mutex;

use thiserror::Error;

use crate::locale::Locale;

/// Storage key for the language preference, shared with the front-end.
pub const LANGUAGE_KEY: &str = "user-language";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("language store unavailable: {0}")]
    Unavailable(String),
}

/// Key-value collaborator holding the language preference.
pub trait LanguageStore: Send + Sync {
    /// Read the saved language tag, `None` if never set.
    fn load(&self) -> Result<Option<String>, StoreError>;

    /// Persist the language tag under [`LANGUAGE_KEY`].
    fn save(&self, tag: &str) -> Result<(), StoreError>;
}

/// In-process store for hosts without platform storage (and for tests).
#[derive(Debug, Default)]
pub struct MemoryStore {
    value: Mutex<Option<String>>,
}

impl LanguageStore for MemoryStore {
    fn load(&self) -> Result<Option<String>, StoreError> {
        let value = self
            .value
            .lock()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        Ok(value.clone())
    }

    fn save(&self, tag: &str) -> Result<(), StoreError> {
        let mut value = self
            .value
            .lock()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        *value = Some(tag.to_string());
        Ok(())
    }
}

/// Decide the startup locale: saved preference first, then the device
/// language, then English. A failing store is logged and treated as
/// empty.
pub fn preferred_locale(store: &dyn LanguageStore, device_tag: &str) -> Locale {
    match store.load() {
        Ok(Some(saved)) => Locale::from_tag(&saved),
        Ok(None) => Locale::from_tag(device_tag),
        Err(e) => {
            tracing::warn!(error = %e, "language preference read failed, using device language");
            Locale::from_tag(device_tag)
        }
    }
}

/// Persist a language change. A failing store is logged and ignored; the
/// in-memory language stays in effect for this session.
pub fn remember_locale(store: &dyn LanguageStore, locale: Locale) {
    if let Err(e) = store.save(locale.tag()) {
        tracing::warn!(error = %e, locale = locale.tag(), "language preference write failed");
    }
}
