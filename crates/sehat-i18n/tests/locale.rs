use sehat_i18n::{
    preferred_locale, remember_locale, LanguageStore, Locale, MemoryStore, StoreError, Translator,
};

#[test]
fn english_table_resolves_engine_keys() {
    let t = Translator::new(Locale::En);
    assert_eq!(t.resolve("fever"), "Fever");
    assert_eq!(t.resolve("1_3_days"), "1-3 days");
    assert_eq!(t.resolve("common_cold"), "Common Cold");
    assert_eq!(t.resolve("get_rest"), "Get plenty of rest");
}

#[test]
fn punjabi_overlays_english() {
    let t = Translator::new(Locale::Pa);
    assert_eq!(t.resolve("fever"), "ਬੁਖਾਰ");
    // Not yet translated: falls back to the English text.
    assert_eq!(
        t.resolve("existing_conditions"),
        "Do you have any pre-existing medical conditions?"
    );
}

#[test]
fn unknown_keys_resolve_to_themselves() {
    let t = Translator::new(Locale::Pa);
    assert_eq!(t.resolve("not_a_real_key"), "not_a_real_key");
}

#[test]
fn locale_tags_round_trip() {
    assert_eq!(Locale::from_tag("pa"), Locale::Pa);
    assert_eq!(Locale::from_tag("en"), Locale::En);
    assert_eq!(Locale::from_tag("fr"), Locale::En);
    assert_eq!(Locale::Pa.tag(), "pa");
}

#[test]
fn saved_preference_wins_over_device_language() {
    let store = MemoryStore::default();
    store.save("en").unwrap();
    assert_eq!(preferred_locale(&store, "pa"), Locale::En);
}

#[test]
fn device_language_is_used_when_nothing_is_saved() {
    let store = MemoryStore::default();
    assert_eq!(preferred_locale(&store, "pa"), Locale::Pa);
    assert_eq!(preferred_locale(&store, "de"), Locale::En);
}

#[test]
fn remember_then_prefer_round_trips() {
    let store = MemoryStore::default();
    remember_locale(&store, Locale::Pa);
    assert_eq!(preferred_locale(&store, "en"), Locale::Pa);
}

struct BrokenStore;

impl LanguageStore for BrokenStore {
    fn load(&self) -> Result<Option<String>, StoreError> {
        Err(StoreError::Unavailable("storage offline".into()))
    }

    fn save(&self, _tag: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("storage offline".into()))
    }
}

#[test]
fn store_failures_are_swallowed() {
    // Reads fall back to the device language; writes are fire-and-forget.
    assert_eq!(preferred_locale(&BrokenStore, "pa"), Locale::Pa);
    remember_locale(&BrokenStore, Locale::En);
}
