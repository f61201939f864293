//! Display-only translation cache.
//!
//! Populated asynchronously as translations arrive, consulted
//! synchronously at display time, keyed by (language, prayer id).
//! Never persisted: a slow or failing translation can at worst leave
//! the untranslated source text showing, not corrupt stored data. A
//! stale result landing after an edit is overwritten on the next
//! refresh because edits invalidate the id across every language.

use std::collections::HashMap;

use crate::prayer::PrayerRequest;

/// language -> prayer id -> translated text.
#[derive(Debug, Clone, Default)]
pub struct TranslationCache {
    map: HashMap<String, HashMap<String, String>>,
}

impl TranslationCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, language: &str, id: &str) -> Option<&str> {
        self.map.get(language)?.get(id).map(String::as_str)
    }

    pub fn insert(
        &mut self,
        language: impl Into<String>,
        id: impl Into<String>,
        text: impl Into<String>,
    ) {
        self.map
            .entry(language.into())
            .or_default()
            .insert(id.into(), text.into());
    }

    /// Drop every language's entry for `id` (the text changed).
    pub fn invalidate(&mut self, id: &str) {
        for translations in self.map.values_mut() {
            translations.remove(id);
        }
    }

    /// Text to display for `prayer` in `language`: the cached
    /// translation when present, the source text otherwise (always the
    /// source for English).
    pub fn display_text<'a>(&'a self, prayer: &'a PrayerRequest, language: &str) -> &'a str {
        if language == "en" {
            return &prayer.text;
        }
        self.get(language, &prayer.id).unwrap_or(&prayer.text)
    }

    /// The prayers still lacking a translation for `language`.
    pub fn missing<'a>(
        &self,
        language: &str,
        prayers: &'a [PrayerRequest],
    ) -> Vec<&'a PrayerRequest> {
        prayers
            .iter()
            .filter(|p| self.get(language, &p.id).is_none())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prayer(id: &str, text: &str) -> PrayerRequest {
        PrayerRequest {
            id: id.into(),
            text: text.into(),
            is_main: false,
            prayed_count: 0,
        }
    }

    #[test]
    fn uncached_entries_show_source_text() {
        let cache = TranslationCache::new();
        let p = prayer("a", "For Jane.");
        assert_eq!(cache.display_text(&p, "es"), "For Jane.");
    }

    #[test]
    fn english_always_shows_source_text() {
        let mut cache = TranslationCache::new();
        let p = prayer("a", "For Jane.");
        cache.insert("en", "a", "should never be read");
        assert_eq!(cache.display_text(&p, "en"), "For Jane.");
    }

    #[test]
    fn cached_translation_wins() {
        let mut cache = TranslationCache::new();
        let p = prayer("a", "For Jane.");
        cache.insert("es", "a", "Por Jane.");
        assert_eq!(cache.display_text(&p, "es"), "Por Jane.");
    }

    #[test]
    fn invalidate_clears_across_languages() {
        let mut cache = TranslationCache::new();
        cache.insert("es", "a", "Por Jane.");
        cache.insert("fr", "a", "Pour Jane.");
        cache.insert("es", "b", "Otro.");
        cache.invalidate("a");
        assert!(cache.get("es", "a").is_none());
        assert!(cache.get("fr", "a").is_none());
        assert_eq!(cache.get("es", "b"), Some("Otro."));
    }

    #[test]
    fn missing_lists_untranslated_prayers() {
        let mut cache = TranslationCache::new();
        let prayers = vec![prayer("a", "one"), prayer("b", "two")];
        cache.insert("es", "a", "uno");
        let missing = cache.missing("es", &prayers);
        assert_eq!(missing.len(), 1);
        assert_eq!(missing[0].id, "b");
    }
}
