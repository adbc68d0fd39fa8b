//! Translation store: active language plus dictionary lookups

use shared::translations;
use shared::{Language, Notification};

use crate::error::AppResult;
use crate::render::{RenderTarget, LANGUAGE_BUTTON_ID};
use crate::storage::{SharedStore, PREFERRED_LANGUAGE_KEY};

/// Holds the active language and persists the user's choice
#[derive(Clone)]
pub struct TranslationStore {
    language: Language,
    storage: SharedStore,
}

impl TranslationStore {
    pub fn new(storage: SharedStore, default_language: Language) -> Self {
        Self {
            language: default_language,
            storage,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Apply the saved language preference, if a valid one exists
    pub fn load_preference(&mut self) -> Language {
        match self.storage.get(PREFERRED_LANGUAGE_KEY) {
            Ok(Some(code)) => match Language::from_code(&code) {
                Some(language) => {
                    tracing::debug!("Loaded language preference: {}", language);
                    self.language = language;
                }
                None => tracing::warn!("Ignoring unknown saved language '{}'", code),
            },
            Ok(None) => {}
            Err(e) => tracing::error!("Could not read language preference: {}", e),
        }
        self.language
    }

    /// Resolve a dotted key in the dictionary of `language_code`
    pub fn resolve(&self, language_code: &str, key: &str) -> Option<&'static str> {
        Language::from_code(language_code).and_then(|language| translations::resolve(language, key))
    }

    /// Resolve against the active language, falling back to the key itself
    pub fn translate(&self, key: &str) -> String {
        translations::translate(self.language, key)
    }

    /// List-valued entry in the active language
    pub fn translate_list(&self, key: &str) -> Vec<&'static str> {
        translations::resolve_list(self.language, key).unwrap_or_default()
    }

    /// Switch the active dictionary and persist the choice.
    /// Unknown codes leave everything unchanged and return `false`.
    pub fn set_language(&mut self, code: &str) -> AppResult<bool> {
        let Some(language) = Language::from_code(code) else {
            tracing::debug!("Ignoring unknown language code '{}'", code);
            return Ok(false);
        };

        // persist first so a failed write leaves the active language alone
        self.storage.set(PREFERRED_LANGUAGE_KEY, language.code())?;
        self.language = language;
        tracing::info!("Language set to {}", language);
        Ok(true)
    }

    /// Flip between English and Hindi, persisting the result
    pub fn toggle(&mut self) -> AppResult<Notification> {
        let next = self.language.toggled();
        self.set_language(next.code())?;
        let message = match next {
            Language::English => "Language changed to English",
            Language::Hindi => "भाषा हिंदी में बदल गई",
        };
        Ok(Notification::success(message))
    }

    /// Re-resolve every translatable element from the active dictionary.
    /// Elements whose key does not resolve keep their current content.
    pub fn translate_document(&self, target: &mut dyn RenderTarget) {
        let mut translated = 0usize;
        for element in target.translatable_elements() {
            let Some(text) = translations::resolve(self.language, &element.key) else {
                continue;
            };
            if element.is_input {
                target.set_placeholder(&element.id, text);
            } else {
                target.set_text(&element.id, text);
            }
            translated += 1;
        }

        target.set_text(LANGUAGE_BUTTON_ID, self.language.toggle_label());
        target.set_document_title(&translations::document_title(self.language));
        target.set_document_language(self.language.code());
        tracing::debug!("Translated {} elements to {}", translated, self.language);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::render::MemoryRenderTarget;
    use crate::storage::{KeyValueStore, MemoryStore};
    use std::sync::Arc;

    /// Store whose writes always fail
    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> AppResult<Option<String>> {
            Ok(None)
        }

        fn set(&self, key: &str, _value: &str) -> AppResult<()> {
            Err(AppError::Storage(format!("cannot write {}", key)))
        }
    }

    fn store() -> (TranslationStore, Arc<MemoryStore>) {
        let storage = Arc::new(MemoryStore::new());
        (TranslationStore::new(storage.clone(), Language::English), storage)
    }

    #[test]
    fn test_resolve_by_code() {
        let (translations, _) = store();
        assert_eq!(
            translations.resolve("en", "crop.cropAdded"),
            Some("Crop data added successfully!")
        );
        assert_eq!(translations.resolve("fr", "crop.cropAdded"), None);
        assert_eq!(translations.resolve("en", "nonexistent.key"), None);
    }

    #[test]
    fn test_set_language_persists() {
        let (mut translations, storage) = store();
        assert!(translations.set_language("hi").unwrap());
        assert_eq!(translations.language(), Language::Hindi);
        assert_eq!(storage.get(PREFERRED_LANGUAGE_KEY).unwrap().as_deref(), Some("hi"));
        assert_eq!(translations.translate("common.error"), "त्रुटि");
    }

    #[test]
    fn test_unknown_language_is_noop() {
        let (mut translations, storage) = store();
        assert!(!translations.set_language("fr").unwrap());
        assert_eq!(translations.language(), Language::English);
        assert_eq!(storage.get(PREFERRED_LANGUAGE_KEY).unwrap(), None);
    }

    #[test]
    fn test_failed_persist_keeps_language() {
        let mut translations = TranslationStore::new(Arc::new(ReadOnlyStore), Language::English);
        assert!(translations.set_language("hi").is_err());
        assert_eq!(translations.language(), Language::English);
        assert!(translations.toggle().is_err());
        assert_eq!(translations.translate("common.error"), "Error");
    }

    #[test]
    fn test_load_preference_rejects_garbage() {
        let storage = Arc::new(MemoryStore::with_entries([(PREFERRED_LANGUAGE_KEY, "de")]));
        let mut translations = TranslationStore::new(storage.clone(), Language::English);
        assert_eq!(translations.load_preference(), Language::English);

        storage.set(PREFERRED_LANGUAGE_KEY, "hi").unwrap();
        assert_eq!(translations.load_preference(), Language::Hindi);
    }

    #[test]
    fn test_toggle_message() {
        let (mut translations, _) = store();
        let note = translations.toggle().unwrap();
        assert_eq!(note.message, "भाषा हिंदी में बदल गई");
        let note = translations.toggle().unwrap();
        assert_eq!(note.message, "Language changed to English");
    }

    #[test]
    fn test_translate_document() {
        let (mut translations, _) = store();
        translations.set_language("hi").unwrap();
        let mut target = MemoryRenderTarget::with_page();
        translations.translate_document(&mut target);

        assert_eq!(target.text("nav-home"), Some("होम"));
        assert_eq!(
            target.element("chat-input").unwrap().placeholder,
            "खेती, फसल, मौसम के बारे में पूछें..."
        );
        // unresolved key keeps its previous text
        assert_eq!(target.text("legacy-label"), Some("legacy.missing"));
        assert_eq!(target.text(LANGUAGE_BUTTON_ID), Some("EN"));
        assert_eq!(target.document_language.as_deref(), Some("hi"));
        assert_eq!(
            target.document_title.as_deref(),
            Some("कृषि सहायक - Farmer's Digital Companion")
        );
    }
}
