//! Language registry
//!
//! Thread-safe map from language identifier to definition. The registry
//! is passed explicitly into tokenize/highlight calls; there is no global.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use tracing::trace;

use super::builtin;
use super::language::{LanguageDefinition, LanguageId};

/// Registry of language definitions keyed by identifier
#[derive(Debug, Default)]
pub struct LanguageRegistry {
    languages: Mutex<HashMap<LanguageId, Arc<LanguageDefinition>>>,
}

impl LanguageRegistry {
    /// Create a registry holding the given definitions
    pub fn new(languages: Vec<LanguageDefinition>) -> Self {
        let registry = Self::default();
        for lang in languages {
            registry.register(lang, true);
        }
        registry
    }

    /// Create a registry with the built-in languages
    pub fn with_builtins() -> Self {
        Self::new(builtin::all_languages())
    }

    fn storage(&self) -> MutexGuard<'_, HashMap<LanguageId, Arc<LanguageDefinition>>> {
        // Map operations never panic midway, so a poisoned map is still consistent.
        self.languages.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Add a language definition
    ///
    /// With `overwrite == false` an existing entry is left in place.
    pub fn register(&self, lang: LanguageDefinition, overwrite: bool) {
        let mut languages = self.storage();
        if !overwrite && languages.contains_key(&lang.id) {
            trace!(language = %lang.id, "registration skipped, already present");
            return;
        }
        trace!(language = %lang.id, rules = lang.rules.len(), "registering language");
        languages.insert(lang.id.clone(), Arc::new(lang));
    }

    /// Get a language definition by identifier
    pub fn language(&self, id: &LanguageId) -> Option<Arc<LanguageDefinition>> {
        self.storage().get(id).cloned()
    }

    /// Whether a definition exists for `id`
    pub fn contains(&self, id: &LanguageId) -> bool {
        self.storage().contains_key(id)
    }

    /// All definitions, sorted by identifier
    pub fn all_languages(&self) -> Vec<Arc<LanguageDefinition>> {
        let mut languages: Vec<_> = self.storage().values().cloned().collect();
        languages.sort_by(|a, b| a.id.cmp(&b.id));
        languages
    }
}
