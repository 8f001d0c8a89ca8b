//! Language registry: single source of truth for the session's languages.
//!
//! Keys are canonical (lowercase, punctuation-normalized) and unique;
//! display names need not be. Insertion order is preserved because the
//! default-language fallback chain ends at the first-registered key.

use serde::{Deserialize, Serialize};

use crate::config::Settings;

/// Canonicalize a raw language name into a registry key.
///
/// Lowercased, trimmed, with spaces adjacent to apostrophes collapsed to an
/// underscore (so "Thieves' Cant" and "thieves'_cant" meet in the middle).
pub fn normalize_key(raw: &str) -> String {
    raw.trim().to_lowercase().replace(" '", "_")
}

/// A canonical language key plus its human-readable display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    pub key: String,
    pub display_name: String,
}

/// Ordered key -> display-name registry for the active ruleset.
///
/// Rebuilt wholesale on setup and on settings changes, never patched in
/// place beyond custom-language injection.
#[derive(Debug, Clone, Default)]
pub struct LanguageRegistry {
    languages: Vec<Language>,
}

impl LanguageRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from (key, display name) pairs, normalizing keys and
    /// collapsing duplicates (first registration wins).
    pub fn from_pairs<I, K, N>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, N)>,
        K: AsRef<str>,
        N: Into<String>,
    {
        let mut registry = Self::new();
        for (key, name) in pairs {
            registry.insert(key.as_ref(), name);
        }
        registry
    }

    /// Register a language. A key already present is left untouched.
    pub fn insert(&mut self, key: &str, display_name: impl Into<String>) {
        let key = normalize_key(key);
        if key.is_empty() || self.contains(&key) {
            return;
        }
        self.languages.push(Language {
            key,
            display_name: display_name.into(),
        });
    }

    pub fn contains(&self, key: &str) -> bool {
        self.languages.iter().any(|lang| lang.key == key)
    }

    /// Display name for a key, if registered.
    pub fn display_name(&self, key: &str) -> Option<&str> {
        self.languages
            .iter()
            .find(|lang| lang.key == key)
            .map(|lang| lang.display_name.as_str())
    }

    /// Display name with the raw key as fallback. A message tagged with an
    /// unregistered key still renders, labeled by its own key.
    pub fn label<'a>(&'a self, key: &'a str) -> &'a str {
        self.display_name(key).unwrap_or(key)
    }

    /// Find the canonical key matching `needle` case-insensitively, by key
    /// or by display name.
    pub fn resolve_key(&self, needle: &str) -> Option<&str> {
        let needle = needle.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }
        self.languages
            .iter()
            .find(|lang| {
                lang.key == needle || lang.display_name.to_lowercase() == needle
            })
            .map(|lang| lang.key.as_str())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.languages.iter().map(|lang| lang.key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Language> {
        self.languages.iter()
    }

    pub fn first_key(&self) -> Option<&str> {
        self.languages.first().map(|lang| lang.key.as_str())
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}

/// Historical per-ruleset defaults, applied when the user has not configured
/// a usable default language. Installations migrating rulesets rely on these
/// so that existing messages do not all turn foreign overnight.
const HISTORICAL_DEFAULTS: &[(&str, &str)] = &[
    ("aria", "Common"),
    ("dnd5e", "Common"),
    ("dcc", "Common"),
    ("dsa5", "Garethi"),
    ("ose", "Common"),
    ("pf1", "Common"),
    ("pf2e", "common"),
    ("sw5e", "Basic"),
    ("tormenta20", "Comum"),
    ("wfrp4e", "Reikspiel"),
];

/// Resolve the default language key for a session. Total: always returns a
/// string, possibly empty, and never errors.
///
/// Fallback chain, in order:
/// 1. user-configured default matching a key or display name
/// 2. the ruleset's historical default (skipped under `replace_languages`)
/// 3. a literal `common` key
/// 4. the first-registered key, else `""`
pub fn resolve_default_language(
    registry: &LanguageRegistry,
    ruleset_id: &str,
    settings: &Settings,
) -> String {
    if !settings.default_language.is_empty() {
        if let Some(key) = registry.resolve_key(&settings.default_language) {
            return key.to_string();
        }
        // Configured default matches nothing registered: treat as absent.
    }

    if !settings.replace_languages {
        if let Some((_, name)) = HISTORICAL_DEFAULTS
            .iter()
            .find(|(id, _)| *id == ruleset_id)
        {
            if let Some(key) = registry.resolve_key(name) {
                return key.to_string();
            }
        }
    }

    if registry.contains("common") {
        return "common".to_string();
    }

    registry.first_key().unwrap_or_default().to_string()
}
