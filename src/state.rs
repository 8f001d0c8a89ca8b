//! Known-language state: what the current viewer's personas speak and read.
//!
//! Rebuilt wholesale from the active persona set on every change, never
//! incrementally patched. Persona counts are single digits, so recomputation
//! is cheap and a full rebuild rules out partial-update bugs.

use std::collections::HashSet;

use tracing::debug;

use crate::lang::LanguageRegistry;
use crate::persona::{Persona, Viewer};
use crate::ruleset::{KnownLanguagePair, RulesetAdapter};

/// The viewer's currently known and literate language keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KnownLanguageState {
    pub known: HashSet<String>,
    pub literate: HashSet<String>,
}

impl KnownLanguageState {
    /// Recompute from the active persona set.
    ///
    /// Extraction runs per persona and results are unioned, so one persona
    /// with unexpected data cannot suppress another's languages. When the
    /// spoken union is empty the role fallback applies: an arbiter is
    /// granted the full registry (moderation convenience), an ordinary
    /// viewer just the resolved default language. The two paths are
    /// deliberately asymmetric. A literate-only persona (read flags but no
    /// speak flags) still gets the fallback for speech; the literate set is
    /// left as extracted.
    pub fn recompute(
        adapter: &dyn RulesetAdapter,
        personas: &[&Persona],
        viewer: &Viewer,
        registry: &LanguageRegistry,
        default_language: &str,
    ) -> Self {
        let mut pair = KnownLanguagePair::default();
        for persona in personas {
            pair.merge(adapter.extract_known_languages(persona));
        }

        if pair.spoken.is_empty() {
            if viewer.is_arbiter() {
                pair.spoken = registry.keys().map(str::to_string).collect();
            } else if !default_language.is_empty() {
                pair.spoken.insert(default_language.to_string());
            }
        }

        debug!(
            known = pair.spoken.len(),
            literate = pair.literate.len(),
            personas = personas.len(),
            "recomputed known-language state"
        );

        Self {
            known: pair.spoken,
            literate: pair.literate,
        }
    }

    pub fn knows(&self, key: &str) -> bool {
        !key.is_empty() && self.known.contains(key)
    }

    /// Whether the viewer can read a language on literacy-gated surfaces.
    /// Rulesets without a separate literate set fall back to speech.
    pub fn reads(&self, key: &str, literacy_gated: bool) -> bool {
        if literacy_gated {
            !key.is_empty() && self.literate.contains(key)
        } else {
            self.knows(key)
        }
    }
}
