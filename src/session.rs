//! The owned session context tying the engine together.
//!
//! One `Session` per viewing user: it owns the registry, alphabet/tongue
//! mapping, settings, the ruleset adapter strategy and the known-language
//! state. Initialization order matters (the description and registry are
//! loaded before any resolution happens) and rebuilds go through explicit
//! entry points instead of ambient global mutation.

use std::collections::HashMap;

use tracing::{error, info};

use crate::config::Settings;
use crate::host::Host;
use crate::lang::{
    normalize_key, resolve_default_language, AlphabetSet, LanguageRegistry, RulesetDescription,
    TongueMapping, DEFAULT_TONGUE,
};
use crate::persona::{Persona, Viewer};
use crate::refresh::RefreshOutcome;
use crate::ruleset::{adapter_for, RulesetAdapter};
use crate::state::KnownLanguageState;
use crate::visibility::{
    self, Message, MessageKind, Rendering, ResolveContext,
};

/// Minimal styling available before (or instead of) a description load.
fn fallback_description() -> RulesetDescription {
    let mut alphabets = AlphabetSet::default();
    alphabets.insert("common", "120% Dethek");
    let mut tongues = TongueMapping::default();
    tongues.assign(DEFAULT_TONGUE, "common");
    RulesetDescription {
        alphabets,
        tongues,
        fonts: vec!["Dethek".to_string()],
    }
}

pub struct Session {
    ruleset_id: String,
    settings: Settings,
    viewer: Viewer,
    adapter: Box<dyn RulesetAdapter>,
    description: RulesetDescription,
    alphabets: AlphabetSet,
    tongues: TongueMapping,
    registry: LanguageRegistry,
    state: KnownLanguageState,
    /// The viewer's sticky language-selector choice.
    last_selection: Option<String>,
}

impl Session {
    /// Build a session: load the ruleset description, select the adapter
    /// strategy, discover the language set and compute the initial
    /// known-language state (no personas active yet).
    ///
    /// A missing or malformed description is logged and replaced by a
    /// minimal fallback; setup never fails outright.
    pub async fn new(
        ruleset_id: &str,
        settings: Settings,
        viewer: Viewer,
        host: &dyn Host,
    ) -> Self {
        let settings = settings.normalized();
        let description = match RulesetDescription::bundled(ruleset_id) {
            Ok(description) => description,
            Err(e) => {
                error!("failed to load description for '{}': {}", ruleset_id, e);
                fallback_description()
            }
        };
        let adapter = adapter_for(ruleset_id, host);

        let mut session = Self {
            ruleset_id: ruleset_id.to_string(),
            settings,
            viewer,
            adapter,
            alphabets: description.alphabets.clone(),
            tongues: description.tongues.clone(),
            description,
            registry: LanguageRegistry::new(),
            state: KnownLanguageState::default(),
            last_selection: None,
        };
        session.populate_registry(host).await;
        session.rebuild_known_languages(&[]);
        info!(
            ruleset = ruleset_id,
            languages = session.registry.len(),
            "session ready"
        );
        session
    }

    // ==================== Registry lifecycle ====================

    /// Rebuild the registry: the adapter's authoritative language set
    /// (suppressed entirely under `replace_languages`) plus custom
    /// languages. Custom entries also get a `_default` tongue assignment.
    pub async fn populate_registry(&mut self, host: &dyn Host) {
        let mut registry = LanguageRegistry::new();
        if !self.settings.replace_languages {
            for language in self.adapter.system_languages(host).await {
                registry.insert(&language.key, language.display_name);
            }
        }
        self.registry = registry;
        self.inject_custom_languages();
    }

    fn inject_custom_languages(&mut self) {
        let raw = self.settings.custom_languages.clone();
        for name in raw.split(',') {
            let name = name.trim();
            if name.is_empty() {
                continue;
            }
            let key = normalize_key(name);
            self.registry.insert(&key, name);
            self.tongues.assign_default(&key);
        }
    }

    /// Replace the custom-languages setting and re-inject. Returns the
    /// normalized value for the host to persist.
    pub fn set_custom_languages(&mut self, raw: &str) -> String {
        let normalized = raw
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .collect::<Vec<_>>()
            .join(", ");
        self.settings.custom_languages = normalized.clone();
        self.inject_custom_languages();
        normalized
    }

    /// Apply the persisted `Alphabets`/`Languages` registry documents saved
    /// by a previous session. Bundled entries never overwrite user keys
    /// unless `replace_languages` is active.
    pub fn apply_saved_documents(
        &mut self,
        saved_alphabets: &HashMap<String, String>,
        saved_tongues: &HashMap<String, String>,
    ) {
        for (name, style) in saved_alphabets {
            self.alphabets.insert(name.clone(), style.clone());
        }
        self.tongues = self
            .description
            .merge_saved(saved_tongues, self.settings.replace_languages);
        self.inject_custom_languages();
    }

    /// The registry documents to persist at session start (the
    /// `Alphabets` and `Languages` key-value documents).
    pub fn saved_documents(&self) -> (HashMap<String, String>, HashMap<String, String>) {
        (self.alphabets.as_map().clone(), self.tongues.as_map().clone())
    }

    /// Font families for hosts that register fonts, when exporting is on.
    pub fn export_fonts(&self) -> &[String] {
        if self.settings.export_fonts {
            &self.description.fonts
        } else {
            &[]
        }
    }

    // ==================== Settings ====================

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Swap in new settings (normalized on ingest). The caller re-populates
    /// the registry afterwards if `replace_languages` or the custom list
    /// changed; override keys take effect immediately.
    pub fn set_settings(&mut self, settings: Settings) {
        self.settings = settings.normalized();
    }

    pub fn ruleset_id(&self) -> &str {
        &self.ruleset_id
    }

    pub fn viewer(&self) -> Viewer {
        self.viewer
    }

    pub fn set_viewer(&mut self, viewer: Viewer) {
        self.viewer = viewer;
    }

    pub fn registry(&self) -> &LanguageRegistry {
        &self.registry
    }

    pub fn state(&self) -> &KnownLanguageState {
        &self.state
    }

    /// Resolved default language key for this session (possibly empty).
    pub fn default_language(&self) -> String {
        resolve_default_language(&self.registry, &self.ruleset_id, &self.settings)
    }

    // ==================== Known-language state ====================

    /// Rebuild the known-language state from the active persona set.
    /// Called directly for a synchronous rebuild; the debounced path in
    /// [`crate::refresh`] lands here too.
    pub fn rebuild_known_languages(&mut self, active: &[&Persona]) {
        self.state = KnownLanguageState::recompute(
            self.adapter.as_ref(),
            active,
            &self.viewer,
            &self.registry,
            &self.default_language(),
        );
    }

    // ==================== Resolution ====================

    fn resolve_context(&self) -> ResolveContext<'_> {
        ResolveContext {
            state: &self.state,
            registry: &self.registry,
            alphabets: &self.alphabets,
            tongues: &self.tongues,
            settings: &self.settings,
            viewer: self.viewer,
            literacy_gated: self.adapter.tracks_literacy(),
        }
    }

    /// Resolve a chat message for this viewer.
    pub fn resolve(&self, message: &Message) -> Rendering {
        visibility::resolve(message, &self.resolve_context())
    }

    /// Resolve a document-annotation span.
    pub fn resolve_span(&self, text: &str, tag: &str, container_id: &str) -> Rendering {
        visibility::resolve_span(text, tag, container_id, &self.resolve_context())
    }

    /// Resolve a floating bubble; `None` leaves the bubble untouched.
    pub fn resolve_bubble(&self, message: &Message) -> Option<Rendering> {
        visibility::resolve_bubble(message, &self.resolve_context())
    }

    /// Toggle a message's manual reveal flag (arbiter-only).
    pub fn toggle_force_reveal(&self, message: &mut Message) -> bool {
        visibility::toggle_force_reveal(message, &self.viewer)
    }

    /// Language tag for a message being created from the selector value.
    pub fn tag_for_new_message(&self, kind: MessageKind, selected: &str) -> Option<String> {
        visibility::tag_for_new_message(kind, &self.viewer, &self.settings, selected)
    }

    /// Font style for a language tag, via the tongue mapping.
    pub fn font_style(&self, tag: &str) -> Option<&str> {
        self.alphabets.font_for(&self.tongues, tag)
    }

    /// Re-evaluate the most recent messages (bounded window, most recent
    /// first), updating each message's ephemeral illegibility flag.
    pub fn refresh_messages(&self, messages: &mut [Message]) -> RefreshOutcome {
        let mut outcome = RefreshOutcome::default();
        for message in messages.iter_mut().rev().take(self.settings.refresh_window) {
            if message.kind == MessageKind::Other {
                continue;
            }
            outcome.examined += 1;
            let rendering = self.resolve(message);
            if rendering.unknown != message.unknown_to_viewer {
                message.unknown_to_viewer = rendering.unknown;
                outcome.changed.push(message.id.clone());
            }
        }
        outcome
    }

    // ==================== Language selector ====================

    /// Options for the chat language selector: the viewer's known
    /// languages, with the comprehension override elided (it is not a
    /// language anyone speaks) unless it doubles as the true-speech key.
    pub fn selector_options(&self) -> Vec<(String, String)> {
        let mut keys: Vec<&String> = self.state.known.iter().collect();
        keys.sort();
        keys.into_iter()
            .filter(|key| {
                key.as_str() == self.settings.truespeech
                    || key.as_str() != self.settings.comprehend_languages
            })
            .map(|key| (key.clone(), self.registry.label(key).to_string()))
            .collect()
    }

    /// Remember the viewer's selector choice.
    pub fn select_language(&mut self, key: &str) {
        self.last_selection = Some(key.to_string());
    }

    /// The selector value to show: last choice, else the previous control
    /// value, else the default language, downgraded to something actually
    /// known when the remembered choice no longer is.
    pub fn current_selection(&self, previous: Option<&str>) -> String {
        let default = self.default_language();
        let candidate = self
            .last_selection
            .as_deref()
            .or(previous)
            .unwrap_or(&default)
            .to_string();
        if self.state.knows(&candidate) {
            return candidate;
        }
        if self.state.knows(&default) {
            return default;
        }
        let mut keys: Vec<&String> = self.state.known.iter().collect();
        keys.sort();
        keys.first().map(|key| key.to_string()).unwrap_or_default()
    }

    /// Languages offered in a document editor: everything for an arbiter,
    /// known plus literate for everyone else, override keys elided.
    pub fn annotation_languages(&self) -> Vec<(String, String)> {
        let mut keys: Vec<String> = if self.viewer.is_arbiter() {
            self.registry.keys().map(str::to_string).collect()
        } else {
            let mut keys: Vec<String> = self
                .state
                .known
                .union(&self.state.literate)
                .cloned()
                .collect();
            keys.sort();
            keys
        };
        keys.retain(|key| {
            key != &self.settings.truespeech
                && (key != &self.settings.comprehend_languages
                    || self.settings.comprehend_languages == self.settings.truespeech)
        });
        keys.into_iter()
            .map(|key| {
                let label = self.registry.label(&key).to_string();
                (key, label)
            })
            .collect()
    }
}
