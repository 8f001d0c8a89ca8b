use serde::{Deserialize, Serialize};

use crate::lang::normalize_key;

/// Who may tag out-of-character messages with a language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OocPolicy {
    /// Everyone may tag OOC messages.
    #[serde(rename = "a")]
    Everyone,
    /// Only the arbiter may tag OOC messages.
    #[serde(rename = "b")]
    ArbiterOnly,
    /// Trusted participants and ordinary players may tag OOC messages.
    #[serde(rename = "c")]
    Trusted,
    /// Nobody may tag OOC messages.
    #[serde(rename = "d")]
    Nobody,
}

impl OocPolicy {
    /// Parse the single-letter policy code stored by the settings UI.
    /// Unrecognized codes fall back to arbiter-only.
    pub fn from_code(code: &str) -> Self {
        match code {
            "a" => OocPolicy::Everyone,
            "c" => OocPolicy::Trusted,
            "d" => OocPolicy::Nobody,
            _ => OocPolicy::ArbiterOnly,
        }
    }
}

/// Engine configuration, mirroring the host's persisted key-value settings.
///
/// The host owns storage; this struct is the normalized in-memory view the
/// engine consumes. Override language keys are normalized on ingest via
/// [`Settings::normalized`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Suppress built-in ruleset languages; only custom languages apply.
    pub replace_languages: bool,

    /// Preferred fallback language (key or display name, matched
    /// case-insensitively).
    pub default_language: String,

    /// Scramble salt is per-message identity instead of per-language.
    pub use_unique_salt: bool,

    /// Comma-separated extra languages merged into the registry.
    pub custom_languages: String,

    /// Knowing this language implies understanding everything.
    pub comprehend_languages: String,

    /// Messages tagged with this language are always legible.
    pub truespeech: String,

    /// Show the original text alongside a translated-from label when legible.
    pub display_translated: bool,

    /// Suppress the translated-from label for non-arbiter viewers.
    pub hide_translation: bool,

    /// Who may tag out-of-character messages with a language.
    pub allow_ooc: OocPolicy,

    /// Whether arbiter-role viewers are also subject to obfuscation.
    pub runify_gm: bool,

    /// Expose alphabet fonts to the host for registration elsewhere.
    pub export_fonts: bool,

    /// Debounce delay for known-language recomputation, in milliseconds.
    pub refresh_delay_ms: u64,

    /// How many recent messages a refresh pass re-evaluates.
    pub refresh_window: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            replace_languages: false,
            default_language: String::new(),
            use_unique_salt: false,
            custom_languages: String::new(),
            comprehend_languages: String::new(),
            truespeech: String::new(),
            display_translated: true,
            hide_translation: false,
            allow_ooc: OocPolicy::ArbiterOnly,
            runify_gm: true,
            export_fonts: true,
            refresh_delay_ms: 500,
            refresh_window: 100,
        }
    }
}

impl Settings {
    /// Return a copy with the override language keys normalized the same way
    /// registry keys are (trimmed, lowercased, punctuation-normalized).
    pub fn normalized(mut self) -> Self {
        self.comprehend_languages = normalize_key(&self.comprehend_languages);
        self.truespeech = normalize_key(&self.truespeech);
        self
    }
}
