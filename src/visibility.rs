//! Visibility resolution: plain, translated, or scrambled.
//!
//! The resolver is a pure function from (message, known-language state,
//! viewer, settings) to a small descriptive [`Rendering`]. Hosts apply the
//! result to their chat rows, floating bubbles and annotation spans; the
//! engine never touches a rendering surface. Every render recomputes from
//! current state, so a persona swap can move a message from scrambled back
//! to translated with no stored transition history.

use serde::{Deserialize, Serialize};

use crate::config::{OocPolicy, Settings};
use crate::lang::{AlphabetSet, LanguageRegistry, TongueMapping};
use crate::persona::{Role, Viewer};
use crate::scramble::scramble;
use crate::state::KnownLanguageState;

/// Host chat entry classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageKind {
    InCharacter,
    OutOfCharacter,
    Whisper,
    Other,
}

/// A chat entry as the engine sees it: immutable original text, a language
/// tag (empty = unflagged, always visible), and ephemeral per-render flags.
#[derive(Debug, Clone)]
pub struct Message {
    pub id: String,
    pub text: String,
    /// Language key, or empty for an unflagged message.
    pub language: String,
    pub kind: MessageKind,
    /// Arbiter-toggled manual reveal. Default off.
    pub force_reveal: bool,
    /// Last resolved illegibility, re-derived on each refresh pass.
    pub unknown_to_viewer: bool,
}

impl Message {
    pub fn new(
        id: impl Into<String>,
        text: impl Into<String>,
        language: impl Into<String>,
        kind: MessageKind,
    ) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            language: language.into(),
            kind,
            force_reveal: false,
            unknown_to_viewer: false,
        }
    }

    pub fn in_character(
        id: impl Into<String>,
        text: impl Into<String>,
        language: impl Into<String>,
    ) -> Self {
        Self::new(id, text, language, MessageKind::InCharacter)
    }

    pub fn is_ooc(&self) -> bool {
        matches!(
            self.kind,
            MessageKind::OutOfCharacter | MessageKind::Whisper
        )
    }
}

/// How a message renders for the current viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    Plain,
    Translated,
    Scrambled,
}

/// Green/red globe next to a tagged message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndicatorColor {
    Green,
    Red,
}

/// The language indicator affordance. Interactive (click toggles force
/// reveal) only for arbiters; informational for everyone else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indicator {
    pub color: IndicatorColor,
    pub interactive: bool,
}

/// Descriptive render result. The host mutates its surface from this.
#[derive(Debug, Clone)]
pub struct Rendering {
    pub mode: RenderMode,
    pub display_text: String,
    /// Alphabet name from the tongue mapping, for scrambled output.
    pub style_key: Option<String>,
    /// Resolved font style descriptor, for scrambled output.
    pub font: Option<String>,
    /// Source-language display name for a translated-from label.
    pub label: Option<String>,
    pub indicator: Option<Indicator>,
    /// Whether the message is illegible to this viewer before overrides.
    pub unknown: bool,
}

impl Rendering {
    fn plain(display_text: String, indicator: Option<Indicator>) -> Self {
        Self {
            mode: RenderMode::Plain,
            display_text,
            style_key: None,
            font: None,
            label: None,
            indicator,
            unknown: false,
        }
    }
}

/// Everything resolution needs, borrowed from the owning session.
pub struct ResolveContext<'a> {
    pub state: &'a KnownLanguageState,
    pub registry: &'a LanguageRegistry,
    pub alphabets: &'a AlphabetSet,
    pub tongues: &'a TongueMapping,
    pub settings: &'a Settings,
    pub viewer: Viewer,
    /// Whether document surfaces gate on the literate set (ruleset-specific).
    pub literacy_gated: bool,
}

impl ResolveContext<'_> {
    fn scrambled(&self, text: &str, tag: &str, salt: &str, indicator: Option<Indicator>) -> Rendering {
        Rendering {
            mode: RenderMode::Scrambled,
            display_text: scramble(text, salt),
            style_key: self.tongues.alphabet_for(tag).map(str::to_string),
            font: self.alphabets.font_for(self.tongues, tag).map(str::to_string),
            label: None,
            indicator,
            unknown: true,
        }
    }

    fn translation_label(&self, tag: &str) -> Option<String> {
        if self.viewer.is_arbiter() || !self.settings.hide_translation {
            Some(self.registry.label(tag).to_string())
        } else {
            None
        }
    }
}

/// Scramble salt for a message: per-message identity under the unique-salt
/// setting, else the language tag (identical phrases in one language look
/// identical everywhere).
pub fn salt_for<'a>(message: &'a Message, settings: &Settings) -> &'a str {
    if settings.use_unique_salt {
        &message.id
    } else {
        &message.language
    }
}

/// Resolve a chat message for the current viewer.
pub fn resolve(message: &Message, ctx: &ResolveContext) -> Rendering {
    let tag = message.language.as_str();

    // 1. Unflagged messages are always visible, with no indicator.
    if tag.is_empty() {
        return Rendering::plain(message.text.clone(), None);
    }

    let known = ctx.state.knows(tag);
    let indicator = (ctx.viewer.is_arbiter() || !ctx.settings.hide_translation).then(|| Indicator {
        color: if known {
            IndicatorColor::Green
        } else {
            IndicatorColor::Red
        },
        interactive: ctx.viewer.is_arbiter(),
    });

    // 2. Arbiters see the truth unless they opted into obfuscation. The
    // indicator stays informational so they can tell what players see.
    if ctx.viewer.is_arbiter() && !ctx.settings.runify_gm {
        return Rendering::plain(message.text.clone(), indicator);
    }

    // 3. True speech is legible regardless of knowledge.
    if tag == ctx.settings.truespeech {
        return Rendering::plain(message.text.clone(), indicator);
    }

    // 4. Illegible unless the tag or the comprehension override is known.
    let unknown = !known && !ctx.state.knows(&ctx.settings.comprehend_languages);

    // 5. Manual reveal overrides illegibility, with translated labeling.
    if unknown && message.force_reveal {
        return Rendering {
            mode: RenderMode::Translated,
            display_text: message.text.clone(),
            style_key: None,
            font: None,
            label: ctx.translation_label(tag),
            indicator,
            unknown: false,
        };
    }

    // 6. Legible: original text, optionally a translated-from label.
    if !unknown {
        let label = if ctx.settings.display_translated {
            ctx.translation_label(tag)
        } else {
            None
        };
        return Rendering {
            mode: RenderMode::Translated,
            display_text: message.text.clone(),
            style_key: None,
            font: None,
            label,
            indicator,
            unknown: false,
        };
    }

    // 7. Scrambled, styled by the language's alphabet.
    ctx.scrambled(&message.text, tag, salt_for(message, ctx.settings), indicator)
}

/// Resolve one document-annotation span. Literacy-aware rulesets consult the
/// literate set; `container_id` salts the scramble under the unique-salt
/// setting (one salt per document, not per span).
pub fn resolve_span(text: &str, tag: &str, container_id: &str, ctx: &ResolveContext) -> Rendering {
    if tag.is_empty() {
        return Rendering::plain(text.to_string(), None);
    }
    if ctx.viewer.is_arbiter() && !ctx.settings.runify_gm {
        return Rendering::plain(text.to_string(), None);
    }
    if tag == ctx.settings.truespeech {
        return Rendering::plain(text.to_string(), None);
    }
    let legible =
        ctx.state.reads(tag, ctx.literacy_gated) || ctx.state.knows(&ctx.settings.comprehend_languages);
    if legible {
        return Rendering::plain(text.to_string(), None);
    }
    let salt = if ctx.settings.use_unique_salt {
        container_id
    } else {
        tag
    };
    ctx.scrambled(text, tag, salt, None)
}

/// Resolve a floating chat bubble. Returns `None` when the bubble should
/// show the original text untouched, since bubbles have no translated state.
pub fn resolve_bubble(message: &Message, ctx: &ResolveContext) -> Option<Rendering> {
    if message.kind != MessageKind::InCharacter || message.language.is_empty() {
        return None;
    }
    let rendering = resolve(message, ctx);
    match rendering.mode {
        RenderMode::Scrambled => Some(rendering),
        _ => None,
    }
}

/// Whether this viewer may tag a message of this kind with a language.
pub fn may_tag(kind: MessageKind, viewer: &Viewer, policy: OocPolicy) -> bool {
    match kind {
        MessageKind::InCharacter => true,
        MessageKind::OutOfCharacter | MessageKind::Whisper => match policy {
            OocPolicy::Everyone => true,
            OocPolicy::ArbiterOnly => viewer.is_arbiter(),
            OocPolicy::Trusted => matches!(viewer.role, Role::Trusted | Role::Player),
            OocPolicy::Nobody => false,
        },
        MessageKind::Other => false,
    }
}

/// Language tag for a message being created, from the selector's current
/// value. `None` means "store no tag".
pub fn tag_for_new_message(
    kind: MessageKind,
    viewer: &Viewer,
    settings: &Settings,
    selected_language: &str,
) -> Option<String> {
    if selected_language.is_empty() || !may_tag(kind, viewer, settings.allow_ooc) {
        return None;
    }
    Some(selected_language.to_string())
}

/// Toggle the manual reveal flag (arbiter-only). Returns whether the flag
/// changed. The stored original text is never altered.
pub fn toggle_force_reveal(message: &mut Message, viewer: &Viewer) -> bool {
    if !viewer.is_arbiter() {
        return false;
    }
    message.force_reveal = !message.force_reveal;
    true
}
