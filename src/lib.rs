//! Per-viewer language visibility and deterministic text obfuscation for
//! tabletop chat.
//!
//! A message tagged with an in-fiction language renders differently per
//! viewer: plain for the unflagged, translated (with an optional
//! translated-from label) for those whose personas know the language, and
//! deterministically scrambled runes for everyone else. The scramble is a
//! seeded pseudo-random substitution, so the same phrase in the same
//! language looks identical on every client and across sessions without any
//! shared state.
//!
//! The engine is host-agnostic: it consumes persona sheets, chat messages
//! and settings through plain data types, asks the host for localization and
//! catalog lookups through the [`host::Host`] trait, and hands back
//! descriptive [`visibility::Rendering`] values instead of touching any
//! rendering surface itself. [`session::Session`] ties the pieces together
//! for one viewing user.

pub mod config;
pub mod error;
pub mod host;
pub mod lang;
pub mod persona;
pub mod refresh;
pub mod ruleset;
pub mod scramble;
pub mod session;
pub mod state;
pub mod visibility;

pub use config::{OocPolicy, Settings};
pub use error::{EngineError, Result};
pub use host::{Host, NullHost};
pub use lang::{Language, LanguageRegistry, RulesetDescription};
pub use persona::{Persona, PersonaItem, Role, Viewer};
pub use refresh::{RefreshOutcome, RefreshScheduler};
pub use session::Session;
pub use visibility::{Message, MessageKind, RenderMode, Rendering};
