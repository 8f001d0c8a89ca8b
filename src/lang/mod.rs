//! Language registry and alphabet/tongue description handling.
//!
//! This module is the single source of truth for which languages exist in a
//! session and how obfuscated text is styled per language.
//!
//! - `registry`: canonical key -> display-name mapping, key normalization,
//!   and the default-language fallback chain
//! - `description`: bundled per-ruleset alphabet/tongue description files and
//!   their merge with persisted user customization

mod description;
mod registry;

pub use description::{AlphabetSet, RulesetDescription, TongueMapping, DEFAULT_TONGUE};
pub use registry::{normalize_key, resolve_default_language, Language, LanguageRegistry};
