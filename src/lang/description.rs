//! Bundled per-ruleset alphabet and tongue descriptions.
//!
//! Each supported ruleset family ships a JSON description with three parts:
//! `alphabets` (named rendering styles: a font descriptor with a relative
//! size), `tongues` (language key -> alphabet name, with a required
//! `_default` entry), and `fonts` (family names a host may register). The
//! description is merged with persisted user customization on session start;
//! bundled entries never overwrite existing user keys unless the
//! replace-languages mode is active.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{EngineError, Result};

/// Tongue key used when a language has no explicit alphabet assignment.
pub const DEFAULT_TONGUE: &str = "_default";

/// Named rendering styles for obfuscated text, e.g. `"dethek" -> "120% Dethek"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AlphabetSet {
    styles: HashMap<String, String>,
}

impl AlphabetSet {
    pub fn from_map(styles: HashMap<String, String>) -> Self {
        Self { styles }
    }

    pub fn style(&self, alphabet: &str) -> Option<&str> {
        self.styles.get(alphabet).map(String::as_str)
    }

    pub fn insert(&mut self, alphabet: impl Into<String>, style: impl Into<String>) {
        self.styles.insert(alphabet.into(), style.into());
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Font style for a language: its mapped alphabet when that alphabet is
    /// defined, else whatever the `_default` tongue maps to.
    pub fn font_for(&self, tongues: &TongueMapping, lang: &str) -> Option<&str> {
        tongues
            .explicit(lang)
            .and_then(|alphabet| self.style(alphabet))
            .or_else(|| tongues.default_alphabet().and_then(|a| self.style(a)))
    }

    /// Persisted-document view (the `Alphabets` registry document).
    pub fn as_map(&self) -> &HashMap<String, String> {
        &self.styles
    }
}

/// Assignment of each language key to an alphabet name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TongueMapping {
    tongues: HashMap<String, String>,
}

impl TongueMapping {
    pub fn from_map(tongues: HashMap<String, String>) -> Self {
        Self { tongues }
    }

    /// Explicit alphabet assignment for a language, without the `_default`
    /// fallback.
    pub fn explicit(&self, lang: &str) -> Option<&str> {
        self.tongues.get(lang).map(String::as_str)
    }

    /// Alphabet for a language, falling back to the `_default` assignment.
    pub fn alphabet_for(&self, lang: &str) -> Option<&str> {
        self.explicit(lang).or_else(|| self.default_alphabet())
    }

    pub fn default_alphabet(&self) -> Option<&str> {
        self.tongues.get(DEFAULT_TONGUE).map(String::as_str)
    }

    pub fn contains(&self, lang: &str) -> bool {
        self.tongues.contains_key(lang)
    }

    pub fn assign(&mut self, lang: impl Into<String>, alphabet: impl Into<String>) {
        self.tongues.insert(lang.into(), alphabet.into());
    }

    /// Map a newly injected language to the `_default` alphabet, leaving any
    /// existing assignment alone.
    pub fn assign_default(&mut self, lang: &str) {
        if self.contains(lang) {
            return;
        }
        if let Some(alphabet) = self.default_alphabet().map(str::to_string) {
            self.tongues.insert(lang.to_string(), alphabet);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tongues.is_empty()
    }

    /// Persisted-document view (the `Languages` registry document).
    pub fn as_map(&self) -> &HashMap<String, String> {
        &self.tongues
    }
}

/// A ruleset's bundled alphabet/tongue description.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RulesetDescription {
    pub alphabets: AlphabetSet,
    pub tongues: TongueMapping,
    /// Font family names a host may register for drawing surfaces.
    #[serde(default)]
    pub fonts: Vec<String>,
}

/// Bundled description files, keyed by file stem. Ruleset ids map onto these
/// in [`RulesetDescription::bundled`].
const BUNDLED: &[(&str, &str)] = &[
    ("generic", include_str!("../../descriptions/generic.json")),
    ("aria", include_str!("../../descriptions/aria.json")),
    ("dcc", include_str!("../../descriptions/dcc.json")),
    ("dnd5e", include_str!("../../descriptions/dnd5e.json")),
    ("demonlord", include_str!("../../descriptions/demonlord.json")),
    ("dsa5", include_str!("../../descriptions/dsa5.json")),
    ("golarion", include_str!("../../descriptions/golarion.json")),
    ("ose", include_str!("../../descriptions/ose.json")),
    ("starfinder", include_str!("../../descriptions/starfinder.json")),
    ("tormenta20", include_str!("../../descriptions/tormenta20.json")),
    ("wfrp", include_str!("../../descriptions/wfrp.json")),
];

/// Which bundled file a ruleset id loads.
fn description_file(ruleset_id: &str) -> &'static str {
    match ruleset_id {
        "aria" => "aria",
        "dcc" => "dcc",
        "demonlord" => "demonlord",
        "dsa5" => "dsa5",
        "ose" => "ose",
        "tormenta20" => "tormenta20",
        // The 5e family shares one alphabet table.
        "dnd5e" | "d35e" | "kryx_rpg" | "sw5e" => "dnd5e",
        "pf1" | "pf2e" => "golarion",
        "wfrp4e" => "wfrp",
        "sfrpg" => "starfinder",
        _ => "generic",
    }
}

impl RulesetDescription {
    /// Load the bundled description for a ruleset id. Unrecognized rulesets
    /// get the generic description.
    pub fn bundled(ruleset_id: &str) -> Result<Self> {
        let file = description_file(ruleset_id);
        let raw = BUNDLED
            .iter()
            .find(|(stem, _)| *stem == file)
            .map(|(_, raw)| *raw)
            .ok_or_else(|| EngineError::UnknownDescription(ruleset_id.to_string()))?;
        let description = Self::parse(raw)?;
        info!(ruleset = ruleset_id, file, "loaded language description");
        Ok(description)
    }

    /// Load a description from a world-local override file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| EngineError::DescriptionRead {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&raw)
    }

    fn parse(raw: &str) -> Result<Self> {
        let description: RulesetDescription = serde_json::from_str(raw)?;
        if description.tongues.default_alphabet().is_none() {
            return Err(EngineError::MissingDefaultTongue);
        }
        Ok(description)
    }

    /// Merge the bundled tongues with a persisted user document.
    ///
    /// User keys always win. With `replace` set, bundled entries are dropped
    /// entirely (except the `_default` fallback, which must survive) and the
    /// installation supplies its own list.
    pub fn merge_saved(&self, saved: &HashMap<String, String>, replace: bool) -> TongueMapping {
        let mut merged = if saved.is_empty() {
            self.tongues.clone()
        } else {
            TongueMapping::from_map(saved.clone())
        };
        if !replace {
            for (lang, alphabet) in self.tongues.as_map() {
                if !merged.contains(lang) {
                    merged.assign(lang.clone(), alphabet.clone());
                }
            }
        } else if merged.default_alphabet().is_none() {
            if let Some(alphabet) = self.tongues.default_alphabet() {
                merged.assign(DEFAULT_TONGUE, alphabet);
            }
        }
        merged
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn sample() -> RulesetDescription {
        serde_json::from_str(
            r#"{
                "alphabets": {
                    "common": "130% Thorass",
                    "runic": "120% Dethek"
                },
                "tongues": {
                    "_default": "common",
                    "dwarvish": "runic"
                },
                "fonts": ["Thorass", "Dethek"]
            }"#,
        )
        .expect("sample description")
    }

    // ==================== Parsing Tests ====================

    #[test]
    fn test_bundled_generic_parses() {
        let description = RulesetDescription::bundled("generic").expect("bundled generic");
        assert!(description.tongues.default_alphabet().is_some());
        assert!(!description.alphabets.is_empty());
    }

    #[test]
    fn test_every_bundled_description_parses_with_default_tongue() {
        for (stem, raw) in BUNDLED {
            let description: RulesetDescription =
                serde_json::from_str(raw).unwrap_or_else(|e| panic!("{stem}: {e}"));
            assert!(
                description.tongues.default_alphabet().is_some(),
                "{stem} lacks _default"
            );
        }
    }

    #[test]
    fn test_unknown_ruleset_maps_to_generic() {
        assert_eq!(description_file("homebrew-system"), "generic");
        assert_eq!(description_file("pf2e"), "golarion");
        assert_eq!(description_file("sw5e"), "dnd5e");
        assert_eq!(description_file("wfrp4e"), "wfrp");
    }

    #[test]
    fn test_self_named_rulesets_map_to_their_own_file() {
        for id in ["aria", "dcc", "demonlord", "dsa5", "ose", "tormenta20"] {
            assert_eq!(description_file(id), id);
            assert!(RulesetDescription::bundled(id).is_ok());
        }
    }

    #[test]
    fn test_missing_default_tongue_rejected() {
        let err = RulesetDescription::parse(r#"{"alphabets":{},"tongues":{"x":"y"}}"#)
            .expect_err("should reject");
        assert!(matches!(err, EngineError::MissingDefaultTongue));
    }

    #[test]
    fn test_from_path_reads_override_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(
            file,
            r#"{{"alphabets":{{"a":"100% A"}},"tongues":{{"_default":"a"}}}}"#
        )
        .expect("write");

        let description = RulesetDescription::from_path(file.path()).expect("load");
        assert_eq!(description.tongues.default_alphabet(), Some("a"));
    }

    #[test]
    fn test_from_path_missing_file() {
        let err = RulesetDescription::from_path(Path::new("/nonexistent/desc.json"))
            .expect_err("missing file");
        assert!(matches!(err, EngineError::DescriptionRead { .. }));
    }

    // ==================== Font Fallback Tests ====================

    #[test]
    fn test_font_for_explicit_tongue() {
        let description = sample();
        assert_eq!(
            description
                .alphabets
                .font_for(&description.tongues, "dwarvish"),
            Some("120% Dethek")
        );
    }

    #[test]
    fn test_font_for_unmapped_language_uses_default() {
        let description = sample();
        assert_eq!(
            description.alphabets.font_for(&description.tongues, "ignan"),
            Some("130% Thorass")
        );
    }

    #[test]
    fn test_font_for_dangling_alphabet_uses_default() {
        let mut description = sample();
        description.tongues.assign("gnomish", "missing-alphabet");
        assert_eq!(
            description
                .alphabets
                .font_for(&description.tongues, "gnomish"),
            Some("130% Thorass")
        );
    }

    // ==================== Merge Tests ====================

    #[test]
    fn test_merge_saved_user_keys_win() {
        let description = sample();
        let saved: HashMap<String, String> = [
            ("_default".to_string(), "runic".to_string()),
            ("dwarvish".to_string(), "common".to_string()),
        ]
        .into();

        let merged = description.merge_saved(&saved, false);
        assert_eq!(merged.explicit("dwarvish"), Some("common"));
        assert_eq!(merged.default_alphabet(), Some("runic"));
    }

    #[test]
    fn test_merge_saved_fills_missing_bundled_entries() {
        let description = sample();
        let saved: HashMap<String, String> =
            [("gnomish".to_string(), "runic".to_string())].into();

        let merged = description.merge_saved(&saved, false);
        assert_eq!(merged.explicit("gnomish"), Some("runic"));
        assert_eq!(merged.explicit("dwarvish"), Some("runic"));
        assert_eq!(merged.default_alphabet(), Some("common"));
    }

    #[test]
    fn test_merge_saved_replace_drops_bundled() {
        let description = sample();
        let saved: HashMap<String, String> =
            [("gnomish".to_string(), "runic".to_string())].into();

        let merged = description.merge_saved(&saved, true);
        assert!(!merged.contains("dwarvish"));
        assert_eq!(merged.explicit("gnomish"), Some("runic"));
        // The fallback tongue survives replacement.
        assert_eq!(merged.default_alphabet(), Some("common"));
    }

    #[test]
    fn test_merge_saved_empty_uses_bundled() {
        let description = sample();
        let merged = description.merge_saved(&HashMap::new(), false);
        assert_eq!(merged, description.tongues);
    }

    #[test]
    fn test_assign_default_for_new_language() {
        let mut tongues = sample().tongues;
        tongues.assign_default("gnomish");
        assert_eq!(tongues.explicit("gnomish"), Some("common"));
        // Existing assignments are left alone.
        tongues.assign_default("dwarvish");
        assert_eq!(tongues.explicit("dwarvish"), Some("runic"));
    }
}
