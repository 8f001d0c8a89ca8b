//! Ruleset adapters: per-game-system extraction of language knowledge.
//!
//! Each supported ruleset stores languages on a persona differently: a
//! structured trait list, inventory items named "Language (X)", a delimited
//! free-text field, or a document catalog. One adapter per ruleset turns that
//! shape into spoken/literate key sets; a generic adapter covers everything
//! else by reading the conventional `traits.languages` structure.
//!
//! Adapters are selected once at session setup and held as a strategy
//! reference. Extraction is pure and total: malformed persona data yields
//! empty sets for that persona and never aborts recomputation for the rest.

use std::collections::HashSet;

use async_trait::async_trait;
use regex::Regex;
use serde_json::Value;
use tracing::warn;

use crate::host::{localize_or, Host};
use crate::lang::{normalize_key, Language};
use crate::persona::Persona;

/// Spoken and (separately, where the ruleset distinguishes it) readable
/// language keys extracted from one persona.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KnownLanguagePair {
    pub spoken: HashSet<String>,
    pub literate: HashSet<String>,
}

impl KnownLanguagePair {
    pub fn merge(&mut self, other: KnownLanguagePair) {
        self.spoken.extend(other.spoken);
        self.literate.extend(other.literate);
    }

    pub fn is_empty(&self) -> bool {
        self.spoken.is_empty() && self.literate.is_empty()
    }
}

/// Strategy interface over the closed set of supported rulesets.
#[async_trait]
pub trait RulesetAdapter: Send + Sync {
    fn id(&self) -> &str;

    /// Whether this ruleset tracks literacy separately from speech.
    /// Literacy-gated surfaces (document annotations) consult the literate
    /// set instead of the spoken set when this is true.
    fn tracks_literacy(&self) -> bool {
        false
    }

    /// Extract the languages a persona speaks and reads. Pure; never fails:
    /// unexpected shapes degrade to empty sets.
    fn extract_known_languages(&self, persona: &Persona) -> KnownLanguagePair;

    /// The authoritative language set for this ruleset, discovered from the
    /// host. Catalog failures degrade to an empty list.
    async fn system_languages(&self, host: &dyn Host) -> Vec<Language> {
        builtin_languages(host, self.id())
    }
}

/// Select the adapter for a ruleset id. Unrecognized rulesets get the
/// generic adapter.
pub fn adapter_for(ruleset_id: &str, host: &dyn Host) -> Box<dyn RulesetAdapter> {
    match ruleset_id {
        "aria" => Box::new(AriaAdapter),
        "coc7" | "CoC7" => Box::new(CoC7Adapter::new(host)),
        "dcc" => Box::new(DccAdapter),
        "demonlord" => Box::new(DemonlordAdapter),
        "dsa5" => Box::new(Dsa5Adapter::new(host)),
        "ose" => Box::new(OseAdapter),
        "swade" => Box::new(SwadeAdapter::new()),
        "tormenta20" => Box::new(Tormenta20Adapter),
        "wfrp4e" => Box::new(Wfrp4eAdapter::new(host)),
        other => Box::new(GenericAdapter::new(other)),
    }
}

// ==================== Shared helpers ====================

/// `prefix` followed by a parenthesized capture, case-insensitive:
/// "Language (Elvish)" -> "Elvish".
fn paren_pattern(prefix: &str) -> Regex {
    Regex::new(&format!(r"(?i){}\s*\((.+)\)", regex::escape(prefix)))
        .expect("escaped prefix always forms a valid pattern")
}

fn string_entries(value: Option<&Value>) -> Vec<&str> {
    value
        .and_then(Value::as_array)
        .map(|entries| entries.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default()
}

/// Split a `,`/`;`-delimited free-text field into normalized keys.
fn split_delimited(raw: &str) -> impl Iterator<Item = String> + '_ {
    raw.split([',', ';'])
        .map(normalize_key)
        .filter(|key| !key.is_empty())
}

fn builtin_languages(host: &dyn Host, ruleset_id: &str) -> Vec<Language> {
    host.builtin_languages(ruleset_id)
        .unwrap_or_default()
        .into_iter()
        .map(|(key, display_name)| Language {
            key: normalize_key(&key),
            display_name,
        })
        .collect()
}

async fn catalog_names(host: &dyn Host, pack: &str) -> Vec<String> {
    match host.catalog_index(pack).await {
        Ok(names) => names,
        Err(e) => {
            warn!("catalog lookup for '{}' failed, continuing without: {}", pack, e);
            Vec::new()
        }
    }
}

// ==================== Generic (5e-family and fallback) ====================

/// Reads the conventional `traits.languages` structure: a `value` array of
/// keys plus a `custom` delimited free-text field.
pub struct GenericAdapter {
    ruleset_id: String,
}

impl GenericAdapter {
    pub fn new(ruleset_id: impl Into<String>) -> Self {
        Self {
            ruleset_id: ruleset_id.into(),
        }
    }
}

#[async_trait]
impl RulesetAdapter for GenericAdapter {
    fn id(&self) -> &str {
        &self.ruleset_id
    }

    fn extract_known_languages(&self, persona: &Persona) -> KnownLanguagePair {
        let mut pair = KnownLanguagePair::default();
        for lang in string_entries(persona.attribute("/traits/languages/value")) {
            pair.spoken.insert(normalize_key(lang));
        }
        if let Some(custom) = persona
            .attribute("/traits/languages/custom")
            .and_then(Value::as_str)
        {
            pair.spoken.extend(split_delimited(custom));
        }
        pair
    }
}

// ==================== Aria ====================

/// Everyone speaks the common tongue; extra languages are flagged items.
pub struct AriaAdapter;

#[async_trait]
impl RulesetAdapter for AriaAdapter {
    fn id(&self) -> &str {
        "aria"
    }

    fn extract_known_languages(&self, persona: &Persona) -> KnownLanguagePair {
        let mut pair = KnownLanguagePair::default();
        pair.spoken.insert("common".to_string());
        for item in &persona.items {
            if item
                .data
                .get("language")
                .and_then(Value::as_bool)
                .unwrap_or(false)
            {
                pair.spoken.insert(normalize_key(&item.name));
            }
        }
        pair
    }
}

// ==================== Call of Cthulhu 7e ====================

/// Language skills named with a localized "Language (X)" pattern, or carrying
/// a language specialization.
pub struct CoC7Adapter {
    patterns: Vec<Regex>,
    specializations: Vec<String>,
}

impl CoC7Adapter {
    pub fn new(host: &dyn Host) -> Self {
        let own = localize_or(host, "RUNETONGUE.COC7.LanguageOwn", "Own Language");
        let any = localize_or(host, "RUNETONGUE.COC7.LanguageAny", "Language");
        let other = localize_or(host, "RUNETONGUE.COC7.LanguageOther", "Other Language");
        let spec = localize_or(host, "RUNETONGUE.COC7.LanguageSpec", "Language");
        Self {
            patterns: vec![
                paren_pattern(&own),
                paren_pattern(&any),
                paren_pattern(&other),
            ],
            specializations: vec![
                spec,
                own,
                other,
                "Language".to_string(),
                "Language (Own)".to_string(),
                "Language (Other)".to_string(),
            ],
        }
    }

    fn match_language(&self, name: &str) -> Option<String> {
        self.patterns.iter().find_map(|pattern| {
            pattern
                .captures(name)
                .and_then(|caps| caps.get(1))
                .map(|m| normalize_key(m.as_str()))
        })
    }
}

#[async_trait]
impl RulesetAdapter for CoC7Adapter {
    fn id(&self) -> &str {
        "coc7"
    }

    fn extract_known_languages(&self, persona: &Persona) -> KnownLanguagePair {
        let mut pair = KnownLanguagePair::default();
        for item in &persona.items {
            if let Some(key) = self.match_language(&item.name) {
                // Only the descriptive language name, not "Language (X)".
                pair.spoken.insert(key);
            } else if item
                .data
                .get("specialization")
                .and_then(Value::as_str)
                .is_some_and(|spec| self.specializations.iter().any(|s| s == spec))
            {
                pair.spoken.insert(normalize_key(&item.name));
            }
        }
        pair
    }
}

// ==================== Dungeon Crawl Classics ====================

/// Languages live in one delimited free-text details field.
pub struct DccAdapter;

#[async_trait]
impl RulesetAdapter for DccAdapter {
    fn id(&self) -> &str {
        "dcc"
    }

    fn extract_known_languages(&self, persona: &Persona) -> KnownLanguagePair {
        let mut pair = KnownLanguagePair::default();
        if let Some(raw) = persona
            .attribute("/details/languages")
            .and_then(Value::as_str)
        {
            pair.spoken.extend(split_delimited(raw));
        }
        pair
    }
}

// ==================== Shadow of the Demon Lord ====================

/// Structured language items with separate speak/read flags.
pub struct DemonlordAdapter;

#[async_trait]
impl RulesetAdapter for DemonlordAdapter {
    fn id(&self) -> &str {
        "demonlord"
    }

    fn tracks_literacy(&self) -> bool {
        true
    }

    fn extract_known_languages(&self, persona: &Persona) -> KnownLanguagePair {
        let mut pair = KnownLanguagePair::default();
        for item in &persona.items {
            if item.kind != "language" {
                continue;
            }
            let key = normalize_key(&item.name);
            if item.data.get("speak").and_then(Value::as_bool).unwrap_or(false) {
                pair.spoken.insert(key.clone());
            }
            if item.data.get("read").and_then(Value::as_bool).unwrap_or(false) {
                pair.literate.insert(key);
            }
        }
        pair
    }

    async fn system_languages(&self, host: &dyn Host) -> Vec<Language> {
        catalog_names(host, "demonlord.languages")
            .await
            .into_iter()
            .map(|name| Language {
                key: normalize_key(&name),
                display_name: name,
            })
            .collect()
    }
}

// ==================== Das Schwarze Auge 5 ====================

/// Special-ability items split into language vs literacy patterns.
pub struct Dsa5Adapter {
    language_re: Regex,
    literacy_re: Regex,
}

impl Dsa5Adapter {
    pub fn new(host: &dyn Host) -> Self {
        let language = localize_or(host, "RUNETONGUE.DSA5.Language", "Language");
        let literacy = localize_or(host, "RUNETONGUE.DSA5.Literacy", "Literacy");
        Self {
            language_re: paren_pattern(&language),
            literacy_re: paren_pattern(&literacy),
        }
    }

    fn capture(pattern: &Regex, name: &str) -> Option<String> {
        pattern
            .captures(name)
            .and_then(|caps| caps.get(1))
            .map(|m| normalize_key(m.as_str()))
    }
}

#[async_trait]
impl RulesetAdapter for Dsa5Adapter {
    fn id(&self) -> &str {
        "dsa5"
    }

    fn tracks_literacy(&self) -> bool {
        true
    }

    fn extract_known_languages(&self, persona: &Persona) -> KnownLanguagePair {
        let mut pair = KnownLanguagePair::default();
        for item in &persona.items {
            let is_language_ability = item
                .data
                .pointer("/category/value")
                .and_then(Value::as_str)
                == Some("language");
            if !is_language_ability {
                continue;
            }
            if let Some(key) = Self::capture(&self.language_re, &item.name) {
                pair.spoken.insert(key);
            } else if let Some(key) = Self::capture(&self.literacy_re, &item.name) {
                pair.literate.insert(key);
            }
        }
        pair
    }

    async fn system_languages(&self, host: &dyn Host) -> Vec<Language> {
        catalog_names(host, "dsa5-core.corespecialabilites")
            .await
            .into_iter()
            .filter_map(|name| {
                Self::capture(&self.language_re, &name)
                    .or_else(|| Self::capture(&self.literacy_re, &name))
            })
            .map(|key| Language {
                display_name: key.clone(),
                key,
            })
            .collect()
    }
}

// ==================== Old-School Essentials ====================

/// A plain structured list on the sheet.
pub struct OseAdapter;

#[async_trait]
impl RulesetAdapter for OseAdapter {
    fn id(&self) -> &str {
        "ose"
    }

    fn extract_known_languages(&self, persona: &Persona) -> KnownLanguagePair {
        let mut pair = KnownLanguagePair::default();
        for lang in string_entries(persona.attribute("/languages/value")) {
            pair.spoken.insert(normalize_key(lang));
        }
        pair
    }
}

// ==================== Savage Worlds ====================

/// Inventory items named "Language (X)".
pub struct SwadeAdapter {
    language_re: Regex,
}

impl SwadeAdapter {
    pub fn new() -> Self {
        Self {
            language_re: paren_pattern("Language"),
        }
    }
}

impl Default for SwadeAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RulesetAdapter for SwadeAdapter {
    fn id(&self) -> &str {
        "swade"
    }

    fn extract_known_languages(&self, persona: &Persona) -> KnownLanguagePair {
        let mut pair = KnownLanguagePair::default();
        for item in &persona.items {
            if let Some(caps) = self.language_re.captures(&item.name) {
                if let Some(m) = caps.get(1) {
                    pair.spoken.insert(normalize_key(m.as_str()));
                }
            }
        }
        pair
    }
}

// ==================== Tormenta 20 ====================

pub struct Tormenta20Adapter;

#[async_trait]
impl RulesetAdapter for Tormenta20Adapter {
    fn id(&self) -> &str {
        "tormenta20"
    }

    fn extract_known_languages(&self, persona: &Persona) -> KnownLanguagePair {
        let mut pair = KnownLanguagePair::default();
        for lang in string_entries(persona.attribute("/detalhes/idiomas/value")) {
            pair.spoken.insert(normalize_key(lang));
        }
        pair
    }
}

// ==================== Warhammer Fantasy 4e ====================

/// Language skills named with a localized pattern; the system language list
/// comes from the skills catalog.
pub struct Wfrp4eAdapter {
    skill_re: Regex,
}

impl Wfrp4eAdapter {
    pub fn new(host: &dyn Host) -> Self {
        let prefix = localize_or(host, "RUNETONGUE.WFRP4E.LanguageSkills", "Language");
        Self {
            skill_re: paren_pattern(&prefix),
        }
    }

    fn match_language(&self, name: &str) -> Option<String> {
        self.skill_re
            .captures(name)
            .and_then(|caps| caps.get(1))
            .map(|m| normalize_key(m.as_str()))
    }
}

#[async_trait]
impl RulesetAdapter for Wfrp4eAdapter {
    fn id(&self) -> &str {
        "wfrp4e"
    }

    fn extract_known_languages(&self, persona: &Persona) -> KnownLanguagePair {
        let mut pair = KnownLanguagePair::default();
        for item in &persona.items {
            if let Some(key) = self.match_language(&item.name) {
                pair.spoken.insert(key);
            }
        }
        pair
    }

    async fn system_languages(&self, host: &dyn Host) -> Vec<Language> {
        let mut names = catalog_names(host, "wfrp4e-core.skills").await;
        if names.is_empty() {
            names = catalog_names(host, "wfrp4e.basic").await;
        }
        names
            .into_iter()
            .filter_map(|name| self.match_language(&name))
            .map(|key| Language {
                display_name: key.clone(),
                key,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{EngineError, Result};
    use crate::host::NullHost;
    use crate::persona::PersonaItem;
    use serde_json::json;

    struct CatalogHost {
        packs: Vec<(&'static str, Vec<&'static str>)>,
    }

    #[async_trait]
    impl Host for CatalogHost {
        async fn catalog_index(&self, pack: &str) -> Result<Vec<String>> {
            self.packs
                .iter()
                .find(|(name, _)| *name == pack)
                .map(|(_, entries)| entries.iter().map(|s| s.to_string()).collect())
                .ok_or_else(|| EngineError::Catalog {
                    pack: pack.to_string(),
                    reason: "pack not installed".to_string(),
                })
        }
    }

    // ==================== Generic Adapter Tests ====================

    #[test]
    fn test_generic_reads_traits_languages() {
        let persona = Persona::new("Nyssa").with_attributes(json!({
            "traits": { "languages": { "value": ["common", "Elvish"], "custom": "" } }
        }));

        let pair = GenericAdapter::new("dnd5e").extract_known_languages(&persona);
        assert!(pair.spoken.contains("common"));
        assert!(pair.spoken.contains("elvish"));
        assert_eq!(pair.spoken.len(), 2);
        assert!(pair.literate.is_empty());
    }

    #[test]
    fn test_generic_splits_custom_field() {
        let persona = Persona::new("Nyssa").with_attributes(json!({
            "traits": { "languages": { "value": [], "custom": "Thieves 'Cant; Deep Speech" } }
        }));

        let pair = GenericAdapter::new("dnd5e").extract_known_languages(&persona);
        assert!(pair.spoken.contains("thieves_cant"));
        assert!(pair.spoken.contains("deep speech"));
    }

    #[test]
    fn test_generic_malformed_attributes_degrade_to_empty() {
        let persona = Persona::new("Broken").with_attributes(json!({
            "traits": { "languages": "not-an-object" }
        }));

        let pair = GenericAdapter::new("dnd5e").extract_known_languages(&persona);
        assert!(pair.is_empty());
    }

    // ==================== Item-Pattern Adapter Tests ====================

    #[test]
    fn test_coc7_matches_language_items_and_specializations() {
        let adapter = CoC7Adapter::new(&NullHost);
        let persona = Persona::new("Prof. Weiss")
            .with_item(PersonaItem::new("Language (French)"))
            .with_item(
                PersonaItem::new("Latin").with_data(json!({"specialization": "Language"})),
            )
            .with_item(PersonaItem::new("Spot Hidden"));

        let pair = adapter.extract_known_languages(&persona);
        assert!(pair.spoken.contains("french"));
        assert!(pair.spoken.contains("latin"));
        assert_eq!(pair.spoken.len(), 2);
    }

    #[test]
    fn test_swade_matches_only_language_items() {
        let adapter = SwadeAdapter::new();
        let persona = Persona::new("Jane")
            .with_item(PersonaItem::new("Language (Spanish)"))
            .with_item(PersonaItem::new("Fighting"));

        let pair = adapter.extract_known_languages(&persona);
        assert_eq!(pair.spoken, HashSet::from(["spanish".to_string()]));
    }

    #[test]
    fn test_wfrp4e_skill_pattern() {
        let adapter = Wfrp4eAdapter::new(&NullHost);
        let persona = Persona::new("Gunnar")
            .with_item(PersonaItem::new("Language (Khazalid)"))
            .with_item(PersonaItem::new("Melee (Basic)"));

        let pair = adapter.extract_known_languages(&persona);
        assert_eq!(pair.spoken, HashSet::from(["khazalid".to_string()]));
    }

    // ==================== Structured-List Adapter Tests ====================

    #[test]
    fn test_aria_always_speaks_common() {
        let persona = Persona::new("Talia")
            .with_item(PersonaItem::new("Aqaba").with_data(json!({"language": true})))
            .with_item(PersonaItem::new("Sword").with_data(json!({"language": false})));

        let pair = AriaAdapter.extract_known_languages(&persona);
        assert!(pair.spoken.contains("common"));
        assert!(pair.spoken.contains("aqaba"));
        assert_eq!(pair.spoken.len(), 2);
    }

    #[test]
    fn test_dcc_splits_details_field() {
        let persona = Persona::new("Hugh").with_attributes(json!({
            "details": { "languages": "Common, Dwarvish; Thieves' Cant" }
        }));

        let pair = DccAdapter.extract_known_languages(&persona);
        assert!(pair.spoken.contains("common"));
        assert!(pair.spoken.contains("dwarvish"));
        assert_eq!(pair.spoken.len(), 3);
    }

    #[test]
    fn test_ose_reads_language_list() {
        let persona = Persona::new("Wilhelm").with_attributes(json!({
            "languages": { "value": ["Common", "Goblin"] }
        }));

        let pair = OseAdapter.extract_known_languages(&persona);
        assert_eq!(
            pair.spoken,
            HashSet::from(["common".to_string(), "goblin".to_string()])
        );
    }

    #[test]
    fn test_tormenta20_reads_idiomas() {
        let persona = Persona::new("Bruna").with_attributes(json!({
            "detalhes": { "idiomas": { "value": ["Comum", "Elfico"] } }
        }));

        let pair = Tormenta20Adapter.extract_known_languages(&persona);
        assert!(pair.spoken.contains("comum"));
        assert!(pair.spoken.contains("elfico"));
    }

    // ==================== Literacy Tests ====================

    #[test]
    fn test_demonlord_separates_speak_and_read() {
        let persona = Persona::new("Ghorta")
            .with_item(
                PersonaItem::new("Common Tongue")
                    .with_kind("language")
                    .with_data(json!({"speak": true, "read": true})),
            )
            .with_item(
                PersonaItem::new("Dark Speech")
                    .with_kind("language")
                    .with_data(json!({"speak": false, "read": true})),
            )
            .with_item(PersonaItem::new("Sword").with_kind("weapon"));

        let adapter = DemonlordAdapter;
        assert!(adapter.tracks_literacy());
        let pair = adapter.extract_known_languages(&persona);
        assert_eq!(pair.spoken, HashSet::from(["common tongue".to_string()]));
        assert_eq!(
            pair.literate,
            HashSet::from(["common tongue".to_string(), "dark speech".to_string()])
        );
    }

    #[test]
    fn test_dsa5_language_vs_literacy_items() {
        let adapter = Dsa5Adapter::new(&NullHost);
        let persona = Persona::new("Alrik")
            .with_item(
                PersonaItem::new("Language (Garethi)")
                    .with_data(json!({"category": {"value": "language"}})),
            )
            .with_item(
                PersonaItem::new("Literacy (Kusliker Zeichen)")
                    .with_data(json!({"category": {"value": "language"}})),
            )
            .with_item(
                PersonaItem::new("Language (Ignored)")
                    .with_data(json!({"category": {"value": "combat"}})),
            );

        let pair = adapter.extract_known_languages(&persona);
        assert_eq!(pair.spoken, HashSet::from(["garethi".to_string()]));
        assert_eq!(
            pair.literate,
            HashSet::from(["kusliker zeichen".to_string()])
        );
    }

    // ==================== Dispatch Tests ====================

    #[test]
    fn test_adapter_for_known_rulesets() {
        assert_eq!(adapter_for("demonlord", &NullHost).id(), "demonlord");
        assert_eq!(adapter_for("wfrp4e", &NullHost).id(), "wfrp4e");
        assert_eq!(adapter_for("CoC7", &NullHost).id(), "coc7");
    }

    #[test]
    fn test_adapter_for_unknown_falls_back_to_generic() {
        let adapter = adapter_for("homebrew", &NullHost);
        assert_eq!(adapter.id(), "homebrew");
        assert!(!adapter.tracks_literacy());
    }

    #[test]
    fn test_union_over_personas_is_order_independent() {
        let adapter = GenericAdapter::new("dnd5e");
        let a = Persona::new("a").with_attributes(json!({
            "traits": { "languages": { "value": ["common", "elvish"] } }
        }));
        let b = Persona::new("b").with_attributes(json!({
            "traits": { "languages": { "value": ["elvish", "dwarvish"] } }
        }));

        let mut forward = KnownLanguagePair::default();
        forward.merge(adapter.extract_known_languages(&a));
        forward.merge(adapter.extract_known_languages(&b));

        let mut reverse = KnownLanguagePair::default();
        reverse.merge(adapter.extract_known_languages(&b));
        reverse.merge(adapter.extract_known_languages(&a));

        assert_eq!(forward, reverse);
        assert_eq!(forward.spoken.len(), 3);
    }

    // ==================== Catalog Discovery Tests ====================

    #[tokio::test]
    async fn test_demonlord_languages_from_catalog() {
        let host = CatalogHost {
            packs: vec![(
                "demonlord.languages",
                vec!["Common Tongue", "Dark Speech"],
            )],
        };

        let languages = DemonlordAdapter.system_languages(&host).await;
        assert_eq!(languages.len(), 2);
        assert!(languages.iter().any(|l| l.key == "common tongue"));
    }

    #[tokio::test]
    async fn test_wfrp4e_languages_fall_back_to_basic_pack() {
        let host = CatalogHost {
            packs: vec![(
                "wfrp4e.basic",
                vec!["Language (Reikspiel)", "Melee (Basic)"],
            )],
        };

        let adapter = Wfrp4eAdapter::new(&NullHost);
        let languages = adapter.system_languages(&host).await;
        assert_eq!(languages.len(), 1);
        assert_eq!(languages[0].key, "reikspiel");
    }

    #[tokio::test]
    async fn test_catalog_failure_degrades_to_no_languages() {
        let host = CatalogHost { packs: vec![] };
        let languages = DemonlordAdapter.system_languages(&host).await;
        assert!(languages.is_empty());
    }

    #[tokio::test]
    async fn test_dsa5_catalog_extracts_both_patterns() {
        let host = CatalogHost {
            packs: vec![(
                "dsa5-core.corespecialabilites",
                vec![
                    "Language (Garethi)",
                    "Literacy (Kusliker Zeichen)",
                    "Ambidextrous",
                ],
            )],
        };

        let adapter = Dsa5Adapter::new(&NullHost);
        let languages = adapter.system_languages(&host).await;
        assert_eq!(languages.len(), 2);
    }
}
