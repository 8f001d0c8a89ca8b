use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An inventory/feature entry on a persona sheet.
///
/// `data` keeps the ruleset-specific shape as raw JSON so one malformed entry
/// can never take down extraction for the whole persona set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PersonaItem {
    pub name: String,
    /// Ruleset item type (e.g. "language", "skill").
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub data: Value,
}

impl PersonaItem {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = data;
        self
    }
}

/// Read-only view of a host actor/character record.
///
/// The engine never mutates personas; it only extracts language knowledge
/// from their items and sheet attributes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Persona {
    pub name: String,
    #[serde(default)]
    pub items: Vec<PersonaItem>,
    /// Ruleset-specific sheet data (the original's `actor.data.data`).
    #[serde(default)]
    pub attributes: Value,
}

impl Persona {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_item(mut self, item: PersonaItem) -> Self {
        self.items.push(item);
        self
    }

    pub fn with_attributes(mut self, attributes: Value) -> Self {
        self.attributes = attributes;
        self
    }

    /// JSON-pointer lookup into the sheet attributes.
    pub fn attribute(&self, pointer: &str) -> Option<&Value> {
        self.attributes.pointer(pointer)
    }
}

/// Host user role, as the engine sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    /// Privileged moderation role (game master).
    Arbiter,
    /// Trusted participant.
    Trusted,
    /// Ordinary participant.
    Player,
    /// Restricted participant.
    Limited,
}

/// The viewing user whose persona selection drives visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewer {
    pub role: Role,
}

impl Viewer {
    pub fn arbiter() -> Self {
        Self {
            role: Role::Arbiter,
        }
    }

    pub fn player() -> Self {
        Self { role: Role::Player }
    }

    pub fn is_arbiter(&self) -> bool {
        self.role == Role::Arbiter
    }
}

/// Resolve which personas count as "active" for a viewer: the on-screen
/// selection, falling back to the viewer's primary assigned persona.
///
/// An empty result is meaningful; the role-based fallback in
/// [`crate::state::KnownLanguageState::recompute`] takes over from there.
pub fn active_personas<'a>(
    selected: &'a [Persona],
    primary: Option<&'a Persona>,
) -> Vec<&'a Persona> {
    if !selected.is_empty() {
        selected.iter().collect()
    } else {
        primary.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_attribute_pointer_lookup() {
        let persona = Persona::new("Nyssa").with_attributes(json!({
            "traits": { "languages": { "value": ["common", "elvish"] } }
        }));

        let value = persona.attribute("/traits/languages/value").unwrap();
        assert_eq!(value.as_array().unwrap().len(), 2);
        assert!(persona.attribute("/missing/path").is_none());
    }

    #[test]
    fn test_active_personas_prefers_selection() {
        let selected = vec![Persona::new("a"), Persona::new("b")];
        let primary = Persona::new("c");

        let active = active_personas(&selected, Some(&primary));
        assert_eq!(active.len(), 2);
        assert_eq!(active[0].name, "a");
    }

    #[test]
    fn test_active_personas_falls_back_to_primary() {
        let primary = Persona::new("c");
        let active = active_personas(&[], Some(&primary));
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].name, "c");
    }

    #[test]
    fn test_active_personas_empty_when_nothing_assigned() {
        assert!(active_personas(&[], None).is_empty());
    }

    #[test]
    fn test_viewer_roles() {
        assert!(Viewer::arbiter().is_arbiter());
        assert!(!Viewer::player().is_arbiter());
        assert!(!Viewer { role: Role::Trusted }.is_arbiter());
    }
}
