//! Capability contracts consumed from the hosting application.
//!
//! The engine never owns UI, storage or localization; it asks the host for
//! them through this trait. Every method has a degrade-to-nothing default so
//! a minimal host (or a test) can plug in `NullHost` and still get a working
//! engine with no extra languages discovered.

use async_trait::async_trait;

use crate::error::Result;

/// Read-only services provided by the hosting application.
#[async_trait]
pub trait Host: Send + Sync {
    /// Localized label lookup. `None` means "use the engine's fallback".
    fn localize(&self, _key: &str) -> Option<String> {
        None
    }

    /// The ruleset's built-in language table (key, display name), if the
    /// host exposes one for this ruleset.
    fn builtin_languages(&self, _ruleset_id: &str) -> Option<Vec<(String, String)>> {
        None
    }

    /// Entry names of an external document catalog (compendium pack index).
    ///
    /// Used by rulesets that source their language list from a catalog.
    /// Failures must degrade to "no additional languages discovered", which
    /// is what the default does.
    async fn catalog_index(&self, _pack: &str) -> Result<Vec<String>> {
        Ok(Vec::new())
    }
}

/// A host that provides nothing. Useful for tests and bare setups.
pub struct NullHost;

#[async_trait]
impl Host for NullHost {}

/// Localize with an engine-side fallback when the host has no label.
pub fn localize_or<'a>(host: &dyn Host, key: &str, fallback: &'a str) -> String {
    host.localize(key).unwrap_or_else(|| fallback.to_string())
}
