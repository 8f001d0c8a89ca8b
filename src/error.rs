use thiserror::Error;

/// Errors produced while loading or parsing language resources.
///
/// Every variant is recoverable: callers log the failure and continue with
/// prior state or defaults. Nothing in this crate is allowed to abort the
/// rendering of unrelated messages.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("no bundled description for ruleset '{0}'")]
    UnknownDescription(String),

    #[error("failed to read description file '{path}'")]
    DescriptionRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed ruleset description: {0}")]
    DescriptionParse(#[from] serde_json::Error),

    #[error("ruleset description has no '_default' tongue mapping")]
    MissingDefaultTongue,

    #[error("catalog lookup failed for pack '{pack}': {reason}")]
    Catalog { pack: String, reason: String },
}

pub type Result<T> = std::result::Result<T, EngineError>;
