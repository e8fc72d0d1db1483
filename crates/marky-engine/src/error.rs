use thiserror::Error;

/// A schema pattern that cannot be used for matching.
#[derive(Debug, Error)]
pub enum PatternError {
    #[error("pattern has no capture group named `{0}`")]
    MissingCapture(String),

    #[error("invalid pattern: {0}")]
    Regex(#[from] regex::Error),
}

/// Raised while building a parser from its schema registry.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("schema `{id}` has an unusable pattern: {source}")]
    Pattern { id: String, source: PatternError },
}

/// Raised while turning a node tree into output.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("element override for `{element}` failed: {source}")]
    Element {
        element: String,
        source: anyhow::Error,
    },
}
