//! Error types for review-panel

use std::path::PathBuf;

use thiserror::Error;

/// Problems with the runtime configuration. Fatal before any review runs.
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error(
        "GOOGLE_API_KEY is not set (export GOOGLE_API_KEY='your-api-key-here' or pass --api-key)"
    )]
    MissingApiKey,

    #[error("temperature must be between 0.0 and 2.0, got {0}")]
    InvalidTemperature(f32),

    #[error("max output tokens must be greater than zero")]
    InvalidMaxTokens,
}

/// Failure to load the code under review. Fatal before any review runs.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("file '{}' not found", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A persona template that cannot be filled with the code payload
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PromptError {
    #[error("prompt template is empty")]
    EmptyTemplate,

    #[error("prompt template has no {{code_diff}} placeholder")]
    MissingPlaceholder,

    #[error("prompt template references unknown placeholder '{{{0}}}'")]
    UnknownPlaceholder(String),

    #[error("prompt template has an unmatched '{brace}' at byte {position}")]
    UnmatchedBrace { brace: char, position: usize },
}

/// A failed round-trip to the text-generation endpoint
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("malformed response: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("prompt was blocked: {0}")]
    Blocked(String),

    #[error("generation stopped without text (finish reason {0})")]
    Stopped(String),

    #[error("response contained no text")]
    EmptyResponse,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RegistryError {
    #[error("a persona named '{0}' is already registered")]
    DuplicateName(String),
}
