//! Error types for view resolution.

use thiserror::Error;

/// Errors surfaced at the edges of the resolver.
///
/// Resolution itself never fails. These cover untyped input: key names
/// arriving as strings and JSON documents.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// A configuration key outside the resolvable set.
    #[error("unknown configuration key: {0}")]
    UnknownKey(String),

    /// Options or configuration JSON is malformed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, ResolveError>;
