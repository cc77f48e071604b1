//! Error types for selector parsing, signature canonicalisation and
//! candidate-file loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while parsing a selector string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    #[error("'{input}' is not a 4-byte selector (expected 10 characters, got {len})")]
    InvalidLength { input: String, len: usize },

    #[error("'{input}' contains non-hex characters")]
    InvalidHex { input: String },
}

/// Errors raised while building an [`ErrorSignature`](crate::ErrorSignature).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignatureError {
    #[error("empty error signature")]
    Empty,

    #[error("missing parameter list in '{input}'")]
    MissingParens { input: String },

    #[error("invalid error name in '{input}'")]
    InvalidName { input: String },

    #[error("unbalanced parentheses in '{input}'")]
    Unbalanced { input: String },

    #[error("empty parameter in '{input}'")]
    EmptyParameter { input: String },

    #[error("'{input}' is not canonical (expected '{canonical}')")]
    NotCanonical { input: String, canonical: String },
}

/// Errors raised while loading a candidate set.
#[derive(Debug, Error)]
pub enum CandidateError {
    #[error("failed to read candidate file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid candidate JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid candidate at index {index}: {source}")]
    InvalidEntry {
        index: usize,
        #[source]
        source: SignatureError,
    },

    #[error("candidate set is empty")]
    Empty,
}
