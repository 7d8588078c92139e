//! Error types for option resolution.

use crate::config::ValueKind;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal resolution failures. Any of these aborts the invocation.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// Malformed or unknown command-line token (also help/version requests).
    #[error("{0}")]
    Parse(#[from] clap::Error),

    /// The config file path does not point at an existing file.
    #[error("config file not found: {}", path.display())]
    ConfigNotFound { path: PathBuf },

    /// The config file exists but could not be read.
    #[error("error reading config file {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid YAML, or its top level is not a mapping.
    #[error("error parsing config file {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// A config value's structure cannot fit the option it names.
    #[error(
        "error parsing config file {}: `{key}` expects {expected}, found {found}",
        path.display()
    )]
    ConfigShape {
        path: PathBuf,
        key: &'static str,
        expected: ValueKind,
        found: ValueKind,
    },

    /// Reading piped standard input failed before end-of-stream.
    #[error("error reading piped message from stdin: {0}")]
    Stdin(#[source] std::io::Error),
}

impl ResolveError {
    /// The clap error, if this is a command-line parse failure.
    pub fn as_parse(&self) -> Option<&clap::Error> {
        match self {
            ResolveError::Parse(err) => Some(err),
            _ => None,
        }
    }
}

/// A single config value that could not be converted into its field.
///
/// Recoverable: the field keeps its previous value and resolution continues.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoercionError {
    #[error("cannot convert {text:?} to {expected} for `{key}`")]
    Unparsable {
        key: &'static str,
        text: String,
        expected: ValueKind,
    },

    #[error("unsupported conversion from {found} to {expected} for `{key}`")]
    Unsupported {
        key: &'static str,
        found: ValueKind,
        expected: ValueKind,
    },
}

impl CoercionError {
    /// Config-file key of the field that was left untouched.
    pub fn key(&self) -> &'static str {
        match self {
            CoercionError::Unparsable { key, .. } | CoercionError::Unsupported { key, .. } => key,
        }
    }
}

/// Result type for resolution operations.
pub type ResolveResult<T> = std::result::Result<T, ResolveError>;
