use std::io;

use thiserror::Error;
use vc_inspect::info::Kind;

// -----------------------------------------------------------------------------
// NavigationError

/// An entry point token could not be applied.
///
/// `token` is the offending token, `depth` its position in the entry point.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NavigationError {
    #[error("entry point token {depth} ({token:?}): no field with this name")]
    FieldNotFound { token: String, depth: usize },

    #[error("entry point token {depth} ({token:?}): map keys of kind {key_kind} cannot be navigated")]
    UnsupportedKeyType {
        token: String,
        depth: usize,
        key_kind: Kind,
    },

    #[error("entry point token {depth} ({token:?}): not a valid {key_kind} map key")]
    InvalidKey {
        token: String,
        depth: usize,
        key_kind: Kind,
    },

    #[error("entry point token {depth} ({token:?}): no map entry with this key")]
    KeyNotFound { token: String, depth: usize },

    #[error("entry point token {depth} ({token:?}): not an index below {len}")]
    InvalidIndex {
        token: String,
        depth: usize,
        len: usize,
    },

    #[error("entry point token {depth} ({token:?}): values of kind {kind} cannot be navigated")]
    UnsupportedNavigation {
        token: String,
        depth: usize,
        kind: Kind,
    },
}

impl NavigationError {
    /// Returns the token that failed.
    pub fn token(&self) -> &str {
        match self {
            Self::FieldNotFound { token, .. }
            | Self::UnsupportedKeyType { token, .. }
            | Self::InvalidKey { token, .. }
            | Self::KeyNotFound { token, .. }
            | Self::InvalidIndex { token, .. }
            | Self::UnsupportedNavigation { token, .. } => token,
        }
    }

    /// Returns the position of the failed token in the entry point.
    pub fn depth(&self) -> usize {
        match *self {
            Self::FieldNotFound { depth, .. }
            | Self::UnsupportedKeyType { depth, .. }
            | Self::InvalidKey { depth, .. }
            | Self::KeyNotFound { depth, .. }
            | Self::InvalidIndex { depth, .. }
            | Self::UnsupportedNavigation { depth, .. } => depth,
        }
    }
}

// -----------------------------------------------------------------------------
// SerializeError

/// Any failure of [`Serializer::serialize`](crate::Serializer::serialize).
///
/// The call is aborted on the first error. A streaming sink may then hold
/// a truncated document.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SerializeError {
    #[error("cannot resolve the entry point: {0}")]
    Navigation(#[from] NavigationError),

    #[error("values of kind {kind} are not supported (type `{type_path}`)")]
    UnsupportedKind {
        kind: Kind,
        type_path: &'static str,
    },

    #[error("failed to write the document: {0}")]
    Sink(#[from] io::Error),
}

impl From<serde_json::Error> for SerializeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Sink(io::Error::from(err))
    }
}
