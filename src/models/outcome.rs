//! Decode outcome and error types.

use thiserror::Error;

use super::NodeRecord;

/// Failure inside a matched protocol decoder.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("invalid base64 payload")]
    Base64,
    #[error("invalid JSON payload: {0}")]
    Json(String),
    #[error("invalid URL: {0}")]
    Url(String),
    #[error("missing host")]
    MissingHost,
    #[error("missing credential")]
    MissingCredential,
    #[error("invalid port `{0}`")]
    Port(String),
    #[error("invalid numeric value `{value}` for `{field}`")]
    Numeric { field: &'static str, value: String },
    #[error("expected at least {expected} colon-separated fields, found {found}")]
    FieldCount { expected: usize, found: usize },
}

/// Three-way result of a decode attempt.
///
/// `Unrecognized` is not an error: the dispatcher simply has no opinion on
/// the scheme. `Malformed` keeps the trimmed input verbatim so a caller can
/// surface the bad entry for manual correction instead of dropping it.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseOutcome {
    Node(NodeRecord),
    Unrecognized,
    Malformed { error: CodecError, raw: String },
}

impl ParseOutcome {
    pub fn is_unrecognized(&self) -> bool {
        matches!(self, ParseOutcome::Unrecognized)
    }

    /// Consumes the outcome, yielding the record on success.
    pub fn into_node(self) -> Option<NodeRecord> {
        match self {
            ParseOutcome::Node(node) => Some(node),
            _ => None,
        }
    }
}
