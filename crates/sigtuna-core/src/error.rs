#![forbid(unsafe_code)]

//! Errors produced by the Sigtuna signature-production library.

use std::fmt;

/// The algorithm family an [`Error::UnsupportedAlgorithm`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgorithmKind {
    /// A transform algorithm in a reference's transform chain.
    Transform,
    /// The digest method of a reference.
    DigestMethod,
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlgorithmKind::Transform => f.write_str("transform"),
            AlgorithmKind::DigestMethod => f.write_str("digest method"),
        }
    }
}

/// Errors produced by the Sigtuna signature-production library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("XML parsing error: {0}")]
    XmlParse(String),

    /// The caller requested an algorithm the provider does not support.
    /// Carries the offending URI for diagnostics.
    #[error("unsupported {kind} algorithm: {uri}")]
    UnsupportedAlgorithm { kind: AlgorithmKind, uri: String },

    /// Engine bookkeeping broke an invariant. Indicates a defect in the
    /// signature engine integration, not a caller-correctable condition.
    #[error("internal inconsistency: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_algorithm_message_names_kind_and_uri() {
        let err = Error::UnsupportedAlgorithm {
            kind: AlgorithmKind::DigestMethod,
            uri: "urn:example:unknown".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "unsupported digest method algorithm: urn:example:unknown"
        );
    }
}
