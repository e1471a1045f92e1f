#![forbid(unsafe_code)]

//! Transform chains attached to signature references.
//!
//! A chain records the ordered transform algorithms of one reference.
//! Algorithms are validated as they are added, so a constructed chain
//! never holds an unknown algorithm.

use sigtuna_core::{algorithm, AlgorithmKind, Error, Result};
use sigtuna_xml::XmlContent;

/// Transform algorithms the engine can represent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformKind {
    /// Canonical XML 1.0
    C14n,
    /// Canonical XML 1.0 with comments
    C14nWithComments,
    /// Canonical XML 1.1
    C14n11,
    /// Canonical XML 1.1 with comments
    C14n11WithComments,
    /// Exclusive Canonical XML 1.0
    ExclusiveC14n,
    /// Exclusive Canonical XML 1.0 with comments
    ExclusiveC14nWithComments,
    /// Base64 decoding
    Base64,
    /// Enveloped signature removal
    EnvelopedSignature,
    /// XPath filtering
    XPath,
    /// XPath Filter 2.0
    XPath2,
    /// XPointer selection
    XPointer,
}

impl TransformKind {
    /// Get the algorithm URI for this transform.
    pub fn uri(&self) -> &'static str {
        match self {
            Self::C14n => algorithm::C14N,
            Self::C14nWithComments => algorithm::C14N_WITH_COMMENTS,
            Self::C14n11 => algorithm::C14N11,
            Self::C14n11WithComments => algorithm::C14N11_WITH_COMMENTS,
            Self::ExclusiveC14n => algorithm::EXC_C14N,
            Self::ExclusiveC14nWithComments => algorithm::EXC_C14N_WITH_COMMENTS,
            Self::Base64 => algorithm::BASE64,
            Self::EnvelopedSignature => algorithm::ENVELOPED_SIGNATURE,
            Self::XPath => algorithm::XPATH,
            Self::XPath2 => algorithm::XPATH2,
            Self::XPointer => algorithm::XPOINTER,
        }
    }

    /// Parse a transform kind from an algorithm URI.
    pub fn from_uri(uri: &str) -> Option<Self> {
        match uri {
            algorithm::C14N => Some(Self::C14n),
            algorithm::C14N_WITH_COMMENTS => Some(Self::C14nWithComments),
            algorithm::C14N11 => Some(Self::C14n11),
            algorithm::C14N11_WITH_COMMENTS => Some(Self::C14n11WithComments),
            algorithm::EXC_C14N => Some(Self::ExclusiveC14n),
            algorithm::EXC_C14N_WITH_COMMENTS => Some(Self::ExclusiveC14nWithComments),
            algorithm::BASE64 => Some(Self::Base64),
            algorithm::ENVELOPED_SIGNATURE => Some(Self::EnvelopedSignature),
            algorithm::XPATH => Some(Self::XPath),
            algorithm::XPATH2 => Some(Self::XPath2),
            algorithm::XPOINTER => Some(Self::XPointer),
            _ => None,
        }
    }
}

/// One entry in a transform chain.
#[derive(Debug, Clone)]
pub struct TransformEntry {
    kind: TransformKind,
    params: Option<XmlContent>,
}

impl TransformEntry {
    pub fn kind(&self) -> TransformKind {
        self.kind
    }

    /// Algorithm URI of this entry.
    pub fn uri(&self) -> &'static str {
        self.kind.uri()
    }

    /// Additional parameters element, if the transform carries one.
    pub fn params(&self) -> Option<&XmlContent> {
        self.params.as_ref()
    }
}

/// An ordered transform chain for one signature reference.
#[derive(Debug, Clone)]
pub struct TransformChain {
    entries: Vec<TransformEntry>,
}

impl TransformChain {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append a transform identified by algorithm URI alone.
    ///
    /// Fails on an unknown URI; the chain is left unchanged on failure.
    pub fn add_transform(&mut self, uri: &str) -> Result<()> {
        self.push_entry(uri, None)
    }

    /// Append a transform with an additional parameters element.
    pub fn add_transform_with_params(&mut self, uri: &str, params: XmlContent) -> Result<()> {
        self.push_entry(uri, Some(params))
    }

    fn push_entry(&mut self, uri: &str, params: Option<XmlContent>) -> Result<()> {
        let kind = TransformKind::from_uri(uri).ok_or_else(|| Error::UnsupportedAlgorithm {
            kind: AlgorithmKind::Transform,
            uri: uri.to_owned(),
        })?;
        self.entries.push(TransformEntry { kind, params });
        Ok(())
    }

    /// Entries in application order.
    pub fn entries(&self) -> &[TransformEntry] {
        &self.entries
    }

    /// Number of transforms in the chain.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the chain is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for TransformChain {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_uri_round_trip() {
        for kind in [
            TransformKind::C14n,
            TransformKind::ExclusiveC14n,
            TransformKind::Base64,
            TransformKind::EnvelopedSignature,
            TransformKind::XPath2,
        ] {
            assert_eq!(TransformKind::from_uri(kind.uri()), Some(kind));
        }
        assert_eq!(TransformKind::from_uri(algorithm::XSLT), None);
    }

    #[test]
    fn keeps_application_order() {
        let mut chain = TransformChain::new();
        chain
            .add_transform(algorithm::ENVELOPED_SIGNATURE)
            .unwrap();
        chain.add_transform(algorithm::EXC_C14N).unwrap();
        let uris: Vec<&str> = chain.entries().iter().map(|e| e.uri()).collect();
        assert_eq!(
            uris,
            vec![algorithm::ENVELOPED_SIGNATURE, algorithm::EXC_C14N]
        );
    }

    #[test]
    fn unknown_uri_leaves_chain_unchanged() {
        let mut chain = TransformChain::new();
        chain.add_transform(algorithm::C14N).unwrap();
        let err = chain.add_transform("urn:example:bogus").unwrap_err();
        match err {
            Error::UnsupportedAlgorithm { kind, uri } => {
                assert_eq!(kind, AlgorithmKind::Transform);
                assert_eq!(uri, "urn:example:bogus");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(chain.len(), 1);
    }

    #[test]
    fn params_are_attached_to_their_entry() {
        let params = XmlContent::parse("<XPath>//Data</XPath>").unwrap();
        let mut chain = TransformChain::new();
        chain
            .add_transform_with_params(algorithm::XPATH, params)
            .unwrap();
        assert_eq!(chain.entries()[0].kind(), TransformKind::XPath);
        assert_eq!(
            chain.entries()[0].params().unwrap().as_str(),
            "<XPath>//Data</XPath>"
        );
    }
}
