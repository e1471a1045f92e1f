#![forbid(unsafe_code)]

//! The XML signature under construction.

use crate::object::ObjectContainer;
use crate::transforms::TransformChain;
use sigtuna_core::{ns, Result};
use sigtuna_crypto::digest;

/// Marker for the `Type` attribute of a reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceType {
    /// Points at a `ds:Object` in the same signature.
    Object,
    /// Points at a `ds:Manifest`.
    Manifest,
    /// Points at a `ds:SignatureProperties` element.
    SignatureProperties,
}

impl ReferenceType {
    /// The type URI written to the `Type` attribute.
    pub fn uri(&self) -> &'static str {
        match self {
            ReferenceType::Object => ns::TYPE_OBJECT,
            ReferenceType::Manifest => ns::TYPE_MANIFEST,
            ReferenceType::SignatureProperties => ns::TYPE_SIGNATURE_PROPERTIES,
        }
    }
}

/// A signed reference: a pointer to content plus digest method and
/// transform chain.
///
/// Immutable once created; addressable by its assigned id.
#[derive(Debug, Clone)]
pub struct Reference {
    id: String,
    uri: String,
    ref_type: Option<ReferenceType>,
    transforms: Option<TransformChain>,
    digest_method: String,
}

impl Reference {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub fn ref_type(&self) -> Option<ReferenceType> {
        self.ref_type
    }

    /// Transform chain, absent when the reference carries none.
    pub fn transforms(&self) -> Option<&TransformChain> {
        self.transforms.as_ref()
    }

    pub fn digest_method(&self) -> &str {
        &self.digest_method
    }
}

/// An XML signature under construction.
///
/// Holds the signature id and the growing object and reference
/// sequences.  Single-writer: one build pass mutates it at a time, and
/// a context that went through a failed pass must be discarded.
#[derive(Debug)]
pub struct XmlSignature {
    id: String,
    objects: Vec<ObjectContainer>,
    references: Vec<Reference>,
}

impl XmlSignature {
    /// Create an empty signature with the given id.
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_owned(),
            objects: Vec::new(),
            references: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Number of objects appended so far.
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Number of references added so far.
    pub fn reference_count(&self) -> usize {
        self.references.len()
    }

    /// Append an object container to the signature.
    pub fn append_object(&mut self, object: ObjectContainer) {
        self.objects.push(object);
    }

    /// Add a reference to the signature.
    ///
    /// The digest method URI is validated against the crypto provider
    /// before anything is recorded; an unknown digest algorithm fails
    /// and leaves the signature unchanged.
    pub fn add_reference(
        &mut self,
        uri: &str,
        transforms: Option<TransformChain>,
        digest_method_uri: &str,
        id: &str,
        ref_type: Option<ReferenceType>,
    ) -> Result<()> {
        digest::from_uri(digest_method_uri)?;
        self.references.push(Reference {
            id: id.to_owned(),
            uri: uri.to_owned(),
            ref_type,
            transforms,
            digest_method: digest_method_uri.to_owned(),
        });
        Ok(())
    }

    /// The reference at the given position, in creation order.
    pub fn reference_at(&self, index: usize) -> Option<&Reference> {
        self.references.get(index)
    }

    /// Objects in append order.
    pub fn objects(&self) -> &[ObjectContainer] {
        &self.objects
    }

    /// References in creation order.
    pub fn references(&self) -> &[Reference] {
        &self.references
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sigtuna_core::{algorithm, AlgorithmKind, Error};

    #[test]
    fn add_reference_records_in_order() {
        let mut sig = XmlSignature::new("sig");
        sig.add_reference("#a", None, algorithm::SHA256, "sig-ref0", None)
            .unwrap();
        sig.add_reference(
            "#b",
            None,
            algorithm::SHA256,
            "sig-ref1",
            Some(ReferenceType::Object),
        )
        .unwrap();

        assert_eq!(sig.reference_count(), 2);
        let second = sig.reference_at(1).unwrap();
        assert_eq!(second.id(), "sig-ref1");
        assert_eq!(second.uri(), "#b");
        assert_eq!(second.ref_type(), Some(ReferenceType::Object));
        assert_eq!(second.digest_method(), algorithm::SHA256);
    }

    #[test]
    fn unknown_digest_method_is_rejected_eagerly() {
        let mut sig = XmlSignature::new("sig");
        let err = sig
            .add_reference("#a", None, "urn:example:bad-digest", "sig-ref0", None)
            .unwrap_err();
        match err {
            Error::UnsupportedAlgorithm { kind, uri } => {
                assert_eq!(kind, AlgorithmKind::DigestMethod);
                assert_eq!(uri, "urn:example:bad-digest");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(sig.reference_count(), 0);
    }

    #[test]
    fn reference_type_uris() {
        assert_eq!(ReferenceType::Object.uri(), ns::TYPE_OBJECT);
        assert_eq!(ReferenceType::Manifest.uri(), ns::TYPE_MANIFEST);
    }
}
