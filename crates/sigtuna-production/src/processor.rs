#![forbid(unsafe_code)]

//! Reference construction.
//!
//! Walks the data object descriptors of one signature in order, builds
//! each descriptor's transform chain, resolves its reference URI
//! (embedding a new object for embedded content), and adds a reference
//! with a generated identifier to the signature under construction.

use crate::descriptor::{DataObject, DataObjectHandle, SignedDataObjects, TransformSpec};
use sigtuna_core::{Error, Result};
use sigtuna_dsig::{ObjectContainer, Reference, ReferenceType, TransformChain, XmlSignature};
use std::collections::HashMap;

/// Immutable mapping from descriptor handles to the references produced
/// for them.  Exactly one entry per input descriptor.
#[derive(Debug)]
pub struct ReferenceMap {
    entries: HashMap<DataObjectHandle, Reference>,
}

impl ReferenceMap {
    /// The reference produced for a descriptor.
    pub fn get(&self, handle: DataObjectHandle) -> Option<&Reference> {
        self.entries.get(&handle)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (DataObjectHandle, &Reference)> {
        self.entries.iter().map(|(handle, reference)| (*handle, reference))
    }
}

/// Build the transform chain for one descriptor's transform list.
///
/// An empty list yields `None`: the reference then carries no
/// `Transforms` element at all, which is distinct from an empty chain.
/// Validation is fail-fast, so the first unsupported algorithm aborts
/// the build and no partially built chain escapes.
pub fn build_transform_chain(specs: &[TransformSpec]) -> Result<Option<TransformChain>> {
    if specs.is_empty() {
        return Ok(None);
    }

    let mut chain = TransformChain::new();
    for spec in specs {
        match spec.params() {
            None => chain.add_transform(spec.algorithm())?,
            Some(params) => chain.add_transform_with_params(spec.algorithm(), params.clone())?,
        }
    }
    Ok(Some(chain))
}

/// Process the data object descriptors of one signature.
///
/// The corresponding references and objects are added to `signature`;
/// the returned map associates every descriptor handle with the
/// reference produced for it.  Identifiers are derived from the
/// signature's id and its current reference and object counts, as
/// `"{id}-ref{N}"` and `"{id}-object{M}"`, so repeated passes over one
/// signature never collide.
///
/// The pass is all-or-nothing: the first failure aborts it and the map
/// built so far is discarded.  The signature keeps whatever objects and
/// references were added before the failing descriptor; a signature
/// that went through a failed pass must be discarded, not retried.
pub fn process(
    data_objects: &SignedDataObjects,
    signature: &mut XmlSignature,
    digest_method_uri: &str,
) -> Result<ReferenceMap> {
    let mut entries = HashMap::with_capacity(data_objects.len());

    for (handle, data_object) in data_objects.iter() {
        let transforms = build_transform_chain(data_object.transforms())?;

        let (ref_uri, ref_type) = match data_object {
            DataObject::Reference(reference) => (reference.uri().to_owned(), None),
            DataObject::Embedded(embedded) => {
                // Embedded content gets its own object; the reference
                // points at the object's generated id.
                let object_id =
                    format!("{}-object{}", signature.id(), signature.object_count());

                let mut container = ObjectContainer::new();
                container.set_id(&object_id);
                container.append_child(embedded.content().clone());
                if let Some(mime_type) = embedded.mime_type() {
                    container.set_mime_type(mime_type);
                }
                if let Some(encoding) = embedded.encoding() {
                    container.set_encoding(encoding);
                }
                signature.append_object(container);

                (format!("#{object_id}"), Some(ReferenceType::Object))
            }
        };

        // References need an id because qualifying properties may point
        // back at them later.
        let index = signature.reference_count();
        let ref_id = format!("{}-ref{}", signature.id(), index);
        signature.add_reference(&ref_uri, transforms, digest_method_uri, &ref_id, ref_type)?;

        let reference = signature.reference_at(index).ok_or_else(|| {
            Error::Internal(format!("reference {index} not found after adding it"))
        })?;
        entries.insert(handle, reference.clone());
    }

    Ok(ReferenceMap { entries })
}
