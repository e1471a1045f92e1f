#![forbid(unsafe_code)]

//! Data object descriptors: what a signature will cover, before any
//! concrete reference exists.

use sigtuna_xml::XmlContent;

/// A transform to apply to a data object's content before digesting.
#[derive(Debug, Clone)]
pub struct TransformSpec {
    algorithm: String,
    params: Option<XmlContent>,
}

impl TransformSpec {
    /// A transform identified by algorithm URI alone.
    pub fn new(algorithm: &str) -> Self {
        Self {
            algorithm: algorithm.to_owned(),
            params: None,
        }
    }

    /// Attach a parameters element to the transform.
    pub fn with_params(mut self, params: XmlContent) -> Self {
        self.params = Some(params);
        self
    }

    pub fn algorithm(&self) -> &str {
        &self.algorithm
    }

    pub fn params(&self) -> Option<&XmlContent> {
        self.params.as_ref()
    }
}

/// A data object referenced by URI: content already addressable in or
/// near the document being signed.
#[derive(Debug, Clone)]
pub struct DataObjectRef {
    uri: String,
    transforms: Vec<TransformSpec>,
}

impl DataObjectRef {
    pub fn new(uri: &str) -> Self {
        Self {
            uri: uri.to_owned(),
            transforms: Vec::new(),
        }
    }

    /// Append a transform; application order is insertion order.
    pub fn with_transform(mut self, transform: TransformSpec) -> Self {
        self.transforms.push(transform);
        self
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub fn transforms(&self) -> &[TransformSpec] {
        &self.transforms
    }
}

/// A data object whose content is embedded into the signature as a new
/// `ds:Object`, then referenced through its generated identifier.
#[derive(Debug, Clone)]
pub struct EmbeddedObject {
    content: XmlContent,
    mime_type: Option<String>,
    encoding: Option<String>,
    transforms: Vec<TransformSpec>,
}

impl EmbeddedObject {
    pub fn new(content: XmlContent) -> Self {
        Self {
            content,
            mime_type: None,
            encoding: None,
            transforms: Vec::new(),
        }
    }

    pub fn with_mime_type(mut self, mime_type: &str) -> Self {
        self.mime_type = Some(mime_type.to_owned());
        self
    }

    pub fn with_encoding(mut self, encoding: &str) -> Self {
        self.encoding = Some(encoding.to_owned());
        self
    }

    /// Append a transform; application order is insertion order.
    pub fn with_transform(mut self, transform: TransformSpec) -> Self {
        self.transforms.push(transform);
        self
    }

    pub fn content(&self) -> &XmlContent {
        &self.content
    }

    pub fn mime_type(&self) -> Option<&str> {
        self.mime_type.as_deref()
    }

    pub fn encoding(&self) -> Option<&str> {
        self.encoding.as_deref()
    }

    pub fn transforms(&self) -> &[TransformSpec] {
        &self.transforms
    }
}

/// A data object description.
///
/// The variant set is closed: every descriptor either references
/// existing content or embeds new content.
#[derive(Debug, Clone)]
pub enum DataObject {
    /// Reference content by URI.
    Reference(DataObjectRef),
    /// Embed content, then reference it.
    Embedded(EmbeddedObject),
}

impl DataObject {
    /// The descriptor's transform list, in application order.
    pub fn transforms(&self) -> &[TransformSpec] {
        match self {
            DataObject::Reference(reference) => reference.transforms(),
            DataObject::Embedded(embedded) => embedded.transforms(),
        }
    }
}

impl From<DataObjectRef> for DataObject {
    fn from(reference: DataObjectRef) -> Self {
        DataObject::Reference(reference)
    }
}

impl From<EmbeddedObject> for DataObject {
    fn from(embedded: EmbeddedObject) -> Self {
        DataObject::Embedded(embedded)
    }
}

/// Handle to a descriptor in a [`SignedDataObjects`] collection.
///
/// Handles compare by position, not by descriptor value, so two
/// structurally equal descriptors added separately stay distinct keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DataObjectHandle(usize);

impl DataObjectHandle {
    /// Position of the descriptor in insertion order.
    pub fn index(&self) -> usize {
        self.0
    }
}

/// The ordered collection of data objects covered by one signature.
#[derive(Debug, Default)]
pub struct SignedDataObjects {
    objects: Vec<DataObject>,
}

impl SignedDataObjects {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a descriptor and return its handle.
    pub fn add(&mut self, object: impl Into<DataObject>) -> DataObjectHandle {
        let handle = DataObjectHandle(self.objects.len());
        self.objects.push(object.into());
        handle
    }

    pub fn get(&self, handle: DataObjectHandle) -> Option<&DataObject> {
        self.objects.get(handle.0)
    }

    /// Descriptors with their handles, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (DataObjectHandle, &DataObject)> {
        self.objects
            .iter()
            .enumerate()
            .map(|(index, object)| (DataObjectHandle(index), object))
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structurally_equal_descriptors_get_distinct_handles() {
        let mut objects = SignedDataObjects::new();
        let first = objects.add(DataObjectRef::new("#same"));
        let second = objects.add(DataObjectRef::new("#same"));
        assert_ne!(first, second);
        assert_eq!(objects.len(), 2);
    }

    #[test]
    fn iteration_follows_insertion_order() {
        let mut objects = SignedDataObjects::new();
        objects.add(DataObjectRef::new("#a"));
        objects.add(DataObjectRef::new("#b"));
        let uris: Vec<&str> = objects
            .iter()
            .map(|(_, object)| match object {
                DataObject::Reference(reference) => reference.uri(),
                DataObject::Embedded(_) => unreachable!(),
            })
            .collect();
        assert_eq!(uris, vec!["#a", "#b"]);
    }
}
