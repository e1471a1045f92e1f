#![forbid(unsafe_code)]

//! Object containers: content embedded directly in a signature.

use base64::Engine;
use sigtuna_core::algorithm;
use sigtuna_xml::XmlContent;

/// A child of a `ds:Object` element.
#[derive(Debug, Clone)]
pub enum ObjectContent {
    /// An XML element child.
    Element(XmlContent),
    /// A text child, e.g. a base64 payload.
    Text(String),
}

/// A `ds:Object` under construction.
///
/// Carries the identifier the containing signature assigned to it plus
/// optional MIME type and encoding, and the embedded content itself.
#[derive(Debug, Clone, Default)]
pub struct ObjectContainer {
    id: Option<String>,
    mime_type: Option<String>,
    encoding: Option<String>,
    children: Vec<ObjectContent>,
}

impl ObjectContainer {
    /// Create an empty object container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the `Id` attribute.
    pub fn set_id(&mut self, id: &str) {
        self.id = Some(id.to_owned());
    }

    /// Set the `MimeType` attribute.
    pub fn set_mime_type(&mut self, mime_type: &str) {
        self.mime_type = Some(mime_type.to_owned());
    }

    /// Set the `Encoding` attribute.
    pub fn set_encoding(&mut self, encoding: &str) {
        self.encoding = Some(encoding.to_owned());
    }

    /// Append an XML element child.
    pub fn append_child(&mut self, content: XmlContent) {
        self.children.push(ObjectContent::Element(content));
    }

    /// Append binary content, base64-encoded.
    ///
    /// Sets the `Encoding` attribute to the base64 algorithm URI.
    pub fn append_binary(&mut self, data: &[u8]) {
        let engine = base64::engine::general_purpose::STANDARD;
        self.children.push(ObjectContent::Text(engine.encode(data)));
        self.encoding = Some(algorithm::BASE64.to_owned());
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn mime_type(&self) -> Option<&str> {
        self.mime_type.as_deref()
    }

    pub fn encoding(&self) -> Option<&str> {
        self.encoding.as_deref()
    }

    /// Embedded content, in insertion order.
    pub fn children(&self) -> &[ObjectContent] {
        &self.children
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binary_content_is_base64_encoded() {
        let mut object = ObjectContainer::new();
        object.append_binary(b"hello");
        assert_eq!(object.encoding(), Some(algorithm::BASE64));
        match &object.children()[0] {
            ObjectContent::Text(text) => assert_eq!(text, "aGVsbG8="),
            other => panic!("unexpected child: {other:?}"),
        }
    }

    #[test]
    fn attributes_are_recorded() {
        let mut object = ObjectContainer::new();
        object.set_id("sig-object0");
        object.set_mime_type("text/xml");
        assert_eq!(object.id(), Some("sig-object0"));
        assert_eq!(object.mime_type(), Some("text/xml"));
        assert!(object.encoding().is_none());
    }
}
