#![forbid(unsafe_code)]

//! Push-down XML writer for serializing signature structures.

use crate::escape::{escape_attr, escape_text};

/// A minimal XML writer producing signature template text.
///
/// The caller is responsible for balancing `start_element`/`end_element`
/// calls.  Output carries no insignificant whitespace, so the written
/// text is stable under canonicalization of element content.
pub struct XmlWriter {
    out: String,
}

impl XmlWriter {
    /// Create a new XML writer.
    pub fn new() -> Self {
        Self { out: String::new() }
    }

    /// Write the XML declaration.
    pub fn write_declaration(&mut self) {
        self.out
            .push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>");
    }

    /// Start an element with the given name and attributes.
    pub fn start_element(&mut self, name: &str, attrs: &[(&str, &str)]) {
        self.out.push('<');
        self.out.push_str(name);
        self.write_attrs(attrs);
        self.out.push('>');
    }

    /// Write a self-closing element.
    pub fn empty_element(&mut self, name: &str, attrs: &[(&str, &str)]) {
        self.out.push('<');
        self.out.push_str(name);
        self.write_attrs(attrs);
        self.out.push_str("/>");
    }

    /// End the current element.
    pub fn end_element(&mut self, name: &str) {
        self.out.push_str("</");
        self.out.push_str(name);
        self.out.push('>');
    }

    /// Write escaped text content.
    pub fn text(&mut self, text: &str) {
        self.out.push_str(&escape_text(text));
    }

    /// Write a pre-validated XML fragment verbatim.
    pub fn write_raw(&mut self, xml: &str) {
        self.out.push_str(xml);
    }

    /// Finish writing and return the XML text.
    pub fn into_string(self) -> String {
        self.out
    }

    fn write_attrs(&mut self, attrs: &[(&str, &str)]) {
        for (name, value) in attrs {
            self.out.push(' ');
            self.out.push_str(name);
            self.out.push_str("=\"");
            self.out.push_str(&escape_attr(value));
            self.out.push('"');
        }
    }
}

impl Default for XmlWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_nested_elements() {
        let mut w = XmlWriter::new();
        w.start_element("Outer", &[("Id", "o1")]);
        w.empty_element("Inner", &[]);
        w.text("a & b");
        w.end_element("Outer");
        assert_eq!(
            w.into_string(),
            "<Outer Id=\"o1\"><Inner/>a &amp; b</Outer>"
        );
    }

    #[test]
    fn escapes_attribute_values() {
        let mut w = XmlWriter::new();
        w.empty_element("E", &[("a", "x\"y<z")]);
        assert_eq!(w.into_string(), "<E a=\"x&quot;y&lt;z\"/>");
    }
}
