#![forbid(unsafe_code)]

//! Owned XML fragments, validated with roxmltree on construction.

use sigtuna_core::{Error, Result};

/// An owned XML fragment.  Stores the text, validated at construction.
///
/// Used for embedded-object content and transform parameter elements.
/// To work with the parsed tree, call [`XmlContent::parse_doc`], which
/// returns a temporary `roxmltree::Document` borrowing from the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlContent {
    text: String,
}

impl XmlContent {
    /// Parse and validate an XML fragment, taking ownership of the text.
    ///
    /// The fragment must be a single well-formed element.
    pub fn parse(text: &str) -> Result<Self> {
        roxmltree::Document::parse(text).map_err(|e| Error::XmlParse(e.to_string()))?;
        Ok(Self {
            text: text.to_owned(),
        })
    }

    /// The raw XML text of the fragment.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Parse the fragment and return a temporary `roxmltree::Document`.
    pub fn parse_doc(&self) -> Result<roxmltree::Document<'_>> {
        roxmltree::Document::parse(&self.text).map_err(|e| Error::XmlParse(e.to_string()))
    }

    /// Local name of the fragment's root element.
    pub fn root_name(&self) -> Result<String> {
        let doc = self.parse_doc()?;
        Ok(doc.root_element().tag_name().name().to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_well_formed_fragment() {
        let content = XmlContent::parse("<Data attr=\"v\">text</Data>").unwrap();
        assert_eq!(content.as_str(), "<Data attr=\"v\">text</Data>");
        assert_eq!(content.root_name().unwrap(), "Data");
    }

    #[test]
    fn rejects_malformed_fragment() {
        let err = XmlContent::parse("<Data>unclosed").unwrap_err();
        assert!(matches!(err, Error::XmlParse(_)));
    }
}
