#![forbid(unsafe_code)]

//! XML-DSig template serialization.
//!
//! Renders the accumulated signature structure as a template with empty
//! `DigestValue` and `SignatureValue` elements, the form a template
//! signing engine fills in after canonicalizing and digesting.

use crate::object::{ObjectContainer, ObjectContent};
use crate::signature::{Reference, XmlSignature};
use sigtuna_core::ns;
use sigtuna_xml::XmlWriter;

const DS_PREFIX: &str = "ds";

fn q(local: &str) -> String {
    format!("{DS_PREFIX}:{local}")
}

impl XmlSignature {
    /// Serialize the signature as an XML-DSig template.
    ///
    /// Output carries no insignificant whitespace.  `DigestValue` and
    /// `SignatureValue` are written as empty open/close pairs so a
    /// template signing step can fill them in place.
    pub fn write_template(&self, c14n_method_uri: &str, signature_method_uri: &str) -> String {
        let mut w = XmlWriter::new();
        let xmlns = format!("xmlns:{DS_PREFIX}");

        w.start_element(
            &q(ns::node::SIGNATURE),
            &[(xmlns.as_str(), ns::DSIG), (ns::attr::ID, self.id())],
        );

        w.start_element(&q(ns::node::SIGNED_INFO), &[]);
        w.empty_element(
            &q(ns::node::CANONICALIZATION_METHOD),
            &[(ns::attr::ALGORITHM, c14n_method_uri)],
        );
        w.empty_element(
            &q(ns::node::SIGNATURE_METHOD),
            &[(ns::attr::ALGORITHM, signature_method_uri)],
        );
        for reference in self.references() {
            write_reference(&mut w, reference);
        }
        w.end_element(&q(ns::node::SIGNED_INFO));

        w.start_element(&q(ns::node::SIGNATURE_VALUE), &[]);
        w.end_element(&q(ns::node::SIGNATURE_VALUE));

        for object in self.objects() {
            write_object(&mut w, object);
        }

        w.end_element(&q(ns::node::SIGNATURE));
        w.into_string()
    }
}

fn write_reference(w: &mut XmlWriter, reference: &Reference) {
    let mut attrs = vec![
        (ns::attr::ID, reference.id()),
        (ns::attr::URI, reference.uri()),
    ];
    if let Some(ref_type) = reference.ref_type() {
        attrs.push((ns::attr::TYPE, ref_type.uri()));
    }
    w.start_element(&q(ns::node::REFERENCE), &attrs);

    if let Some(chain) = reference.transforms() {
        w.start_element(&q(ns::node::TRANSFORMS), &[]);
        for entry in chain.entries() {
            match entry.params() {
                None => {
                    w.empty_element(
                        &q(ns::node::TRANSFORM),
                        &[(ns::attr::ALGORITHM, entry.uri())],
                    );
                }
                Some(params) => {
                    w.start_element(
                        &q(ns::node::TRANSFORM),
                        &[(ns::attr::ALGORITHM, entry.uri())],
                    );
                    w.write_raw(params.as_str());
                    w.end_element(&q(ns::node::TRANSFORM));
                }
            }
        }
        w.end_element(&q(ns::node::TRANSFORMS));
    }

    w.empty_element(
        &q(ns::node::DIGEST_METHOD),
        &[(ns::attr::ALGORITHM, reference.digest_method())],
    );
    w.start_element(&q(ns::node::DIGEST_VALUE), &[]);
    w.end_element(&q(ns::node::DIGEST_VALUE));

    w.end_element(&q(ns::node::REFERENCE));
}

fn write_object(w: &mut XmlWriter, object: &ObjectContainer) {
    let mut attrs = Vec::new();
    if let Some(id) = object.id() {
        attrs.push((ns::attr::ID, id));
    }
    if let Some(mime_type) = object.mime_type() {
        attrs.push((ns::attr::MIME_TYPE, mime_type));
    }
    if let Some(encoding) = object.encoding() {
        attrs.push((ns::attr::ENCODING, encoding));
    }
    w.start_element(&q(ns::node::OBJECT), &attrs);
    for child in object.children() {
        match child {
            ObjectContent::Element(content) => w.write_raw(content.as_str()),
            ObjectContent::Text(text) => w.text(text),
        }
    }
    w.end_element(&q(ns::node::OBJECT));
}

#[cfg(test)]
mod tests {
    use super::*;
    use sigtuna_core::algorithm;
    use sigtuna_xml::XmlContent;

    #[test]
    fn renders_reference_only_template() {
        let mut sig = XmlSignature::new("sig");
        sig.add_reference("#data1", None, algorithm::SHA256, "sig-ref0", None)
            .unwrap();

        let xml = sig.write_template(algorithm::EXC_C14N, "urn:example:sigalg");
        assert_eq!(
            xml,
            "<ds:Signature xmlns:ds=\"http://www.w3.org/2000/09/xmldsig#\" Id=\"sig\">\
             <ds:SignedInfo>\
             <ds:CanonicalizationMethod Algorithm=\"http://www.w3.org/2001/10/xml-exc-c14n#\"/>\
             <ds:SignatureMethod Algorithm=\"urn:example:sigalg\"/>\
             <ds:Reference Id=\"sig-ref0\" URI=\"#data1\">\
             <ds:DigestMethod Algorithm=\"http://www.w3.org/2001/04/xmlenc#sha256\"/>\
             <ds:DigestValue></ds:DigestValue>\
             </ds:Reference>\
             </ds:SignedInfo>\
             <ds:SignatureValue></ds:SignatureValue>\
             </ds:Signature>"
        );
    }

    #[test]
    fn renders_object_and_transforms() {
        let mut sig = XmlSignature::new("sig");

        let mut object = crate::object::ObjectContainer::new();
        object.set_id("sig-object0");
        object.set_mime_type("text/xml");
        object.append_child(XmlContent::parse("<x/>").unwrap());
        sig.append_object(object);

        let mut chain = crate::transforms::TransformChain::new();
        chain.add_transform(algorithm::C14N).unwrap();
        sig.add_reference(
            "#sig-object0",
            Some(chain),
            algorithm::SHA256,
            "sig-ref0",
            Some(crate::signature::ReferenceType::Object),
        )
        .unwrap();

        let xml = sig.write_template(algorithm::C14N, "urn:example:sigalg");
        assert!(xml.contains(
            "<ds:Reference Id=\"sig-ref0\" URI=\"#sig-object0\" \
             Type=\"http://www.w3.org/2000/09/xmldsig#Object\">"
        ));
        assert!(xml.contains(
            "<ds:Transforms>\
             <ds:Transform Algorithm=\"http://www.w3.org/TR/2001/REC-xml-c14n-20010315\"/>\
             </ds:Transforms>"
        ));
        assert!(
            xml.contains("<ds:Object Id=\"sig-object0\" MimeType=\"text/xml\"><x/></ds:Object>")
        );
    }
}
