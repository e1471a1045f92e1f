//! Build a signature template from data object descriptions.
//!
//! Run with: cargo run --example sign_template

use sigtuna::core::algorithm;
use sigtuna::dsig::XmlSignature;
use sigtuna::production::{self, DataObjectRef, EmbeddedObject, SignedDataObjects, TransformSpec};
use sigtuna::xml::XmlContent;

fn main() -> Result<(), sigtuna::core::Error> {
    let mut data_objects = SignedDataObjects::new();

    // A same-document reference with an enveloped-signature transform.
    let enveloped = data_objects.add(
        DataObjectRef::new("#payload")
            .with_transform(TransformSpec::new(algorithm::ENVELOPED_SIGNATURE))
            .with_transform(TransformSpec::new(algorithm::EXC_C14N)),
    );

    // Content embedded into the signature itself.
    let embedded = data_objects.add(
        EmbeddedObject::new(XmlContent::parse("<Invoice number=\"42\"/>")?)
            .with_mime_type("text/xml"),
    );

    let mut signature = XmlSignature::new("sig");
    let references = production::process(&data_objects, &mut signature, algorithm::SHA256)?;

    for handle in [enveloped, embedded] {
        let reference = references.get(handle).expect("every descriptor gets a reference");
        println!("{} -> {}", reference.id(), reference.uri());
    }

    println!(
        "{}",
        signature.write_template(
            algorithm::EXC_C14N,
            "http://www.w3.org/2001/04/xmldsig-more#rsa-sha256",
        )
    );
    Ok(())
}
