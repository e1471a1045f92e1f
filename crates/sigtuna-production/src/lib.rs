#![forbid(unsafe_code)]

//! Signature-production core for the Sigtuna library.
//!
//! Turns abstract data object descriptions into the `Reference` and
//! `Object` entries of an XML signature under construction, and returns
//! the description-to-reference mapping.

pub mod descriptor;
pub mod processor;

pub use descriptor::{
    DataObject, DataObjectHandle, DataObjectRef, EmbeddedObject, SignedDataObjects, TransformSpec,
};
pub use processor::{build_transform_chain, process, ReferenceMap};
