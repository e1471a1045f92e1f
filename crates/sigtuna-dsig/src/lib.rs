#![forbid(unsafe_code)]

//! Signature engine for the Sigtuna signature-production library.
//!
//! Holds the XML signature under construction: its growing reference
//! and object sequences, the transform chain representation with
//! fail-fast algorithm validation, and template serialization.

pub mod object;
pub mod signature;
pub mod template;
pub mod transforms;

pub use object::{ObjectContainer, ObjectContent};
pub use signature::{Reference, ReferenceType, XmlSignature};
pub use transforms::{TransformChain, TransformEntry, TransformKind};
