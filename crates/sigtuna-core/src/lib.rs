#![forbid(unsafe_code)]

//! Shared foundation for the Sigtuna XML signature-production library.
//!
//! Holds the workspace-wide error type, the XML Security algorithm URI
//! constants, and the XML-DSig namespace and name constants.

pub mod algorithm;
pub mod error;
pub mod ns;

pub use error::{AlgorithmKind, Error, Result};
