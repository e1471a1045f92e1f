#![forbid(unsafe_code)]

//! Cryptographic provider for the Sigtuna signature-production library.
//!
//! Exposes the digest algorithm registry that the signature engine
//! validates digest method URIs against.

pub mod digest;
