#![forbid(unsafe_code)]

//! XML content handling for the Sigtuna signature-production library.
//!
//! Provides [`XmlContent`] (owned, validated XML fragments used for
//! embedded-object content and transform parameters), entity escaping,
//! and [`XmlWriter`] for serializing signature structures.

pub mod content;
pub mod escape;
pub mod writer;

pub use content::XmlContent;
pub use writer::XmlWriter;
