//! CERIF document generation.
//!
//! Serializes an assembled [`cerif_core::Graph`] as a CERIF 1.6 XML
//! document in one of the supported output charsets.

mod cerif_xml;
mod common;
mod encoding;

pub use cerif_xml::{OutputTarget, render_cerif, write_output};
pub use common::CERIF_NS;
pub use encoding::encode_document;
