//! CERIF semantic layer.
//!
//! The [`Catalog`] maps every [`cerif_model::Concept`] to the
//! scheme/class pair written into the document. The built-in table can be
//! adjusted with a TOML override file.

mod builtin;
pub mod catalog;
pub mod error;
pub mod overrides;
pub mod schemes;

pub use catalog::Catalog;
pub use error::StandardsError;
pub use overrides::Override;
