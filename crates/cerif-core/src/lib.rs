//! Entity marshalling and cross-reference resolution.
//!
//! Turns the typed rows of the source tables into the ordered CERIF entity
//! graph:
//!
//! - [`IdGenerator`] issues opaque, run-unique ids;
//! - [`PersonRegistry`] holds the persons known so far;
//! - the [`marshal`] module builds one entity per row and links relation
//!   rows to persons, synthesizing placeholders for unknown ones;
//! - [`assemble`] orders the result and checks its integrity.
//!
//! [`convert`] runs the whole sequence.

pub mod assembler;
pub mod dates;
pub mod error;
pub mod ids;
pub mod marshal;
pub mod pipeline;
pub mod privacy;
pub mod registry;
pub mod report;

pub use assembler::{Graph, GraphParts, assemble};
pub use error::{EngineError, Result};
pub use ids::IdGenerator;
pub use marshal::{EntityMarshaller, MarshalContext, Marshalled, marshal_batch};
pub use pipeline::{Conversion, ConversionOptions, convert};
pub use registry::PersonRegistry;
pub use report::{GapKind, ResolutionGap, RunReport};
