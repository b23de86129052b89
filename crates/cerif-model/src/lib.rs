//! CERIF graph model.
//!
//! Types shared by every stage of the conversion: the entities and relation
//! edges of the output graph, the typed rows read from the source tables,
//! the semantic concepts classified through the catalog, and the error
//! taxonomy of the engine.

pub mod entity;
pub mod error;
pub mod ids;
pub mod options;
pub mod rows;
pub mod semantics;
pub mod text;

pub use entity::{Attribute, Entity, EntityKind, Field, RelationEdge, Role, VerificationStatus};
pub use error::{ConfigurationError, ContentError, ModelError};
pub use ids::EntityId;
pub use options::{DocumentOptions, OutputCharset};
pub use rows::{OrgUnitRow, ProjectRow, PublicationRow, RelationRow, ResearcherRow, TableRow};
pub use semantics::{Classification, Concept, PublicationType};
pub use text::XmlText;
