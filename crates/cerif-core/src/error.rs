use cerif_model::{ConfigurationError, ContentError, EntityId, ModelError};
use thiserror::Error;

/// Fatal conditions of a conversion run.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Content(#[from] ContentError),

    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Model(#[from] ModelError),

    /// A relation edge targets an id that is not in the person list.
    #[error("entity {owner} has a relation to {target}, which is not a known person")]
    DanglingReference { owner: EntityId, target: EntityId },

    #[error("identifier {0} is used more than once")]
    DuplicateIdentifier(EntityId),

    /// Appending a person whose federated id is already registered.
    #[error("a person with federated id '{0}' is already registered")]
    DuplicatePerson(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
