use thiserror::Error;

use crate::Concept;

/// Errors raised while constructing model values.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid entity id: {0:?}")]
    InvalidEntityId(String),
}

/// Input content that makes the conversion impossible.
///
/// Raised for a missing or empty mandatory table, a missing mandatory field or a
/// duplicated person identifier. Always terminates the run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentError {
    #[error("mandatory {table} table is missing")]
    MissingTable { table: &'static str },

    #[error("{table} table has no rows")]
    EmptyTable { table: &'static str },

    #[error("{table} row {row}: missing mandatory field '{field}'")]
    MissingField {
        table: &'static str,
        row: usize,
        field: &'static str,
    },

    #[error("{table} row {row}: federated id '{value}' already belongs to another person")]
    DuplicateFederatedId {
        table: &'static str,
        row: usize,
        value: String,
    },
}

/// Catalog misconfiguration; never expected with the built-in catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("no classification registered for concept '{0}'")]
    Unclassified(Concept),

    #[error("unknown semantic concept '{0}'")]
    UnknownConcept(String),

    #[error("blank {part} code for concept '{concept}'")]
    BlankCode {
        concept: Concept,
        part: &'static str,
    },
}
