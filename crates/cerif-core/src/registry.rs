//! The run-wide person list.

use std::collections::{HashMap, HashSet};

use cerif_model::{ContentError, Entity, EntityId, EntityKind, ResearcherRow, TableRow, XmlText};

use crate::error::{EngineError, Result};

/// Ordered, append-only collection of person entities.
///
/// Holds at most one person per federated id. Marshallers read it through a
/// shared borrow; the pipeline appends their placeholders between batches.
#[derive(Debug, Clone, Default)]
pub struct PersonRegistry {
    persons: Vec<Entity>,
    by_federated_id: HashMap<String, usize>,
}

impl PersonRegistry {
    /// Build the registry from the marshalled researchers.
    ///
    /// A federated id shared by two researchers is a content error; `row`
    /// in the error is the 1-based position of the second occurrence.
    pub fn seed(persons: Vec<Entity>) -> std::result::Result<Self, ContentError> {
        let mut registry = Self::default();
        for (idx, person) in persons.into_iter().enumerate() {
            if let Some(fed_id) = person.federated_id()
                && registry.by_federated_id.contains_key(fed_id.as_str())
            {
                return Err(ContentError::DuplicateFederatedId {
                    table: ResearcherRow::TABLE,
                    row: idx + 1,
                    value: fed_id.unescaped(),
                });
            }
            registry.push(person);
        }
        Ok(registry)
    }

    /// Append synthesized persons, keeping their order.
    ///
    /// Nothing is appended if any federated id is already registered or
    /// repeated within `persons`.
    pub fn append(&mut self, persons: Vec<Entity>) -> Result<()> {
        let mut incoming = HashSet::new();
        for person in &persons {
            if let Some(fed_id) = person.federated_id() {
                if self.by_federated_id.contains_key(fed_id.as_str())
                    || !incoming.insert(fed_id.as_str())
                {
                    return Err(EngineError::DuplicatePerson(fed_id.unescaped()));
                }
            }
        }
        for person in persons {
            self.push(person);
        }
        Ok(())
    }

    fn push(&mut self, person: Entity) {
        if let Some(fed_id) = person.federated_id() {
            self.by_federated_id
                .insert(fed_id.as_str().to_string(), self.persons.len());
        }
        self.persons.push(person);
    }

    /// Person whose stored federated id equals `value` (raw text, trimmed).
    pub fn lookup_by_federated_id(&self, value: &str) -> Option<&Entity> {
        let key = XmlText::escape(value.trim());
        self.by_federated_id
            .get(key.as_str())
            .and_then(|idx| self.persons.get(*idx))
    }

    pub fn contains_id(&self, id: &EntityId) -> bool {
        self.persons.iter().any(|person| person.id() == id)
    }

    pub fn persons(&self) -> &[Entity] {
        &self.persons
    }

    pub fn into_persons(self) -> Vec<Entity> {
        self.persons
    }

    pub fn len(&self) -> usize {
        self.persons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }

    pub fn placeholder_count(&self) -> usize {
        self.persons
            .iter()
            .filter(|person| person.kind == EntityKind::PersonPlaceholder)
            .count()
    }
}
