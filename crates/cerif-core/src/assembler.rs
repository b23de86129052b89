//! Final graph assembly and integrity checks.

use std::collections::{HashMap, HashSet};

use cerif_model::{Entity, EntityId, EntityKind};

use crate::error::{EngineError, Result};

/// Per-kind entity lists handed to the assembler.
#[derive(Debug, Clone, Default)]
pub struct GraphParts {
    pub departments: Vec<Entity>,
    pub research_groups: Vec<Entity>,
    pub projects: Vec<Entity>,
    pub publications: Vec<Entity>,
    pub persons: Vec<Entity>,
}

/// Ordered, verified entity sequence ready for serialization.
///
/// Order: departments, research groups, projects, publications, persons.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Graph {
    entities: Vec<Entity>,
}

impl Graph {
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn persons(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter().filter(|entity| entity.is_person())
    }

    pub fn of_kind(&self, kind: EntityKind) -> impl Iterator<Item = &Entity> {
        self.entities.iter().filter(move |entity| entity.kind == kind)
    }

    pub fn get(&self, id: &EntityId) -> Option<&Entity> {
        self.entities.iter().find(|entity| entity.id() == id)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

/// Flatten the parts in document order and verify the graph.
///
/// Every failure here is an engine defect, never an input problem.
pub fn assemble(parts: GraphParts) -> Result<Graph> {
    let GraphParts {
        departments,
        research_groups,
        projects,
        publications,
        persons,
    } = parts;

    let mut entities = Vec::with_capacity(
        departments.len()
            + research_groups.len()
            + projects.len()
            + publications.len()
            + persons.len(),
    );
    entities.extend(departments);
    entities.extend(research_groups);
    entities.extend(projects);
    entities.extend(publications);
    entities.extend(persons);

    verify(&entities)?;
    Ok(Graph { entities })
}

fn verify(entities: &[Entity]) -> Result<()> {
    let mut ids: HashSet<&EntityId> = HashSet::with_capacity(entities.len());
    let mut person_ids: HashSet<&EntityId> = HashSet::new();
    let mut federated: HashMap<&str, &EntityId> = HashMap::new();

    for entity in entities {
        if !ids.insert(entity.id()) {
            return Err(EngineError::DuplicateIdentifier(entity.id().clone()));
        }
        if entity.is_person() {
            person_ids.insert(entity.id());
            if let Some(fed_id) = entity.federated_id().filter(|value| !value.is_empty())
                && federated.insert(fed_id.as_str(), entity.id()).is_some()
            {
                return Err(EngineError::DuplicatePerson(fed_id.unescaped()));
            }
        }
    }

    for entity in entities {
        for element_id in entity.element_ids() {
            if !ids.insert(element_id) {
                return Err(EngineError::DuplicateIdentifier(element_id.clone()));
            }
        }
        for edge in &entity.relations {
            if !person_ids.contains(&edge.target) {
                return Err(EngineError::DanglingReference {
                    owner: entity.id().clone(),
                    target: edge.target.clone(),
                });
            }
        }
    }
    Ok(())
}
