//! Relation row resolution and placeholder synthesis.

use std::collections::{HashMap, HashSet};

use cerif_model::{
    Attribute, Concept, Entity, EntityId, EntityKind, Field, RelationEdge, RelationRow, Role,
    VerificationStatus, XmlText,
};

use super::MarshalContext;
use crate::error::Result;
use crate::privacy::redact_value;
use crate::registry::PersonRegistry;
use crate::report::{GapKind, ResolutionGap};

/// Relation rows grouped by trimmed owner code, in table order.
pub(super) struct RelationIndex<'r> {
    by_owner: HashMap<&'r str, Vec<(usize, &'r RelationRow)>>,
    order: Vec<&'r str>,
    claimed: HashSet<&'r str>,
}

impl<'r> RelationIndex<'r> {
    pub(super) fn new(relations: &'r [RelationRow]) -> Self {
        let mut by_owner: HashMap<&str, Vec<(usize, &RelationRow)>> = HashMap::new();
        let mut order = Vec::new();
        for (idx, row) in relations.iter().enumerate() {
            let code = row.owner_code.trim();
            let rows = by_owner.entry(code).or_default();
            if rows.is_empty() {
                order.push(code);
            }
            rows.push((idx + 1, row));
        }
        Self {
            by_owner,
            order,
            claimed: HashSet::new(),
        }
    }

    /// Rows owned by `code`, with their 1-based row numbers.
    ///
    /// Several entities sharing a code each get the rows.
    pub(super) fn claim(&mut self, code: &str) -> Vec<(usize, &'r RelationRow)> {
        let code = code.trim();
        match self.by_owner.get_key_value(code) {
            Some((key, rows)) => {
                self.claimed.insert(*key);
                rows.clone()
            }
            None => Vec::new(),
        }
    }

    /// Rows no entity claimed, in table order.
    pub(super) fn unclaimed(&self) -> Vec<(usize, &'r RelationRow)> {
        let mut rows: Vec<_> = self
            .order
            .iter()
            .filter(|code| !self.claimed.contains(*code))
            .filter_map(|code| self.by_owner.get(code))
            .flatten()
            .copied()
            .collect();
        rows.sort_by_key(|(row_number, _)| *row_number);
        rows
    }
}

/// Resolves relation rows to person ids for one batch.
///
/// Persons synthesized here stay pending until the batch ends. An unknown
/// federated id seen twice in the same batch maps to the same pending
/// placeholder.
pub(super) struct PersonResolver<'r> {
    registry: &'r PersonRegistry,
    pending: Vec<Entity>,
    pending_by_federated_id: HashMap<String, EntityId>,
}

impl<'r> PersonResolver<'r> {
    pub(super) fn new(registry: &'r PersonRegistry) -> Self {
        Self {
            registry,
            pending: Vec::new(),
            pending_by_federated_id: HashMap::new(),
        }
    }

    /// Build the edge for one relation row owned by an entity of kind `owner`.
    pub(super) fn edge(
        &mut self,
        owner: EntityKind,
        row: &RelationRow,
        row_number: usize,
        ctx: &mut MarshalContext<'_>,
    ) -> Result<RelationEdge> {
        let target = self.resolve(row, ctx)?;
        let role = Role::from_code(&row.role_code);
        let classification = match role.concept_for(owner) {
            Some(concept) => Some(ctx.classify(concept)?),
            None => {
                ctx.gap(ResolutionGap {
                    kind: GapKind::UnmappedRole,
                    entity: owner,
                    relations: true,
                    row: row_number,
                    detail: format!(
                        "role code '{}' for owner '{}' is neither leader nor member",
                        row.role_code.trim(),
                        row.owner_code.trim()
                    ),
                });
                None
            }
        };
        Ok(RelationEdge {
            target,
            role,
            classification,
        })
    }

    fn resolve(&mut self, row: &RelationRow, ctx: &mut MarshalContext<'_>) -> Result<EntityId> {
        let fed_id = row
            .person_fed_id
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty());

        if let Some(fed_id) = fed_id {
            if let Some(person) = self.registry.lookup_by_federated_id(fed_id) {
                return Ok(person.id().clone());
            }
            let key = XmlText::escape(fed_id).as_str().to_string();
            if let Some(id) = self.pending_by_federated_id.get(&key) {
                return Ok(id.clone());
            }
            let id = self.synthesize(row, Some(fed_id), ctx)?;
            self.pending_by_federated_id.insert(key, id.clone());
            return Ok(id);
        }

        self.synthesize(row, None, ctx)
    }

    fn synthesize(
        &mut self,
        row: &RelationRow,
        fed_id: Option<&str>,
        ctx: &mut MarshalContext<'_>,
    ) -> Result<EntityId> {
        let id = ctx.next_id();
        let mut person = Entity::new(id.clone(), EntityKind::PersonPlaceholder);
        person_name(&mut person, &row.person_name, ctx)?;
        if let Some(fed_id) = fed_id {
            person.push_attribute(
                Attribute::new(Field::FederatedId, XmlText::escape(fed_id))
                    .with_classification(ctx.classify(Concept::ResearcherFederatedId)?),
            );
        }
        person.classify(ctx.classify(VerificationStatus::Unchecked.concept())?);

        tracing::debug!(
            id = %id,
            name = redact_value(&row.person_name),
            federated_id = redact_value(fed_id.unwrap_or("")),
            "synthesized placeholder person"
        );
        self.pending.push(person);
        Ok(id)
    }

    pub(super) fn into_placeholders(self) -> Vec<Entity> {
        self.pending
    }
}

/// Presented-name record of a person; carries its own element id.
pub(super) fn person_name(
    person: &mut Entity,
    name: &str,
    ctx: &mut MarshalContext<'_>,
) -> Result<()> {
    let element_id = ctx.next_id();
    person.push_attribute(
        Attribute::new(Field::Name, XmlText::escape(name.trim()))
            .with_classification(ctx.classify(Concept::PresentedName)?)
            .with_element_id(element_id),
    );
    Ok(())
}
