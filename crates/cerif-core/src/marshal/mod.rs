//! Row-to-entity marshallers.
//!
//! Researchers seed the person registry. Every other kind implements
//! [`EntityMarshaller`] and goes through [`marshal_batch`], which builds
//! one entity per row and attaches the relation edges whose owner code
//! matches the row's business code.

mod org_unit;
mod project;
mod publication;
mod relation;
mod researcher;

use cerif_model::{
    Attribute, Classification, Concept, Entity, EntityId, EntityKind, Field, RelationRow,
    TableRow, XmlText,
};
use cerif_standards::Catalog;

use crate::dates::normalize_date;
use crate::error::Result;
use crate::ids::IdGenerator;
use crate::registry::PersonRegistry;
use crate::report::{GapKind, ResolutionGap};

pub use org_unit::{Departments, ResearchGroups};
pub use project::Projects;
pub use publication::Publications;
pub use researcher::marshal_researchers;

use relation::{PersonResolver, RelationIndex};

/// Language code of titles when the source does not name one.
pub(crate) const DEFAULT_LANGUAGE: &str = "ca";

/// Shared services for one run: catalog, id source and gap sink.
pub struct MarshalContext<'a> {
    pub catalog: &'a Catalog,
    pub ids: &'a mut IdGenerator,
    pub gaps: &'a mut Vec<ResolutionGap>,
}

impl<'a> MarshalContext<'a> {
    pub fn new(
        catalog: &'a Catalog,
        ids: &'a mut IdGenerator,
        gaps: &'a mut Vec<ResolutionGap>,
    ) -> Self {
        Self { catalog, ids, gaps }
    }

    pub fn classify(&self, concept: Concept) -> Result<Classification> {
        Ok(self.catalog.classify(concept)?)
    }

    pub fn next_id(&mut self) -> EntityId {
        self.ids.next_id()
    }

    /// Record a non-fatal gap and log it.
    pub fn gap(&mut self, gap: ResolutionGap) {
        tracing::warn!(
            kind = %gap.kind,
            entity = %gap.entity,
            row = gap.row,
            detail = %gap.detail,
            "resolution gap"
        );
        self.gaps.push(gap);
    }

    /// Push an optional text attribute, skipping blank values.
    pub(crate) fn text(&self, entity: &mut Entity, field: Field, value: Option<&str>) {
        if let Some(value) = XmlText::optional(value) {
            entity.push_attribute(Attribute::new(field, value));
        }
    }

    /// Push a classified identifier attribute, skipping blank values.
    pub(crate) fn identifier(
        &self,
        entity: &mut Entity,
        concept: Concept,
        value: Option<&str>,
    ) -> Result<()> {
        if let Some(value) = XmlText::optional(value) {
            let class = self.classify(concept)?;
            entity.push_attribute(Attribute::new(Field::Identifier, value).with_classification(class));
        }
        Ok(())
    }

    /// Normalized date attribute. Unreadable dates are reported and omitted.
    pub(crate) fn date(
        &mut self,
        kind: EntityKind,
        field: Field,
        value: Option<&str>,
        site: GapSite,
    ) -> Option<Attribute> {
        let raw = value.map(str::trim).filter(|v| !v.is_empty())?;
        match normalize_date(raw) {
            Some(date) => Some(Attribute::new(field, XmlText::escape(&date))),
            None => {
                self.gap(ResolutionGap {
                    kind: GapKind::InvalidDate,
                    entity: kind,
                    relations: false,
                    row: site.row,
                    detail: format!("{} '{}' is not a date", site.column, raw),
                });
                None
            }
        }
    }
}

/// Where a date value came from, for gap reporting.
#[derive(Debug, Clone, Copy)]
pub(crate) struct GapSite {
    pub row: usize,
    pub column: &'static str,
}

/// Output of one batch: the entities of the batch and the placeholder
/// persons it synthesized, to be appended to the registry by the caller.
#[derive(Debug, Clone, Default)]
pub struct Marshalled {
    pub entities: Vec<Entity>,
    pub placeholders: Vec<Entity>,
}

/// One entity kind that owns person relations.
pub trait EntityMarshaller {
    type Row: TableRow;

    const KIND: EntityKind;

    /// Business code that relation rows refer to.
    fn owner_code(row: &Self::Row) -> &str;

    /// Fill the attributes and classifications of a freshly created entity.
    fn build(
        row: &Self::Row,
        row_number: usize,
        entity: &mut Entity,
        ctx: &mut MarshalContext<'_>,
    ) -> Result<()>;
}

/// Marshal one table and resolve its relation rows against `registry`.
///
/// Placeholders created here are not visible through `registry` until the
/// caller appends them.
pub fn marshal_batch<M: EntityMarshaller>(
    rows: &[M::Row],
    relations: &[RelationRow],
    registry: &PersonRegistry,
    ctx: &mut MarshalContext<'_>,
) -> Result<Marshalled> {
    let mut index = RelationIndex::new(relations);
    let mut resolver = PersonResolver::new(registry);
    let mut entities = Vec::with_capacity(rows.len());

    for (idx, row) in rows.iter().enumerate() {
        let id = ctx.next_id();
        let mut entity = Entity::new(id, M::KIND);
        M::build(row, idx + 1, &mut entity, ctx)?;

        for (row_number, relation) in index.claim(M::owner_code(row)) {
            let edge = resolver.edge(M::KIND, relation, row_number, ctx)?;
            entity.push_relation(edge);
        }

        tracing::debug!(
            kind = %M::KIND,
            id = %entity.id(),
            code = M::owner_code(row),
            relations = entity.relations.len(),
            "marshalled entity"
        );
        entities.push(entity);
    }

    for (row_number, relation) in index.unclaimed() {
        let code = relation.owner_code.trim();
        let detail = if code.is_empty() {
            "blank owner code".to_string()
        } else {
            format!("owner code '{code}' matches no entity")
        };
        ctx.gap(ResolutionGap {
            kind: GapKind::UnknownOwner,
            entity: M::KIND,
            relations: true,
            row: row_number,
            detail,
        });
    }

    Ok(Marshalled {
        entities,
        placeholders: resolver.into_placeholders(),
    })
}
