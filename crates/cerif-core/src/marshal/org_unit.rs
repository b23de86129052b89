use cerif_model::{Attribute, Concept, Entity, EntityKind, Field, OrgUnitRow, XmlText};

use super::{DEFAULT_LANGUAGE, EntityMarshaller, GapSite, MarshalContext};
use crate::error::Result;

/// Concepts that differ between departments and research groups.
struct UnitConcepts {
    kind: Concept,
    internal_code: Concept,
    secondary_code: Concept,
    creation_date: Concept,
}

const DEPARTMENT: UnitConcepts = UnitConcepts {
    kind: Concept::Department,
    internal_code: Concept::DepartmentInternalCode,
    secondary_code: Concept::DepartmentRegistryCode,
    creation_date: Concept::DepartmentCreationDate,
};

const RESEARCH_GROUP: UnitConcepts = UnitConcepts {
    kind: Concept::ResearchGroup,
    internal_code: Concept::ResearchGroupInternalCode,
    secondary_code: Concept::RegionalResearchGroupCode,
    creation_date: Concept::ResearchGroupCreationDate,
};

pub struct Departments;

pub struct ResearchGroups;

impl EntityMarshaller for Departments {
    type Row = OrgUnitRow;

    const KIND: EntityKind = EntityKind::Department;

    fn owner_code(row: &OrgUnitRow) -> &str {
        &row.code
    }

    fn build(
        row: &OrgUnitRow,
        row_number: usize,
        entity: &mut Entity,
        ctx: &mut MarshalContext<'_>,
    ) -> Result<()> {
        build_unit(&DEPARTMENT, row, row_number, entity, ctx)
    }
}

impl EntityMarshaller for ResearchGroups {
    type Row = OrgUnitRow;

    const KIND: EntityKind = EntityKind::ResearchGroup;

    fn owner_code(row: &OrgUnitRow) -> &str {
        &row.code
    }

    fn build(
        row: &OrgUnitRow,
        row_number: usize,
        entity: &mut Entity,
        ctx: &mut MarshalContext<'_>,
    ) -> Result<()> {
        build_unit(&RESEARCH_GROUP, row, row_number, entity, ctx)
    }
}

fn build_unit(
    concepts: &UnitConcepts,
    row: &OrgUnitRow,
    row_number: usize,
    entity: &mut Entity,
    ctx: &mut MarshalContext<'_>,
) -> Result<()> {
    ctx.identifier(entity, concepts.internal_code, Some(&row.code))?;
    ctx.identifier(entity, concepts.secondary_code, row.secondary_code.as_deref())?;
    ctx.text(entity, Field::Acronym, row.acronym.as_deref());
    if let Some(title) = XmlText::optional(Some(&row.title)) {
        entity.push_attribute(
            Attribute::new(Field::Title, title).with_language(XmlText::escape(DEFAULT_LANGUAGE)),
        );
    }
    ctx.text(entity, Field::Uri, row.url.as_deref());

    if let Some(emails) = row.emails.as_deref() {
        let class = ctx.classify(Concept::OrganisationEmail)?;
        for address in emails
            .split("||")
            .filter_map(|token| XmlText::optional(Some(token)))
        {
            entity.push_attribute(
                Attribute::new(Field::Email, address).with_classification(class.clone()),
            );
        }
    }

    entity.classify(ctx.classify(concepts.kind)?);

    let site = GapSite {
        row: row_number,
        column: "creation_date",
    };
    let creation = ctx.date(
        entity.kind,
        Field::CreationDate,
        row.creation_date.as_deref(),
        site,
    );
    if let Some(date) = creation {
        let element_id = ctx.next_id();
        entity.push_attribute(
            date.with_classification(ctx.classify(concepts.creation_date)?)
                .with_element_id(element_id),
        );
    }
    Ok(())
}
