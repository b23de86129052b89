use cerif_model::{Attribute, Concept, Entity, EntityKind, Field, ProjectRow, XmlText};

use super::{DEFAULT_LANGUAGE, EntityMarshaller, GapSite, MarshalContext};
use crate::error::Result;

pub struct Projects;

impl EntityMarshaller for Projects {
    type Row = ProjectRow;

    const KIND: EntityKind = EntityKind::Project;

    fn owner_code(row: &ProjectRow) -> &str {
        &row.code
    }

    fn build(
        row: &ProjectRow,
        row_number: usize,
        entity: &mut Entity,
        ctx: &mut MarshalContext<'_>,
    ) -> Result<()> {
        ctx.identifier(entity, Concept::ProjectInternalCode, Some(&row.code))?;

        for (field, value, column) in [
            (Field::StartDate, row.start_date.as_deref(), "start_date"),
            (Field::EndDate, row.end_date.as_deref(), "end_date"),
        ] {
            let site = GapSite {
                row: row_number,
                column,
            };
            if let Some(date) = ctx.date(Self::KIND, field, value, site) {
                entity.push_attribute(date);
            }
        }

        ctx.text(entity, Field::Acronym, row.acronym.as_deref());
        if let Some(title) = XmlText::optional(Some(&row.title)) {
            entity.push_attribute(
                Attribute::new(Field::Title, title)
                    .with_language(XmlText::escape(DEFAULT_LANGUAGE)),
            );
        }
        ctx.identifier(
            entity,
            Concept::ProjectFundingReference,
            row.funding_reference.as_deref(),
        )?;
        ctx.text(entity, Field::Uri, row.url.as_deref());

        entity.classify(ctx.classify(Concept::ResearchProject)?);
        Ok(())
    }
}
