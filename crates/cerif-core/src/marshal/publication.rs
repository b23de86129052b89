use cerif_model::{
    Attribute, Concept, Entity, EntityKind, Field, PublicationRow, PublicationType, XmlText,
};

use super::{DEFAULT_LANGUAGE, EntityMarshaller, GapSite, MarshalContext};
use crate::error::Result;

pub struct Publications;

impl EntityMarshaller for Publications {
    type Row = PublicationRow;

    const KIND: EntityKind = EntityKind::Publication;

    fn owner_code(row: &PublicationRow) -> &str {
        &row.code
    }

    fn build(
        row: &PublicationRow,
        row_number: usize,
        entity: &mut Entity,
        ctx: &mut MarshalContext<'_>,
    ) -> Result<()> {
        ctx.identifier(entity, Concept::PublicationInternalCode, Some(&row.code))?;

        let site = GapSite {
            row: row_number,
            column: "publication_date",
        };
        if let Some(date) = ctx.date(
            Self::KIND,
            Field::PublicationDate,
            row.publication_date.as_deref(),
            site,
        ) {
            entity.push_attribute(date.with_classification(ctx.classify(Concept::PublicationDate)?));
        }

        let language = row
            .language
            .as_deref()
            .map(str::trim)
            .filter(|code| !code.is_empty())
            .unwrap_or(DEFAULT_LANGUAGE);
        if let Some(title) = XmlText::optional(Some(&row.title)) {
            entity.push_attribute(
                Attribute::new(Field::Title, title).with_language(XmlText::escape(language)),
            );
        }

        ctx.text(entity, Field::SourceTitle, row.source_title.as_deref());
        ctx.text(entity, Field::Volume, row.volume.as_deref());
        ctx.text(entity, Field::Issue, row.issue.as_deref());
        ctx.text(entity, Field::StartPage, row.start_page.as_deref());
        ctx.text(entity, Field::EndPage, row.end_page.as_deref());

        ctx.identifier(entity, Concept::Doi, row.doi.as_deref())?;
        ctx.identifier(entity, Concept::Issn, row.issn.as_deref())?;
        ctx.identifier(entity, Concept::Isbn, row.isbn.as_deref())?;
        ctx.identifier(entity, Concept::Handle, row.handle.as_deref())?;
        ctx.text(entity, Field::Uri, row.url.as_deref());

        let output_type = row
            .publication_type
            .as_deref()
            .map_or(PublicationType::Other, PublicationType::parse);
        entity.classify(ctx.classify(output_type.concept())?);
        Ok(())
    }
}
