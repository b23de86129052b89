use cerif_model::{
    Attribute, Concept, ContentError, Entity, EntityKind, Field, ResearcherRow, TableRow,
    VerificationStatus, XmlText,
};

use super::MarshalContext;
use super::relation::person_name;
use crate::error::Result;
use crate::privacy::redact_value;

/// One Researcher entity per row, all with the same verification status.
///
/// An empty table is a content error: researchers seed the registry.
pub fn marshal_researchers(
    rows: &[ResearcherRow],
    status: VerificationStatus,
    ctx: &mut MarshalContext<'_>,
) -> Result<Vec<Entity>> {
    if rows.is_empty() {
        return Err(ContentError::EmptyTable {
            table: ResearcherRow::TABLE,
        }
        .into());
    }

    let email = ctx.classify(Concept::PersonEmail)?;
    let federated = ctx.classify(Concept::ResearcherFederatedId)?;
    let verification = ctx.classify(status.concept())?;

    let mut persons = Vec::with_capacity(rows.len());
    for row in rows {
        let mut person = Entity::new(ctx.next_id(), EntityKind::Researcher);
        person_name(&mut person, &row.name, ctx)?;
        if let Some(fed_id) = XmlText::optional(row.federated_id.as_deref()) {
            person.push_attribute(
                Attribute::new(Field::FederatedId, fed_id).with_classification(federated.clone()),
            );
        }
        ctx.identifier(&mut person, Concept::ResearcherInternalCode, row.code.as_deref())?;
        if let Some(address) = XmlText::optional(row.email.as_deref()) {
            person.push_attribute(
                Attribute::new(Field::Email, address).with_classification(email.clone()),
            );
        }
        person.classify(verification.clone());

        tracing::trace!(
            id = %person.id(),
            name = redact_value(&row.name),
            email = redact_value(row.email.as_deref().unwrap_or("")),
            "marshalled researcher"
        );
        persons.push(person);
    }
    Ok(persons)
}
