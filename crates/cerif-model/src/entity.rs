//! Graph nodes produced by the marshallers.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Classification, Concept, EntityId, XmlText};

/// Kind of graph node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Researcher,
    Department,
    ResearchGroup,
    Project,
    Publication,
    PersonPlaceholder,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Researcher => "Researcher",
            EntityKind::Department => "Department",
            EntityKind::ResearchGroup => "ResearchGroup",
            EntityKind::Project => "Project",
            EntityKind::Publication => "Publication",
            EntityKind::PersonPlaceholder => "PersonPlaceholder",
        }
    }

    /// Researchers and placeholders both end up in the person list.
    pub fn is_person(&self) -> bool {
        matches!(self, EntityKind::Researcher | EntityKind::PersonPlaceholder)
    }

    pub fn is_org_unit(&self) -> bool {
        matches!(self, EntityKind::Department | EntityKind::ResearchGroup)
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Attribute slots an entity can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Field {
    /// Full name of a person.
    Name,
    Title,
    Acronym,
    Uri,
    Email,
    /// External-system person code; the person de-duplication key.
    FederatedId,
    /// Any other classified identifier (internal codes, DOI, ISSN, ...).
    Identifier,
    CreationDate,
    StartDate,
    EndDate,
    PublicationDate,
    SourceTitle,
    Volume,
    Issue,
    StartPage,
    EndPage,
}

/// One stored attribute value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub field: Field,
    pub value: XmlText,
    /// Scheme/class of the value itself (identifier type, contact type, ...).
    pub classification: Option<Classification>,
    /// Identifier of the nested record, for values serialized as their own
    /// sub-element (creation-date service, person name).
    pub element_id: Option<EntityId>,
    pub language: Option<XmlText>,
}

impl Attribute {
    pub fn new(field: Field, value: XmlText) -> Self {
        Self {
            field,
            value,
            classification: None,
            element_id: None,
            language: None,
        }
    }

    #[must_use]
    pub fn with_classification(mut self, classification: Classification) -> Self {
        self.classification = Some(classification);
        self
    }

    #[must_use]
    pub fn with_element_id(mut self, id: EntityId) -> Self {
        self.element_id = Some(id);
        self
    }

    #[must_use]
    pub fn with_language(mut self, language: XmlText) -> Self {
        self.language = Some(language);
        self
    }
}

/// Role a person plays towards the owning entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Leader,
    Member,
    /// The role code matched neither leader nor member; no default is
    /// assumed.
    Unmapped,
}

impl Role {
    /// Derive a role from a relation-table role code (`si`/`s`, `no`/`n`).
    pub fn from_code(code: &str) -> Self {
        let normalized = code.trim().to_lowercase();
        match normalized.as_str() {
            "si" | "s" => Role::Leader,
            "no" | "n" => Role::Member,
            _ => Role::Unmapped,
        }
    }

    /// Role concept for a relation owned by `owner`, if the role is mapped.
    pub fn concept_for(self, owner: EntityKind) -> Option<Concept> {
        let concept = match (owner, self) {
            (_, Role::Unmapped) => return None,
            (EntityKind::Department, Role::Leader) => Concept::DepartmentDirector,
            (EntityKind::Department, Role::Member) => Concept::DepartmentMember,
            (EntityKind::ResearchGroup, Role::Leader) => Concept::GroupLeader,
            (EntityKind::ResearchGroup, Role::Member) => Concept::GroupMember,
            (EntityKind::Project, Role::Leader) => Concept::PrincipalInvestigator,
            (EntityKind::Project, Role::Member) => Concept::ProjectTeamMember,
            (EntityKind::Publication, Role::Leader) => Concept::LeadAuthor,
            (EntityKind::Publication, Role::Member) => Concept::CoAuthor,
            (EntityKind::Researcher | EntityKind::PersonPlaceholder, _) => return None,
        };
        Some(concept)
    }
}

/// Link from an owning entity to a person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationEdge {
    pub target: EntityId,
    pub role: Role,
    /// Role classification; absent for [`Role::Unmapped`].
    pub classification: Option<Classification>,
}

/// Checked/unchecked verification state of a person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VerificationStatus {
    Checked,
    Unchecked,
}

impl VerificationStatus {
    pub fn concept(self) -> Concept {
        match self {
            VerificationStatus::Checked => Concept::Checked,
            VerificationStatus::Unchecked => Concept::Unchecked,
        }
    }
}

/// One node of the output graph.
///
/// The identifier is fixed at construction; there is no setter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    id: EntityId,
    pub kind: EntityKind,
    pub attributes: Vec<Attribute>,
    pub classifications: Vec<Classification>,
    pub relations: Vec<RelationEdge>,
}

impl Entity {
    pub fn new(id: EntityId, kind: EntityKind) -> Self {
        Self {
            id,
            kind,
            attributes: Vec::new(),
            classifications: Vec::new(),
            relations: Vec::new(),
        }
    }

    pub fn id(&self) -> &EntityId {
        &self.id
    }

    pub fn push_attribute(&mut self, attribute: Attribute) {
        self.attributes.push(attribute);
    }

    /// Add an entity-level classification; the set keeps one copy per pair.
    pub fn classify(&mut self, classification: Classification) {
        if !self.classifications.contains(&classification) {
            self.classifications.push(classification);
        }
    }

    pub fn push_relation(&mut self, edge: RelationEdge) {
        self.relations.push(edge);
    }

    pub fn attribute(&self, field: Field) -> Option<&Attribute> {
        self.attributes.iter().find(|attr| attr.field == field)
    }

    pub fn attributes_of(&self, field: Field) -> impl Iterator<Item = &Attribute> {
        self.attributes.iter().filter(move |attr| attr.field == field)
    }

    /// Stored (escaped) federated identifier of a person.
    pub fn federated_id(&self) -> Option<&XmlText> {
        self.attribute(Field::FederatedId).map(|attr| &attr.value)
    }

    pub fn is_person(&self) -> bool {
        self.kind.is_person()
    }

    pub fn has_classification(&self, classification: &Classification) -> bool {
        self.classifications.contains(classification)
    }

    /// Identifier-typed attribute carrying `classification`.
    pub fn identifier(&self, classification: &Classification) -> Option<&XmlText> {
        self.attributes_of(Field::Identifier)
            .find(|attr| attr.classification.as_ref() == Some(classification))
            .map(|attr| &attr.value)
    }

    /// Sub-element identifiers nested under this entity.
    pub fn element_ids(&self) -> impl Iterator<Item = &EntityId> {
        self.attributes
            .iter()
            .filter_map(|attr| attr.element_id.as_ref())
    }
}
