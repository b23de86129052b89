//! Semantic concepts classified through the CERIF semantic layer.
//!
//! A [`Concept`] names *what* something is (a research group, a DOI, a group
//! leader). The catalog in `cerif-standards` resolves each concept to the
//! scheme/class identifier pair that the CERIF document carries.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ConfigurationError;

/// A `(scheme, class)` pair from the CERIF semantic layer.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Classification {
    pub scheme: String,
    pub class: String,
}

impl Classification {
    pub fn new(scheme: impl Into<String>, class: impl Into<String>) -> Self {
        Self {
            scheme: scheme.into(),
            class: class.into(),
        }
    }
}

/// Closed set of concepts the converter classifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Concept {
    // Organisation and project types
    Department,
    ResearchGroup,
    ResearchProject,

    // Output types
    JournalArticle,
    Book,
    BookChapter,
    ConferenceContribution,
    Thesis,
    OtherOutput,

    // Verification status
    Checked,
    Unchecked,

    // Identifier types
    ResearcherFederatedId,
    ResearcherInternalCode,
    DepartmentInternalCode,
    DepartmentRegistryCode,
    ResearchGroupInternalCode,
    RegionalResearchGroupCode,
    ProjectInternalCode,
    ProjectFundingReference,
    PublicationInternalCode,
    Doi,
    Issn,
    Isbn,
    Handle,

    // Contact details
    OrganisationEmail,
    PersonEmail,

    // Person names
    PresentedName,

    // Person roles
    DepartmentDirector,
    DepartmentMember,
    GroupLeader,
    GroupMember,
    PrincipalInvestigator,
    ProjectTeamMember,
    LeadAuthor,
    CoAuthor,

    // Date roles
    DepartmentCreationDate,
    ResearchGroupCreationDate,
    PublicationDate,
}

impl Concept {
    pub const ALL: [Concept; 38] = [
        Concept::Department,
        Concept::ResearchGroup,
        Concept::ResearchProject,
        Concept::JournalArticle,
        Concept::Book,
        Concept::BookChapter,
        Concept::ConferenceContribution,
        Concept::Thesis,
        Concept::OtherOutput,
        Concept::Checked,
        Concept::Unchecked,
        Concept::ResearcherFederatedId,
        Concept::ResearcherInternalCode,
        Concept::DepartmentInternalCode,
        Concept::DepartmentRegistryCode,
        Concept::ResearchGroupInternalCode,
        Concept::RegionalResearchGroupCode,
        Concept::ProjectInternalCode,
        Concept::ProjectFundingReference,
        Concept::PublicationInternalCode,
        Concept::Doi,
        Concept::Issn,
        Concept::Isbn,
        Concept::Handle,
        Concept::OrganisationEmail,
        Concept::PersonEmail,
        Concept::PresentedName,
        Concept::DepartmentDirector,
        Concept::DepartmentMember,
        Concept::GroupLeader,
        Concept::GroupMember,
        Concept::PrincipalInvestigator,
        Concept::ProjectTeamMember,
        Concept::LeadAuthor,
        Concept::CoAuthor,
        Concept::DepartmentCreationDate,
        Concept::ResearchGroupCreationDate,
        Concept::PublicationDate,
    ];

    /// Key used in override files and listings.
    pub fn as_str(&self) -> &'static str {
        match self {
            Concept::Department => "department",
            Concept::ResearchGroup => "research_group",
            Concept::ResearchProject => "research_project",
            Concept::JournalArticle => "journal_article",
            Concept::Book => "book",
            Concept::BookChapter => "book_chapter",
            Concept::ConferenceContribution => "conference_contribution",
            Concept::Thesis => "thesis",
            Concept::OtherOutput => "other_output",
            Concept::Checked => "checked",
            Concept::Unchecked => "unchecked",
            Concept::ResearcherFederatedId => "researcher_federated_id",
            Concept::ResearcherInternalCode => "researcher_internal_code",
            Concept::DepartmentInternalCode => "department_internal_code",
            Concept::DepartmentRegistryCode => "department_registry_code",
            Concept::ResearchGroupInternalCode => "research_group_internal_code",
            Concept::RegionalResearchGroupCode => "regional_research_group_code",
            Concept::ProjectInternalCode => "project_internal_code",
            Concept::ProjectFundingReference => "project_funding_reference",
            Concept::PublicationInternalCode => "publication_internal_code",
            Concept::Doi => "doi",
            Concept::Issn => "issn",
            Concept::Isbn => "isbn",
            Concept::Handle => "handle",
            Concept::OrganisationEmail => "organisation_email",
            Concept::PersonEmail => "person_email",
            Concept::PresentedName => "presented_name",
            Concept::DepartmentDirector => "department_director",
            Concept::DepartmentMember => "department_member",
            Concept::GroupLeader => "group_leader",
            Concept::GroupMember => "group_member",
            Concept::PrincipalInvestigator => "principal_investigator",
            Concept::ProjectTeamMember => "project_team_member",
            Concept::LeadAuthor => "lead_author",
            Concept::CoAuthor => "co_author",
            Concept::DepartmentCreationDate => "department_creation_date",
            Concept::ResearchGroupCreationDate => "research_group_creation_date",
            Concept::PublicationDate => "publication_date",
        }
    }

    /// Human-readable term, as it appears in the CERIF vocabulary.
    pub fn term(&self) -> &'static str {
        match self {
            Concept::Department => "Department",
            Concept::ResearchGroup => "Research Group",
            Concept::ResearchProject => "Research Project",
            Concept::JournalArticle => "Journal Article",
            Concept::Book => "Book",
            Concept::BookChapter => "Book Chapter",
            Concept::ConferenceContribution => "Conference Contribution",
            Concept::Thesis => "Thesis",
            Concept::OtherOutput => "Other",
            Concept::Checked => "Checked",
            Concept::Unchecked => "Unchecked",
            Concept::ResearcherFederatedId => "Researcher Identifier",
            Concept::ResearcherInternalCode => "Researcher Internal Code",
            Concept::DepartmentInternalCode => "Department Internal Code",
            Concept::DepartmentRegistryCode => "Department Registry Code",
            Concept::ResearchGroupInternalCode => "Research Group Internal Code",
            Concept::RegionalResearchGroupCode => "Regional Research Group Code",
            Concept::ProjectInternalCode => "Project Internal Code",
            Concept::ProjectFundingReference => "Funding Reference",
            Concept::PublicationInternalCode => "Publication Internal Code",
            Concept::Doi => "DOI",
            Concept::Issn => "ISSN",
            Concept::Isbn => "ISBN",
            Concept::Handle => "Handle",
            Concept::OrganisationEmail => "Email",
            Concept::PersonEmail => "Email",
            Concept::PresentedName => "Presented Name",
            Concept::DepartmentDirector => "Director",
            Concept::DepartmentMember => "Member",
            Concept::GroupLeader => "Group Leader",
            Concept::GroupMember => "Member",
            Concept::PrincipalInvestigator => "Principal Investigator",
            Concept::ProjectTeamMember => "Team Member",
            Concept::LeadAuthor => "Author",
            Concept::CoAuthor => "Co-Author",
            Concept::DepartmentCreationDate => "Department Creation Date",
            Concept::ResearchGroupCreationDate => "Research Group Creation Date",
            Concept::PublicationDate => "Publication Date",
        }
    }
}

impl fmt::Display for Concept {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Concept {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        Concept::ALL
            .iter()
            .copied()
            .find(|concept| concept.as_str() == key)
            .ok_or_else(|| ConfigurationError::UnknownConcept(s.to_string()))
    }
}

/// Publication type column values, classified as CERIF output types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PublicationType {
    JournalArticle,
    Book,
    BookChapter,
    ConferenceContribution,
    Thesis,
    Other,
}

impl PublicationType {
    /// Interpret a free-text type cell. Unrecognised values map to `Other`.
    pub fn parse(raw: &str) -> Self {
        let normalized = raw.trim().to_lowercase();
        match normalized.as_str() {
            "article" | "journal article" | "journal_article" | "article de revista"
            | "artículo" | "articulo" => PublicationType::JournalArticle,
            "book" | "llibre" | "libro" => PublicationType::Book,
            "chapter" | "book chapter" | "book_chapter" | "capítol de llibre"
            | "capitol de llibre" | "capítulo de libro" => PublicationType::BookChapter,
            "conference" | "conference paper" | "conference contribution" | "proceedings"
            | "comunicació" | "comunicacion" | "comunicación" => {
                PublicationType::ConferenceContribution
            }
            "thesis" | "tesi" | "tesis" | "doctoral thesis" => PublicationType::Thesis,
            _ => PublicationType::Other,
        }
    }

    pub fn concept(self) -> Concept {
        match self {
            PublicationType::JournalArticle => Concept::JournalArticle,
            PublicationType::Book => Concept::Book,
            PublicationType::BookChapter => Concept::BookChapter,
            PublicationType::ConferenceContribution => Concept::ConferenceContribution,
            PublicationType::Thesis => Concept::Thesis,
            PublicationType::Other => Concept::OtherOutput,
        }
    }
}
