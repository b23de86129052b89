//! Built-in classification table.

use cerif_model::Concept;

use crate::schemes::{
    IDENTIFIER_TYPES, ORGANISATION_CONTACT_DETAILS, ORGANISATION_RESEARCH_INFRASTRUCTURE_ROLES,
    ORGANISATION_TYPES, OUTPUT_DATE_ROLES, OUTPUT_TYPES, PERSON_CONTACT_DETAILS, PERSON_NAMES,
    PERSON_ORGANISATION_ROLES, PERSON_OUTPUT_CONTRIBUTIONS, PERSON_PROJECT_ENGAGEMENTS,
    PROJECT_TYPES, VERIFICATION_STATUSES,
};

/// `(concept, scheme, class)` rows of the default semantic layer.
pub(crate) const BUILTIN: &[(Concept, &str, &str)] = &[
    (
        Concept::Department,
        ORGANISATION_TYPES,
        "35ac4072-f838-4c5b-b099-33d1f3d6e3be",
    ),
    (
        Concept::ResearchGroup,
        ORGANISATION_TYPES,
        "4f7e0f8a-211e-4a59-9dad-be38c588d0f4",
    ),
    (
        Concept::ResearchProject,
        PROJECT_TYPES,
        "ac7d9d40-4c7a-42f3-b882-0e4a287ec8cb",
    ),
    (
        Concept::JournalArticle,
        OUTPUT_TYPES,
        "3663ce58-1632-4282-a318-8f4940ee9587",
    ),
    (
        Concept::Book,
        OUTPUT_TYPES,
        "309e7de4-aaa8-4cfb-97ae-19ad2033d61f",
    ),
    (
        Concept::BookChapter,
        OUTPUT_TYPES,
        "f20409d5-2fb2-4708-96d9-f8d1e2e4d4fb",
    ),
    (
        Concept::ConferenceContribution,
        OUTPUT_TYPES,
        "c3235e91-6cbc-48bf-a647-408887537b11",
    ),
    (
        Concept::Thesis,
        OUTPUT_TYPES,
        "446a897b-b51e-4c99-94a1-d1881abd391c",
    ),
    (
        Concept::OtherOutput,
        OUTPUT_TYPES,
        "bd0a005b-f859-426f-9dcc-c036ee050ae2",
    ),
    (
        Concept::Checked,
        VERIFICATION_STATUSES,
        "977c8ebc-b13d-4c20-892d-f9284b96524f",
    ),
    (
        Concept::Unchecked,
        VERIFICATION_STATUSES,
        "1ce6268b-eaa9-4df2-9d9d-3c59f31f8999",
    ),
    (
        Concept::ResearcherFederatedId,
        IDENTIFIER_TYPES,
        "1d3599c8-7441-48a0-8ce3-36cea5a781b4",
    ),
    (
        Concept::ResearcherInternalCode,
        IDENTIFIER_TYPES,
        "c06bf16e-f072-43cd-ab29-d1b0e5578f85",
    ),
    (
        Concept::DepartmentInternalCode,
        IDENTIFIER_TYPES,
        "2a72cf7f-2873-4434-8062-525c9a5fc326",
    ),
    (
        Concept::DepartmentRegistryCode,
        IDENTIFIER_TYPES,
        "dbe5c54d-7f36-422b-b308-79e59a490986",
    ),
    (
        Concept::ResearchGroupInternalCode,
        IDENTIFIER_TYPES,
        "57a082c7-bde1-4106-a4b2-728b987110f1",
    ),
    (
        Concept::RegionalResearchGroupCode,
        IDENTIFIER_TYPES,
        "e18c38d1-d5cb-4452-b12c-e00cd6cbeef0",
    ),
    (
        Concept::ProjectInternalCode,
        IDENTIFIER_TYPES,
        "165c72e3-f9d9-44f5-b977-e64acda2d05a",
    ),
    (
        Concept::ProjectFundingReference,
        IDENTIFIER_TYPES,
        "bcec8987-5488-47bc-b9f0-a56c462082a6",
    ),
    (
        Concept::PublicationInternalCode,
        IDENTIFIER_TYPES,
        "9ca1fa3b-6b11-46fa-848f-01112a6f7a63",
    ),
    (
        Concept::Doi,
        IDENTIFIER_TYPES,
        "ae1b8614-b3e2-4c86-a611-9952e038e336",
    ),
    (
        Concept::Issn,
        IDENTIFIER_TYPES,
        "b038abda-d1ce-400e-9f41-30f914acb00e",
    ),
    (
        Concept::Isbn,
        IDENTIFIER_TYPES,
        "8c2ee67c-fc28-496a-a24a-507711c2cd0e",
    ),
    (
        Concept::Handle,
        IDENTIFIER_TYPES,
        "d3ca0fdd-193c-4028-bad1-ffc3e8732865",
    ),
    (
        Concept::OrganisationEmail,
        ORGANISATION_CONTACT_DETAILS,
        "62ac4f88-bc52-4680-95c4-2f99a51f518e",
    ),
    (
        Concept::PersonEmail,
        PERSON_CONTACT_DETAILS,
        "9cf92985-6937-41a5-a4c6-55e9c126489a",
    ),
    (
        Concept::PresentedName,
        PERSON_NAMES,
        "b9bfafe5-8d4b-4dcd-b9eb-dd1c0936703a",
    ),
    (
        Concept::DepartmentDirector,
        PERSON_ORGANISATION_ROLES,
        "bb950d9d-811e-40dd-aa7c-69a8f2037177",
    ),
    (
        Concept::DepartmentMember,
        PERSON_ORGANISATION_ROLES,
        "ebee2993-9446-4b8a-8cb6-fd5a01924d17",
    ),
    (
        Concept::GroupLeader,
        PERSON_ORGANISATION_ROLES,
        "8c6681fc-b4c0-428d-b4d8-33ddc2cfd83d",
    ),
    (
        Concept::GroupMember,
        PERSON_ORGANISATION_ROLES,
        "50d6942e-5cde-4b1e-9357-64957cb541a6",
    ),
    (
        Concept::PrincipalInvestigator,
        PERSON_PROJECT_ENGAGEMENTS,
        "507acc0a-1a5f-413e-9a59-83b90f4806da",
    ),
    (
        Concept::ProjectTeamMember,
        PERSON_PROJECT_ENGAGEMENTS,
        "3c6eec84-3eb3-4040-8536-5ad9e58d7d33",
    ),
    (
        Concept::LeadAuthor,
        PERSON_OUTPUT_CONTRIBUTIONS,
        "dccb2afd-4a52-4bd8-b193-852d89c6bda9",
    ),
    (
        Concept::CoAuthor,
        PERSON_OUTPUT_CONTRIBUTIONS,
        "47507abc-a0f4-45f8-b4da-7ebb5c6033eb",
    ),
    (
        Concept::DepartmentCreationDate,
        ORGANISATION_RESEARCH_INFRASTRUCTURE_ROLES,
        "2040bdc4-d174-4695-a0fe-45afc055ce4a",
    ),
    (
        Concept::ResearchGroupCreationDate,
        ORGANISATION_RESEARCH_INFRASTRUCTURE_ROLES,
        "f2087b85-1df4-4474-9bcd-fa06ed0b9354",
    ),
    (
        Concept::PublicationDate,
        OUTPUT_DATE_ROLES,
        "16ad3e8e-c6c0-47e4-9767-f768c873ff03",
    ),
];
