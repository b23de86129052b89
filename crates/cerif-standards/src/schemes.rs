//! Classification scheme identifiers of the CERIF semantic layer.

pub const ORGANISATION_TYPES: &str = "759af938-34ae-11e1-b86c-0800200c9a66";
pub const OUTPUT_TYPES: &str = "eda2d9e9-34c5-11e1-b86c-0800200c9a66";
pub const PROJECT_TYPES: &str = "f63065e8-b191-47d4-884e-7aacca7c6303";
pub const VERIFICATION_STATUSES: &str = "65dbbb69-bc8d-474d-96e9-9ccbcebf98a5";
pub const IDENTIFIER_TYPES: &str = "bccb3266-689d-4740-a039-c96594b4d916";
pub const ORGANISATION_CONTACT_DETAILS: &str = "b44c57fb-3e56-408b-821f-b81012621da2";
pub const PERSON_CONTACT_DETAILS: &str = "9212a5da-f86e-4180-804a-6fc523adceff";
pub const PERSON_NAMES: &str = "0a720969-47de-49f1-9d73-c098d3810375";
pub const PERSON_ORGANISATION_ROLES: &str = "994069a0-1cd6-11e1-8bc2-0800200c9a66";
pub const PERSON_PROJECT_ENGAGEMENTS: &str = "94fefd50-1d00-11e1-8bc2-0800200c9a66";
pub const PERSON_OUTPUT_CONTRIBUTIONS: &str = "b7135ad0-1d00-11e1-8bc2-0800200c9a66";
pub const ORGANISATION_RESEARCH_INFRASTRUCTURE_ROLES: &str =
    "0e82f0e7-086b-41e7-902c-75bc3e09e5bf";
pub const OUTPUT_DATE_ROLES: &str = "0049a027-7550-4b05-a34b-623c53be2500";
