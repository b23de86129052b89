//! Tests for concept naming and publication type parsing.

use cerif_model::{ConfigurationError, Concept, PublicationType};

#[test]
fn concept_keys_round_trip() {
    for concept in Concept::ALL {
        let parsed: Concept = concept.as_str().parse().expect("parse concept key");
        assert_eq!(parsed, concept);
    }
}

#[test]
fn concept_keys_are_unique() {
    let mut keys: Vec<&str> = Concept::ALL.iter().map(Concept::as_str).collect();
    keys.sort_unstable();
    keys.dedup();
    assert_eq!(keys.len(), Concept::ALL.len());
}

#[test]
fn concept_parse_accepts_dashes_and_case() {
    assert_eq!("Group-Leader".parse::<Concept>(), Ok(Concept::GroupLeader));
    assert_eq!(
        "nope".parse::<Concept>(),
        Err(ConfigurationError::UnknownConcept("nope".to_string()))
    );
}

#[test]
fn publication_types_fall_back_to_other() {
    assert_eq!(PublicationType::parse("Article"), PublicationType::JournalArticle);
    assert_eq!(PublicationType::parse("Tesi"), PublicationType::Thesis);
    assert_eq!(PublicationType::parse("poster"), PublicationType::Other);
    assert_eq!(PublicationType::Other.concept(), Concept::OtherOutput);
}
