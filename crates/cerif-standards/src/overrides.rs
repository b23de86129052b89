//! TOML override files for the classification catalog.
//!
//! ```toml
//! [concepts.group_leader]
//! scheme = "994069a0-1cd6-11e1-8bc2-0800200c9a66"
//! class = "8c6681fc-b4c0-428d-b4d8-33ddc2cfd83d"
//! ```
//!
//! Either code may be omitted to keep the built-in value.

use std::collections::BTreeMap;

use serde::Deserialize;

use cerif_model::{ConfigurationError, Concept};

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct OverrideFile {
    #[serde(default)]
    concepts: BTreeMap<String, OverrideEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct OverrideEntry {
    scheme: Option<String>,
    class: Option<String>,
}

/// One parsed override row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Override {
    pub concept: Concept,
    pub scheme: Option<String>,
    pub class: Option<String>,
}

#[derive(Debug)]
pub(crate) enum OverrideError {
    Toml(toml::de::Error),
    Configuration(ConfigurationError),
}

pub(crate) fn parse_overrides(text: &str) -> Result<Vec<Override>, OverrideError> {
    let file: OverrideFile = toml::from_str(text).map_err(OverrideError::Toml)?;
    let mut overrides = Vec::with_capacity(file.concepts.len());
    for (key, entry) in file.concepts {
        let concept: Concept = key.parse().map_err(OverrideError::Configuration)?;
        for (part, value) in [("scheme", &entry.scheme), ("class", &entry.class)] {
            if value.as_deref().is_some_and(|v| v.trim().is_empty()) {
                return Err(OverrideError::Configuration(ConfigurationError::BlankCode {
                    concept,
                    part,
                }));
            }
        }
        overrides.push(Override {
            concept,
            scheme: entry.scheme.map(|s| s.trim().to_string()),
            class: entry.class.map(|s| s.trim().to_string()),
        });
    }
    Ok(overrides)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_partial_entries() {
        let parsed = parse_overrides(
            r#"
            [concepts.group_leader]
            class = "abc"
            "#,
        )
        .expect("parse overrides");
        assert_eq!(
            parsed,
            vec![Override {
                concept: Concept::GroupLeader,
                scheme: None,
                class: Some("abc".to_string()),
            }]
        );
    }

    #[test]
    fn rejects_unknown_concepts() {
        let err = parse_overrides("[concepts.dean]\nclass = \"x\"\n").unwrap_err();
        assert!(matches!(
            err,
            OverrideError::Configuration(ConfigurationError::UnknownConcept(_))
        ));
    }

    #[test]
    fn rejects_blank_codes() {
        let err = parse_overrides("[concepts.doi]\nscheme = \"  \"\n").unwrap_err();
        assert!(matches!(
            err,
            OverrideError::Configuration(ConfigurationError::BlankCode { part: "scheme", .. })
        ));
    }
}
