#![deny(unsafe_code)]

use std::fmt;

use crate::ModelError;

/// Opaque identifier of a graph entity or nested sub-element.
///
/// Values come from the engine's identifier generator; the model only
/// guarantees they are non-blank.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    pub fn new(value: impl Into<String>) -> Result<Self, ModelError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ModelError::InvalidEntityId(value));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Render the first 16 digest bytes in the 8-4-4-4-12 UUID layout.
    pub fn from_first_16_bytes_of_sha256(digest: [u8; 32]) -> Self {
        let hex = hex::encode(&digest[..16]);
        Self(format!(
            "{}-{}-{}-{}-{}",
            &hex[0..8],
            &hex[8..12],
            &hex[12..16],
            &hex[16..20],
            &hex[20..32]
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
