//! Opaque identifier generation.

use std::collections::HashSet;

use cerif_model::EntityId;
use sha2::{Digest, Sha256};

/// Issues run-unique entity identifiers.
///
/// Ids are `sha256("<seed>\0<counter>")` truncated to 16 bytes and shaped
/// like a UUID. The same seed yields the same sequence, which makes output
/// reproducible.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    seed: String,
    counter: u64,
    issued: HashSet<EntityId>,
}

impl IdGenerator {
    pub fn seeded(seed: impl Into<String>) -> Self {
        Self {
            seed: seed.into(),
            counter: 0,
            issued: HashSet::new(),
        }
    }

    /// Generator seeded from the clock and process id.
    pub fn from_entropy() -> Self {
        let now = chrono::Utc::now();
        let nanos = now
            .timestamp_nanos_opt()
            .unwrap_or_else(|| now.timestamp_micros());
        Self::seeded(format!("{nanos}:{}", std::process::id()))
    }

    pub fn next_id(&mut self) -> EntityId {
        loop {
            self.counter += 1;
            let mut hasher = Sha256::new();
            hasher.update(self.seed.as_bytes());
            hasher.update([0u8]);
            hasher.update(self.counter.to_string().as_bytes());
            let digest: [u8; 32] = hasher.finalize().into();
            let id = EntityId::from_first_16_bytes_of_sha256(digest);
            if self.issued.insert(id.clone()) {
                return id;
            }
        }
    }

    /// Number of ids handed out so far.
    pub fn issued(&self) -> usize {
        self.issued.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_generators_repeat() {
        let mut a = IdGenerator::seeded("run");
        let mut b = IdGenerator::seeded("run");
        let mut c = IdGenerator::seeded("other");
        let first = a.next_id();
        assert_eq!(first, b.next_id());
        assert_ne!(first, c.next_id());
        assert_ne!(first, a.next_id());
    }

    #[test]
    fn ids_are_unique() {
        let mut ids = IdGenerator::from_entropy();
        let issued: HashSet<_> = (0..1000).map(|_| ids.next_id()).collect();
        assert_eq!(issued.len(), 1000);
        assert_eq!(ids.issued(), 1000);
    }
}
