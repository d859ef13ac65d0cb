//! Identifier adapters.

use application::ports::outbound::IdGenerator;
use domain::identity::id::AccountId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// UUID flavour used for new identifiers.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UuidVersion {
    /// Random.
    #[default]
    V4,
    /// Unix-time ordered.
    V7,
}

/// Hyphenated UUID generator.
#[derive(Debug, Default)]
pub struct UuidGenerator {
    version: UuidVersion,
}

impl UuidGenerator {
    pub fn new(version: UuidVersion) -> Self {
        Self { version }
    }
}

impl IdGenerator for UuidGenerator {
    fn generate(&self) -> AccountId {
        let uuid = match self.version {
            UuidVersion::V4 => Uuid::new_v4(),
            UuidVersion::V7 => Uuid::now_v7(),
        };

        AccountId::new(uuid.hyphenated().to_string())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_unique_ids() {
        let generator = UuidGenerator::default();
        let ids: HashSet<_> =
            (0..1_000).map(|_| generator.generate()).collect();

        assert_eq!(ids.len(), 1_000);
    }

    #[test]
    fn test_versions() {
        for (version, number) in [(UuidVersion::V4, 4), (UuidVersion::V7, 7)] {
            let id = UuidGenerator::new(version).generate();
            let uuid = Uuid::parse_str(id.as_str()).unwrap();

            assert_eq!(uuid.get_version_num(), number);
            assert_eq!(id.as_str().len(), 36);
        }
    }
}
