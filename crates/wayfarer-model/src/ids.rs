//! Id generation and the traveler reference convention.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Source of entity ids.
///
/// Document operations that create entities take the source as a parameter
/// so tests can inject [`SequentialIds`] and assert on exact documents.
pub trait IdSource {
    fn next_id(&mut self) -> String;
}

/// Short random alphanumeric ids, collision-checked only by randomness.
///
/// Nine characters of a v4 UUID match the historical id shape; at
/// single-trip scale a collision is not a practical concern.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIds;

impl IdSource for RandomIds {
    fn next_id(&mut self) -> String {
        let mut id = Uuid::new_v4().simple().to_string();
        id.truncate(9);
        id
    }
}

/// Deterministic counter-based ids for tests.
#[derive(Debug, Clone, Default)]
pub struct SequentialIds {
    next: u64,
    prefix: &'static str,
}

impl SequentialIds {
    pub fn new(prefix: &'static str) -> Self {
        Self { next: 1, prefix }
    }
}

impl IdSource for SequentialIds {
    fn next_id(&mut self) -> String {
        let id = format!("{}{}", self.prefix, self.next);
        self.next += 1;
        id
    }
}

/// Reference to a traveler by display name.
///
/// Stay occupants and expense payer/split lists join on the traveler's name,
/// not their id. Renaming or removing a traveler does not cascade into these
/// references. This is an accepted gap, kept behind this newtype so a future
/// integrity pass is a localized change.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TravelerRef(String);

impl TravelerRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TravelerRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TravelerRef {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_ids_are_short_alphanumeric() {
        let mut ids = RandomIds;
        let id = ids.next_id();
        assert_eq!(id.len(), 9);
        assert!(id.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn sequential_ids_count_up() {
        let mut ids = SequentialIds::new("t");
        assert_eq!(ids.next_id(), "t1");
        assert_eq!(ids.next_id(), "t2");
    }
}
