//! Deterministic UUIDs derived from natural-key attributes.
//!
//! A record with a natural key (for example a title or an external
//! reference) gets a name-based v5 UUID, so inserting the same key twice
//! yields the same primary key.

use uuid::Uuid;

use crate::value::UuidValue;

/// Separator placed between natural-key parts before hashing.
pub const PART_SEPARATOR: &str = "-";

/// Derives v5 UUIDs from natural-key parts within a namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NaturalKey {
    namespace: UuidValue,
}

impl NaturalKey {
    /// Uses the ISO OID namespace.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            namespace: UuidValue::from_uuid(Uuid::NAMESPACE_OID),
        }
    }

    /// Uses a custom namespace.
    #[must_use]
    pub const fn with_namespace(namespace: UuidValue) -> Self {
        Self { namespace }
    }

    #[must_use]
    pub const fn namespace(&self) -> UuidValue {
        self.namespace
    }

    /// Derives the UUID for the given key parts, joined with `-`.
    pub fn derive<I, S>(&self, parts: I) -> UuidValue
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let name = parts
            .into_iter()
            .map(|p| p.as_ref().to_string())
            .collect::<Vec<_>>()
            .join(PART_SEPARATOR);
        UuidValue::from_uuid(Uuid::new_v5(self.namespace.as_uuid(), name.as_bytes()))
    }
}

impl Default for NaturalKey {
    fn default() -> Self {
        Self::new()
    }
}
