//! The canonical UUID value.

use uuid::Uuid;

use crate::UuidError;

/// Length of the hyphenated text form (`8-4-4-4-12`).
pub const TEXT_LEN: usize = 36;

/// Length of the raw binary form.
pub const BINARY_LEN: usize = 16;

/// Byte offsets of the hyphens in the text form.
const HYPHEN_POSITIONS: [usize; 4] = [8, 13, 18, 23];

/// A 128-bit UUID in canonical form.
///
/// Every accepted representation (hyphenated text, 16 raw bytes) normalizes
/// to this type, so two representations of the same bits compare equal once
/// parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UuidValue(Uuid);

impl UuidValue {
    /// The all-zero UUID.
    pub const NIL: Self = Self(Uuid::nil());

    /// Creates a value from its 16-byte big-endian encoding.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; BINARY_LEN]) -> Self {
        Self(Uuid::from_bytes(bytes))
    }

    /// Wraps an existing [`Uuid`].
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying [`Uuid`].
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Generates a fresh time-ordered (v7) UUID.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::now_v7())
    }

    /// Parses the hyphenated 36-character form.
    ///
    /// Only the `8-4-4-4-12` layout is accepted; simple, braced and URN
    /// forms are rejected. Hex digits may be either case.
    pub fn parse_str(s: &str) -> Result<Self, UuidError> {
        if s.len() != TEXT_LEN {
            return Err(UuidError::invalid_format(format!(
                "expected {TEXT_LEN} characters, got {}",
                s.len()
            )));
        }

        for (i, b) in s.bytes().enumerate() {
            let valid = if HYPHEN_POSITIONS.contains(&i) {
                b == b'-'
            } else {
                b.is_ascii_hexdigit()
            };
            if !valid {
                return Err(UuidError::invalid_format(format!(
                    "unexpected character at position {i} in '{s}'"
                )));
            }
        }

        Uuid::parse_str(s)
            .map(Self)
            .map_err(|e| UuidError::invalid_format(e.to_string()))
    }

    /// Parses exactly 16 raw bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, UuidError> {
        let bytes: [u8; BINARY_LEN] = bytes.try_into().map_err(|_| {
            UuidError::invalid_format(format!(
                "expected {BINARY_LEN} bytes, got {}",
                bytes.len()
            ))
        })?;
        Ok(Self::from_bytes(bytes))
    }

    /// Returns the 16-byte big-endian encoding.
    #[must_use]
    pub const fn to_binary(&self) -> [u8; BINARY_LEN] {
        *self.0.as_bytes()
    }

    /// Returns the lowercase hyphenated text encoding.
    #[must_use]
    pub fn to_text(&self) -> String {
        self.0.hyphenated().to_string()
    }

    /// Returns true if this is the nil UUID.
    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl std::fmt::Display for UuidValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl std::str::FromStr for UuidValue {
    type Err = UuidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl From<Uuid> for UuidValue {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl From<UuidValue> for Uuid {
    fn from(value: UuidValue) -> Self {
        value.0
    }
}

impl From<[u8; BINARY_LEN]> for UuidValue {
    fn from(bytes: [u8; BINARY_LEN]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl AsRef<Uuid> for UuidValue {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

impl serde::Serialize for UuidValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_text())
    }
}

impl<'de> serde::Deserialize<'de> for UuidValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse_str(&s).map_err(serde::de::Error::custom)
    }
}
