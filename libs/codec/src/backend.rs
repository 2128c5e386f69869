//! Backend descriptors and their static capability profiles.
//!
//! Each backend is described once, up front, by a [`BackendProfile`]. The
//! classifier and the codec read the profile instead of branching on driver
//! or library versions.

use serde::{Deserialize, Serialize};

use crate::UuidError;

/// The closed set of backend descriptors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Backend {
    /// A backend with a first-class `uuid` column type (PostgreSQL).
    NativeUuid,

    /// A backend that stores UUIDs as `binary(16)` (MySQL, SQLite).
    Binary,
}

/// How a backend represents UUID values on the wire and on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UuidRepr {
    /// 36-character hyphenated text.
    Text,

    /// 16 raw bytes.
    Binary,
}

/// The native type entry a host merges into its type table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NativeType {
    pub name: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

/// Static capability descriptor for one backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BackendProfile {
    pub backend: Backend,
    /// Whether the backend has a first-class UUID column type.
    pub native_uuid: bool,
    pub repr: UuidRepr,
    /// Raw type strings that denote a UUID column, lowercase.
    pub recognized_types: &'static [&'static str],
    /// Base DDL type used when declaring a UUID column.
    pub ddl_type: &'static str,
    pub native_type: NativeType,
}

const NATIVE_UUID_PROFILE: BackendProfile = BackendProfile {
    backend: Backend::NativeUuid,
    native_uuid: true,
    repr: UuidRepr::Text,
    recognized_types: &["uuid"],
    ddl_type: "uuid",
    native_type: NativeType {
        name: "uuid",
        limit: None,
    },
};

const BINARY_PROFILE: BackendProfile = BackendProfile {
    backend: Backend::Binary,
    native_uuid: false,
    repr: UuidRepr::Binary,
    recognized_types: &["binary(16)", "binary(16,0)"],
    ddl_type: "binary(16)",
    native_type: NativeType {
        name: "binary",
        limit: Some(16),
    },
};

/// Host adapter names that map to [`Backend::NativeUuid`].
const NATIVE_UUID_ADAPTERS: &[&str] = &["postgresql", "postgres", "postgis", "jdbcpostgresql"];

/// Host adapter names that map to [`Backend::Binary`].
const BINARY_ADAPTERS: &[&str] = &[
    "mysql",
    "mysql2",
    "jdbcmysql",
    "trilogy",
    "sqlite",
    "sqlite3",
    "jdbcsqlite3",
];

impl Backend {
    /// Every backend descriptor.
    pub const ALL: [Backend; 2] = [Backend::NativeUuid, Backend::Binary];

    /// Returns the static profile for this backend.
    #[must_use]
    pub const fn profile(self) -> &'static BackendProfile {
        match self {
            Backend::NativeUuid => &NATIVE_UUID_PROFILE,
            Backend::Binary => &BINARY_PROFILE,
        }
    }

    /// Returns the wire representation this backend uses for UUIDs.
    #[must_use]
    pub const fn repr(self) -> UuidRepr {
        self.profile().repr
    }

    #[must_use]
    pub const fn has_native_uuid(self) -> bool {
        self.profile().native_uuid
    }

    /// Returns the raw type strings that classify as UUID on this backend.
    #[must_use]
    pub const fn recognized_types(self) -> &'static [&'static str] {
        self.profile().recognized_types
    }

    #[must_use]
    pub const fn native_type(self) -> NativeType {
        self.profile().native_type
    }

    /// Returns the descriptor name (`native-uuid` or `binary`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Backend::NativeUuid => "native-uuid",
            Backend::Binary => "binary",
        }
    }

    /// Maps a host adapter name (e.g. `postgresql`, `mysql2`) to a backend.
    ///
    /// Matching ignores ASCII case and surrounding whitespace.
    pub fn from_adapter_name(name: &str) -> Result<Self, UuidError> {
        let trimmed = name.trim();
        let matches = |names: &[&str]| names.iter().any(|n| n.eq_ignore_ascii_case(trimmed));

        if matches(NATIVE_UUID_ADAPTERS) {
            Ok(Backend::NativeUuid)
        } else if matches(BINARY_ADAPTERS) {
            Ok(Backend::Binary)
        } else {
            Err(UuidError::UnsupportedBackend(name.to_string()))
        }
    }
}

impl std::fmt::Display for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Backend {
    type Err = UuidError;

    /// Accepts a descriptor name or any known adapter name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Backend::ALL
            .into_iter()
            .find(|b| b.as_str().eq_ignore_ascii_case(trimmed))
            .map_or_else(|| Backend::from_adapter_name(s), Ok)
    }
}

/// Conversion into a [`Backend`] that can fail for names outside the set.
pub trait IntoBackend {
    fn into_backend(self) -> Result<Backend, UuidError>;
}

impl IntoBackend for Backend {
    fn into_backend(self) -> Result<Backend, UuidError> {
        Ok(self)
    }
}

impl IntoBackend for &str {
    fn into_backend(self) -> Result<Backend, UuidError> {
        self.parse()
    }
}

impl IntoBackend for &String {
    fn into_backend(self) -> Result<Backend, UuidError> {
        self.parse()
    }
}

impl IntoBackend for String {
    fn into_backend(self) -> Result<Backend, UuidError> {
        self.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profiles_match_backend() {
        for backend in Backend::ALL {
            assert_eq!(backend.profile().backend, backend);
        }
    }

    #[test]
    fn test_native_uuid_profile() {
        let b = Backend::NativeUuid;
        assert!(b.has_native_uuid());
        assert_eq!(b.repr(), UuidRepr::Text);
        assert_eq!(b.native_type(), NativeType { name: "uuid", limit: None });
    }

    #[test]
    fn test_binary_profile() {
        let b = Backend::Binary;
        assert!(!b.has_native_uuid());
        assert_eq!(b.repr(), UuidRepr::Binary);
        assert_eq!(
            b.native_type(),
            NativeType {
                name: "binary",
                limit: Some(16)
            }
        );
    }

    #[test]
    fn test_from_adapter_name() {
        assert_eq!(Backend::from_adapter_name("PostgreSQL").unwrap(), Backend::NativeUuid);
        assert_eq!(Backend::from_adapter_name("mysql2").unwrap(), Backend::Binary);
        assert_eq!(Backend::from_adapter_name(" SQLite3 ").unwrap(), Backend::Binary);
    }

    #[test]
    fn test_from_adapter_name_unknown() {
        let err = Backend::from_adapter_name("oracle").unwrap_err();
        assert_eq!(err, UuidError::UnsupportedBackend("oracle".to_string()));
    }

    #[test]
    fn test_from_str_descriptor_and_adapter() {
        assert_eq!("native-uuid".parse::<Backend>().unwrap(), Backend::NativeUuid);
        assert_eq!("BINARY".parse::<Backend>().unwrap(), Backend::Binary);
        assert_eq!("postgres".parse::<Backend>().unwrap(), Backend::NativeUuid);
        assert!("mssql".parse::<Backend>().unwrap_err().is_unsupported_backend());
    }

    #[test]
    fn test_display_roundtrip() {
        for backend in Backend::ALL {
            assert_eq!(backend.to_string().parse::<Backend>().unwrap(), backend);
        }
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&Backend::NativeUuid).unwrap();
        assert_eq!(json, "\"native-uuid\"");
        let parsed: Backend = serde_json::from_str("\"binary\"").unwrap();
        assert_eq!(parsed, Backend::Binary);
    }
}
