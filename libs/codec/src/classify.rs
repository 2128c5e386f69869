//! Column-type classification and UUID column declaration.

use serde::Serialize;

use crate::backend::{Backend, IntoBackend};
use crate::UuidError;

/// DDL marker appended to primary-key UUID columns.
pub const PRIMARY_KEY_MARKER: &str = "PRIMARY KEY";

/// Outcome of classifying a raw column type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    /// The column holds UUIDs.
    Uuid,

    /// Not a UUID column; the host falls back to its own classification.
    Unrecognized,
}

impl Classification {
    /// Returns true if the column was classified as UUID.
    pub fn is_uuid(&self) -> bool {
        matches!(self, Self::Uuid)
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Uuid => "uuid",
            Self::Unrecognized => "unrecognized",
        }
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies a raw column type reported by `backend`'s schema introspection.
///
/// Total and allocation-free: this runs for every column of every table.
/// Matching is exact apart from ASCII case.
pub fn classify(backend: Backend, raw_type: &str) -> Classification {
    let recognized = backend
        .recognized_types()
        .iter()
        .any(|t| t.eq_ignore_ascii_case(raw_type));

    if recognized {
        Classification::Uuid
    } else {
        Classification::Unrecognized
    }
}

/// Options for declaring a UUID column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnOptions {
    pub primary_key: bool,
}

impl ColumnOptions {
    /// Options for a primary-key column.
    #[must_use]
    pub const fn primary_key() -> Self {
        Self { primary_key: true }
    }
}

impl Backend {
    /// Returns the DDL type fragment declaring a UUID column on this backend.
    #[must_use]
    pub fn storage_type(self, options: ColumnOptions) -> String {
        let ddl_type = self.profile().ddl_type;
        if options.primary_key {
            format!("{ddl_type} {PRIMARY_KEY_MARKER}")
        } else {
            ddl_type.to_string()
        }
    }
}

/// Returns the DDL type fragment for a UUID column on `backend`.
///
/// `backend` may be a [`Backend`] or a descriptor/adapter name. Names
/// outside the supported set fail with [`UuidError::UnsupportedBackend`]
/// instead of defaulting to some other backend's representation.
pub fn storage_type_for<B: IntoBackend>(
    backend: B,
    options: ColumnOptions,
) -> Result<String, UuidError> {
    Ok(backend.into_backend()?.storage_type(options))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_binary_backend() {
        assert_eq!(classify(Backend::Binary, "binary(16)"), Classification::Uuid);
        assert_eq!(classify(Backend::Binary, "BINARY(16,0)"), Classification::Uuid);
        assert_eq!(classify(Backend::Binary, "binary(8)"), Classification::Unrecognized);
        assert_eq!(classify(Backend::Binary, "uuid"), Classification::Unrecognized);
    }

    #[test]
    fn test_classify_native_backend() {
        assert_eq!(classify(Backend::NativeUuid, "uuid"), Classification::Uuid);
        assert_eq!(classify(Backend::NativeUuid, "UUID"), Classification::Uuid);
        assert_eq!(
            classify(Backend::NativeUuid, "varchar(36)"),
            Classification::Unrecognized
        );
        assert_eq!(
            classify(Backend::NativeUuid, "binary(16)"),
            Classification::Unrecognized
        );
    }

    #[test]
    fn test_classify_is_exact() {
        assert!(!classify(Backend::Binary, " binary(16)").is_uuid());
        assert!(!classify(Backend::Binary, "varbinary(16)").is_uuid());
        assert!(!classify(Backend::Binary, "binary(16) unsigned").is_uuid());
        assert!(!classify(Backend::NativeUuid, "").is_uuid());
    }

    #[test]
    fn test_storage_type_native() {
        let ddl = storage_type_for(Backend::NativeUuid, ColumnOptions::primary_key()).unwrap();
        assert_eq!(ddl, "uuid PRIMARY KEY");
        assert_eq!(
            storage_type_for(Backend::NativeUuid, ColumnOptions::default()).unwrap(),
            "uuid"
        );
    }

    #[test]
    fn test_storage_type_binary() {
        assert_eq!(
            Backend::Binary.storage_type(ColumnOptions::default()),
            "binary(16)"
        );
        assert_eq!(
            Backend::Binary.storage_type(ColumnOptions::primary_key()),
            "binary(16) PRIMARY KEY"
        );
    }

    #[test]
    fn test_storage_type_by_adapter_name() {
        assert_eq!(
            storage_type_for("postgresql", ColumnOptions::default()).unwrap(),
            "uuid"
        );
        assert_eq!(
            storage_type_for("mysql2", ColumnOptions::default()).unwrap(),
            "binary(16)"
        );
    }

    #[test]
    fn test_storage_type_unsupported_backend() {
        let err = storage_type_for("sqlserver", ColumnOptions::default()).unwrap_err();
        assert_eq!(err, UuidError::UnsupportedBackend("sqlserver".to_string()));
    }
}
