//! Explicit column-type registration.
//!
//! A host data-access layer builds one [`TypeRegistry`] at startup, calls
//! [`install`] to register the UUID handler, and then consults the registry
//! while loading schemas, running migrations and marshalling values. There
//! is no global registry.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::{debug, trace};

use crate::backend::Backend;
use crate::classify::{classify, ColumnOptions};
use crate::codec::UuidInput;
use crate::marshal::{marshal, Direction, Marshalled};
use crate::UuidError;

/// Logical type name of the UUID column type.
pub const UUID_TYPE_NAME: &str = "uuid";

/// A logical column type a host can recognize, declare and marshal.
pub trait ColumnType: Send + Sync {
    /// Logical type name (e.g. `uuid`).
    fn name(&self) -> &'static str;

    /// Whether `raw_type`, as reported by `backend`, denotes this type.
    fn recognizes(&self, backend: Backend, raw_type: &str) -> bool;

    /// DDL type fragment for declaring a column of this type.
    fn storage_type(&self, backend: Backend, options: ColumnOptions) -> String;

    /// Converts a value of this type for `backend`.
    fn marshal(
        &self,
        raw: &dyn UuidInput,
        backend: Backend,
        direction: Direction,
    ) -> Result<Marshalled, UuidError>;
}

/// The UUID column type.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidColumnType;

impl ColumnType for UuidColumnType {
    fn name(&self) -> &'static str {
        UUID_TYPE_NAME
    }

    fn recognizes(&self, backend: Backend, raw_type: &str) -> bool {
        classify(backend, raw_type).is_uuid()
    }

    fn storage_type(&self, backend: Backend, options: ColumnOptions) -> String {
        backend.storage_type(options)
    }

    fn marshal(
        &self,
        raw: &dyn UuidInput,
        backend: Backend,
        direction: Direction,
    ) -> Result<Marshalled, UuidError> {
        marshal(raw, backend, direction)
    }
}

/// Registered column types, keyed by logical name.
#[derive(Default, Clone)]
pub struct TypeRegistry {
    types: BTreeMap<&'static str, Arc<dyn ColumnType>>,
}

impl TypeRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry with the UUID column type installed.
    pub fn with_uuid() -> Self {
        let mut registry = Self::new();
        install(&mut registry);
        registry
    }

    /// Registers a column type.
    ///
    /// Returns the previously registered type of the same name, if any.
    pub fn register(&mut self, column_type: Arc<dyn ColumnType>) -> Option<Arc<dyn ColumnType>> {
        let name = column_type.name();
        let previous = self.types.insert(name, column_type);
        debug!(
            logical_type = name,
            replaced = previous.is_some(),
            "Registered column type"
        );
        previous
    }

    /// Looks up a column type by logical name.
    pub fn get(&self, name: &str) -> Option<&Arc<dyn ColumnType>> {
        self.types.get(name)
    }

    /// Returns true if a type with this logical name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// Logical names of all registered types, sorted.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.types.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Finds the registered type that claims `raw_type` on `backend`.
    ///
    /// `None` means the host should fall back to its own classification.
    pub fn resolve(&self, backend: Backend, raw_type: &str) -> Option<&Arc<dyn ColumnType>> {
        let found = self
            .types
            .values()
            .find(|t| t.recognizes(backend, raw_type));
        trace!(
            backend = %backend,
            raw_type,
            logical_type = found.map(|t| t.name()),
            "Resolved column type"
        );
        found
    }

    /// Returns the DDL type fragment for a column of logical type `name`.
    pub fn declare(
        &self,
        backend: Backend,
        name: &str,
        options: ColumnOptions,
    ) -> Result<String, UuidError> {
        self.get(name)
            .map(|t| t.storage_type(backend, options))
            .ok_or_else(|| UuidError::UnknownType(name.to_string()))
    }
}

impl std::fmt::Debug for TypeRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypeRegistry")
            .field("types", &self.types.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Registers the UUID column type. Call once during startup.
pub fn install(registry: &mut TypeRegistry) {
    registry.register(Arc::new(UuidColumnType));
}
