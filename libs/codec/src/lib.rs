//! # uuidcol-codec
//!
//! UUID value codec and column-type classifier for relational backends.
//!
//! ## Backends
//!
//! - `native-uuid`: a first-class `uuid` column type (PostgreSQL). Values
//!   travel as 36-character hyphenated text.
//! - `binary`: no native type (MySQL, SQLite). Values are stored in
//!   `binary(16)` columns as 16 raw bytes.
//!
//! ## Seams
//!
//! A host data-access layer plugs in at three points:
//!
//! - Schema introspection: [`classify`] decides whether a reported raw
//!   column type is a UUID column.
//! - Migrations: [`storage_type_for`] returns the DDL type fragment for a
//!   new UUID column.
//! - Values: [`marshal`] converts on every read, write and literal quote.
//!
//! [`TypeRegistry`] bundles these behind one explicit startup call
//! ([`install`]).
//!
//! ## Example
//!
//! ```
//! use uuidcol_codec::{classify, encode_for_backend, parse, Backend, Classification, WireValue};
//!
//! assert_eq!(classify(Backend::Binary, "BINARY(16)"), Classification::Uuid);
//!
//! let id = parse("550e8400-e29b-41d4-a716-446655440000")?;
//! let wire = encode_for_backend(&id, Backend::Binary)?;
//! assert_eq!(wire, WireValue::Binary(id.to_binary()));
//! # Ok::<(), uuidcol_codec::UuidError>(())
//! ```

mod backend;
mod classify;
mod codec;
mod error;
mod marshal;
mod natural_key;
mod registry;
mod value;

#[cfg(feature = "sqlx")]
mod pg;

pub use backend::{Backend, BackendProfile, IntoBackend, NativeType, UuidRepr};
pub use classify::{classify, storage_type_for, Classification, ColumnOptions, PRIMARY_KEY_MARKER};
pub use codec::{encode_for_backend, parse, to_binary, to_text, UuidInput, WireValue};
pub use error::UuidError;
pub use marshal::{marshal, marshal_nullable, quote_literal, Direction, Marshalled, NULL_LITERAL};
pub use natural_key::NaturalKey;
pub use registry::{install, ColumnType, TypeRegistry, UuidColumnType, UUID_TYPE_NAME};
pub use value::{UuidValue, BINARY_LEN, TEXT_LEN};

/// Re-export uuid for consumers that need raw UUID operations
pub use uuid::Uuid;
