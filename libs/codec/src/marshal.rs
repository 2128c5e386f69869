//! Value marshalling across the application/backend boundary.
//!
//! Every read, write and SQL-literal quoting of a UUID column goes through
//! [`marshal`].

use serde::Serialize;

use crate::backend::{Backend, UuidRepr};
use crate::codec::{encode_for_backend, parse, UuidInput, WireValue};
use crate::value::UuidValue;
use crate::UuidError;

/// SQL text for an absent value.
pub const NULL_LITERAL: &str = "NULL";

/// Which way a value is crossing the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Application value bound as a parameter or written to a row.
    ToStorage,

    /// Value read back from a row.
    FromStorage,

    /// Value inlined into SQL text.
    ToSqlLiteral,
}

/// Result of marshalling a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Marshalled {
    Value(UuidValue),
    Wire(WireValue),
    Literal(String),
}

impl Marshalled {
    /// Returns the canonical value, if this came from [`Direction::FromStorage`].
    pub fn into_value(self) -> Option<UuidValue> {
        match self {
            Marshalled::Value(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the wire value, if this came from [`Direction::ToStorage`].
    pub fn into_wire(self) -> Option<WireValue> {
        match self {
            Marshalled::Wire(w) => Some(w),
            _ => None,
        }
    }

    /// Returns the SQL literal, if this came from [`Direction::ToSqlLiteral`].
    pub fn into_literal(self) -> Option<String> {
        match self {
            Marshalled::Literal(s) => Some(s),
            _ => None,
        }
    }
}

/// Renders a value as a SQL literal for `backend`.
///
/// Native-uuid backends get a quoted hyphenated string; binary backends get
/// a hex blob literal (`x'...'`).
pub fn quote_literal<I: UuidInput + ?Sized>(input: &I, backend: Backend) -> Result<String, UuidError> {
    let wire = encode_for_backend(input, backend)?;
    Ok(match backend.repr() {
        UuidRepr::Text => format!("'{wire}'"),
        UuidRepr::Binary => format!("x'{wire}'"),
    })
}

/// Converts a present value for `backend` in the given direction.
pub fn marshal<I: UuidInput + ?Sized>(
    raw: &I,
    backend: Backend,
    direction: Direction,
) -> Result<Marshalled, UuidError> {
    match direction {
        Direction::ToStorage => encode_for_backend(raw, backend).map(Marshalled::Wire),
        Direction::FromStorage => parse(raw).map(Marshalled::Value),
        Direction::ToSqlLiteral => quote_literal(raw, backend).map(Marshalled::Literal),
    }
}

/// Like [`marshal`], but for a value that may be absent.
///
/// Absent stays absent when reading or writing. An absent literal renders as
/// `NULL`.
pub fn marshal_nullable<I: UuidInput + ?Sized>(
    raw: Option<&I>,
    backend: Backend,
    direction: Direction,
) -> Result<Option<Marshalled>, UuidError> {
    match (raw, direction) {
        (Some(raw), _) => marshal(raw, backend, direction).map(Some),
        (None, Direction::ToSqlLiteral) => Ok(Some(Marshalled::Literal(NULL_LITERAL.to_string()))),
        (None, _) => Ok(None),
    }
}
