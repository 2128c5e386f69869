//! Shared fixtures and proptest strategies.
//!
//! Strategies produce plain bytes and strings so that this crate does not
//! depend on the codec it is used to test.

use proptest::collection::vec;
use proptest::prelude::*;

/// A well-known version 4 UUID in hyphenated form.
pub const SAMPLE_UUID: &str = "550e8400-e29b-41d4-a716-446655440000";

/// [`SAMPLE_UUID`] as 16 big-endian bytes.
pub const SAMPLE_UUID_BYTES: [u8; 16] = [
    0x55, 0x0e, 0x84, 0x00, 0xe2, 0x9b, 0x41, 0xd4, 0xa7, 0x16, 0x44, 0x66, 0x55, 0x44, 0x00, 0x00,
];

/// Raw column types that denote a UUID on the binary backend.
pub const BINARY_UUID_TYPES: &[&str] = &["binary(16)", "BINARY(16)", "binary(16,0)", "BINARY(16,0)"];

/// Raw column types that denote a UUID on the native-uuid backend.
pub const NATIVE_UUID_TYPES: &[&str] = &["uuid", "UUID", "Uuid"];

/// Raw column types that look close to UUID types but are not.
pub const NEAR_MISS_TYPES: &[&str] = &[
    "binary(8)",
    "binary(32)",
    "varbinary(16)",
    "binary(16, 0)",
    " binary(16)",
    "char(36)",
    "varchar(36)",
    "uuid[]",
    "uuidx",
    "",
];

/// Formats 16 bytes in the hyphenated `8-4-4-4-12` layout.
pub fn hyphenate(bytes: &[u8; 16], uppercase: bool) -> String {
    let hex = if uppercase {
        hex::encode_upper(bytes)
    } else {
        hex::encode(bytes)
    };
    format!(
        "{}-{}-{}-{}-{}",
        &hex[0..8],
        &hex[8..12],
        &hex[12..16],
        &hex[16..20],
        &hex[20..32]
    )
}

/// Arbitrary 128-bit values as raw bytes.
pub fn uuid_bytes() -> impl Strategy<Value = [u8; 16]> {
    any::<[u8; 16]>()
}

/// Arbitrary hyphenated UUID strings, in either hex case.
pub fn hyphenated_uuid() -> impl Strategy<Value = String> {
    (uuid_bytes(), any::<bool>()).prop_map(|(bytes, upper)| hyphenate(&bytes, upper))
}

/// Byte buffers of any length except 16 and 36.
///
/// 36 bytes is excluded because a 36-byte buffer may hold hyphenated text.
pub fn wrong_length_bytes() -> impl Strategy<Value = Vec<u8>> {
    prop_oneof![
        vec(any::<u8>(), 0..16),
        vec(any::<u8>(), 17..36),
        vec(any::<u8>(), 37..64),
    ]
}

/// Strings that are not 36 characters long.
pub fn wrong_length_text() -> impl Strategy<Value = String> {
    "[0-9a-f-]{0,35}|[0-9a-f-]{37,48}"
}

/// A mix of known UUID types, near misses and arbitrary strings.
pub fn raw_column_type() -> impl Strategy<Value = String> {
    let known: Vec<&'static str> = BINARY_UUID_TYPES
        .iter()
        .chain(NATIVE_UUID_TYPES)
        .chain(NEAR_MISS_TYPES)
        .copied()
        .collect();
    prop_oneof![
        proptest::sample::select(known).prop_map(str::to_string),
        any::<String>(),
        "[a-zA-Z]{1,12}(\\([0-9]{1,3}(,[0-9]{1,2})?\\))?",
    ]
}
