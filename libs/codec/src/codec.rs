//! Conversion between accepted input forms, the canonical value and each
//! backend's wire form.
//!
//! [`encode_for_backend`] is the one place that decides which wire form a
//! backend receives. Quoting, parameter binding and type casting all go
//! through it.

use uuid::Uuid;

use crate::backend::{Backend, UuidRepr};
use crate::value::{UuidValue, BINARY_LEN, TEXT_LEN};
use crate::UuidError;

/// A UUID in a backend's wire representation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum WireValue {
    /// Hyphenated text, for backends with a native `uuid` type.
    Text(String),

    /// 16 raw bytes, for `binary(16)` backends.
    Binary([u8; BINARY_LEN]),
}

impl WireValue {
    /// Returns the representation of this wire value.
    #[must_use]
    pub fn repr(&self) -> UuidRepr {
        match self {
            WireValue::Text(_) => UuidRepr::Text,
            WireValue::Binary(_) => UuidRepr::Binary,
        }
    }

    /// Returns the raw bytes as sent to the backend.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            WireValue::Text(s) => s.as_bytes(),
            WireValue::Binary(b) => b,
        }
    }
}

impl std::fmt::Display for WireValue {
    /// Text renders as-is; binary renders as lowercase hex.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WireValue::Text(s) => f.write_str(s),
            WireValue::Binary(b) => f.write_str(&hex::encode(b)),
        }
    }
}

impl From<WireValue> for Vec<u8> {
    fn from(wire: WireValue) -> Self {
        match wire {
            WireValue::Text(s) => s.into_bytes(),
            WireValue::Binary(b) => b.to_vec(),
        }
    }
}

/// Any input the codec can normalize into a [`UuidValue`].
///
/// Implemented for the canonical value itself, [`Uuid`], hyphenated text,
/// raw bytes and already-encoded [`WireValue`]s.
pub trait UuidInput {
    fn to_uuid_value(&self) -> Result<UuidValue, UuidError>;
}

impl UuidInput for UuidValue {
    fn to_uuid_value(&self) -> Result<UuidValue, UuidError> {
        Ok(*self)
    }
}

impl UuidInput for Uuid {
    fn to_uuid_value(&self) -> Result<UuidValue, UuidError> {
        Ok(UuidValue::from_uuid(*self))
    }
}

impl UuidInput for str {
    fn to_uuid_value(&self) -> Result<UuidValue, UuidError> {
        UuidValue::parse_str(self)
    }
}

impl UuidInput for String {
    fn to_uuid_value(&self) -> Result<UuidValue, UuidError> {
        UuidValue::parse_str(self)
    }
}

impl UuidInput for [u8] {
    /// Exactly 16 bytes are the raw form. A 36-byte buffer is accepted when
    /// it holds hyphenated text, since drivers hand text columns back as
    /// bytes. Every other length is rejected.
    fn to_uuid_value(&self) -> Result<UuidValue, UuidError> {
        match self.len() {
            BINARY_LEN => UuidValue::from_slice(self),
            TEXT_LEN => std::str::from_utf8(self)
                .map_err(|_| UuidError::invalid_format("36-byte input is not valid UTF-8"))
                .and_then(UuidValue::parse_str),
            len => Err(UuidError::invalid_format(format!(
                "expected {BINARY_LEN} bytes or {TEXT_LEN} characters, got {len} bytes"
            ))),
        }
    }
}

impl UuidInput for Vec<u8> {
    fn to_uuid_value(&self) -> Result<UuidValue, UuidError> {
        self.as_slice().to_uuid_value()
    }
}

impl UuidInput for [u8; BINARY_LEN] {
    fn to_uuid_value(&self) -> Result<UuidValue, UuidError> {
        Ok(UuidValue::from_bytes(*self))
    }
}

impl UuidInput for WireValue {
    fn to_uuid_value(&self) -> Result<UuidValue, UuidError> {
        match self {
            WireValue::Text(s) => UuidValue::parse_str(s),
            WireValue::Binary(b) => Ok(UuidValue::from_bytes(*b)),
        }
    }
}

impl<T: UuidInput + ?Sized> UuidInput for &T {
    fn to_uuid_value(&self) -> Result<UuidValue, UuidError> {
        (**self).to_uuid_value()
    }
}

/// Normalizes any accepted input into the canonical value.
///
/// Absent values are not handled here; callers check for absence first.
pub fn parse<I: UuidInput + ?Sized>(input: &I) -> Result<UuidValue, UuidError> {
    input.to_uuid_value()
}

/// Canonical 16-byte encoding.
#[must_use]
pub fn to_binary(value: &UuidValue) -> [u8; BINARY_LEN] {
    value.to_binary()
}

/// Canonical 36-character hyphenated encoding.
#[must_use]
pub fn to_text(value: &UuidValue) -> String {
    value.to_text()
}

/// Encodes a value in the wire form `backend` expects.
///
/// Input that is already in the target wire form comes back unchanged
/// (modulo hex case), so encoding is idempotent.
pub fn encode_for_backend<I: UuidInput + ?Sized>(
    input: &I,
    backend: Backend,
) -> Result<WireValue, UuidError> {
    let value = input.to_uuid_value()?;
    Ok(match backend.repr() {
        UuidRepr::Text => WireValue::Text(value.to_text()),
        UuidRepr::Binary => WireValue::Binary(value.to_binary()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "550e8400-e29b-41d4-a716-446655440000";

    fn sample() -> UuidValue {
        UuidValue::parse_str(SAMPLE).unwrap()
    }

    #[test]
    fn test_parse_text() {
        let value = parse(SAMPLE).unwrap();
        assert_eq!(to_binary(&value).len(), 16);
        assert_eq!(to_text(&value), SAMPLE);
    }

    #[test]
    fn test_parse_binary() {
        let bytes = sample().to_binary();
        assert_eq!(parse(&bytes[..]).unwrap(), sample());
        assert_eq!(parse(&bytes.to_vec()).unwrap(), sample());
    }

    #[test]
    fn test_parse_passthrough() {
        assert_eq!(parse(&sample()).unwrap(), sample());
        assert_eq!(parse(sample().as_uuid()).unwrap(), sample());
    }

    #[test]
    fn test_parse_text_as_bytes() {
        assert_eq!(parse(SAMPLE.as_bytes()).unwrap(), sample());
    }

    #[test]
    fn test_parse_rejects_truncated_binary() {
        let err = parse(&[0u8; 15][..]).unwrap_err();
        assert!(err.is_invalid_format());
    }

    #[test]
    fn test_parse_rejects_padded_binary() {
        let err = parse(&vec![0u8; 17]).unwrap_err();
        assert!(err.is_invalid_format());
    }

    #[test]
    fn test_parse_rejects_garbage_text() {
        assert!(parse("not-a-uuid").unwrap_err().is_invalid_format());
        assert!(parse("").unwrap_err().is_invalid_format());
    }

    #[test]
    fn test_parse_rejects_invalid_utf8_text_length() {
        let bytes = [0xffu8; 36];
        assert!(parse(&bytes[..]).unwrap_err().is_invalid_format());
    }

    #[test]
    fn test_encode_native_uuid() {
        let wire = encode_for_backend(&sample(), Backend::NativeUuid).unwrap();
        assert_eq!(wire, WireValue::Text(SAMPLE.to_string()));
        assert_eq!(wire.repr(), UuidRepr::Text);
    }

    #[test]
    fn test_encode_binary() {
        let wire = encode_for_backend(&sample(), Backend::Binary).unwrap();
        assert_eq!(wire, WireValue::Binary(sample().to_binary()));
        assert_eq!(wire.as_bytes().len(), 16);
        assert_eq!(wire.to_string(), "550e8400e29b41d4a716446655440000");
    }

    #[test]
    fn test_encode_idempotent() {
        for backend in Backend::ALL {
            let once = encode_for_backend(SAMPLE, backend).unwrap();
            let twice = encode_for_backend(&once, backend).unwrap();
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_encode_crosses_representations() {
        let text = encode_for_backend(&sample(), Backend::NativeUuid).unwrap();
        let binary = encode_for_backend(&text, Backend::Binary).unwrap();
        let back = encode_for_backend(&binary, Backend::NativeUuid).unwrap();
        assert_eq!(text, back);
    }

    #[test]
    fn test_encode_propagates_invalid_input() {
        let err = encode_for_backend("zzz", Backend::Binary).unwrap_err();
        assert!(err.is_invalid_format());
    }
}
