//! Property tests for the codec and classifier.

use proptest::prelude::*;
use uuidcol_codec::{
    classify, encode_for_backend, parse, to_binary, to_text, Backend, UuidValue, WireValue,
};
use uuidcol_testing::{
    hyphenated_uuid, raw_column_type, uuid_bytes, wrong_length_bytes, wrong_length_text,
    BINARY_UUID_TYPES, NATIVE_UUID_TYPES,
};

fn backend() -> impl Strategy<Value = Backend> {
    prop_oneof![Just(Backend::NativeUuid), Just(Backend::Binary)]
}

proptest! {
    #[test]
    fn prop_text_roundtrip_preserves_binary(bytes in uuid_bytes()) {
        let v = UuidValue::from_bytes(bytes);
        let parsed = parse(to_text(&v).as_str()).unwrap();
        prop_assert_eq!(to_binary(&parsed), to_binary(&v));
    }

    #[test]
    fn prop_binary_roundtrip_preserves_text(bytes in uuid_bytes()) {
        let v = UuidValue::from_bytes(bytes);
        let parsed = parse(&to_binary(&v)[..]).unwrap();
        prop_assert_eq!(to_text(&parsed), to_text(&v));
    }

    #[test]
    fn prop_text_input_any_case(text in hyphenated_uuid()) {
        let v = parse(text.as_str()).unwrap();
        prop_assert_eq!(to_text(&v), text.to_lowercase());
    }

    #[test]
    fn prop_encode_idempotent(bytes in uuid_bytes(), b in backend()) {
        let v = UuidValue::from_bytes(bytes);
        let once = encode_for_backend(&v, b).unwrap();
        let twice = encode_for_backend(&once, b).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_encode_matches_repr(bytes in uuid_bytes()) {
        let v = UuidValue::from_bytes(bytes);
        prop_assert_eq!(
            encode_for_backend(&v, Backend::Binary).unwrap(),
            WireValue::Binary(bytes)
        );
        prop_assert_eq!(
            encode_for_backend(&v, Backend::NativeUuid).unwrap(),
            WireValue::Text(v.to_text())
        );
    }

    #[test]
    fn prop_wrong_length_binary_rejected(bytes in wrong_length_bytes()) {
        prop_assert!(parse(&bytes).unwrap_err().is_invalid_format());
    }

    #[test]
    fn prop_wrong_length_text_rejected(text in wrong_length_text()) {
        prop_assert!(parse(text.as_str()).unwrap_err().is_invalid_format());
    }

    #[test]
    fn prop_classify_total(raw in raw_column_type(), b in backend()) {
        // Never panics, and only the fixture type strings classify as UUID.
        let result = classify(b, &raw);
        let fixtures = match b {
            Backend::Binary => BINARY_UUID_TYPES,
            Backend::NativeUuid => NATIVE_UUID_TYPES,
        };
        let expected = fixtures.iter().any(|t| t.eq_ignore_ascii_case(&raw));
        prop_assert_eq!(result.is_uuid(), expected);
    }

    #[test]
    fn prop_classify_only_fixture_strings(raw in any::<String>()) {
        let binary_known = BINARY_UUID_TYPES.iter().any(|t| t.eq_ignore_ascii_case(&raw));
        let native_known = NATIVE_UUID_TYPES.iter().any(|t| t.eq_ignore_ascii_case(&raw));
        prop_assert_eq!(classify(Backend::Binary, &raw).is_uuid(), binary_known);
        prop_assert_eq!(classify(Backend::NativeUuid, &raw).is_uuid(), native_known);
    }
}
