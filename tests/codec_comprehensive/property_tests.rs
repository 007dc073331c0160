//! Property-Based Tests
//!
//! - Round-trip law: `decode(encode(T)) == T`
//! - Decode idempotence: `decode(decode(X)) == decode(X)`
//! - Encoder totality: output is JSON-safe, encoding is idempotent

use crate::test_utils::*;
use typedoc::DocumentColumn;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_round_trip_law(doc in document()) {
        prop_assert_eq!(decode(encode(&doc)), doc);
    }

    #[test]
    fn prop_round_trip_law_opaque_without_sequences(doc in sequence_free_document()) {
        let codec = opaque_codec();
        prop_assert_eq!(codec.decode(codec.encode(&doc)), doc);
    }

    #[test]
    fn prop_round_trip_law_tagged(doc in document()) {
        let codec = tagged_codec();
        prop_assert_eq!(codec.decode(codec.encode(&doc)), doc);
    }

    #[test]
    fn prop_round_trip_through_json_text(doc in exact_document()) {
        let column = DocumentColumn::default();
        let text = column.bind(Some(&doc)).unwrap();
        let back = column.read(text.as_deref()).unwrap();
        prop_assert_eq!(back, Some(doc));
    }

    #[test]
    fn prop_decode_idempotent(stored in stored_document()) {
        let once = decode(stored);
        prop_assert_eq!(decode(once.clone()), once);
    }

    #[test]
    fn prop_encode_output_is_json_safe(doc in document()) {
        prop_assert!(Value::from(encode(&doc)).is_json_safe());
    }

    #[test]
    fn prop_encode_idempotent(doc in document()) {
        let once = encode(&doc);
        prop_assert_eq!(encode(&once), once);
    }

    #[test]
    fn prop_encode_keeps_keys(doc in document()) {
        let encoded = encode(&doc);
        prop_assert!(encoded.keys().eq(doc.keys()));
    }
}
