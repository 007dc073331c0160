//! Heuristic Decoding Tests
//!
//! Bare strings carry no type tag, so decoding guesses from the string's
//! shape. These tests lock in the guesses, including the wrong ones.
//!
//! Test ID Conventions:
//! - HX-xxx: Heuristic behaviour
//! - TG-xxx: Tagged wire format

use crate::test_utils::*;
use typedoc::IDENTIFIER_LENGTH;

#[test]
fn hx_001_uuid_shaped_text_is_promoted() {
    let literal = "01234567-89ab-cdef-0123-456789abcdef";
    let decoded = decode(mapping! { "code" => literal });
    assert_eq!(
        decoded["code"],
        Value::Identifier(Uuid::parse_str(literal).unwrap())
    );
}

#[test]
fn hx_002_promoted_text_does_not_round_trip() {
    let doc = mapping! { "code" => "01234567-89ab-cdef-0123-456789abcdef" };
    assert_ne!(decode(encode(&doc)), doc);
}

#[test]
fn hx_003_iso_text_is_promoted() {
    let decoded = decode(mapping! { "when" => "2024-01-15T10:30:00+00:00" });
    assert!(decoded["when"].is_timestamp());
}

#[test]
fn hx_004_length_boundary() {
    let exact = "01234567-89ab-cdef-0123-456789abcdef";
    assert_eq!(exact.len(), IDENTIFIER_LENGTH);

    let one_short = &exact[..IDENTIFIER_LENGTH - 1];
    let one_long = format!("{exact}0");
    let decoded = decode(mapping! {
        "exact" => exact,
        "short" => one_short,
        "long" => one_long.clone(),
    });
    assert!(decoded["exact"].is_identifier());
    assert_eq!(decoded["short"], Value::from(one_short));
    assert_eq!(decoded["long"], Value::from(one_long));
}

#[test]
fn hx_005_uuid_forms_other_than_hyphenated_stay_text() {
    let id = Uuid::parse_str(FIXTURE_ID).unwrap();
    let simple = id.simple().to_string();
    let braced = id.braced().to_string();
    let urn = id.urn().to_string();
    let decoded = decode(mapping! {
        "simple" => simple.clone(),
        "braced" => braced.clone(),
        "urn" => urn.clone(),
    });
    assert_eq!(decoded["simple"], Value::from(simple));
    assert_eq!(decoded["braced"], Value::from(braced));
    assert_eq!(decoded["urn"], Value::from(urn));
}

#[test]
fn hx_006_date_only_stays_text() {
    let decoded = decode(mapping! { "day" => "2024-01-15" });
    assert_eq!(decoded["day"], Value::from("2024-01-15"));
}

#[test]
fn hx_007_number_never_promoted() {
    let decoded = decode(mapping! { "n" => 20240115i64 });
    assert_eq!(decoded["n"], Value::from(20240115i64));
}

#[test]
fn tg_001_tagged_format_keeps_look_alike_text() {
    let codec = tagged_codec();
    let mut doc = fixture();
    doc.insert(
        "code".to_string(),
        Value::from("01234567-89ab-cdef-0123-456789abcdef"),
    );
    doc.insert("when".to_string(), Value::from(FIXTURE_TS));

    let encoded = codec.encode(&doc);
    assert_eq!(
        encoded["id"],
        Value::from(mapping! { "$type" => "uuid", "$value" => FIXTURE_ID })
    );
    assert_eq!(
        encoded["ts"],
        Value::from(mapping! { "$type" => "datetime", "$value" => FIXTURE_TS })
    );

    let decoded = codec.decode(encoded);
    assert_eq!(decoded, doc);
    assert!(decoded["code"].is_text());
    assert!(decoded["when"].is_text());
}

#[test]
fn tg_002_tagged_and_heuristic_are_not_interchangeable() {
    let tagged = tagged_codec();
    let written = tagged.encode(&fixture());
    let read_heuristically = decode(written);
    assert!(read_heuristically["id"].is_mapping());
}
