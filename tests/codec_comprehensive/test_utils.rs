//! Test utilities for the codec comprehensive tests
//!
//! Fixtures plus proptest strategies for typed trees.

#![allow(dead_code)]

pub use proptest::prelude::*;
pub use typedoc::{
    decode, encode, mapping, Codec, CodecConfig, Mapping, SequencePolicy, Timestamp, Uuid, Value,
    WireFormat,
};

use chrono::{DateTime, FixedOffset, Utc};

/// Identifier used by the reference fixture
pub const FIXTURE_ID: &str = "3fa85f64-5717-4562-b3fc-2c963f66afa6";

/// Timestamp used by the reference fixture
pub const FIXTURE_TS: &str = "2024-01-15T10:30:00+00:00";

/// `{"id": <Identifier>, "ts": <Timestamp>, "note": "hello"}`
pub fn fixture() -> Mapping {
    mapping! {
        "id" => Uuid::parse_str(FIXTURE_ID).unwrap(),
        "ts" => Timestamp::parse(FIXTURE_TS).unwrap(),
        "note" => "hello",
    }
}

/// Codec with arrays left untouched
pub fn opaque_codec() -> Codec {
    Codec::new(CodecConfig::reference())
}

/// Codec storing richer values in envelopes
pub fn tagged_codec() -> Codec {
    Codec::new(CodecConfig {
        sequences: SequencePolicy::Recurse,
        wire_format: WireFormat::Tagged,
    })
}

// =============================================================================
// Strategies
// =============================================================================

/// Timestamps across chrono's whole range, zone-aware or naive
///
/// Offsets are second-granular, so some render with an `±HH:MM:SS` suffix,
/// and years outside `0..=9999` render with a sign.
pub fn timestamp() -> impl Strategy<Value = Timestamp> {
    // One day of margin keeps the local wall-clock time in range for any offset.
    let min = DateTime::<Utc>::MIN_UTC.timestamp() + 86_400;
    let max = DateTime::<Utc>::MAX_UTC.timestamp() - 86_400;
    let secs = prop_oneof![
        min..=max,
        -62_167_219_200i64..253_402_300_800,
    ];
    let offset = prop_oneof![
        (-24i32..=24).prop_map(|quarters| quarters * 900),
        -86_399i32..=86_399,
    ];
    (secs, 0u32..1_000_000_000, prop::option::of(offset)).prop_map(
        |(secs, nanos, offset_secs)| {
            let utc = DateTime::<Utc>::from_timestamp(secs, nanos).unwrap();
            match offset_secs {
                Some(offset_secs) => {
                    let tz = FixedOffset::east_opt(offset_secs).unwrap();
                    Timestamp::Offset(utc.with_timezone(&tz))
                }
                None => Timestamp::Naive(utc.naive_utc()),
            }
        },
    )
}

/// Text that can never be mistaken for an identifier or a timestamp
pub fn plain_text() -> impl Strategy<Value = String> {
    "[a-z ]{0,40}"
}

/// Leaves that survive a trip through JSON text exactly
pub fn exact_leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        plain_text().prop_map(Value::Text),
        any::<u128>().prop_map(|n| Value::Identifier(Uuid::from_u128(n))),
        timestamp().prop_map(Value::Timestamp),
    ]
}

/// All leaves, including floats
pub fn leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        6 => exact_leaf(),
        1 => (-1.0e12..1.0e12f64).prop_map(Value::from),
    ]
}

fn entries<S>(value: S, max: usize) -> impl Strategy<Value = Mapping>
where
    S: Strategy<Value = Value>,
{
    prop::collection::vec(("[a-z]{1,8}", value), 0..max)
        .prop_map(|entries| entries.into_iter().collect())
}

/// Trees of mappings and sequences over `leaf`
pub fn tree_of<S>(leaf: S) -> impl Strategy<Value = Value>
where
    S: Strategy<Value = Value> + 'static,
{
    leaf.prop_recursive(4, 64, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Sequence),
            entries(inner, 6).prop_map(Value::Mapping),
        ]
    })
}

/// Trees of mappings only
pub fn mapping_tree_of<S>(leaf: S) -> impl Strategy<Value = Value>
where
    S: Strategy<Value = Value> + 'static,
{
    leaf.prop_recursive(4, 64, 6, |inner| entries(inner, 6).prop_map(Value::Mapping))
}

/// Top-level documents with arbitrary nesting
pub fn document() -> impl Strategy<Value = Mapping> {
    entries(tree_of(leaf()), 8)
}

/// Top-level documents that survive JSON text exactly
pub fn exact_document() -> impl Strategy<Value = Mapping> {
    entries(tree_of(exact_leaf()), 8)
}

/// Top-level documents with no sequences anywhere
pub fn sequence_free_document() -> impl Strategy<Value = Mapping> {
    entries(mapping_tree_of(leaf()), 8)
}

/// Primitive trees as read back from storage, including look-alike strings
pub fn stored_document() -> impl Strategy<Value = Mapping> {
    let text = prop_oneof![
        plain_text(),
        any::<u128>().prop_map(|n| Uuid::from_u128(n).hyphenated().to_string()),
        timestamp().prop_map(|t| t.to_iso_string()),
        "[0-9a-f-]{36}",
    ];
    let primitive = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        text.prop_map(Value::Text),
    ];
    entries(tree_of(primitive), 8)
}
