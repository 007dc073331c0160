//! Timestamp leaf type
//!
//! A timestamp is an instant with optional sub-second precision and an
//! optional timezone offset. Two shapes exist:
//!
//! - `Offset`: zone-aware, carries a fixed UTC offset
//! - `Naive`: wall-clock value with no offset
//!
//! ## Canonical Profile
//!
//! The encoder always emits exactly one ISO-8601 profile:
//!
//! | Shape  | Rendering                                  |
//! |--------|--------------------------------------------|
//! | Offset | `2024-01-15T10:30:00+00:00`                |
//! | Naive  | `2024-01-15T10:30:00`                      |
//!
//! The fraction is printed with 3, 6 or 9 digits and omitted when zero.
//! The offset is always numeric; UTC is `+00:00`, never `Z`. An offset that
//! is not a whole number of minutes is printed with seconds (`+05:30:15`).
//! Years outside `0..=9999` carry an explicit sign (`+10000`, `-0001`).
//!
//! ## Parsing
//!
//! [`Timestamp::parse`] is more lenient than the canonical profile so that
//! documents written by other producers still decode: `Z`, a space
//! separator, offsets with seconds, signed years and naive date-times are
//! accepted. Date-only strings such as `2024-01-15` and minute-precision
//! strings such as `2024-01-15T10:30` are not timestamps.

use chrono::{DateTime, FixedOffset, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use std::fmt;

/// Shortest string that can hold a full date-time (`YYYY-MM-DDTHH:MM:SS`)
pub const MIN_TIMESTAMP_LENGTH: usize = 19;

/// Date-time formats applied once any offset suffix has been split off
const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// An instant with optional sub-second precision and optional offset
///
/// Equality is semantic: two `Offset` timestamps are equal when they denote
/// the same instant, whatever their offsets. A `Naive` timestamp never
/// equals an `Offset` one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Timestamp {
    /// Zone-aware instant
    Offset(DateTime<FixedOffset>),
    /// Wall-clock value without offset
    Naive(NaiveDateTime),
}

impl Timestamp {
    /// Current instant in UTC
    ///
    /// Used wherever a server-side "now" default would otherwise be
    /// generated in SQL.
    pub fn now_utc() -> Self {
        Timestamp::Offset(DateTime::<FixedOffset>::from(Utc::now()))
    }

    /// Parse an ISO-8601 date-time
    ///
    /// Returns `None` for anything that is not a full date-time. Never panics.
    pub fn parse(s: &str) -> Option<Self> {
        if s.len() < MIN_TIMESTAMP_LENGTH {
            return None;
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Some(Timestamp::Offset(dt));
        }
        let (local, offset) = split_offset(s)?;
        let naive = NAIVE_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(local, fmt).ok())?;
        match offset {
            Some(offset) => offset
                .from_local_datetime(&naive)
                .single()
                .map(Timestamp::Offset),
            None => Some(Timestamp::Naive(naive)),
        }
    }

    /// Render in the canonical ISO-8601 profile
    pub fn to_iso_string(&self) -> String {
        match self {
            Timestamp::Offset(dt) if dt.offset().local_minus_utc() % 60 != 0 => {
                dt.format("%Y-%m-%dT%H:%M:%S%.f%::z").to_string()
            }
            Timestamp::Offset(dt) => dt.to_rfc3339_opts(SecondsFormat::AutoSi, false),
            Timestamp::Naive(dt) => dt.format("%Y-%m-%dT%H:%M:%S%.f").to_string(),
        }
    }

    /// Check if this timestamp carries no offset
    pub fn is_naive(&self) -> bool {
        matches!(self, Timestamp::Naive(_))
    }

    /// The UTC offset, if zone-aware
    pub fn offset(&self) -> Option<FixedOffset> {
        match self {
            Timestamp::Offset(dt) => Some(*dt.offset()),
            Timestamp::Naive(_) => None,
        }
    }

    /// The instant in UTC, if zone-aware
    pub fn to_utc(&self) -> Option<DateTime<Utc>> {
        match self {
            Timestamp::Offset(dt) => Some(dt.with_timezone(&Utc)),
            Timestamp::Naive(_) => None,
        }
    }
}

/// Split a trailing `Z`, `±HH:MM`, `±HHMM` or `±HH:MM:SS` offset off `s`
///
/// Returns `None` when a suffix is present but malformed, and `(s, None)`
/// when there is no suffix. The sign of a signed year is never mistaken for
/// an offset because only the time part is searched.
fn split_offset(s: &str) -> Option<(&str, Option<FixedOffset>)> {
    if let Some(local) = s.strip_suffix('Z').or_else(|| s.strip_suffix('z')) {
        return Some((local, FixedOffset::east_opt(0)));
    }
    let time_start = 1 + s
        .get(1..)?
        .find(|c: char| matches!(c, 'T' | 't' | ' '))?;
    match s[time_start..].rfind(|c: char| c == '+' || c == '-') {
        Some(at) => {
            let (local, offset) = s.split_at(time_start + at);
            Some((local, Some(parse_offset(offset)?)))
        }
        None => Some((s, None)),
    }
}

fn parse_offset(text: &str) -> Option<FixedOffset> {
    if !text.is_ascii() {
        return None;
    }
    let (sign, digits) = match text.as_bytes().first()? {
        b'+' => (1, &text[1..]),
        b'-' => (-1, &text[1..]),
        _ => return None,
    };
    let fields: Vec<&str> = if digits.contains(':') {
        digits.split(':').collect()
    } else if digits.len() == 4 {
        vec![&digits[..2], &digits[2..]]
    } else {
        return None;
    };
    if !(2..=3).contains(&fields.len()) {
        return None;
    }
    let mut units = [0i32; 3];
    for (unit, field) in units.iter_mut().zip(&fields) {
        if field.len() != 2 || !field.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        *unit = field.parse().ok()?;
    }
    let [hours, minutes, seconds] = units;
    if minutes >= 60 || seconds >= 60 {
        return None;
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60 + seconds))
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_iso_string())
    }
}

// ============================================================================
// From Implementations
// ============================================================================

impl From<DateTime<FixedOffset>> for Timestamp {
    fn from(dt: DateTime<FixedOffset>) -> Self {
        Timestamp::Offset(dt)
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Timestamp::Offset(dt.into())
    }
}

impl From<NaiveDateTime> for Timestamp {
    fn from(dt: NaiveDateTime) -> Self {
        Timestamp::Naive(dt)
    }
}

// ============================================================================
// Tests
// ============================================================================
