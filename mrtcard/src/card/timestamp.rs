// mrtcard/src/card/timestamp.rs

//! Block timestamps are stored as minutes since a fixed epoch.

use chrono::{DateTime, Duration, SecondsFormat, TimeZone, Utc};

/// Epoch of the on-card minute counter: 2024-01-01T00:00:00Z.
pub fn epoch() -> DateTime<Utc> {
    // 1_704_067_200 is 2024-01-01T00:00:00Z
    Utc.timestamp_opt(1_704_067_200, 0)
        .single()
        .unwrap_or_default()
}

/// Convert a raw minute offset into an absolute instant.
pub fn decode_timestamp(minutes: u16) -> DateTime<Utc> {
    epoch() + Duration::minutes(i64::from(minutes))
}

/// ISO-8601 rendering with millisecond precision and a `Z` suffix.
pub fn to_iso8601(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Inverse of [`decode_timestamp`] for instants inside the representable
/// range; used when re-encoding blocks.
pub fn encode_timestamp(ts: &DateTime<Utc>) -> Option<u16> {
    let minutes = (*ts - epoch()).num_minutes();
    u16::try_from(minutes).ok()
}
