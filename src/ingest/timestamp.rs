use chrono::{DateTime, NaiveDateTime};

/// Formats tried in order. The first one is what PJM Data Miner exports.
const FORMATS: [&str; 7] = [
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%Y %I:%M %p",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M",
];

/// Best-effort timestamp parsing.
///
/// Offset-aware RFC 3339 values keep their wall-clock time.
#[must_use]
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .or_else(|| {
            DateTime::parse_from_rfc3339(value).ok().map(|timestamp| timestamp.naive_local())
        })
}
