//! Timestamp utilities

use chrono::{DateTime, SecondsFormat, Utc};

/// Get current UTC timestamp
pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Current UTC time as an RFC 3339 string with millisecond precision
///
/// Matches the `createdAt`/`timestamp` format clients already parse,
/// e.g. `2024-05-01T12:34:56.789Z`.
pub fn now_rfc3339() -> String {
    to_rfc3339(now())
}

/// Format a timestamp as RFC 3339 with millisecond precision and `Z` suffix
pub fn to_rfc3339(timestamp: DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}
