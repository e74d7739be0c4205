use chrono::{DateTime, Duration, NaiveDate, Utc};

/// Produce the session expiry stamp persisted alongside the tokens,
/// `ttl_minutes` from now, RFC 3339 encoded.
pub fn session_expiry(ttl_minutes: i64) -> String {
    (Utc::now() + Duration::minutes(ttl_minutes)).to_rfc3339()
}

/// True when a stored expiry stamp lies in the past. An unparseable stamp
/// counts as expired so a damaged store forces a refresh instead of sending
/// stale credentials forever.
pub fn is_past(stamp: &str) -> bool {
    match DateTime::parse_from_rfc3339(stamp) {
        Ok(t) => t.with_timezone(&Utc) <= Utc::now(),
        Err(_) => true,
    }
}

/// Date rendering used by the StartDate/EndDate query parameters.
pub fn format_query_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
