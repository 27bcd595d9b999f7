//! Date utilities for sitemap freshness.
//!
//! Content declares `lastmod` either as a bare date or a full instant:
//!
//! - `YYYY-MM-DD` (midnight UTC)
//! - RFC 3339, e.g. `2024-06-15T14:30:45Z` or `2024-06-15T14:30:45.123+02:00`
//!
//! Sitemaps always emit the instant as `YYYY-MM-DDTHH:MM:SS.mmmZ`.

use chrono::{DateTime, Local, NaiveDate, SecondsFormat, TimeZone, Utc};

/// Parse a declared `lastmod` value.
///
/// Returns `None` for anything that is neither a valid date nor a valid
/// RFC 3339 instant.
pub fn parse_lastmod(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    let date = NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()?;
    let midnight = date.and_hms_opt(0, 0, 0)?;
    Some(Utc.from_utc_datetime(&midnight))
}

/// Format as an ISO-8601 instant with millisecond precision.
///
/// Returns: `YYYY-MM-DDTHH:MM:SS.mmmZ`
pub fn to_iso_millis(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Check whether two instants fall on the same calendar day in local time.
pub fn same_local_day<A: TimeZone, B: TimeZone>(a: &DateTime<A>, b: &DateTime<B>) -> bool {
    a.with_timezone(&Local).date_naive() == b.with_timezone(&Local).date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Duration, Timelike};

    #[test]
    fn test_parse_date_only() {
        let dt = parse_lastmod("2024-06-15").unwrap();
        assert_eq!((dt.year(), dt.month(), dt.day()), (2024, 6, 15));
        assert_eq!((dt.hour(), dt.minute(), dt.second()), (0, 0, 0));
    }

    #[test]
    fn test_parse_rfc3339() {
        let dt = parse_lastmod("2024-06-15T14:30:45Z").unwrap();
        assert_eq!(dt.hour(), 14);
        assert_eq!(dt.minute(), 30);

        // Offsets are normalized to UTC
        let dt = parse_lastmod("2024-06-15T14:30:45+02:00").unwrap();
        assert_eq!(dt.hour(), 12);
    }

    #[test]
    fn test_parse_invalid() {
        assert!(parse_lastmod("").is_none());
        assert!(parse_lastmod("yesterday").is_none());
        assert!(parse_lastmod("2024-13-01").is_none());
        assert!(parse_lastmod("2024-02-30").is_none());
    }

    #[test]
    fn test_iso_millis_format() {
        let dt = parse_lastmod("2023-10-01T14:30:00Z").unwrap();
        assert_eq!(to_iso_millis(&dt), "2023-10-01T14:30:00.000Z");
    }

    #[test]
    fn test_same_local_day() {
        let now = Utc::now();
        assert!(same_local_day(&now, &now));
        assert!(!same_local_day(&now, &(now - Duration::days(2))));
        assert!(!same_local_day(&now, &(now + Duration::days(2))));
    }
}
