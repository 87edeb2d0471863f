use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::error::{Error, Result};

/// Parses an upstream closing date.
///
/// Accepts RFC 3339 (`2025-12-31T23:59:59.000Z`), a zone-less timestamp
/// (read as UTC) or a bare calendar date (midnight UTC). Anything else is
/// rejected rather than guessed at.
pub fn parse_closing_date(raw: &str) -> Result<DateTime<Utc>> {
    let trimmed = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(naive.and_utc());
    }
    if let Some(midnight) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
    {
        return Ok(midnight.and_utc());
    }

    Err(Error::Mapping(format!("unparseable closing date `{}`", raw)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn parses_rfc3339_with_offset() {
        let parsed = parse_closing_date("2026-01-31T23:59:59+01:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2026, 1, 31, 22, 59, 59).unwrap());
    }

    #[test]
    fn bare_date_is_midnight_utc() {
        let parsed = parse_closing_date("2025-06-30").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2025, 6, 30, 0, 0, 0).unwrap());
    }

    #[test]
    fn zone_less_timestamp_is_read_as_utc() {
        let parsed = parse_closing_date("2025-06-30T12:00:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2025, 6, 30, 12, 0, 0).unwrap());
    }

    #[test]
    fn rejects_display_strings() {
        let err = parse_closing_date("20 December 2025").unwrap_err();
        assert!(matches!(err, Error::Mapping(_)));
    }
}
