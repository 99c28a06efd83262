use chrono::{DateTime, NaiveDateTime, Utc};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Renders `instant` as `YYYY-MM-DDTHH:MM:SSZ`, dropping sub-second precision.
pub fn format_timestamp(instant: DateTime<Utc>) -> String {
    instant.format(TIMESTAMP_FORMAT).to_string()
}

pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT)
        .ok()
        .map(|naive| naive.and_utc())
}

/// Whether a received timestamp lies within `max_skew_seconds` of `now`.
/// Unparsable timestamps are never fresh.
pub fn is_fresh(raw: &str, now: DateTime<Utc>, max_skew_seconds: u64) -> bool {
    let Some(signed_at) = parse_timestamp(raw) else {
        return false;
    };

    let max_skew = i64::try_from(max_skew_seconds).unwrap_or(i64::MAX);
    (now.timestamp() - signed_at.timestamp()).abs() <= max_skew
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};

    use super::{format_timestamp, is_fresh, parse_timestamp};

    #[test]
    fn formats_with_second_precision_and_zulu_suffix() {
        let instant = Utc
            .with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
            .single()
            .expect("valid instant")
            + Duration::milliseconds(987);

        assert_eq!(format_timestamp(instant), "2024-01-01T00:00:00Z");
    }

    #[test]
    fn parse_rejects_other_layouts() {
        assert!(parse_timestamp("2024-01-01T00:00:00Z").is_some());
        assert!(parse_timestamp("2024-01-01T00:00:00.123Z").is_none());
        assert!(parse_timestamp("2024-01-01T00:00:00+00:00").is_none());
        assert!(parse_timestamp("1704067200").is_none());
        assert!(parse_timestamp("").is_none());
    }

    #[test]
    fn freshness_is_symmetric_around_now() {
        let now = Utc
            .with_ymd_and_hms(2024, 1, 1, 0, 5, 0)
            .single()
            .expect("valid instant");

        assert!(is_fresh("2024-01-01T00:04:30Z", now, 30));
        assert!(is_fresh("2024-01-01T00:05:30Z", now, 30));
        assert!(!is_fresh("2024-01-01T00:04:29Z", now, 30));
        assert!(!is_fresh("2024-01-01T00:05:31Z", now, 30));
        assert!(!is_fresh("garbage", now, 30));
    }
}
