//! UTC-pinned timestamp parsing and validity window bounds.
use chrono::format::ParseErrorKind;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, ParseResult, TimeDelta, Utc};
use std::time::Duration;

use crate::error::CheckError;

/// Conventional hashcash `YYMMDDhhmmss` date layout.
pub const HASHCASH_DATE_FORMAT: &str = "%y%m%d%H%M%S";

/// Parse `value` with the strftime-style `format`, pinned to UTC.
///
/// An offset rendered by the format (`%z`) is honored and converted to UTC.
/// Without one the wall time is taken as UTC, and a date-only format yields
/// midnight UTC. The host timezone is never consulted.
pub fn parse_utc(value: &str, format: &str) -> ParseResult<DateTime<Utc>> {
    match DateTime::parse_from_str(value, format) {
        Ok(dt) => return Ok(dt.with_timezone(&Utc)),
        Err(err) if err.kind() != ParseErrorKind::NotEnough => return Err(err),
        Err(_) => {}
    }
    match NaiveDateTime::parse_from_str(value, format) {
        Ok(naive) => return Ok(naive.and_utc()),
        Err(err) if err.kind() != ParseErrorKind::NotEnough => return Err(err),
        Err(_) => {}
    }
    let date = NaiveDate::parse_from_str(value, format)?;
    Ok(date.and_time(NaiveTime::MIN).and_utc())
}

/// Total span centered on "now" within which a puzzle timestamp is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidityWindow {
    span: Duration,
}

impl ValidityWindow {
    pub const fn new(span: Duration) -> Self {
        Self { span }
    }

    /// Inclusive `(lower, upper)` bounds around `now`.
    ///
    /// A side that falls outside the representable range is `None` and
    /// imposes no limit.
    pub fn bounds(&self, now: DateTime<Utc>) -> (Option<DateTime<Utc>>, Option<DateTime<Utc>>) {
        let half = TimeDelta::from_std(self.span / 2).unwrap_or(TimeDelta::MAX);
        (now.checked_sub_signed(half), now.checked_add_signed(half))
    }

    /// Compare `ts` against the bounds around `now`; "too old" is checked first.
    pub fn check(&self, ts: DateTime<Utc>, now: DateTime<Utc>) -> Result<(), CheckError> {
        let (lower, upper) = self.bounds(now);
        if lower.is_some_and(|lower| ts < lower) {
            return Err(CheckError::PuzzleExpired);
        }
        if upper.is_some_and(|upper| ts > upper) {
            return Err(CheckError::PuzzleNotYetValid);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(h: u32, m: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, h, m, s).unwrap()
    }

    #[test]
    fn parses_wall_time_as_utc() {
        let ts = parse_utc("2026-10-19T120000Z", "%Y-%m-%dT%H%M%SZ").unwrap();
        assert_eq!(ts, at(12, 0, 0));
    }

    #[test]
    fn parses_hashcash_layout() {
        let ts = parse_utc("261019120000", HASHCASH_DATE_FORMAT).unwrap();
        assert_eq!(ts, at(12, 0, 0));
    }

    #[test]
    fn explicit_offset_is_converted_to_utc() {
        let ts = parse_utc("20261019T140000+0200", "%Y%m%dT%H%M%S%z").unwrap();
        assert_eq!(ts, at(12, 0, 0));
    }

    #[test]
    fn date_only_format_is_midnight_utc() {
        let ts = parse_utc("20261019", "%Y%m%d").unwrap();
        assert_eq!(ts, at(0, 0, 0));
    }

    #[test]
    fn unix_seconds_format() {
        let expected = at(12, 0, 0);
        let ts = parse_utc(&expected.timestamp().to_string(), "%s").unwrap();
        assert_eq!(ts, expected);
    }

    #[test]
    fn rejects_garbage_and_empty_format() {
        assert!(parse_utc("not-a-date", "%Y-%m-%dT%H%M%SZ").is_err());
        assert!(parse_utc("2026-10-19T12", "%Y-%m-%dT%H:%M:%SZ").is_err());
        assert!(parse_utc("anything", "").is_err());
        assert!(parse_utc("", "").is_err());
    }

    #[test]
    fn time_only_format_has_no_date() {
        let err = parse_utc("120000", "%H%M%S").expect_err("date fields missing");
        assert_eq!(err.kind(), ParseErrorKind::NotEnough);
    }

    #[test]
    fn window_bounds_are_inclusive() {
        let window = ValidityWindow::new(Duration::from_secs(3600));
        let now = at(12, 0, 0);

        assert_eq!(window.check(at(11, 30, 0), now), Ok(()));
        assert_eq!(window.check(at(12, 30, 0), now), Ok(()));
        assert_eq!(window.check(at(11, 29, 59), now), Err(CheckError::PuzzleExpired));
        assert_eq!(
            window.check(at(12, 30, 1), now),
            Err(CheckError::PuzzleNotYetValid)
        );
    }

    #[test]
    fn zero_window_accepts_only_now() {
        let window = ValidityWindow::new(Duration::ZERO);
        let now = at(12, 0, 0);
        assert_eq!(window.check(now, now), Ok(()));
        assert_eq!(window.check(at(11, 59, 59), now), Err(CheckError::PuzzleExpired));
        assert_eq!(
            window.check(at(12, 0, 1), now),
            Err(CheckError::PuzzleNotYetValid)
        );
    }

    #[test]
    fn unrepresentable_window_is_open() {
        let window = ValidityWindow::new(Duration::MAX);
        let now = at(12, 0, 0);
        let (lower, upper) = window.bounds(now);
        assert!(lower.is_none());
        assert!(upper.is_none());
        assert_eq!(window.check(DateTime::<Utc>::MIN_UTC, now), Ok(()));
        assert_eq!(window.check(DateTime::<Utc>::MAX_UTC, now), Ok(()));
    }
}
