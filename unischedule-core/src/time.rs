//! Date and wall-clock time normalization.
//!
//! Every value here is a naive local civil date or timestamp; no timezone is
//! ever attached. Parsing is deliberately permissive: out-of-range months,
//! days, hours and minutes roll over into the neighbouring unit the same way
//! calendar arithmetic does (February 30 becomes March 2, or March 1 in a
//! leap year; `25:00` becomes 01:00 the next day).

use chrono::{Months, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};

use crate::clock::Clock;
use crate::error::{ScheduleError, ScheduleResult};

/// ICS local ("floating") date-time layout: `YYYYMMDDTHHMMSS`.
pub const ICS_DATETIME_FORMAT: &str = "%Y%m%dT%H%M%S";

/// Parse `YYYY-MM-DD` into a civil date, rolling over out-of-range parts.
///
/// A missing or non-numeric part reads as 0 and rolls over like any other
/// out-of-range value; only leaving chrono's supported range is an error.
pub fn parse_calendar_date(date: &str) -> ScheduleResult<NaiveDate> {
    let out_of_range = || ScheduleError::DateOutOfRange(date.to_string());

    let mut parts = date.split('-');
    let year = read_number(parts.next());
    let month = read_number(parts.next());
    let day = read_number(parts.next());

    // Start from January 1st and let month/day offsets carry over.
    let year = i32::try_from(year).map_err(|_| out_of_range())?;
    let january_first = NaiveDate::from_ymd_opt(year, 1, 1).ok_or_else(out_of_range)?;
    let first_of_month = shift_months(january_first, month - 1).ok_or_else(out_of_range)?;

    TimeDelta::try_days(day - 1)
        .and_then(|offset| first_of_month.checked_add_signed(offset))
        .ok_or_else(out_of_range)
}

/// Overlay an `H:MM` / `HH:MM` wall-clock time onto a date, seconds zeroed.
///
/// Unreadable hours or minutes count as 0.
pub fn combine(date: NaiveDate, time: &str) -> ScheduleResult<NaiveDateTime> {
    let out_of_range = || ScheduleError::DateOutOfRange(format!("{date} {time}"));

    let mut parts = time.split(':');
    let hours = read_number(parts.next());
    let minutes = read_number(parts.next());

    let offset = TimeDelta::try_hours(hours)
        .zip(TimeDelta::try_minutes(minutes))
        .and_then(|(h, m)| h.checked_add(&m))
        .ok_or_else(out_of_range)?;

    date.and_time(NaiveTime::MIN)
        .checked_add_signed(offset)
        .ok_or_else(out_of_range)
}

/// Render a timestamp as `YYYYMMDDTHHMMSS` (no timezone suffix).
pub fn format_timestamp(timestamp: &NaiveDateTime) -> String {
    timestamp.format(ICS_DATETIME_FORMAT).to_string()
}

/// The clock's current wall-clock time in ICS layout.
pub fn current_timestamp(clock: &dyn Clock) -> String {
    format_timestamp(&clock.now())
}

fn read_number(part: Option<&str>) -> i64 {
    part.and_then(|p| p.trim().parse().ok()).unwrap_or(0)
}

fn shift_months(date: NaiveDate, months: i64) -> Option<NaiveDate> {
    let magnitude = Months::new(u32::try_from(months.unsigned_abs()).ok()?);
    if months >= 0 {
        date.checked_add_months(magnitude)
    } else {
        date.checked_sub_months(magnitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_calendar_date_plain() {
        assert_eq!(parse_calendar_date("2025-01-31").unwrap(), ymd(2025, 1, 31));
        assert_eq!(parse_calendar_date("2024-02-29").unwrap(), ymd(2024, 2, 29));
        assert_eq!(parse_calendar_date("2025-01-01").unwrap(), ymd(2025, 1, 1));
    }

    #[test]
    fn test_parse_calendar_date_rolls_over_day() {
        assert_eq!(parse_calendar_date("2025-02-30").unwrap(), ymd(2025, 3, 2));
        assert_eq!(parse_calendar_date("2024-02-30").unwrap(), ymd(2024, 3, 1));
        assert_eq!(parse_calendar_date("2025-04-00").unwrap(), ymd(2025, 3, 31));
    }

    #[test]
    fn test_parse_calendar_date_rolls_over_month() {
        assert_eq!(parse_calendar_date("2025-13-01").unwrap(), ymd(2026, 1, 1));
        assert_eq!(parse_calendar_date("2025-00-15").unwrap(), ymd(2024, 12, 15));
    }

    #[test]
    fn test_parse_calendar_date_reads_garbage_as_zero() {
        // year 0, month 0, day missing: Jan 1 of year 0, back one month, back one day
        assert_eq!(parse_calendar_date("invalid-date").unwrap(), ymd(-1, 11, 30));
        assert_eq!(parse_calendar_date("2025-ab-01").unwrap(), ymd(2024, 12, 1));
        assert_eq!(parse_calendar_date("2025-04").unwrap(), ymd(2025, 3, 31));
        assert_eq!(
            parse_calendar_date("2025-04-01T00:00:00Z").unwrap(),
            ymd(2025, 3, 31)
        );
    }

    #[test]
    fn test_parse_calendar_date_out_of_chrono_range() {
        assert!(matches!(
            parse_calendar_date("99999999999-01-01"),
            Err(ScheduleError::DateOutOfRange(_))
        ));
    }

    #[test]
    fn test_combine_times() {
        let date = ymd(2025, 1, 1);
        assert_eq!(format_timestamp(&combine(date, "00:00").unwrap()), "20250101T000000");
        assert_eq!(format_timestamp(&combine(date, "12:00").unwrap()), "20250101T120000");
        assert_eq!(format_timestamp(&combine(date, "23:59").unwrap()), "20250101T235900");
        assert_eq!(format_timestamp(&combine(date, "9:05").unwrap()), "20250101T090500");
    }

    #[test]
    fn test_combine_rolls_over_hours_and_minutes() {
        let date = ymd(2025, 1, 31);
        assert_eq!(format_timestamp(&combine(date, "25:00").unwrap()), "20250201T010000");
        assert_eq!(format_timestamp(&combine(date, "10:75").unwrap()), "20250131T111500");
    }

    #[test]
    fn test_combine_reads_garbage_as_zero() {
        let date = ymd(2025, 1, 1);
        assert_eq!(format_timestamp(&combine(date, "invalid").unwrap()), "20250101T000000");
        assert_eq!(format_timestamp(&combine(date, "ab:cd").unwrap()), "20250101T000000");
        assert_eq!(format_timestamp(&combine(date, "9").unwrap()), "20250101T090000");
        assert_eq!(format_timestamp(&combine(date, "14:xx").unwrap()), "20250101T140000");
    }

    #[test]
    fn test_format_timestamp_is_stable() {
        let ts = ymd(2025, 6, 30).and_hms_opt(23, 59, 59).unwrap();
        let first = format_timestamp(&ts);
        assert_eq!(first, "20250630T235959");
        assert_eq!(first.len(), 15);
        assert_eq!(first, format_timestamp(&ts));
    }

    #[test]
    fn test_current_timestamp_reads_clock() {
        let clock = FixedClock::new(ymd(2025, 7, 12).and_hms_opt(8, 30, 0).unwrap());
        assert_eq!(current_timestamp(&clock), "20250712T083000");
    }
}
