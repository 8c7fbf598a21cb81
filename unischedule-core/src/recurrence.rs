//! Weekly recurrence and break exceptions.
//!
//! A session repeats every week from its first occurrence until the end of
//! the paper. Breaks don't split the series; they become EXDATE entries for
//! each occurrence that falls inside them.

use std::fmt;

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime};
use tracing::debug;

use crate::error::{ScheduleError, ScheduleResult};
use crate::paper::PaperBreak;
use crate::time::{combine, parse_calendar_date};

const ONE_WEEK: Days = Days::new(7);

/// A `FREQ=WEEKLY` rule that runs until the last second of `until`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeeklyRule {
    pub until: NaiveDate,
}

impl fmt::Display for WeeklyRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FREQ=WEEKLY;UNTIL={}T235959", self.until.format("%Y%m%d"))
    }
}

/// Earliest date on or after `date` that falls on `weekday` (1 = Monday ... 7 = Sunday).
///
/// Returns `date` itself when it already matches. Any other integer is taken
/// modulo 7, so 0 and -7 mean Sunday and -1 means Saturday.
pub fn first_occurrence_on_or_after(date: NaiveDate, weekday: i64) -> ScheduleResult<NaiveDate> {
    let current = i64::from(date.weekday().number_from_monday());
    let advance = (weekday.rem_euclid(7) - current).rem_euclid(7);

    // rem_euclid(7) is always in 0..7
    date.checked_add_days(Days::new(advance.unsigned_abs()))
        .ok_or_else(|| ScheduleError::DateOutOfRange(date.to_string()))
}

/// Weekly rule terminating at the end of the paper's last day.
pub fn weekly_recurrence_rule(end_date: NaiveDate) -> WeeklyRule {
    WeeklyRule { until: end_date }
}

/// Occurrences of a session that fall inside any break.
///
/// Each break is walked on its own, in input order, and the results are
/// concatenated. Overlapping breaks therefore produce duplicates, and breaks
/// are not clipped to the paper's own date range.
pub fn exception_dates(
    course_start: NaiveDate,
    course_end: NaiveDate,
    weekday: i64,
    session_start_time: &str,
    breaks: &[PaperBreak],
) -> ScheduleResult<Vec<NaiveDateTime>> {
    let mut exdates = Vec::new();

    for brk in breaks {
        let break_start = parse_calendar_date(&brk.start_date)?;
        let break_end = parse_calendar_date(&brk.end_date)?;

        if break_end < course_start || break_start > course_end {
            debug!(
                break_title = %brk.title,
                %break_start,
                %break_end,
                "break lies outside the paper's date range"
            );
        }

        let mut day = first_occurrence_on_or_after(break_start, weekday)?;
        while day <= break_end {
            exdates.push(combine(day, session_start_time)?);
            day = day
                .checked_add_days(ONE_WEEK)
                .ok_or_else(|| ScheduleError::DateOutOfRange(day.to_string()))?;
        }
    }

    Ok(exdates)
}
