//! Calendar events derived from paper sessions.

use chrono::NaiveDateTime;

use crate::clock::Clock;
use crate::error::ScheduleResult;
use crate::paper::{Paper, PaperEvent};
use crate::recurrence::{
    WeeklyRule, exception_dates, first_occurrence_on_or_after, weekly_recurrence_rule,
};
use crate::time::{combine, parse_calendar_date};

/// Domain part appended to every generated UID.
pub const UID_DOMAIN: &str = "unischedule-ics";

/// A single recurring VEVENT, ready to be rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarEvent {
    pub uid: String,
    pub summary: String,
    pub description: String,
    pub location: String,
    pub dtstart: NaiveDateTime,
    pub dtend: NaiveDateTime,
    pub rrule: Option<WeeklyRule>,
    /// Occurrences removed because of breaks; never `Some(vec![])`
    pub exdate: Option<Vec<NaiveDateTime>>,
}

/// Build a best-effort unique identifier for a session.
///
/// `<code>-<title>-<weekday>-<HHMM>-<millis>-<suffix>@unischedule-ics`.
/// Uniqueness comes from the timestamp plus the clock's random suffix; it is
/// not a content hash, so two calls with identical inputs differ.
pub fn unique_id(
    clock: &dyn Clock,
    course_code: &str,
    session_title: &str,
    weekday: i64,
    start: &NaiveDateTime,
) -> String {
    format!(
        "{}-{}-{}-{}-{}-{}@{}",
        course_code,
        session_title,
        weekday,
        start.format("%H%M"),
        clock.unix_millis(),
        clock.random_suffix(),
        UID_DOMAIN
    )
}

/// Map one session of a paper to a recurring calendar event.
///
/// Start and end share the first-occurrence date; sessions never run past
/// midnight.
pub fn build_event(
    paper: &Paper,
    session: &PaperEvent,
    clock: &dyn Clock,
) -> ScheduleResult<CalendarEvent> {
    let course_start = parse_calendar_date(&paper.start_date)?;
    let course_end = parse_calendar_date(&paper.end_date)?;

    let first_day = first_occurrence_on_or_after(course_start, session.weekday)?;
    let dtstart = combine(first_day, &session.start_time)?;
    let dtend = combine(first_day, &session.end_time)?;

    let exdates = exception_dates(
        course_start,
        course_end,
        session.weekday,
        &session.start_time,
        &paper.breaks,
    )?;

    Ok(CalendarEvent {
        uid: unique_id(
            clock,
            &paper.code,
            &session.title,
            session.weekday,
            &dtstart,
        ),
        summary: format!("{} - {}", paper.code, session.title),
        description: describe(paper),
        location: session.location.clone(),
        dtstart,
        dtend,
        rrule: Some(weekly_recurrence_rule(course_end)),
        exdate: (!exdates.is_empty()).then_some(exdates),
    })
}

fn describe(paper: &Paper) -> String {
    match paper.memo() {
        Some(memo) => format!("{}\n\n{}", paper.title, memo),
        None => paper.title.clone(),
    }
}
