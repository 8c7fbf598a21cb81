//! RRULE expansion for previewing generated events.
//!
//! Lists the concrete start times a calendar application would show for an
//! event: DTSTART, repeated by the weekly rule, minus the EXDATEs.

use chrono::NaiveDateTime;
use rrule::RRuleSet;

use crate::error::{ScheduleError, ScheduleResult};
use crate::event::CalendarEvent;
use crate::recurrence::WeeklyRule;
use crate::time::format_timestamp;

/// Build an iCalendar-format rule set for the rrule crate parser.
///
/// The rrule crate wants zoned datetimes, so floating times are written as
/// UTC and mapped back with `naive_utc()` afterwards.
fn build_rrule_string(event: &CalendarEvent, rrule: &WeeklyRule) -> String {
    let mut lines = vec![
        format!("DTSTART:{}Z", format_timestamp(&event.dtstart)),
        format!("RRULE:{rrule}Z"),
    ];

    for exdate in event.exdate.iter().flatten() {
        lines.push(format!("EXDATE:{}Z", format_timestamp(exdate)));
    }

    lines.join("\n")
}

/// Expand an event into at most `limit` occurrence start times.
///
/// A rule that ends before DTSTART (a paper with reversed dates) yields no
/// occurrences; an event without a rule yields just its DTSTART.
pub fn expand_occurrences(event: &CalendarEvent, limit: u16) -> ScheduleResult<Vec<NaiveDateTime>> {
    let Some(rrule) = &event.rrule else {
        return Ok(if limit == 0 { Vec::new() } else { vec![event.dtstart] });
    };

    if event.dtstart.date() > rrule.until {
        return Ok(Vec::new());
    }

    let rrule_set: RRuleSet = build_rrule_string(event, rrule).parse().map_err(|e| {
        ScheduleError::Recurrence(format!(
            "Failed to parse RRULE for event '{}': {}",
            event.uid, e
        ))
    })?;

    let result = rrule_set.all(limit);

    Ok(result.dates.iter().map(|dt| dt.naive_utc()).collect())
}
