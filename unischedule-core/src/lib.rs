//! Core conversion pipeline for unischedule.
//!
//! Turns a list of papers (university courses with weekly sessions and breaks)
//! into a single iCalendar document:
//! - `time` parses dates and wall-clock times and formats ICS timestamps
//! - `recurrence` computes first occurrences, weekly rules and break exceptions
//! - `event` builds one `CalendarEvent` per session
//! - `ics` serializes events into the final document text
//! - `expand` lists the concrete dates a generated event occurs on
//!
//! The crate performs no I/O. The only global resource it touches is the
//! wall clock, reached through the [`Clock`] trait.

pub mod clock;
pub mod error;
pub mod event;
pub mod expand;
pub mod ics;
pub mod paper;
pub mod recurrence;
pub mod time;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{ScheduleError, ScheduleResult};
pub use event::{CalendarEvent, build_event, unique_id};
pub use expand::expand_occurrences;
pub use ics::{CalendarDocument, convert, render_event};
pub use paper::{Paper, PaperBreak, PaperEvent};
