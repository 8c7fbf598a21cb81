//! ICS text generation.

use tracing::{debug, warn};

use crate::clock::Clock;
use crate::event::{CalendarEvent, build_event};
use crate::paper::Paper;
use crate::time::{current_timestamp, format_timestamp};

pub const PRODID: &str = "-//unischedule-ics//EN";
pub const VERSION: &str = "2.0";
pub const CALSCALE: &str = "GREGORIAN";

const CRLF: &str = "\r\n";

/// Every event built from a list of papers, in paper-then-session order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CalendarDocument {
    pub events: Vec<CalendarEvent>,
}

impl CalendarDocument {
    /// Build one event per session.
    ///
    /// A session that fails to build is logged and left out; the rest of the
    /// papers are still converted.
    pub fn from_papers(papers: &[Paper], clock: &dyn Clock) -> Self {
        let mut events = Vec::new();

        for paper in papers {
            for session in &paper.events {
                match build_event(paper, session, clock) {
                    Ok(event) => events.push(event),
                    Err(e) => {
                        warn!(
                            course = %paper.code,
                            session = %session.title,
                            error = %e,
                            "Skipping session that could not be converted"
                        );
                    }
                }
            }
        }

        debug!(papers = papers.len(), events = events.len(), "built calendar events");
        CalendarDocument { events }
    }

    /// Serialize the full VCALENDAR. Lines are CRLF-separated with no trailing CRLF.
    pub fn render(&self, clock: &dyn Clock) -> String {
        let mut blocks = vec![
            "BEGIN:VCALENDAR".to_string(),
            format!("VERSION:{VERSION}"),
            format!("PRODID:{PRODID}"),
            format!("CALSCALE:{CALSCALE}"),
        ];

        blocks.extend(self.events.iter().map(|event| render_event(event, clock)));
        blocks.push("END:VCALENDAR".to_string());

        blocks.join(CRLF)
    }
}

/// Convert papers straight to ICS text. Never fails; bad sessions are skipped.
pub fn convert(papers: &[Paper], clock: &dyn Clock) -> String {
    CalendarDocument::from_papers(papers, clock).render(clock)
}

/// Render a single VEVENT block. DTSTAMP is sampled from the clock on every call.
pub fn render_event(event: &CalendarEvent, clock: &dyn Clock) -> String {
    let mut lines = vec![
        "BEGIN:VEVENT".to_string(),
        format!("UID:{}", event.uid),
        format!("DTSTAMP:{}", current_timestamp(clock)),
        format!("DTSTART:{}", format_timestamp(&event.dtstart)),
        format!("DTEND:{}", format_timestamp(&event.dtend)),
        format!("SUMMARY:{}", event.summary),
        format!("DESCRIPTION:{}", event.description.replace('\n', "\\n")),
        format!("LOCATION:{}", event.location),
    ];

    if let Some(rule) = &event.rrule {
        lines.push(format!("RRULE:{rule}"));
    }

    // One EXDATE line, comma-separated
    if let Some(exdates) = &event.exdate {
        let values: Vec<String> = exdates.iter().map(format_timestamp).collect();
        lines.push(format!("EXDATE:{}", values.join(",")));
    }

    lines.push("END:VEVENT".to_string());
    lines.join(CRLF)
}
