//! TUI rendering for papers and previewed sessions.
//!
//! Extension trait plus helpers that add colored terminal output to
//! unischedule-core types using owo_colors.

use std::path::Path;

use chrono::NaiveDateTime;
use owo_colors::OwoColorize;
use unischedule_core::{CalendarEvent, Paper};

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Paper {
    fn render(&self) -> String {
        format!("📚 {} {}", self.code.bold(), self.title)
    }
}

impl Render for CalendarEvent {
    fn render(&self) -> String {
        format!(
            "{} {} {}",
            self.summary.green(),
            format!(
                "{}–{}",
                self.dtstart.format("%a %H:%M"),
                self.dtend.format("%H:%M")
            )
            .dimmed(),
            self.location.dimmed()
        )
    }
}

/// A session followed by its occurrences; break dates are shown dimmed.
pub fn render_session(event: &CalendarEvent, occurrences: &[NaiveDateTime]) -> String {
    let mut rows: Vec<(NaiveDateTime, bool)> =
        occurrences.iter().map(|dt| (*dt, false)).collect();
    rows.extend(event.exdate.iter().flatten().map(|dt| (*dt, true)));
    rows.sort();
    rows.dedup();

    let mut lines = vec![format!("   {}", event.render())];
    for (dt, excluded) in rows {
        let date = dt.format("%a %d %b %Y").to_string();
        if excluded {
            lines.push(format!("      {}", format!("{date} (break)").dimmed()));
        } else {
            lines.push(format!("      {date}"));
        }
    }

    if occurrences.is_empty() {
        lines.push(format!("      {}", "no occurrences".yellow()));
    }

    lines.join("\n")
}

/// One-line summary printed after `convert`.
pub fn render_convert_summary(written: usize, sessions: usize, output: &Path) -> String {
    let mut line = format!(
        "{}",
        format!("Wrote {} events to {}", written, output.display()).green()
    );

    let skipped = sessions.saturating_sub(written);
    if skipped > 0 {
        line.push_str(&format!(
            " {}",
            format!("({skipped} skipped, see warnings above)").yellow()
        ));
    }

    line
}
