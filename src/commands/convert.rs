use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use tracing::info;
use unischedule_core::{CalendarDocument, Clock, FixedClock, SystemClock};

use crate::cli::ConvertArgs;
use crate::config::UnischeduleConfig;
use crate::papers::load_papers;
use crate::render::render_convert_summary;

pub fn run(args: ConvertArgs, config: &UnischeduleConfig) -> Result<()> {
    let papers = load_papers(&args.input)?;
    info!(path = %args.input.display(), papers = papers.len(), "loaded papers");

    let clock: Box<dyn Clock> = match args.stamp.as_deref() {
        Some(stamp) => Box::new(FixedClock::new(parse_stamp(stamp)?)),
        None => Box::new(SystemClock),
    };

    let document = CalendarDocument::from_papers(&papers, clock.as_ref());
    let ics = document.render(clock.as_ref());

    if args.stdout {
        return write_calendar(&mut io::stdout().lock(), &ics);
    }

    let output: PathBuf = args.output.unwrap_or_else(|| config.output_path());
    std::fs::write(&output, &ics)
        .with_context(|| format!("Could not write calendar to {}", output.display()))?;
    info!(path = %output.display(), bytes = ics.len(), "wrote calendar");

    let sessions: usize = papers.iter().map(|p| p.events.len()).sum();
    println!(
        "{}",
        render_convert_summary(document.events.len(), sessions, &output)
    );

    Ok(())
}

/// Write the document byte for byte; no newline is added after `END:VCALENDAR`.
fn write_calendar(out: &mut impl Write, ics: &str) -> Result<()> {
    out.write_all(ics.as_bytes())
        .and_then(|()| out.flush())
        .context("Could not write calendar to stdout")
}

/// Parse `--stamp` as a local date-time, with or without seconds.
fn parse_stamp(stamp: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(stamp, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(stamp, "%Y-%m-%dT%H:%M"))
        .with_context(|| {
            format!("Invalid --stamp '{stamp}'. Expected YYYY-MM-DDTHH:MM[:SS]")
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAPERS_JSON: &str = r#"[{
        "code": "COMPX101",
        "title": "Introduction to Programming",
        "startDate": "2025-02-24",
        "endDate": "2025-06-13",
        "breaks": [{ "title": "Easter", "startDate": "2025-04-14", "endDate": "2025-04-25" }],
        "events": [
            { "title": "Lecture", "weekday": 1, "startTime": "9:00", "endTime": "10:50", "location": "G.1.15" },
            { "title": "Lab", "weekday": 3, "startTime": "noon", "endTime": "13:50", "location": "R.G.13" }
        ]
    }]"#;

    #[test]
    fn test_parse_stamp_formats() {
        assert_eq!(
            parse_stamp("2025-07-12T09:30").unwrap().to_string(),
            "2025-07-12 09:30:00"
        );
        assert_eq!(
            parse_stamp("2025-07-12T09:30:15").unwrap().to_string(),
            "2025-07-12 09:30:15"
        );
        assert!(parse_stamp("yesterday").is_err());
    }

    #[test]
    fn test_convert_writes_reproducible_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("papers.json");
        std::fs::write(&input, PAPERS_JSON).unwrap();

        let write_once = |name: &str| {
            let output = dir.path().join(name);
            let args = ConvertArgs {
                input: input.clone(),
                output: Some(output.clone()),
                stdout: false,
                stamp: Some("2025-07-12T09:00".to_string()),
            };
            run(args, &UnischeduleConfig::default()).unwrap();
            std::fs::read_to_string(output).unwrap()
        };

        let first = write_once("a.ics");
        let second = write_once("b.ics");

        assert_eq!(first, second);
        assert!(first.starts_with("BEGIN:VCALENDAR\r\n"));
        assert!(first.ends_with("END:VCALENDAR"));
        // The lab's unreadable start time reads as midnight
        assert_eq!(first.matches("BEGIN:VEVENT").count(), 2);
        assert!(first.contains("DTSTART:20250226T000000"));
        assert!(first.contains("DTSTAMP:20250712T090000"));
        assert!(first.contains("EXDATE:20250414T090000,20250421T090000"));
    }

    #[test]
    fn test_write_calendar_adds_no_trailing_newline() {
        let ics = "BEGIN:VCALENDAR\r\nVERSION:2.0\r\nEND:VCALENDAR";
        let mut out = Vec::new();
        write_calendar(&mut out, ics).unwrap();

        assert_eq!(out, ics.as_bytes());
        assert!(!out.ends_with(b"\n"));
    }

    #[test]
    fn test_convert_uses_config_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("papers.json");
        std::fs::write(&input, "[]").unwrap();
        let output = dir.path().join("configured.ics");

        let config = UnischeduleConfig {
            output: output.clone(),
            ..UnischeduleConfig::default()
        };
        let args = ConvertArgs {
            input,
            output: None,
            stdout: false,
            stamp: None,
        };
        run(args, &config).unwrap();

        let ics = std::fs::read_to_string(output).unwrap();
        assert!(!ics.contains("BEGIN:VEVENT"));
        assert!(ics.contains("CALSCALE:GREGORIAN"));
    }
}
