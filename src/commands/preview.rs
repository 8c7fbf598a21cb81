use anyhow::Result;
use owo_colors::OwoColorize;
use unischedule_core::{SystemClock, build_event, expand_occurrences};

use crate::cli::PreviewArgs;
use crate::config::UnischeduleConfig;
use crate::papers::load_papers;
use crate::render::{Render, render_session};

pub fn run(args: PreviewArgs, config: &UnischeduleConfig) -> Result<()> {
    let papers = load_papers(&args.input)?;
    let limit = args.limit.unwrap_or(config.preview_limit);
    let clock = SystemClock;

    for paper in &papers {
        println!("{}", paper.render());

        for session in &paper.events {
            let preview = build_event(paper, session, &clock).and_then(|event| {
                let occurrences = expand_occurrences(&event, limit)?;
                Ok(render_session(&event, &occurrences))
            });

            match preview {
                Ok(lines) => println!("{lines}"),
                Err(e) => {
                    let message = format!("{} - {}: {}", paper.code, session.title, e);
                    println!("   {}", message.red());
                }
            }
        }

        println!();
    }

    Ok(())
}
