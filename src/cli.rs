use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "unischedule")]
#[command(about = "Turn university course schedules into .ics calendar files")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert a papers JSON file into an .ics calendar
    Convert(ConvertArgs),
    /// Show the dates each session will actually meet on
    Preview(PreviewArgs),
}

#[derive(Args)]
pub struct ConvertArgs {
    /// Papers JSON file (an array of papers, or an object with a "papers" array)
    pub input: PathBuf,

    /// Where to write the calendar (defaults to `output` from config.toml)
    #[arg(short, long, conflicts_with = "stdout")]
    pub output: Option<PathBuf>,

    /// Print the calendar to stdout instead of writing a file
    #[arg(long)]
    pub stdout: bool,

    /// Freeze DTSTAMP and UIDs at this local time (e.g. "2025-07-12T09:00")
    #[arg(long)]
    pub stamp: Option<String>,
}

#[derive(Args)]
pub struct PreviewArgs {
    /// Papers JSON file
    pub input: PathBuf,

    /// Maximum occurrences to list per session (defaults to `preview_limit` from config.toml)
    #[arg(short, long)]
    pub limit: Option<u16>,
}
