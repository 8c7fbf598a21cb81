mod cli;
mod commands;
mod config;
mod logging;
mod papers;
mod render;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};
use crate::config::UnischeduleConfig;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    let config = UnischeduleConfig::load()?;

    match command {
        Command::Convert(args) => commands::convert::run(args, &config),
        Command::Preview(args) => commands::preview::run(args, &config),
    }
}
