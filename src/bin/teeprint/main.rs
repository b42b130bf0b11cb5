// teeprint - print to stdout and tee every message into a log file

mod cli;
mod config;

use anyhow::Result;
use clap::Parser;
use std::io::{self, BufRead};
use tracing_subscriber::EnvFilter;

use cli::Cli;
use config::resolve_config;
use teeprint::log::{LogSink, PrintOptions, Printer};

fn main() -> Result<()> {
    // Diagnostics go to stderr so they never mix with the tee'd stdout
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = resolve_config(&cli)?;
    tracing::debug!(?config, "resolved log sink config");

    let sink = LogSink::new(config)?;
    let mut printer = Printer::new(io::stdout(), sink);
    let options = PrintOptions::default().flush(cli.flush).end(cli.end.clone());

    if cli.messages.is_empty() {
        for line in io::stdin().lock().lines() {
            printer.print_with(&line?, &options)?;
        }
    } else {
        for message in &cli.messages {
            printer.print_with(message, &options)?;
        }
    }

    printer.sink().flush()?;
    Ok(())
}
