//! CLI entrypoint for sew.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use sew::cli::{Cli, Config, LOG_ENV};
use sew::{output, ActionRegistry};

fn main() -> ExitCode {
    let config = Cli::parse().into_config();
    init_tracing(&config);

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("sew: {e}");
            ExitCode::FAILURE
        }
    }
}

// stdout carries the packet, so logs go to stderr
fn init_tracing(config: &Config) {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(config: &Config) -> sew::Result<()> {
    if config.list_actions {
        output::write_action_list(&mut io::stdout().lock(), &ActionRegistry::new())?;
        return Ok(());
    }

    let packet = sew::compose(&config.actions, config.seed)?;

    match &config.output {
        Some(path) => output::write_file(path, &packet, config.format)?,
        None => output::write_stdout(&packet, config.format)?,
    }
    tracing::debug!(bytes = packet.len(), "packet written");
    Ok(())
}
