//! Command line and resolved configuration.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::output::OutputFormat;

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV: &str = "SEW_LOG";

/// Environment variable holding the `mac random` seed.
pub const SEED_ENV: &str = "SEW_SEED";

const AFTER_HELP: &str = "Actions are separated by '^', e.g.
  sew mac bc ^ mac random ^ vlan 10 ^ x 88 b5 ^ pad 60
Run with --list-actions for every action and its operands.";

#[derive(Debug, Parser)]
#[command(name = "sew", version)]
#[command(about = "Compose raw bytes (test frames, headers, padding) from actions")]
#[command(after_help = AFTER_HELP)]
pub struct Cli {
    /// Write to this file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Raw)]
    pub format: OutputFormat,

    /// Seed for `mac random` (default: OS entropy)
    #[arg(short, long, env = SEED_ENV)]
    pub seed: Option<u64>,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Print every action with its operands and exit
    #[arg(long)]
    pub list_actions: bool,

    /// Actions and operands, groups separated by '^'
    #[arg(
        value_name = "ACTION",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub actions: Vec<String>,
}

/// Resolved run configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub output: Option<PathBuf>,
    pub format: OutputFormat,
    pub seed: Option<u64>,
    /// Default filter when `SEW_LOG` is unset.
    pub log_level: &'static str,
    pub list_actions: bool,
    pub actions: Vec<String>,
}

impl Cli {
    /// Resolve the parsed arguments into a [`Config`].
    pub fn into_config(self) -> Config {
        Config {
            output: self.output,
            format: self.format,
            seed: self.seed,
            log_level: log_level(self.verbose),
            list_actions: self.list_actions,
            actions: self.actions,
        }
    }
}

fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Config {
        Cli::try_parse_from(std::iter::once("sew").chain(args.iter().copied()))
            .unwrap()
            .into_config()
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_actions_taken_verbatim() {
        let config = parse(&["x", "01", "^", "zero", "-1", "^", "pad", "--format"]);
        assert_eq!(
            config.actions,
            vec!["x", "01", "^", "zero", "-1", "^", "pad", "--format"]
        );
        assert_eq!(config.format, OutputFormat::Raw);
    }

    #[test]
    fn test_options_before_actions() {
        let config = parse(&["-f", "hex", "-vv", "--seed", "7", "-o", "out.bin", "mac", "random"]);
        assert_eq!(config.format, OutputFormat::Hex);
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.output, Some(PathBuf::from("out.bin")));
        assert_eq!(config.actions, vec!["mac", "random"]);
    }

    #[test]
    fn test_defaults() {
        let config = parse(&[]);
        assert!(config.actions.is_empty());
        assert!(!config.list_actions);
        assert_eq!(config.log_level, "warn");
        assert!(config.output.is_none());
    }

    #[test]
    fn test_log_level_saturates() {
        assert_eq!(log_level(3), "trace");
        assert_eq!(log_level(9), "trace");
    }
}
