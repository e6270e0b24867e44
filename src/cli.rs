// src/cli.rs

//! CLI argument parsing using `clap`.
//!
//! The flag surface follows the classic `repeat(1)` utility:
//! `repeat [-dhv] [-J replstr] [-n num] [-s num] command [argument ...]`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `repeat`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "repeat",
    version,
    about = "Repeatedly execute a command, optionally substituting the invocation number.",
    long_about = None
)]
pub struct CliArgs {
    /// Replace every occurrence of REPLSTR in the command with the
    /// invocation number.
    #[arg(short = 'J', value_name = "REPLSTR")]
    pub replstr: Option<String>,

    /// Don't wait for each invocation; reap all children at the end.
    #[arg(short = 'd', overrides_with = "sleep")]
    pub detach: bool,

    /// Only repeat the command NUM times (default: forever).
    #[arg(short = 'n', value_name = "NUM", allow_negative_numbers = true)]
    pub count: Option<i64>,

    /// Sleep NUM seconds in between invocations.
    #[arg(
        short = 's',
        value_name = "NUM",
        overrides_with = "detach",
        allow_negative_numbers = true
    )]
    pub sleep: Option<i64>,

    /// Prefix output with the invocation number.
    #[arg(short = 'v')]
    pub verbose: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `REPEAT_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// The command to invoke, followed by its arguments.
    #[arg(
        value_name = "COMMAND",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub command: Vec<String>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::try_parse()`.
///
/// `main` decides the exit status: usage errors exit 1 like every other
/// configuration error, `--help` and `--version` exit 0.
pub fn try_parse() -> Result<CliArgs, clap::Error> {
    CliArgs::try_parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_from(args: &[&str]) -> CliArgs {
        CliArgs::try_parse_from(args).expect("arguments should parse")
    }

    #[test]
    fn command_arguments_are_passed_through_untouched() {
        let args = parse_from(&["repeat", "-n", "3", "ls", "-l", "-a"]);
        assert_eq!(args.count, Some(3));
        assert_eq!(args.command, vec!["ls", "-l", "-a"]);
    }

    #[test]
    fn replstr_and_verbose_are_parsed() {
        let args = parse_from(&["repeat", "-v", "-J", "{}", "echo", "item-{}"]);
        assert!(args.verbose);
        assert_eq!(args.replstr.as_deref(), Some("{}"));
        assert_eq!(args.command, vec!["echo", "item-{}"]);
    }

    #[test]
    fn later_sleep_overrides_earlier_detach() {
        let args = parse_from(&["repeat", "-d", "-s", "2", "true"]);
        assert!(!args.detach);
        assert_eq!(args.sleep, Some(2));
    }

    #[test]
    fn later_detach_overrides_earlier_sleep() {
        let args = parse_from(&["repeat", "-s", "2", "-d", "true"]);
        assert!(args.detach);
        assert_eq!(args.sleep, None);
    }

    #[test]
    fn non_numeric_count_is_a_usage_error() {
        let err = CliArgs::try_parse_from(["repeat", "-n", "abc", "true"]).unwrap_err();
        assert!(err.use_stderr());
    }

    #[test]
    fn help_is_not_reported_as_an_error() {
        let err = CliArgs::try_parse_from(["repeat", "-h"]).unwrap_err();
        assert!(!err.use_stderr());
    }

    #[test]
    fn non_positive_count_is_left_for_config_validation() {
        let args = parse_from(&["repeat", "-n", "-1", "true"]);
        assert_eq!(args.count, Some(-1));
    }
}
