//! CLI argument definitions using clap derive
//!
//! Defines all command-line arguments and subcommands. Secrets and
//! destinations fall back to environment variables when the flag is
//! absent; remaining gaps are filled from the config file and built-in
//! defaults.

use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// Host memory monitor with Slack alerting
///
/// Polls memory utilization and posts a message when usage crosses the
/// configured threshold, with a recovery message when it drops back.
#[derive(Parser, Debug)]
#[command(name = "memwatch")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "MEMWATCH_CONFIG")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the monitor loop
    Watch(WatchArgs),

    /// Sample memory usage once and print it
    Check,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Arguments for the watch command
#[derive(Parser, Debug)]
pub struct WatchArgs {
    /// Memory usage percent threshold to trigger an alert
    #[arg(short, long)]
    pub threshold: Option<f64>,

    /// Time interval in seconds between checks
    #[arg(short, long)]
    pub interval: Option<u64>,

    /// Slack Bot OAuth token
    #[arg(long, env = "SLACK_BOT_TOKEN", hide_env_values = true)]
    pub slack_token: Option<String>,

    /// Slack channel (name or ID) to post alerts
    #[arg(long, env = "SLACK_CHANNEL")]
    pub slack_channel: Option<String>,

    /// Run a single tick and exit
    #[arg(long)]
    pub once: bool,

    /// Print notifications to the console only, skip Slack delivery
    #[arg(long)]
    pub no_slack: bool,
}

/// Output format
#[derive(ValueEnum, Debug, Clone, Copy, Default)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format for machine parsing
    Json,
    /// Compact single-line format
    Compact,
}

/// Generate shell completions and print to stdout
pub fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_check() {
        let args = Cli::try_parse_from(["memwatch", "check"]).unwrap();
        assert!(matches!(args.command, Commands::Check));
    }

    #[test]
    fn test_cli_parse_verbose() {
        let args = Cli::try_parse_from(["memwatch", "-v", "check"]).unwrap();
        assert!(args.verbose);
    }

    #[test]
    fn test_cli_parse_watch_defaults() {
        let args = Cli::try_parse_from(["memwatch", "watch"]).unwrap();
        if let Commands::Watch(watch) = args.command {
            assert!(watch.threshold.is_none());
            assert!(watch.interval.is_none());
            assert!(!watch.once);
            assert!(!watch.no_slack);
        } else {
            panic!("Expected Watch command");
        }
    }

    #[test]
    fn test_cli_parse_watch_flags() {
        let args = Cli::try_parse_from([
            "memwatch",
            "watch",
            "--threshold",
            "90.5",
            "--interval",
            "30",
            "--slack-token",
            "xoxb-test",
            "--slack-channel",
            "#ops",
            "--once",
        ])
        .unwrap();

        if let Commands::Watch(watch) = args.command {
            assert_eq!(watch.threshold, Some(90.5));
            assert_eq!(watch.interval, Some(30));
            assert_eq!(watch.slack_token.as_deref(), Some("xoxb-test"));
            assert_eq!(watch.slack_channel.as_deref(), Some("#ops"));
            assert!(watch.once);
        } else {
            panic!("Expected Watch command");
        }
    }

    #[test]
    fn test_cli_parse_no_slack() {
        let args = Cli::try_parse_from(["memwatch", "watch", "--no-slack"]).unwrap();
        if let Commands::Watch(watch) = args.command {
            assert!(watch.no_slack);
        } else {
            panic!("Expected Watch command");
        }
    }

    #[test]
    fn test_cli_parse_format() {
        let args = Cli::try_parse_from(["memwatch", "--format", "json", "check"]).unwrap();
        assert!(matches!(args.format, OutputFormat::Json));
    }

    #[test]
    fn test_cli_rejects_non_numeric_threshold() {
        let result = Cli::try_parse_from(["memwatch", "watch", "--threshold", "high"]);
        assert!(result.is_err());
    }
}
