//! memwatch - host memory monitor with Slack alerting
//!
//! A command-line tool that polls memory utilization and posts a Slack
//! message when usage crosses a configured threshold.

use clap::Parser;
use memwatch::cli::args::{generate_completions, Cli, Commands};
use memwatch::commands::{run_check, run_watch};
use memwatch::error::AppError;

fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Set log level based on verbose flag
    if cli.verbose {
        log::set_max_level(log::LevelFilter::Debug);
    }

    // Run the appropriate command
    let result = run(&cli);

    if let Err(e) = result {
        log::error!("{}", e);
        print_error(&e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), AppError> {
    match &cli.command {
        Commands::Watch(args) => run_watch(args, cli.config.as_deref()),

        Commands::Check => run_check(cli.format),

        Commands::Completions { shell } => {
            generate_completions(*shell);
            Ok(())
        }
    }
}

fn print_error(err: &AppError) {
    eprintln!("Error: {}", err);

    // Print helpful hints for common errors
    match err {
        AppError::Config(memwatch::error::ConfigError::MissingToken) => {
            eprintln!();
            eprintln!("Hint: Export SLACK_BOT_TOKEN or pass --slack-token.");
            eprintln!("      Use --no-slack to run with console notifications only.");
        }
        AppError::Sampler(_) => {
            eprintln!();
            eprintln!("Hint: Memory statistics could not be read on this platform.");
        }
        _ => {}
    }
}
