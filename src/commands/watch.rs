//! Watch command implementation
//!
//! Resolves the effective configuration, wires the notification channels,
//! and runs the poll loop.

use crate::alerts::{ConsoleNotifier, NotificationManager, SlackNotifier};
use crate::cli::args::WatchArgs;
use crate::config::{Config, ConfigBuilder};
use crate::error::{AppError, Result};
use crate::sampler::SystemSource;
use crate::services::{AlertService, Monitor, MonitorConfig};

/// Execute the watch command
pub fn run_watch(args: &WatchArgs, config_path: Option<&str>) -> Result<()> {
    let config = resolve_config(args, config_path);

    let threshold = config.threshold()?;
    let interval = config.interval()?;
    let channel = config.slack.channel.clone();

    let notifier = build_notification_manager(&config, args.no_slack)?;

    println!(
        "Starting memory monitor: threshold={}%, interval={}s, channel={}",
        threshold,
        interval.as_secs(),
        channel
    );

    let service = AlertService::new(threshold, notifier);
    let monitor_config = MonitorConfig {
        interval,
        once: args.once,
    };

    let mut source = SystemSource::new();
    Monitor::new(monitor_config, service).run(&mut source)
}

/// Merge CLI arguments (with their environment fallbacks) over the config
/// file and built-in defaults
fn resolve_config(args: &WatchArgs, config_path: Option<&str>) -> Config {
    ConfigBuilder::new()
        .with_file(config_path)
        .with_threshold(args.threshold)
        .with_interval(args.interval)
        .with_channel(args.slack_channel.clone())
        .with_token(args.slack_token.clone())
        .build()
}

/// Build the channel set: console always, Slack unless disabled
///
/// The token check happens here, before the loop starts; a missing token
/// is a fatal configuration error unless Slack delivery is off.
fn build_notification_manager(config: &Config, no_slack: bool) -> Result<NotificationManager> {
    let mut manager = NotificationManager::new();
    manager.add_notifier(Box::new(ConsoleNotifier::new()));

    if no_slack {
        log::info!("Slack delivery disabled, console notifications only");
        return Ok(manager);
    }

    let token = config.require_token()?;
    let slack =
        SlackNotifier::new(token, config.slack.channel.clone()).map_err(AppError::Delivery)?;
    manager.add_notifier(Box::new(slack));

    Ok(manager)
}
