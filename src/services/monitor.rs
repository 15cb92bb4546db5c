//! Poll loop monitor
//!
//! Runs the sample/evaluate/sleep loop until externally terminated.

use crate::error::AppError;
use crate::sampler::MemorySource;
use crate::services::AlertService;

use std::time::Duration;

/// Configuration for the monitor
#[derive(Debug, Clone)]
pub struct MonitorConfig {
    /// Interval between poll ticks
    pub interval: Duration,
    /// Whether to exit after one tick
    pub once: bool,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(60),
            once: false,
        }
    }
}

/// Poll loop monitor
///
/// Single-threaded: each tick samples, evaluates, then blocks in sleep.
/// There is no overlap between iterations and no pending-notification
/// queue.
pub struct Monitor {
    config: MonitorConfig,
    service: AlertService,
}

impl Monitor {
    /// Create a new monitor with the given configuration
    pub fn new(config: MonitorConfig, service: AlertService) -> Self {
        Self { config, service }
    }

    /// Execute a single poll tick
    ///
    /// A sampler failure is fatal and propagates; a broken metrics source
    /// would otherwise make the monitor silently stop protecting against
    /// real memory pressure.
    pub fn tick<S: MemorySource>(&mut self, source: &mut S) -> Result<(), AppError> {
        let usage = source.sample()?;
        log::debug!("memory usage {:.2}%", usage.percent());
        self.service.observe(&usage);
        Ok(())
    }

    /// Run the poll loop
    pub fn run<S: MemorySource>(&mut self, source: &mut S) -> Result<(), AppError> {
        loop {
            self.tick(source)?;

            if self.config.once {
                log::info!("Single tick completed, exiting");
                break;
            }

            std::thread::sleep(self.config.interval);
        }

        Ok(())
    }

    /// Get the monitor configuration
    pub fn config(&self) -> &MonitorConfig {
        &self.config
    }

    /// Whether an alert is currently outstanding
    pub fn is_alerting(&self) -> bool {
        self.service.is_alerting()
    }
}
