//! Alert service
//!
//! Connects the edge detector to the notification channels during the
//! monitor loop.

use crate::alerts::{EdgeDetector, NotificationManager};
use crate::domain::{MemoryUsage, Threshold};

/// Alert evaluation and dispatch for memory samples
///
/// The detector state flips on a crossing before notifications go out, so
/// a delivery failure cannot re-trigger the same alert on later ticks.
pub struct AlertService {
    detector: EdgeDetector,
    notifier: NotificationManager,
}

impl AlertService {
    /// Create a new alert service
    pub fn new(threshold: Threshold, notifier: NotificationManager) -> Self {
        Self {
            detector: EdgeDetector::new(threshold),
            notifier,
        }
    }

    /// Evaluate a sample and dispatch any resulting notification
    pub fn observe(&mut self, usage: &MemoryUsage) {
        if let Some(notification) = self.detector.observe(usage) {
            log::debug!("{} at {:.2}%", notification.kind, usage.percent());
            self.notifier.notify_all(&notification);
        }
    }

    /// Whether an alert is currently outstanding
    pub fn is_alerting(&self) -> bool {
        self.detector.is_alerting()
    }

    /// The configured threshold
    pub fn threshold(&self) -> Threshold {
        self.detector.threshold()
    }
}
