//! Threshold-crossing edge detector
//!
//! Holds the single bit of alert state and produces a notification only on
//! a transition, never on repeated samples on the same side of the
//! threshold.

use crate::alerts::types::Notification;
use crate::domain::{MemoryUsage, Threshold};

/// Current side of the threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertState {
    /// Utilization below threshold, no alert outstanding
    Normal,
    /// Utilization at or above threshold, alert sent
    Alerting,
}

/// Edge-triggered threshold detector
///
/// Transitions:
/// - `Normal -> Alerting` when a sample is at or above the threshold
/// - `Alerting -> Normal` when a sample is strictly below the threshold
///
/// A sample exactly at the threshold alerts when normal and does not
/// recover when already alerting. The state flips on the transition
/// itself, independent of whether the produced notification is delivered.
#[derive(Debug)]
pub struct EdgeDetector {
    threshold: Threshold,
    state: AlertState,
}

impl EdgeDetector {
    /// Create a detector in the `Normal` state
    pub fn new(threshold: Threshold) -> Self {
        Self {
            threshold,
            state: AlertState::Normal,
        }
    }

    /// The configured threshold
    pub fn threshold(&self) -> Threshold {
        self.threshold
    }

    /// Current state
    pub fn state(&self) -> AlertState {
        self.state
    }

    /// Whether an alert is currently outstanding
    pub fn is_alerting(&self) -> bool {
        self.state == AlertState::Alerting
    }

    /// Evaluate a sample, returning a notification on a crossing
    pub fn observe(&mut self, usage: &MemoryUsage) -> Option<Notification> {
        let percent = usage.percent();

        match self.state {
            AlertState::Normal if self.threshold.is_exceeded_by(percent) => {
                self.state = AlertState::Alerting;
                Some(Notification::alert(percent, self.threshold))
            }
            AlertState::Alerting if !self.threshold.is_exceeded_by(percent) => {
                self.state = AlertState::Normal;
                Some(Notification::recovery(percent, self.threshold))
            }
            _ => None,
        }
    }
}
