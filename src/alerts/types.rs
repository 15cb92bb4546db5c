//! Alert domain types
//!
//! A notification is constructed on a state transition, dispatched to the
//! configured channels, and discarded.

use crate::domain::Threshold;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of a threshold crossing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertKind {
    /// Utilization rose to or above the threshold
    Alert,
    /// Utilization dropped back below the threshold
    Recovery,
}

impl fmt::Display for AlertKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Alert => write!(f, "alert"),
            Self::Recovery => write!(f, "recovery"),
        }
    }
}

/// A threshold-crossing notification
///
/// Carries the sample that caused the transition and the configured
/// threshold; both appear in the rendered message text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Notification {
    /// Crossing direction
    pub kind: AlertKind,
    /// Utilization percentage at the time of the crossing
    pub usage_percent: f64,
    /// Configured threshold
    pub threshold: Threshold,
}

impl Notification {
    /// Create an alert notification
    pub fn alert(usage_percent: f64, threshold: Threshold) -> Self {
        Self {
            kind: AlertKind::Alert,
            usage_percent,
            threshold,
        }
    }

    /// Create a recovery notification
    pub fn recovery(usage_percent: f64, threshold: Threshold) -> Self {
        Self {
            kind: AlertKind::Recovery,
            usage_percent,
            threshold,
        }
    }

    /// Render the message text sent to every channel
    ///
    /// Usage is formatted to two decimal places; the threshold keeps its
    /// configured precision with at least one decimal digit.
    pub fn text(&self) -> String {
        match self.kind {
            AlertKind::Alert => format!(
                "Memory usage high: {:.2}% (threshold: {}%)",
                self.usage_percent, self.threshold
            ),
            AlertKind::Recovery => format!(
                "Memory usage back to normal: {:.2}% (threshold: {}%)",
                self.usage_percent, self.threshold
            ),
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text())
    }
}
