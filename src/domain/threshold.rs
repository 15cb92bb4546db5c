//! Alert threshold type
//!
//! A validated memory percentage above which an alert condition holds.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Memory utilization threshold in percent
///
/// Valid range is (0, 100]. The display form always carries at least one
/// decimal digit (`80.0`, `82.5`), matching the notification text format.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Threshold(f64);

impl Threshold {
    /// Create a validated threshold
    pub fn new(percent: f64) -> Result<Self, DomainError> {
        if !percent.is_finite() || percent <= 0.0 || percent > 100.0 {
            return Err(DomainError::InvalidThreshold(percent));
        }
        Ok(Self(percent))
    }

    /// The threshold value in percent
    pub fn percent(&self) -> f64 {
        self.0
    }

    /// Whether a sample at this utilization is at or above the threshold
    ///
    /// The crossing condition is inclusive: a sample exactly equal to the
    /// threshold counts as alerting.
    pub fn is_exceeded_by(&self, usage_percent: f64) -> bool {
        usage_percent >= self.0
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.fract() == 0.0 {
            write!(f, "{:.1}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_threshold() {
        let threshold = Threshold::new(80.0).unwrap();
        assert_eq!(threshold.percent(), 80.0);
    }

    #[test]
    fn test_invalid_thresholds() {
        assert!(Threshold::new(0.0).is_err());
        assert!(Threshold::new(-5.0).is_err());
        assert!(Threshold::new(100.5).is_err());
        assert!(Threshold::new(f64::NAN).is_err());
        assert!(Threshold::new(f64::INFINITY).is_err());
    }

    #[test]
    fn test_boundary_values() {
        assert!(Threshold::new(100.0).is_ok());
        assert!(Threshold::new(0.1).is_ok());
    }

    #[test]
    fn test_is_exceeded_by_inclusive() {
        let threshold = Threshold::new(80.0).unwrap();
        assert!(threshold.is_exceeded_by(80.0));
        assert!(threshold.is_exceeded_by(85.12));
        assert!(!threshold.is_exceeded_by(79.99));
    }

    #[test]
    fn test_display_whole_number() {
        let threshold = Threshold::new(80.0).unwrap();
        assert_eq!(threshold.to_string(), "80.0");
    }

    #[test]
    fn test_display_fractional() {
        let threshold = Threshold::new(82.5).unwrap();
        assert_eq!(threshold.to_string(), "82.5");
    }
}
