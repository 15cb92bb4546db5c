//! Mock implementations for testing
//!
//! Provides a scriptable memory source and recording/failing notification
//! channels for unit testing without real metrics or network access.

use crate::alerts::{Notification, Notifier};
use crate::domain::MemoryUsage;
use crate::error::{AppError, DeliveryError, Result, SamplerError};
use crate::sampler::MemorySource;

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Memory source replaying a scripted sequence of utilization percentages
#[derive(Debug)]
pub struct MockSource {
    samples: VecDeque<MemoryUsage>,
    fail: bool,
}

impl MockSource {
    /// Create a source that yields the given percentages in order
    ///
    /// Samples are synthesized over a 10000-byte total so the derived
    /// percentage reproduces the scripted value exactly.
    pub fn new(percents: &[f64]) -> Self {
        let samples = percents
            .iter()
            .map(|&pct| MemoryUsage::new(10_000, (pct * 100.0).round() as u64))
            .collect();

        Self {
            samples,
            fail: false,
        }
    }

    /// Create a source whose every sample fails
    pub fn failing() -> Self {
        Self {
            samples: VecDeque::new(),
            fail: true,
        }
    }
}

impl MemorySource for MockSource {
    fn sample(&mut self) -> std::result::Result<MemoryUsage, SamplerError> {
        if self.fail {
            return Err(SamplerError::Unavailable("mock failure".to_string()));
        }

        self.samples
            .pop_front()
            .ok_or_else(|| SamplerError::Unavailable("mock source exhausted".to_string()))
    }
}

/// Notifier that records every delivered message text
#[derive(Clone)]
pub struct RecordingNotifier {
    messages: Arc<Mutex<Vec<String>>>,
}

impl RecordingNotifier {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self {
            messages: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Messages recorded so far, in delivery order
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl Default for RecordingNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: &Notification) -> Result<()> {
        self.messages.lock().unwrap().push(notification.text());
        Ok(())
    }

    fn name(&self) -> &str {
        "recording"
    }
}

/// Notifier whose every delivery fails
pub struct FailingNotifier;

impl Notifier for FailingNotifier {
    fn notify(&self, _notification: &Notification) -> Result<()> {
        Err(AppError::Delivery(DeliveryError::Api(
            "mock delivery failure".to_string(),
        )))
    }

    fn name(&self) -> &str {
        "failing"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Threshold;

    #[test]
    fn test_mock_source_replays_percentages() {
        let mut source = MockSource::new(&[50.0, 85.12]);
        assert_eq!(source.sample().unwrap().percent(), 50.0);
        assert_eq!(source.sample().unwrap().percent(), 85.12);
        assert!(source.sample().is_err());
    }

    #[test]
    fn test_failing_source() {
        let mut source = MockSource::failing();
        assert!(source.sample().is_err());
    }

    #[test]
    fn test_recording_notifier_records() {
        let recorder = RecordingNotifier::new();
        let notification = Notification::alert(85.0, Threshold::new(80.0).unwrap());

        recorder.notify(&notification).unwrap();
        assert_eq!(recorder.messages(), vec![notification.text()]);
    }

    #[test]
    fn test_failing_notifier_fails() {
        let notification = Notification::alert(85.0, Threshold::new(80.0).unwrap());
        assert!(FailingNotifier.notify(&notification).is_err());
    }
}
