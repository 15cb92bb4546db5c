//! Alert notification channels
//!
//! Every produced notification is dispatched to all registered channels;
//! a failing channel is logged and the others still run.

use crate::alerts::types::Notification;
use crate::error::Result;
use std::io::{self, Write};

/// Notification channel trait
pub trait Notifier: Send + Sync {
    /// Deliver a notification
    fn notify(&self, notification: &Notification) -> Result<()>;

    /// Channel name for identification
    fn name(&self) -> &str;
}

/// Console notifier
///
/// Prints the rendered message to stdout, one line per notification. This
/// is the operator-visible echo of every message also sent remotely.
pub struct ConsoleNotifier;

impl ConsoleNotifier {
    /// Create a new console notifier
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: &Notification) -> Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        writeln!(handle, "{}", notification.text())?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}

/// Notification manager
///
/// Dispatches each notification to every registered channel. Channel
/// failures are logged and never abort the dispatch or the poll loop.
pub struct NotificationManager {
    notifiers: Vec<Box<dyn Notifier>>,
}

impl NotificationManager {
    /// Create an empty notification manager
    pub fn new() -> Self {
        Self {
            notifiers: Vec::new(),
        }
    }

    /// Add a notifier
    pub fn add_notifier(&mut self, notifier: Box<dyn Notifier>) {
        self.notifiers.push(notifier);
    }

    /// Dispatch a notification to all channels
    pub fn notify_all(&self, notification: &Notification) {
        for notifier in &self.notifiers {
            if let Err(e) = notifier.notify(notification) {
                log::error!("Failed to notify via {}: {}", notifier.name(), e);
            }
        }
    }

    /// Number of registered channels
    pub fn notifier_count(&self) -> usize {
        self.notifiers.len()
    }
}

impl Default for NotificationManager {
    fn default() -> Self {
        let mut manager = Self::new();
        manager.add_notifier(Box::new(ConsoleNotifier::new()));
        manager
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Threshold;
    use crate::mock::{FailingNotifier, RecordingNotifier};

    fn notification() -> Notification {
        Notification::alert(85.0, Threshold::new(80.0).unwrap())
    }

    #[test]
    fn test_console_notifier_name() {
        let notifier = ConsoleNotifier::new();
        assert_eq!(notifier.name(), "console");
    }

    #[test]
    fn test_console_notify_succeeds() {
        let notifier = ConsoleNotifier::new();
        assert!(notifier.notify(&notification()).is_ok());
    }

    #[test]
    fn test_manager_starts_empty() {
        let manager = NotificationManager::new();
        assert_eq!(manager.notifier_count(), 0);
    }

    #[test]
    fn test_manager_default_has_console() {
        let manager = NotificationManager::default();
        assert_eq!(manager.notifier_count(), 1);
    }

    #[test]
    fn test_notify_all_dispatches_to_every_channel() {
        let recorder = RecordingNotifier::new();
        let mut manager = NotificationManager::new();
        manager.add_notifier(Box::new(recorder.clone()));
        manager.add_notifier(Box::new(recorder.clone()));

        manager.notify_all(&notification());
        assert_eq!(recorder.messages().len(), 2);
    }

    #[test]
    fn test_failing_channel_does_not_block_others() {
        let recorder = RecordingNotifier::new();
        let mut manager = NotificationManager::new();
        manager.add_notifier(Box::new(FailingNotifier));
        manager.add_notifier(Box::new(recorder.clone()));

        manager.notify_all(&notification());
        assert_eq!(recorder.messages().len(), 1);
    }
}
