//! Mock notification channel for testing.
//!
//! Dispatcher and checker behavior depend on channel outcomes, so tests
//! (here and downstream) need channels that succeed or fail on demand
//! without a desktop session. [`MockChannel`] records every payload it is
//! handed and returns a configured outcome.

use std::sync::{Arc, Mutex};

use crate::notify::{DeliveryError, Notification, NotificationChannel};

/// A recording channel with a scripted outcome.
///
/// # Example
///
/// ```
/// use remind_core::{MockChannel, Notification, NotificationChannel};
///
/// let channel = MockChannel::new("toast");
/// let n = Notification {
///     title: "t".into(),
///     body: "b".into(),
///     important: false,
///     sound: None,
/// };
/// channel.deliver(&n).unwrap();
/// assert_eq!(channel.delivered().len(), 1);
/// ```
#[derive(Clone)]
pub struct MockChannel {
    label: &'static str,
    failure: Option<DeliveryError>,
    delivered: Arc<Mutex<Vec<Notification>>>,
}

impl MockChannel {
    /// A channel that always succeeds.
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            failure: None,
            delivered: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A channel that always fails with the given error.
    pub fn failing(label: &'static str, error: DeliveryError) -> Self {
        Self {
            label,
            failure: Some(error),
            delivered: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Every payload delivered so far, in order. Clones of this channel
    /// share the same record.
    pub fn delivered(&self) -> Vec<Notification> {
        self.delivered.lock().unwrap().clone()
    }

    /// Number of delivery attempts.
    pub fn delivery_count(&self) -> usize {
        self.delivered.lock().unwrap().len()
    }
}

impl NotificationChannel for MockChannel {
    fn name(&self) -> &'static str {
        self.label
    }

    fn deliver(&self, notification: &Notification) -> Result<(), DeliveryError> {
        self.delivered.lock().unwrap().push(notification.clone());
        match &self.failure {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}
