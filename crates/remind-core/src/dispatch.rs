//! Channel selection and delivery aggregation.
//!
//! The dispatcher maps a due reminder onto its channels: normal reminders
//! get a toast; important reminders get the popup plus audio, with the
//! two halves kept independent so a broken sound asset never suppresses
//! the popup (and a dismissed popup never cuts the sound short).

use tracing::debug;

use remind_types::{Reminder, Settings};

use crate::channels::{PopupChannel, SoundChannel, ToastChannel};
use crate::notify::{DeliveryError, Notification, NotificationChannel};

/// Outcome of one channel's delivery attempt.
#[derive(Debug)]
pub struct ChannelOutcome {
    pub channel: &'static str,
    pub result: Result<(), DeliveryError>,
}

/// Per-reminder delivery summary across all involved channels.
#[derive(Debug, Default)]
pub struct DeliveryReport {
    pub outcomes: Vec<ChannelOutcome>,
}

impl DeliveryReport {
    /// At least one channel reached the user.
    pub fn delivered(&self) -> bool {
        self.outcomes.iter().any(|o| o.result.is_ok())
    }

    /// Every involved channel succeeded.
    pub fn fully_delivered(&self) -> bool {
        self.outcomes.iter().all(|o| o.result.is_ok())
    }

    /// The channels that failed, with their reasons.
    pub fn failures(&self) -> impl Iterator<Item = (&'static str, &DeliveryError)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().err().map(|e| (o.channel, e)))
    }
}

/// Routes due reminders to their notification channels.
pub struct Dispatcher {
    toast: Box<dyn NotificationChannel>,
    popup: Box<dyn NotificationChannel>,
    sound: Box<dyn NotificationChannel>,
}

impl Dispatcher {
    /// A dispatcher over explicit channels. Tests pass mocks here.
    pub fn new(
        toast: Box<dyn NotificationChannel>,
        popup: Box<dyn NotificationChannel>,
        sound: Box<dyn NotificationChannel>,
    ) -> Self {
        Self {
            toast,
            popup,
            sound,
        }
    }

    /// The real desktop channels, with the given ceiling on audio length.
    pub fn desktop(max_sound_secs: f32) -> Self {
        Self::new(
            Box::new(ToastChannel::default()),
            Box::new(PopupChannel),
            Box::new(SoundChannel {
                max_secs: max_sound_secs,
            }),
        )
    }

    /// Deliver one due reminder.
    ///
    /// Never returns an error: every per-channel failure is captured in
    /// the report so the caller can log it and move on to the next
    /// reminder.
    pub fn dispatch(&self, reminder: &Reminder, settings: &Settings) -> DeliveryReport {
        let notification = Notification::for_reminder(reminder, settings);
        debug!(
            "dispatching '{}' ({})",
            reminder.title,
            if reminder.important {
                "popup+sound"
            } else {
                "toast"
            }
        );

        let mut report = DeliveryReport::default();
        if !notification.important {
            report.outcomes.push(ChannelOutcome {
                channel: self.toast.name(),
                result: self.toast.deliver(&notification),
            });
            return report;
        }

        // Audio runs on its own thread: the popup blocks until dismissed,
        // and neither half may gate the other.
        let (sound_outcome, popup_outcome) = std::thread::scope(|scope| {
            let sound_handle = notification
                .sound
                .is_some()
                .then(|| scope.spawn(|| self.sound.deliver(&notification)));

            let popup_result = self.popup.deliver(&notification);

            let sound_result = sound_handle.map(|handle| {
                handle.join().unwrap_or_else(|_| {
                    Err(DeliveryError::Backend(
                        "sound playback thread panicked".to_string(),
                    ))
                })
            });
            (sound_result, popup_result)
        });

        report.outcomes.push(ChannelOutcome {
            channel: self.popup.name(),
            result: popup_outcome,
        });
        if let Some(result) = sound_outcome {
            report.outcomes.push(ChannelOutcome {
                channel: self.sound.name(),
                result,
            });
        }
        report
    }
}
